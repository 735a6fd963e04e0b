use rocket::http::{ContentType, Status};
use serde_json::{json, Value};

mod common;

fn setup_tenant(client: &rocket::local::blocking::Client) -> i64 {
    let room = common::create_room(client, "K001");
    let tenant = common::create_tenant(client, room["id"].as_i64().unwrap(), "Active");
    tenant["id"].as_i64().unwrap()
}

#[test]
fn test_create_payment_round_trip() {
    let client = common::setup();
    let tenant_id = setup_tenant(&client);

    let created = common::create_payment(&client, tenant_id, "2024-01-05");
    assert_eq!(created["tenant_id"], tenant_id);
    assert_eq!(created["period"], "Januari 2024");
    assert_eq!(created["amount"], 500000);
    assert_eq!(created["payment_date"], "2024-01-05");
    assert_eq!(created["method"], "Transfer");
    assert_eq!(created["status"], "Paid");

    let id = created["id"].as_i64().unwrap();
    let fetched = common::get_json(&client, &format!("/api/payments/{}", id));
    assert_eq!(fetched, created);
}

#[test]
fn test_get_payment_missing_returns_null() {
    let client = common::setup();

    let fetched = common::get_json(&client, "/api/payments/99999");
    assert_eq!(fetched, Value::Null);
}

#[test]
fn test_create_payment_with_unknown_tenant_fails() {
    let client = common::setup();

    let response = client
        .post("/api/payments")
        .header(ContentType::JSON)
        .body(
            json!({
                "tenant_id": 99999,
                "period": "Januari 2024",
                "amount": 500000,
                "payment_date": "2024-01-05",
                "method": "Transfer",
                "proof_url": null,
                "status": "Paid",
                "remarks": null
            })
            .to_string(),
        )
        .dispatch();

    assert_eq!(response.status(), Status::UnprocessableEntity);
    // Nothing was persisted
    assert_eq!(common::get_json(&client, "/api/payments"), json!([]));
}

#[test]
fn test_create_payment_rejects_non_positive_amount() {
    let client = common::setup();
    let tenant_id = setup_tenant(&client);

    let response = client
        .post("/api/payments")
        .header(ContentType::JSON)
        .body(
            json!({
                "tenant_id": tenant_id,
                "period": "Januari 2024",
                "amount": 0,
                "payment_date": "2024-01-05",
                "method": "Cash",
                "proof_url": null,
                "status": "Unpaid",
                "remarks": null
            })
            .to_string(),
        )
        .dispatch();

    assert_eq!(response.status(), Status::BadRequest);
}

#[test]
fn test_payments_by_tenant_sorted_by_date_desc() {
    let client = common::setup();
    let tenant_id = setup_tenant(&client);

    common::create_payment(&client, tenant_id, "2024-01-05");
    common::create_payment(&client, tenant_id, "2024-02-10");
    common::create_payment(&client, tenant_id, "2024-01-08");

    let payments = common::get_json(&client, &format!("/api/tenants/{}/payments", tenant_id));
    let dates: Vec<&str> = payments
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["payment_date"].as_str().unwrap())
        .collect();

    assert_eq!(dates, vec!["2024-02-10", "2024-01-08", "2024-01-05"]);
}

#[test]
fn test_payments_by_tenant_empty_for_tenant_without_payments() {
    let client = common::setup();
    let tenant_id = setup_tenant(&client);

    let payments = common::get_json(&client, &format!("/api/tenants/{}/payments", tenant_id));
    assert_eq!(payments, json!([]));
}

#[test]
fn test_update_payment_with_unknown_tenant_fails() {
    let client = common::setup();
    let tenant_id = setup_tenant(&client);
    let payment = common::create_payment(&client, tenant_id, "2024-01-05");
    let id = payment["id"].as_i64().unwrap();

    let response = client
        .put(format!("/api/payments/{}", id))
        .header(ContentType::JSON)
        .body(json!({ "tenant_id": 99999 }).to_string())
        .dispatch();

    assert_eq!(response.status(), Status::UnprocessableEntity);
}

#[test]
fn test_update_payment_tri_state_fields() {
    let client = common::setup();
    let tenant_id = setup_tenant(&client);
    let payment = common::create_payment(&client, tenant_id, "2024-01-05");
    let id = payment["id"].as_i64().unwrap();

    // Set optional fields
    let updated = common::put_json(
        &client,
        &format!("/api/payments/{}", id),
        json!({ "proof_url": "https://example.com/bukti.png", "status": "Unpaid" }),
    );
    assert_eq!(updated["proof_url"], "https://example.com/bukti.png");
    assert_eq!(updated["status"], "Unpaid");

    // Omitting leaves them alone
    let updated = common::put_json(
        &client,
        &format!("/api/payments/{}", id),
        json!({ "amount": 450000 }),
    );
    assert_eq!(updated["proof_url"], "https://example.com/bukti.png");
    assert_eq!(updated["amount"], 450000);

    // Explicit null clears
    let updated = common::put_json(
        &client,
        &format!("/api/payments/{}", id),
        json!({ "proof_url": null }),
    );
    assert_eq!(updated["proof_url"], Value::Null);
}

#[test]
fn test_update_payment_rejects_null_for_required_field() {
    let client = common::setup();
    let tenant_id = setup_tenant(&client);
    let created = common::create_payment(&client, tenant_id, "2024-01-05");
    let id = created["id"].as_i64().unwrap();

    let response = client
        .put(format!("/api/payments/{}", id))
        .header(ContentType::JSON)
        .body(json!({ "payment_date": null }).to_string())
        .dispatch();
    assert_eq!(response.status(), Status::BadRequest);

    let fetched = common::get_json(&client, &format!("/api/payments/{}", id));
    assert_eq!(fetched, created);
}

#[test]
fn test_update_payment_empty_patch_is_noop() {
    let client = common::setup();
    let tenant_id = setup_tenant(&client);
    let created = common::create_payment(&client, tenant_id, "2024-01-05");
    let id = created["id"].as_i64().unwrap();

    let updated = common::put_json(&client, &format!("/api/payments/{}", id), json!({}));
    assert_eq!(updated, created);
}

#[test]
fn test_delete_payment() {
    let client = common::setup();
    let tenant_id = setup_tenant(&client);
    let payment = common::create_payment(&client, tenant_id, "2024-01-05");
    let id = payment["id"].as_i64().unwrap();

    let response = client.delete(format!("/api/payments/{}", id)).dispatch();
    assert_eq!(response.status(), Status::Ok);
    let body: Value =
        serde_json::from_str(&response.into_string().unwrap()).unwrap();
    assert_eq!(body, json!({ "success": true }));

    assert_eq!(
        common::get_json(&client, &format!("/api/payments/{}", id)),
        Value::Null
    );
}

#[test]
fn test_delete_payment_missing_is_not_found() {
    let client = common::setup();

    let response = client.delete("/api/payments/99999").dispatch();
    assert_eq!(response.status(), Status::NotFound);
}
