#![allow(dead_code)]

use kos_manager::build_rocket_with_db;
use rocket::http::{ContentType, Status};
use rocket::local::blocking::Client;
use serde_json::{json, Value};
use std::sync::atomic::{AtomicUsize, Ordering};

static NEXT_DB_ID: AtomicUsize = AtomicUsize::new(0);

/// Build a fresh rocket + client. Each call connects to its own named
/// shared-cache in-memory SQLite database, so the schema migrated at startup
/// survives for the lifetime of the pool and parallel tests never share rows.
pub fn setup() -> Client {
    let db_id = NEXT_DB_ID.fetch_add(1, Ordering::Relaxed);
    let db_url = format!("sqlite:file:kos_test_{}?mode=memory&cache=shared", db_id);

    // Build on a runtime that outlives the test: `rocket::execute` drops its
    // runtime on return, which tears down the pool's in-memory database
    // before the test can use it. Leaking one small runtime per test keeps
    // the connection (and the migrated schema) alive.
    let rt = rocket::tokio::runtime::Builder::new_multi_thread()
        .worker_threads(1)
        .enable_all()
        .build()
        .expect("tokio runtime");
    let rocket = rt.block_on(build_rocket_with_db(&db_url));
    std::mem::forget(rt);
    Client::tracked(rocket).expect("valid rocket instance")
}

pub fn get_json(client: &Client, path: &str) -> Value {
    let response = client.get(path).dispatch();
    assert_eq!(response.status(), Status::Ok, "GET {}", path);
    serde_json::from_str(&response.into_string().unwrap()).unwrap()
}

pub fn post_json(client: &Client, path: &str, body: Value) -> Value {
    let response = client
        .post(path)
        .header(ContentType::JSON)
        .body(body.to_string())
        .dispatch();
    assert_eq!(response.status(), Status::Ok, "POST {}", path);
    serde_json::from_str(&response.into_string().unwrap()).unwrap()
}

pub fn put_json(client: &Client, path: &str, body: Value) -> Value {
    let response = client
        .put(path)
        .header(ContentType::JSON)
        .body(body.to_string())
        .dispatch();
    assert_eq!(response.status(), Status::Ok, "PUT {}", path);
    serde_json::from_str(&response.into_string().unwrap()).unwrap()
}

/// Create a room with sensible defaults; `number` keeps rooms distinct.
pub fn create_room(client: &Client, number: &str) -> Value {
    post_json(
        client,
        "/api/rooms",
        json!({
            "room_number": number,
            "monthly_rent": 500000,
            "capacity": 2,
            "facilities": "AC, wifi",
            "status": "Empty",
            "notes": null
        }),
    )
}

pub fn create_tenant(client: &Client, room_id: i64, status: &str) -> Value {
    post_json(
        client,
        "/api/tenants",
        json!({
            "full_name": "Budi Santoso",
            "phone": "081234567890",
            "email": "budi@example.com",
            "national_id": "3174012345678901",
            "home_address": "Jl. Merdeka No. 1, Bandung",
            "room_id": room_id,
            "move_in_date": "2024-01-15",
            "move_out_date": null,
            "status": status
        }),
    )
}

pub fn create_payment(client: &Client, tenant_id: i64, date: &str) -> Value {
    post_json(
        client,
        "/api/payments",
        json!({
            "tenant_id": tenant_id,
            "period": "Januari 2024",
            "amount": 500000,
            "payment_date": date,
            "method": "Transfer",
            "proof_url": null,
            "status": "Paid",
            "remarks": null
        }),
    )
}
