use rocket::serde::json::Json;
use rocket::State;
use sea_orm::DatabaseConnection;

use crate::entities::payment;
use crate::errors::AppError;
use crate::services::payment_service::{
    CreatePaymentInput, PaymentService, UpdatePaymentInput,
};
use crate::services::DeleteAck;

#[get("/payments")]
pub async fn list_payments(
    db: &State<DatabaseConnection>,
) -> Result<Json<Vec<payment::Model>>, AppError> {
    Ok(Json(PaymentService::find_all(db.inner()).await?))
}

#[get("/payments/<id>")]
pub async fn get_payment(
    db: &State<DatabaseConnection>,
    id: i32,
) -> Result<Json<Option<payment::Model>>, AppError> {
    Ok(Json(PaymentService::find_by_id(db.inner(), id).await?))
}

/// 指定した入居者の支払い履歴 (支払日の降順)。
#[get("/tenants/<tenant_id>/payments")]
pub async fn list_payments_by_tenant(
    db: &State<DatabaseConnection>,
    tenant_id: i32,
) -> Result<Json<Vec<payment::Model>>, AppError> {
    Ok(Json(
        PaymentService::find_by_tenant(db.inner(), tenant_id).await?,
    ))
}

#[post("/payments", data = "<input>")]
pub async fn create_payment(
    db: &State<DatabaseConnection>,
    input: Json<CreatePaymentInput>,
) -> Result<Json<payment::Model>, AppError> {
    Ok(Json(
        PaymentService::create(db.inner(), input.into_inner()).await?,
    ))
}

#[put("/payments/<id>", data = "<input>")]
pub async fn update_payment(
    db: &State<DatabaseConnection>,
    id: i32,
    input: Json<UpdatePaymentInput>,
) -> Result<Json<payment::Model>, AppError> {
    Ok(Json(
        PaymentService::update(db.inner(), id, input.into_inner()).await?,
    ))
}

#[delete("/payments/<id>")]
pub async fn delete_payment(
    db: &State<DatabaseConnection>,
    id: i32,
) -> Result<Json<DeleteAck>, AppError> {
    Ok(Json(PaymentService::delete(db.inner(), id).await?))
}

pub fn routes() -> Vec<rocket::Route> {
    routes![
        list_payments,
        get_payment,
        list_payments_by_tenant,
        create_payment,
        update_payment,
        delete_payment
    ]
}
