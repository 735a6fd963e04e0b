use rocket::serde::json::Json;
use rocket::State;
use sea_orm::DatabaseConnection;

use crate::entities::tenant;
use crate::errors::AppError;
use crate::services::tenant_service::{
    CreateTenantInput, TenantService, TenantWithRoom, UpdateTenantInput,
};
use crate::services::DeleteAck;

#[get("/tenants")]
pub async fn list_tenants(
    db: &State<DatabaseConnection>,
) -> Result<Json<Vec<tenant::Model>>, AppError> {
    Ok(Json(TenantService::find_all(db.inner()).await?))
}

/// 参照先の部屋レコードを結合して返す。見つからない場合は null。
#[get("/tenants/<id>")]
pub async fn get_tenant(
    db: &State<DatabaseConnection>,
    id: i32,
) -> Result<Json<Option<TenantWithRoom>>, AppError> {
    Ok(Json(TenantService::find_by_id(db.inner(), id).await?))
}

#[post("/tenants", data = "<input>")]
pub async fn create_tenant(
    db: &State<DatabaseConnection>,
    input: Json<CreateTenantInput>,
) -> Result<Json<tenant::Model>, AppError> {
    Ok(Json(
        TenantService::create(db.inner(), input.into_inner()).await?,
    ))
}

#[put("/tenants/<id>", data = "<input>")]
pub async fn update_tenant(
    db: &State<DatabaseConnection>,
    id: i32,
    input: Json<UpdateTenantInput>,
) -> Result<Json<tenant::Model>, AppError> {
    Ok(Json(
        TenantService::update(db.inner(), id, input.into_inner()).await?,
    ))
}

#[delete("/tenants/<id>")]
pub async fn delete_tenant(
    db: &State<DatabaseConnection>,
    id: i32,
) -> Result<Json<DeleteAck>, AppError> {
    Ok(Json(TenantService::delete(db.inner(), id).await?))
}

pub fn routes() -> Vec<rocket::Route> {
    routes![
        list_tenants,
        get_tenant,
        create_tenant,
        update_tenant,
        delete_tenant
    ]
}
