use rocket::serde::json::Json;
use rocket::State;
use sea_orm::DatabaseConnection;

use crate::entities::room;
use crate::errors::AppError;
use crate::services::room_service::{CreateRoomInput, RoomService, UpdateRoomInput};
use crate::services::DeleteAck;

/// 部屋一覧を返す。
#[get("/rooms")]
pub async fn list_rooms(
    db: &State<DatabaseConnection>,
) -> Result<Json<Vec<room::Model>>, AppError> {
    Ok(Json(RoomService::find_all(db.inner()).await?))
}

/// IDで部屋を1件取得。見つからない場合は null を返す (404にはしない)。
#[get("/rooms/<id>")]
pub async fn get_room(
    db: &State<DatabaseConnection>,
    id: i32,
) -> Result<Json<Option<room::Model>>, AppError> {
    Ok(Json(RoomService::find_by_id(db.inner(), id).await?))
}

#[post("/rooms", data = "<input>")]
pub async fn create_room(
    db: &State<DatabaseConnection>,
    input: Json<CreateRoomInput>,
) -> Result<Json<room::Model>, AppError> {
    Ok(Json(RoomService::create(db.inner(), input.into_inner()).await?))
}

#[put("/rooms/<id>", data = "<input>")]
pub async fn update_room(
    db: &State<DatabaseConnection>,
    id: i32,
    input: Json<UpdateRoomInput>,
) -> Result<Json<room::Model>, AppError> {
    Ok(Json(
        RoomService::update(db.inner(), id, input.into_inner()).await?,
    ))
}

#[delete("/rooms/<id>")]
pub async fn delete_room(
    db: &State<DatabaseConnection>,
    id: i32,
) -> Result<Json<DeleteAck>, AppError> {
    Ok(Json(RoomService::delete(db.inner(), id).await?))
}

pub fn routes() -> Vec<rocket::Route> {
    routes![list_rooms, get_room, create_room, update_room, delete_room]
}
