use chrono::Utc;
use sea_orm::*;
use serde::Deserialize;
use validator::Validate;

use crate::entities::room::RoomStatus;
use crate::entities::tenant::TenancyStatus;
use crate::entities::{payment, prelude::*, room, tenant};
use crate::errors::AppError;
use crate::services::DeleteAck;
use crate::validation::{required_patch, validate_input};

#[derive(Debug, Deserialize, Validate)]
pub struct CreateRoomInput {
    #[validate(length(min = 1, max = 10, message = "部屋番号は1〜10文字で入力してください"))]
    pub room_number: String,

    #[validate(range(min = 1, message = "家賃は正の整数で入力してください"))]
    pub monthly_rent: i32,

    #[validate(range(min = 1, message = "定員は正の整数で入力してください"))]
    pub capacity: i32,

    #[serde(default)]
    pub facilities: Option<String>,

    pub status: RoomStatus,

    #[serde(default)]
    pub notes: Option<String>,
}

/// 部分更新の入力。キーがないフィールドは変更されません。
/// NULL許可カラムは明示的な null でクリアでき、
/// 非NULLカラムへの明示的な null はバリデーションエラーになります。
#[derive(Debug, Default, Deserialize, Validate)]
pub struct UpdateRoomInput {
    #[serde(default, deserialize_with = "crate::validation::double_option")]
    #[validate(length(min = 1, max = 10, message = "部屋番号は1〜10文字で入力してください"))]
    pub room_number: Option<Option<String>>,

    #[serde(default, deserialize_with = "crate::validation::double_option")]
    #[validate(range(min = 1, message = "家賃は正の整数で入力してください"))]
    pub monthly_rent: Option<Option<i32>>,

    #[serde(default, deserialize_with = "crate::validation::double_option")]
    #[validate(range(min = 1, message = "定員は正の整数で入力してください"))]
    pub capacity: Option<Option<i32>>,

    #[serde(default, deserialize_with = "crate::validation::double_option")]
    pub facilities: Option<Option<String>>,

    #[serde(default, deserialize_with = "crate::validation::double_option")]
    pub status: Option<Option<RoomStatus>>,

    #[serde(default, deserialize_with = "crate::validation::double_option")]
    pub notes: Option<Option<String>>,
}

/// 部屋のCRUDと削除ガードを集約するサービス。
pub struct RoomService;

impl RoomService {
    pub async fn create(
        db: &DatabaseConnection,
        input: CreateRoomInput,
    ) -> Result<room::Model, AppError> {
        validate_input(&input)?;

        let new_room = room::ActiveModel {
            room_number: Set(input.room_number),
            monthly_rent: Set(input.monthly_rent),
            capacity: Set(input.capacity),
            facilities: Set(input.facilities),
            status: Set(input.status),
            notes: Set(input.notes),
            created_at: Set(Utc::now().into()),
            ..Default::default()
        };

        new_room.insert(db).await.map_err(AppError::Database)
    }

    pub async fn find_all(db: &DatabaseConnection) -> Result<Vec<room::Model>, AppError> {
        Room::find().all(db).await.map_err(AppError::Database)
    }

    /// 存在しないIDはエラーではなく None を返します。
    pub async fn find_by_id(
        db: &DatabaseConnection,
        id: i32,
    ) -> Result<Option<room::Model>, AppError> {
        Room::find_by_id(id).one(db).await.map_err(AppError::Database)
    }

    pub async fn update(
        db: &DatabaseConnection,
        id: i32,
        input: UpdateRoomInput,
    ) -> Result<room::Model, AppError> {
        validate_input(&input)?;

        let existing = Room::find_by_id(id)
            .one(db)
            .await
            .map_err(AppError::Database)?
            .ok_or_else(|| AppError::NotFound(format!("Room with id {} not found", id)))?;

        let mut active_model: room::ActiveModel = existing.clone().into();
        let mut changed = false;

        if let Some(v) = required_patch("room_number", input.room_number)? {
            active_model.room_number = Set(v);
            changed = true;
        }
        if let Some(v) = required_patch("monthly_rent", input.monthly_rent)? {
            active_model.monthly_rent = Set(v);
            changed = true;
        }
        if let Some(v) = required_patch("capacity", input.capacity)? {
            active_model.capacity = Set(v);
            changed = true;
        }
        if let Some(v) = input.facilities {
            active_model.facilities = Set(v);
            changed = true;
        }
        if let Some(v) = required_patch("status", input.status)? {
            active_model.status = Set(v);
            changed = true;
        }
        if let Some(v) = input.notes {
            active_model.notes = Set(v);
            changed = true;
        }

        // 空の部分更新は成功扱いで現状をそのまま返す
        if !changed {
            return Ok(existing);
        }

        active_model.update(db).await.map_err(AppError::Database)
    }

    /// 部屋を削除します。
    /// 在籍中 (Active) の入居者が1人でもいる場合は Conflict。
    /// それ以外は部屋に紐づく入居者とその支払いを先に削除してから部屋を消します。
    pub async fn delete(db: &DatabaseConnection, id: i32) -> Result<DeleteAck, AppError> {
        let existing = Room::find_by_id(id)
            .one(db)
            .await
            .map_err(AppError::Database)?
            .ok_or_else(|| AppError::NotFound(format!("Room with id {} not found", id)))?;

        let active_count = Tenant::find()
            .filter(tenant::Column::RoomId.eq(existing.id))
            .filter(tenant::Column::Status.eq(TenancyStatus::Active))
            .count(db)
            .await
            .map_err(AppError::Database)?;

        if active_count > 0 {
            return Err(AppError::Conflict(
                "Cannot delete a room with active tenants".to_string(),
            ));
        }

        let tenant_ids: Vec<i32> = Tenant::find()
            .filter(tenant::Column::RoomId.eq(existing.id))
            .select_only()
            .column(tenant::Column::Id)
            .into_tuple()
            .all(db)
            .await
            .map_err(AppError::Database)?;

        if !tenant_ids.is_empty() {
            Payment::delete_many()
                .filter(payment::Column::TenantId.is_in(tenant_ids.clone()))
                .exec(db)
                .await
                .map_err(AppError::Database)?;

            Tenant::delete_many()
                .filter(tenant::Column::Id.is_in(tenant_ids))
                .exec(db)
                .await
                .map_err(AppError::Database)?;
        }

        existing.delete(db).await.map_err(AppError::Database)?;

        Ok(DeleteAck { success: true })
    }
}
