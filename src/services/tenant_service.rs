use chrono::{NaiveDate, Utc};
use sea_orm::*;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::entities::tenant::TenancyStatus;
use crate::entities::{payment, prelude::*, room, tenant};
use crate::errors::AppError;
use crate::services::DeleteAck;
use crate::validation::{required_patch, validate_input, validate_phone_chars};

#[derive(Debug, Deserialize, Validate)]
pub struct CreateTenantInput {
    #[validate(length(min = 1, max = 100, message = "氏名は1〜100文字で入力してください"))]
    pub full_name: String,

    #[validate(
        length(min = 1, max = 15, message = "電話番号は1〜15文字で入力してください"),
        custom(function = "validate_phone_chars", message = "電話番号に使用できない文字が含まれています")
    )]
    pub phone: String,

    #[validate(
        email(message = "メールアドレスの形式が不正です"),
        length(max = 100, message = "メールアドレスは100文字以内で入力してください")
    )]
    pub email: String,

    #[validate(length(min = 1, max = 20, message = "身分証番号は1〜20文字で入力してください"))]
    pub national_id: String,

    #[validate(length(min = 1, message = "出身地住所は必須です"))]
    pub home_address: String,

    pub room_id: i32,

    pub move_in_date: NaiveDate,

    #[serde(default)]
    pub move_out_date: Option<NaiveDate>,

    pub status: TenancyStatus,
}

/// 部分更新の入力。`move_out_date` 以外は非NULLカラムなので
/// 明示的な null はバリデーションエラーになります。
#[derive(Debug, Default, Deserialize, Validate)]
pub struct UpdateTenantInput {
    #[serde(default, deserialize_with = "crate::validation::double_option")]
    #[validate(length(min = 1, max = 100, message = "氏名は1〜100文字で入力してください"))]
    pub full_name: Option<Option<String>>,

    #[serde(default, deserialize_with = "crate::validation::double_option")]
    #[validate(
        length(min = 1, max = 15, message = "電話番号は1〜15文字で入力してください"),
        custom(function = "validate_phone_chars", message = "電話番号に使用できない文字が含まれています")
    )]
    pub phone: Option<Option<String>>,

    #[serde(default, deserialize_with = "crate::validation::double_option")]
    #[validate(
        email(message = "メールアドレスの形式が不正です"),
        length(max = 100, message = "メールアドレスは100文字以内で入力してください")
    )]
    pub email: Option<Option<String>>,

    #[serde(default, deserialize_with = "crate::validation::double_option")]
    #[validate(length(min = 1, max = 20, message = "身分証番号は1〜20文字で入力してください"))]
    pub national_id: Option<Option<String>>,

    #[serde(default, deserialize_with = "crate::validation::double_option")]
    #[validate(length(min = 1, message = "出身地住所は必須です"))]
    pub home_address: Option<Option<String>>,

    #[serde(default, deserialize_with = "crate::validation::double_option")]
    pub room_id: Option<Option<i32>>,

    #[serde(default, deserialize_with = "crate::validation::double_option")]
    pub move_in_date: Option<Option<NaiveDate>>,

    #[serde(default, deserialize_with = "crate::validation::double_option")]
    pub move_out_date: Option<Option<NaiveDate>>,

    #[serde(default, deserialize_with = "crate::validation::double_option")]
    pub status: Option<Option<TenancyStatus>>,
}

/// 入居者と参照先の部屋レコードをまとめた取得結果。
#[derive(Debug, Serialize)]
pub struct TenantWithRoom {
    #[serde(flatten)]
    pub tenant: tenant::Model,
    pub room: Option<room::Model>,
}

/// 入居者のCRUDと部屋への参照整合性チェックを集約するサービス。
pub struct TenantService;

impl TenantService {
    /// 参照先の部屋が存在することを確認する。
    /// 存在チェックと書き込みはトランザクションで括らない (この規模では許容)。
    async fn ensure_room_exists(db: &DatabaseConnection, room_id: i32) -> Result<(), AppError> {
        let found = Room::find_by_id(room_id)
            .one(db)
            .await
            .map_err(AppError::Database)?;

        if found.is_none() {
            return Err(AppError::ReferenceNotFound(format!(
                "Room with id {} does not exist",
                room_id
            )));
        }
        Ok(())
    }

    pub async fn create(
        db: &DatabaseConnection,
        input: CreateTenantInput,
    ) -> Result<tenant::Model, AppError> {
        validate_input(&input)?;
        Self::ensure_room_exists(db, input.room_id).await?;

        let new_tenant = tenant::ActiveModel {
            full_name: Set(input.full_name),
            phone: Set(input.phone),
            email: Set(input.email),
            national_id: Set(input.national_id),
            home_address: Set(input.home_address),
            room_id: Set(input.room_id),
            move_in_date: Set(input.move_in_date),
            move_out_date: Set(input.move_out_date),
            status: Set(input.status),
            created_at: Set(Utc::now().into()),
            ..Default::default()
        };

        new_tenant.insert(db).await.map_err(AppError::Database)
    }

    pub async fn find_all(db: &DatabaseConnection) -> Result<Vec<tenant::Model>, AppError> {
        Tenant::find().all(db).await.map_err(AppError::Database)
    }

    /// 参照先の部屋レコードを結合して返します。存在しないIDは None。
    pub async fn find_by_id(
        db: &DatabaseConnection,
        id: i32,
    ) -> Result<Option<TenantWithRoom>, AppError> {
        let result = Tenant::find_by_id(id)
            .find_also_related(Room)
            .one(db)
            .await
            .map_err(AppError::Database)?;

        Ok(result.map(|(tenant, room)| TenantWithRoom { tenant, room }))
    }

    pub async fn update(
        db: &DatabaseConnection,
        id: i32,
        input: UpdateTenantInput,
    ) -> Result<tenant::Model, AppError> {
        validate_input(&input)?;

        // 部屋の付け替え時は移動先の存在を先に確認する
        let room_id = required_patch("room_id", input.room_id)?;
        if let Some(room_id) = room_id {
            Self::ensure_room_exists(db, room_id).await?;
        }

        let existing = Tenant::find_by_id(id)
            .one(db)
            .await
            .map_err(AppError::Database)?
            .ok_or_else(|| AppError::NotFound(format!("Tenant with id {} not found", id)))?;

        let mut active_model: tenant::ActiveModel = existing.clone().into();
        let mut changed = false;

        if let Some(v) = required_patch("full_name", input.full_name)? {
            active_model.full_name = Set(v);
            changed = true;
        }
        if let Some(v) = required_patch("phone", input.phone)? {
            active_model.phone = Set(v);
            changed = true;
        }
        if let Some(v) = required_patch("email", input.email)? {
            active_model.email = Set(v);
            changed = true;
        }
        if let Some(v) = required_patch("national_id", input.national_id)? {
            active_model.national_id = Set(v);
            changed = true;
        }
        if let Some(v) = required_patch("home_address", input.home_address)? {
            active_model.home_address = Set(v);
            changed = true;
        }
        if let Some(v) = room_id {
            active_model.room_id = Set(v);
            changed = true;
        }
        if let Some(v) = required_patch("move_in_date", input.move_in_date)? {
            active_model.move_in_date = Set(v);
            changed = true;
        }
        if let Some(v) = input.move_out_date {
            active_model.move_out_date = Set(v);
            changed = true;
        }
        if let Some(v) = required_patch("status", input.status)? {
            active_model.status = Set(v);
            changed = true;
        }

        if !changed {
            return Ok(existing);
        }

        active_model.update(db).await.map_err(AppError::Database)
    }

    /// 入居者を削除します。紐づく支払いレコードも一緒に削除します。
    pub async fn delete(db: &DatabaseConnection, id: i32) -> Result<DeleteAck, AppError> {
        let existing = Tenant::find_by_id(id)
            .one(db)
            .await
            .map_err(AppError::Database)?
            .ok_or_else(|| AppError::NotFound(format!("Tenant with id {} not found", id)))?;

        Payment::delete_many()
            .filter(payment::Column::TenantId.eq(existing.id))
            .exec(db)
            .await
            .map_err(AppError::Database)?;

        existing.delete(db).await.map_err(AppError::Database)?;

        Ok(DeleteAck { success: true })
    }
}
