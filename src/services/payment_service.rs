use chrono::{NaiveDate, Utc};
use sea_orm::*;
use serde::Deserialize;
use validator::Validate;

use crate::entities::payment::{PaymentMethod, PaymentStatus};
use crate::entities::{payment, prelude::*};
use crate::errors::AppError;
use crate::services::DeleteAck;
use crate::validation::{required_patch, validate_input};

#[derive(Debug, Deserialize, Validate)]
pub struct CreatePaymentInput {
    pub tenant_id: i32,

    #[validate(length(min = 1, max = 20, message = "対象期間は1〜20文字で入力してください"))]
    pub period: String,

    #[validate(range(min = 1, message = "支払額は正の整数で入力してください"))]
    pub amount: i32,

    pub payment_date: NaiveDate,

    pub method: PaymentMethod,

    #[serde(default)]
    #[validate(length(max = 255, message = "支払証明は255文字以内で入力してください"))]
    pub proof_url: Option<String>,

    pub status: PaymentStatus,

    #[serde(default)]
    pub remarks: Option<String>,
}

/// 部分更新の入力。`proof_url` と `remarks` 以外は非NULLカラムなので
/// 明示的な null はバリデーションエラーになります。
#[derive(Debug, Default, Deserialize, Validate)]
pub struct UpdatePaymentInput {
    #[serde(default, deserialize_with = "crate::validation::double_option")]
    pub tenant_id: Option<Option<i32>>,

    #[serde(default, deserialize_with = "crate::validation::double_option")]
    #[validate(length(min = 1, max = 20, message = "対象期間は1〜20文字で入力してください"))]
    pub period: Option<Option<String>>,

    #[serde(default, deserialize_with = "crate::validation::double_option")]
    #[validate(range(min = 1, message = "支払額は正の整数で入力してください"))]
    pub amount: Option<Option<i32>>,

    #[serde(default, deserialize_with = "crate::validation::double_option")]
    pub payment_date: Option<Option<NaiveDate>>,

    #[serde(default, deserialize_with = "crate::validation::double_option")]
    pub method: Option<Option<PaymentMethod>>,

    #[serde(default, deserialize_with = "crate::validation::double_option")]
    #[validate(length(max = 255, message = "支払証明は255文字以内で入力してください"))]
    pub proof_url: Option<Option<String>>,

    #[serde(default, deserialize_with = "crate::validation::double_option")]
    pub status: Option<Option<PaymentStatus>>,

    #[serde(default, deserialize_with = "crate::validation::double_option")]
    pub remarks: Option<Option<String>>,
}

/// 支払いのCRUDと入居者への参照整合性チェックを集約するサービス。
pub struct PaymentService;

impl PaymentService {
    async fn ensure_tenant_exists(db: &DatabaseConnection, tenant_id: i32) -> Result<(), AppError> {
        let found = Tenant::find_by_id(tenant_id)
            .one(db)
            .await
            .map_err(AppError::Database)?;

        if found.is_none() {
            return Err(AppError::ReferenceNotFound(format!(
                "Tenant with id {} does not exist",
                tenant_id
            )));
        }
        Ok(())
    }

    pub async fn create(
        db: &DatabaseConnection,
        input: CreatePaymentInput,
    ) -> Result<payment::Model, AppError> {
        validate_input(&input)?;
        Self::ensure_tenant_exists(db, input.tenant_id).await?;

        let new_payment = payment::ActiveModel {
            tenant_id: Set(input.tenant_id),
            period: Set(input.period),
            amount: Set(input.amount),
            payment_date: Set(input.payment_date),
            method: Set(input.method),
            proof_url: Set(input.proof_url),
            status: Set(input.status),
            remarks: Set(input.remarks),
            created_at: Set(Utc::now().into()),
            ..Default::default()
        };

        new_payment.insert(db).await.map_err(AppError::Database)
    }

    pub async fn find_all(db: &DatabaseConnection) -> Result<Vec<payment::Model>, AppError> {
        Payment::find().all(db).await.map_err(AppError::Database)
    }

    pub async fn find_by_id(
        db: &DatabaseConnection,
        id: i32,
    ) -> Result<Option<payment::Model>, AppError> {
        Payment::find_by_id(id)
            .one(db)
            .await
            .map_err(AppError::Database)
    }

    /// 指定した入居者の支払いを支払日の新しい順で返します。
    /// 入居者が存在しない場合も空のリストを返します。
    pub async fn find_by_tenant(
        db: &DatabaseConnection,
        tenant_id: i32,
    ) -> Result<Vec<payment::Model>, AppError> {
        Payment::find()
            .filter(payment::Column::TenantId.eq(tenant_id))
            .order_by_desc(payment::Column::PaymentDate)
            .all(db)
            .await
            .map_err(AppError::Database)
    }

    pub async fn update(
        db: &DatabaseConnection,
        id: i32,
        input: UpdatePaymentInput,
    ) -> Result<payment::Model, AppError> {
        validate_input(&input)?;

        let tenant_id = required_patch("tenant_id", input.tenant_id)?;
        if let Some(tenant_id) = tenant_id {
            Self::ensure_tenant_exists(db, tenant_id).await?;
        }

        let existing = Payment::find_by_id(id)
            .one(db)
            .await
            .map_err(AppError::Database)?
            .ok_or_else(|| AppError::NotFound(format!("Payment with id {} not found", id)))?;

        let mut active_model: payment::ActiveModel = existing.clone().into();
        let mut changed = false;

        if let Some(v) = tenant_id {
            active_model.tenant_id = Set(v);
            changed = true;
        }
        if let Some(v) = required_patch("period", input.period)? {
            active_model.period = Set(v);
            changed = true;
        }
        if let Some(v) = required_patch("amount", input.amount)? {
            active_model.amount = Set(v);
            changed = true;
        }
        if let Some(v) = required_patch("payment_date", input.payment_date)? {
            active_model.payment_date = Set(v);
            changed = true;
        }
        if let Some(v) = required_patch("method", input.method)? {
            active_model.method = Set(v);
            changed = true;
        }
        if let Some(v) = input.proof_url {
            active_model.proof_url = Set(v);
            changed = true;
        }
        if let Some(v) = required_patch("status", input.status)? {
            active_model.status = Set(v);
            changed = true;
        }
        if let Some(v) = input.remarks {
            active_model.remarks = Set(v);
            changed = true;
        }

        if !changed {
            return Ok(existing);
        }

        active_model.update(db).await.map_err(AppError::Database)
    }

    pub async fn delete(db: &DatabaseConnection, id: i32) -> Result<DeleteAck, AppError> {
        let existing = Payment::find_by_id(id)
            .one(db)
            .await
            .map_err(AppError::Database)?
            .ok_or_else(|| AppError::NotFound(format!("Payment with id {} not found", id)))?;

        existing.delete(db).await.map_err(AppError::Database)?;

        Ok(DeleteAck { success: true })
    }
}
