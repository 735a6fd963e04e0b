use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// 家賃支払いモデル。
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "payments")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    /// 支払った入居者のID (外部キー)
    pub tenant_id: i32,

    /// 対象期間のラベル (例: "Januari 2024"、最大20文字)
    pub period: String,

    /// 支払額 (正の整数)
    pub amount: i32,

    /// 支払日 (日付のみ)
    pub payment_date: Date,

    /// 支払方法
    pub method: PaymentMethod,

    /// 支払証明のURL/パス (任意)
    pub proof_url: Option<String>,

    /// 支払状況
    pub status: PaymentStatus,

    /// 備考 (任意)
    pub remarks: Option<String>,

    pub created_at: DateTimeWithTimeZone,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
pub enum PaymentMethod {
    #[sea_orm(string_value = "Transfer")]
    Transfer,
    #[sea_orm(string_value = "Cash")]
    Cash,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
pub enum PaymentStatus {
    #[sea_orm(string_value = "Paid")]
    Paid,
    #[sea_orm(string_value = "Unpaid")]
    Unpaid,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::tenant::Entity",
        from = "Column::TenantId",
        to = "super::tenant::Column::Id"
    )]
    Tenant,
}

impl Related<super::tenant::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Tenant.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
