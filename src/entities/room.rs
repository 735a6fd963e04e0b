use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// 部屋モデル。
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "rooms")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    /// 部屋番号 (例: "K001"、最大10文字)
    pub room_number: String,

    /// 月額家賃 (正の整数)
    pub monthly_rent: i32,

    /// 定員
    pub capacity: i32,

    /// 設備 (任意)
    pub facilities: Option<String>,

    /// 空室状況
    pub status: RoomStatus,

    /// 備考 (任意)
    pub notes: Option<String>,

    /// 作成日時
    pub created_at: DateTimeWithTimeZone,
}

/// 部屋の空室状況。
#[derive(Clone, Copy, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
pub enum RoomStatus {
    #[sea_orm(string_value = "Empty")]
    Empty,
    #[sea_orm(string_value = "Occupied")]
    Occupied,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::tenant::Entity")]
    Tenant,
}

impl Related<super::tenant::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Tenant.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
