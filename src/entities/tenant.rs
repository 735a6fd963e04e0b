use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// 入居者モデル。
/// 必ず1つの部屋 (`room_id`) を参照します。
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "tenants")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    /// 氏名 (最大100文字)
    pub full_name: String,

    /// 電話番号 (最大15文字)
    pub phone: String,

    /// メールアドレス
    pub email: String,

    /// 身分証番号 (KTP等、最大20文字)
    pub national_id: String,

    /// 出身地住所
    pub home_address: String,

    /// 入居している部屋のID (外部キー)
    pub room_id: i32,

    /// 入居日 (日付のみ、時刻・タイムゾーンは保持しない)
    pub move_in_date: Date,

    /// 退去日 (任意)
    pub move_out_date: Option<Date>,

    /// 入居状況
    pub status: TenancyStatus,

    pub created_at: DateTimeWithTimeZone,
}

/// 入居者の在籍状況。
/// `Departed` への変更で部屋の status が自動的に戻ることはありません (呼び出し側の責務)。
#[derive(Clone, Copy, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
pub enum TenancyStatus {
    #[sea_orm(string_value = "Active")]
    Active,
    #[sea_orm(string_value = "Departed")]
    Departed,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::room::Entity",
        from = "Column::RoomId",
        to = "super::room::Column::Id"
    )]
    Room,
    #[sea_orm(has_many = "super::payment::Entity")]
    Payment,
}

impl Related<super::room::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Room.def()
    }
}

impl Related<super::payment::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Payment.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
