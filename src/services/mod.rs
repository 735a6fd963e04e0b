use serde::Serialize;

pub mod payment_service;
pub mod room_service;
pub mod tenant_service;

/// 削除系エンドポイント共通のレスポンス。
#[derive(Debug, Serialize)]
pub struct DeleteAck {
    pub success: bool,
}
