use rocket::http::{ContentType, Status};
use rocket::response::{self, Responder, Response};
use rocket::Request;
use sea_orm::DbErr;
use std::io::Cursor;

/// アプリケーション全体で使用するエラー型。
/// 参照整合性チェックの結果 (NotFound / ReferenceNotFound / Conflict) を
/// そのままAPIレスポンスに変換します。
#[derive(Debug)]
pub enum AppError {
    /// データベースエラー (500 Internal Server Error)
    Database(DbErr),
    /// 更新・削除対象のレコードが存在しない (404 Not Found)
    NotFound(String),
    /// 外部キーの参照先レコードが存在しない (422 Unprocessable Entity)
    ReferenceNotFound(String),
    /// ビジネスルール違反の削除 (409 Conflict)
    Conflict(String),
    /// 入力バリデーションエラー (400 Bad Request)
    BadRequest(String),
}

impl<'r> Responder<'r, 'static> for AppError {
    fn respond_to(self, _: &'r Request<'_>) -> response::Result<'static> {
        let (status, message) = match self {
            AppError::NotFound(msg) => (Status::NotFound, msg),
            AppError::ReferenceNotFound(msg) => (Status::UnprocessableEntity, msg),
            AppError::Conflict(msg) => (Status::Conflict, msg),
            AppError::BadRequest(msg) => (Status::BadRequest, msg),
            AppError::Database(e) => {
                // 詳細はログにのみ出し、クライアントへは返さない
                log::error!("database error: {}", e);
                (Status::InternalServerError, "Database Error".to_string())
            }
        };

        let body = serde_json::json!({ "error": message }).to_string();

        Response::build()
            .status(status)
            .header(ContentType::JSON)
            .sized_body(body.len(), Cursor::new(body))
            .ok()
    }
}

impl From<DbErr> for AppError {
    fn from(e: DbErr) -> Self {
        AppError::Database(e)
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::Database(e) => write!(f, "Database error: {}", e),
            AppError::NotFound(msg) => write!(f, "Not found: {}", msg),
            AppError::ReferenceNotFound(msg) => write!(f, "Reference not found: {}", msg),
            AppError::Conflict(msg) => write!(f, "Conflict: {}", msg),
            AppError::BadRequest(msg) => write!(f, "Bad request: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}
