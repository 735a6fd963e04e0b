use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Deserializer};
use validator::{Validate, ValidationError};

use crate::errors::AppError;

lazy_static! {
    /// 電話番号の文字種 (数字、先頭の+、ハイフン、空白のみ許可)
    static ref PHONE_REGEX: Regex = Regex::new(r"^\+?[0-9][0-9\-\s]*$").unwrap();
}

/// 電話番号の文字種バリデーション
pub fn validate_phone_chars(phone: &str) -> Result<(), ValidationError> {
    if PHONE_REGEX.is_match(phone) {
        Ok(())
    } else {
        Err(ValidationError::new("invalid_phone_chars"))
    }
}

/// バリデーションを実行し、違反メッセージをまとめて `BadRequest` に変換する。
/// SQLを発行する前に各サービスの create / update で呼び出します。
pub fn validate_input<T: Validate>(input: &T) -> Result<(), AppError> {
    match input.validate() {
        Ok(_) => Ok(()),
        Err(errors) => {
            let mut messages = Vec::new();
            for (field, field_errors) in errors.field_errors() {
                for error in field_errors {
                    let msg = error
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| format!("{} が不正です", field));
                    messages.push(msg);
                }
            }
            Err(AppError::BadRequest(messages.join(", ")))
        }
    }
}

/// NULL許可カラムの部分更新用デシリアライザ。
/// キー欠落 = 変更なし (None)、明示的な null = クリア (Some(None))、
/// 値あり = 更新 (Some(Some(v))) の3状態を区別します。
pub fn double_option<'de, T, D>(de: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Deserialize::deserialize(de).map(Some)
}

/// 非NULLカラムの部分更新値を取り出す。
/// キー欠落 = 変更なし (None)、値あり = 更新 (Some(v))。
/// 明示的な null はクリアの意味を持てないため `BadRequest` で拒否します。
pub fn required_patch<T>(field: &str, value: Option<Option<T>>) -> Result<Option<T>, AppError> {
    match value {
        Some(Some(v)) => Ok(Some(v)),
        Some(None) => Err(AppError::BadRequest(format!(
            "{} は null にできません",
            field
        ))),
        None => Ok(None),
    }
}
