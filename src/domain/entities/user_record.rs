//! User Record Implementation
//!
//! 리포트 한 행을 구성하는 사용자 레코드입니다.
//! 요청 본문의 `users` 배열 원소 하나가 검증을 통과하면 `UserRecord`가 됩니다.

use std::borrow::Cow;

use serde_json::Value;

use crate::core::errors::AppError;

/// 필드 누락 시 클라이언트에게 반환되는 고정 메시지
pub const INVALID_USER_MESSAGE: &str = "Each user must have name, email, and score";

/// 사용자 레코드
///
/// `name`, `email`은 JSON 문자열이어야 하며, `score`는 타입 제약 없이
/// 어떤 JSON 값이든 그대로 보존합니다. 그 밖의 필드는 버려집니다.
#[derive(Debug, Clone, PartialEq)]
pub struct UserRecord {
    /// 사용자 이름
    pub name: String,
    /// 이메일 (형식 검증 없음)
    pub email: String,
    /// 점수 (untyped pass-through)
    pub score: Value,
}

impl UserRecord {
    /// CSV 헤더 및 필수 키 순서
    pub const FIELDS: [&'static str; 3] = ["name", "email", "score"];

    /// 점수를 CSV 필드 텍스트로 변환합니다.
    ///
    /// | JSON | 결과 |
    /// |------|------|
    /// | `"A+"` | `A+` |
    /// | `90`, `90.5` | `90`, `90.5` |
    /// | `123456789012345678901234567890` | 원본 숫자 그대로 |
    /// | `true` | `true` |
    /// | `null` | 빈 문자열 |
    /// | 배열/객체 | compact JSON |
    pub fn score_text(&self) -> Cow<'_, str> {
        match &self.score {
            Value::Null => Cow::Borrowed(""),
            Value::String(s) => Cow::Borrowed(s.as_str()),
            Value::Bool(b) => Cow::Owned(b.to_string()),
            Value::Number(n) => Cow::Owned(n.to_string()),
            Value::Array(_) | Value::Object(_) => Cow::Owned(self.score.to_string()),
        }
    }

    /// 헤더 순서(`name,email,score`)에 맞춘 필드 값
    pub fn fields(&self) -> [Cow<'_, str>; 3] {
        [
            Cow::Borrowed(self.name.as_str()),
            Cow::Borrowed(self.email.as_str()),
            self.score_text(),
        ]
    }
}

impl TryFrom<Value> for UserRecord {
    type Error = AppError;

    /// `users` 배열 원소 하나를 검증합니다.
    ///
    /// 객체가 아니거나, `name`/`email`/`score` 중 하나라도 없거나,
    /// `name`/`email`이 문자열이 아니면 `ValidationError`를 반환합니다.
    fn try_from(value: Value) -> Result<Self, Self::Error> {
        let invalid = || AppError::ValidationError(INVALID_USER_MESSAGE.to_string());

        let Value::Object(mut fields) = value else {
            return Err(invalid());
        };

        let score = fields.remove("score").ok_or_else(invalid)?;

        let name = match fields.remove("name") {
            Some(Value::String(name)) => name,
            _ => return Err(invalid()),
        };

        let email = match fields.remove("email") {
            Some(Value::String(email)) => email,
            _ => return Err(invalid()),
        };

        Ok(Self { name, email, score })
    }
}
