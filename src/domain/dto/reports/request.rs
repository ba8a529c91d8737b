//! 리포트 생성 요청 DTO
//!
//! `POST /generate-report` 요청 본문을 표현합니다.
//!
//! ```json
//! {
//!   "users": [
//!     {"name": "Ann", "email": "a@x.com", "score": 90}
//!   ]
//! }
//! ```
//!
//! 본문 파싱과 레코드 검증은 두 단계로 나뉩니다.
//!
//! 1. [`GenerateReportRequest::from_slice`] - JSON 구문 및 최상위 구조 (실패 시 500)
//! 2. [`GenerateReportRequest::into_records`] - 레코드별 필수 필드 (실패 시 400)

use serde_json::Value;

use crate::core::errors::{AppError, AppResult};
use crate::domain::entities::user_record::{UserRecord, INVALID_USER_MESSAGE};

/// 리포트 생성 요청
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GenerateReportRequest {
    /// 아직 검증되지 않은 `users` 배열 원소들
    pub users: Vec<Value>,
}

impl GenerateReportRequest {
    /// 요청 본문 바이트를 파싱합니다.
    ///
    /// | `users` | 결과 |
    /// |---------|------|
    /// | 없음 | 빈 배열 |
    /// | 배열 | 그대로 |
    /// | 문자열, 객체 | `ValidationError` (400) |
    /// | `null`, 숫자, 불리언 | `InternalError` (500) |
    ///
    /// # Errors
    ///
    /// * `AppError::InternalError` - 잘못된 JSON, 최상위 값이 객체가 아닌 경우,
    ///   또는 `users`가 순회할 수 없는 값인 경우. 파서 메시지는 그대로 전달합니다.
    /// * `AppError::ValidationError` - `users`가 문자열이나 객체인 경우
    pub fn from_slice(body: &[u8]) -> AppResult<Self> {
        let value: Value = serde_json::from_slice(body)
            .map_err(|e| AppError::InternalError(e.to_string()))?;

        let mut object = match value {
            Value::Object(object) => object,
            other => {
                return Err(AppError::InternalError(format!(
                    "Request body must be a JSON object, got {}",
                    json_type_name(&other)
                )));
            }
        };

        let users = match object.remove("users") {
            None => Vec::new(),
            Some(Value::Array(users)) => users,
            Some(Value::String(_) | Value::Object(_)) => {
                return Err(AppError::ValidationError(INVALID_USER_MESSAGE.to_string()));
            }
            Some(other) => {
                return Err(AppError::InternalError(format!(
                    "'users' must be an array, got {}",
                    json_type_name(&other)
                )));
            }
        };

        Ok(Self { users })
    }

    /// 모든 원소를 검증하여 `UserRecord` 목록으로 변환합니다.
    ///
    /// 하나라도 실패하면 전체 요청이 거부됩니다 (부분 결과 없음).
    pub fn into_records(self) -> AppResult<Vec<UserRecord>> {
        self.users.into_iter().map(UserRecord::try_from).collect()
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_absent_users_is_empty() {
        assert_eq!(GenerateReportRequest::from_slice(b"{}").unwrap().users.len(), 0);
        assert_eq!(
            GenerateReportRequest::from_slice(br#"{"users": []}"#).unwrap().users.len(),
            0
        );
    }

    #[test]
    fn test_null_or_scalar_users_is_internal_error() {
        for (body, type_name) in [
            (&br#"{"users": null}"#[..], "null"),
            (&br#"{"users": 3}"#[..], "number"),
            (&br#"{"users": false}"#[..], "boolean"),
        ] {
            match GenerateReportRequest::from_slice(body) {
                Err(AppError::InternalError(msg)) => assert!(msg.contains(type_name), "{}", msg),
                other => panic!("Expected InternalError, got {:?}", other),
            }
        }
    }

    #[test]
    fn test_users_are_kept_in_order() {
        let request = GenerateReportRequest::from_slice(
            br#"{"users":[{"name":"B"},{"name":"A"}],"title":"ignored"}"#,
        )
        .unwrap();

        assert_eq!(request.users, vec![json!({"name": "B"}), json!({"name": "A"})]);
    }

    #[test]
    fn test_malformed_json_is_internal_error() {
        match GenerateReportRequest::from_slice(b"{\"users\": [") {
            Err(AppError::InternalError(msg)) => assert!(msg.contains("EOF")),
            other => panic!("Expected InternalError, got {:?}", other),
        }

        assert!(matches!(
            GenerateReportRequest::from_slice(b""),
            Err(AppError::InternalError(_))
        ));
    }

    #[test]
    fn test_non_object_body_is_internal_error() {
        match GenerateReportRequest::from_slice(b"[1, 2]") {
            Err(AppError::InternalError(msg)) => assert!(msg.contains("array")),
            other => panic!("Expected InternalError, got {:?}", other),
        }
    }

    #[test]
    fn test_string_or_object_users_is_validation_error() {
        for body in [&br#"{"users": "Ann"}"#[..], &br#"{"users": {"name": "Ann"}}"#[..]] {
            match GenerateReportRequest::from_slice(body) {
                Err(AppError::ValidationError(msg)) => assert_eq!(msg, INVALID_USER_MESSAGE),
                other => panic!("Expected ValidationError, got {:?}", other),
            }
        }
    }

    #[test]
    fn test_into_records_is_all_or_nothing() {
        let request = GenerateReportRequest {
            users: vec![
                json!({"name": "Ann", "email": "a@x.com", "score": 90}),
                json!({"name": "Bob"}),
            ],
        };

        match request.into_records() {
            Err(AppError::ValidationError(msg)) => assert_eq!(msg, INVALID_USER_MESSAGE),
            other => panic!("Expected ValidationError, got {:?}", other),
        }
    }

    #[test]
    fn test_into_records_success() {
        let request = GenerateReportRequest {
            users: vec![
                json!({"name": "Ann", "email": "a@x.com", "score": 90}),
                json!({"name": "Bob", "email": "b@x.com", "score": "n/a"}),
            ],
        };

        let records = request.into_records().unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].name, "Ann");
        assert_eq!(records[1].score, json!("n/a"));
    }
}
