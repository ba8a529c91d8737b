//! # Application Error Handling System
//!
//! 리포트 서비스 전역에서 사용하는 통합 에러 처리 시스템입니다.
//! `thiserror`로 `Error` trait을 구현하고 `actix_web::ResponseError`를 구현하여
//! 모든 에러가 일관된 JSON 응답(`{"error": "<message>"}`)으로 변환됩니다.
//!
//! ## HTTP 응답 매핑
//!
//! | AppError | HTTP Status | 사용 시나리오 |
//! |----------|-------------|---------------|
//! | `ValidationError` | 400 Bad Request | 사용자 레코드 필드 누락 |
//! | `RedisError` | 500 Internal Server Error | 방문 카운터 저장소 오류 |
//! | `InternalError` | 500 Internal Server Error | JSON 파싱 실패, 예상치 못한 오류 |
//!
//! ## 응답 본문
//!
//! 응답 본문에는 `Display` 접두사("Validation error: ..." 등) 없이
//! 원본 메시지만 그대로 담깁니다. 접두사가 붙은 형태는 로그에만 남습니다.
//!
//! ```rust,ignore
//! use crate::core::errors::AppError;
//!
//! async fn generate(body: web::Bytes) -> Result<HttpResponse, AppError> {
//!     // 잘못된 JSON → AppError::InternalError (500)
//!     let request = GenerateReportRequest::from_slice(&body)?;
//!     // 필드 누락 → AppError::ValidationError (400)
//!     let records = request.into_records()?;
//!     // ...
//! }
//! ```

use actix_web::http::StatusCode;
use actix_web::ResponseError;
use log::{error, warn};
use thiserror::Error;

/// 애플리케이션 전역 에러 타입
#[derive(Error, Debug)]
pub enum AppError {
    /// 입력값 검증 에러 (400 Bad Request)
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// Redis 카운터 저장소 관련 에러 (500 Internal Server Error)
    #[error("Redis error: {0}")]
    RedisError(String),

    /// 내부 서버 에러 (500 Internal Server Error)
    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl AppError {
    /// 클라이언트에게 그대로 전달되는 원본 메시지를 반환합니다.
    pub fn message(&self) -> &str {
        match self {
            AppError::ValidationError(msg)
            | AppError::RedisError(msg)
            | AppError::InternalError(msg) => msg,
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::RedisError(_) | AppError::InternalError(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// HTTP 에러 응답을 생성합니다.
    ///
    /// 각 에러 타입을 적절한 HTTP 상태 코드와 JSON 응답으로 변환합니다.
    fn error_response(&self) -> actix_web::HttpResponse {
        let status = self.status_code();

        if status.is_server_error() {
            error!("{}", self);
        } else {
            warn!("{}", self);
        }

        actix_web::HttpResponse::build(status)
            .json(serde_json::json!({
                "error": self.message()
            }))
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;
