//! # Page View Handlers
//!
//! Redis `INCR`로 누적 방문 수를 세는 엔드포인트입니다.
//!
//! | 메서드 | 경로 | 설명 | 상태 코드 |
//! |--------|------|------|-----------|
//! | `GET` | `/visits` | 방문 기록 후 누적 횟수 안내 | 200 OK |

use actix_web::{get, HttpResponse};

use crate::core::errors::AppError;
use crate::core::registry::ServiceLocator;
use crate::services::visits::VisitCounterService;

/// 방문 카운터 핸들러
///
/// # 응답
///
/// ## 성공 (200 OK)
/// ```text
/// Hello! This page has been viewed 3 times.
/// ```
///
/// ## Redis 연결 실패 (500 Internal Server Error)
/// ```json
/// {"error": "Connection refused (os error 111)"}
/// ```
///
/// ```bash
/// curl http://localhost:5000/visits
/// ```
#[get("/visits")]
pub async fn page_views() -> Result<HttpResponse, AppError> {
    let service = ServiceLocator::get::<VisitCounterService>()?;
    let count = service.record_visit().await?;

    Ok(HttpResponse::Ok()
        .content_type("text/plain; charset=utf-8")
        .body(VisitCounterService::message(count)))
}
