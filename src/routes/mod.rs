//! API 라우트 설정 모듈
//!
//! 모든 엔드포인트를 한 곳에서 등록합니다.
//!
//! | 메서드 | 경로 | 핸들러 |
//! |--------|------|--------|
//! | `GET` | `/` | [`handlers::greeting::hello`] |
//! | `POST` | `/generate-report` | [`handlers::reports::generate_report`] |
//! | `POST` | `/generate-pdf` | [`handlers::pdf::generate_pdf`] |
//! | `GET` | `/visits` | [`handlers::visits::page_views`] |
//! | `GET` | `/health` | [`health_check`] |
//!
//! # Examples
//!
//! ```rust,ignore
//! use actix_web::{web, App};
//!
//! let app = App::new().configure(configure_all_routes);
//! ```

use actix_web::{get, web, HttpResponse};
use chrono::Utc;
use serde_json::json;

use crate::config::{Environment, ServerConfig};
use crate::core::errors::AppError;
use crate::handlers;

/// 모든 라우트를 설정합니다
pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config());

    // Health check endpoint
    cfg.service(health_check);

    configure_report_routes(cfg);
    configure_demo_routes(cfg);
}

/// 리포트 생성 라우트
///
/// ```bash
/// curl -X POST http://localhost:5000/generate-report \
///   -H "Content-Type: application/json" \
///   -d '{"users":[{"name":"Ann","email":"a@x.com","score":90}]}'
/// ```
fn configure_report_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(handlers::reports::generate_report);
}

/// 인사 문구, PDF 생성 및 방문 카운터 라우트
fn configure_demo_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(handlers::greeting::hello)
        .service(handlers::pdf::generate_pdf)
        .service(handlers::visits::page_views);
}

/// `web::Json` 추출기 설정
///
/// 본문 크기를 `MAX_PAYLOAD_BYTES`로 제한하고, 추출 실패를
/// `{"error": "..."}` 형태의 400 응답으로 바꿉니다.
fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(ServerConfig::max_payload_bytes())
        .error_handler(|err, _req| AppError::ValidationError(err.to_string()).into())
}

/// 서비스 상태를 확인하는 헬스체크 엔드포인트
///
/// 컨테이너 오케스트레이터의 liveness probe 용도입니다.
/// Redis 상태는 포함하지 않습니다.
///
/// ```json
/// {
///   "status": "healthy",
///   "service": "report_service_backend",
///   "version": "0.1.0",
///   "environment": "production",
///   "timestamp": "2026-01-01T00:00:00+00:00"
/// }
/// ```
#[get("/health")]
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
        "environment": Environment::current().as_str(),
        "timestamp": Utc::now().to_rfc3339(),
    }))
}
