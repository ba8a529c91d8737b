//! # Greeting Handler
//!
//! 컨테이너가 떠 있는지 브라우저로 바로 확인할 수 있는 `GET /` 응답입니다.

use actix_web::{get, HttpResponse};

use crate::config::ServerConfig;

/// 인사 문구 핸들러
///
/// `GET /` → `200 text/plain` (`GREETING_MESSAGE`, 기본값 "Hello from Docker-1!")
///
/// ```bash
/// curl http://localhost:5000/
/// ```
#[get("/")]
pub async fn hello() -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/plain; charset=utf-8")
        .body(ServerConfig::greeting())
}
