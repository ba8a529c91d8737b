//! # HTTP Request Handlers Module
//!
//! HTTP 요청을 처리하는 핸들러 함수들을 정의하는 모듈입니다.
//!
//! ## 아키텍처 위치
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//!   Client (curl, Browser)
//! └─────────────────────┬───────────────────────┘
//!                       │ HTTP Request/Response
//! ┌─────────────────────▼───────────────────────┐
//!   Handlers (이 모듈) - HTTP 엔드포인트 처리      ← Web Layer
//! ├─────────────────────────────────────────────┤
//!   Services - 리포트/PDF 생성, 방문 카운터        ← Service Layer
//! ├─────────────────────────────────────────────┤
//!   Domain - UserRecord, GenerateReportRequest   ← Domain Layer
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## 모듈 구성
//!
//! - **`reports`**: `POST /generate-report` - JSON → CSV 다운로드
//! - **`pdf`**: `POST /generate-pdf` - 인사말 PDF
//! - **`greeting`**: `GET /` - 인사 문구
//! - **`visits`**: `GET /visits` - Redis 방문 카운터
//!
//! 모든 핸들러는 `Result<HttpResponse, AppError>`를 반환하며,
//! 에러는 `AppError`의 `ResponseError` 구현을 통해 `{"error": "..."}` JSON으로 변환됩니다.

pub mod greeting;
pub mod pdf;
pub mod reports;
pub mod visits;
