//! 리포트 생성 데모 서비스 백엔드
//!
//! 컨테이너화 예제용 actix-web 서비스입니다. JSON 사용자 목록을 CSV 파일로 변환하는
//! 리포트 생성기를 중심으로, 인사말 PDF 생성, 인사 문구 응답, Redis 기반 방문 카운터를 함께 제공합니다.
//!
//! # Features
//!
//! - **리포트 생성**: `POST /generate-report` - 레코드 검증 후 CSV 다운로드
//! - **PDF 생성**: `POST /generate-pdf` - 인사말 한 줄짜리 PDF (inline)
//! - **인사 문구**: `GET /`
//! - **방문 카운터**: `GET /visits` - Redis `INCR` 위임
//! - **헬스체크**: `GET /health`
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← 엔드포인트 등록
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 요청/응답 처리
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← 검증, CSV/PDF 생성, 카운터
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │      Redis      │ ← 방문 카운터 저장소
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use report_service_backend::domain::dto::reports::GenerateReportRequest;
//! use report_service_backend::services::reports::ReportService;
//!
//! let request = GenerateReportRequest::from_slice(br#"{"users":[]}"#)?;
//! let report = ReportService::instance().generate(request)?;
//! assert_eq!(report.content, "name,email,score\r\n");
//! ```

pub mod core;
pub mod config;
pub mod caching;
pub mod domain;
pub mod services;
pub mod utils;
pub mod routes;
pub mod handlers;
