//! # Data Transfer Objects (DTO) Module
//!
//! API 경계에서 주고받는 데이터 구조를 정의합니다.
//!
//! ```text
//! dto/
//! ├── reports/
//! │   └── request.rs   # POST /generate-report 요청 본문
//! └── pdf/
//!     └── request.rs   # POST /generate-pdf 요청 본문
//! ```

pub mod pdf;
pub mod reports;
