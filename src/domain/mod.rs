//! # Domain Layer Module
//!
//! 리포트 생성에 필요한 도메인 타입을 담당합니다.
//!
//! ```text
//! Domain Layer (이 모듈)
//! ├── Entities  - 검증된 사용자 레코드 (UserRecord)
//! └── DTOs      - 요청 본문 (GenerateReportRequest)
//!      │
//!      ▼
//! Application Layer (Services)
//! ```
//!
//! ## 데이터 흐름
//!
//! ```text
//! body bytes ──from_slice──▶ GenerateReportRequest ──into_records──▶ Vec<UserRecord>
//!              (500 on bad JSON)                     (400 on missing field)
//! ```

pub mod dto;
pub mod entities;
