//! 비즈니스 로직을 담당하는 서비스 계층 모듈
//!
//! # Features
//!
//! - [`reports`] - 사용자 레코드 검증 및 CSV 리포트 생성
//! - [`pdf`] - 인사말 PDF 생성
//! - [`visits`] - Redis 기반 방문 카운터
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::reports::ReportService;
//! use crate::services::visits::VisitCounterService;
//!
//! let report = ReportService::instance().generate(request)?;
//! let counter = ServiceLocator::get::<VisitCounterService>()?;
//! ```

pub mod pdf;
pub mod reports;
pub mod visits;
