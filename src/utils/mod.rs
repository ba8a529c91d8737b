//! 공통 유틸리티 함수 모듈
//!
//! 애플리케이션 전체에서 사용되는 공통 유틸리티 함수들을 제공합니다.
//!
//! # Modules
//!
//! - [`csv_utils`] - CSV 필드 이스케이프 및 행 작성기
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::utils::csv_utils::CsvWriter;
//!
//! let mut writer = CsvWriter::new();
//! writer.write_record(["name", "email", "score"]);
//! let csv = writer.into_string();
//! ```

pub mod csv_utils;
