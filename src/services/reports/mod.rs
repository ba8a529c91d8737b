//! 리포트 생성 서비스 모듈
//!
//! JSON 사용자 목록을 CSV 다운로드 파일로 변환합니다.

pub mod report_service;

pub use report_service::{CsvReport, ReportService, REPORT_FILENAME};
