//! 리포트 관련 DTO 모듈
//!
//! 현재는 요청 DTO만 존재합니다. 응답은 CSV 본문 그대로 전달되므로
//! 별도의 응답 DTO를 두지 않습니다.

pub mod request;

pub use request::GenerateReportRequest;
