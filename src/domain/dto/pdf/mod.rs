//! PDF 생성 관련 DTO 모듈

pub mod request;

pub use request::{GeneratePdfRequest, DEFAULT_PDF_NAME};
