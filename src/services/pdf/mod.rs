//! PDF 생성 서비스 모듈
//!
//! 이름 한 줄이 들어간 단일 페이지 PDF를 만듭니다.

pub mod pdf_service;

pub use pdf_service::{PdfService, PDF_FILENAME};
