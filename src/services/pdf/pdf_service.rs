//! PDF 생성 비즈니스 로직
//!
//! A4 한 페이지에 `Hello {name}, this is your PDF!` 한 줄을 Helvetica 12pt로 씁니다.

use std::sync::Arc;

use log::{debug, info};
use once_cell::sync::Lazy;
use printpdf::{BuiltinFont, Mm, PdfDocument};

use crate::core::errors::{AppError, AppResult};

/// 응답 파일명
pub const PDF_FILENAME: &str = "output.pdf";

const DOCUMENT_TITLE: &str = "output";
const PAGE_WIDTH_MM: f32 = 210.0;
const PAGE_HEIGHT_MM: f32 = 297.0;
const MARGIN_MM: f32 = 10.0;
const LINE_HEIGHT_MM: f32 = 10.0;
const FONT_SIZE_PT: f32 = 12.0;

/// PDF 생성 서비스
#[derive(Debug, Default)]
pub struct PdfService;

static INSTANCE: Lazy<Arc<PdfService>> = Lazy::new(|| Arc::new(PdfService));

impl PdfService {
    /// 프로세스 전역 인스턴스를 반환합니다.
    pub fn instance() -> Arc<Self> {
        INSTANCE.clone()
    }

    /// 페이지에 들어갈 문장
    pub fn greeting_line(name: &str) -> String {
        format!("Hello {}, this is your PDF!", name)
    }

    /// 인사말 PDF를 생성하여 바이트로 반환합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::InternalError` - 폰트 등록 또는 직렬화 실패
    pub fn render(&self, name: &str) -> AppResult<Vec<u8>> {
        let line = Self::greeting_line(name);
        debug!("PDF 생성 요청: {}", line);

        let (doc, page, layer) = PdfDocument::new(
            DOCUMENT_TITLE,
            Mm(PAGE_WIDTH_MM),
            Mm(PAGE_HEIGHT_MM),
            "Layer 1",
        );

        let font = doc
            .add_builtin_font(BuiltinFont::Helvetica)
            .map_err(|e| AppError::InternalError(e.to_string()))?;

        // 상단 여백 아래 첫 줄의 기준선
        let baseline = PAGE_HEIGHT_MM - MARGIN_MM - LINE_HEIGHT_MM * 0.75;
        doc.get_page(page)
            .get_layer(layer)
            .use_text(line, FONT_SIZE_PT, Mm(MARGIN_MM), Mm(baseline), &font);

        let bytes = doc
            .save_to_bytes()
            .map_err(|e| AppError::InternalError(e.to_string()))?;

        info!("📄 PDF 생성 완료: {} bytes", bytes.len());
        Ok(bytes)
    }
}
