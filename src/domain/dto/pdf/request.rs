//! PDF 생성 요청 DTO
//!
//! `POST /generate-pdf` 요청 본문을 매핑합니다.
use serde::Deserialize;

/// `name`이 없을 때 사용하는 이름
pub const DEFAULT_PDF_NAME: &str = "Anonymous";

/// PDF 생성 요청 구조체
#[derive(Debug, Default, Deserialize)]
pub struct GeneratePdfRequest {
    /// 인사말에 들어갈 이름 (없거나 `null`이면 `Anonymous`)
    #[serde(default)]
    pub name: Option<String>,
}

impl GeneratePdfRequest {
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(DEFAULT_PDF_NAME)
    }
}
