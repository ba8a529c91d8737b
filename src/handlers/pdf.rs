//! # PDF HTTP Handlers
//!
//! | 메서드 | 경로 | 설명 | 상태 코드 |
//! |--------|------|------|-----------|
//! | `POST` | `/generate-pdf` | 인사말 PDF 생성 | 200 OK |

use actix_web::http::header;
use actix_web::{post, web, HttpResponse};

use crate::core::errors::AppError;
use crate::domain::dto::pdf::GeneratePdfRequest;
use crate::services::pdf::{PdfService, PDF_FILENAME};

/// 인사말 PDF 생성 핸들러
///
/// # 요청 본문
///
/// ```json
/// {"name": "Ann"}
/// ```
///
/// `name`이 없으면 `Anonymous`를 사용합니다.
///
/// # 응답
///
/// ## 성공 (200 OK)
/// ```text
/// Content-Type: application/pdf
/// Content-Disposition: inline; filename=output.pdf
/// ```
///
/// ```bash
/// curl -X POST http://localhost:5000/generate-pdf \
///   -H "Content-Type: application/json" \
///   -d '{"name":"Ann"}' -o output.pdf
/// ```
#[post("/generate-pdf")]
pub async fn generate_pdf(payload: web::Json<GeneratePdfRequest>) -> Result<HttpResponse, AppError> {
    let content = PdfService::instance().render(payload.display_name())?;

    Ok(HttpResponse::Ok()
        .content_type("application/pdf")
        .insert_header((
            header::CONTENT_DISPOSITION,
            format!("inline; filename={}", PDF_FILENAME),
        ))
        .body(content))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::StatusCode;
    use actix_web::{test, App};

    async fn post_pdf(body: &'static str) -> (StatusCode, Option<String>, Option<String>, web::Bytes) {
        let app = test::init_service(App::new().service(generate_pdf)).await;

        let req = test::TestRequest::post()
            .uri("/generate-pdf")
            .insert_header((header::CONTENT_TYPE, "application/json"))
            .set_payload(body)
            .to_request();
        let resp = test::call_service(&app, req).await;

        let header_value = |name: header::HeaderName| {
            resp.headers()
                .get(name)
                .and_then(|v| v.to_str().ok())
                .map(str::to_string)
        };
        let content_type = header_value(header::CONTENT_TYPE);
        let disposition = header_value(header::CONTENT_DISPOSITION);
        let status = resp.status();
        let body = test::read_body(resp).await;

        (status, content_type, disposition, body)
    }

    #[actix_web::test]
    async fn test_named_pdf_is_inline_document() {
        let (status, content_type, disposition, body) = post_pdf(r#"{"name":"Ann"}"#).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(content_type.as_deref(), Some("application/pdf"));
        assert_eq!(disposition.as_deref(), Some("inline; filename=output.pdf"));
        assert!(body.starts_with(b"%PDF"));
    }

    #[actix_web::test]
    async fn test_missing_name_still_renders() {
        let (status, content_type, _, body) = post_pdf("{}").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(content_type.as_deref(), Some("application/pdf"));
        assert!(body.starts_with(b"%PDF"));
    }
}
