//! # Report HTTP Handlers
//!
//! JSON 사용자 목록을 받아 CSV 파일 다운로드로 돌려주는 엔드포인트입니다.
//!
//! | 메서드 | 경로 | 설명 | 상태 코드 |
//! |--------|------|------|-----------|
//! | `POST` | `/generate-report` | CSV 리포트 생성 | 200 OK |
//!
//! 요청 본문은 `web::Json` 추출기 대신 원시 바이트(`web::Bytes`)로 받습니다.
//! 추출기를 쓰면 잘못된 JSON이 프레임워크 기본값인 400으로 응답되지만,
//! 이 엔드포인트는 잘못된 JSON을 500(`InternalError`)으로 응답해야 합니다.

use actix_web::http::header;
use actix_web::{post, web, HttpResponse};

use crate::core::errors::AppError;
use crate::domain::dto::reports::GenerateReportRequest;
use crate::services::reports::{ReportService, REPORT_FILENAME};

/// CSV 리포트 생성 핸들러
///
/// # 엔드포인트
///
/// `POST /generate-report`
///
/// # 요청 본문
///
/// ```json
/// {
///   "users": [
///     {"name": "Ann", "email": "a@x.com", "score": 90}
///   ]
/// }
/// ```
///
/// # 응답
///
/// ## 성공 (200 OK)
/// ```text
/// Content-Type: text/csv
/// Content-Disposition: attachment; filename=report.csv
///
/// name,email,score
/// Ann,a@x.com,90
/// ```
///
/// ## 실패 사례
///
/// ### 필드 누락 (400 Bad Request)
/// ```json
/// {"error": "Each user must have name, email, and score"}
/// ```
///
/// ### 잘못된 JSON (500 Internal Server Error)
/// ```json
/// {"error": "EOF while parsing a list at line 1 column 11"}
/// ```
///
/// # 사용 예제
///
/// ```bash
/// curl -X POST http://localhost:5000/generate-report \
///   -H "Content-Type: application/json" \
///   -d '{"users":[{"name":"Ann","email":"a@x.com","score":90}]}' \
///   -o report.csv
/// ```
#[post("/generate-report")]
pub async fn generate_report(body: web::Bytes) -> Result<HttpResponse, AppError> {
    let request = GenerateReportRequest::from_slice(&body)?;

    let service = ReportService::instance();
    let report = service.generate(request)?;

    Ok(HttpResponse::Ok()
        .content_type("text/csv")
        .insert_header(report_disposition())
        .body(report.content))
}

/// `attachment; filename=report.csv`
///
/// `ContentDisposition` 타입은 파일명을 따옴표로 감싸므로 헤더 값을 직접 만듭니다.
fn report_disposition() -> (header::HeaderName, String) {
    (
        header::CONTENT_DISPOSITION,
        format!("attachment; filename={}", REPORT_FILENAME),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::StatusCode;
    use actix_web::{test, App};
    use serde_json::json;

    async fn post_report(body: impl Into<web::Bytes>) -> (StatusCode, Option<String>, Option<String>, web::Bytes) {
        let app = test::init_service(App::new().service(generate_report)).await;

        let req = test::TestRequest::post()
            .uri("/generate-report")
            .insert_header((header::CONTENT_TYPE, "application/json"))
            .set_payload(body.into())
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
    async fn test_single_user_scenario() {
        let (status, content_type, disposition, body) =
            post_report(r#"{"users":[{"name":"Ann","email":"a@x.com","score":90}]}"#).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(content_type.as_deref(), Some("text/csv"));
        assert_eq!(disposition.as_deref(), Some("attachment; filename=report.csv"));
        assert_eq!(body, "name,email,score\r\nAnn,a@x.com,90\r\n");
    }

    #[actix_web::test]
    async fn test_missing_fields_scenario() {
        let (status, content_type, _, body) = post_report(r#"{"users":[{"name":"Bob"}]}"#).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(content_type.as_deref(), Some("application/json"));
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json, json!({"error": "Each user must have name, email, and score"}));
    }

    #[actix_web::test]
    async fn test_one_bad_record_rejects_all() {
        let payload = json!({"users": [
            {"name": "Ann", "email": "a@x.com", "score": 90},
            {"name": "Cid", "email": "c@x.com"}
        ]});
        let (status, _, _, body) = post_report(payload.to_string()).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(!String::from_utf8_lossy(&body).contains("Ann"));
    }

    #[actix_web::test]
    async fn test_empty_or_absent_users_yields_header() {
        for payload in [r#"{"users":[]}"#, "{}"] {
            let (status, _, _, body) = post_report(payload).await;

            assert_eq!(status, StatusCode::OK);
            assert_eq!(body, "name,email,score\r\n");
        }
    }

    #[actix_web::test]
    async fn test_large_integer_score_is_written_verbatim() {
        let (status, _, _, body) = post_report(
            r#"{"users":[{"name":"A","email":"e","score":123456789012345678901234567890}]}"#,
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "name,email,score\r\nA,e,123456789012345678901234567890\r\n");
    }

    #[actix_web::test]
    async fn test_null_or_scalar_users_is_internal_error() {
        for payload in [r#"{"users":null}"#, r#"{"users":7}"#, r#"{"users":true}"#] {
            let (status, _, _, body) = post_report(payload).await;

            assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR, "payload: {}", payload);
            assert!(!String::from_utf8_lossy(&body).contains("name,email,score"));
        }
    }

    #[actix_web::test]
    async fn test_string_users_is_validation_error() {
        let (status, _, _, body) = post_report(r#"{"users":"Ann"}"#).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json, json!({"error": "Each user must have name, email, and score"}));
    }

    #[actix_web::test]
    async fn test_malformed_json_is_internal_error() {
        let (status, content_type, _, body) = post_report(r#"{"users": ["#).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(content_type.as_deref(), Some("application/json"));
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        let message = json["error"].as_str().unwrap();
        assert!(message.contains("EOF"), "unexpected message: {}", message);
    }

    #[actix_web::test]
    async fn test_same_payload_twice_is_byte_identical() {
        let payload = json!({"users": [
            {"name": "Lee, Ann", "email": "a@x.com", "score": "A\"+"},
            {"name": "Bob", "email": "b@x.com", "score": null, "team": "blue"}
        ]})
        .to_string();

        let (_, _, _, first) = post_report(payload.clone()).await;
        let (_, _, _, second) = post_report(payload).await;

        assert_eq!(first, second);
        assert_eq!(
            first,
            "name,email,score\r\n\"Lee, Ann\",a@x.com,\"A\"\"+\"\r\nBob,b@x.com,\r\n"
        );
    }

    #[actix_web::test]
    async fn test_row_count_matches_input() {
        let users: Vec<_> = (0..20)
            .map(|i| json!({"name": format!("n{}", i), "email": "e@x.com", "score": i}))
            .collect();
        let (status, _, _, body) = post_report(json!({ "users": users }).to_string()).await;

        assert_eq!(status, StatusCode::OK);
        let text = String::from_utf8(body.to_vec()).unwrap();
        let lines: Vec<&str> = text.split_terminator("\r\n").collect();
        assert_eq!(lines.len(), 21);
        assert_eq!(lines[20], "n19,e@x.com,19");
    }
}
