//! 리포트 생성 비즈니스 로직
//!
//! 요청 DTO를 검증된 레코드로 바꾸고 CSV 문서로 직렬화합니다.
//! 상태를 갖지 않으므로 같은 입력에 대해 항상 바이트 단위로 같은 결과를 냅니다.

use std::sync::Arc;

use log::{debug, info};
use once_cell::sync::Lazy;

use crate::core::errors::AppResult;
use crate::domain::dto::reports::GenerateReportRequest;
use crate::domain::entities::UserRecord;
use crate::utils::csv_utils::CsvWriter;

/// 다운로드 파일명
pub const REPORT_FILENAME: &str = "report.csv";

/// 생성된 CSV 리포트
#[derive(Debug, Clone, PartialEq)]
pub struct CsvReport {
    /// CSV 본문 (헤더 포함)
    pub content: String,
    /// 데이터 행 수 (헤더 제외)
    pub row_count: usize,
}

/// 리포트 생성 서비스
///
/// ```rust,ignore
/// let service = ReportService::instance();
/// let report = service.generate(GenerateReportRequest::from_slice(&body)?)?;
/// ```
#[derive(Debug, Default)]
pub struct ReportService;

static INSTANCE: Lazy<Arc<ReportService>> = Lazy::new(|| Arc::new(ReportService));

impl ReportService {
    /// 프로세스 전역 인스턴스를 반환합니다.
    pub fn instance() -> Arc<Self> {
        INSTANCE.clone()
    }

    /// 요청을 검증하고 CSV 리포트를 생성합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::ValidationError` - 하나라도 필수 필드가 없는 레코드가 있는 경우
    pub fn generate(&self, request: GenerateReportRequest) -> AppResult<CsvReport> {
        debug!("리포트 요청 수신: {}개 레코드", request.users.len());

        let records = request.into_records()?;
        let report = self.render_csv(&records);

        info!("📄 CSV 리포트 생성 완료: {}행", report.row_count);
        Ok(report)
    }

    /// 검증된 레코드를 입력 순서대로 CSV로 직렬화합니다.
    pub fn render_csv(&self, records: &[UserRecord]) -> CsvReport {
        let mut writer = CsvWriter::new();
        writer.write_record(UserRecord::FIELDS);

        for record in records {
            writer.write_record(record.fields());
        }

        CsvReport {
            row_count: writer.rows() - 1,
            content: writer.into_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::errors::AppError;
    use serde_json::json;

    fn request(users: serde_json::Value) -> GenerateReportRequest {
        GenerateReportRequest::from_slice(json!({ "users": users }).to_string().as_bytes()).unwrap()
    }

    #[test]
    fn test_single_record_scenario() {
        let report = ReportService::instance()
            .generate(request(json!([{"name": "Ann", "email": "a@x.com", "score": 90}])))
            .unwrap();

        assert_eq!(report.content, "name,email,score\r\nAnn,a@x.com,90\r\n");
        assert_eq!(report.row_count, 1);
    }

    #[test]
    fn test_empty_users_yields_header_only() {
        let report = ReportService::instance().generate(request(json!([]))).unwrap();

        assert_eq!(report.content, "name,email,score\r\n");
        assert_eq!(report.row_count, 0);
    }

    #[test]
    fn test_line_count_and_order() {
        let users: Vec<_> = (0..5)
            .map(|i| json!({"name": format!("user{}", i), "email": format!("u{}@x.com", i), "score": i}))
            .collect();

        let report = ReportService::instance().generate(request(json!(users))).unwrap();
        let lines: Vec<&str> = report.content.split_terminator("\r\n").collect();

        assert_eq!(lines.len(), 6);
        assert_eq!(lines[0], "name,email,score");
        for (i, line) in lines[1..].iter().enumerate() {
            assert_eq!(*line, format!("user{},u{}@x.com,{}", i, i, i));
        }
    }

    #[test]
    fn test_generation_is_idempotent() {
        let users = json!([
            {"name": "Lee, Ann", "email": "a@x.com", "score": "A\"+"},
            {"name": "Bob", "email": "b@x.com", "score": 71.5, "extra": true}
        ]);

        let first = ReportService::instance().generate(request(users.clone())).unwrap();
        let second = ReportService::instance().generate(request(users)).unwrap();

        assert_eq!(first, second);
        assert_eq!(
            first.content,
            "name,email,score\r\n\"Lee, Ann\",a@x.com,\"A\"\"+\"\r\nBob,b@x.com,71.5\r\n"
        );
    }

    #[test]
    fn test_invalid_record_rejects_whole_request() {
        let result = ReportService::instance().generate(request(json!([
            {"name": "Ann", "email": "a@x.com", "score": 90},
            {"name": "Bob"}
        ])));

        assert!(matches!(result, Err(AppError::ValidationError(_))));
    }
}
