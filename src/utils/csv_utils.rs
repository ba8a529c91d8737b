//! # CSV 유틸리티
//!
//! RFC 4180 규칙을 따르는 최소한의 CSV 작성기입니다.
//!
//! - 쉼표, 큰따옴표, CR, LF가 포함된 필드는 큰따옴표로 감쌉니다.
//! - 필드 내부의 큰따옴표는 두 번(`""`) 씁니다.
//! - 각 행은 `\r\n`으로 끝납니다.

use std::borrow::Cow;

/// 행 구분자
pub const LINE_TERMINATOR: &str = "\r\n";

/// 필요한 경우에만 필드를 큰따옴표로 감쌉니다.
///
/// # 예제
/// ```rust,ignore
/// use crate::utils::csv_utils::escape_field;
///
/// assert_eq!(escape_field("Ann"), "Ann");
/// assert_eq!(escape_field("Lee, Ann"), "\"Lee, Ann\"");
/// assert_eq!(escape_field("say \"hi\""), "\"say \"\"hi\"\"\"");
/// ```
pub fn escape_field(field: &str) -> Cow<'_, str> {
    if field.contains([',', '"', '\r', '\n']) {
        Cow::Owned(format!("\"{}\"", field.replace('"', "\"\"")))
    } else {
        Cow::Borrowed(field)
    }
}

/// 메모리 버퍼에 CSV 행을 쌓는 작성기
#[derive(Debug, Default)]
pub struct CsvWriter {
    buffer: String,
    rows: usize,
}

impl CsvWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// 한 행을 기록합니다. 헤더도 일반 행과 동일하게 기록합니다.
    pub fn write_record<I, S>(&mut self, fields: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for (index, field) in fields.into_iter().enumerate() {
            if index > 0 {
                self.buffer.push(',');
            }
            self.buffer.push_str(&escape_field(field.as_ref()));
        }
        self.buffer.push_str(LINE_TERMINATOR);
        self.rows += 1;
    }

    /// 지금까지 기록된 행 수 (헤더 포함)
    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn into_string(self) -> String {
        self.buffer
    }
}
