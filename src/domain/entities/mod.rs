//! # Domain Entities
//!
//! 검증을 통과한 도메인 객체들입니다. 영속화되지 않으며 요청 하나의 수명 동안만 존재합니다.

pub mod user_record;

pub use user_record::{UserRecord, INVALID_USER_MESSAGE};
