//! # Core Module
//!
//! 서비스 전역에서 공유하는 기반 구성 요소입니다.
//!
//! - [`errors`] - `AppError`와 HTTP 응답 변환
//! - [`registry`] - 타입 기반 싱글톤 컨테이너 `ServiceLocator`
//!
//! ## 외부 라이브러리 통합
//! 1. 래퍼 구조체 생성 (예: `RedisClient`)
//! 2. 서비스로 감싸서 `ServiceLocator::set()` 으로 등록
//! 3. 핸들러에서 `ServiceLocator::get::<T>()` 으로 조회
//!
//! ## 트러블슈팅
//!
//! ### 미등록 타입 에러
//! ```text
//! {"error": "Service not registered: VisitCounterService"}
//! ```
//! **해결**: `main`에서 `ServiceLocator::set()` 호출 여부 확인

pub mod errors;
pub mod registry;

pub use errors::*;
pub use registry::*;
