//! 방문 카운터 서비스 모듈
//!
//! 외부 저장소(Redis)에 위임된 단일 원자 카운터를 다룹니다.

pub mod visit_service;

pub use visit_service::VisitCounterService;
