//! # Configuration Module
//!
//! 리포트 서비스의 설정 관리를 담당하는 모듈입니다.
//! 모든 설정값은 환경 변수에서 읽으며, 값이 없거나 잘못된 경우
//! 컨테이너 환경에서 바로 동작하는 기본값을 사용합니다.
//!
//! ## 모듈 구성
//!
//! - [`data_config`] - 실행 환경, 서버 바인딩, Redis 카운터 설정
//! - [`http_config`] - Rate Limiting, CORS 설정
//!
//! ## 환경 변수 설정 가이드
//!
//! ```bash
//! # 서버 설정
//! export HOST="0.0.0.0"
//! export PORT="5000"
//! export WORKERS="4"
//! export MAX_PAYLOAD_BYTES="262144"
//! export GREETING_MESSAGE="Hello from Docker-1!"
//!
//! # Redis 방문 카운터
//! export REDIS_URL="redis://redis:6379"
//! export VISIT_COUNTER_KEY="hits"
//!
//! # 미들웨어
//! export RATE_LIMIT_PER_SECOND="100"
//! export RATE_LIMIT_BURST_SIZE="200"
//! export CORS_ALLOWED_ORIGINS="https://app.example.com,https://admin.example.com"
//!
//! # 환경 설정
//! export ENVIRONMENT="production"  # development, test, staging, production
//! ```

pub mod data_config;
pub mod http_config;

pub use data_config::*;
pub use http_config::*;
