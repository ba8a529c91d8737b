//! 외부 카운터 저장소 모듈
//!
//! Redis를 백엔드로 하는 원자적 방문 카운터를 제공합니다.
//!
//! # 사용 예제
//!
//! ```rust,ignore
//! use crate::caching::redis::{CounterStore, RedisClient};
//!
//! let redis = RedisClient::from_env()?;
//! let count = redis.increment("hits").await?;
//! ```
//!
//! # 환경 설정
//!
//! ```bash
//! REDIS_URL=redis://localhost:6379  # 기본값
//! ```

pub mod redis;
