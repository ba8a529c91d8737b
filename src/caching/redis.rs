//! # Redis 카운터 클라이언트 구현
//!
//! 방문 카운터의 원자적 증가를 Redis `INCR`에 위임합니다.
//!
//! ## 연결 관리
//!
//! `Client::open`은 URL만 검증하고 실제 연결은 만들지 않습니다.
//! 각 명령은 멀티플렉싱 연결을 얻어 실행하므로, 서버 시작 시점에 Redis가
//! 없더라도 이후 Redis가 올라오면 그대로 동작합니다.

use async_trait::async_trait;
use log::info;
use redis::{AsyncCommands, Client};

use crate::config::RedisConfig;
use crate::core::errors::{AppError, AppResult};

/// 원자적 정수 카운터 저장소
///
/// 운영 환경에서는 [`RedisClient`]가 구현하며, 테스트에서는 메모리 구현으로 대체합니다.
#[async_trait]
pub trait CounterStore: Send + Sync {
    /// `key`의 값을 1 증가시키고 증가된 값을 반환합니다.
    /// 키가 없으면 0에서 시작합니다.
    async fn increment(&self, key: &str) -> AppResult<i64>;

    /// 저장소 가용성을 확인합니다.
    async fn ping(&self) -> AppResult<()>;
}

/// Redis 클라이언트 래퍼
#[derive(Clone)]
pub struct RedisClient {
    /// 멀티플렉싱을 지원하는 Redis 클라이언트
    client: Client,
}

impl RedisClient {
    /// `REDIS_URL` 설정으로 클라이언트를 생성합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::RedisError` - 잘못된 URL 형식
    pub fn from_env() -> AppResult<Self> {
        Self::open(&RedisConfig::url())
    }

    /// 지정한 URL로 클라이언트를 생성합니다. 네트워크 연결은 하지 않습니다.
    pub fn open(redis_url: &str) -> AppResult<Self> {
        let client = Client::open(redis_url)
            .map_err(|e| AppError::RedisError(e.to_string()))?;

        Ok(Self { client })
    }

    async fn connection(&self) -> AppResult<redis::aio::MultiplexedConnection> {
        self.client
            .get_multiplexed_async_connection()
            .await
            .map_err(|e| AppError::RedisError(e.to_string()))
    }
}

#[async_trait]
impl CounterStore for RedisClient {
    async fn increment(&self, key: &str) -> AppResult<i64> {
        let mut conn = self.connection().await?;

        conn.incr(key, 1)
            .await
            .map_err(|e| AppError::RedisError(e.to_string()))
    }

    async fn ping(&self) -> AppResult<()> {
        let mut conn = self.connection().await?;

        redis::cmd("PING")
            .query_async::<()>(&mut conn)
            .await
            .map_err(|e| AppError::RedisError(e.to_string()))?;

        info!("✅ Redis 연결 성공");
        Ok(())
    }
}
