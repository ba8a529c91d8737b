//! 방문 카운터 서비스
//!
//! `GET /visits` 요청마다 외부 저장소의 카운터를 1 증가시키고
//! 안내 문구를 만들어 줍니다. 카운터의 원자성은 저장소(`INCR`)가 보장합니다.

use std::sync::Arc;

use log::{debug, warn};

use crate::caching::redis::CounterStore;
use crate::core::errors::AppResult;

/// 방문 카운터 서비스
///
/// ```rust,ignore
/// let redis = Arc::new(RedisClient::from_env()?);
/// ServiceLocator::set(Arc::new(VisitCounterService::new(redis, RedisConfig::counter_key())));
///
/// let service = ServiceLocator::get::<VisitCounterService>()?;
/// let count = service.record_visit().await?;
/// ```
pub struct VisitCounterService {
    store: Arc<dyn CounterStore>,
    key: String,
}

impl VisitCounterService {
    pub fn new(store: Arc<dyn CounterStore>, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    /// 카운터 키
    pub fn key(&self) -> &str {
        &self.key
    }

    /// 방문을 기록하고 누적 방문 수를 반환합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::RedisError` - 저장소에 연결할 수 없거나 키가 정수가 아닌 경우
    pub async fn record_visit(&self) -> AppResult<i64> {
        let count = self.store.increment(&self.key).await?;
        debug!("방문 카운터 증가: {} = {}", self.key, count);
        Ok(count)
    }

    /// 저장소 연결을 확인합니다. 실패해도 서버 기동은 계속됩니다.
    pub async fn check_store(&self) -> bool {
        match self.store.ping().await {
            Ok(()) => true,
            Err(e) => {
                warn!("⚠️ 방문 카운터 저장소 연결 실패 (/visits 요청은 실패합니다): {}", e);
                false
            }
        }
    }

    /// 응답 문구
    pub fn message(count: i64) -> String {
        format!("Hello! This page has been viewed {} times.", count)
    }
}
