//! # Service Registry
//!
//! 타입 기반 싱글톤 컨테이너입니다. 인프라 컴포넌트(Redis 기반 방문 카운터 등)는
//! 애플리케이션 시작 시 `ServiceLocator::set()`으로 직접 등록되고,
//! 핸들러는 `ServiceLocator::get::<T>()`으로 동일한 인스턴스를 꺼내 씁니다.
//!
//! ## 동작 방식
//!
//! ```text
//! 1. 런타임 초기화 (main)
//!    ├─ RedisClient 생성
//!    ├─ VisitCounterService::new(redis)
//!    └─ ServiceLocator::set(Arc<VisitCounterService>)
//!
//! 2. 요청 처리 (handlers)
//!    └─ ServiceLocator::get::<VisitCounterService>() → Arc 복제 반환
//! ```
//!
//! 등록되지 않은 타입을 조회하면 패닉 대신 `AppError::InternalError`를 반환합니다.

use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use log::debug;
use once_cell::sync::Lazy;

use crate::core::errors::{AppError, AppResult};

/// 전역 싱글톤 컨테이너
pub struct ServiceLocator {
    instances: RwLock<HashMap<TypeId, Arc<dyn Any + Send + Sync>>>,
}

impl ServiceLocator {
    fn new() -> Self {
        Self {
            instances: RwLock::new(HashMap::new()),
        }
    }

    /// 등록된 인스턴스를 조회합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::InternalError` - 해당 타입이 등록되지 않았거나 락이 오염된 경우
    pub fn get<T: 'static + Send + Sync>() -> AppResult<Arc<T>> {
        let type_name = Self::extract_clean_type_name(std::any::type_name::<T>());

        let instances = LOCATOR
            .instances
            .read()
            .map_err(|e| AppError::InternalError(format!("Service registry lock poisoned: {}", e)))?;

        let instance = instances
            .get(&TypeId::of::<T>())
            .cloned()
            .ok_or_else(|| AppError::InternalError(format!("Service not registered: {}", type_name)))?;

        instance
            .downcast::<T>()
            .map_err(|_| AppError::InternalError(format!("Type mismatch in ServiceLocator: {}", type_name)))
    }

    /// 해당 타입이 등록되어 있는지 확인합니다.
    pub fn contains<T: 'static + Send + Sync>() -> bool {
        LOCATOR
            .instances
            .read()
            .map(|instances| instances.contains_key(&TypeId::of::<T>()))
            .unwrap_or(false)
    }

    /// 인스턴스를 등록합니다. 같은 타입이 이미 있으면 교체합니다.
    pub fn set<T: 'static + Send + Sync>(instance: Arc<T>) {
        let clean_name = Self::extract_clean_type_name(std::any::type_name::<T>());

        debug!("📦 Registering: {}", clean_name);

        let mut instances = match LOCATOR.instances.write() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        instances.insert(TypeId::of::<T>(), instance as Arc<dyn Any + Send + Sync>);
    }

    fn extract_clean_type_name(type_name: &str) -> &str {
        match type_name.rfind("::") {
            Some(pos) => &type_name[pos + 2..],
            None => type_name,
        }
    }
}

static LOCATOR: Lazy<ServiceLocator> = Lazy::new(ServiceLocator::new);
