//! HTTP 미들웨어 설정 모듈
//!
//! Rate Limiting(`actix-governor`)과 CORS(`actix-cors`) 설정값을 환경 변수에서 읽어옵니다.

use std::env;

use log::info;

use super::data_config::{parse_or_default, Environment};

/// Rate Limiting 설정 구조체
#[derive(Debug, Clone, PartialEq)]
pub struct RateLimitConfig {
    pub per_second: u64,
    pub burst_size: u32,
}

impl RateLimitConfig {
    pub const DEFAULT_PER_SECOND: u64 = 100;
    pub const DEFAULT_BURST_SIZE: u32 = 200;

    /// 환경변수에서 Rate Limiting 설정을 로드합니다
    ///
    /// * `RATE_LIMIT_PER_SECOND` - 초당 허용 요청 수 (기본값: 100)
    /// * `RATE_LIMIT_BURST_SIZE` - 버스트 허용량 (기본값: 200)
    ///
    /// ```bash
    /// # .env.dev (개발 환경)
    /// RATE_LIMIT_PER_SECOND=20
    /// RATE_LIMIT_BURST_SIZE=40
    /// ```
    pub fn from_env() -> Self {
        let config = Self::from_values(
            env::var("RATE_LIMIT_PER_SECOND").ok(),
            env::var("RATE_LIMIT_BURST_SIZE").ok(),
        );

        info!("Rate Limiting 설정 로드됨: {:?}", config);
        config
    }

    fn from_values(per_second: Option<String>, burst_size: Option<String>) -> Self {
        let per_second = parse_or_default("RATE_LIMIT_PER_SECOND", per_second, Self::DEFAULT_PER_SECOND);
        let burst_size = parse_or_default("RATE_LIMIT_BURST_SIZE", burst_size, Self::DEFAULT_BURST_SIZE);

        // governor는 0을 허용하지 않음
        Self {
            per_second: per_second.max(1),
            burst_size: burst_size.max(1),
        }
    }
}

/// CORS 허용 Origin 설정
#[derive(Debug, Clone, PartialEq)]
pub enum CorsPolicy {
    /// 모든 Origin 허용 (개발 환경)
    Permissive,
    /// 명시된 Origin만 허용
    AllowList(Vec<String>),
}

pub struct CorsConfig;

impl CorsConfig {
    pub const DEFAULT_ORIGINS: [&'static str; 2] = ["http://localhost:3000", "http://127.0.0.1:3000"];

    /// 현재 환경에 맞는 CORS 정책을 반환합니다.
    ///
    /// # Environment Variables
    ///
    /// - `CORS_ALLOWED_ORIGINS`: 쉼표로 구분된 Origin 목록
    pub fn policy() -> CorsPolicy {
        Self::policy_for(&Environment::current(), env::var("CORS_ALLOWED_ORIGINS").ok())
    }

    /// 특정 환경과 Origin 목록 문자열에 대한 CORS 정책
    pub fn policy_for(environment: &Environment, origins: Option<String>) -> CorsPolicy {
        if *environment == Environment::Development {
            return CorsPolicy::Permissive;
        }

        let parsed: Vec<String> = origins
            .as_deref()
            .unwrap_or_default()
            .split(',')
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
            .map(str::to_string)
            .collect();

        if parsed.is_empty() {
            CorsPolicy::AllowList(Self::DEFAULT_ORIGINS.iter().map(|o| o.to_string()).collect())
        } else {
            CorsPolicy::AllowList(parsed)
        }
    }
}
