//! 리포트 생성 데모 서비스 메인 애플리케이션
//!
//! Actix-web 기반의 HTTP 서버를 구동합니다.
//! Redis 방문 카운터를 등록하고 리포트 생성 API를 제공합니다.

use std::io;
use std::sync::Arc;

use actix_cors::Cors;
use actix_governor::{Governor, GovernorConfigBuilder};
use actix_web::http::header;
use actix_web::{middleware, web, App, HttpServer};
use dotenv::dotenv;
use env_logger::Env;
use log::{error, info, warn};
use report_service_backend::caching::redis::RedisClient;
use report_service_backend::config::{
    CorsConfig, CorsPolicy, Environment, RateLimitConfig, RedisConfig, ServerConfig,
};
use report_service_backend::core::registry::ServiceLocator;
use report_service_backend::routes::configure_all_routes;
use report_service_backend::services::visits::VisitCounterService;

#[actix_web::main]
async fn main() -> io::Result<()> {
    // 환경 설정 및 로깅 초기화
    init_logging();
    load_env_file();

    info!("🚀 리포트 서비스 시작중... (environment: {})", Environment::current().as_str());

    // 방문 카운터 등록
    initialize_visit_counter().await;
    if !ServiceLocator::contains::<VisitCounterService>() {
        warn!("⚠️ 방문 카운터가 등록되지 않아 /visits 요청은 500으로 응답합니다");
    }

    // HTTP 서버 시작
    start_http_server().await
}

/// HTTP 서버를 구성하고 실행합니다
///
/// Rate Limiting, CORS, 로깅, 경로 정규화 미들웨어를 포함합니다.
///
/// # Errors
///
/// * `std::io::Error` - 포트 바인딩 실패, 잘못된 Rate Limiting 설정 또는 서버 실행 오류
async fn start_http_server() -> io::Result<()> {
    let bind_address = ServerConfig::bind_address();
    let workers = ServerConfig::workers();
    let max_payload = ServerConfig::max_payload_bytes();

    info!("🌐 서버가 http://{} 에서 실행중입니다", bind_address);
    info!("📍 Report: POST http://{}/generate-report", bind_address);
    info!("📍 PDF: POST http://{}/generate-pdf", bind_address);
    info!("📍 Health check: http://{}/health", bind_address);

    // Rate Limiting 설정
    let rate_limit_config = RateLimitConfig::from_env();
    let governor_conf = GovernorConfigBuilder::default()
        .requests_per_second(rate_limit_config.per_second)
        .burst_size(rate_limit_config.burst_size)
        .use_headers()
        .finish()
        .ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("잘못된 Rate Limiting 설정: {:?}", rate_limit_config),
            )
        })?;

    info!(
        "🛡️ Rate Limiting 활성화: 초당 {}요청, 버스트 {}개",
        rate_limit_config.per_second,
        rate_limit_config.burst_size
    );

    let cors_policy = CorsConfig::policy();
    info!("CORS 정책: {:?}", cors_policy);

    HttpServer::new(move || {
        App::new()
            // Rate Limiting 미들웨어 (가장 먼저 적용)
            .wrap(Governor::new(&governor_conf))
            .wrap(configure_cors(&cors_policy))
            .wrap(middleware::Logger::default())
            .wrap(middleware::NormalizePath::trim())
            // 요청 본문 크기 제한
            .app_data(web::PayloadConfig::new(max_payload))
            .configure(configure_all_routes)
    })
        .bind(&bind_address)?
        .workers(workers)
        .run()
        .await
}

/// 환경별 설정 파일을 로드합니다
///
/// # Environment Variables
///
/// * `PROFILE=dev` - .env.dev 파일 로드 (기본값)
/// * `PROFILE=prod` - .env.prod 파일 로드
/// * 기타 - 기본 .env 파일 로드
///
/// 파일이 없어도 실행은 계속됩니다 (컨테이너에서는 환경 변수를 직접 주입).
fn load_env_file() {
    let profile = std::env::var("PROFILE").unwrap_or_else(|_| "dev".to_string());

    info!("Current profile: {}", profile);

    match profile.as_str() {
        "prod" => match dotenv::from_filename(".env.prod") {
            Ok(_) => info!(".env.prod 파일 로드 됨"),
            Err(e) => warn!(".env.prod 파일 로드 실패: {}", e),
        },
        "dev" => match dotenv::from_filename(".env.dev") {
            Ok(_) => info!(".env.dev 파일 로드 됨"),
            Err(e) => warn!(".env.dev 파일 로드 실패: {}", e),
        },
        _ => {
            // 기본 .env 파일 로드
            dotenv().ok();
            info!("기본 .env 파일 로드");
        }
    }
}

/// 로깅 시스템을 초기화합니다
///
/// * `RUST_LOG` - 로깅 레벨 설정 (기본값: "info,actix_web=info")
///
/// ```bash
/// RUST_LOG=debug cargo run
/// RUST_LOG=report_service_backend::services=debug cargo run
/// ```
fn init_logging() {
    env_logger::init_from_env(Env::default().default_filter_or("info,actix_web=info"));
}

/// Redis 방문 카운터를 생성하고 ServiceLocator에 등록합니다
///
/// Redis에 연결할 수 없어도 서버는 기동합니다.
/// 이 경우 `/visits` 요청만 500으로 응답하고, Redis가 올라오면 자동으로 복구됩니다.
/// URL 자체가 잘못된 경우에는 카운터를 등록하지 않습니다.
async fn initialize_visit_counter() {
    info!("📡 Redis 방문 카운터 초기화 중...");

    let redis_client = match RedisClient::from_env() {
        Ok(client) => Arc::new(client),
        Err(e) => {
            error!("❌ Redis 클라이언트 생성 실패 ({}): {}", RedisConfig::url(), e);
            return;
        }
    };

    let service = VisitCounterService::new(redis_client, RedisConfig::counter_key());
    service.check_store().await;

    info!("✅ 방문 카운터 등록 완료 (key: {})", service.key());
    ServiceLocator::set(Arc::new(service));
}

/// CORS 설정을 구성합니다
///
/// 개발 환경에서는 모든 Origin을 허용하고,
/// 그 외 환경에서는 `CORS_ALLOWED_ORIGINS` 목록만 허용합니다.
fn configure_cors(policy: &CorsPolicy) -> Cors {
    match policy {
        CorsPolicy::Permissive => Cors::permissive(),
        CorsPolicy::AllowList(origins) => origins
            .iter()
            .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin))
            // 허용할 HTTP 메서드
            .allowed_methods(vec!["GET", "POST", "OPTIONS"])
            // 허용할 헤더
            .allowed_headers(vec![header::ACCEPT, header::CONTENT_TYPE])
            // 브라우저가 다운로드 파일명을 읽을 수 있도록 노출
            .expose_headers(vec![header::CONTENT_DISPOSITION])
            // Preflight 요청 캐시 시간 (초)
            .max_age(3600),
    }
}
