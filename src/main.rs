use actix_cors::Cors;
use actix_web::middleware::{Compress, DefaultHeaders};
use actix_web::{App, HttpServer, web};
use dotenv::dotenv;
use human_panic::setup_panic;
use std::time::{Duration, Instant};
use tracing::{debug, warn};

use luct_report::config::{AppConfig, Listener};
use luct_report::routes;
use luct_report::runtime::{lifetime, logging};
use luct_report::utils::{json_error_handler, query_error_handler};

// 未配置来源时允许任意来源
fn build_cors(config: &AppConfig) -> Cors {
    let cors = Cors::default()
        .allow_any_method()
        .allow_any_header()
        .max_age(config.cors.max_age);

    if config.cors.allowed_origins.is_empty() {
        cors.allow_any_origin()
    } else {
        config
            .cors
            .allowed_origins
            .iter()
            .fold(cors, |cors, origin| cors.allowed_origin(origin))
    }
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();
    setup_panic!();

    let started = Instant::now();

    AppConfig::init().expect("Failed to initialize configuration");
    let config = AppConfig::get();
    let _log_guard = logging::init_tracing(config);

    warn!(
        "{} v{} starting ({}, {} environment)",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION"),
        config.app.system_name,
        config.app.environment
    );

    // 数据库连接、迁移与初始数据
    let startup = lifetime::startup::prepare_server_startup().await;
    let storage = startup.storage;

    debug!(
        "Startup preparation finished in {} ms",
        started.elapsed().as_millis()
    );

    let server = HttpServer::new(move || {
        App::new()
            .wrap(build_cors(config))
            .wrap(Compress::default())
            .wrap(
                DefaultHeaders::new()
                    .add(("Cache-Control", "no-store"))
                    .add(("X-Content-Type-Options", "nosniff")),
            )
            .app_data(web::QueryConfig::default().error_handler(query_error_handler))
            .app_data(web::JsonConfig::default().error_handler(json_error_handler))
            .app_data(web::PayloadConfig::new(config.server.limits.max_payload_size))
            .app_data(web::Data::new(storage.clone()))
            .configure(routes::configure_api_routes)
    })
    .keep_alive(Duration::from_secs(config.server.timeouts.keep_alive))
    .client_request_timeout(Duration::from_millis(config.server.timeouts.client_request))
    .client_disconnect_timeout(Duration::from_millis(
        config.server.timeouts.client_disconnect,
    ))
    .workers(config.server.workers)
    // 信号由 shutdown 模块统一处理
    .disable_signals();

    let listener = config.listener();
    let server = match &listener {
        Listener::Tcp(addr) => server.bind(addr)?,
        #[cfg(unix)]
        Listener::Unix(path) => {
            // 上次异常退出可能留下旧套接字文件
            if std::path::Path::new(path).exists() {
                std::fs::remove_file(path)?;
            }
            server.bind_uds(path)?
        }
    }
    .run();

    warn!(
        "Listening on {} with {} workers",
        listener, config.server.workers
    );

    let handle = server.handle();
    tokio::select! {
        res = server => res?,
        _ = lifetime::shutdown::listen_for_shutdown() => {
            warn!("Shutdown signal received, draining connections");
            handle.stop(true).await;
        }
    }

    Ok(())
}
