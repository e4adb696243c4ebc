/*!
 * 速率限制中间件
 *
 * 按客户端 IP 统计固定时间窗口内的请求数，超过上限返回 429。
 * 用于登录和注册端点，阈值来自配置 `[rate_limit]`。
 *
 * ```rust,ignore
 * web::resource("/api/login")
 *     .wrap(RateLimit::login())
 *     .route(web::post().to(login))
 * ```
 */

use actix_service::{Service, Transform};
use actix_web::{
    Error, HttpResponse,
    body::EitherBody,
    dev::{ServiceRequest, ServiceResponse},
    http::StatusCode,
    http::header::CONTENT_TYPE,
};
use futures_util::future::{LocalBoxFuture, Ready, ready};
use moka::Expiry;
use moka::future::Cache;
use once_cell::sync::Lazy;
use std::net::IpAddr;
use std::rc::Rc;
use std::time::{Duration, Instant};
use tracing::warn;

use crate::config::AppConfig;
use crate::models::{ApiResponse, ErrorCode};

/// 单个窗口内的计数
#[derive(Debug, Clone, Copy)]
struct WindowCount {
    count: u32,
    window_secs: u64,
}

// 条目存活一个完整窗口，更新计数不续期
struct WindowExpiry;

impl Expiry<String, WindowCount> for WindowExpiry {
    fn expire_after_create(
        &self,
        _key: &String,
        value: &WindowCount,
        _created_at: Instant,
    ) -> Option<Duration> {
        Some(Duration::from_secs(value.window_secs))
    }
}

/// 计数缓存
///
/// 键为 `前缀:IP:窗口序号`，窗口结束后条目自然过期
static RATE_LIMIT_CACHE: Lazy<Cache<String, WindowCount>> = Lazy::new(|| {
    Cache::builder()
        .expire_after(WindowExpiry)
        .max_capacity(100_000)
        .build()
});

#[derive(Clone)]
pub struct RateLimit {
    max_requests: u32,
    window_secs: u64,
    key_prefix: &'static str,
}

impl RateLimit {
    pub fn new(key_prefix: &'static str, max_requests: u32, window_secs: u64) -> Self {
        Self {
            max_requests,
            window_secs: window_secs.max(1),
            key_prefix,
        }
    }

    /// 登录端点
    pub fn login() -> Self {
        let config = &AppConfig::get().rate_limit;
        Self::new("login", config.login_max_requests, config.window_secs)
    }

    /// 注册端点
    pub fn register() -> Self {
        let config = &AppConfig::get().rate_limit;
        Self::new("register", config.register_max_requests, config.window_secs)
    }

    /// 原子地为 `key` 计数加一，返回加一后的值
    async fn hit(&self, key: String) -> u32 {
        let window_secs = self.window_secs;
        RATE_LIMIT_CACHE
            .entry(key)
            .and_upsert_with(|existing| async move {
                match existing {
                    Some(entry) => {
                        let current = entry.into_value();
                        WindowCount {
                            count: current.count.saturating_add(1),
                            ..current
                        }
                    }
                    None => WindowCount {
                        count: 1,
                        window_secs,
                    },
                }
            })
            .await
            .into_value()
            .count
    }

    // 当前所在的窗口序号及剩余秒数
    fn current_window(&self) -> (u64, u64) {
        let now = chrono::Utc::now().timestamp().max(0) as u64;
        let window = now / self.window_secs;
        let retry_after = self.window_secs - now % self.window_secs;
        (window, retry_after)
    }
}

/// 提取客户端 IP
///
/// 优先使用代理转发的真实地址，其次为对端地址
fn extract_client_ip(req: &ServiceRequest) -> String {
    let conn = req.connection_info();
    conn.realip_remote_addr()
        .and_then(|addr| {
            // 对端地址可能带端口
            addr.parse::<IpAddr>()
                .ok()
                .or_else(|| addr.parse::<std::net::SocketAddr>().ok().map(|s| s.ip()))
        })
        .map(|ip| ip.to_string())
        .unwrap_or_else(|| "unknown".to_string())
}

fn create_rate_limit_response(retry_after: u64) -> HttpResponse {
    HttpResponse::build(StatusCode::TOO_MANY_REQUESTS)
        .insert_header((CONTENT_TYPE, "application/json; charset=utf-8"))
        .insert_header(("Retry-After", retry_after.to_string()))
        .json(ApiResponse::<()>::error_empty(
            ErrorCode::RateLimitExceeded,
            "Too many requests, please try again later",
        ))
}

impl<S, B> Transform<S, ServiceRequest> for RateLimit
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = RateLimitMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RateLimitMiddleware {
            service: Rc::new(service),
            limit: self.clone(),
        }))
    }
}

pub struct RateLimitMiddleware<S> {
    service: Rc<S>,
    limit: RateLimit,
}

impl<S, B> Service<ServiceRequest> for RateLimitMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(
        &self,
        ctx: &mut std::task::Context<'_>,
    ) -> std::task::Poll<Result<(), Self::Error>> {
        self.service.poll_ready(ctx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let srv = self.service.clone();
        let limit = self.limit.clone();

        Box::pin(async move {
            let (window, retry_after) = limit.current_window();
            let cache_key = format!(
                "{}:{}:{}",
                limit.key_prefix,
                extract_client_ip(&req),
                window
            );

            let count = limit.hit(cache_key.clone()).await;
            if count > limit.max_requests {
                warn!(
                    "Rate limit exceeded for key: {} (count: {}/{})",
                    cache_key, count, limit.max_requests
                );
                return Ok(req.into_response(
                    create_rate_limit_response(retry_after).map_into_right_body(),
                ));
            }

            let res = srv.call(req).await?.map_into_left_body();
            Ok(res)
        })
    }
}
