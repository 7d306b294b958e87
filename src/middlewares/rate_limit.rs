/*!
 * 速率限制中间件
 *
 * 固定窗口计数：某个键第一次出现时开始计时，窗口结束前最多放行 `max_requests` 次。
 * 已登录请求按用户 ID 计数，其余按客户端 IP。超限返回 429。
 *
 * ```rust,ignore
 * web::resource("/login")
 *     .wrap(RateLimit::login())
 *     .route(web::post().to(login))
 * ```
 */

use actix_service::{Service, Transform};
use actix_web::{
    Error, HttpMessage, HttpResponse,
    body::EitherBody,
    dev::{ServiceRequest, ServiceResponse},
    http::StatusCode,
    http::header::{CONTENT_TYPE, HeaderName, HeaderValue},
};
use futures_util::future::{LocalBoxFuture, Ready, ready};
use moka::Expiry;
use moka::future::Cache;
use once_cell::sync::Lazy;
use std::rc::Rc;
use std::time::{Duration, Instant};
use tracing::warn;

use crate::models::users::entities::User;
use crate::models::{ApiResponse, ErrorCode};

#[derive(Clone, Copy)]
struct WindowCounter {
    count: u32,
    window: Duration,
}

/// 窗口从第一次计数开始，后续更新不延长
struct FixedWindow;

impl Expiry<String, WindowCounter> for FixedWindow {
    fn expire_after_create(
        &self,
        _key: &String,
        value: &WindowCounter,
        _created_at: Instant,
    ) -> Option<Duration> {
        Some(value.window)
    }
}

type CounterCache = Cache<String, WindowCounter>;

fn new_counter_cache() -> CounterCache {
    Cache::builder()
        .max_capacity(100_000)
        .expire_after(FixedWindow)
        .build()
}

/// 键: 前缀:user:{id} 或 前缀:ip:{addr}
static RATE_LIMIT_CACHE: Lazy<CounterCache> = Lazy::new(new_counter_cache);

/// 计数一次，返回剩余次数；超限时返回 None
async fn hit(cache: &CounterCache, key: &str, max_requests: u32, window: Duration) -> Option<u32> {
    let current = cache.get(key).await;
    let count = current.map(|c| c.count).unwrap_or(0);
    if count >= max_requests {
        return None;
    }

    let counter = WindowCounter {
        count: count + 1,
        window: current.map(|c| c.window).unwrap_or(window),
    };
    cache.insert(key.to_string(), counter).await;
    Some(max_requests - counter.count)
}

#[derive(Clone)]
pub struct RateLimit {
    max_requests: u32,
    window_secs: u64,
    key_prefix: String,
}

impl RateLimit {
    pub fn new(max_requests: u32, window_secs: u64) -> Self {
        Self {
            max_requests,
            window_secs,
            key_prefix: String::new(),
        }
    }

    pub fn with_prefix(mut self, prefix: &str) -> Self {
        self.key_prefix = prefix.to_string();
        self
    }

    /// 登录：5 次/分钟
    pub fn login() -> Self {
        Self::new(5, 60).with_prefix("login")
    }

    /// 注册：3 次/分钟
    pub fn register() -> Self {
        Self::new(3, 60).with_prefix("register")
    }

    /// 刷新令牌：10 次/分钟
    pub fn refresh_token() -> Self {
        Self::new(10, 60).with_prefix("refresh")
    }
}

/// 客户端 IP，优先取连接信息，其次是代理头
fn extract_client_ip(req: &ServiceRequest) -> String {
    let connection_ip = req
        .connection_info()
        .realip_remote_addr()
        .map(|s| s.to_string());

    if let Some(ref ip) = connection_ip
        && is_valid_ip(ip)
    {
        return ip.clone();
    }

    for header in ["X-Forwarded-For", "X-Real-IP"] {
        if let Some(value) = req.headers().get(header)
            && let Ok(value) = value.to_str()
            && let Some(ip) = value.split(',').next().map(str::trim)
            && is_valid_ip(ip)
        {
            return ip.to_string();
        }
    }

    connection_ip.unwrap_or_else(|| "unknown".to_string())
}

fn is_valid_ip(ip: &str) -> bool {
    ip.parse::<std::net::IpAddr>().is_ok()
}

fn create_rate_limit_response(retry_after: u64) -> HttpResponse {
    HttpResponse::build(StatusCode::TOO_MANY_REQUESTS)
        .insert_header((CONTENT_TYPE, "application/json; charset=utf-8"))
        .insert_header(("Retry-After", retry_after.to_string()))
        .insert_header(("X-RateLimit-Remaining", "0"))
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
            config: self.clone(),
        }))
    }
}

pub struct RateLimitMiddleware<S> {
    service: Rc<S>,
    config: RateLimit,
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
        let config = self.config.clone();

        Box::pin(async move {
            let user_id = req.extensions().get::<User>().map(|user| user.id);
            let identifier = match user_id {
                Some(id) => format!("user:{id}"),
                None => format!("ip:{}", extract_client_ip(&req)),
            };
            let cache_key = if config.key_prefix.is_empty() {
                identifier
            } else {
                format!("{}:{}", config.key_prefix, identifier)
            };

            let window = Duration::from_secs(config.window_secs);
            let Some(remaining) =
                hit(&RATE_LIMIT_CACHE, &cache_key, config.max_requests, window).await
            else {
                warn!(
                    "Rate limit exceeded for key: {} (limit {}/{}s)",
                    cache_key, config.max_requests, config.window_secs
                );
                return Ok(req.into_response(
                    create_rate_limit_response(config.window_secs).map_into_right_body(),
                ));
            };

            let mut res = srv.call(req).await?;
            let headers = res.headers_mut();
            headers.insert(
                HeaderName::from_static("x-ratelimit-limit"),
                HeaderValue::from(config.max_requests),
            );
            headers.insert(
                HeaderName::from_static("x-ratelimit-remaining"),
                HeaderValue::from(remaining),
            );
            Ok(res.map_into_left_body())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rate_limit_presets() {
        let login = RateLimit::login();
        assert_eq!(login.max_requests, 5);
        assert_eq!(login.window_secs, 60);
        assert_eq!(login.key_prefix, "login");

        let register = RateLimit::register();
        assert_eq!(register.max_requests, 3);
        assert_eq!(register.window_secs, 60);

        assert_eq!(RateLimit::refresh_token().max_requests, 10);
    }

    #[tokio::test]
    async fn test_hit_counts_down_then_blocks() {
        let cache = new_counter_cache();
        let window = Duration::from_secs(60);

        assert_eq!(hit(&cache, "login:ip:1.2.3.4", 3, window).await, Some(2));
        assert_eq!(hit(&cache, "login:ip:1.2.3.4", 3, window).await, Some(1));
        assert_eq!(hit(&cache, "login:ip:1.2.3.4", 3, window).await, Some(0));
        assert_eq!(hit(&cache, "login:ip:1.2.3.4", 3, window).await, None);

        // 其他键互不影响
        assert_eq!(hit(&cache, "login:ip:5.6.7.8", 3, window).await, Some(2));
    }

    #[tokio::test]
    async fn test_window_resets_after_expiry() {
        let cache = new_counter_cache();
        let window = Duration::from_secs(1);

        assert_eq!(hit(&cache, "k", 1, window).await, Some(0));
        assert_eq!(hit(&cache, "k", 1, window).await, None);

        tokio::time::sleep(Duration::from_millis(1200)).await;
        assert_eq!(hit(&cache, "k", 1, window).await, Some(0));
    }
}
