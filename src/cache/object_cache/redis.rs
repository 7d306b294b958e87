//! Redis 缓存后端
//!
//! 所有键带 `cache.redis.key_prefix` 前缀，多个实例可共用同一个 Redis。
//! 读写失败只记录日志，不向调用方传播。

use async_trait::async_trait;
use redis::{AsyncCommands, aio::MultiplexedConnection};
use tracing::{debug, error, warn};

use crate::cache::{CacheResult, ObjectCache};
use crate::config::AppConfig;
use crate::declare_object_cache_plugin;

declare_object_cache_plugin!("redis", RedisObjectCache);

fn prefixed_key(prefix: &str, key: &str) -> String {
    format!("{prefix}{key}")
}

/// 0 表示使用后端默认 TTL
fn effective_ttl(requested: u64, default_ttl: u64) -> u64 {
    if requested == 0 { default_ttl } else { requested }
}

pub struct RedisObjectCache {
    client: redis::Client,
    key_prefix: String,
    default_ttl: u64,
}

impl RedisObjectCache {
    pub fn new() -> Result<Self, String> {
        let config = AppConfig::get();
        let redis_config = &config.cache.redis;

        let client = redis::Client::open(redis_config.url.as_str())
            .map_err(|e| format!("Invalid Redis URL '{}': {e}", redis_config.url))?;

        // 启动时同步探活，失败由启动流程回退到 moka
        let mut conn = client
            .get_connection()
            .map_err(|e| format!("Redis connection to {} failed: {e}", redis_config.url))?;
        redis::cmd("PING")
            .query::<String>(&mut conn)
            .map_err(|e| format!("Redis ping to {} failed: {e}", redis_config.url))?;

        debug!(
            "Redis cache ready, prefix '{}', default TTL {}s",
            redis_config.key_prefix, config.cache.default_ttl
        );

        Ok(Self {
            client,
            key_prefix: redis_config.key_prefix.clone(),
            default_ttl: config.cache.default_ttl,
        })
    }

    async fn connect(&self) -> Option<MultiplexedConnection> {
        match self.client.get_multiplexed_async_connection().await {
            Ok(conn) => Some(conn),
            Err(e) => {
                error!("Failed to get Redis connection: {}", e);
                None
            }
        }
    }

    fn key(&self, key: &str) -> String {
        prefixed_key(&self.key_prefix, key)
    }
}

#[async_trait]
impl ObjectCache for RedisObjectCache {
    async fn get_raw(&self, key: &str) -> CacheResult<String> {
        let Some(mut conn) = self.connect().await else {
            return CacheResult::ExistsButNoValue;
        };

        match conn.get::<_, Option<String>>(self.key(key)).await {
            Ok(Some(data)) => CacheResult::Found(data),
            Ok(None) => CacheResult::NotFound,
            Err(e) => {
                error!("Failed to read cache key '{}': {}", key, e);
                CacheResult::ExistsButNoValue
            }
        }
    }

    async fn insert_raw(&self, key: String, value: String, ttl: u64) {
        let Some(mut conn) = self.connect().await else {
            return;
        };

        let ttl = effective_ttl(ttl, self.default_ttl);
        if let Err(e) = conn
            .set_ex::<String, String, ()>(self.key(&key), value, ttl)
            .await
        {
            error!("Failed to write cache key '{}': {}", key, e);
        } else {
            debug!("Cached '{}' for {}s", key, ttl);
        }
    }

    async fn remove(&self, key: &str) {
        let Some(mut conn) = self.connect().await else {
            return;
        };

        if let Err(e) = conn.del::<String, i64>(self.key(key)).await {
            error!("Failed to remove cache key '{}': {}", key, e);
        }
    }

    async fn invalidate_all(&self) {
        let Some(mut conn) = self.connect().await else {
            return;
        };

        // 只清理本实例前缀下的键
        let pattern = prefixed_key(&self.key_prefix, "*");
        let keys: Vec<String> = match conn.keys(&pattern).await {
            Ok(keys) => keys,
            Err(e) => {
                warn!("Failed to list keys for '{}': {}", pattern, e);
                return;
            }
        };
        if keys.is_empty() {
            return;
        }
        if let Err(e) = conn.del::<Vec<String>, i64>(keys).await {
            warn!("Failed to invalidate keys for '{}': {}", pattern, e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefixed_key() {
        assert_eq!(
            prefixed_key("skillflow360:", "analytics:dashboard"),
            "skillflow360:analytics:dashboard"
        );
        assert_eq!(prefixed_key("", "k"), "k");
    }

    #[test]
    fn test_effective_ttl_falls_back_to_default() {
        assert_eq!(effective_ttl(0, 300), 300);
        assert_eq!(effective_ttl(60, 300), 60);
    }
}
