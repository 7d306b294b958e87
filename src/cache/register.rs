//! 缓存后端插件表
//!
//! 各后端通过 `declare_object_cache_plugin!` 在程序加载时登记构造函数，
//! 启动流程按 `cache.type` 取出并构造。

use crate::cache::ObjectCache;
use crate::errors::Result;
use once_cell::sync::Lazy;
use std::{
    collections::HashMap,
    future::Future,
    pin::Pin,
    sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard},
};

pub type BoxedObjectCacheFuture =
    Pin<Box<dyn Future<Output = Result<Box<dyn ObjectCache>>> + Send>>;
pub type ObjectCacheConstructor = Arc<dyn Fn() -> BoxedObjectCacheFuture + Send + Sync>;

type Registry = HashMap<String, ObjectCacheConstructor>;

static CACHE_BACKENDS: Lazy<RwLock<Registry>> = Lazy::new(|| RwLock::new(HashMap::new()));

// 登记只发生在加载期，锁中毒时沿用已有内容
fn read_backends() -> RwLockReadGuard<'static, Registry> {
    CACHE_BACKENDS.read().unwrap_or_else(|e| e.into_inner())
}

fn write_backends() -> RwLockWriteGuard<'static, Registry> {
    CACHE_BACKENDS.write().unwrap_or_else(|e| e.into_inner())
}

/// 同名后端后登记者覆盖先登记者
pub fn register_object_cache_plugin<S: Into<String>>(name: S, constructor: ObjectCacheConstructor) {
    write_backends().insert(name.into(), constructor);
}

pub fn get_object_cache_plugin(name: &str) -> Option<ObjectCacheConstructor> {
    read_backends().get(name).cloned()
}

/// 已登记的后端名，按字母序
pub fn registered_cache_backends() -> Vec<String> {
    let mut names: Vec<String> = read_backends().keys().cloned().collect();
    names.sort();
    names
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_backends_are_registered() {
        let names = registered_cache_backends();
        assert!(names.iter().any(|n| n == "moka"));
        assert!(names.iter().any(|n| n == "redis"));
        assert!(get_object_cache_plugin("moka").is_some());
        assert!(get_object_cache_plugin("memcached").is_none());
    }
}
