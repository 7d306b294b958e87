//! 配置管理
//!
//! 静态配置来自 `config.toml` 与环境变量，进程内只加载一次。

mod r#impl;
mod structs;

pub use structs::*;
