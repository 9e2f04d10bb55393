//! 共享库
//!
//! 包含限制时段服务共用的配置加载、数据库连接池、可观测性等基础设施代码。

pub mod config;
pub mod database;
pub mod error;
pub mod observability;
