//! 门店限制时段管理服务（HTTP）
//!
//! 在 `/api/restriction-hours` 下提供限制时段的查询、创建、更新、删除 REST API。
//!
//! ## 模块结构
//!
//! - `dto`: 请求和响应的数据传输对象
//! - `error`: 错误类型定义及 HTTP 映射
//! - `handlers`: HTTP 请求处理器
//! - `routes`: 路由与中间件配置
//! - `state`: 应用状态
//!
//! ## 技术栈
//!
//! - Web 框架：Axum
//! - 数据验证：validator（查询参数），业务字段由 `restriction_hours::validate` 校验
//! - 序列化：serde (camelCase)

pub mod dto;
pub mod error;
pub mod handlers;
pub mod routes;
pub mod state;

pub use error::{AdminError, Result};
pub use state::AppState;

pub use restriction_hours::{
    DayOfWeek, RestrictionHour, RestrictionHourInput, RestrictionHourKey, RestrictionHourService,
};
