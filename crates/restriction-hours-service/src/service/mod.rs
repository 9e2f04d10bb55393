//! 服务层
//!
//! 实现限制时段业务逻辑：校验、去重、按组合键定位及三种批量策略。
//!
//! ## 模块结构
//!
//! - `dto`: 服务层返回的汇总结构
//! - `restriction_hour_service`: 限制时段读写服务

pub mod dto;
pub mod restriction_hour_service;

pub use dto::*;
pub use restriction_hour_service::RestrictionHourService;
