//! 门店限制时段服务
//!
//! 维护按门店、星期、品类划分的营业时段限制规则。
//!
//! ## 核心功能
//!
//! - **校验**：字段存在性与取值范围校验，星期大小写归一化
//! - **组合键定位**：记录由 (storeId, dayOfWeek, category, categoryCode) 唯一标识，
//!   更新与删除均按组合键定位，而非自增 ID
//! - **批量操作**：创建、更新、删除分别采用三种不同的批量策略
//!
//! ## 模块结构
//!
//! - `models`: 领域模型定义
//! - `validation`: 记录校验
//! - `error`: 错误类型定义
//! - `repository`: 数据访问层（PostgreSQL 与内存实现）
//! - `service`: 业务服务层

pub mod error;
pub mod models;
pub mod repository;
pub mod service;
pub mod validation;

pub use error::{RestrictionError, Result};
pub use models::*;
pub use repository::{
    MemoryRestrictionHourRepository, RestrictionHourRepository, RestrictionHourRepositoryTrait,
};
pub use service::{BatchDeleteOutcome, RestrictionHourService};
pub use validation::{ValidationError, validate};
