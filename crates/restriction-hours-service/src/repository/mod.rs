//! 数据访问层
//!
//! 提供限制时段的数据访问接口，封装 SQL 操作细节。
//!
//! ## 设计原则
//!
//! - 仓储只负责数据持久化，不包含业务逻辑（校验、去重由服务层完成）
//! - 使用 SQLx 进行 PostgreSQL 访问，内存实现用于本地开发和测试
//! - 定义 trait 接口以支持 mock 测试

mod memory_repo;
mod restriction_hour_repo;
mod traits;

pub use memory_repo::MemoryRestrictionHourRepository;
pub use restriction_hour_repo::RestrictionHourRepository;
pub use traits::*;
