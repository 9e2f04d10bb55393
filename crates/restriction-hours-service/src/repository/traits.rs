//! 仓储 Trait 定义
//!
//! 服务层依赖抽象而非具体实现，支持 mock 测试与存储后端切换

use async_trait::async_trait;

use crate::error::Result;
use crate::models::{DayOfWeek, NewRestrictionHour, RestrictionHour, RestrictionHourKey};

/// 限制时段仓储接口
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RestrictionHourRepositoryTrait: Send + Sync {
    // 查询
    async fn list_all(&self) -> Result<Vec<RestrictionHour>>;
    async fn get_by_id(&self, id: i64) -> Result<Option<RestrictionHour>>;
    async fn list_by_store(&self, store_id: i32) -> Result<Vec<RestrictionHour>>;
    async fn list_by_store_and_day(
        &self,
        store_id: i32,
        day_of_week: DayOfWeek,
    ) -> Result<Vec<RestrictionHour>>;
    async fn list_by_day(&self, day_of_week: DayOfWeek) -> Result<Vec<RestrictionHour>>;
    async fn list_by_category_code(&self, category_code: i32) -> Result<Vec<RestrictionHour>>;
    async fn list_by_restriction_flag(
        &self,
        has_restriction_hour: bool,
    ) -> Result<Vec<RestrictionHour>>;
    async fn list_by_store_ids(&self, store_ids: &[i32]) -> Result<Vec<RestrictionHour>>;
    /// start_hour >= start_hour 且 end_hour <= end_hour
    async fn list_by_time_range(
        &self,
        start_hour: i32,
        end_hour: i32,
    ) -> Result<Vec<RestrictionHour>>;

    // 唯一性
    async fn exists_by_store_and_day(&self, store_id: i32, day_of_week: DayOfWeek)
    -> Result<bool>;
    async fn find_by_key(&self, key: &RestrictionHourKey) -> Result<Option<RestrictionHour>>;

    // 写入
    async fn insert(&self, record: &NewRestrictionHour) -> Result<RestrictionHour>;
    /// 一次性写入全部记录，任一失败则全部不写入
    async fn insert_all(&self, records: &[NewRestrictionHour]) -> Result<Vec<RestrictionHour>>;
    /// 按 ID 覆盖可变字段
    async fn update(&self, record: &RestrictionHour) -> Result<RestrictionHour>;
    async fn delete(&self, id: i64) -> Result<bool>;
}
