//! 内存仓储
//!
//! 使用 DashMap 实现，适用于本地开发、演示和测试环境。
//! 返回列表按 ID 升序排列，与 PostgreSQL 实现保持一致。

use std::sync::Arc;
use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;
use dashmap::DashMap;

use super::traits::RestrictionHourRepositoryTrait;
use crate::error::Result;
use crate::models::{DayOfWeek, NewRestrictionHour, RestrictionHour, RestrictionHourKey};

/// 基于 DashMap 的限制时段仓储
#[derive(Debug, Clone)]
pub struct MemoryRestrictionHourRepository {
    data: Arc<DashMap<i64, RestrictionHour>>,
    next_id: Arc<AtomicI64>,
}

impl Default for MemoryRestrictionHourRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryRestrictionHourRepository {
    pub fn new() -> Self {
        Self {
            data: Arc::new(DashMap::new()),
            next_id: Arc::new(AtomicI64::new(1)),
        }
    }

    /// 当前记录数
    pub fn count(&self) -> usize {
        self.data.len()
    }

    fn list_by<F>(&self, predicate: F) -> Vec<RestrictionHour>
    where
        F: Fn(&RestrictionHour) -> bool,
    {
        let mut rows: Vec<RestrictionHour> = self
            .data
            .iter()
            .filter(|entry| predicate(entry.value()))
            .map(|entry| entry.value().clone())
            .collect();
        rows.sort_by_key(|row| row.id);
        rows
    }

    fn store(&self, record: NewRestrictionHour) -> RestrictionHour {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let row = record.into_record(id);
        self.data.insert(id, row.clone());
        row
    }
}

#[async_trait]
impl RestrictionHourRepositoryTrait for MemoryRestrictionHourRepository {
    async fn list_all(&self) -> Result<Vec<RestrictionHour>> {
        Ok(self.list_by(|_| true))
    }

    async fn get_by_id(&self, id: i64) -> Result<Option<RestrictionHour>> {
        Ok(self.data.get(&id).map(|row| row.clone()))
    }

    async fn list_by_store(&self, store_id: i32) -> Result<Vec<RestrictionHour>> {
        Ok(self.list_by(|row| row.store_id == store_id))
    }

    async fn list_by_store_and_day(
        &self,
        store_id: i32,
        day_of_week: DayOfWeek,
    ) -> Result<Vec<RestrictionHour>> {
        Ok(self.list_by(|row| row.store_id == store_id && row.day_of_week == day_of_week))
    }

    async fn list_by_day(&self, day_of_week: DayOfWeek) -> Result<Vec<RestrictionHour>> {
        Ok(self.list_by(|row| row.day_of_week == day_of_week))
    }

    async fn list_by_category_code(&self, category_code: i32) -> Result<Vec<RestrictionHour>> {
        Ok(self.list_by(|row| row.category_code == category_code))
    }

    async fn list_by_restriction_flag(
        &self,
        has_restriction_hour: bool,
    ) -> Result<Vec<RestrictionHour>> {
        Ok(self.list_by(|row| row.has_restriction_hour == has_restriction_hour))
    }

    async fn list_by_store_ids(&self, store_ids: &[i32]) -> Result<Vec<RestrictionHour>> {
        Ok(self.list_by(|row| store_ids.contains(&row.store_id)))
    }

    async fn list_by_time_range(
        &self,
        start_hour: i32,
        end_hour: i32,
    ) -> Result<Vec<RestrictionHour>> {
        // 与 SQL 语义一致：NULL 不满足比较条件
        Ok(self.list_by(|row| {
            matches!(
                (row.start_hour, row.end_hour),
                (Some(start), Some(end)) if start >= start_hour && end <= end_hour
            )
        }))
    }

    async fn exists_by_store_and_day(
        &self,
        store_id: i32,
        day_of_week: DayOfWeek,
    ) -> Result<bool> {
        Ok(self
            .data
            .iter()
            .any(|entry| entry.store_id == store_id && entry.day_of_week == day_of_week))
    }

    async fn find_by_key(&self, key: &RestrictionHourKey) -> Result<Option<RestrictionHour>> {
        Ok(self.list_by(|row| row.key() == *key).into_iter().next())
    }

    async fn insert(&self, record: &NewRestrictionHour) -> Result<RestrictionHour> {
        Ok(self.store(record.clone()))
    }

    async fn insert_all(&self, records: &[NewRestrictionHour]) -> Result<Vec<RestrictionHour>> {
        Ok(records
            .iter()
            .cloned()
            .map(|record| self.store(record))
            .collect())
    }

    async fn update(&self, record: &RestrictionHour) -> Result<RestrictionHour> {
        match self.data.get_mut(&record.id) {
            Some(mut existing) => {
                *existing = record.clone();
                Ok(record.clone())
            }
            None => Err(sqlx::Error::RowNotFound.into()),
        }
    }

    async fn delete(&self, id: i64) -> Result<bool> {
        Ok(self.data.remove(&id).is_some())
    }
}
