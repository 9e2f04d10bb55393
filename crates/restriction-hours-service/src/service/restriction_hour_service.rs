//! 限制时段服务
//!
//! 提供限制时段的查询与写入能力。所有写操作先经过校验器归一化，
//! 再按业务规则检查重复或定位记录，最后交给仓储持久化。
//!
//! ## 批量策略
//!
//! - `create_batch`: 全部校验、去重通过后一次性写入（PostgreSQL 中为单个事务）
//! - `update_batch`: 逐条更新，遇到第一个失败立即返回，已完成的更新不回滚
//! - `delete_batch`: 逐条删除，业务错误记录警告后跳过，只统计成功条数

use std::sync::Arc;

use tracing::{info, instrument, warn};

use restriction_shared::observability::metrics;

use crate::error::{RestrictionError, Result};
use crate::models::{
    DayOfWeek, NewRestrictionHour, RestrictionHour, RestrictionHourInput, RestrictionHourKey,
};
use crate::repository::RestrictionHourRepositoryTrait;
use crate::service::dto::BatchDeleteOutcome;
use crate::validation::validate;

/// 记录写操作指标，失败时以错误码作为 outcome
fn track<T>(operation: &'static str, result: &Result<T>, count: u64) {
    match result {
        Ok(_) => metrics::record_write(operation, "success", count),
        Err(e) => metrics::record_write(operation, e.error_code(), count),
    }
}

/// 限制时段服务
pub struct RestrictionHourService<R = dyn RestrictionHourRepositoryTrait>
where
    R: RestrictionHourRepositoryTrait + ?Sized,
{
    repo: Arc<R>,
}

impl<R> Clone for RestrictionHourService<R>
where
    R: RestrictionHourRepositoryTrait + ?Sized,
{
    fn clone(&self) -> Self {
        Self {
            repo: Arc::clone(&self.repo),
        }
    }
}

impl<R> RestrictionHourService<R>
where
    R: RestrictionHourRepositoryTrait + ?Sized,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    // ==================== 查询 ====================

    pub async fn list_all(&self) -> Result<Vec<RestrictionHour>> {
        self.repo.list_all().await
    }

    /// 按存储 ID 查询，不存在时返回 None
    pub async fn get_by_id(&self, id: i64) -> Result<Option<RestrictionHour>> {
        self.repo.get_by_id(id).await
    }

    pub async fn list_by_store(&self, store_id: i32) -> Result<Vec<RestrictionHour>> {
        self.repo.list_by_store(store_id).await
    }

    /// 无法识别的星期不匹配任何记录
    pub async fn list_by_store_and_day(
        &self,
        store_id: i32,
        day_of_week: &str,
    ) -> Result<Vec<RestrictionHour>> {
        match DayOfWeek::parse(day_of_week) {
            Some(day) => self.repo.list_by_store_and_day(store_id, day).await,
            None => Ok(vec![]),
        }
    }

    pub async fn list_by_day(&self, day_of_week: &str) -> Result<Vec<RestrictionHour>> {
        match DayOfWeek::parse(day_of_week) {
            Some(day) => self.repo.list_by_day(day).await,
            None => Ok(vec![]),
        }
    }

    pub async fn list_by_category_code(&self, category_code: i32) -> Result<Vec<RestrictionHour>> {
        self.repo.list_by_category_code(category_code).await
    }

    pub async fn list_with_restrictions(&self) -> Result<Vec<RestrictionHour>> {
        self.repo.list_by_restriction_flag(true).await
    }

    pub async fn list_without_restrictions(&self) -> Result<Vec<RestrictionHour>> {
        self.repo.list_by_restriction_flag(false).await
    }

    /// 查询完全落在 [start_hour, end_hour] 内的限制时段
    pub async fn list_by_time_range(
        &self,
        start_hour: i32,
        end_hour: i32,
    ) -> Result<Vec<RestrictionHour>> {
        self.repo.list_by_time_range(start_hour, end_hour).await
    }

    pub async fn list_by_store_ids(&self, store_ids: &[i32]) -> Result<Vec<RestrictionHour>> {
        if store_ids.is_empty() {
            return Ok(vec![]);
        }
        self.repo.list_by_store_ids(store_ids).await
    }

    // ==================== 创建 ====================

    /// 创建单条限制时段
    ///
    /// 同一门店同一星期只允许存在一条记录，与分类无关
    #[instrument(skip(self, input))]
    pub async fn create(&self, input: &RestrictionHourInput) -> Result<RestrictionHour> {
        let result = self.create_inner(input).await;
        track("create", &result, 1);
        result
    }

    async fn create_inner(&self, input: &RestrictionHourInput) -> Result<RestrictionHour> {
        let record = validate(input)?;
        self.ensure_store_day_free(&record).await?;

        let created = self.repo.insert(&record).await?;
        info!(
            id = created.id,
            store_id = created.store_id,
            day_of_week = %created.day_of_week,
            category = %created.category,
            category_code = created.category_code,
            "Restriction hour created"
        );
        Ok(created)
    }

    /// 批量创建
    ///
    /// 任何一条校验或去重失败都不会写入任何数据
    #[instrument(skip(self, inputs), fields(count = inputs.len()))]
    pub async fn create_batch(
        &self,
        inputs: &[RestrictionHourInput],
    ) -> Result<Vec<RestrictionHour>> {
        let result = self.create_batch_inner(inputs).await;
        track("create_batch", &result, inputs.len() as u64);
        result
    }

    async fn create_batch_inner(
        &self,
        inputs: &[RestrictionHourInput],
    ) -> Result<Vec<RestrictionHour>> {
        if inputs.is_empty() {
            return Err(RestrictionError::EmptyBatch);
        }

        let records = inputs
            .iter()
            .map(validate)
            .collect::<std::result::Result<Vec<_>, _>>()?;

        // 批内两两比较归一化后的 (门店, 星期)
        for (i, first) in records.iter().enumerate() {
            if let Some(second) = records[i + 1..]
                .iter()
                .find(|other| other.store_day() == first.store_day())
            {
                return Err(RestrictionError::DuplicateInBatch {
                    store_id: second.store_id,
                    day_of_week: second.day_of_week,
                });
            }
        }

        for record in &records {
            self.ensure_store_day_free(record).await?;
        }

        let created = self.repo.insert_all(&records).await?;
        info!(count = created.len(), "Restriction hours created in batch");
        Ok(created)
    }

    async fn ensure_store_day_free(&self, record: &NewRestrictionHour) -> Result<()> {
        if self
            .repo
            .exists_by_store_and_day(record.store_id, record.day_of_week)
            .await?
        {
            return Err(RestrictionError::Duplicate {
                store_id: record.store_id,
                day_of_week: record.day_of_week,
            });
        }
        Ok(())
    }

    // ==================== 更新 ====================

    /// 按组合键更新
    ///
    /// 只覆盖 hasRestrictionHour、startHour、endHour、categoryDesc，
    /// ID 与组合键字段保持不变
    #[instrument(
        skip(self, key, input),
        fields(store_id = key.store_id, day_of_week = %key.day_of_week)
    )]
    pub async fn update_by_key(
        &self,
        key: &RestrictionHourKey,
        input: &RestrictionHourInput,
    ) -> Result<RestrictionHour> {
        let result = self.update_by_key_inner(key, input).await;
        track("update", &result, 1);
        result
    }

    async fn update_by_key_inner(
        &self,
        key: &RestrictionHourKey,
        input: &RestrictionHourInput,
    ) -> Result<RestrictionHour> {
        let mut existing = self
            .repo
            .find_by_key(key)
            .await?
            .ok_or_else(|| RestrictionError::not_found(key))?;

        let values = validate(input)?;
        existing.apply_update(&values);

        let updated = self.repo.update(&existing).await?;
        info!(
            id = updated.id,
            store_id = updated.store_id,
            day_of_week = %updated.day_of_week,
            category = %updated.category,
            category_code = updated.category_code,
            "Restriction hour updated"
        );
        Ok(updated)
    }

    /// 按请求体中的组合键更新，请求体同时提供新值
    pub async fn update(&self, input: &RestrictionHourInput) -> Result<RestrictionHour> {
        let raw = input.raw_key().ok_or(RestrictionError::MissingKeyFields)?;
        let key = raw.resolve()?;
        self.update_by_key(&key, input).await
    }

    /// 逐条更新，第一个失败即中止，此前的更新已生效
    #[instrument(skip(self, inputs), fields(count = inputs.len()))]
    pub async fn update_batch(
        &self,
        inputs: &[RestrictionHourInput],
    ) -> Result<Vec<RestrictionHour>> {
        if inputs.is_empty() {
            return Err(RestrictionError::EmptyBatch);
        }

        let mut updated = Vec::with_capacity(inputs.len());
        for input in inputs {
            updated.push(self.update(input).await?);
        }

        info!(count = updated.len(), "Restriction hours updated in batch");
        Ok(updated)
    }

    // ==================== 删除 ====================

    /// 按组合键删除
    ///
    /// 返回存储层是否实际删除了记录
    #[instrument(
        skip(self, key),
        fields(store_id = key.store_id, day_of_week = %key.day_of_week)
    )]
    pub async fn delete_by_key(&self, key: &RestrictionHourKey) -> Result<bool> {
        let result = self.delete_by_key_inner(key).await;
        track("delete", &result, 1);
        result
    }

    async fn delete_by_key_inner(&self, key: &RestrictionHourKey) -> Result<bool> {
        let existing = self
            .repo
            .find_by_key(key)
            .await?
            .ok_or_else(|| RestrictionError::not_found(key))?;

        let deleted = self.repo.delete(existing.id).await?;
        info!(
            id = existing.id,
            store_id = key.store_id,
            day_of_week = %key.day_of_week,
            category = %key.category,
            category_code = key.category_code,
            deleted,
            "Restriction hour deleted"
        );
        Ok(deleted)
    }

    /// 按请求体中的组合键删除
    pub async fn delete(&self, input: &RestrictionHourInput) -> Result<bool> {
        let raw = input.raw_key().ok_or(RestrictionError::MissingKeyFields)?;
        let key = raw.resolve()?;
        self.delete_by_key(&key).await
    }

    /// 逐条删除
    ///
    /// 单条的业务错误只记录警告，存储错误立即返回
    #[instrument(skip(self, inputs), fields(count = inputs.len()))]
    pub async fn delete_batch(
        &self,
        inputs: &[RestrictionHourInput],
    ) -> Result<BatchDeleteOutcome> {
        if inputs.is_empty() {
            return Err(RestrictionError::EmptyBatch);
        }

        let mut deleted_count = 0;
        for (index, input) in inputs.iter().enumerate() {
            match self.delete(input).await {
                Ok(true) => deleted_count += 1,
                Ok(false) => {
                    warn!(index, "Restriction hour vanished before delete, skipped");
                }
                Err(e) if e.is_business_rule() => {
                    warn!(index, error = %e, "Skipping restriction hour in batch delete");
                }
                Err(e) => return Err(e),
            }
        }

        let outcome = BatchDeleteOutcome {
            deleted_count,
            total_requested: inputs.len(),
        };
        info!(
            deleted = outcome.deleted_count,
            requested = outcome.total_requested,
            "Batch delete finished"
        );
        Ok(outcome)
    }
}
