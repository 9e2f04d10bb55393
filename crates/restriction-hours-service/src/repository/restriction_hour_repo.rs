//! 限制时段仓储（PostgreSQL）

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::debug;

use super::traits::RestrictionHourRepositoryTrait;
use crate::error::Result;
use crate::models::{DayOfWeek, NewRestrictionHour, RestrictionHour, RestrictionHourKey};

/// 拼接统一的 SELECT 列表
macro_rules! select_restriction_hours {
    ($tail:literal) => {
        concat!(
            "SELECT id, store_id, day_of_week, category, category_code, category_desc, ",
            "has_restriction_hour, start_hour, end_hour FROM restriction_hours ",
            $tail
        )
    };
}

const RETURNING_COLUMNS: &str = "RETURNING id, store_id, day_of_week, category, category_code, \
     category_desc, has_restriction_hour, start_hour, end_hour";

const INSERT_SQL: &str = r#"
    INSERT INTO restriction_hours
        (store_id, day_of_week, category, category_code, category_desc,
         has_restriction_hour, start_hour, end_hour)
    VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
"#;

/// 限制时段仓储
pub struct RestrictionHourRepository {
    pool: PgPool,
}

impl RestrictionHourRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn insert_statement() -> String {
        format!("{INSERT_SQL} {RETURNING_COLUMNS}")
    }
}

#[async_trait]
impl RestrictionHourRepositoryTrait for RestrictionHourRepository {
    async fn list_all(&self) -> Result<Vec<RestrictionHour>> {
        let rows = sqlx::query_as::<_, RestrictionHour>(select_restriction_hours!("ORDER BY id"))
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn get_by_id(&self, id: i64) -> Result<Option<RestrictionHour>> {
        let row = sqlx::query_as::<_, RestrictionHour>(select_restriction_hours!("WHERE id = $1"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn list_by_store(&self, store_id: i32) -> Result<Vec<RestrictionHour>> {
        let rows = sqlx::query_as::<_, RestrictionHour>(select_restriction_hours!(
            "WHERE store_id = $1 ORDER BY id"
        ))
        .bind(store_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    async fn list_by_store_and_day(
        &self,
        store_id: i32,
        day_of_week: DayOfWeek,
    ) -> Result<Vec<RestrictionHour>> {
        let rows = sqlx::query_as::<_, RestrictionHour>(select_restriction_hours!(
            "WHERE store_id = $1 AND day_of_week = $2 ORDER BY id"
        ))
        .bind(store_id)
        .bind(day_of_week)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    async fn list_by_day(&self, day_of_week: DayOfWeek) -> Result<Vec<RestrictionHour>> {
        let rows = sqlx::query_as::<_, RestrictionHour>(select_restriction_hours!(
            "WHERE day_of_week = $1 ORDER BY id"
        ))
        .bind(day_of_week)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    async fn list_by_category_code(&self, category_code: i32) -> Result<Vec<RestrictionHour>> {
        let rows = sqlx::query_as::<_, RestrictionHour>(select_restriction_hours!(
            "WHERE category_code = $1 ORDER BY id"
        ))
        .bind(category_code)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    async fn list_by_restriction_flag(
        &self,
        has_restriction_hour: bool,
    ) -> Result<Vec<RestrictionHour>> {
        let rows = sqlx::query_as::<_, RestrictionHour>(select_restriction_hours!(
            "WHERE has_restriction_hour = $1 ORDER BY id"
        ))
        .bind(has_restriction_hour)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    async fn list_by_store_ids(&self, store_ids: &[i32]) -> Result<Vec<RestrictionHour>> {
        if store_ids.is_empty() {
            return Ok(vec![]);
        }

        let rows = sqlx::query_as::<_, RestrictionHour>(select_restriction_hours!(
            "WHERE store_id = ANY($1) ORDER BY id"
        ))
        .bind(store_ids)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    async fn list_by_time_range(
        &self,
        start_hour: i32,
        end_hour: i32,
    ) -> Result<Vec<RestrictionHour>> {
        let rows = sqlx::query_as::<_, RestrictionHour>(select_restriction_hours!(
            "WHERE start_hour >= $1 AND end_hour <= $2 ORDER BY id"
        ))
        .bind(start_hour)
        .bind(end_hour)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    async fn exists_by_store_and_day(
        &self,
        store_id: i32,
        day_of_week: DayOfWeek,
    ) -> Result<bool> {
        let exists: (bool,) = sqlx::query_as(
            "SELECT EXISTS(SELECT 1 FROM restriction_hours WHERE store_id = $1 AND day_of_week = $2)",
        )
        .bind(store_id)
        .bind(day_of_week)
        .fetch_one(&self.pool)
        .await?;
        Ok(exists.0)
    }

    async fn find_by_key(&self, key: &RestrictionHourKey) -> Result<Option<RestrictionHour>> {
        let row = sqlx::query_as::<_, RestrictionHour>(select_restriction_hours!(
            "WHERE store_id = $1 AND day_of_week = $2 AND category = $3 AND category_code = $4"
        ))
        .bind(key.store_id)
        .bind(key.day_of_week)
        .bind(&key.category)
        .bind(key.category_code)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    async fn insert(&self, record: &NewRestrictionHour) -> Result<RestrictionHour> {
        let sql = Self::insert_statement();
        let row = bind_new(sqlx::query_as::<_, RestrictionHour>(&sql), record)
            .fetch_one(&self.pool)
            .await?;
        Ok(row)
    }

    async fn insert_all(&self, records: &[NewRestrictionHour]) -> Result<Vec<RestrictionHour>> {
        let sql = Self::insert_statement();
        let mut tx = self.pool.begin().await?;
        let mut created = Vec::with_capacity(records.len());

        // 任一插入失败时 tx 被 drop，事务自动回滚
        for record in records {
            let row = bind_new(sqlx::query_as::<_, RestrictionHour>(&sql), record)
                .fetch_one(&mut *tx)
                .await?;
            created.push(row);
        }

        tx.commit().await?;
        debug!(count = created.len(), "Batch insert committed");
        Ok(created)
    }

    async fn update(&self, record: &RestrictionHour) -> Result<RestrictionHour> {
        let row = sqlx::query_as::<_, RestrictionHour>(
            r#"
            UPDATE restriction_hours
            SET
                category_desc = $2,
                has_restriction_hour = $3,
                start_hour = $4,
                end_hour = $5
            WHERE id = $1
            RETURNING id, store_id, day_of_week, category, category_code,
                      category_desc, has_restriction_hour, start_hour, end_hour
            "#,
        )
        .bind(record.id)
        .bind(&record.category_desc)
        .bind(record.has_restriction_hour)
        .bind(record.start_hour)
        .bind(record.end_hour)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    async fn delete(&self, id: i64) -> Result<bool> {
        let result = sqlx::query("DELETE FROM restriction_hours WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

fn bind_new<'q>(
    query: sqlx::query::QueryAs<'q, sqlx::Postgres, RestrictionHour, sqlx::postgres::PgArguments>,
    record: &'q NewRestrictionHour,
) -> sqlx::query::QueryAs<'q, sqlx::Postgres, RestrictionHour, sqlx::postgres::PgArguments> {
    query
        .bind(record.store_id)
        .bind(record.day_of_week)
        .bind(&record.category)
        .bind(record.category_code)
        .bind(&record.category_desc)
        .bind(record.has_restriction_hour)
        .bind(record.start_hour)
        .bind(record.end_hour)
}
