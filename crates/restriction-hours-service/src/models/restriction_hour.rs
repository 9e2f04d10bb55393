//! 限制时段实体定义
//!
//! 区分三种形态：
//! - `RestrictionHourInput`：外部提交的原始数据，所有字段可空
//! - `NewRestrictionHour`：校验通过、已归一化的数据，尚未分配 ID
//! - `RestrictionHour`：已持久化的记录

use serde::{Deserialize, Serialize};

use super::enums::DayOfWeek;
use crate::error::{RestrictionError, Result};

/// 限制时段记录（restriction_hours 表）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct RestrictionHour {
    /// 自增 ID，仅作存储标识，不参与业务定位
    pub id: i64,
    pub store_id: i32,
    pub day_of_week: DayOfWeek,
    pub category: String,
    pub category_code: i32,
    /// 分类描述，不属于组合键
    pub category_desc: String,
    /// 是否启用时段限制，为 true 时 start_hour/end_hour 必填
    pub has_restriction_hour: bool,
    #[sqlx(default)]
    pub start_hour: Option<i32>,
    #[sqlx(default)]
    pub end_hour: Option<i32>,
}

impl RestrictionHour {
    /// 业务组合键
    pub fn key(&self) -> RestrictionHourKey {
        RestrictionHourKey {
            store_id: self.store_id,
            day_of_week: self.day_of_week,
            category: self.category.clone(),
            category_code: self.category_code,
        }
    }

    /// 覆盖可变字段
    ///
    /// ID 与组合键字段保持不变
    pub fn apply_update(&mut self, values: &NewRestrictionHour) {
        self.has_restriction_hour = values.has_restriction_hour;
        self.start_hour = values.start_hour;
        self.end_hour = values.end_hour;
        self.category_desc = values.category_desc.clone();
    }
}

/// 业务组合键：(storeId, dayOfWeek, category, categoryCode)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RestrictionHourKey {
    pub store_id: i32,
    pub day_of_week: DayOfWeek,
    pub category: String,
    pub category_code: i32,
}

/// 外部提交的限制时段数据
///
/// 对应 JSON 请求体，所有字段都可能缺失或为 null，由校验器给出具体的错误
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RestrictionHourInput {
    /// 客户端可能回传 ID，但任何操作都不使用它定位记录
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub store_id: Option<i32>,
    #[serde(default)]
    pub day_of_week: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub category_code: Option<i32>,
    #[serde(default)]
    pub category_desc: Option<String>,
    #[serde(default)]
    pub has_restriction_hour: Option<bool>,
    #[serde(default)]
    pub start_hour: Option<i32>,
    #[serde(default)]
    pub end_hour: Option<i32>,
}

/// 组合键的原始字段（星期尚未解析）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawKey<'a> {
    pub store_id: i32,
    pub day_of_week: &'a str,
    pub category: &'a str,
    pub category_code: i32,
}

impl RawKey<'_> {
    /// 解析为组合键
    ///
    /// 星期忽略大小写；无法识别的星期不可能对应任何已存储的记录，直接返回不存在
    pub fn resolve(&self) -> Result<RestrictionHourKey> {
        let day_of_week =
            DayOfWeek::parse(self.day_of_week).ok_or_else(|| RestrictionError::NotFound {
                store_id: self.store_id,
                day_of_week: self.day_of_week.to_string(),
                category: self.category.to_string(),
                category_code: self.category_code,
            })?;

        Ok(RestrictionHourKey {
            store_id: self.store_id,
            day_of_week,
            category: self.category.to_string(),
            category_code: self.category_code,
        })
    }
}

impl RestrictionHourInput {
    /// 提取组合键字段，任一字段为 null 时返回 None
    pub fn raw_key(&self) -> Option<RawKey<'_>> {
        Some(RawKey {
            store_id: self.store_id?,
            day_of_week: self.day_of_week.as_deref()?,
            category: self.category.as_deref()?,
            category_code: self.category_code?,
        })
    }
}

/// 校验通过的限制时段数据
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewRestrictionHour {
    pub store_id: i32,
    pub day_of_week: DayOfWeek,
    pub category: String,
    pub category_code: i32,
    pub category_desc: String,
    pub has_restriction_hour: bool,
    pub start_hour: Option<i32>,
    pub end_hour: Option<i32>,
}

impl NewRestrictionHour {
    pub fn key(&self) -> RestrictionHourKey {
        RestrictionHourKey {
            store_id: self.store_id,
            day_of_week: self.day_of_week,
            category: self.category.clone(),
            category_code: self.category_code,
        }
    }

    /// 去重使用的 (门店, 星期) 二元组
    pub fn store_day(&self) -> (i32, DayOfWeek) {
        (self.store_id, self.day_of_week)
    }

    /// 分配 ID 后转为持久化记录
    pub fn into_record(self, id: i64) -> RestrictionHour {
        RestrictionHour {
            id,
            store_id: self.store_id,
            day_of_week: self.day_of_week,
            category: self.category,
            category_code: self.category_code,
            category_desc: self.category_desc,
            has_restriction_hour: self.has_restriction_hour,
            start_hour: self.start_hour,
            end_hour: self.end_hour,
        }
    }
}
