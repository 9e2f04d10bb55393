//! 请求 DTO 定义
//!
//! 请求体直接使用 `RestrictionHourInput`，这里只定义路径与查询参数

use serde::Deserialize;
use validator::Validate;

use restriction_hours::{RawKey, RestrictionHourKey};

use crate::error::{AdminError, Result};

/// 组合键路径参数
///
/// `/store/{storeId}/day/{dayOfWeek}/category/{category}/code/{categoryCode}`
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeyPath {
    pub store_id: i32,
    pub day_of_week: String,
    pub category: String,
    pub category_code: i32,
}

impl KeyPath {
    /// 解析为组合键，无法识别的星期视为记录不存在
    pub fn resolve(&self) -> Result<RestrictionHourKey> {
        let raw = RawKey {
            store_id: self.store_id,
            day_of_week: &self.day_of_week,
            category: &self.category,
            category_code: self.category_code,
        };
        Ok(raw.resolve()?)
    }
}

/// 时间窗口查询参数
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct TimeRangeQuery {
    #[validate(
        required(message = "startHour 不能为空"),
        range(min = 0, max = 23, message = "startHour 必须在 0 到 23 之间")
    )]
    pub start_hour: Option<i32>,
    #[validate(
        required(message = "endHour 不能为空"),
        range(min = 0, max = 23, message = "endHour 必须在 0 到 23 之间")
    )]
    pub end_hour: Option<i32>,
}

impl TimeRangeQuery {
    /// 校验后返回 (start_hour, end_hour)
    pub fn bounds(&self) -> Result<(i32, i32)> {
        self.validate()?;
        match (self.start_hour, self.end_hour) {
            (Some(start), Some(end)) => Ok((start, end)),
            _ => Err(AdminError::Validation("startHour 与 endHour 必须同时提供".into())),
        }
    }
}

/// 多门店查询参数，`ids` 为逗号分隔的门店 ID
#[derive(Debug, Deserialize)]
pub struct StoreIdsQuery {
    pub ids: String,
}

impl StoreIdsQuery {
    /// 拆分门店 ID，忽略空元素，任一元素不是整数即报错
    pub fn parse_ids(&self) -> Result<Vec<i32>> {
        self.ids
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(|s| {
                s.parse::<i32>()
                    .map_err(|_| AdminError::Validation(format!("门店 ID 不是有效整数: '{s}'")))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use restriction_hours::DayOfWeek;

    #[test]
    fn test_store_ids_parse() {
        let query = StoreIdsQuery {
            ids: "1, 2,,3".to_string(),
        };
        assert_eq!(query.parse_ids().unwrap(), vec![1, 2, 3]);

        let empty = StoreIdsQuery { ids: String::new() };
        assert!(empty.parse_ids().unwrap().is_empty());

        let bad = StoreIdsQuery {
            ids: "1,abc".to_string(),
        };
        assert!(matches!(bad.parse_ids(), Err(AdminError::Validation(_))));
    }

    #[test]
    fn test_time_range_bounds() {
        let ok = TimeRangeQuery {
            start_hour: Some(0),
            end_hour: Some(23),
        };
        assert_eq!(ok.bounds().unwrap(), (0, 23));

        let missing = TimeRangeQuery {
            start_hour: Some(1),
            end_hour: None,
        };
        assert!(matches!(missing.bounds(), Err(AdminError::Validation(_))));

        let out_of_range = TimeRangeQuery {
            start_hour: Some(-1),
            end_hour: Some(24),
        };
        assert!(matches!(
            out_of_range.bounds(),
            Err(AdminError::Validation(_))
        ));
    }

    #[test]
    fn test_key_path_resolve() {
        let path = KeyPath {
            store_id: 1,
            day_of_week: "monday".to_string(),
            category: "Alcohol".to_string(),
            category_code: 10,
        };
        assert_eq!(path.resolve().unwrap().day_of_week, DayOfWeek::Monday);

        let unknown = KeyPath {
            day_of_week: "noday".to_string(),
            ..path
        };
        assert!(matches!(unknown.resolve(), Err(AdminError::Restriction(_))));
    }
}
