//! 限制时段校验
//!
//! 按固定顺序逐项检查，遇到第一个错误立即返回。校验是纯函数：
//! 输入保持不变，归一化（星期大小写）体现在返回的 `NewRestrictionHour` 中。
//!
//! 注意：不校验 start_hour < end_hour，跨夜时段（如 22 -> 6）是合法数据。

use std::ops::RangeInclusive;

use thiserror::Error;

use crate::models::{DayOfWeek, NewRestrictionHour, RestrictionHourInput};

/// 小时取值范围
pub const HOUR_RANGE: RangeInclusive<i32> = 0..=23;

/// 校验错误，每个变体对应一项检查
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("门店 ID 必须为正整数")]
    InvalidStoreId,

    /// 携带原始输入，为空时提示必填
    #[error("{}", describe_invalid_day(.0))]
    InvalidDayOfWeek(String),

    #[error("分类不能为空")]
    InvalidCategory,

    #[error("分类编码不能为空")]
    InvalidCategoryCode,

    #[error("分类描述不能为空")]
    InvalidCategoryDesc,

    #[error("是否启用时段限制（hasRestrictionHour）不能为空")]
    InvalidHasRestriction,

    #[error("开始小时必须在 0 到 23 之间")]
    InvalidStartHour,

    #[error("结束小时必须在 0 到 23 之间")]
    InvalidEndHour,
}

fn describe_invalid_day(raw: &str) -> String {
    if raw.trim().is_empty() {
        "星期不能为空".to_string()
    } else {
        format!("星期无效: '{raw}'，应为 Monday 至 Sunday 之一")
    }
}

/// 校验并归一化一条限制时段数据
pub fn validate(input: &RestrictionHourInput) -> Result<NewRestrictionHour, ValidationError> {
    let store_id = match input.store_id {
        Some(id) if id > 0 => id,
        _ => return Err(ValidationError::InvalidStoreId),
    };

    let raw_day = input.day_of_week.as_deref().unwrap_or_default();
    let day_of_week = DayOfWeek::parse(raw_day)
        .ok_or_else(|| ValidationError::InvalidDayOfWeek(raw_day.to_string()))?;

    let category = non_blank(input.category.as_deref()).ok_or(ValidationError::InvalidCategory)?;
    let category_code = input
        .category_code
        .ok_or(ValidationError::InvalidCategoryCode)?;
    let category_desc =
        non_blank(input.category_desc.as_deref()).ok_or(ValidationError::InvalidCategoryDesc)?;
    let has_restriction_hour = input
        .has_restriction_hour
        .ok_or(ValidationError::InvalidHasRestriction)?;

    // 未启用限制时小时字段原样保留，不做范围检查
    if has_restriction_hour {
        if !in_hour_range(input.start_hour) {
            return Err(ValidationError::InvalidStartHour);
        }
        if !in_hour_range(input.end_hour) {
            return Err(ValidationError::InvalidEndHour);
        }
    }

    Ok(NewRestrictionHour {
        store_id,
        day_of_week,
        category: category.to_string(),
        category_code,
        category_desc: category_desc.to_string(),
        has_restriction_hour,
        start_hour: input.start_hour,
        end_hour: input.end_hour,
    })
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

fn in_hour_range(hour: Option<i32>) -> bool {
    hour.is_some_and(|h| HOUR_RANGE.contains(&h))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_input() -> RestrictionHourInput {
        RestrictionHourInput {
            id: None,
            store_id: Some(1),
            day_of_week: Some("tuesday".to_string()),
            category: Some("Alcohol".to_string()),
            category_code: Some(10),
            category_desc: Some("Beer".to_string()),
            has_restriction_hour: Some(true),
            start_hour: Some(22),
            end_hour: Some(6),
        }
    }

    #[test]
    fn test_valid_input_is_normalized() {
        let input = valid_input();
        let record = validate(&input).unwrap();

        assert_eq!(record.day_of_week, DayOfWeek::Tuesday);
        assert_eq!(record.store_id, 1);
        assert_eq!(record.start_hour, Some(22));
        assert_eq!(record.end_hour, Some(6));
        // 输入本身不被修改
        assert_eq!(input.day_of_week.as_deref(), Some("tuesday"));
    }

    #[test]
    fn test_day_casing_variants_all_accepted() {
        for raw in ["monday", "MONDAY", "Monday", " Monday "] {
            let input = RestrictionHourInput {
                day_of_week: Some(raw.to_string()),
                ..valid_input()
            };
            assert_eq!(validate(&input).unwrap().day_of_week, DayOfWeek::Monday);
        }
    }

    #[test]
    fn test_store_id_must_be_positive() {
        for store_id in [None, Some(0), Some(-5)] {
            let input = RestrictionHourInput {
                store_id,
                ..valid_input()
            };
            assert_eq!(validate(&input), Err(ValidationError::InvalidStoreId));
        }
    }

    #[test]
    fn test_day_of_week_rejections() {
        for day in [None, Some(""), Some("  "), Some("Someday")] {
            let input = RestrictionHourInput {
                day_of_week: day.map(String::from),
                ..valid_input()
            };
            assert!(matches!(
                validate(&input),
                Err(ValidationError::InvalidDayOfWeek(_))
            ));
        }
    }

    #[test]
    fn test_day_of_week_messages_distinguish_blank() {
        let blank = ValidationError::InvalidDayOfWeek(" ".into()).to_string();
        let unknown = ValidationError::InvalidDayOfWeek("Funday".into()).to_string();

        assert_eq!(blank, "星期不能为空");
        assert!(unknown.contains("Funday"));
        assert_ne!(blank, unknown);
    }

    #[test]
    fn test_checks_run_in_order() {
        // 全部字段缺失时返回第一项检查的错误
        assert_eq!(
            validate(&RestrictionHourInput::default()),
            Err(ValidationError::InvalidStoreId)
        );

        // 分类与描述同时为空时先报分类
        let input = RestrictionHourInput {
            category: Some(" ".into()),
            category_desc: None,
            ..valid_input()
        };
        assert_eq!(validate(&input), Err(ValidationError::InvalidCategory));

        // 星期无效优先于分类编码缺失
        let input = RestrictionHourInput {
            day_of_week: Some("x".into()),
            category_code: None,
            ..valid_input()
        };
        assert!(matches!(
            validate(&input),
            Err(ValidationError::InvalidDayOfWeek(_))
        ));

        // 开始小时优先于结束小时
        let input = RestrictionHourInput {
            start_hour: Some(24),
            end_hour: Some(-1),
            ..valid_input()
        };
        assert_eq!(validate(&input), Err(ValidationError::InvalidStartHour));
    }

    #[test]
    fn test_required_fields() {
        let cases = [
            (
                RestrictionHourInput {
                    category_code: None,
                    ..valid_input()
                },
                ValidationError::InvalidCategoryCode,
            ),
            (
                RestrictionHourInput {
                    category_desc: Some("".into()),
                    ..valid_input()
                },
                ValidationError::InvalidCategoryDesc,
            ),
            (
                RestrictionHourInput {
                    has_restriction_hour: None,
                    ..valid_input()
                },
                ValidationError::InvalidHasRestriction,
            ),
        ];

        for (input, expected) in cases {
            assert_eq!(validate(&input), Err(expected));
        }
    }

    #[test]
    fn test_hours_checked_only_when_restricted() {
        let out_of_range = RestrictionHourInput {
            start_hour: Some(-1),
            end_hour: Some(30),
            ..valid_input()
        };
        assert_eq!(validate(&out_of_range), Err(ValidationError::InvalidStartHour));

        let missing_end = RestrictionHourInput {
            end_hour: None,
            ..valid_input()
        };
        assert_eq!(validate(&missing_end), Err(ValidationError::InvalidEndHour));

        // 未启用限制：越界或缺失的小时都原样接受
        let unrestricted = RestrictionHourInput {
            has_restriction_hour: Some(false),
            ..out_of_range
        };
        let record = validate(&unrestricted).unwrap();
        assert_eq!(record.start_hour, Some(-1));
        assert_eq!(record.end_hour, Some(30));

        let unrestricted_empty = RestrictionHourInput {
            has_restriction_hour: Some(false),
            start_hour: None,
            end_hour: None,
            ..valid_input()
        };
        assert!(validate(&unrestricted_empty).is_ok());
    }

    #[test]
    fn test_hour_boundaries() {
        let input = RestrictionHourInput {
            start_hour: Some(0),
            end_hour: Some(23),
            ..valid_input()
        };
        assert!(validate(&input).is_ok());
    }
}
