//! 枚举类型定义
//!
//! 所有枚举都支持数据库（sqlx）和 JSON（serde）序列化

use serde::{Deserialize, Serialize};
use std::fmt;

/// 星期
///
/// 数据库与 JSON 中均以首字母大写的英文全称存储（如 "Monday"）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "varchar")]
pub enum DayOfWeek {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl DayOfWeek {
    pub const ALL: [DayOfWeek; 7] = [
        Self::Monday,
        Self::Tuesday,
        Self::Wednesday,
        Self::Thursday,
        Self::Friday,
        Self::Saturday,
        Self::Sunday,
    ];

    /// 规范写法
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Monday => "Monday",
            Self::Tuesday => "Tuesday",
            Self::Wednesday => "Wednesday",
            Self::Thursday => "Thursday",
            Self::Friday => "Friday",
            Self::Saturday => "Saturday",
            Self::Sunday => "Sunday",
        }
    }

    /// 解析星期，忽略大小写及首尾空白
    ///
    /// 空串或无法识别的名称返回 None
    pub fn parse(value: &str) -> Option<Self> {
        let value = value.trim();
        Self::ALL
            .into_iter()
            .find(|day| day.as_str().eq_ignore_ascii_case(value))
    }
}

impl fmt::Display for DayOfWeek {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_is_case_insensitive() {
        for raw in ["monday", "MONDAY", "Monday", "mOnDaY", "  monday "] {
            assert_eq!(DayOfWeek::parse(raw), Some(DayOfWeek::Monday), "input={raw:?}");
        }
        assert_eq!(DayOfWeek::parse("sunday"), Some(DayOfWeek::Sunday));
    }

    #[test]
    fn test_parse_rejects_unknown_and_blank() {
        assert_eq!(DayOfWeek::parse(""), None);
        assert_eq!(DayOfWeek::parse("   "), None);
        assert_eq!(DayOfWeek::parse("Mon"), None);
        assert_eq!(DayOfWeek::parse("Funday"), None);
    }

    #[test]
    fn test_serde_uses_title_case() {
        let json = serde_json::to_string(&DayOfWeek::Wednesday).unwrap();
        assert_eq!(json, "\"Wednesday\"");
        assert_eq!(DayOfWeek::Friday.to_string(), "Friday");
    }
}
