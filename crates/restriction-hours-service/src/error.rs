//! 限制时段服务错误类型
//!
//! 定义服务层的业务错误和系统错误

use thiserror::Error;

use crate::models::{DayOfWeek, RestrictionHourKey};
use crate::validation::ValidationError;

/// 限制时段服务错误类型
#[derive(Debug, Error)]
pub enum RestrictionError {
    // === 业务错误 ===
    #[error("参数校验失败: {0}")]
    Validation(#[from] ValidationError),

    #[error("门店 {store_id} 在 {day_of_week} 的限制时段已存在")]
    Duplicate { store_id: i32, day_of_week: DayOfWeek },

    #[error("批量数据中存在重复的限制时段: 门店 {store_id}，{day_of_week}")]
    DuplicateInBatch { store_id: i32, day_of_week: DayOfWeek },

    #[error(
        "限制时段不存在: 门店={store_id}, 星期={day_of_week}, 分类={category}, 分类编码={category_code}"
    )]
    NotFound {
        store_id: i32,
        day_of_week: String,
        category: String,
        category_code: i32,
    },

    #[error("必须提供全部组合键字段（storeId, dayOfWeek, category, categoryCode）")]
    MissingKeyFields,

    #[error("限制时段列表不能为空")]
    EmptyBatch,

    // === 系统错误 ===
    #[error("数据库错误: {0}")]
    Database(#[from] sqlx::Error),
}

impl RestrictionError {
    /// 按组合键构造不存在错误
    pub fn not_found(key: &RestrictionHourKey) -> Self {
        Self::NotFound {
            store_id: key.store_id,
            day_of_week: key.day_of_week.to_string(),
            category: key.category.clone(),
            category_code: key.category_code,
        }
    }

    /// 是否为调用方可修正的业务错误（对外返回具体原因）
    pub fn is_business_rule(&self) -> bool {
        !matches!(self, Self::Database(_))
    }

    /// 错误码（用于日志与指标）
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::Duplicate { .. } | Self::DuplicateInBatch { .. } => "DUPLICATE_RECORD",
            Self::NotFound { .. } => "NOT_FOUND",
            Self::MissingKeyFields => "MISSING_KEY_FIELDS",
            Self::EmptyBatch => "EMPTY_BATCH",
            Self::Database(_) => "DATABASE_ERROR",
        }
    }
}

/// 服务层 Result 类型别名
pub type Result<T> = std::result::Result<T, RestrictionError>;
