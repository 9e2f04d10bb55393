//! 响应 DTO 定义
//!
//! 记录类响应直接序列化 `RestrictionHour`，这里定义消息类响应

use serde::Serialize;

use restriction_hours::BatchDeleteOutcome;

/// 当前时间（毫秒时间戳）
fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

/// 错误响应
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub message: String,
    pub timestamp: i64,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            timestamp: now_millis(),
        }
    }
}

/// 成功消息响应
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
    pub timestamp: i64,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            timestamp: now_millis(),
        }
    }
}

/// 批量删除响应
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchDeleteResponse {
    pub message: String,
    pub deleted_count: usize,
    pub total_requested: usize,
    pub timestamp: i64,
}

impl From<BatchDeleteOutcome> for BatchDeleteResponse {
    fn from(outcome: BatchDeleteOutcome) -> Self {
        Self {
            message: "批量删除完成".to_string(),
            deleted_count: outcome.deleted_count,
            total_requested: outcome.total_requested,
            timestamp: now_millis(),
        }
    }
}
