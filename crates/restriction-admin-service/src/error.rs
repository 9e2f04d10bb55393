//! 管理服务错误类型定义
//!
//! 所有错误响应体统一为 `{message, timestamp}`

use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use restriction_hours::RestrictionError;

use crate::dto::ErrorResponse;

/// 系统错误对外统一提示
const INTERNAL_ERROR_MESSAGE: &str = "服务内部错误，请稍后重试";

/// 管理服务错误类型
#[derive(Debug, thiserror::Error)]
pub enum AdminError {
    #[error("参数验证失败: {0}")]
    Validation(String),

    #[error("请求格式错误: {0}")]
    BadRequest(String),

    #[error("资源不存在: {0}")]
    NotFound(String),

    #[error("限制时段删除失败")]
    DeleteFailed,

    #[error(transparent)]
    Restriction(#[from] RestrictionError),
}

impl AdminError {
    /// 返回对应的 HTTP 状态码
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) | Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Restriction(e) if e.is_business_rule() => StatusCode::BAD_REQUEST,
            Self::Restriction(_) | Self::DeleteFailed => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// 返回错误码（用于日志）
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::BadRequest(_) => "BAD_REQUEST",
            Self::NotFound(_) => "NOT_FOUND",
            Self::DeleteFailed => "DELETE_FAILED",
            Self::Restriction(e) => e.error_code(),
        }
    }
}

impl IntoResponse for AdminError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        // 系统级错误只返回通用提示，详细信息仅记录日志
        let message = match &self {
            Self::Restriction(e) if !e.is_business_rule() => {
                tracing::error!(error = %e, code = e.error_code(), "Storage operation failed");
                INTERNAL_ERROR_MESSAGE.to_string()
            }
            other => other.to_string(),
        };

        (status, axum::Json(ErrorResponse::new(message))).into_response()
    }
}

/// 从 validator 错误转换
impl From<validator::ValidationErrors> for AdminError {
    fn from(errors: validator::ValidationErrors) -> Self {
        Self::Validation(errors.to_string())
    }
}

impl From<JsonRejection> for AdminError {
    fn from(rejection: JsonRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}

impl From<PathRejection> for AdminError {
    fn from(rejection: PathRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}

impl From<QueryRejection> for AdminError {
    fn from(rejection: QueryRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}

/// 服务层 Result 类型别名
pub type Result<T> = std::result::Result<T, AdminError>;
