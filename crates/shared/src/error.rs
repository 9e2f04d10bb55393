//! 基础设施错误类型
//!
//! 仅覆盖启动阶段（配置、数据库连接、迁移）的错误，业务错误由各服务自行定义。

use thiserror::Error;

/// 基础设施错误
#[derive(Debug, Error)]
pub enum SharedError {
    #[error("配置错误: {0}")]
    Config(#[from] config::ConfigError),

    #[error("数据库错误: {0}")]
    Database(#[from] sqlx::Error),

    #[error("数据库迁移失败: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),
}

pub type Result<T> = std::result::Result<T, SharedError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_database_error_display() {
        let err = SharedError::from(sqlx::Error::RowNotFound);
        assert!(err.to_string().starts_with("数据库错误"));
    }

    #[test]
    fn test_config_error_display() {
        let err = SharedError::from(config::ConfigError::NotFound("server.port".into()));
        assert!(err.to_string().contains("server.port"));
    }
}
