//! 应用状态定义

use std::sync::Arc;

use restriction_hours::RestrictionHourService;
use restriction_shared::database::Database;

/// Axum 应用共享状态
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<RestrictionHourService>,
    /// 使用 PostgreSQL 存储时持有连接池，用于就绪探针
    pub database: Option<Database>,
}

impl AppState {
    pub fn new(service: Arc<RestrictionHourService>) -> Self {
        Self {
            service,
            database: None,
        }
    }

    pub fn with_database(mut self, database: Database) -> Self {
        self.database = Some(database);
        self
    }
}
