//! 路由配置模块
//!
//! 定义 REST API 端点的路由映射及公共中间件

use axum::{
    Router, middleware,
    http::HeaderValue,
    routing::{get, post, put},
};
use tower_http::cors::{Any, CorsLayer};
use tracing::{info, warn};

use restriction_shared::config::CorsConfig;
use restriction_shared::observability::middleware as obs_middleware;

use crate::{handlers, handlers::restriction_hour as rh, state::AppState};

/// 限制时段 API 基础路径
pub const BASE_PATH: &str = "/api/restriction-hours";

const KEY_PATH: &str = "/store/{storeId}/day/{dayOfWeek}/category/{category}/code/{categoryCode}";

/// 构建限制时段路由（相对 BASE_PATH）
pub fn restriction_hour_routes() -> Router<AppState> {
    Router::new()
        // 查询
        .route("/getAllRestrictionHours", get(rh::list_all))
        .route("/with-restrictions", get(rh::list_with_restrictions))
        .route("/without-restrictions", get(rh::list_without_restrictions))
        .route("/time-range", get(rh::list_by_time_range))
        .route("/stores", get(rh::list_by_store_ids))
        .route("/store/{storeId}", get(rh::list_by_store))
        .route(
            "/store/{storeId}/day/{dayOfWeek}",
            get(rh::list_by_store_and_day),
        )
        .route("/day/{dayOfWeek}", get(rh::list_by_day))
        .route("/category/{categoryCode}", get(rh::list_by_category_code))
        .route("/{id}", get(rh::get_by_id))
        // 创建
        .route("/addRestrictionHour", post(rh::create))
        .route("/batch", post(rh::create_batch))
        // 按组合键更新、删除
        .route(KEY_PATH, put(rh::update_by_key).delete(rh::delete_by_key))
        // 请求体携带组合键
        .route("/update", put(rh::update))
        .route("/batch-update", put(rh::update_batch))
        .route("/delete", axum::routing::delete(rh::delete))
        .route("/batch-delete", axum::routing::delete(rh::delete_batch))
}

/// 构建完整应用路由
///
/// 包含业务 API、健康检查以及请求 ID、HTTP 追踪中间件；CORS 由调用方按配置追加
pub fn app_router(state: AppState) -> Router {
    Router::new()
        .nest(BASE_PATH, restriction_hour_routes())
        .route("/health", get(handlers::health::health_check))
        .route("/ready", get(handlers::health::readiness_check))
        .layer(middleware::from_fn(obs_middleware::http_tracing))
        .layer(middleware::from_fn(obs_middleware::request_id))
        .with_state(state)
}

/// 按配置构建 CORS 层
pub fn cors_layer(config: &CorsConfig, production: bool) -> CorsLayer {
    if config.allows_any() {
        if production {
            warn!("CORS allowed_origins=\"*\" is unsafe in production");
        }
        info!("CORS allowed_origins: * (all origins)");
        return CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);
    }

    let origins: Vec<HeaderValue> = config
        .origins()
        .iter()
        .filter_map(|origin| origin.parse::<HeaderValue>().ok())
        .collect();
    info!(origins = ?config.origins(), "CORS allowed origins configured");

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods(Any)
        .allow_headers(Any)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_routes_construction() {
        let _routes = restriction_hour_routes();
        let _cors = cors_layer(&CorsConfig::default(), false);
        let _any = cors_layer(
            &CorsConfig {
                allowed_origins: "*".to_string(),
            },
            true,
        );
    }
}
