//! 限制时段 API 处理器
//!
//! 基础路径 `/api/restriction-hours`。提取器失败（路径、查询、JSON 解析）
//! 统一转换为 `AdminError`，保证错误响应体格式一致。

use axum::{
    Json,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, PathRejection, QueryRejection},
    },
    http::StatusCode,
};
use tracing::info;

use restriction_hours::{RestrictionHour, RestrictionHourInput};

use crate::{
    dto::{BatchDeleteResponse, KeyPath, MessageResponse, StoreIdsQuery, TimeRangeQuery},
    error::{AdminError, Result},
    state::AppState,
};

const DELETED_MESSAGE: &str = "限制时段删除成功";

type Records = Json<Vec<RestrictionHour>>;

// ==================== 查询 ====================

/// GET /getAllRestrictionHours
pub async fn list_all(State(state): State<AppState>) -> Result<Records> {
    Ok(Json(state.service.list_all().await?))
}

/// GET /{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    path: std::result::Result<Path<i64>, PathRejection>,
) -> Result<Json<RestrictionHour>> {
    let Path(id) = path?;
    state
        .service
        .get_by_id(id)
        .await?
        .map(Json)
        .ok_or_else(|| AdminError::NotFound(format!("限制时段 {id}")))
}

/// GET /store/{storeId}
pub async fn list_by_store(
    State(state): State<AppState>,
    path: std::result::Result<Path<i32>, PathRejection>,
) -> Result<Records> {
    let Path(store_id) = path?;
    Ok(Json(state.service.list_by_store(store_id).await?))
}

/// GET /store/{storeId}/day/{dayOfWeek}
pub async fn list_by_store_and_day(
    State(state): State<AppState>,
    path: std::result::Result<Path<(i32, String)>, PathRejection>,
) -> Result<Records> {
    let Path((store_id, day_of_week)) = path?;
    Ok(Json(
        state
            .service
            .list_by_store_and_day(store_id, &day_of_week)
            .await?,
    ))
}

/// GET /day/{dayOfWeek}
pub async fn list_by_day(
    State(state): State<AppState>,
    path: std::result::Result<Path<String>, PathRejection>,
) -> Result<Records> {
    let Path(day_of_week) = path?;
    Ok(Json(state.service.list_by_day(&day_of_week).await?))
}

/// GET /category/{categoryCode}
pub async fn list_by_category_code(
    State(state): State<AppState>,
    path: std::result::Result<Path<i32>, PathRejection>,
) -> Result<Records> {
    let Path(category_code) = path?;
    Ok(Json(
        state.service.list_by_category_code(category_code).await?,
    ))
}

/// GET /with-restrictions
pub async fn list_with_restrictions(State(state): State<AppState>) -> Result<Records> {
    Ok(Json(state.service.list_with_restrictions().await?))
}

/// GET /without-restrictions
pub async fn list_without_restrictions(State(state): State<AppState>) -> Result<Records> {
    Ok(Json(state.service.list_without_restrictions().await?))
}

/// GET /time-range?startHour=&endHour=
pub async fn list_by_time_range(
    State(state): State<AppState>,
    query: std::result::Result<Query<TimeRangeQuery>, QueryRejection>,
) -> Result<Records> {
    let Query(query) = query?;
    let (start_hour, end_hour) = query.bounds()?;
    Ok(Json(
        state
            .service
            .list_by_time_range(start_hour, end_hour)
            .await?,
    ))
}

/// GET /stores?ids=1,2,3
pub async fn list_by_store_ids(
    State(state): State<AppState>,
    query: std::result::Result<Query<StoreIdsQuery>, QueryRejection>,
) -> Result<Records> {
    let Query(query) = query?;
    let store_ids = query.parse_ids()?;
    Ok(Json(state.service.list_by_store_ids(&store_ids).await?))
}

// ==================== 创建 ====================

/// POST /addRestrictionHour
pub async fn create(
    State(state): State<AppState>,
    body: std::result::Result<Json<RestrictionHourInput>, JsonRejection>,
) -> Result<(StatusCode, Json<RestrictionHour>)> {
    let Json(input) = body?;
    let created = state.service.create(&input).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// POST /batch
pub async fn create_batch(
    State(state): State<AppState>,
    body: std::result::Result<Json<Vec<RestrictionHourInput>>, JsonRejection>,
) -> Result<(StatusCode, Records)> {
    let Json(inputs) = body?;
    let created = state.service.create_batch(&inputs).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

// ==================== 更新 ====================

/// PUT /store/{storeId}/day/{dayOfWeek}/category/{category}/code/{categoryCode}
///
/// 请求体提供新值，组合键以路径为准
pub async fn update_by_key(
    State(state): State<AppState>,
    path: std::result::Result<Path<KeyPath>, PathRejection>,
    body: std::result::Result<Json<RestrictionHourInput>, JsonRejection>,
) -> Result<Json<RestrictionHour>> {
    let Path(key_path) = path?;
    let Json(input) = body?;
    let key = key_path.resolve()?;
    Ok(Json(state.service.update_by_key(&key, &input).await?))
}

/// PUT /update
pub async fn update(
    State(state): State<AppState>,
    body: std::result::Result<Json<RestrictionHourInput>, JsonRejection>,
) -> Result<Json<RestrictionHour>> {
    let Json(input) = body?;
    Ok(Json(state.service.update(&input).await?))
}

/// PUT /batch-update
pub async fn update_batch(
    State(state): State<AppState>,
    body: std::result::Result<Json<Vec<RestrictionHourInput>>, JsonRejection>,
) -> Result<Records> {
    let Json(inputs) = body?;
    Ok(Json(state.service.update_batch(&inputs).await?))
}

// ==================== 删除 ====================

/// DELETE /store/{storeId}/day/{dayOfWeek}/category/{category}/code/{categoryCode}
pub async fn delete_by_key(
    State(state): State<AppState>,
    path: std::result::Result<Path<KeyPath>, PathRejection>,
) -> Result<Json<MessageResponse>> {
    let Path(key_path) = path?;
    let key = key_path.resolve()?;
    deleted_response(state.service.delete_by_key(&key).await?)
}

/// DELETE /delete
pub async fn delete(
    State(state): State<AppState>,
    body: std::result::Result<Json<RestrictionHourInput>, JsonRejection>,
) -> Result<Json<MessageResponse>> {
    let Json(input) = body?;
    deleted_response(state.service.delete(&input).await?)
}

/// DELETE /batch-delete
pub async fn delete_batch(
    State(state): State<AppState>,
    body: std::result::Result<Json<Vec<RestrictionHourInput>>, JsonRejection>,
) -> Result<Json<BatchDeleteResponse>> {
    let Json(inputs) = body?;
    let outcome = state.service.delete_batch(&inputs).await?;
    info!(
        deleted = outcome.deleted_count,
        requested = outcome.total_requested,
        "Batch delete request handled"
    );
    Ok(Json(outcome.into()))
}

/// 存储层未删除任何行时返回 500
fn deleted_response(deleted: bool) -> Result<Json<MessageResponse>> {
    if deleted {
        Ok(Json(MessageResponse::new(DELETED_MESSAGE)))
    } else {
        Err(AdminError::DeleteFailed)
    }
}
