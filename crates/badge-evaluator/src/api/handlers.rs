//! 徽章评估 API 处理器
//!
//! 评估本身是纯计算，handler 只负责参数解析、目录解析和指标记录。

use axum::{
    Json,
    extract::{Path, Query, State, rejection::QueryRejection},
};
use badge_shared::{error::BadgeError, observability::metrics};
use tracing::instrument;
use validator::Validate;

use crate::{
    api::{
        dto::{ApiResponse, CatalogDto, EvaluateQuery, EvaluationDto},
        state::AppState,
    },
    models::{BadgeProgress, Xp},
};

/// 解析并校验评估参数
///
/// xp 缺失或不是整数时返回 INVALID_ARGUMENT，负数同样如此。
fn parse_query(
    query: Result<Query<EvaluateQuery>, QueryRejection>,
) -> Result<(Xp, EvaluateQuery), BadgeError> {
    let Query(query) = query.map_err(|rejection| BadgeError::InvalidArgument {
        field: "xp".to_string(),
        message: rejection.body_text(),
    })?;

    query
        .validate()
        .map_err(|e| BadgeError::Validation(e.to_string()))?;

    let xp: Xp = query.xp.parse()?;
    Ok((xp, query))
}

/// 计算已获得的徽章
///
/// GET /api/v1/badges/evaluate?xp=120&catalog=classic
#[instrument(skip(state))]
pub async fn evaluate(
    State(state): State<AppState>,
    query: Result<Query<EvaluateQuery>, QueryRejection>,
) -> Result<Json<ApiResponse<EvaluationDto>>, BadgeError> {
    let (xp, query) = parse_query(query)?;
    let evaluator = state.registry.evaluator(query.catalog.as_deref())?;
    let catalog = evaluator.catalog().name();

    let badges = evaluator.evaluate(xp);
    metrics::record_badge_evaluation(catalog, badges.len());

    Ok(Json(ApiResponse::success(EvaluationDto::new(
        xp.value(),
        catalog,
        badges,
    ))))
}

/// 查询徽章进度
///
/// GET /api/v1/badges/progress?xp=120&catalog=classic
#[instrument(skip(state))]
pub async fn progress(
    State(state): State<AppState>,
    query: Result<Query<EvaluateQuery>, QueryRejection>,
) -> Result<Json<ApiResponse<BadgeProgress>>, BadgeError> {
    let (xp, query) = parse_query(query)?;
    let evaluator = state.registry.evaluator(query.catalog.as_deref())?;

    let progress = evaluator.progress(xp);
    metrics::record_badge_evaluation(&progress.catalog, progress.earned.len());

    Ok(Json(ApiResponse::success(progress)))
}

/// 目录列表
///
/// GET /api/v1/catalogs
#[instrument(skip(state))]
pub async fn list_catalogs(State(state): State<AppState>) -> Json<ApiResponse<Vec<CatalogDto>>> {
    let default_name = state.registry.default_name();
    let catalogs = state
        .registry
        .iter()
        .map(|c| CatalogDto::from_catalog(c, c.name() == default_name))
        .collect();

    Json(ApiResponse::success(catalogs))
}

/// 目录详情
///
/// GET /api/v1/catalogs/{name}
#[instrument(skip(state))]
pub async fn get_catalog(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<ApiResponse<CatalogDto>>, BadgeError> {
    let catalog = state.registry.get(&name)?;
    let is_default = catalog.name() == state.registry.default_name();

    Ok(Json(ApiResponse::success(CatalogDto::from_catalog(
        &catalog, is_default,
    ))))
}

/// 存活探针
pub async fn health_check(State(state): State<AppState>) -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "ok",
        "service": state.service_name,
        "catalogs": state.registry.len()
    }))
}
