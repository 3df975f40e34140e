//! 路由配置

use axum::{Router, middleware, routing::get};
use badge_shared::observability::middleware as obs_middleware;

use crate::api::{handlers, state::AppState};

/// API 路由（挂载在 /api/v1 下）
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/badges/evaluate", get(handlers::evaluate))
        .route("/badges/progress", get(handlers::progress))
        .route("/catalogs", get(handlers::list_catalogs))
        .route("/catalogs/{name}", get(handlers::get_catalog))
}

/// 完整应用路由，含健康检查与可观测性中间件
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .nest("/api/v1", api_routes())
        .route("/health", get(handlers::health_check))
        .layer(middleware::from_fn(obs_middleware::http_tracing))
        .layer(middleware::from_fn(obs_middleware::request_id))
        .with_state(state)
}
