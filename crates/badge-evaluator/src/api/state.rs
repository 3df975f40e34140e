//! 应用状态定义

use crate::registry::CatalogRegistry;
use std::sync::Arc;

/// Axum 应用共享状态
///
/// 目录注册表只读，通过 Arc 在 handler 间共享
#[derive(Clone)]
pub struct AppState {
    pub registry: Arc<CatalogRegistry>,
    /// 服务名，用于健康检查响应
    pub service_name: String,
}

impl AppState {
    pub fn new(registry: Arc<CatalogRegistry>, service_name: impl Into<String>) -> Self {
        Self {
            registry,
            service_name: service_name.into(),
        }
    }
}
