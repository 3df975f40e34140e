//! 统一错误处理模块
//!
//! 定义服务层共享的错误类型，使用 thiserror 提供良好的错误信息，
//! 并负责把错误渲染为统一的 HTTP JSON 响应。

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use thiserror::Error;

/// 系统错误类型
#[derive(Debug, Error)]
pub enum BadgeError {
    // ==================== 参数错误 ====================
    #[error("无效的参数: {field} - {message}")]
    InvalidArgument { field: String, message: String },

    #[error("参数验证失败: {0}")]
    Validation(String),

    // ==================== 徽章目录错误 ====================
    #[error("徽章目录不存在: {name}")]
    CatalogNotFound { name: String },

    #[error("徽章目录配置无效: {0}")]
    InvalidCatalog(String),

    // ==================== 通用错误 ====================
    #[error("内部错误: {0}")]
    Internal(String),
}

/// 错误结果类型别名
pub type Result<T> = std::result::Result<T, BadgeError>;

impl BadgeError {
    /// 获取错误码
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidArgument { .. } => "INVALID_ARGUMENT",
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::CatalogNotFound { .. } => "CATALOG_NOT_FOUND",
            Self::InvalidCatalog(_) => "INVALID_CATALOG",
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// 返回对应的 HTTP 状态码
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidArgument { .. } | Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::CatalogNotFound { .. } => StatusCode::NOT_FOUND,
            // 目录在启动时校验，运行期出现说明部署配置有误
            Self::InvalidCatalog(_) | Self::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// 是否为调用方错误（4xx）
    pub fn is_client_error(&self) -> bool {
        self.status_code().is_client_error()
    }
}

impl IntoResponse for BadgeError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        // 系统级错误只返回通用提示，详细信息仅记录日志
        let message = if status.is_server_error() {
            tracing::error!(code = self.code(), error = %self, "请求处理失败");
            "服务内部错误，请稍后重试".to_string()
        } else {
            self.to_string()
        };

        let body = json!({
            "success": false,
            "code": self.code(),
            "message": message,
            "data": serde_json::Value::Null
        });

        (status, axum::Json(body)).into_response()
    }
}
