//! 徽章评估错误类型

use badge_shared::error::BadgeError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EvaluatorError {
    #[error("无效的参数: {field} - {message}")]
    InvalidArgument { field: String, message: String },

    #[error("徽章目录无效: {catalog} - {reason}")]
    InvalidCatalog { catalog: String, reason: String },

    #[error("徽章目录不存在: {0}")]
    CatalogNotFound(String),

    #[error("JSON 序列化错误: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, EvaluatorError>;

impl EvaluatorError {
    pub(crate) fn invalid_catalog(catalog: &str, reason: impl Into<String>) -> Self {
        Self::InvalidCatalog {
            catalog: catalog.to_string(),
            reason: reason.into(),
        }
    }

    /// 获取错误码
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidArgument { .. } => "INVALID_ARGUMENT",
            Self::InvalidCatalog { .. } => "INVALID_CATALOG",
            Self::CatalogNotFound(_) => "CATALOG_NOT_FOUND",
            Self::Json(_) => "JSON_ERROR",
        }
    }
}

impl From<EvaluatorError> for BadgeError {
    fn from(err: EvaluatorError) -> Self {
        match err {
            EvaluatorError::InvalidArgument { field, message } => {
                Self::InvalidArgument { field, message }
            }
            EvaluatorError::CatalogNotFound(name) => Self::CatalogNotFound { name },
            e @ EvaluatorError::InvalidCatalog { .. } => Self::InvalidCatalog(e.to_string()),
            EvaluatorError::Json(e) => Self::Internal(format!("JSON 处理错误: {}", e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_maps_to_service_error() {
        let err: BadgeError = EvaluatorError::CatalogNotFound("seasonal".to_string()).into();
        assert_eq!(err.code(), "CATALOG_NOT_FOUND");

        let err: BadgeError = EvaluatorError::InvalidArgument {
            field: "xp".to_string(),
            message: "经验值不能为负数: -1".to_string(),
        }
        .into();
        assert_eq!(err.code(), "INVALID_ARGUMENT");

        let err: BadgeError = EvaluatorError::invalid_catalog("classic", "阈值必须严格递增").into();
        assert_eq!(err.code(), "INVALID_CATALOG");
        assert!(err.to_string().contains("阈值必须严格递增"));
    }
}
