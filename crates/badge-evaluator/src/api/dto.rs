//! 请求和响应 DTO
//!
//! 序列化统一使用 camelCase。

use crate::catalog::BadgeCatalog;
use crate::models::{BadgeSet, BadgeTier};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// 统一响应包装
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    /// 创建成功响应
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            code: "SUCCESS".to_string(),
            message: "操作成功".to_string(),
            data: Some(data),
        }
    }
}

/// 评估请求参数
///
/// xp 以字符串接收，由 handler 解析为 `Xp`，覆盖完整的 u64 范围；
/// 负数与非整数返回 INVALID_ARGUMENT。
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct EvaluateQuery {
    pub xp: String,
    #[validate(length(min = 1, max = 64, message = "目录名长度必须在 1-64 之间"))]
    pub catalog: Option<String>,
}

/// 评估结果
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EvaluationDto {
    pub xp: u64,
    pub catalog: String,
    pub badges: Vec<String>,
}

impl EvaluationDto {
    pub fn new(xp: u64, catalog: &str, badges: BadgeSet) -> Self {
        Self {
            xp,
            catalog: catalog.to_string(),
            badges: badges.into_vec(),
        }
    }
}

/// 目录详情
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogDto {
    pub name: String,
    pub is_default: bool,
    pub tiers: Vec<BadgeTier>,
}

impl CatalogDto {
    pub fn from_catalog(catalog: &BadgeCatalog, is_default: bool) -> Self {
        Self {
            name: catalog.name().to_string(),
            is_default,
            tiers: catalog.tiers().to_vec(),
        }
    }
}
