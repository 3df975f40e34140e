//! 经验值徽章评估
//!
//! 根据学习者的经验值（XP）计算已获得的徽章，支持：
//! - 内置与配置注入的阈值目录（catalog）
//! - 累计式徽章评估（按阈值升序返回全部已达成徽章）
//! - 下一枚徽章的进度报告
//! - HTTP 查询接口

pub mod api;
pub mod catalog;
pub mod error;
pub mod evaluator;
pub mod models;
pub mod registry;

pub use catalog::BadgeCatalog;
pub use error::{EvaluatorError, Result};
pub use evaluator::{BadgeEvaluator, evaluate_badges};
pub use models::{BadgeProgress, BadgeSet, BadgeTier, NextBadge, Xp};
pub use registry::CatalogRegistry;
