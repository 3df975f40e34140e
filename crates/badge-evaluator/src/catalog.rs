//! 徽章目录
//!
//! 目录是一张按阈值严格递增排列的等级表，构造时完成校验，
//! 之后不可变，可在线程间自由共享。

use crate::error::{EvaluatorError, Result};
use crate::models::BadgeTier;
use badge_shared::config::CatalogDefinition;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// 经典目录名
pub const CLASSIC: &str = "classic";
/// 扩展目录名
pub const EXTENDED: &str = "extended";

const CLASSIC_TIERS: &[(&str, u64)] = &[
    ("first_steps", 10),
    ("rising_star", 50),
    ("dedicated_learner", 100),
    ("quiz_master", 250),
    ("expert", 500),
    ("legend", 1000),
];

const EXTENDED_TIERS: &[(&str, u64)] = &[
    ("first_steps", 10),
    ("rising_star", 50),
    ("dedicated_learner", 100),
    ("bookworm", 200),
    ("quiz_master", 350),
    ("scholar", 500),
    ("expert", 750),
    ("guru", 1000),
    ("legend", 1500),
];

/// 徽章目录
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BadgeCatalog {
    name: String,
    tiers: Vec<BadgeTier>,
}

/// JSON 目录定义，反序列化后再走校验
#[derive(Deserialize)]
struct RawCatalog {
    name: String,
    tiers: Vec<BadgeTier>,
}

impl BadgeCatalog {
    /// 创建并校验目录
    ///
    /// 要求：名称非空、至少一个等级、徽章标识由小写字母/数字/下划线组成且不重复、
    /// 阈值严格递增。
    pub fn new(name: impl Into<String>, tiers: Vec<BadgeTier>) -> Result<Self> {
        let name = name.into();
        Self::validate(&name, &tiers)?;
        Ok(Self { name, tiers })
    }

    /// 经典目录（6 个等级，最高 1000）
    pub fn classic() -> Self {
        Self::from_static(CLASSIC, CLASSIC_TIERS)
    }

    /// 扩展目录（9 个等级，最高 1500）
    pub fn extended() -> Self {
        Self::from_static(EXTENDED, EXTENDED_TIERS)
    }

    /// 所有内置目录
    pub fn builtins() -> Vec<Self> {
        vec![Self::classic(), Self::extended()]
    }

    fn from_static(name: &str, tiers: &[(&str, u64)]) -> Self {
        Self {
            name: name.to_string(),
            tiers: tiers
                .iter()
                .map(|(badge, threshold)| BadgeTier::new(*badge, *threshold))
                .collect(),
        }
    }

    /// 从 JSON 加载目录
    ///
    /// 格式：`{"name": "...", "tiers": [{"badge": "...", "threshold": 10}]}`
    pub fn from_json(json: &str) -> Result<Self> {
        let raw: RawCatalog = serde_json::from_str(json)?;
        Self::new(raw.name, raw.tiers)
    }

    fn validate(name: &str, tiers: &[BadgeTier]) -> Result<()> {
        if name.trim().is_empty() {
            return Err(EvaluatorError::invalid_catalog(name, "目录名不能为空"));
        }

        if tiers.is_empty() {
            return Err(EvaluatorError::invalid_catalog(name, "至少需要一个徽章等级"));
        }

        let mut seen = HashSet::with_capacity(tiers.len());
        let mut previous: Option<&BadgeTier> = None;

        for tier in tiers {
            if !is_valid_badge_id(&tier.badge) {
                return Err(EvaluatorError::invalid_catalog(
                    name,
                    format!("徽章标识不合法: '{}'", tier.badge),
                ));
            }

            if !seen.insert(tier.badge.as_str()) {
                return Err(EvaluatorError::invalid_catalog(
                    name,
                    format!("徽章标识重复: {}", tier.badge),
                ));
            }

            if let Some(prev) = previous.filter(|prev| tier.threshold <= prev.threshold) {
                return Err(EvaluatorError::invalid_catalog(
                    name,
                    format!(
                        "阈值必须严格递增: {}({}) 之后是 {}({})",
                        prev.badge, prev.threshold, tier.badge, tier.threshold
                    ),
                ));
            }

            previous = Some(tier);
        }

        Ok(())
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// 按阈值升序排列的等级
    pub fn tiers(&self) -> &[BadgeTier] {
        &self.tiers
    }

    pub fn len(&self) -> usize {
        self.tiers.len()
    }

    /// 校验保证至少有一个等级，恒为 false
    pub fn is_empty(&self) -> bool {
        self.tiers.is_empty()
    }

    pub fn lowest_threshold(&self) -> u64 {
        self.tiers.first().map_or(0, |t| t.threshold)
    }

    pub fn highest_threshold(&self) -> u64 {
        self.tiers.last().map_or(0, |t| t.threshold)
    }

    /// 查询徽章的解锁阈值
    pub fn threshold_of(&self, badge: &str) -> Option<u64> {
        self.tiers
            .iter()
            .find(|t| t.badge == badge)
            .map(|t| t.threshold)
    }

    /// 按阈值升序返回全部徽章标识
    pub fn badge_ids(&self) -> Vec<&str> {
        self.tiers.iter().map(|t| t.badge.as_str()).collect()
    }
}

impl TryFrom<&CatalogDefinition> for BadgeCatalog {
    type Error = EvaluatorError;

    fn try_from(def: &CatalogDefinition) -> Result<Self> {
        let tiers = def
            .tiers
            .iter()
            .map(|t| BadgeTier::new(t.badge.clone(), t.threshold))
            .collect();
        Self::new(def.name.clone(), tiers)
    }
}

fn is_valid_badge_id(badge: &str) -> bool {
    !badge.is_empty()
        && badge
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_')
}
