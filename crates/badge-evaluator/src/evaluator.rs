//! 徽章评估器
//!
//! 对目录做一次线性扫描，收集所有阈值不超过经验值的徽章。
//! 纯计算，无副作用，相同输入始终得到相同输出。

use crate::catalog::BadgeCatalog;
use crate::error::Result;
use crate::models::{BadgeProgress, BadgeSet, BadgeTier, NextBadge, Xp};
use std::sync::Arc;
use tracing::{debug, instrument};

/// 计算经验值在指定目录下已获得的徽章
///
/// 返回按阈值升序排列的全部已达成徽章；低于最低阈值时返回空集合。
pub fn evaluate_badges(catalog: &BadgeCatalog, xp: Xp) -> BadgeSet {
    catalog
        .tiers()
        .iter()
        .filter(|tier| tier.is_earned_at(xp))
        .map(|tier| tier.badge.clone())
        .collect()
}

/// 绑定到某个目录的评估器
#[derive(Debug, Clone)]
pub struct BadgeEvaluator {
    catalog: Arc<BadgeCatalog>,
}

impl BadgeEvaluator {
    pub fn new(catalog: Arc<BadgeCatalog>) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &BadgeCatalog {
        &self.catalog
    }

    /// 计算已获得的徽章
    pub fn evaluate(&self, xp: Xp) -> BadgeSet {
        let badges = evaluate_badges(&self.catalog, xp);
        debug!(
            catalog = %self.catalog.name(),
            xp = xp.value(),
            earned = badges.len(),
            "徽章评估完成"
        );
        badges
    }

    /// 严格模式：接受有符号输入，负数返回 InvalidArgument
    #[instrument(skip(self), fields(catalog = %self.catalog.name()))]
    pub fn evaluate_signed(&self, xp: i64) -> Result<BadgeSet> {
        let xp = Xp::try_from(xp)?;
        Ok(self.evaluate(xp))
    }

    /// 下一枚待解锁的等级
    pub fn next_tier(&self, xp: Xp) -> Option<&BadgeTier> {
        self.catalog.tiers().iter().find(|tier| !tier.is_earned_at(xp))
    }

    /// 生成进度报告
    pub fn progress(&self, xp: Xp) -> BadgeProgress {
        let earned = self.evaluate(xp);

        let previous_threshold = earned
            .highest()
            .and_then(|badge| self.catalog.threshold_of(badge))
            .unwrap_or(0);

        let (next_badge, tier_progress_percent) = match self.next_tier(xp) {
            Some(next) => {
                let span = next.threshold - previous_threshold;
                let done = xp.value() - previous_threshold;
                // next.threshold > xp >= previous_threshold，span 不为 0，结果 < 100
                let percent = (u128::from(done) * 100 / u128::from(span)) as u8;
                let next_badge = NextBadge {
                    badge: next.badge.clone(),
                    threshold: next.threshold,
                    xp_remaining: next.threshold - xp.value(),
                };
                (Some(next_badge), percent)
            }
            None => (None, 100),
        };

        BadgeProgress {
            xp,
            catalog: self.catalog.name().to_string(),
            earned,
            next_badge,
            tier_progress_percent,
        }
    }
}
