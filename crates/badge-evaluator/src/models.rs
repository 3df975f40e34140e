//! 徽章评估领域模型

use crate::error::EvaluatorError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// 经验值
///
/// 非负整数，无上限。从有符号整数构造时负数会被拒绝。
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Xp(u64);

impl Xp {
    pub const ZERO: Xp = Xp(0);

    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    pub const fn value(self) -> u64 {
        self.0
    }
}

impl From<u64> for Xp {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl TryFrom<i64> for Xp {
    type Error = EvaluatorError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        u64::try_from(value)
            .map(Self)
            .map_err(|_| EvaluatorError::InvalidArgument {
                field: "xp".to_string(),
                message: format!("经验值不能为负数: {}", value),
            })
    }
}

/// 解析十进制经验值，接受完整的 u64 范围
impl FromStr for Xp {
    type Err = EvaluatorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Ok(value) = s.parse::<u64>() {
            return Ok(Self(value));
        }

        let message = match s.parse::<i128>() {
            Ok(value) if value < 0 => format!("经验值不能为负数: {}", s),
            Ok(_) => format!("经验值超出范围: {}", s),
            Err(_) => format!("经验值必须是整数: '{}'", s),
        };

        Err(EvaluatorError::InvalidArgument {
            field: "xp".to_string(),
            message,
        })
    }
}

impl fmt::Display for Xp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 徽章等级：徽章标识及其最低经验值
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BadgeTier {
    pub badge: String,
    pub threshold: u64,
}

impl BadgeTier {
    pub fn new(badge: impl Into<String>, threshold: u64) -> Self {
        Self {
            badge: badge.into(),
            threshold,
        }
    }

    /// 给定经验值是否达到该等级
    pub fn is_earned_at(&self, xp: Xp) -> bool {
        xp.value() >= self.threshold
    }
}

/// 已获得的徽章集合
///
/// 按阈值升序排列，不含重复项，包含所有已达成的等级而非仅最高等级。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct BadgeSet(Vec<String>);

impl BadgeSet {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, badge: &str) -> bool {
        self.0.iter().any(|b| b == badge)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    /// 以字符串切片形式返回，便于比较
    pub fn as_strs(&self) -> Vec<&str> {
        self.iter().collect()
    }

    pub fn into_vec(self) -> Vec<String> {
        self.0
    }

    /// 阈值最高的已获得徽章
    pub fn highest(&self) -> Option<&str> {
        self.0.last().map(String::as_str)
    }

    /// 本集合中的每个徽章是否都在 other 中
    pub fn is_subset_of(&self, other: &BadgeSet) -> bool {
        self.iter().all(|badge| other.contains(badge))
    }

    /// 本集合是否是 other 的前缀（同一目录下经验值更低时成立）
    pub fn is_prefix_of(&self, other: &BadgeSet) -> bool {
        other.0.starts_with(&self.0)
    }
}

impl FromIterator<String> for BadgeSet {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a BadgeSet {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// 下一枚待解锁的徽章
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NextBadge {
    pub badge: String,
    pub threshold: u64,
    /// 距离解锁还差的经验值，恒大于 0
    pub xp_remaining: u64,
}

/// 进度报告，供进度展示组件使用
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BadgeProgress {
    pub xp: Xp,
    pub catalog: String,
    pub earned: BadgeSet,
    pub next_badge: Option<NextBadge>,
    /// 从上一等级（或 0）到下一等级的完成百分比，向下取整；全部解锁时为 100
    pub tier_progress_percent: u8,
}

impl BadgeProgress {
    /// 是否已解锁目录中的全部徽章
    pub fn is_complete(&self) -> bool {
        self.next_badge.is_none()
    }
}
