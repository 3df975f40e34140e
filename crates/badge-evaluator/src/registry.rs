//! 徽章目录注册表
//!
//! 汇总内置目录与配置注入的目录，并确定默认目录。
//! 构造完成后只读，通过 Arc 在请求间共享，无需加锁。

use crate::catalog::{self, BadgeCatalog};
use crate::error::{EvaluatorError, Result};
use crate::evaluator::BadgeEvaluator;
use badge_shared::config::BadgesConfig;
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::{info, instrument, warn};

/// 目录注册表
#[derive(Debug, Clone)]
pub struct CatalogRegistry {
    catalogs: BTreeMap<String, Arc<BadgeCatalog>>,
    default: Arc<BadgeCatalog>,
}

impl CatalogRegistry {
    /// 仅包含内置目录，默认使用 classic
    pub fn builtin() -> Self {
        let default = Arc::new(BadgeCatalog::classic());
        let mut catalogs = BTreeMap::new();
        catalogs.insert(default.name().to_string(), default.clone());

        let extended = BadgeCatalog::extended();
        catalogs.insert(extended.name().to_string(), Arc::new(extended));

        Self { catalogs, default }
    }

    /// 从目录列表构建，同名目录后者覆盖前者
    pub fn new(
        catalogs: impl IntoIterator<Item = BadgeCatalog>,
        default_catalog: &str,
    ) -> Result<Self> {
        let catalogs: BTreeMap<_, _> = catalogs
            .into_iter()
            .map(|c| (c.name().to_string(), Arc::new(c)))
            .collect();

        let default = catalogs
            .get(default_catalog)
            .cloned()
            .ok_or_else(|| EvaluatorError::CatalogNotFound(default_catalog.to_string()))?;

        Ok(Self { catalogs, default })
    }

    /// 按配置构建：内置目录 + 自定义目录
    ///
    /// 任一自定义目录校验失败或默认目录不存在都会导致构建失败，
    /// 让错误的部署配置在启动阶段暴露。
    #[instrument(skip(config), fields(default_catalog = %config.default_catalog))]
    pub fn from_config(config: &BadgesConfig) -> Result<Self> {
        let mut catalogs = BadgeCatalog::builtins();

        for def in &config.catalogs {
            let custom = BadgeCatalog::try_from(def)?;
            if custom.name() == catalog::CLASSIC || custom.name() == catalog::EXTENDED {
                warn!(catalog = %custom.name(), "自定义目录覆盖内置目录");
            }
            info!(catalog = %custom.name(), tiers = custom.len(), "自定义目录已加载");
            catalogs.push(custom);
        }

        let registry = Self::new(catalogs, &config.default_catalog)?;
        info!(
            catalogs = ?registry.names(),
            default = %registry.default_name(),
            "徽章目录注册表初始化完成"
        );
        Ok(registry)
    }

    pub fn len(&self) -> usize {
        self.catalogs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.catalogs.is_empty()
    }

    /// 获取目录
    pub fn get(&self, name: &str) -> Result<Arc<BadgeCatalog>> {
        self.catalogs
            .get(name)
            .cloned()
            .ok_or_else(|| EvaluatorError::CatalogNotFound(name.to_string()))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.catalogs.contains_key(name)
    }

    pub fn default_catalog(&self) -> Arc<BadgeCatalog> {
        self.default.clone()
    }

    pub fn default_name(&self) -> &str {
        self.default.name()
    }

    /// 解析请求中的目录名，未指定时使用默认目录
    pub fn resolve(&self, name: Option<&str>) -> Result<Arc<BadgeCatalog>> {
        match name {
            Some(name) => self.get(name),
            None => Ok(self.default_catalog()),
        }
    }

    /// 创建绑定到指定目录的评估器
    pub fn evaluator(&self, name: Option<&str>) -> Result<BadgeEvaluator> {
        self.resolve(name).map(BadgeEvaluator::new)
    }

    /// 按名称排序的目录名
    pub fn names(&self) -> Vec<&str> {
        self.catalogs.keys().map(String::as_str).collect()
    }

    /// 按名称排序遍历目录
    pub fn iter(&self) -> impl Iterator<Item = &Arc<BadgeCatalog>> {
        self.catalogs.values()
    }
}

impl Default for CatalogRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}
