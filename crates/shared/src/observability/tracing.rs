//! 日志初始化
//!
//! 基于 tracing-subscriber，支持 JSON（生产）与 pretty（开发）两种输出格式。
//! `RUST_LOG` 环境变量优先于配置中的日志级别。

use anyhow::Result;
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

use super::ObservabilityConfig;

/// 构建环境过滤器
pub fn env_filter(config: &ObservabilityConfig) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"))
}

/// 初始化全局 subscriber
///
/// 重复调用会返回错误，进程内只应调用一次。
pub fn init(config: &ObservabilityConfig) -> Result<()> {
    let fmt_layer = if config.json_logs() {
        fmt::layer()
            .json()
            .with_span_events(FmtSpan::CLOSE)
            .with_target(true)
            .with_thread_ids(true)
            .boxed()
    } else {
        fmt::layer()
            .with_target(true)
            .with_thread_ids(false)
            .with_ansi(true)
            .boxed()
    };

    tracing_subscriber::registry()
        .with(env_filter(config))
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_level_falls_back_to_info() {
        // RUST_LOG 优先于配置，设置时跳过
        if std::env::var("RUST_LOG").is_ok() {
            return;
        }

        let config = ObservabilityConfig {
            log_level: "badge_evaluator=verbose".to_string(),
            ..Default::default()
        };
        assert_eq!(env_filter(&config).to_string(), "info");
    }

    #[test]
    fn test_configured_level_used() {
        if std::env::var("RUST_LOG").is_ok() {
            return;
        }

        let config = ObservabilityConfig {
            log_level: "debug".to_string(),
            ..Default::default()
        };
        assert_eq!(env_filter(&config).to_string(), "debug");
    }
}
