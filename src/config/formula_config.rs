// ==========================================
// Little 定律公式库 - 配置
// ==========================================
// 职责: 配置加载（默认值 / JSON 文件 / 环境变量覆写）
// 优先级: 环境变量 > JSON 文件 > 默认值
// ==========================================

use crate::domain::Operand;
use crate::engine::validator::validate;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

// ==========================================
// 环境变量键
// ==========================================
pub mod env_keys {
    // JSON 配置文件路径
    pub const CONFIG_PATH: &str = "LITTLES_LAW_CONFIG";

    // 利用率告警阈值
    pub const UTILIZATION_WARN_THRESHOLD: &str = "LITTLES_LAW_UTILIZATION_WARN_THRESHOLD";

    // 默认日志级别（RUST_LOG 优先）
    pub const LOG_LEVEL: &str = "LITTLES_LAW_LOG_LEVEL";

    // 输出格式化 JSON
    pub const PRETTY_OUTPUT: &str = "LITTLES_LAW_PRETTY_OUTPUT";
}

/// 配置错误
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("配置项 {key} 的值无效: {value}")]
    InvalidValue { key: String, value: String },

    #[error("配置文件读取失败: {0}")]
    Io(#[from] std::io::Error),

    #[error("配置解析失败: {0}")]
    Parse(#[from] serde_json::Error),
}

fn is_true(v: &str) -> bool {
    matches!(
        v.trim().to_lowercase().as_str(),
        "1" | "true" | "yes" | "y" | "on"
    )
}

fn default_utilization_warn_threshold() -> f64 {
    1.0
}

fn default_log_level() -> String {
    "info".to_string()
}

// ==========================================
// FormulaConfig - 公式库配置
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormulaConfig {
    /// 利用率告警阈值（比例），超过即在 API 响应中附加告警
    #[serde(default = "default_utilization_warn_threshold")]
    pub utilization_warn_threshold: f64,

    /// 默认日志级别（RUST_LOG 未设置时生效）
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// 是否输出格式化 JSON
    #[serde(default)]
    pub pretty_output: bool,
}

impl Default for FormulaConfig {
    fn default() -> Self {
        Self {
            utilization_warn_threshold: default_utilization_warn_threshold(),
            log_level: default_log_level(),
            pretty_output: false,
        }
    }
}

impl FormulaConfig {
    /// 从进程环境变量加载
    ///
    /// 若设置了 LITTLES_LAW_CONFIG，先读取该 JSON 文件，再应用环境变量覆写
    pub fn from_env() -> Result<Self, ConfigError> {
        let base = match std::env::var(env_keys::CONFIG_PATH) {
            Ok(path) if !path.trim().is_empty() => Self::from_file(path.trim())?,
            _ => Self::default(),
        };
        base.with_overrides(|key| std::env::var(key).ok())
    }

    /// 从任意键值来源加载（默认值为基础）
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        Self::default().with_overrides(lookup)
    }

    /// 从 JSON 字符串加载
    pub fn from_json_str(raw: &str) -> Result<Self, ConfigError> {
        let config: FormulaConfig = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// 从 JSON 文件加载
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_json_str(&raw)
    }

    /// 应用键值覆写
    pub fn with_overrides<F>(mut self, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(raw) = lookup(env_keys::UTILIZATION_WARN_THRESHOLD) {
            self.utilization_warn_threshold =
                raw.trim()
                    .parse::<f64>()
                    .map_err(|_| ConfigError::InvalidValue {
                        key: env_keys::UTILIZATION_WARN_THRESHOLD.to_string(),
                        value: raw.clone(),
                    })?;
        }

        if let Some(raw) = lookup(env_keys::LOG_LEVEL) {
            let level = raw.trim();
            if !level.is_empty() {
                self.log_level = level.to_string();
            }
        }

        if let Some(raw) = lookup(env_keys::PRETTY_OUTPUT) {
            self.pretty_output = is_true(&raw);
        }

        self.validate()?;
        Ok(self)
    }

    /// 校验配置
    ///
    /// 利用率告警阈值必须为有限正数
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate(
            &Operand::Float(self.utilization_warn_threshold),
            "utilization_warn_threshold",
            false,
        )
        .map_err(|_| ConfigError::InvalidValue {
            key: "utilization_warn_threshold".to_string(),
            value: self.utilization_warn_threshold.to_string(),
        })?;
        Ok(())
    }
}
