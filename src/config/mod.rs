// ==========================================
// Little 定律公式库 - 配置层
// ==========================================
// 职责: 公式库运行配置（告警阈值、日志级别、输出格式）
// 来源: 默认值 / JSON 文件 / 环境变量
// ==========================================

pub mod formula_config;

// 重导出核心配置
pub use formula_config::{env_keys, ConfigError, FormulaConfig};
