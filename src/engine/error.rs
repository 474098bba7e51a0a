// ==========================================
// Little 定律公式库 - 引擎层错误类型
// ==========================================
// 职责: 定义公式校验错误，区分类型错误与范围错误
// 红线: 所有错误必须携带参数名，范围错误必须携带实际值
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

// ==========================================
// ErrorKind - 错误大类
// ==========================================
// 序列化格式: TYPE_ERROR / RANGE_ERROR
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorKind {
    #[serde(rename = "TYPE_ERROR")]
    Type, // 参数不是数值
    #[serde(rename = "RANGE_ERROR")]
    Range, // 参数超出物理意义范围
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::Type => write!(f, "TYPE_ERROR"),
            ErrorKind::Range => write!(f, "RANGE_ERROR"),
        }
    }
}

// ==========================================
// FormulaError - 公式校验错误
// ==========================================
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FormulaError {
    // ==========================================
    // 类型错误
    // ==========================================
    #[error("参数 '{name}' 类型无效: 期望 int 或 float，实际为 {actual}")]
    InvalidType { name: String, actual: String },

    // ==========================================
    // 范围错误
    // ==========================================
    #[error("参数 '{name}' 取值无效: 不能为负数 ({value})")]
    Negative { name: String, value: f64 },

    #[error("参数 '{name}' 取值无效: 作为除数不能为零")]
    Zero { name: String },

    #[error("参数 '{name}' 取值无效: 必须为有限数值 ({value})")]
    NotFinite { name: String, value: f64 },

    #[error("参数 '{name}' 取值无效: 机台数必须为正整数，实际为 {value}")]
    InvalidMachineCount { name: String, value: String },

    #[error("总库存 (WIP + FGI) 为零，无法计算库存周转: wip={wip}, fgi={fgi}")]
    ZeroTotalInventory { wip: f64, fgi: f64 },
}

impl FormulaError {
    /// 错误大类
    pub fn kind(&self) -> ErrorKind {
        match self {
            FormulaError::InvalidType { .. } => ErrorKind::Type,
            FormulaError::Negative { .. }
            | FormulaError::Zero { .. }
            | FormulaError::NotFinite { .. }
            | FormulaError::InvalidMachineCount { .. }
            | FormulaError::ZeroTotalInventory { .. } => ErrorKind::Range,
        }
    }

    /// 出错的参数名（组合除数错误返回 None）
    pub fn parameter(&self) -> Option<&str> {
        match self {
            FormulaError::InvalidType { name, .. }
            | FormulaError::Negative { name, .. }
            | FormulaError::Zero { name }
            | FormulaError::NotFinite { name, .. }
            | FormulaError::InvalidMachineCount { name, .. } => Some(name),
            FormulaError::ZeroTotalInventory { .. } => None,
        }
    }
}

/// Result 类型别名
pub type FormulaResult<T> = Result<T, FormulaError>;
