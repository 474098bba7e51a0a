// ==========================================
// Little 定律公式库 - API 层错误类型
// ==========================================
// 职责: 定义 API 层错误类型，将引擎校验错误转换为调用方可展示的错误负载
// ==========================================

use crate::engine::error::{ErrorKind, FormulaError};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// API 层错误类型
#[derive(Error, Debug)]
pub enum ApiError {
    // ==========================================
    // 公式校验错误（TYPE_ERROR / RANGE_ERROR）
    // ==========================================
    #[error(transparent)]
    Formula(#[from] FormulaError),

    // ==========================================
    // 请求错误
    // ==========================================
    #[error("无效请求: {0}")]
    InvalidRequest(String),

    // ==========================================
    // 结果错误
    // ==========================================
    #[error("操作 {operation} 的计算结果溢出为非有限数值")]
    NonFiniteResult { operation: String },
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::InvalidRequest(err.to_string())
    }
}

impl ApiError {
    /// 公式错误大类（请求错误返回 None）
    pub fn kind(&self) -> Option<ErrorKind> {
        match self {
            ApiError::Formula(err) => Some(err.kind()),
            ApiError::InvalidRequest(_) | ApiError::NonFiniteResult { .. } => None,
        }
    }

    /// 转换为错误负载
    pub fn to_payload(&self) -> ErrorPayload {
        let error_kind = match self {
            ApiError::Formula(err) => err.kind().to_string(),
            ApiError::InvalidRequest(_) => "INVALID_REQUEST".to_string(),
            ApiError::NonFiniteResult { .. } => "NON_FINITE_RESULT".to_string(),
        };
        let parameter = match self {
            ApiError::Formula(err) => err.parameter().map(str::to_string),
            ApiError::InvalidRequest(_) | ApiError::NonFiniteResult { .. } => None,
        };

        ErrorPayload {
            error_kind,
            parameter,
            message: self.to_string(),
        }
    }
}

/// Result 类型别名
pub type ApiResult<T> = Result<T, ApiError>;

// ==========================================
// 错误负载
// ==========================================

/// 错误负载（序列化后返回给调用方）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorPayload {
    /// TYPE_ERROR / RANGE_ERROR / INVALID_REQUEST / NON_FINITE_RESULT
    pub error_kind: String,
    /// 出错参数名（可选）
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parameter: Option<String>,
    /// 错误消息
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_formula_error_conversion() {
        let formula_err = FormulaError::Zero {
            name: "throughput".to_string(),
        };
        let api_err: ApiError = formula_err.into();

        assert_eq!(api_err.kind(), Some(ErrorKind::Range));
        let payload = api_err.to_payload();
        assert_eq!(payload.error_kind, "RANGE_ERROR");
        assert_eq!(payload.parameter.as_deref(), Some("throughput"));
        assert!(payload.message.contains("throughput"));
    }

    #[test]
    fn test_json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let api_err: ApiError = json_err.into();

        assert_eq!(api_err.kind(), None);
        let payload = api_err.to_payload();
        assert_eq!(payload.error_kind, "INVALID_REQUEST");
        assert!(payload.parameter.is_none());
    }
}
