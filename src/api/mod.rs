// ==========================================
// Little 定律公式库 - API 层
// ==========================================
// 职责: 将外部输入（JSON / 命令行参数）转换为引擎调用，
//       将引擎错误转换为调用方可展示的错误负载
// ==========================================

pub mod error;
pub mod formula_api;

// 重导出核心类型
pub use error::{ApiError, ApiResult, ErrorPayload};
pub use formula_api::{
    BatchOutcome, FormulaApi, FormulaOutput, FormulaRequest, FormulaResponse, OPERATIONS,
};
