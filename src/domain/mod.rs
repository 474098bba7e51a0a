// ==========================================
// Little 定律公式库 - 领域层
// ==========================================
// 职责: 输入操作数与计算结果类型
// 红线: 领域对象只存活于单次调用，无状态、无持久化
// ==========================================

pub mod operand;
pub mod utilization;

// 重导出核心类型
pub use operand::Operand;
pub use utilization::{UtilizationResult, UNSTABLE_UTILIZATION};
