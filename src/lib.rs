// ==========================================
// Little 定律工厂运营公式库 - 核心库
// ==========================================
// 公式: WIP = TH × CT 及其推论
//       (周期时间 / 产出率 / 工作站利用率 / 库存周转 / 计划库存 / 财务周期时间)
// 红线: 所有输入先校验后运算，输出必须具有物理意义
// ==========================================

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 输入操作数与结果类型
pub mod domain;

// 引擎层 - 校验器与公式
pub mod engine;

// 配置层 - 运行配置
pub mod config;

// API 层 - JSON 请求/响应
pub mod api;

// 日志系统
pub mod logging;

// ==========================================
// 重导出核心类型
// ==========================================

// 领域类型
pub use domain::{Operand, UtilizationResult};

// 引擎
pub use engine::{
    calculate_cycle_time, calculate_inventory_turns, calculate_planned_inventory,
    calculate_station_utilization, calculate_throughput, calculate_wip, calculate_wip_turns,
    financial_cycle_time, ErrorKind, FormulaError, FormulaResult,
};

// API
pub use api::{ApiError, ApiResult, FormulaApi, FormulaRequest, FormulaResponse};

// 配置
pub use config::FormulaConfig;

// ==========================================
// 常量定义
// ==========================================

// 库版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 库名称
pub const APP_NAME: &str = "Little 定律工厂运营公式库";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
