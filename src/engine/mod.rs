// ==========================================
// Little 定律公式库 - 引擎层
// ==========================================
// 职责: 校验器 + 公式，纯函数，无共享状态
// 红线: 校验完全先于运算，失败即原子中止
// ==========================================

pub mod error;
pub mod littles_law;
pub mod validator;

// 重导出核心函数与类型
pub use error::{ErrorKind, FormulaError, FormulaResult};
pub use littles_law::{
    calculate_cycle_time, calculate_inventory_turns, calculate_planned_inventory,
    calculate_station_utilization, calculate_throughput, calculate_wip, calculate_wip_turns,
    financial_cycle_time,
};
pub use validator::{validate, validate_machine_count};
