// ==========================================
// Little 定律公式库 - 工作站利用率结果
// ==========================================
// 公式: station_wip = TH * CT; utilization = station_wip / machines
// 红线: utilization > 1.0 是合法输出（工作站不稳定），不是错误
// ==========================================

use serde::{Deserialize, Serialize};

/// 利用率超过该值即视为工作站不稳定
pub const UNSTABLE_UTILIZATION: f64 = 1.0;

// ==========================================
// UtilizationResult - 工作站利用率计算结果
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UtilizationResult {
    pub station_wip: f64,     // 工作站期望在制品 (TH * CT)
    pub utilization: f64,     // 单机利用率 (比例)
    pub utilization_pct: f64, // 单机利用率 (百分比)
}

impl UtilizationResult {
    /// 由工作站在制品与机台数构造结果
    pub fn from_station_wip(station_wip: f64, number_of_machines: u64) -> Self {
        let utilization = station_wip / number_of_machines as f64;
        Self {
            station_wip,
            utilization,
            utilization_pct: utilization * 100.0,
        }
    }

    /// 是否不稳定（利用率 > 1.0，到达速率超过产能）
    pub fn is_unstable(&self) -> bool {
        self.exceeds(UNSTABLE_UTILIZATION)
    }

    /// 利用率是否超过给定阈值
    pub fn exceeds(&self, threshold: f64) -> bool {
        self.utilization > threshold
    }
}
