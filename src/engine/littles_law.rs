// ==========================================
// Little 定律公式库 - 公式引擎
// ==========================================
// 依据: Little 定律 WIP = TH × CT 及其工厂运营推论
// 红线: 每个参数先经 validator 校验，除数参数禁止为零
// ==========================================
// 职责: 7 个无状态公式
// 输入: 任意可转换为 Operand 的值
// 输出: f64 或 UtilizationResult
// ==========================================

use crate::domain::{Operand, UtilizationResult};
use crate::engine::error::{FormulaError, FormulaResult};
use crate::engine::validator::{validate, validate_machine_count};
use tracing::{debug, warn};

// ==========================================
// 基本关系: WIP / CT / TH
// ==========================================

/// 计算期望在制品 (WIP)
///
/// 公式: WIP = TH × CT
pub fn calculate_wip(
    throughput: impl Into<Operand>,
    cycle_time: impl Into<Operand>,
) -> FormulaResult<f64> {
    let throughput = validate(&throughput.into(), "throughput", true)?;
    let cycle_time = validate(&cycle_time.into(), "cycle_time", true)?;

    let wip = throughput * cycle_time;
    debug!(throughput, cycle_time, wip, "calculate_wip");
    Ok(wip)
}

/// 计算周期时间 (CT)
///
/// 公式: CT = WIP / TH
///
/// throughput 为除数，不能为零
pub fn calculate_cycle_time(
    wip: impl Into<Operand>,
    throughput: impl Into<Operand>,
) -> FormulaResult<f64> {
    let wip = validate(&wip.into(), "wip", true)?;
    let throughput = validate(&throughput.into(), "throughput", false)?;

    let cycle_time = wip / throughput;
    debug!(wip, throughput, cycle_time, "calculate_cycle_time");
    Ok(cycle_time)
}

/// 计算产出率 (TH)
///
/// 公式: TH = WIP / CT
///
/// cycle_time 为除数，不能为零
pub fn calculate_throughput(
    wip: impl Into<Operand>,
    cycle_time: impl Into<Operand>,
) -> FormulaResult<f64> {
    let wip = validate(&wip.into(), "wip", true)?;
    let cycle_time = validate(&cycle_time.into(), "cycle_time", false)?;

    let throughput = wip / cycle_time;
    debug!(wip, cycle_time, throughput, "calculate_throughput");
    Ok(throughput)
}

// ==========================================
// 工作站利用率
// ==========================================

/// 计算工作站利用率
///
/// 步骤:
/// 1) station_wip = TH × CT
/// 2) utilization = station_wip / number_of_machines
///
/// # 返回
/// - UtilizationResult { station_wip, utilization, utilization_pct }
///
/// # 注意
/// - utilization > 1.0 表示工作站不稳定，照常返回，仅记录 warn 日志
/// - number_of_machines 必须为 >= 1 的整数，否则返回范围错误
pub fn calculate_station_utilization(
    station_throughput: impl Into<Operand>,
    station_cycle_time: impl Into<Operand>,
    number_of_machines: impl Into<Operand>,
) -> FormulaResult<UtilizationResult> {
    let station_throughput = validate(&station_throughput.into(), "station_throughput", true)?;
    let station_cycle_time = validate(&station_cycle_time.into(), "station_cycle_time", true)?;
    let number_of_machines =
        validate_machine_count(&number_of_machines.into(), "number_of_machines")?;

    let station_wip = station_throughput * station_cycle_time;
    let result = UtilizationResult::from_station_wip(station_wip, number_of_machines);

    if result.is_unstable() {
        warn!(
            station_throughput,
            station_cycle_time,
            number_of_machines,
            utilization = result.utilization,
            "工作站利用率超过 100%，工作站不稳定"
        );
    }

    debug!(
        station_wip,
        number_of_machines,
        utilization = result.utilization,
        "calculate_station_utilization"
    );
    Ok(result)
}

// ==========================================
// 库存相关
// ==========================================

/// 计算库存周转次数
///
/// 公式: Turns = TH / (WIP + FGI)
///
/// 三个参数单独允许为零，但 WIP + FGI 求和后不能为零
pub fn calculate_inventory_turns(
    throughput: impl Into<Operand>,
    wip: impl Into<Operand>,
    fgi: impl Into<Operand>,
) -> FormulaResult<f64> {
    let throughput = validate(&throughput.into(), "throughput", true)?;
    let wip = validate(&wip.into(), "wip", true)?;
    let fgi = validate(&fgi.into(), "fgi", true)?;

    let total_inventory = wip + fgi;
    if total_inventory == 0.0 {
        return Err(FormulaError::ZeroTotalInventory { wip, fgi });
    }

    let turns = throughput / total_inventory;
    debug!(throughput, wip, fgi, turns, "calculate_inventory_turns");
    Ok(turns)
}

/// 计算库存周转次数（不含成品库存，FGI = 0）
pub fn calculate_wip_turns(
    throughput: impl Into<Operand>,
    wip: impl Into<Operand>,
) -> FormulaResult<f64> {
    calculate_inventory_turns(throughput, wip, 0)
}

/// 计算计划成品库存 (FGI)
///
/// 公式: FGI = n × TH（n 为计划覆盖天数）
pub fn calculate_planned_inventory(
    throughput: impl Into<Operand>,
    planned_days: impl Into<Operand>,
) -> FormulaResult<f64> {
    let throughput = validate(&throughput.into(), "throughput", true)?;
    let planned_days = validate(&planned_days.into(), "planned_days", true)?;

    let fgi = planned_days * throughput;
    debug!(throughput, planned_days, fgi, "calculate_planned_inventory");
    Ok(fgi)
}

// ==========================================
// 财务口径
// ==========================================

/// 以财务单位计算周期时间
///
/// 公式: CT = WIP($) / COGS($)
pub fn financial_cycle_time(
    wip_value: impl Into<Operand>,
    cost_of_goods_sold: impl Into<Operand>,
) -> FormulaResult<f64> {
    let wip_value = validate(&wip_value.into(), "wip_value", true)?;
    let cost_of_goods_sold = validate(&cost_of_goods_sold.into(), "cost_of_goods_sold", false)?;

    let cycle_time = wip_value / cost_of_goods_sold;
    debug!(wip_value, cost_of_goods_sold, cycle_time, "financial_cycle_time");
    Ok(cycle_time)
}
