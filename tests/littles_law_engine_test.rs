// ==========================================
// Little 定律公式引擎集成测试
// ==========================================
// 测试目标: 验证 7 个公式的计算结果与校验行为
// 覆盖范围: 基本关系 / 往返一致性 / 工作站利用率 / 库存周转 / 财务周期时间
// ==========================================


use littles_law::engine::{
    calculate_cycle_time, calculate_inventory_turns, calculate_planned_inventory,
    calculate_station_utilization, calculate_throughput, calculate_wip, calculate_wip_turns,
    financial_cycle_time, ErrorKind, FormulaError,
};
use littles_law::{logging, Operand, UtilizationResult};
use test_helpers::{assert_close, positive_grid, quantity_grid};

// ==========================================
// 基本关系: WIP = TH × CT
// ==========================================

#[test]
fn test_wip_equals_throughput_times_cycle_time() {
    logging::init_test();

    for th in quantity_grid() {
        for ct in quantity_grid() {
            let wip = calculate_wip(th, ct).unwrap();
            assert_eq!(wip, th * ct, "TH={} CT={}", th, ct);
        }
    }
}

#[test]
fn test_cycle_time_round_trip() {
    for th in positive_grid() {
        for ct in positive_grid() {
            let wip = calculate_wip(th, ct).unwrap();
            let back = calculate_cycle_time(wip, th).unwrap();
            assert_close(back, ct);
        }
    }
}

#[test]
fn test_throughput_round_trip() {
    for th in positive_grid() {
        for ct in positive_grid() {
            let wip = calculate_wip(th, ct).unwrap();
            let back = calculate_throughput(wip, ct).unwrap();
            assert_close(back, th);
        }
    }
}

#[test]
fn test_integer_inputs() {
    assert_eq!(calculate_wip(4, 3).unwrap(), 12.0);
    assert_eq!(calculate_cycle_time(12, 4).unwrap(), 3.0);
    assert_eq!(calculate_throughput(12u32, 3i64).unwrap(), 4.0);
}

// ==========================================
// 周期时间校验
// ==========================================

#[test]
fn test_cycle_time_zero_throughput_is_range_error() {
    let err = calculate_cycle_time(10, 0).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Range);
    assert_eq!(
        err,
        FormulaError::Zero {
            name: "throughput".to_string()
        }
    );
}

#[test]
fn test_cycle_time_negative_throughput_is_range_error() {
    let err = calculate_cycle_time(10, -1).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Range);
    assert!(err.to_string().contains("throughput"));
    assert!(err.to_string().contains("-1"));
}

#[test]
fn test_cycle_time_string_wip_is_type_error() {
    let err = calculate_cycle_time("5", 2).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Type);
    assert!(err.to_string().contains("wip"));
    assert!(err.to_string().contains("string"));
}

#[test]
fn test_throughput_zero_cycle_time_is_range_error() {
    let err = calculate_throughput(10, 0.0).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Range);
    assert_eq!(err.parameter(), Some("cycle_time"));
}

#[test]
fn test_missing_value_is_type_error() {
    let err = calculate_wip(None::<f64>, 2).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Type);
    assert!(err.to_string().contains("missing"));
}

// ==========================================
// 工作站利用率
// ==========================================

#[test]
fn test_station_utilization_above_one_is_not_error() {
    logging::init_test();

    let result = calculate_station_utilization(10, 2, 5).unwrap();
    assert_eq!(
        result,
        UtilizationResult {
            station_wip: 20.0,
            utilization: 4.0,
            utilization_pct: 400.0,
        }
    );
    assert!(result.is_unstable());
}

#[test]
fn test_station_utilization_typical_station() {
    let result = calculate_station_utilization(0.5, 3.0, 2).unwrap();
    assert_close(result.station_wip, 1.5);
    assert_close(result.utilization, 0.75);
    assert_close(result.utilization_pct, 75.0);
    assert!(!result.is_unstable());
}

#[test]
fn test_station_utilization_zero_machines_is_range_error() {
    let err = calculate_station_utilization(10, 2, 0).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Range);
    assert_eq!(err.parameter(), Some("number_of_machines"));
}

#[test]
fn test_station_utilization_fractional_machines_is_range_error() {
    let err = calculate_station_utilization(10, 2, 2.5).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Range);
    assert!(err.to_string().contains("2.5"));
}

#[test]
fn test_station_utilization_accepts_machine_count_above_i64_range() {
    let result = calculate_station_utilization(1, 1, u64::MAX).unwrap();
    assert_eq!(result.station_wip, 1.0);
    assert!(result.utilization > 0.0 && result.utilization < 1e-18);
}

#[test]
fn test_station_utilization_whole_float_machines_keeps_decimal_in_message() {
    let err = calculate_station_utilization(10, 2, 3.0).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Range);
    assert!(err.to_string().contains("3.0"));
}

#[test]
fn test_station_utilization_non_numeric_machines_is_range_error() {
    let err = calculate_station_utilization(10, 2, "3").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Range);
}

// ==========================================
// 库存周转 / 计划库存
// ==========================================

#[test]
fn test_inventory_turns_zero_total_is_range_error() {
    let err = calculate_inventory_turns(5, 0, 0).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Range);
    assert!(err.to_string().contains("WIP + FGI"));
}

#[test]
fn test_inventory_turns_with_fgi() {
    assert_eq!(calculate_inventory_turns(5, 3, 2).unwrap(), 1.0);
    assert_eq!(calculate_wip_turns(5, 2.5).unwrap(), 2.0);
}

#[test]
fn test_planned_inventory() {
    assert_eq!(calculate_planned_inventory(10, 3).unwrap(), 30.0);
    assert_eq!(calculate_planned_inventory(10, 0).unwrap(), 0.0);

    let err = calculate_planned_inventory(10, -3).unwrap_err();
    assert_eq!(err.parameter(), Some("planned_days"));
}

// ==========================================
// 财务周期时间
// ==========================================

#[test]
fn test_financial_cycle_time() {
    assert_eq!(financial_cycle_time(1000, 500).unwrap(), 2.0);

    let err = financial_cycle_time(1000, 0).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Range);
    assert_eq!(err.parameter(), Some("cost_of_goods_sold"));
}

// ==========================================
// 动态值输入
// ==========================================

#[test]
fn test_json_values_as_operands() {
    use serde_json::json;

    assert_eq!(calculate_wip(json!(2), json!(1.5)).unwrap(), 3.0);

    let err = calculate_wip(json!({"value": 2}), json!(1)).unwrap_err();
    assert_eq!(
        err,
        FormulaError::InvalidType {
            name: "throughput".to_string(),
            actual: "object".to_string()
        }
    );
}

#[test]
fn test_non_finite_is_range_error() {
    let err = calculate_wip(Operand::Float(f64::NAN), 1).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Range);

    let err = calculate_cycle_time(1, f64::INFINITY).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Range);
}
