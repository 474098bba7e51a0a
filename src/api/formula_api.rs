// ==========================================
// Little 定律公式库 - 公式 API
// ==========================================
// 职责: JSON 请求 → Operand → 引擎公式 → JSON 响应
// 红线: 引擎错误原样保留类别（TYPE_ERROR / RANGE_ERROR），不做默认值替换
// ==========================================

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::VecDeque;
use tracing::instrument;

use crate::api::error::{ApiError, ApiResult, ErrorPayload};
use crate::config::FormulaConfig;
use crate::domain::{Operand, UtilizationResult};
use crate::engine;

/// 支持的操作及其位置参数（fgi 可省略）
pub const OPERATIONS: [(&str, &str); 7] = [
    ("wip", "throughput cycle_time"),
    ("cycle_time", "wip throughput"),
    ("throughput", "wip cycle_time"),
    (
        "station_utilization",
        "station_throughput station_cycle_time number_of_machines",
    ),
    ("inventory_turns", "throughput wip [fgi]"),
    ("planned_inventory", "throughput planned_days"),
    ("financial_cycle_time", "wip_value cost_of_goods_sold"),
];

fn default_fgi() -> Operand {
    Operand::Int(0)
}

fn take(args: &mut VecDeque<Operand>) -> Operand {
    args.pop_front().unwrap_or_else(Operand::missing)
}

// ==========================================
// FormulaRequest - 计算请求
// ==========================================
// 序列化格式: {"operation": "<snake_case>", <参数>...}
// 缺失的必填参数以 missing 进入校验器（TYPE_ERROR）
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "operation", rename_all = "snake_case")]
pub enum FormulaRequest {
    Wip {
        #[serde(default)]
        throughput: Operand,
        #[serde(default)]
        cycle_time: Operand,
    },
    CycleTime {
        #[serde(default)]
        wip: Operand,
        #[serde(default)]
        throughput: Operand,
    },
    Throughput {
        #[serde(default)]
        wip: Operand,
        #[serde(default)]
        cycle_time: Operand,
    },
    StationUtilization {
        #[serde(default)]
        station_throughput: Operand,
        #[serde(default)]
        station_cycle_time: Operand,
        #[serde(default)]
        number_of_machines: Operand,
    },
    InventoryTurns {
        #[serde(default)]
        throughput: Operand,
        #[serde(default)]
        wip: Operand,
        #[serde(default = "default_fgi")]
        fgi: Operand,
    },
    PlannedInventory {
        #[serde(default)]
        throughput: Operand,
        #[serde(default)]
        planned_days: Operand,
    },
    FinancialCycleTime {
        #[serde(default)]
        wip_value: Operand,
        #[serde(default)]
        cost_of_goods_sold: Operand,
    },
}

impl FormulaRequest {
    /// 操作名（与 JSON 中的 operation 字段一致）
    pub fn operation_name(&self) -> &'static str {
        match self {
            FormulaRequest::Wip { .. } => "wip",
            FormulaRequest::CycleTime { .. } => "cycle_time",
            FormulaRequest::Throughput { .. } => "throughput",
            FormulaRequest::StationUtilization { .. } => "station_utilization",
            FormulaRequest::InventoryTurns { .. } => "inventory_turns",
            FormulaRequest::PlannedInventory { .. } => "planned_inventory",
            FormulaRequest::FinancialCycleTime { .. } => "financial_cycle_time",
        }
    }

    /// 由操作名与位置参数构造请求（命令行使用）
    ///
    /// # 返回
    /// - Err(InvalidRequest): 未知操作或参数过多
    /// - 参数不足时，缺失参数为 missing，由校验器报告 TYPE_ERROR
    pub fn from_positional(operation: &str, args: Vec<Operand>) -> ApiResult<Self> {
        let max_args = match operation {
            "station_utilization" | "inventory_turns" => 3,
            "wip" | "cycle_time" | "throughput" | "planned_inventory" | "financial_cycle_time" => 2,
            other => {
                return Err(ApiError::InvalidRequest(format!("未知的计算操作: {}", other)));
            }
        };
        if args.len() > max_args {
            return Err(ApiError::InvalidRequest(format!(
                "操作 {} 最多接受 {} 个参数，实际 {} 个",
                operation,
                max_args,
                args.len()
            )));
        }

        let mut args: VecDeque<Operand> = args.into();
        let request = match operation {
            "wip" => FormulaRequest::Wip {
                throughput: take(&mut args),
                cycle_time: take(&mut args),
            },
            "cycle_time" => FormulaRequest::CycleTime {
                wip: take(&mut args),
                throughput: take(&mut args),
            },
            "throughput" => FormulaRequest::Throughput {
                wip: take(&mut args),
                cycle_time: take(&mut args),
            },
            "station_utilization" => FormulaRequest::StationUtilization {
                station_throughput: take(&mut args),
                station_cycle_time: take(&mut args),
                number_of_machines: take(&mut args),
            },
            "inventory_turns" => FormulaRequest::InventoryTurns {
                throughput: take(&mut args),
                wip: take(&mut args),
                fgi: args.pop_front().unwrap_or_else(default_fgi),
            },
            "planned_inventory" => FormulaRequest::PlannedInventory {
                throughput: take(&mut args),
                planned_days: take(&mut args),
            },
            _ => FormulaRequest::FinancialCycleTime {
                wip_value: take(&mut args),
                cost_of_goods_sold: take(&mut args),
            },
        };
        Ok(request)
    }
}

// ==========================================
// FormulaResponse - 计算响应
// ==========================================

/// 计算结果（标量或利用率结构）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FormulaOutput {
    Scalar(f64),
    Utilization(UtilizationResult),
}

impl FormulaOutput {
    /// 结果是否全部为有限数值
    pub fn is_finite(&self) -> bool {
        match self {
            FormulaOutput::Scalar(v) => v.is_finite(),
            FormulaOutput::Utilization(u) => {
                u.station_wip.is_finite() && u.utilization.is_finite() && u.utilization_pct.is_finite()
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormulaResponse {
    pub operation: String,
    pub result: FormulaOutput,
    #[serde(default)]
    pub warnings: Vec<String>,
}

/// 批量计算中单项的结果
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum BatchOutcome {
    Success(FormulaResponse),
    Failure { error: ErrorPayload },
}

impl From<ApiResult<FormulaResponse>> for BatchOutcome {
    fn from(result: ApiResult<FormulaResponse>) -> Self {
        match result {
            Ok(response) => BatchOutcome::Success(response),
            Err(err) => BatchOutcome::Failure {
                error: err.to_payload(),
            },
        }
    }
}

// ==========================================
// FormulaApi - 公式 API
// ==========================================
pub struct FormulaApi {
    config: FormulaConfig,
}

impl FormulaApi {
    /// 创建新的 FormulaApi 实例
    pub fn new(config: FormulaConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &FormulaConfig {
        &self.config
    }

    /// 执行单个计算请求
    #[instrument(skip(self, request), fields(operation = request.operation_name()))]
    pub fn evaluate(&self, request: &FormulaRequest) -> ApiResult<FormulaResponse> {
        let mut warnings = Vec::new();

        let result = match request {
            FormulaRequest::Wip {
                throughput,
                cycle_time,
            } => FormulaOutput::Scalar(engine::calculate_wip(throughput, cycle_time)?),
            FormulaRequest::CycleTime { wip, throughput } => {
                FormulaOutput::Scalar(engine::calculate_cycle_time(wip, throughput)?)
            }
            FormulaRequest::Throughput { wip, cycle_time } => {
                FormulaOutput::Scalar(engine::calculate_throughput(wip, cycle_time)?)
            }
            FormulaRequest::StationUtilization {
                station_throughput,
                station_cycle_time,
                number_of_machines,
            } => {
                let utilization = engine::calculate_station_utilization(
                    station_throughput,
                    station_cycle_time,
                    number_of_machines,
                )?;
                let threshold = self.config.utilization_warn_threshold;
                if utilization.exceeds(threshold) {
                    warnings.push(format!(
                        "工作站利用率 {:.1}% 超过告警阈值 {:.1}%",
                        utilization.utilization_pct,
                        threshold * 100.0
                    ));
                }
                FormulaOutput::Utilization(utilization)
            }
            FormulaRequest::InventoryTurns {
                throughput,
                wip,
                fgi,
            } => FormulaOutput::Scalar(engine::calculate_inventory_turns(throughput, wip, fgi)?),
            FormulaRequest::PlannedInventory {
                throughput,
                planned_days,
            } => FormulaOutput::Scalar(engine::calculate_planned_inventory(
                throughput,
                planned_days,
            )?),
            FormulaRequest::FinancialCycleTime {
                wip_value,
                cost_of_goods_sold,
            } => FormulaOutput::Scalar(engine::financial_cycle_time(
                wip_value,
                cost_of_goods_sold,
            )?),
        };

        // 校验通过的输入仍可能溢出为无穷，JSON 无法表示
        if !result.is_finite() {
            return Err(ApiError::NonFiniteResult {
                operation: request.operation_name().to_string(),
            });
        }

        Ok(FormulaResponse {
            operation: request.operation_name().to_string(),
            result,
            warnings,
        })
    }

    /// 批量执行（逐项独立计算，结果顺序与输入一致）
    pub fn evaluate_batch(&self, requests: &[FormulaRequest]) -> Vec<ApiResult<FormulaResponse>> {
        requests.iter().map(|r| self.evaluate(r)).collect()
    }

    /// 执行 JSON 请求
    ///
    /// # 输入
    /// - 单个请求对象 → 返回单个响应
    /// - 请求数组 → 返回逐项结果数组（单项失败不影响其他项）
    #[instrument(skip(self, raw), fields(len = raw.len()))]
    pub fn evaluate_json(&self, raw: &str) -> ApiResult<String> {
        let value: Value = serde_json::from_str(raw)?;

        let output = match value {
            Value::Array(items) => {
                let outcomes: Vec<BatchOutcome> = items
                    .into_iter()
                    .map(|item| {
                        BatchOutcome::from(
                            serde_json::from_value::<FormulaRequest>(item)
                                .map_err(ApiError::from)
                                .and_then(|request| self.evaluate(&request)),
                        )
                    })
                    .collect();
                self.to_json(&outcomes)?
            }
            other => {
                let request: FormulaRequest = serde_json::from_value(other)?;
                let response = self.evaluate(&request)?;
                self.to_json(&response)?
            }
        };
        Ok(output)
    }

    /// 按配置序列化为 JSON（格式化或紧凑）
    pub fn to_json<T: Serialize>(&self, value: &T) -> ApiResult<String> {
        let json = if self.config.pretty_output {
            serde_json::to_string_pretty(value)?
        } else {
            serde_json::to_string(value)?
        };
        Ok(json)
    }
}

impl Default for FormulaApi {
    fn default() -> Self {
        Self::new(FormulaConfig::default())
    }
}
