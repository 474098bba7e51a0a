// ==========================================
// Little 定律公式库 - 输入校验器
// ==========================================
// 职责: 所有公式参数进入运算前的类型与范围校验
// 红线: 校验必须先于运算完成，失败即中止，不做默认值替换
// ==========================================

use crate::domain::Operand;
use crate::engine::error::{FormulaError, FormulaResult};

/// 校验数量型参数
///
/// # 参数
/// - value: 调用方传入的原始值
/// - name: 参数名（用于错误消息）
/// - allow_zero: 为 false 时拒绝零值（除数场景）
///
/// # 返回
/// - Ok(f64): 校验通过，原值以 f64 返回
/// - Err(InvalidType): 非数值
/// - Err(NotFinite): NaN 或无穷
/// - Err(Negative): 负数
/// - Err(Zero): allow_zero=false 且值为零
pub fn validate(value: &Operand, name: &str, allow_zero: bool) -> FormulaResult<f64> {
    let Some(v) = value.as_f64() else {
        return Err(FormulaError::InvalidType {
            name: name.to_string(),
            actual: value.type_name().to_string(),
        });
    };

    if !v.is_finite() {
        return Err(FormulaError::NotFinite {
            name: name.to_string(),
            value: v,
        });
    }

    if v < 0.0 {
        return Err(FormulaError::Negative {
            name: name.to_string(),
            value: v,
        });
    }

    if !allow_zero && v == 0.0 {
        return Err(FormulaError::Zero {
            name: name.to_string(),
        });
    }

    Ok(v)
}

/// 校验机台数
///
/// 仅接受 >= 1 的整数；浮点数（包括 3.0）、非数值一律视为范围错误
pub fn validate_machine_count(value: &Operand, name: &str) -> FormulaResult<u64> {
    match value {
        Operand::Int(n) if *n >= 1 => Ok(*n as u64),
        Operand::UInt(n) if *n >= 1 => Ok(*n),
        other => Err(FormulaError::InvalidMachineCount {
            name: name.to_string(),
            value: other.to_string(),
        }),
    }
}
