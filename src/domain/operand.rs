// ==========================================
// Little 定律公式库 - 输入操作数模型
// ==========================================
// 职责: 承载调用方传入的"任意值"，在校验前保留其原始形态
// 来源: Rust 原生数值 / 字符串 / JSON 值 / 命令行参数
// ==========================================

use serde::Deserialize;
use serde_json::Value;
use std::fmt;

// ==========================================
// Operand - 校验前的输入值
// ==========================================
// 红线: 非数值类型必须保留观测到的类型名，供 TypeKind 错误消息使用
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(from = "Value")]
pub enum Operand {
    Int(i64),           // 整数
    UInt(u64),          // 超出 i64 范围的无符号整数
    Float(f64),         // 浮点数
    NonNumeric(String), // 非数值（保存类型名）
}

impl Operand {
    /// 缺失值（JSON 字段缺失、位置参数不足）
    pub fn missing() -> Self {
        Operand::NonNumeric("missing".to_string())
    }

    /// 观测到的类型名
    pub fn type_name(&self) -> &str {
        match self {
            Operand::Int(_) | Operand::UInt(_) => "int",
            Operand::Float(_) => "float",
            Operand::NonNumeric(t) => t,
        }
    }

    /// 数值形式（非数值返回 None）
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Operand::Int(v) => Some(*v as f64),
            Operand::UInt(v) => Some(*v as f64),
            Operand::Float(v) => Some(*v),
            Operand::NonNumeric(_) => None,
        }
    }

    /// 解析命令行参数
    ///
    /// 规则（顺序执行，命中即返回）:
    /// 1) 可解析为 i64 → Int
    /// 2) 可解析为 u64 → UInt
    /// 3) 可解析为 f64 → Float
    /// 4) 其他 → NonNumeric("string")
    pub fn from_cli_arg(raw: &str) -> Self {
        let s = raw.trim();
        if let Ok(v) = s.parse::<i64>() {
            return Operand::Int(v);
        }
        if let Ok(v) = s.parse::<u64>() {
            return Operand::UInt(v);
        }
        if let Ok(v) = s.parse::<f64>() {
            return Operand::Float(v);
        }
        Operand::NonNumeric("string".to_string())
    }
}

impl Default for Operand {
    fn default() -> Self {
        Operand::missing()
    }
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operand::Int(v) => write!(f, "{}", v),
            Operand::UInt(v) => write!(f, "{}", v),
            // 保留小数点，区分 3.0 与 3
            Operand::Float(v) => write!(f, "{:?}", v),
            Operand::NonNumeric(t) => write!(f, "<{}>", t),
        }
    }
}

// ==========================================
// From 转换
// ==========================================

macro_rules! impl_from_int {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Operand {
                fn from(v: $t) -> Self {
                    Operand::Int(i64::from(v))
                }
            }
        )*
    };
}

impl_from_int!(i8, i16, i32, i64, u8, u16, u32);

impl From<u64> for Operand {
    fn from(v: u64) -> Self {
        i64::try_from(v)
            .map(Operand::Int)
            .unwrap_or(Operand::UInt(v))
    }
}

impl From<usize> for Operand {
    fn from(v: usize) -> Self {
        Operand::from(v as u64)
    }
}

impl From<f32> for Operand {
    fn from(v: f32) -> Self {
        Operand::Float(f64::from(v))
    }
}

impl From<f64> for Operand {
    fn from(v: f64) -> Self {
        Operand::Float(v)
    }
}

impl From<bool> for Operand {
    fn from(_: bool) -> Self {
        Operand::NonNumeric("bool".to_string())
    }
}

impl From<&str> for Operand {
    fn from(_: &str) -> Self {
        Operand::NonNumeric("string".to_string())
    }
}

impl From<String> for Operand {
    fn from(_: String) -> Self {
        Operand::NonNumeric("string".to_string())
    }
}

impl<T: Into<Operand>> From<Option<T>> for Operand {
    fn from(v: Option<T>) -> Self {
        match v {
            Some(inner) => inner.into(),
            None => Operand::missing(),
        }
    }
}

impl From<&Value> for Operand {
    fn from(v: &Value) -> Self {
        match v {
            Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Operand::Int(i)
                } else if let Some(u) = n.as_u64() {
                    Operand::UInt(u)
                } else {
                    Operand::Float(n.as_f64().unwrap_or(f64::NAN))
                }
            }
            Value::Null => Operand::NonNumeric("null".to_string()),
            Value::Bool(_) => Operand::NonNumeric("bool".to_string()),
            Value::String(_) => Operand::NonNumeric("string".to_string()),
            Value::Array(_) => Operand::NonNumeric("array".to_string()),
            Value::Object(_) => Operand::NonNumeric("object".to_string()),
        }
    }
}

impl From<Value> for Operand {
    fn from(v: Value) -> Self {
        Operand::from(&v)
    }
}

impl From<&Operand> for Operand {
    fn from(v: &Operand) -> Self {
        v.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_primitives() {
        assert_eq!(Operand::from(5), Operand::Int(5));
        assert_eq!(Operand::from(5u32), Operand::Int(5));
        assert_eq!(Operand::from(2.5), Operand::Float(2.5));
        assert_eq!(Operand::from(u64::MAX), Operand::UInt(u64::MAX));
        assert_eq!(Operand::from(7u64), Operand::Int(7));
        assert_eq!(Operand::from("5"), Operand::NonNumeric("string".to_string()));
        assert_eq!(Operand::from(true), Operand::NonNumeric("bool".to_string()));
        assert_eq!(Operand::from(None::<f64>), Operand::missing());
        assert_eq!(Operand::from(Some(3)), Operand::Int(3));
    }

    #[test]
    fn test_from_json() {
        assert_eq!(Operand::from(json!(10)), Operand::Int(10));
        assert_eq!(Operand::from(json!(2.5)), Operand::Float(2.5));
        assert_eq!(Operand::from(json!(u64::MAX)), Operand::UInt(u64::MAX));
        assert_eq!(Operand::from(json!(null)).type_name(), "null");
        assert_eq!(Operand::from(json!({"a": 1})).type_name(), "object");
        assert_eq!(Operand::from(json!([1, 2])).type_name(), "array");
        assert_eq!(Operand::from(json!("10")).type_name(), "string");
    }

    #[test]
    fn test_deserialize_any_value() {
        let op: Operand = serde_json::from_str("\"abc\"").unwrap();
        assert_eq!(op.as_f64(), None);
        let op: Operand = serde_json::from_str("7").unwrap();
        assert_eq!(op, Operand::Int(7));
    }

    #[test]
    fn test_from_cli_arg() {
        assert_eq!(Operand::from_cli_arg("12"), Operand::Int(12));
        assert_eq!(Operand::from_cli_arg(" -3 "), Operand::Int(-3));
        assert_eq!(Operand::from_cli_arg("2.5"), Operand::Float(2.5));
        assert_eq!(
            Operand::from_cli_arg("18446744073709551615"),
            Operand::UInt(u64::MAX)
        );
        assert_eq!(Operand::from_cli_arg("abc").type_name(), "string");
    }

    #[test]
    fn test_display() {
        assert_eq!(Operand::Int(3).to_string(), "3");
        assert_eq!(Operand::Float(2.5).to_string(), "2.5");
        assert_eq!(Operand::Float(3.0).to_string(), "3.0");
        assert_eq!(Operand::missing().to_string(), "<missing>");
    }
}
