//! Result-row helpers
//!
//! 存储过程的列名在不同版本间并不统一（SessionId / PickSessionId / Id ...），
//! 这里提供按别名、忽略大小写的取值，以及宽松的整数转换。

use serde_json::Value;

use crate::application::error::ApplicationError;
use crate::application::ports::{ResultSet, Row};

/// 行取值扩展
pub trait RowExt {
    /// 按别名顺序查找第一个存在且非 null 的列（忽略大小写）
    fn lookup(&self, names: &[&str]) -> Option<&Value>;

    /// 必需的整数列；缺失或无法转换时报内部错误
    fn require_i64(&self, names: &[&str]) -> Result<i64, ApplicationError> {
        let value = self.lookup(names).ok_or_else(|| {
            ApplicationError::internal(format!("Procedure row is missing column {}", names[0]))
        })?;
        coerce_i64(value).ok_or_else(|| {
            ApplicationError::internal(format!(
                "Procedure column {} is not an integer: {}",
                names[0], value
            ))
        })
    }

    /// 可缺省的整数列；存在但无法转换时报内部错误
    fn i64_or(&self, names: &[&str], default: i64) -> Result<i64, ApplicationError> {
        match self.lookup(names) {
            None => Ok(default),
            Some(_) => self.require_i64(names),
        }
    }

    fn string_or(&self, names: &[&str], default: &str) -> String {
        self.lookup(names)
            .map(display_value)
            .unwrap_or_else(|| default.to_string())
    }

    /// 原样取值，缺失时为 null
    fn value_or_null(&self, names: &[&str]) -> Value {
        self.lookup(names).cloned().unwrap_or(Value::Null)
    }

    /// 文本列，null 与非字符串按缺失处理
    fn str_field(&self, names: &[&str]) -> Option<&str> {
        self.lookup(names).and_then(Value::as_str)
    }
}

impl RowExt for Row {
    fn lookup(&self, names: &[&str]) -> Option<&Value> {
        names.iter().find_map(|name| {
            self.iter()
                .find(|(key, value)| key.eq_ignore_ascii_case(name) && !value.is_null())
                .map(|(_, value)| value)
        })
    }
}

/// 数字、数字字符串、布尔值都可转为整数；浮点数向零截断
pub fn coerce_i64(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_u64().and_then(|u| i64::try_from(u).ok()))
            .or_else(|| n.as_f64().filter(|f| f.is_finite()).map(|f| f.trunc() as i64)),
        Value::String(s) => s.trim().parse().ok(),
        Value::Bool(b) => Some(i64::from(*b)),
        _ => None,
    }
}

fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// 结果集第一行
pub fn first_row(rows: ResultSet) -> Option<Row> {
    rows.into_iter().next()
}

/// 删除指定列（忽略大小写）
pub fn strip_column(mut row: Row, column: &str) -> Row {
    row.retain(|key, _| !key.eq_ignore_ascii_case(column));
    row
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn row(value: Value) -> Row {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn test_lookup_is_case_insensitive_and_ordered() {
        let r = row(json!({"pickSessionId": 4, "ID": 9}));
        assert_eq!(r.lookup(&["SessionId", "PickSessionId", "Id"]), Some(&json!(4)));
        assert_eq!(r.lookup(&["Id"]), Some(&json!(9)));
        assert_eq!(r.lookup(&["Missing"]), None);
    }

    #[test]
    fn test_lookup_skips_null_aliases() {
        let r = row(json!({"StartedAt": null, "CreatedAt": "2025-11-01T10:00:00"}));
        assert_eq!(
            r.value_or_null(&["StartedAt", "CreatedAt"]),
            json!("2025-11-01T10:00:00")
        );
        assert_eq!(r.value_or_null(&["StartTime"]), Value::Null);
    }

    #[test]
    fn test_integer_coercion() {
        assert_eq!(coerce_i64(&json!(12)), Some(12));
        assert_eq!(coerce_i64(&json!(" 12 ")), Some(12));
        assert_eq!(coerce_i64(&json!(3.9)), Some(3));
        assert_eq!(coerce_i64(&json!(true)), Some(1));
        assert_eq!(coerce_i64(&json!("abc")), None);
        assert_eq!(coerce_i64(&json!([1])), None);
    }

    #[test]
    fn test_require_and_default_integers() {
        let r = row(json!({"Qty": "2", "ScanId": "x"}));
        assert_eq!(r.i64_or(&["Qty", "Quantity"], 1).unwrap(), 2);
        assert_eq!(r.i64_or(&["QuantityPicked"], 5).unwrap(), 5);
        assert!(r.require_i64(&["ScanId"]).is_err());
        assert!(r.require_i64(&["SessionId"]).is_err());
    }

    #[test]
    fn test_string_or_renders_numbers() {
        let r = row(json!({"Barcode": 12345}));
        assert_eq!(r.string_or(&["BarcodeOrSerial", "Barcode"], ""), "12345");
        assert_eq!(r.string_or(&["Serial"], "fallback"), "fallback");
    }

    #[test]
    fn test_strip_column() {
        let r = row(json!({"UserId": 1, "passwordhash": "x"}));
        let stripped = strip_column(r, "PasswordHash");
        assert_eq!(Value::Object(stripped), json!({"UserId": 1}));
    }
}
