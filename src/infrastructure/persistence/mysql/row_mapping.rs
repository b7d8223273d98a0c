//! Row Mapping - MySQL 行 → JSON 对象
//!
//! 按列类型名分派解码，列顺序保持不变。

use chrono::{NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use serde_json::{Number, Value};
use sqlx::mysql::MySqlRow;
use sqlx::{Column, Row as _, TypeInfo, ValueRef};

use crate::application::ports::{ProcedureError, Row};

const DATETIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";
const MICROS_FORMAT: &str = "%.6f";

/// 单行转换为 JSON 对象
pub fn row_to_json(row: &MySqlRow) -> Result<Row, ProcedureError> {
    let mut object = Row::new();

    for (idx, column) in row.columns().iter().enumerate() {
        let value = column_value(row, idx, column.type_info().name())?;
        object.insert(column.name().to_string(), value);
    }

    Ok(object)
}

fn column_value(row: &MySqlRow, idx: usize, type_name: &str) -> Result<Value, ProcedureError> {
    if row.try_get_raw(idx).map_err(decode_err)?.is_null() {
        return Ok(Value::Null);
    }

    let value = match type_name {
        "BOOLEAN" => Value::Bool(row.try_get::<bool, _>(idx).map_err(decode_err)?),
        t if t.ends_with("UNSIGNED") => {
            Value::from(row.try_get_unchecked::<u64, _>(idx).map_err(decode_err)?)
        }
        "TINYINT" | "SMALLINT" | "MEDIUMINT" | "INT" | "BIGINT" => {
            Value::from(row.try_get_unchecked::<i64, _>(idx).map_err(decode_err)?)
        }
        "YEAR" => Value::from(row.try_get_unchecked::<u16, _>(idx).map_err(decode_err)?),
        "FLOAT" => float_value(f64::from(row.try_get::<f32, _>(idx).map_err(decode_err)?)),
        "DOUBLE" => float_value(row.try_get::<f64, _>(idx).map_err(decode_err)?),
        "DECIMAL" => decimal_value(row.try_get_unchecked::<String, _>(idx).map_err(decode_err)?),
        "DATETIME" | "TIMESTAMP" => {
            let ts = row.try_get::<NaiveDateTime, _>(idx).map_err(decode_err)?;
            Value::String(format_datetime(&ts))
        }
        "DATE" => Value::String(row.try_get::<NaiveDate, _>(idx).map_err(decode_err)?.to_string()),
        "TIME" => Value::String(row.try_get::<NaiveTime, _>(idx).map_err(decode_err)?.to_string()),
        "JSON" => row.try_get::<Value, _>(idx).map_err(decode_err)?,
        _ => {
            let bytes = row.try_get_unchecked::<Vec<u8>, _>(idx).map_err(decode_err)?;
            Value::String(String::from_utf8_lossy(&bytes).into_owned())
        }
    };

    Ok(value)
}

/// ISO-8601，小数秒存在时固定 6 位
pub(crate) fn format_datetime(ts: &NaiveDateTime) -> String {
    let mut text = ts.format(DATETIME_FORMAT).to_string();
    if ts.nanosecond() != 0 {
        text.push_str(&ts.format(MICROS_FORMAT).to_string());
    }
    text
}

/// 非有限浮点数没有 JSON 表示，输出 null
fn float_value(v: f64) -> Value {
    Number::from_f64(v).map(Value::Number).unwrap_or(Value::Null)
}

/// DECIMAL 以数字输出，超出精度时保留原字符串
pub(crate) fn decimal_value(text: String) -> Value {
    if let Ok(n) = text.parse::<i64>() {
        return Value::from(n);
    }
    match text.parse::<f64>().ok().and_then(Number::from_f64) {
        Some(n) => Value::Number(n),
        None => Value::String(text),
    }
}

fn decode_err(err: sqlx::Error) -> ProcedureError {
    ProcedureError::Decode(err.to_string())
}
