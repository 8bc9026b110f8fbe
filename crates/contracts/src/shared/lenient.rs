//! Tolerant decoding for fields whose type varies between sellers.
//!
//! A single record with an unexpected scalar type must not fail the whole
//! list it arrives in.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Display text of a scalar; `None` for null, arrays and objects
pub fn value_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

/// Flag value as a yes/no answer.
///
/// `"true"` / `"false"` strings are read as booleans; otherwise non-empty
/// strings, non-zero numbers, arrays and objects count as set.
pub fn truthy(value: &Value) -> bool {
    match value {
        Value::Bool(b) => *b,
        Value::Null => false,
        Value::Number(n) => n.as_f64().map(|f| f != 0.0).unwrap_or(false),
        Value::String(s) => match s.trim().to_ascii_lowercase().as_str() {
            "" | "false" => false,
            _ => true,
        },
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// `deserialize_with` for text fields that may arrive as numbers or bools
pub fn text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(value_text))
}

/// `deserialize_with` for numbers that may arrive as numeric strings
pub fn number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().parse::<f64>().ok().filter(|f| f.is_finite()),
        _ => None,
    })
}

/// `deserialize_with` keeping a present key as `Some`, even when it is null.
///
/// Use together with `#[serde(default)]` so an absent key stays `None`.
pub fn present<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}
