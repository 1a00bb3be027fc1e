//! Lenient field decoders for hand-maintained datasets.
//!
//! Spreadsheet exports mix numbers and strings in the same column
//! (`"CASNumber": 7732185` next to `"CASNumber": "64-17-5"`), so text
//! columns accept any scalar and numeric columns accept numeric strings.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Decodes any JSON scalar as text. `null`, arrays and objects become `None`.
pub fn opt_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.and_then(scalar_to_text))
}

/// Decodes a number or a numeric string. Anything else becomes `None`.
pub fn opt_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().parse::<f64>().ok(),
        _ => None,
    })
}

fn scalar_to_text(value: Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}
