// 🟰 Truthiness - which JSON values count as "present"
//
// Falsy: null, false, 0, -0, "" (and a missing field).
// Everything else is truthy, including empty arrays and objects.

use serde_json::Value;

/// Returns true when `value` is truthy
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|f| f != 0.0 && !f.is_nan()).unwrap_or(false),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
