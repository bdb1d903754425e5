//! Conversions between [`Value`] and `serde_json::Value`.

use crate::error::RencodeError;
use crate::value::Value;

/// Maps a JSON number onto its rencode variant: integers become `Int64`,
/// other numbers `Float64`. Unsigned integers above `i64::MAX` have no tag.
pub(crate) fn number(n: &serde_json::Number) -> Result<Value, RencodeError> {
    if let Some(i) = n.as_i64() {
        Ok(Value::Int64(i))
    } else if let Some(u) = n.as_u64() {
        Err(RencodeError::UnsupportedValueKind(format!(
            "unsigned integer {u} exceeds int64"
        )))
    } else if let Some(f) = n.as_f64() {
        Ok(Value::Float64(f))
    } else {
        Err(RencodeError::UnsupportedValueKind(format!("number {n}")))
    }
}

impl TryFrom<&serde_json::Value> for Value {
    type Error = RencodeError;

    /// Integers become `Int64`, other numbers `Float64`.
    fn try_from(v: &serde_json::Value) -> Result<Self, Self::Error> {
        Ok(match v {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(*b),
            serde_json::Value::Number(n) => number(n)?,
            serde_json::Value::String(s) => Value::Text(s.clone()),
            serde_json::Value::Array(arr) => Value::List(
                arr.iter()
                    .map(Value::try_from)
                    .collect::<Result<_, _>>()?,
            ),
            serde_json::Value::Object(obj) => Value::Map(
                obj.iter()
                    .map(|(k, v)| Value::try_from(v).map(|v| (k.clone(), v)))
                    .collect::<Result<_, _>>()?,
            ),
        })
    }
}

impl TryFrom<serde_json::Value> for Value {
    type Error = RencodeError;

    fn try_from(v: serde_json::Value) -> Result<Self, Self::Error> {
        Value::try_from(&v)
    }
}

impl From<Value> for serde_json::Value {
    /// Non-finite floats have no JSON form and become `null`.
    fn from(v: Value) -> Self {
        match v {
            Value::Null => serde_json::Value::Null,
            Value::Bool(b) => serde_json::Value::Bool(b),
            Value::Int8(i) => serde_json::json!(i),
            Value::Int16(i) => serde_json::json!(i),
            Value::Int32(i) => serde_json::json!(i),
            Value::Int64(i) => serde_json::json!(i),
            Value::Float32(f) => serde_json::json!(f),
            Value::Float64(f) => serde_json::json!(f),
            Value::Text(s) => serde_json::Value::String(s),
            Value::List(items) => {
                serde_json::Value::Array(items.into_iter().map(serde_json::Value::from).collect())
            }
            Value::Map(map) => serde_json::Value::Object(
                map.into_iter()
                    .map(|(k, v)| (k, serde_json::Value::from(v)))
                    .collect(),
            ),
        }
    }
}
