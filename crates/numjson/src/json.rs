//! Conversions between the encoder's input model and `serde_json::Value`.
//!
//! Import is total. Export runs the same lowering the encoder applies,
//! so vectors come out as arrays and sets fail; non-finite numbers fail
//! too because `serde_json` numbers cannot carry them.

use serde_json::{Map, Value as JsonValue};

use crate::encode::normalize::normalize_value;
use crate::error::Error;
use crate::value::{Number, Value};
use crate::Result;

pub fn from_json(v: &JsonValue) -> Value {
    match v {
        JsonValue::Null => Value::Null,
        JsonValue::Bool(b) => Value::Bool(*b),
        JsonValue::Number(n) => {
            if let Some(i) = n.as_i64() {
                Value::Number(Number::I64(i))
            } else if let Some(u) = n.as_u64() {
                Value::Number(Number::U64(u))
            } else {
                Value::Number(Number::F64(n.as_f64().unwrap_or(0.0)))
            }
        }
        JsonValue::String(s) => Value::String(s.clone()),
        JsonValue::Array(items) => Value::Array(items.iter().map(from_json).collect()),
        JsonValue::Object(m) => Value::Object(
            m.iter()
                .map(|(k, vv)| (k.clone(), from_json(vv)))
                .collect(),
        ),
    }
}

pub fn to_json(value: &Value) -> Result<JsonValue> {
    let lowered = normalize_value(value)?;
    native_to_json(&lowered)
}

fn native_to_json(v: &Value) -> Result<JsonValue> {
    match v {
        Value::Null => Ok(JsonValue::Null),
        Value::Bool(b) => Ok(JsonValue::Bool(*b)),
        Value::Number(Number::I64(i)) => Ok(JsonValue::from(*i)),
        Value::Number(Number::U64(u)) => Ok(JsonValue::from(*u)),
        Value::Number(Number::F64(f)) => serde_json::Number::from_f64(*f)
            .map(JsonValue::Number)
            .ok_or(Error::NonFinite(*f)),
        Value::String(s) => Ok(JsonValue::String(s.clone())),
        Value::Array(items) => {
            let mut out = Vec::with_capacity(items.len());
            for item in items {
                out.push(native_to_json(item)?);
            }
            Ok(JsonValue::Array(out))
        }
        Value::Object(members) => {
            let mut m = Map::with_capacity(members.len());
            for (k, vv) in members {
                m.insert(k.clone(), native_to_json(vv)?);
            }
            Ok(JsonValue::Object(m))
        }
        Value::Vector(_) | Value::Set(_) => {
            unreachable!("normalize_value returns JSON-native trees")
        }
    }
}

impl From<&JsonValue> for Value {
    fn from(v: &JsonValue) -> Self {
        from_json(v)
    }
}

impl From<JsonValue> for Value {
    fn from(v: JsonValue) -> Self {
        from_json(&v)
    }
}

impl TryFrom<&Value> for JsonValue {
    type Error = Error;

    fn try_from(v: &Value) -> Result<JsonValue> {
        to_json(v)
    }
}

impl TryFrom<Value> for JsonValue {
    type Error = Error;

    fn try_from(v: Value) -> Result<JsonValue> {
        to_json(&v)
    }
}
