#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

#[cfg(feature = "std")]
use std::vec::Vec;

use crate::error::Error;
use crate::value::{Number, Value};
use crate::Result;

/// The conversion pass the encoder applies implicitly: recognized
/// extension values are rewritten to their JSON-native form, unsupported
/// ones fail here. Exposed so interop layers and callers can lower a tree
/// without emitting text.
pub fn normalize_value(v: &Value) -> Result<Value> {
    match v {
        Value::Null => Ok(Value::Null),
        Value::Bool(b) => Ok(Value::Bool(*b)),
        Value::Number(n) => Ok(Value::Number(*n)),
        Value::String(s) => Ok(Value::String(s.clone())),
        Value::Array(items) => {
            let mut out = Vec::with_capacity(items.len());
            for item in items {
                out.push(normalize_value(item)?);
            }
            Ok(Value::Array(out))
        }
        Value::Object(members) => {
            let mut out = Vec::with_capacity(members.len());
            for (k, vv) in members {
                out.push((k.clone(), normalize_value(vv)?));
            }
            Ok(Value::Object(out))
        }
        Value::Vector(xs) => Ok(Value::Array(
            xs.iter().map(|x| Value::Number(Number::F64(*x))).collect(),
        )),
        Value::Set(_) => Err(Error::UnsupportedType(v.type_name())),
    }
}
