//! Serde bridge: build a [`Value`](crate::value::Value) from any
//! `Serialize` type, then run the standard encoding over it.
//!
//! Serde's data model has no set shape, so `HashSet`/`BTreeSet` fields
//! arrive here as sequences and encode as arrays. The strict set
//! rejection applies to the `Value` path and to `Value`'s own
//! `Serialize` impl.

#[cfg(not(feature = "std"))]
use alloc::string::String;

use serde::Serialize;
use serde::ser::Error as _;
use serde::ser::{SerializeMap, SerializeSeq};

use crate::{Result, error::Error, options::Options, value::{Number, Value}};

mod value_builder;

/// Convert any serializable type into the encoder's input model.
pub fn to_value<T: Serialize + ?Sized>(value: &T) -> Result<Value> {
    value_builder::to_value(value).map_err(|e| Error::Message(e.into_message()))
}

pub fn to_string<T: Serialize + ?Sized>(value: &T, options: &Options) -> Result<String> {
    let v = to_value(value)?;
    crate::encode::encode_value_to_string(&v, options)
}

#[cfg(feature = "std")]
pub fn to_writer<W: std::io::Write, T: Serialize + ?Sized>(
    mut writer: W,
    value: &T,
    options: &Options,
) -> Result<()> {
    let s = to_string(value, options)?;
    std::io::Write::write_all(&mut writer, s.as_bytes())?;
    Ok(())
}

impl Serialize for Number {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error> {
        match self {
            Number::I64(i) => serializer.serialize_i64(*i),
            Number::U64(u) => serializer.serialize_u64(*u),
            Number::F64(f) => serializer.serialize_f64(*f),
        }
    }
}

impl Serialize for Value {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error> {
        match self {
            Value::Null => serializer.serialize_unit(),
            Value::Bool(b) => serializer.serialize_bool(*b),
            Value::Number(n) => n.serialize(serializer),
            Value::String(s) => serializer.serialize_str(s),
            Value::Array(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            Value::Object(members) => {
                let mut map = serializer.serialize_map(Some(members.len()))?;
                for (k, v) in members {
                    map.serialize_entry(k, v)?;
                }
                map.end()
            }
            Value::Vector(xs) => {
                let mut seq = serializer.serialize_seq(Some(xs.len()))?;
                for x in xs {
                    seq.serialize_element(x)?;
                }
                seq.end()
            }
            Value::Set(_) => Err(S::Error::custom("type set is not JSON serializable")),
        }
    }
}
