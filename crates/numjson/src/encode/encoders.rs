#[cfg(not(feature = "std"))]
use alloc::{
    string::{String, ToString},
    vec::Vec,
};

#[cfg(feature = "std")]
use std::{string::String, vec::Vec};

use crate::{
    Result,
    encode::{primitives, writer::TextWriter},
    error::Error,
    options::Options,
    value::{Number, Value},
};

pub fn encode_value(
    value: &Value,
    w: &mut TextWriter,
    opts: &Options,
    depth: usize,
) -> Result<()> {
    match value {
        Value::Null => w.raw(primitives::format_null()),
        Value::Bool(b) => w.raw(primitives::format_bool(*b)),
        Value::Number(n) => encode_number(n, w, opts)?,
        Value::String(s) => w.string(s, opts.ensure_ascii),
        Value::Array(items) => {
            w.open('[');
            for (i, item) in items.iter().enumerate() {
                w.item_separator(depth + 1, i == 0);
                encode_value(item, w, opts, depth + 1)?;
            }
            w.close(']', depth, items.is_empty());
        }
        Value::Object(members) => {
            w.open('{');
            if opts.sort_keys {
                let mut ordered: Vec<&(String, Value)> = members.iter().collect();
                ordered.sort_by(|a, b| a.0.cmp(&b.0));
                for (i, (k, v)) in ordered.into_iter().enumerate() {
                    encode_member(k, v, w, opts, depth, i == 0)?;
                }
            } else {
                for (i, (k, v)) in members.iter().enumerate() {
                    encode_member(k, v, w, opts, depth, i == 0)?;
                }
            }
            w.close('}', depth, members.is_empty());
        }
        // The numeric array lowering: emitted exactly like an array of
        // f64 numbers.
        Value::Vector(xs) => {
            w.open('[');
            for (i, x) in xs.iter().enumerate() {
                w.item_separator(depth + 1, i == 0);
                w.raw(&primitives::format_f64(*x, opts.allow_nan)?);
            }
            w.close(']', depth, xs.is_empty());
        }
        Value::Set(_) => return Err(Error::UnsupportedType(value.type_name())),
    }
    Ok(())
}

fn encode_member(
    key: &str,
    value: &Value,
    w: &mut TextWriter,
    opts: &Options,
    depth: usize,
    first: bool,
) -> Result<()> {
    w.item_separator(depth + 1, first);
    w.string(key, opts.ensure_ascii);
    w.key_separator();
    encode_value(value, w, opts, depth + 1)
}

fn encode_number(n: &Number, w: &mut TextWriter, opts: &Options) -> Result<()> {
    match n {
        Number::I64(i) => w.raw(&i.to_string()),
        Number::U64(u) => w.raw(&u.to_string()),
        Number::F64(f) => w.raw(&primitives::format_f64(*f, opts.allow_nan)?),
    }
    Ok(())
}
