#![doc = include_str!("../README.md")]
#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

pub mod encode;
pub mod error;
pub mod options;
pub mod value;

mod number;

#[cfg(feature = "serde")]
pub mod ser;

#[cfg(feature = "json")]
pub mod json;

pub use crate::encode::Encoder;
pub use crate::error::{Error, Result};
pub use crate::options::Options;
pub use crate::value::{Number, Value};

#[cfg(not(feature = "std"))]
use alloc::string::String;

#[cfg(feature = "std")]
use std::io::Write;

/// Encode a value to JSON text.
///
/// Fails with [`Error::UnsupportedType`] for values that have no JSON
/// representation (sets), and with [`Error::NonFinite`] for non-finite
/// floats when `options.allow_nan` is off. On failure no output is
/// produced.
pub fn encode_to_string(value: &Value, options: &Options) -> Result<String> {
    crate::encode::encode_value_to_string(value, options)
}

#[cfg(feature = "std")]
pub fn encode_to_writer<W: Write>(mut writer: W, value: &Value, options: &Options) -> Result<()> {
    let s = encode_to_string(value, options)?;
    writer.write_all(s.as_bytes())?;
    Ok(())
}
