//! Encoding pipeline: extension-value lowering plus JSON text emission.

pub mod encoders;
pub mod normalize;
pub mod primitives;
pub mod writer;

#[cfg(not(feature = "std"))]
use alloc::string::String;

use crate::{Result, options::Options, value::Value};

pub fn encode_value_to_string(value: &Value, options: &Options) -> Result<String> {
    let mut w = writer::TextWriter::new(options.indent);
    encoders::encode_value(value, &mut w, options, 0)?;
    Ok(w.into_string())
}

/// Reusable encode handle. Holds nothing but the options, so sharing one
/// across calls and constructing one per call are equivalent.
#[derive(Debug, Clone)]
pub struct Encoder {
    options: Options,
}

impl Encoder {
    pub fn new() -> Self {
        Self {
            options: Options::default(),
        }
    }

    pub fn with_options(options: Options) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Encode a value to JSON text, failing on values with no JSON
    /// representation.
    pub fn encode(&self, value: &Value) -> Result<String> {
        encode_value_to_string(value, &self.options)
    }

    #[cfg(feature = "std")]
    pub fn encode_to_writer<W: std::io::Write>(&self, mut writer: W, value: &Value) -> Result<()> {
        let s = self.encode(value)?;
        writer.write_all(s.as_bytes())?;
        Ok(())
    }
}

impl Default for Encoder {
    fn default() -> Self {
        Self::new()
    }
}
