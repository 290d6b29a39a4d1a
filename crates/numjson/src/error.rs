#[cfg(feature = "std")]
use thiserror::Error;

#[cfg(feature = "std")]
use std::io;

#[cfg(feature = "std")]
#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("type {0} is not JSON serializable")]
    UnsupportedType(&'static str),

    #[error("out of range float value {0} is not JSON compliant")]
    NonFinite(f64),

    #[error("{0}")]
    Message(String),
}

#[cfg(not(feature = "std"))]
#[derive(Debug)]
pub enum Error {
    UnsupportedType(&'static str),
    NonFinite(f64),
    Message(alloc::string::String),
}

#[cfg(not(feature = "std"))]
impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Error::UnsupportedType(name) => {
                write!(f, "type {} is not JSON serializable", name)
            }
            Error::NonFinite(v) => {
                write!(f, "out of range float value {} is not JSON compliant", v)
            }
            Error::Message(m) => f.write_str(m),
        }
    }
}

impl Error {
    /// True for the unsupported-type failure (the set case and any other
    /// value without a JSON representation).
    pub fn is_unsupported_type(&self) -> bool {
        matches!(self, Error::UnsupportedType(_))
    }
}

pub type Result<T> = core::result::Result<T, Error>;
