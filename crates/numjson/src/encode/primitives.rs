#[cfg(not(feature = "std"))]
use alloc::string::String;

#[cfg(feature = "std")]
use std::string::String;

use crate::error::Error;
use crate::number::format_repr_f64;
use crate::Result;

pub fn format_bool(b: bool) -> &'static str {
    if b { "true" } else { "false" }
}

pub fn format_null() -> &'static str {
    "null"
}

/// Format an f64 for emission. Finite values use the repr layout;
/// non-finite values become the `NaN`/`Infinity`/`-Infinity` literals, or
/// an error when `allow_nan` is off.
pub fn format_f64(f: f64, allow_nan: bool) -> Result<String> {
    if f.is_finite() {
        Ok(format_repr_f64(f))
    } else if !allow_nan {
        Err(Error::NonFinite(f))
    } else if f.is_nan() {
        Ok(String::from("NaN"))
    } else if f.is_sign_positive() {
        Ok(String::from("Infinity"))
    } else {
        Ok(String::from("-Infinity"))
    }
}

fn is_control(c: char) -> bool {
    (c as u32) < 0x20
}

/// Append `s` as a quoted JSON string.
///
/// The two-character escapes cover `" \ \b \f \n \r \t`; remaining
/// control characters use `\uXXXX`. With `ensure_ascii` every character
/// above `~` is escaped too, as a surrogate pair when outside the BMP.
/// Hex digits are lowercase.
pub fn escape_and_quote_into(out: &mut String, s: &str, ensure_ascii: bool) {
    use core::fmt::Write as _;

    out.push('"');
    for ch in s.chars() {
        match ch {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\u{0008}' => out.push_str("\\b"),
            '\u{000C}' => out.push_str("\\f"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if is_control(c) => {
                let _ = write!(out, "\\u{:04x}", c as u32);
            }
            c if ensure_ascii && (c as u32) > 0x7E => {
                let cp = c as u32;
                if cp > 0xFFFF {
                    let v = cp - 0x1_0000;
                    let _ = write!(
                        out,
                        "\\u{:04x}\\u{:04x}",
                        0xD800 + (v >> 10),
                        0xDC00 + (v & 0x3FF)
                    );
                } else {
                    let _ = write!(out, "\\u{:04x}", cp);
                }
            }
            c => out.push(c),
        }
    }
    out.push('"');
}

pub fn escape_and_quote(s: &str, ensure_ascii: bool) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    escape_and_quote_into(&mut out, s, ensure_ascii);
    out
}
