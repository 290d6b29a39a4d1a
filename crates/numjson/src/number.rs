#[cfg(not(feature = "std"))]
use alloc::string::String;
#[cfg(feature = "std")]
use std::string::String;

/// Format a finite f64 the way Python's `repr` (and therefore its JSON
/// encoder) does.
/// Requirements:
/// - shortest digit string that round-trips
/// - positional notation while the decimal exponent is in [-4, 16),
///   scientific notation outside that range
/// - positional integral values keep a trailing `.0`
/// - scientific exponents are signed and at least two digits (`1e+16`,
///   `1e-05`)
/// - -0.0 stays `-0.0`
pub(crate) fn format_repr_f64(value: f64) -> String {
    if !value.is_finite() {
        debug_assert!(false, "format_repr_f64 called with non-finite value");
        return String::from("0.0");
    }
    if value == 0.0 {
        return if value.is_sign_negative() {
            String::from("-0.0")
        } else {
            String::from("0.0")
        };
    }

    let negative = value < 0.0;
    let magnitude = if negative { -value } else { value };

    let mut buf = ryu::Buffer::new();
    let raw = buf.format_finite(magnitude);
    let (digits, sci_exp) = split_digits(raw);

    let body = if (-4..16).contains(&sci_exp) {
        format_positional(&digits, sci_exp)
    } else {
        format_scientific(&digits, sci_exp)
    };
    if negative {
        let mut out = String::with_capacity(body.len() + 1);
        out.push('-');
        out.push_str(&body);
        out
    } else {
        body
    }
}

/// Reduce ryu output (`"100000.0"`, `"1.5e-7"`, ...) to its significant
/// digits and the exponent of the leading digit, so the caller can pick
/// the layout independently of ryu's own positional/scientific cutover.
fn split_digits(raw: &str) -> (String, i32) {
    let (mantissa, explicit_exp) = match raw.find(['e', 'E']) {
        Some(idx) => (&raw[..idx], raw[idx + 1..].parse::<i32>().unwrap_or(0)),
        None => (raw, 0),
    };

    let mut digits = String::with_capacity(mantissa.len());
    let mut point_index = None;
    for (i, b) in mantissa.bytes().enumerate() {
        if b == b'.' {
            point_index = Some(i);
        } else {
            digits.push(b as char);
        }
    }
    let int_digits = point_index.unwrap_or(mantissa.len()) as i32;

    let first = match digits.bytes().position(|b| b != b'0') {
        Some(i) => i,
        None => return (String::from("0"), 0),
    };
    let last = digits
        .bytes()
        .rposition(|b| b != b'0')
        .unwrap_or(digits.len() - 1);

    let core = String::from(&digits[first..=last]);
    let sci_exp = explicit_exp + int_digits - first as i32 - 1;
    (core, sci_exp)
}

/// `digits` has no leading or trailing zeros; `sci_exp` is in [-4, 16).
fn format_positional(digits: &str, sci_exp: i32) -> String {
    let mut out = String::with_capacity(digits.len() + 6);
    if sci_exp >= 0 {
        let int_len = (sci_exp + 1) as usize;
        if int_len >= digits.len() {
            out.push_str(digits);
            for _ in digits.len()..int_len {
                out.push('0');
            }
            out.push_str(".0");
        } else {
            out.push_str(&digits[..int_len]);
            out.push('.');
            out.push_str(&digits[int_len..]);
        }
    } else {
        out.push_str("0.");
        for _ in 0..(-sci_exp - 1) {
            out.push('0');
        }
        out.push_str(digits);
    }
    out
}

fn format_scientific(digits: &str, sci_exp: i32) -> String {
    use core::fmt::Write as _;

    let mut out = String::with_capacity(digits.len() + 6);
    out.push_str(&digits[..1]);
    if digits.len() > 1 {
        out.push('.');
        out.push_str(&digits[1..]);
    }
    out.push('e');
    out.push(if sci_exp < 0 { '-' } else { '+' });
    let _ = write!(out, "{:02}", sci_exp.unsigned_abs());
    out
}
