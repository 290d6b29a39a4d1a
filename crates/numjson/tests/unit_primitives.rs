use numjson::encode::primitives::{escape_and_quote, format_bool, format_f64, format_null};
use numjson::{Options, Value, encode_to_string};

fn enc_f64(f: f64) -> String {
    encode_to_string(&Value::from(f), &Options::default()).unwrap()
}

#[test]
fn float_repr_positional_range() {
    // Shortest-digits layout with a decimal point, same text Python's
    // repr() picks for these values.
    let cases: &[(f64, &str)] = &[
        (0.0, "0.0"),
        (1.0, "1.0"),
        (-2.0, "-2.0"),
        (0.5, "0.5"),
        (0.1, "0.1"),
        (123.456, "123.456"),
        (0.0001, "0.0001"),
        (100000.0, "100000.0"),
        (1e15, "1000000000000000.0"),
        (1234567890.123, "1234567890.123"),
    ];
    for &(input, expected) in cases {
        assert_eq!(enc_f64(input), expected, "repr of {input}");
    }
}

#[test]
fn float_repr_scientific_range() {
    let cases: &[(f64, &str)] = &[
        (1e16, "1e+16"),
        (1.5e16, "1.5e+16"),
        (-3e17, "-3e+17"),
        (1e100, "1e+100"),
        (1e-5, "1e-05"),
        (2.5e-10, "2.5e-10"),
        (-7.25e-120, "-7.25e-120"),
    ];
    for &(input, expected) in cases {
        assert_eq!(enc_f64(input), expected, "repr of {input}");
    }
}

#[test]
fn float_repr_keeps_negative_zero() {
    assert_eq!(enc_f64(-0.0), "-0.0");
}

#[test]
fn float_repr_integral_gets_dot_zero() {
    assert_eq!(enc_f64(3.0), "3.0");
    assert_eq!(enc_f64(-1000.0), "-1000.0");
}

#[test]
fn format_f64_direct() {
    assert_eq!(format_f64(2.5, true).unwrap(), "2.5");
    assert_eq!(format_f64(f64::NAN, true).unwrap(), "NaN");
    assert!(format_f64(f64::NAN, false).is_err());
}

#[test]
fn bool_and_null_literals() {
    assert_eq!(format_bool(true), "true");
    assert_eq!(format_bool(false), "false");
    assert_eq!(format_null(), "null");
}

#[test]
fn escape_shorthands() {
    assert_eq!(
        escape_and_quote("a\"b\\c\u{8}\u{c}\n\r\t", true),
        "\"a\\\"b\\\\c\\b\\f\\n\\r\\t\""
    );
}

#[test]
fn escape_control_characters_as_lowercase_hex() {
    assert_eq!(escape_and_quote("\u{1}", true), "\"\\u0001\"");
    assert_eq!(escape_and_quote("\u{1f}", true), "\"\\u001f\"");
    assert_eq!(escape_and_quote("\u{0}", false), "\"\\u0000\"");
}

#[test]
fn ascii_escape_of_bmp_characters() {
    assert_eq!(escape_and_quote("héllo", true), "\"h\\u00e9llo\"");
    assert_eq!(escape_and_quote("\u{2603}", true), "\"\\u2603\"");
}

#[test]
fn ascii_escape_uses_surrogate_pairs_beyond_bmp() {
    // U+1F600 splits into the surrogate pair d83d/de00.
    assert_eq!(escape_and_quote("\u{1f600}", true), "\"\\ud83d\\ude00\"");
    assert_eq!(escape_and_quote("\u{10000}", true), "\"\\ud800\\udc00\"");
    assert_eq!(escape_and_quote("\u{10ffff}", true), "\"\\udbff\\udfff\"");
}

#[test]
fn raw_utf8_when_ascii_escaping_is_off() {
    assert_eq!(escape_and_quote("héllo \u{1f600}", false), "\"héllo \u{1f600}\"");
}

#[test]
fn string_encoding_goes_through_escaping() {
    let options = Options {
        ensure_ascii: false,
        ..Options::default()
    };
    assert_eq!(
        encode_to_string(&Value::from("π\n"), &options).unwrap(),
        "\"π\\n\""
    );
    assert_eq!(
        encode_to_string(&Value::from("π\n"), &Options::default()).unwrap(),
        "\"\\u03c0\\n\""
    );
}

#[test]
fn options_defaults() {
    let options = Options::default();
    assert_eq!(options.indent, None);
    assert!(!options.sort_keys);
    assert!(options.ensure_ascii);
    assert!(options.allow_nan);
}
