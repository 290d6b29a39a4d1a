#![cfg(feature = "json")]

use numjson::json::{from_json, to_json};
use numjson::{Options, Value, encode_to_string};
use rand::{RngExt, SeedableRng, rngs::StdRng};
use serde_json::json;

fn reparses_equal(doc: &serde_json::Value, options: &Options) {
    let encoded = encode_to_string(&from_json(doc), options).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&encoded).unwrap();
    assert_eq!(&parsed, doc, "encoded text was {encoded}");
}

#[test]
fn fixed_documents_reparse_equal() {
    let docs = [
        json!(null),
        json!(true),
        json!(-12),
        json!(18446744073709551615u64),
        json!(0.1),
        json!("plain"),
        json!("quotes \" and \\ backslashes \n"),
        json!("héllo \u{2603} \u{1f600}"),
        json!([]),
        json!({}),
        json!([1, [2, [3, [4]]]]),
        json!({"a": {"b": {"c": [true, null, 0.5]}}}),
        json!({"π": "valü", "nested": ["\u{1f680}", {"k": "\u{7f}"}]}),
    ];
    for doc in &docs {
        reparses_equal(doc, &Options::default());
    }
}

#[test]
fn reparse_holds_without_ascii_escaping() {
    let doc = json!({"π": ["héllo", "\u{1f600}"], "tab": "a\tb"});
    let options = Options {
        ensure_ascii: false,
        ..Options::default()
    };
    reparses_equal(&doc, &options);
}

#[test]
fn reparse_holds_with_pretty_and_sorted_output() {
    let doc = json!({"z": [1, 2], "a": {"y": 0.25, "b": "s"}});
    let options = Options {
        indent: Some(2),
        sort_keys: true,
        ..Options::default()
    };
    let encoded = encode_to_string(&from_json(&doc), &options).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&encoded).unwrap();
    assert_eq!(parsed, doc);
}

#[test]
fn vector_roundtrips_as_float_array() {
    let value = Value::vector([0.0, 1.5, -2.25]);
    let encoded = encode_to_string(&value, &Options::default()).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&encoded).unwrap();
    assert_eq!(parsed, json!([0.0, 1.5, -2.25]));
    assert_eq!(to_json(&value).unwrap(), json!([0.0, 1.5, -2.25]));
}

#[test]
fn float_reprs_parse_back_to_the_same_bits() {
    let samples = [
        0.1,
        1.0 / 3.0,
        f64::MIN_POSITIVE,
        f64::MAX,
        -4.9e-324,
        123456789.123456789,
    ];
    for &f in &samples {
        let encoded = encode_to_string(&Value::from(f), &Options::default()).unwrap();
        let back: f64 = encoded.parse().unwrap();
        assert_eq!(back.to_bits(), f.to_bits(), "repr {encoded}");
    }
}

fn random_doc(rng: &mut StdRng, depth: usize) -> serde_json::Value {
    let pick = if depth >= 4 {
        rng.random_range(0..5)
    } else {
        rng.random_range(0..7)
    };
    match pick {
        0 => json!(null),
        1 => json!(rng.random_bool(0.5)),
        2 => json!(rng.random::<i64>()),
        3 => json!(rng.random::<f64>()),
        4 => {
            let len = rng.random_range(0..12);
            let s: String = (0..len)
                .map(|_| {
                    let c = rng.random_range(0u32..0x250);
                    char::from_u32(c).unwrap_or('?')
                })
                .collect();
            json!(s)
        }
        5 => {
            let len = rng.random_range(0..5);
            serde_json::Value::Array((0..len).map(|_| random_doc(rng, depth + 1)).collect())
        }
        _ => {
            let len = rng.random_range(0..5);
            let mut map = serde_json::Map::new();
            for i in 0..len {
                map.insert(format!("k{i}"), random_doc(rng, depth + 1));
            }
            serde_json::Value::Object(map)
        }
    }
}

#[test]
fn random_documents_reparse_equal() {
    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..200 {
        let doc = random_doc(&mut rng, 0);
        reparses_equal(&doc, &Options::default());
        let options = Options {
            indent: Some(2),
            ensure_ascii: false,
            ..Options::default()
        };
        reparses_equal(&doc, &options);
    }
}
