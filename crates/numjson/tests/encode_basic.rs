#![cfg(feature = "json")]

use numjson::{Encoder, Options, Value, encode_to_string};
use serde_json::json;

fn enc(value: &Value) -> String {
    encode_to_string(value, &Options::default()).unwrap()
}

fn enc_json(value: &serde_json::Value) -> String {
    enc(&numjson::json::from_json(value))
}

#[test]
fn encode_scalars() {
    assert_eq!(enc(&Value::Null), "null");
    assert_eq!(enc(&Value::from(true)), "true");
    assert_eq!(enc(&Value::from(false)), "false");
    assert_eq!(enc(&Value::from(1)), "1");
    assert_eq!(enc(&Value::from(-42i64)), "-42");
    assert_eq!(enc(&Value::from(u64::MAX)), "18446744073709551615");
    assert_eq!(enc(&Value::from(i64::MIN)), "-9223372036854775808");
    assert_eq!(enc(&Value::from("hello")), "\"hello\"");
    assert_eq!(enc(&Value::from(String::new())), "\"\"");
}

#[test]
fn encode_array_of_ints() {
    assert_eq!(enc(&Value::from(vec![1, 2])), "[1, 2]");
}

#[test]
fn encode_simple_object() {
    let value: Value = [("a", 1)].into_iter().collect();
    assert_eq!(enc(&value), "{\"a\": 1}");
}

#[test]
fn encode_empty_containers() {
    assert_eq!(enc(&Value::Array(Vec::new())), "[]");
    assert_eq!(enc(&Value::Object(Vec::new())), "{}");
}

#[test]
fn encode_nested_structures() {
    let out = enc_json(&json!({
        "name": "arm",
        "dof": 6,
        "active": true,
        "tags": ["robot", "kinematics"],
        "limits": {"lower": -1, "upper": 1},
        "extra": null
    }));
    assert_eq!(
        out,
        "{\"name\": \"arm\", \"dof\": 6, \"active\": true, \
         \"tags\": [\"robot\", \"kinematics\"], \
         \"limits\": {\"lower\": -1, \"upper\": 1}, \"extra\": null}"
    );
}

#[test]
fn object_preserves_insertion_order() {
    let value: Value = [("z", 1), ("a", 2), ("m", 3)].into_iter().collect();
    assert_eq!(enc(&value), "{\"z\": 1, \"a\": 2, \"m\": 3}");
}

#[test]
fn compact_separators_have_single_spaces() {
    let out = enc_json(&json!([1, [2, 3], {"k": 4}]));
    assert_eq!(out, "[1, [2, 3], {\"k\": 4}]");
    assert!(!out.contains('\n'));
}

#[test]
fn no_trailing_newline() {
    let out = enc_json(&json!({"a": [1, 2]}));
    assert!(!out.ends_with('\n'));
    let pretty = encode_to_string(
        &numjson::json::from_json(&json!({"a": [1, 2]})),
        &Options {
            indent: Some(2),
            ..Options::default()
        },
    )
    .unwrap();
    assert!(!pretty.ends_with('\n'));
}

#[test]
fn encoder_handle_matches_free_function() {
    let value: Value = [("a", 1)].into_iter().collect();
    let encoder = Encoder::new();
    assert_eq!(encoder.encode(&value).unwrap(), enc(&value));
}

#[test]
fn repeated_encodes_are_identical() {
    let value = numjson::json::from_json(&json!({"a": [1.5, 2], "b": "x"}));
    let first = Encoder::new().encode(&value).unwrap();
    let second = Encoder::new().encode(&value).unwrap();
    assert_eq!(first, second);
    assert_eq!(first, Encoder::default().encode(&value).unwrap());
}

#[test]
fn encode_to_writer_matches_string_output() {
    let value = numjson::json::from_json(&json!({"a": [1, 2], "b": "text"}));
    let encoder = Encoder::new();
    let mut buf = Vec::new();
    encoder.encode_to_writer(&mut buf, &value).unwrap();
    assert_eq!(String::from_utf8(buf).unwrap(), encoder.encode(&value).unwrap());
}

#[test]
fn free_writer_function_matches_string_output() {
    let value = Value::from(vec![1, 2, 3]);
    let options = Options::default();
    let mut buf = Vec::new();
    numjson::encode_to_writer(&mut buf, &value, &options).unwrap();
    assert_eq!(buf, encode_to_string(&value, &options).unwrap().into_bytes());
}
