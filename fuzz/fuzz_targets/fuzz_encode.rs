#![no_main]
use libfuzzer_sys::fuzz_target;
use numjson::{Options, Value, encode_to_string};

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        let value = Value::from(s);
        for ensure_ascii in [true, false] {
            let opts = Options {
                ensure_ascii,
                ..Options::default()
            };
            let encoded = encode_to_string(&value, &opts).unwrap();
            if ensure_ascii {
                assert!(encoded.is_ascii(), "escaped output kept non-ASCII: {encoded}");
            }
            let parsed: serde_json::Value = serde_json::from_str(&encoded)
                .unwrap_or_else(|e| panic!("emitted invalid JSON {encoded:?}: {e}"));
            assert_eq!(parsed, serde_json::Value::String(s.to_owned()));
        }
    }
});
