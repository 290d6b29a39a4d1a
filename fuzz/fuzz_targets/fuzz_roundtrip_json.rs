#![no_main]
use libfuzzer_sys::fuzz_target;
use numjson::json::from_json;
use numjson::{Options, encode_to_string};

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        if let Ok(original) = serde_json::from_str::<serde_json::Value>(s) {
            let value = from_json(&original);
            for opts in [
                Options::default(),
                Options {
                    indent: Some(2),
                    sort_keys: true,
                    ensure_ascii: false,
                    ..Options::default()
                },
            ] {
                let encoded = encode_to_string(&value, &opts)
                    .unwrap_or_else(|e| panic!("encode failed on parsed JSON: {e}"));
                match serde_json::from_str::<serde_json::Value>(&encoded) {
                    Ok(reparsed) => {
                        // Map equality ignores key order, so the sorted
                        // variant goes through the same check.
                        if reparsed != original {
                            panic!(
                                "Roundtrip mismatch!\nOriginal: {}\nEncoded: {}\nReparsed: {}",
                                serde_json::to_string_pretty(&original).unwrap(),
                                encoded,
                                serde_json::to_string_pretty(&reparsed).unwrap()
                            );
                        }
                    }
                    Err(e) => {
                        panic!(
                            "Emitted unparseable JSON!\nOriginal: {}\nEncoded: {}\nError: {}",
                            serde_json::to_string_pretty(&original).unwrap(),
                            encoded,
                            e
                        );
                    }
                }
            }
        }
    }
});
