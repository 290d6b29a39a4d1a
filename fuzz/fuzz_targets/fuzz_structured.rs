#![no_main]
use arbitrary::Arbitrary;
use libfuzzer_sys::{arbitrary, fuzz_target};
use numjson::{Options, Value, encode_to_string};

const MAX_DEPTH: usize = 8;
const MAX_ARRAY_SIZE: usize = 20;
const MAX_OBJECT_SIZE: usize = 20;

#[derive(Arbitrary, Debug)]
struct FuzzValue {
    choice: u8,
}

impl FuzzValue {
    fn build(&self, u: &mut arbitrary::Unstructured, depth: usize) -> arbitrary::Result<Value> {
        if depth >= MAX_DEPTH {
            return Ok(Value::Null);
        }

        Ok(match self.choice % 10 {
            0 => Value::Null,
            1 => Value::from(u.arbitrary::<bool>()?),
            2 => Value::from(u.arbitrary::<i64>()?),
            3 => {
                let f: f64 = u.arbitrary()?;
                if f.is_finite() { Value::from(f) } else { Value::Null }
            }
            4 => Value::from(u.arbitrary::<String>()?),
            5 => {
                let size = u.int_in_range(0..=MAX_ARRAY_SIZE)?;
                let mut members = Vec::with_capacity(size);
                for _ in 0..size {
                    let f: f64 = u.arbitrary()?;
                    members.push(if f.is_finite() { f } else { 0.0 });
                }
                Value::vector(members)
            }
            6 => {
                let size = u.int_in_range(0..=MAX_ARRAY_SIZE)?;
                Value::set((0..size).map(|i| i as i64))
            }
            7 | 8 => {
                let size = u.int_in_range(0..=MAX_ARRAY_SIZE)?;
                let mut members = Vec::with_capacity(size);
                for _ in 0..size {
                    let fv: FuzzValue = u.arbitrary()?;
                    members.push(fv.build(u, depth + 1)?);
                }
                Value::Array(members)
            }
            _ => {
                let size = u.int_in_range(0..=MAX_OBJECT_SIZE)?;
                let mut members = Vec::with_capacity(size);
                for _ in 0..size {
                    let key: String = u.arbitrary()?;
                    let fv: FuzzValue = u.arbitrary()?;
                    members.push((key, fv.build(u, depth + 1)?));
                }
                Value::Object(members)
            }
        })
    }
}

fn contains_set(value: &Value) -> bool {
    match value {
        Value::Set(_) => true,
        Value::Array(members) => members.iter().any(contains_set),
        Value::Object(members) => members.iter().any(|(_, v)| contains_set(v)),
        _ => false,
    }
}

fuzz_target!(|data: &[u8]| {
    let mut u = arbitrary::Unstructured::new(data);

    if let Ok(fv) = u.arbitrary::<FuzzValue>() {
        if let Ok(value) = fv.build(&mut u, 0) {
            let opts = Options::default();

            match encode_to_string(&value, &opts) {
                Ok(encoded) => {
                    assert!(!contains_set(&value), "set survived encoding: {encoded}");
                    if let Err(e) = serde_json::from_str::<serde_json::Value>(&encoded) {
                        panic!("emitted unparseable JSON {encoded:?}: {e}");
                    }
                }
                Err(e) => {
                    assert!(
                        e.is_unsupported_type() && contains_set(&value),
                        "unexpected encode failure on {value:?}: {e}"
                    );
                }
            }
        }
    }
});
