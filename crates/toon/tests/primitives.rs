use serde_json::json;
use toon::{DecodeOptions, EncodeOptions, Value};

fn encode(value: &serde_json::Value) -> String {
    toon::encode_to_string(value, &EncodeOptions::default()).unwrap()
}

fn decode(doc: &str) -> Value {
    toon::decode_from_str(doc, &DecodeOptions::default()).unwrap()
}

#[test]
fn primitive_roots() {
    assert_eq!(encode(&json!("hello")), "hello");
    assert_eq!(encode(&json!(42)), "42");
    assert_eq!(encode(&json!(true)), "true");
    assert_eq!(encode(&json!(null)), "null");
}

#[test]
fn primitive_root_decodes() {
    assert_eq!(decode("42").to_json(), json!(42));
    assert_eq!(decode("hello").to_json(), json!("hello"));
    assert_eq!(decode("false").to_json(), json!(false));
    assert_eq!(decode("null").to_json(), json!(null));
    assert_eq!(decode("\"a:b\"").to_json(), json!("a:b"));
}

#[test]
fn safe_integer_policy() {
    let v = json!({
        "safe": 9007199254740991u64,
        "large": 9007199254740993u64,
        "huge": 1000000000000000000u64,
    });
    let doc = encode(&v);
    assert!(doc.contains("safe: 9007199254740991"));
    assert!(doc.contains("large: \"9007199254740993\""));
    assert!(doc.contains("huge: \"1000000000000000000\""));

    let back = decode(&doc);
    let Value::Object(obj) = &back else {
        panic!("expected object")
    };
    assert_eq!(obj.get("large"), Some(&Value::String("9007199254740993".into())));
    assert_eq!(obj.get("huge"), Some(&Value::String("1000000000000000000".into())));
    assert!(matches!(obj.get("safe"), Some(Value::Number(_))));
}

#[test]
fn negative_safe_integer_policy() {
    let v = json!({"a": -9007199254740991i64, "b": -9007199254740993i64});
    let doc = encode(&v);
    assert!(doc.contains("a: -9007199254740991"));
    assert!(doc.contains("b: \"-9007199254740993\""));
}

#[test]
fn float_canonicalization() {
    assert_eq!(encode(&json!(3.25)), "3.25");
    assert_eq!(encode(&json!(0.1)), "0.1");
    assert_eq!(encode(&json!(1e3)), "1000");
    assert_eq!(encode(&json!(1e-3)), "0.001");
    assert_eq!(encode(&json!(-2.5)), "-2.5");
    assert_eq!(encode(&json!(1e21)), "1000000000000000000000");
}

#[test]
fn non_finite_floats_become_null() {
    #[derive(serde::Serialize)]
    struct Weird {
        nan: f64,
        inf: f64,
    }
    let doc = toon::ser::to_string(
        &Weird {
            nan: f64::NAN,
            inf: f64::INFINITY,
        },
        &EncodeOptions::default(),
    )
    .unwrap();
    assert_eq!(doc, "nan: null\ninf: null");
}

#[test]
fn negative_zero_folds() {
    assert_eq!(encode(&json!(-0.0)), "0");
}

#[test]
fn forbidden_leading_zeros_decode_as_strings() {
    assert_eq!(decode("v: 007").to_json(), json!({"v": "007"}));
    assert_eq!(decode("v: -012").to_json(), json!({"v": "-012"}));
    // 0.5 and plain 0 are legitimate numbers.
    assert_eq!(decode("v: 0.5").to_json(), json!({"v": 0.5}));
    assert_eq!(decode("v: 0").to_json(), json!({"v": 0}));
}

#[test]
fn numeric_looking_tokens() {
    assert_eq!(decode("v: 1e3").to_json(), json!({"v": 1000}));
    assert_eq!(decode("v: -4.25").to_json(), json!({"v": -4.25}));
    // Not numeric: stays a string.
    assert_eq!(decode("v: 1.2.3").to_json(), json!({"v": "1.2.3"}));
    assert_eq!(decode("v: 1e").to_json(), json!({"v": "1e"}));
    assert_eq!(decode("v: -").to_json(), json!({"v": "-"}));
}

#[test]
fn bare_key_decodes_to_empty_object() {
    assert_eq!(decode("v:").to_json(), json!({"v": {}}));
}

#[test]
fn quoted_literals_stay_strings() {
    assert_eq!(decode("v: \"true\"").to_json(), json!({"v": "true"}));
    assert_eq!(decode("v: \"42\"").to_json(), json!({"v": "42"}));
}

#[test]
fn numeric_string_reparse() {
    use toon::encode::normalize::numeric_string;
    assert_eq!(numeric_string("1000").to_json(), json!(1000));
    assert_eq!(numeric_string("0.5").to_json(), json!(0.5));
    // Does not round-trip its digits: kept as string.
    assert_eq!(numeric_string("1e3").to_json(), json!("1e3"));
    assert_eq!(numeric_string("007").to_json(), json!("007"));
    assert_eq!(numeric_string("NaN").to_json(), json!("NaN"));
}
