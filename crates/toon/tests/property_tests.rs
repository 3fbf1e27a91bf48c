use proptest::prelude::*;
use toon::{DecodeOptions, EncodeOptions, Number, Object, Value};

const SAFE: i64 = 9_007_199_254_740_991;

fn scalar() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        (-SAFE..=SAFE).prop_map(|i| Value::Number(Number::from_i64(i))),
        any::<f64>()
            .prop_filter("finite", |f| f.is_finite())
            .prop_map(|f| Value::Number(Number::from_f64(f).unwrap())),
        // Printable ASCII exercises quoting without tripping the
        // control-character rejection.
        "[ -~]{0,12}".prop_map(Value::String),
        Just(Value::String("a\tb\nc".into())),
    ]
}

fn value() -> impl Strategy<Value = Value> {
    scalar().prop_recursive(3, 32, 4, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..4).prop_map(Value::Array),
            prop::collection::vec(("[a-z][a-z0-9_]{0,5}", inner), 0..4).prop_map(|fields| {
                Value::Object(fields.into_iter().collect::<Object>())
            }),
        ]
    })
}

proptest! {
    #[test]
    fn decode_inverts_encode(v in value()) {
        let doc = toon::encode_to_string(&v, &EncodeOptions::default()).unwrap();
        let back = toon::decode_from_str(&doc, &DecodeOptions::default()).unwrap();
        prop_assert_eq!(back, v);
    }

    #[test]
    fn reencoding_is_stable(v in value()) {
        let opts = EncodeOptions::default();
        let doc = toon::encode_to_string(&v, &opts).unwrap();
        let decoded = toon::decode_from_str(&doc, &DecodeOptions::default()).unwrap();
        let again = toon::encode_to_string(&decoded, &opts).unwrap();
        prop_assert_eq!(again, doc);
    }

    #[test]
    fn delimited_strings_survive_arrays(s in "[ -~]{0,16}") {
        let v = Value::Array(vec![Value::String(s.clone()), Value::String(s)]);
        let doc = toon::encode_to_string(&v, &EncodeOptions::default()).unwrap();
        let back = toon::decode_from_str(&doc, &DecodeOptions::default()).unwrap();
        prop_assert_eq!(back, v);
    }

    #[test]
    fn numbers_round_trip_canonically(f in any::<f64>().prop_filter("finite", |f| f.is_finite())) {
        let v = Value::Number(Number::from_f64(f).unwrap());
        let doc = toon::encode_to_string(&v, &EncodeOptions::default()).unwrap();
        let back = toon::decode_from_str(&doc, &DecodeOptions::default()).unwrap();
        prop_assert_eq!(back, v);
    }
}
