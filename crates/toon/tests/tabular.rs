use serde_json::json;
use toon::encode::encoders::detect_tabular;
use toon::encode::normalize::from_json;
use toon::{DecodeOptions, EncodeOptions, Value};

fn model(value: &serde_json::Value) -> Value {
    from_json(value, &EncodeOptions::default())
}

#[test]
fn uniform_object_rows_emit_tabular() {
    let v = json!({"users": [
        {"id": 1, "name": "Alice", "role": "admin"},
        {"id": 2, "name": "Bob", "role": "user"},
    ]});
    let doc = toon::encode_to_string(&v, &EncodeOptions::default()).unwrap();
    assert_eq!(doc, "users[2]{id,name,role}:\n  1,Alice,admin\n  2,Bob,user");
}

#[test]
fn tabular_round_trips() {
    let doc = "users[2]{id,name,role}:\n  1,Alice,admin\n  2,Bob,user";
    let value = toon::decode_from_str(doc, &DecodeOptions::default()).unwrap();
    assert_eq!(
        value.to_json(),
        json!({"users": [
            {"id": 1, "name": "Alice", "role": "admin"},
            {"id": 2, "name": "Bob", "role": "user"},
        ]})
    );
    let again = toon::encode_to_string(&value, &EncodeOptions::default()).unwrap();
    assert_eq!(again, doc);
}

#[test]
fn detection_positive() {
    let Value::Array(rows) = model(&json!([
        {"a": 1, "b": "x"},
        {"a": 2, "b": "y"},
    ])) else {
        panic!("expected array");
    };
    assert_eq!(detect_tabular(&rows), Some(vec!["a".into(), "b".into()]));
}

#[test]
fn extra_field_disables_detection() {
    let Value::Array(rows) = model(&json!([
        {"a": 1, "b": "x"},
        {"a": 2, "b": "y", "c": 3},
    ])) else {
        panic!("expected array");
    };
    assert_eq!(detect_tabular(&rows), None);
}

#[test]
fn missing_field_disables_detection() {
    let Value::Array(rows) = model(&json!([
        {"a": 1, "b": "x"},
        {"a": 2},
    ])) else {
        panic!("expected array");
    };
    assert_eq!(detect_tabular(&rows), None);
}

#[test]
fn reordered_fields_disable_detection() {
    use toon::{Field, Number, Object};
    let rows = vec![
        Value::Object(Object::new([
            Field::new("a", Value::Number(Number::from_i64(1))),
            Field::new("b", Value::Number(Number::from_i64(2))),
        ])),
        Value::Object(Object::new([
            Field::new("b", Value::Number(Number::from_i64(3))),
            Field::new("a", Value::Number(Number::from_i64(4))),
        ])),
    ];
    assert_eq!(detect_tabular(&rows), None);
}

#[test]
fn nested_values_disable_detection() {
    let Value::Array(rows) = model(&json!([
        {"a": 1, "b": {"x": 1}},
        {"a": 2, "b": {"x": 2}},
    ])) else {
        panic!("expected array");
    };
    assert_eq!(detect_tabular(&rows), None);
}

#[test]
fn empty_objects_do_not_tabulate() {
    let Value::Array(rows) = model(&json!([{}, {}])) else {
        panic!("expected array");
    };
    assert_eq!(detect_tabular(&rows), None);
}

#[test]
fn non_uniform_rows_fall_back_to_list() {
    let v = json!({"rows": [{"a": 1}, {"a": 2, "b": 3}]});
    let doc = toon::encode_to_string(&v, &EncodeOptions::default()).unwrap();
    assert_eq!(doc, "rows[2]:\n  - a: 1\n  - a: 2\n    b: 3");
    let back = toon::decode_from_str(&doc, &DecodeOptions::default()).unwrap();
    assert_eq!(back.to_json(), v);
}

#[test]
fn quoted_cells_survive() {
    let v = json!({"rows": [
        {"id": 1, "note": "a,b"},
        {"id": 2, "note": "true"},
    ]});
    let doc = toon::encode_to_string(&v, &EncodeOptions::default()).unwrap();
    assert_eq!(doc, "rows[2]{id,note}:\n  1,\"a,b\"\n  2,\"true\"");
    let back = toon::decode_from_str(&doc, &DecodeOptions::default()).unwrap();
    assert_eq!(back.to_json(), v);
}

#[test]
fn tabular_inside_list_item() {
    let v = json!({"groups": [
        {"name": "g1", "members": [{"id": 1}, {"id": 2}]},
    ]});
    let doc = toon::encode_to_string(&v, &EncodeOptions::default()).unwrap();
    assert_eq!(
        doc,
        "groups[1]:\n  - members[2]{id}:\n    1\n    2\n    name: g1"
    );
    let back = toon::decode_from_str(&doc, &DecodeOptions::default()).unwrap();
    assert_eq!(back.to_json(), v);
}
