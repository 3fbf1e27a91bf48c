use serde_json::json;
use toon::EncodeOptions;

fn encode(value: &serde_json::Value) -> String {
    toon::encode_to_string(value, &EncodeOptions::default()).unwrap()
}

#[test]
fn simple_object() {
    let v = json!({"a": 1, "s": "hi"});
    assert_eq!(encode(&v), "a: 1\ns: hi");
}

#[test]
fn nested_object() {
    let v = json!({"outer": {"inner": 1}});
    assert_eq!(encode(&v), "outer:\n  inner: 1");
}

#[test]
fn primitive_array_is_inline() {
    let v = json!({"list": [1, 2, 3]});
    assert_eq!(encode(&v), "list[3]: 1,2,3");
}

#[test]
fn empty_array_header_only() {
    let v = json!({"items": []});
    assert_eq!(encode(&v), "items[0]:");
}

#[test]
fn empty_root_object_is_empty_document() {
    assert_eq!(encode(&json!({})), "");
}

#[test]
fn empty_nested_object_is_bare_key() {
    let v = json!({"meta": {}});
    assert_eq!(encode(&v), "meta:");
}

#[test]
fn quoting_rules() {
    let v = json!({
        "empty": "",
        "looks_bool": "true",
        "looks_num": "42",
        "leading_zero": "007",
        "starts_dash": "-x",
        "has_colon": "a:b",
        "with_comma": "x,y",
        "padded": " x",
    });
    let out = encode(&v);
    assert!(out.contains("empty: \"\""));
    assert!(out.contains("looks_bool: \"true\""));
    assert!(out.contains("looks_num: \"42\""));
    assert!(out.contains("leading_zero: \"007\""));
    assert!(out.contains("starts_dash: \"-x\""));
    assert!(out.contains("has_colon: \"a:b\""));
    assert!(out.contains("with_comma: \"x,y\""));
    assert!(out.contains("padded: \" x\""));
}

#[test]
fn escape_sequences() {
    let v = json!({"multi": "a\nb", "quoted": "say \"hi\"", "back": "a\\b"});
    let out = encode(&v);
    assert!(out.contains(r#"multi: "a\nb""#));
    assert!(out.contains(r#"quoted: "say \"hi\"""#));
    assert!(out.contains(r#"back: "a\\b""#));
}

#[test]
fn keys_outside_identifier_pattern_are_quoted() {
    let v = json!({"my key": 1, "1x": 2, "dotted.ok": 3});
    let out = encode(&v);
    assert!(out.contains("\"my key\": 1"));
    assert!(out.contains("\"1x\": 2"));
    assert!(out.contains("dotted.ok: 3"));
}

#[test]
fn control_character_is_an_error() {
    let v = json!({"bad": "a\u{0001}b"});
    let err = toon::encode_to_string(&v, &EncodeOptions::default()).unwrap_err();
    assert!(matches!(err, toon::Error::InvalidChar(1)));
}

#[test]
fn wider_indent() {
    let opts = EncodeOptions {
        indent: 4,
        ..EncodeOptions::default()
    };
    let v = json!({"outer": {"inner": 1}});
    assert_eq!(
        toon::encode_to_string(&v, &opts).unwrap(),
        "outer:\n    inner: 1"
    );
}
