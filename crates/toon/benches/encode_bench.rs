use criterion::{black_box, criterion_group, criterion_main, Criterion};
use serde_json::json;

fn tabular_payload(rows: usize) -> serde_json::Value {
    let users: Vec<serde_json::Value> = (0..rows)
        .map(|i| {
            json!({
                "id": i,
                "name": format!("user-{i}"),
                "role": if i % 3 == 0 { "admin" } else { "user" },
            })
        })
        .collect();
    json!({ "users": users })
}

fn mixed_payload(items: usize) -> serde_json::Value {
    let events: Vec<serde_json::Value> = (0..items)
        .map(|i| match i % 3 {
            0 => json!("ready"),
            1 => json!({"type": "metric", "values": [1, 2, 3]}),
            _ => json!(["nested", "list"]),
        })
        .collect();
    json!({ "events": events })
}

fn bench_encode(c: &mut Criterion) {
    let opts = toon::EncodeOptions::default();

    let tabular = tabular_payload(100);
    c.bench_function("encode_tabular_100", |b| {
        b.iter(|| toon::encode_to_string(black_box(&tabular), &opts).unwrap())
    });

    let mixed = mixed_payload(100);
    c.bench_function("encode_mixed_100", |b| {
        b.iter(|| toon::encode_to_string(black_box(&mixed), &opts).unwrap())
    });
}

criterion_group!(benches, bench_encode);
criterion_main!(benches);
