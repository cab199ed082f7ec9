use criterion::{black_box, criterion_group, criterion_main, Criterion};

use docstore_etl::processing::{preprocess, CleanOptions};
use docstore_etl::types::{DataSet, Schema, Value};

fn adult_like_dataset(rows: usize) -> DataSet {
    let schema = Schema::new(vec![
        "age".to_string(),
        "workclass".to_string(),
        "salary".to_string(),
    ]);
    let rows = (0..rows)
        .map(|i| {
            vec![
                Value::Utf8(format!("{}", 20 + (i % 50))),
                Value::Utf8(if i % 7 == 0 {
                    "?".to_string()
                } else {
                    " State-gov ".to_string()
                }),
                Value::Utf8("<=50K".to_string()),
            ]
        })
        .collect();
    DataSet::new(schema, rows)
}

fn bench_preprocess(c: &mut Criterion) {
    let ds = adult_like_dataset(10_000);
    let opts = CleanOptions::default();

    c.bench_function("preprocess_10k_rows", |b| {
        b.iter(|| preprocess(black_box(&ds), &[], &opts))
    });
}

criterion_group!(benches, bench_preprocess);
criterion_main!(benches);
