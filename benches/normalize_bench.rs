use criterion::{Criterion, criterion_group, criterion_main};
use jsonrecover::{Options, normalize};

fn bench_normalize(c: &mut Criterion) {
    let mut group = c.benchmark_group("normalize");
    let cases = vec![
        r#"{a: 1}"#,
        r#"{ test: 'test', array: ['test', { test: 'test' }] }"#,
        r#"{
            "abc": "def"
            "ghi": "jkl"
        }"#,
        r#"{ "abc": "test" + 'test2' + `test3` }"#,
        r#"{ "abc": True, "d": None, "e": noNe }"#,
        r#"{\"@metadata\":{\"message\":\"{\\\"url\\\": \\\"hey\\\"}\"}}"#,
        "text before { a: 1 } text { b: 2 } after",
    ];
    let opts = Options::default();
    for (i, s) in cases.into_iter().enumerate() {
        group.bench_function(format!("case_{}", i), |b| {
            b.iter(|| {
                let out = normalize(std::hint::black_box(s), &opts);
                std::hint::black_box(out);
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_normalize);
criterion_main!(benches);
