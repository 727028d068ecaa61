use criterion::{black_box, criterion_group, criterion_main, Criterion};
use lispc::{expand, preprocess, read, SpecialFormRegistry};

const SOURCE: &str = r#"
; sample translation unit
(define counter 0)
(define buf[256]:unsigned-int)
(while (lt counter 256)
    (set buf counter (mul counter counter)) ; squares
    (set counter (add counter 1)))
(print "done" '(counter buf) [1 2 3]:my-type)
"#;

fn preprocess_benchmark(c: &mut Criterion) {
    c.bench_function("preprocess sample unit", |b| {
        b.iter(|| preprocess(black_box(SOURCE)).unwrap())
    });
}

fn read_benchmark(c: &mut Criterion) {
    let normalized = preprocess(SOURCE).unwrap();

    c.bench_function("read sample unit", |b| {
        b.iter(|| read(black_box(&normalized)).unwrap())
    });
}

fn expand_benchmark(c: &mut Criterion) {
    let normalized = preprocess(SOURCE).unwrap();
    let root = read(&normalized).unwrap();
    let forms = SpecialFormRegistry::new();

    c.bench_function("expand sample unit", |b| {
        b.iter(|| expand(black_box(&root), &forms).unwrap())
    });
}

criterion_group!(
    benches,
    preprocess_benchmark,
    read_benchmark,
    expand_benchmark
);
criterion_main!(benches);
