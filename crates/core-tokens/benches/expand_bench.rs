use core_tokens::{expand, ExpandOptions};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn bench_expand(c: &mut Criterion) {
    let opts = ExpandOptions::default();
    let plain = "just a plain directory name with no markup at all";
    let styled = "{h1}my-project{/} {dim}2026-07-28{/} {highlight}main{/}";

    c.bench_function("expand_plain", |b| {
        b.iter(|| expand(black_box(plain), black_box(&opts)))
    });

    c.bench_function("expand_styled", |b| {
        b.iter(|| expand(black_box(styled), black_box(&opts)))
    });
}

criterion_group!(benches, bench_expand);
criterion_main!(benches);
