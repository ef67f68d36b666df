use criterion::{Criterion, black_box, criterion_group, criterion_main};
use rust_qr_gen::{Encoder, MaskStrategy, RenderOptions, read, render};

fn bench_encode_short(c: &mut Criterion) {
    let encoder = Encoder::with_strategy(MaskStrategy::Sequential);
    c.bench_function("encode_hello_v1", |b| {
        b.iter(|| encoder.encode(black_box("HELLO")))
    });
}

fn bench_encode_long(c: &mut Criterion) {
    let encoder = Encoder::with_strategy(MaskStrategy::Sequential);
    let text = "x".repeat(271);
    c.bench_function("encode_271_bytes_v10", |b| {
        b.iter(|| encoder.encode(black_box(&text)))
    });
}

fn bench_mask_strategies(c: &mut Criterion) {
    let text = "m".repeat(200);
    let sequential = Encoder::with_strategy(MaskStrategy::Sequential);
    let parallel = Encoder::with_strategy(MaskStrategy::Parallel);

    c.bench_function("encode_200_bytes_sequential_masks", |b| {
        b.iter(|| sequential.encode(black_box(&text)))
    });
    c.bench_function("encode_200_bytes_parallel_masks", |b| {
        b.iter(|| parallel.encode(black_box(&text)))
    });
}

fn bench_read_back(c: &mut Criterion) {
    let code = Encoder::with_strategy(MaskStrategy::Sequential)
        .encode(&"r".repeat(200))
        .unwrap();
    c.bench_function("read_200_bytes_v9", |b| b.iter(|| read(black_box(&code))));
}

fn bench_render(c: &mut Criterion) {
    let code = Encoder::with_strategy(MaskStrategy::Sequential)
        .encode(&"p".repeat(271))
        .unwrap();
    let options = RenderOptions::default();
    c.bench_function("render_v10_default_scale", |b| {
        b.iter(|| render(black_box(&code), black_box(&options)))
    });
}

criterion_group!(
    benches,
    bench_encode_short,
    bench_encode_long,
    bench_mask_strategies,
    bench_read_back,
    bench_render,
);
criterion_main!(benches);
