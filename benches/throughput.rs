use criterion::{criterion_group, criterion_main, Criterion};
use guardring::RingBuffer;
use std::hint::black_box;

fn bench_throughput(c: &mut Criterion) {
    let mut rb: RingBuffer = RingBuffer::new(1024).unwrap();

    c.bench_function("put_get_roundtrip_u32", |b| {
        b.iter(|| {
            rb.put(black_box(0x11)).unwrap();
            black_box(rb.get().unwrap());
        })
    });

    c.bench_function("fill_drain_1024_u32", |b| {
        b.iter(|| {
            for value in 0..1024u32 {
                rb.put(value).unwrap();
            }
            while let Ok(value) = rb.get() {
                black_box(value);
            }
        })
    });

    c.bench_function("verify_integrity", |b| b.iter(|| black_box(rb.verify_integrity())));
}

criterion_group!(benches, bench_throughput);
criterion_main!(benches);
