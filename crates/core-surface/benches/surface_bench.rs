use core_surface::Surface;
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

fn write_and_flush(c: &mut Criterion) {
    c.bench_function("write_80x24_and_queue", |b| {
        b.iter(|| {
            let mut s = Surface::new(0, 0, 24, 80);
            for row in 0..24 {
                s.write_str(row, 0, black_box("the quick brown fox jumps over the lazy dog"));
            }
            let mut sink = Vec::with_capacity(4096);
            s.refresh_into(&mut sink).unwrap();
            black_box(sink)
        })
    });

    c.bench_function("blank_rect_and_queue", |b| {
        let mut s = Surface::new(0, 0, 24, 80);
        for row in 0..24 {
            s.write_str(row, 0, "x".repeat(80).as_str());
        }
        let mut sink = Vec::with_capacity(4096);
        s.refresh_into(&mut sink).unwrap();
        b.iter(|| {
            s.blank_rect(4, 10, 8, 30);
            sink.clear();
            s.refresh_into(&mut sink).unwrap();
            black_box(sink.len())
        })
    });
}

criterion_group!(benches, write_and_flush);
criterion_main!(benches);
