use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use growstr::GrowableString;

fn bench_push_back(c: &mut Criterion) {
    let mut group = c.benchmark_group("push_back");

    for size in [64usize, 1024, 16384] {
        group.bench_with_input(BenchmarkId::new("amortized", size), &size, |b, &size| {
            b.iter(|| {
                let mut text = GrowableString::new().unwrap();
                for i in 0..size {
                    text.push_back(b'a' + (i % 26) as u8).unwrap();
                }
                black_box(text.len())
            });
        });
    }

    group.finish();
}

fn bench_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("search");

    let mut haystack = Vec::with_capacity(16384);
    for i in 0..16384usize {
        haystack.push(b'a' + (i % 7) as u8);
    }
    haystack.extend_from_slice(b"needle");
    let text = GrowableString::from_bytes(&haystack).unwrap();

    group.bench_function("find", |b| {
        b.iter(|| black_box(text.find(0, b'n')));
    });
    group.bench_function("find_substring", |b| {
        b.iter(|| black_box(text.find_substring(0, b"needle")));
    });

    group.finish();
}

fn bench_insert(c: &mut Criterion) {
    c.bench_function("insert_front_1024", |b| {
        b.iter(|| {
            let mut text = GrowableString::new().unwrap();
            for _ in 0..1024 {
                text.insert_char(0, b'x').unwrap();
            }
            black_box(text.len())
        });
    });
}

criterion_group!(benches, bench_push_back, bench_search, bench_insert);
criterion_main!(benches);
