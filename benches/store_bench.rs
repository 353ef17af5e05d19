// Store and text benchmarks
//
// - set: inserting fresh keys and overwriting existing ones
// - increase: numeric updates on hot keys
// - remove: deleting from the middle of the key order
// - sort/shuffle: reordering whole stores
// - to_json: rendering in key order
// - text: codepoint substring and indexed access on multi-byte text

use criterion::{
    black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput,
};
use rand::rngs::StdRng;
use rand::SeedableRng;

use satchel::{SortOrder, Store, Text};

const SIZES: [usize; 3] = [100, 1_000, 10_000];

fn filled(n: usize) -> Store {
    return (0..n).map(|i| (format!("key{i:06}"), i as u64)).collect();
}

// =============================================================================
// Store benchmarks
// =============================================================================

fn bench_set(c: &mut Criterion) {
    let mut group = c.benchmark_group("store_set");
    for n in SIZES {
        group.throughput(Throughput::Elements(n as u64));
        group.bench_with_input(BenchmarkId::new("fresh", n), &n, |b, &n| {
            b.iter(|| black_box(filled(n)));
        });
        group.bench_with_input(BenchmarkId::new("overwrite", n), &n, |b, &n| {
            let mut store = filled(n);
            b.iter(|| {
                for i in 0..n {
                    store.set(format!("key{i:06}"), black_box(0));
                }
            });
        });
    }
    group.finish();
}

fn bench_increase(c: &mut Criterion) {
    let mut group = c.benchmark_group("store_increase");
    for n in SIZES {
        let mut store = filled(n);
        let key = format!("key{:06}", n / 2);
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, _| {
            b.iter(|| store.increase_by(&key, black_box(1)).map(|_| ()));
        });
    }
    group.finish();
}

fn bench_remove(c: &mut Criterion) {
    let mut group = c.benchmark_group("store_remove");
    for n in SIZES {
        let base = filled(n);
        let key = format!("key{:06}", n / 2);
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, _| {
            b.iter_batched(
                || base.clone(),
                |mut store| black_box(store.remove(&key)),
                criterion::BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

fn bench_reorder(c: &mut Criterion) {
    let mut group = c.benchmark_group("store_reorder");
    for n in SIZES {
        let base = filled(n);
        group.throughput(Throughput::Elements(n as u64));
        group.bench_with_input(BenchmarkId::new("sort_desc", n), &n, |b, _| {
            let mut store = base.clone();
            b.iter(|| {
                store.sort(SortOrder::Desc).sort(SortOrder::Asc);
            });
        });
        group.bench_with_input(BenchmarkId::new("shuffle", n), &n, |b, _| {
            let mut store = base.clone();
            let mut rng = StdRng::seed_from_u64(42);
            b.iter(|| {
                store.shuffle_with(&mut rng);
            });
        });
    }
    group.finish();
}

fn bench_to_json(c: &mut Criterion) {
    let mut group = c.benchmark_group("store_to_json");
    for n in SIZES {
        let store = filled(n);
        group.throughput(Throughput::Elements(n as u64));
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, _| {
            b.iter(|| black_box(store.to_json()));
        });
    }
    group.finish();
}

// =============================================================================
// Text benchmarks
// =============================================================================

fn bench_text(c: &mut Criterion) {
    let mut group = c.benchmark_group("text");
    let text = Text::new("héllo wörld 😀 ".repeat(500));
    let middle = text.length() / 2;

    group.bench_function("length", |b| b.iter(|| black_box(text.length())));
    group.bench_function("substring_middle", |b| {
        b.iter(|| black_box(text.substring(middle, Some(64))))
    });
    group.bench_function("offset_get_middle", |b| {
        b.iter(|| black_box(text.offset_get(middle)))
    });
    group.bench_function("pos_missing", |b| b.iter(|| black_box(text.pos("absent"))));
    group.finish();
}

criterion_group!(
    benches,
    bench_set,
    bench_increase,
    bench_remove,
    bench_reorder,
    bench_to_json,
    bench_text,
);
criterion_main!(benches);
