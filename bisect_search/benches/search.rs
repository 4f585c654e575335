use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use bisect_search::search::{BinarySearcher, LinearSearcher, Searcher};

const SIZES: [usize; 4] = [1_000, 10_000, 100_000, 1_000_000];

fn benchmark_search(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(12345);
    let mut group = c.benchmark_group("search");

    for size in SIZES {
        let data = (0..size as u64).collect::<Vec<_>>();
        let queries = (0..1_000)
            .map(|_| rng.gen_range(0..size as u64))
            .collect::<Vec<_>>();

        group.bench_with_input(BenchmarkId::new("binary", size), &data, |b, data| {
            b.iter(|| {
                for query in &queries {
                    black_box(BinarySearcher.search(data, query));
                }
            })
        });

        group.bench_with_input(BenchmarkId::new("std", size), &data, |b, data| {
            b.iter(|| {
                for query in &queries {
                    let _ = black_box(data.binary_search(query));
                }
            })
        });

        // The scan is too slow to be worth waiting for past this.
        if size <= 10_000 {
            group.bench_with_input(BenchmarkId::new("linear", size), &data, |b, data| {
                b.iter(|| {
                    for query in &queries {
                        black_box(LinearSearcher.search(data, query));
                    }
                })
            });
        }
    }

    group.finish();
}

criterion_group!(name = benches;
    config = Criterion::default().sample_size(10);
    targets = benchmark_search);
criterion_main!(benches);
