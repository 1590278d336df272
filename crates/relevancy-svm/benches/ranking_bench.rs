use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use relevancy_core::config::RelevancyConfig;
use relevancy_core::traits::IRelevancyIndex;
use relevancy_svm::kernel::histogram_intersection;
use relevancy_svm::SvmHikRelevancyIndex;
use test_fixtures::synthetic_descriptors;

const DIMS: usize = 128;

fn bench_kernel(c: &mut Criterion) {
    let vectors = synthetic_descriptors("bench", 2, DIMS, 7);
    c.bench_function("histogram_intersection_128d", |b| {
        b.iter(|| histogram_intersection(black_box(vectors[0].vector()), black_box(vectors[1].vector())))
    });
}

fn bench_rank(c: &mut Criterion) {
    let mut group = c.benchmark_group("rank_10k");
    let index = synthetic_descriptors("index", 10_000, DIMS, 1);
    let positives = synthetic_descriptors("query", 5, DIMS, 2);

    for (label, multiprocess) in [("sequential", false), ("parallel", true)] {
        let mut engine = SvmHikRelevancyIndex::new(RelevancyConfig {
            multiprocess_fetch: multiprocess,
            ..Default::default()
        })
        .unwrap();
        engine.build_index(index.clone()).unwrap();

        group.bench_with_input(BenchmarkId::from_parameter(label), &positives, |b, pos| {
            b.iter(|| engine.rank(black_box(pos), &[]).unwrap())
        });
    }
    group.finish();
}

criterion_group!(benches, bench_kernel, bench_rank);
criterion_main!(benches);
