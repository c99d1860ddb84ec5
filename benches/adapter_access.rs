//! Criterion benchmarks for per-adapter random reads.
//!
//! The CLI measures one 50,000-read sweep per trial; these benches give the
//! statistically sampled view of the same access loop for each adapter.
//!
//! Run with: cargo bench --bench adapter_access

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use cseq_bench::access::{self, ACCESS_SEED};
use cseq_bench::encoding::{EncodedSequence, Uncompressed, CANDIDATES};
use cseq_bench::workload::{self, WORKLOAD_SEED};

const NUM_ELEMENTS: usize = 100_000;
const NUM_READS: usize = 10_000;

fn sweep(encoding: &dyn EncodedSequence, positions: &[usize]) -> u64 {
    let mut sum = 0u64;
    for &pos in positions {
        sum = sum.wrapping_add(encoding.read(pos));
    }
    sum
}

fn bench_random_access(c: &mut Criterion) {
    let values = workload::generate(NUM_ELEMENTS, 32, WORKLOAD_SEED);
    let positions = access::sample(NUM_READS, NUM_ELEMENTS, ACCESS_SEED);

    let mut group = c.benchmark_group("adapter_access/random_pass");
    group.throughput(Throughput::Elements(NUM_READS as u64));

    let baseline = Uncompressed::build(&values);
    group.bench_function(BenchmarkId::from_parameter("uncompressed"), |b| {
        b.iter(|| sweep(black_box(&baseline), &positions))
    });

    for candidate in CANDIDATES {
        let encoding = (candidate.build)(&values).unwrap();
        group.bench_function(BenchmarkId::from_parameter(candidate.name), |b| {
            b.iter(|| sweep(black_box(encoding.as_ref()), &positions))
        });
    }

    group.finish();
}

fn bench_sorted_access(c: &mut Criterion) {
    let values = workload::to_ordered(&workload::generate(NUM_ELEMENTS, 32, WORKLOAD_SEED));
    let positions = access::sample(NUM_READS, NUM_ELEMENTS, ACCESS_SEED);

    let mut group = c.benchmark_group("adapter_access/sorted_pass");
    group.throughput(Throughput::Elements(NUM_READS as u64));

    for candidate in CANDIDATES {
        let encoding = (candidate.build)(&values).unwrap();
        group.bench_function(BenchmarkId::from_parameter(candidate.name), |b| {
            b.iter(|| sweep(black_box(encoding.as_ref()), &positions))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_random_access, bench_sorted_access);
criterion_main!(benches);
