use criterion::{criterion_group, criterion_main};
use criterion::{AxisScale, BatchSize, BenchmarkId, Criterion, PlotConfiguration};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rlbwt_lcp::rlbwt::{DenseFposIndex, Rlbwt, WaveletFposIndex};
use rlbwt_lcp::{BellerEnumerator, EnumMode};

fn binary_bwt(n: usize) -> Vec<u8> {
    let mut rng: StdRng = SeedableRng::from_seed([0; 32]);
    let mut text = (0..n)
        .map(|_| if rng.gen_bool(0.5) { b'a' } else { b'b' })
        .collect::<Vec<_>>();
    text.push(0);
    // Not an actual BWT permutation, but a fine stand-in for benchmarking
    // run-length construction cost on binary-alphabet inputs.
    text
}

pub fn bench(c: &mut Criterion) {
    let plot_config = PlotConfiguration::default().summary_scale(AxisScale::Logarithmic);
    let mut group = c.benchmark_group("construction");
    group.plot_config(plot_config);
    for n in [1000usize, 10_000usize, 100_000usize, 1_000_000].iter() {
        group.bench_with_input(BenchmarkId::new("Rlbwt/dense", n), n, |b, &n| {
            b.iter_batched(
                || binary_bwt(n),
                |bwt| Rlbwt::<DenseFposIndex>::from_bwt_bytes(bwt.into_iter()),
                BatchSize::SmallInput,
            )
        });

        group.bench_with_input(BenchmarkId::new("Rlbwt/wavelet", n), n, |b, &n| {
            b.iter_batched(
                || binary_bwt(n),
                |bwt| Rlbwt::<WaveletFposIndex>::from_bwt_bytes_wavelet(bwt.into_iter()),
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

pub fn bench_beller(c: &mut Criterion) {
    let plot_config = PlotConfiguration::default().summary_scale(AxisScale::Logarithmic);
    let mut group = c.benchmark_group("beller_enumeration");
    group.plot_config(plot_config);
    for n in [1000usize, 10_000usize, 100_000usize].iter() {
        group.bench_with_input(BenchmarkId::new("intervals", n), n, |b, &n| {
            b.iter_batched(
                || Rlbwt::<DenseFposIndex>::from_bwt_bytes(binary_bwt(n).into_iter()).unwrap(),
                |rlbwt| {
                    let enumerator = BellerEnumerator::new(&rlbwt, EnumMode::Intervals);
                    enumerator.count()
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, bench, bench_beller);
criterion_main!(benches);
