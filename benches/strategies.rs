use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::{rngs::StdRng, Rng, SeedableRng};
use rod_cutting::{PriceTable, RodCutter, Strategy};

fn random_prices(rng: &mut StdRng, max_length: usize) -> PriceTable<u64> {
    // Roughly linear in length with noise, so optimal cuts vary.
    PriceTable::from_prices((1..=max_length).map(|len| len as u64 * 3 + rng.gen_range(0..5)))
}

fn bench_polynomial_strategies(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(42);
    let prices = random_prices(&mut rng, 2_000);

    let mut group = c.benchmark_group("rod_cut_quadratic");
    for strategy in [Strategy::Memoized, Strategy::BottomUp, Strategy::Extended] {
        let cutter = RodCutter::with_strategy(prices.clone(), strategy);
        for &len in &[100usize, 500, 2_000] {
            group.bench_with_input(BenchmarkId::new(strategy.as_str(), len), &len, |b, &len| {
                b.iter(|| black_box(cutter.revenue(black_box(len)).unwrap()))
            });
        }
    }
    group.finish();
}

fn bench_solve(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(7);
    let cutter = RodCutter::new(random_prices(&mut rng, 1_000));
    c.bench_function("solve_with_cuts_1000", |b| {
        b.iter(|| black_box(cutter.solve(black_box(1_000)).unwrap()))
    });
}

criterion_group!(benches, bench_polynomial_strategies, bench_solve);
criterion_main!(benches);
