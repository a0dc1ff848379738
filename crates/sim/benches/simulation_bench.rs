use agepop_sim::demography::{cycle_year, VitalRates};
use agepop_sim::simulation::{Population, SimulationBuilder, Statistics};
use agepop_sim::DrawStream;
use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

fn builder(initial: u32) -> SimulationBuilder {
    SimulationBuilder::new()
        .initial_population(vec![initial, initial / 2, initial / 4])
        .survival(&[0.55, 0.8, 0.7], &[0.05, 0.05, 0.1])
        .litter_size(&[0.0, 1.1, 1.6], &[0.0, 0.2, 0.3])
        .seed(42)
}

fn bench_simulation_init(c: &mut Criterion) {
    let mut group = c.benchmark_group("simulation_init");

    group.bench_function("default_init", |b| {
        b.iter(|| {
            black_box(
                builder(black_box(200))
                    .years(black_box(10))
                    .runs(black_box(10))
                    .build()
                    .unwrap(),
            );
        })
    });

    group.finish();
}

fn bench_cycle_year(c: &mut Criterion) {
    let mut group = c.benchmark_group("cycle_year");

    for size in [100u32, 1_000, 10_000] {
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::new("one_year", size), &size, |b, &size| {
            b.iter_batched(
                || {
                    let mut pop = Population::with_counts(&[size, 0, 0]);
                    pop.set_rates(VitalRates {
                        survival: vec![0.6, 0.8, 0.7],
                        litter_size: vec![0.0, 1.0, 1.5],
                    });
                    (pop, Statistics::zeroed(1, 1, 3), DrawStream::seeded(7))
                },
                |(mut pop, mut stats, mut source)| {
                    black_box(cycle_year(&mut pop, &mut source, &mut stats, 0, 1));
                    black_box(pop)
                },
                criterion::BatchSize::SmallInput,
            )
        });
    }

    group.finish();
}

fn bench_simulation_run(c: &mut Criterion) {
    let mut group = c.benchmark_group("simulation_run");
    let runs = 20;

    for years in [10usize, 50] {
        group.throughput(Throughput::Elements((runs * years) as u64));
        group.bench_with_input(BenchmarkId::new("run_full", years), &years, |b, &years| {
            b.iter_batched(
                || builder(200).years(years).runs(runs).build().unwrap(),
                |mut sim| {
                    sim.run();
                    black_box(sim)
                },
                criterion::BatchSize::SmallInput,
            )
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_simulation_init,
    bench_cycle_year,
    bench_simulation_run
);
criterion_main!(benches);
