//! Criterion benchmarks for the sensor-coverage searches.
//!
//! Both engines run on the built-in 6x6 instance so timings reflect the
//! objective evaluation and move generation of a realistic problem.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use sensor_cover::bees::{BeesConfig, BeesProblem, BeesRunner};
use sensor_cover::coverage::SensorCoverage;
use sensor_cover::random::create_rng;
use sensor_cover::sa::{ExpSchedule, SaConfig, SaRunner};

fn bench_objective(c: &mut Criterion) {
    let problem = SensorCoverage::classic();
    let mut rng = create_rng(7);
    let states: Vec<_> = (0..64).map(|_| problem.scout(&mut rng)).collect();

    c.bench_function("objective_classic", |b| {
        b.iter(|| {
            let total: usize = states.iter().map(|s| black_box(s).objective()).sum();
            black_box(total)
        })
    });
}

fn bench_bees_classic(c: &mut Criterion) {
    let mut group = c.benchmark_group("bees_classic");
    group.sample_size(10);

    let problem = SensorCoverage::classic();
    for gens in [20usize, 100] {
        let config = BeesConfig::default().with_max_generations(gens).with_seed(42);
        group.bench_with_input(BenchmarkId::from_parameter(gens), &config, |b, cfg| {
            b.iter(|| {
                let result = BeesRunner::run(black_box(&problem), black_box(cfg));
                black_box(result)
            })
        });
    }
    group.finish();
}

fn bench_sa_classic(c: &mut Criterion) {
    let mut group = c.benchmark_group("sa_classic");
    group.sample_size(10);

    let problem = SensorCoverage::classic();
    let config = SaConfig::default().with_seed(42);
    for limit in [500usize, 2000] {
        let schedule = ExpSchedule::new(100.0, 0.005, limit);
        group.bench_with_input(BenchmarkId::from_parameter(limit), &schedule, |b, sched| {
            b.iter(|| {
                let Ok(start) = problem.state(SensorCoverage::classic_start()) else {
                    return;
                };
                let result = SaRunner::run(black_box(&problem), start, sched, &config);
                black_box(result);
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_objective, bench_bees_classic, bench_sa_classic);
criterion_main!(benches);
