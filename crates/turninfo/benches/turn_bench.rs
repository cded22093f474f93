//! Criterion benchmarks for turn classification.
//! Inputs: seeded grid window pairs, with and without verification.
//! Results: by default under target/criterion.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use turninfo::api::{
    collect_turns, draw_window_pairs, get_turn_info, CartesianStrategy, Point, SampleCfg, Turn,
    TurnCfg, TurnSet, VerifyPolicy, WindowPair,
};

fn windows(jitter: f64, n: u64) -> Vec<WindowPair> {
    let cfg = SampleCfg {
        jitter,
        ..SampleCfg::default()
    };
    draw_window_pairs(cfg, 42, n).map(|(_, w)| w).collect()
}

fn bench_dispatch(c: &mut Criterion) {
    let strategy = CartesianStrategy::default();
    let template: Turn = Turn::default();
    let mut group = c.benchmark_group("get_turn_info");
    let n = 1024;
    group.throughput(Throughput::Elements(n));
    for (name, jitter) in [("grid", 0.0), ("jitter", 1e-12)] {
        let pairs = windows(jitter, n);
        for (policy, verify) in [("all", VerifyPolicy::ALL), ("nothing", VerifyPolicy::NOTHING)] {
            let cfg = TurnCfg {
                verify,
                ..TurnCfg::default()
            };
            group.bench_with_input(BenchmarkId::new(name, policy), &pairs, |b, pairs| {
                b.iter(|| {
                    let mut count = 0usize;
                    for w in pairs {
                        let Ok((rp, rq)) = w.ranges() else { continue };
                        let set: TurnSet = get_turn_info(&rp, &rq, &template, &strategy, &cfg)
                            .unwrap_or_default();
                        count += set.len();
                    }
                    count
                })
            });
        }
    }
    group.finish();
}

fn regular_ring(n: usize, radius: f64, phase: f64) -> Vec<Point> {
    let mut ring: Vec<Point> = (0..n)
        .map(|k| {
            let a = phase + std::f64::consts::TAU * k as f64 / n as f64;
            Point::new(radius * a.cos(), radius * a.sin())
        })
        .collect();
    ring.push(ring[0]);
    ring
}

fn bench_collect(c: &mut Criterion) {
    let strategy = CartesianStrategy::default();
    let cfg = TurnCfg::default();
    let mut group = c.benchmark_group("collect_turns");
    for &n in &[8usize, 32, 128] {
        let p = regular_ring(n, 1.0, 0.0);
        let q = regular_ring(n, 1.05, 0.1);
        group.bench_with_input(BenchmarkId::new("regular", n), &n, |b, _| {
            b.iter(|| collect_turns(&p, &q, &strategy, &cfg).map(|t| t.len()))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_dispatch, bench_collect);
criterion_main!(benches);
