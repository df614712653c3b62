//! Benchmarks for signal write propagation and computed recomputation.
//!
//! Run with: cargo bench -p flui-reactivity

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use flui_reactivity::{effect, Computed, Signal};

fn bench_single_write(c: &mut Criterion) {
    c.bench_function("signal_set_no_subscribers", |b| {
        let s = Signal::new(0u64);
        let mut i = 0u64;
        b.iter(|| {
            i += 1;
            s.set(black_box(i)).unwrap();
        });
    });
}

fn bench_chained_computed(c: &mut Criterion) {
    let mut group = c.benchmark_group("computed_chain");
    for depth in [1usize, 4, 16, 64] {
        group.throughput(Throughput::Elements(depth as u64));
        group.bench_with_input(BenchmarkId::from_parameter(depth), &depth, |b, &depth| {
            let root = Signal::new(0i64);
            let mut last = Computed::new(move || root.get());
            for _ in 0..depth {
                let prev = last;
                last = Computed::new(move || prev.get().unwrap() + 1);
            }
            let leaf = last;
            let mut i = 0i64;
            b.iter(|| {
                i += 1;
                root.set(black_box(i)).unwrap();
                black_box(leaf.get().unwrap());
            });
        });
    }
    group.finish();
}

fn bench_fan_out_effects(c: &mut Criterion) {
    let mut group = c.benchmark_group("fan_out_effects");
    for width in [1usize, 8, 64, 256] {
        group.throughput(Throughput::Elements(width as u64));
        group.bench_with_input(BenchmarkId::from_parameter(width), &width, |b, &width| {
            let s = Signal::new(0i64);
            for _ in 0..width {
                effect(move || {
                    black_box(s.get());
                })
                .unwrap();
            }
            let mut i = 0i64;
            b.iter(|| {
                i += 1;
                s.set(black_box(i)).unwrap();
            });
        });
    }
    group.finish();
}

fn bench_diamond_short_circuit(c: &mut Criterion) {
    c.bench_function("diamond_unchanged_short_circuit", |b| {
        let root = Signal::new(0i64);
        let parity = Computed::new(move || root.get() % 2 == 0);
        let label = Computed::new(move || if parity.get().unwrap() { "even" } else { "odd" });
        let mut i = 0i64;
        b.iter(|| {
            // Writing +2 each time keeps parity constant, so `label`
            // should short-circuit without recomputing its own body.
            i += 2;
            root.set(black_box(i)).unwrap();
            black_box(label.get().unwrap());
        });
    });
}

criterion_group!(
    benches,
    bench_single_write,
    bench_chained_computed,
    bench_fan_out_effects,
    bench_diamond_short_circuit
);
criterion_main!(benches);
