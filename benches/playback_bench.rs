//! Trace generation and virtual-time playback throughput.
#![allow(unused_results)]

use std::sync::Arc;

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;
use sortscope::algorithms::AlgorithmRegistry;
use sortscope::playback::{PlaybackConfig, PlaybackEngine, VirtualLoop};
use sortscope::util::easing::EasingFunction;
use sortscope::validation::{random_array, ArrayBounds};

fn easing_benchmark(c: &mut Criterion) {
    let f = EasingFunction::CubicHermite { c1: 0.33, c2: 1.0 };
    c.bench_function("cubic_hermite_easing", |b| {
        b.iter(|| black_box(f.evaluate(black_box(0.5))))
    });
}

fn trace_generation_benchmark(c: &mut Criterion) {
    let registry = AlgorithmRegistry::default();
    let input = random_array(
        50,
        &ArrayBounds::default(),
        &mut StdRng::seed_from_u64(42),
    );
    let mut group = c.benchmark_group("generate_trace");

    for algorithm in registry.iter() {
        group.bench_function(algorithm.info().key, |b| {
            b.iter(|| black_box(algorithm.generate_trace(black_box(&input))))
        });
    }
    group.finish();
}

fn playback_benchmark(c: &mut Criterion) {
    let registry = AlgorithmRegistry::default();
    let mut group = c.benchmark_group("virtual_playback");

    for len in [10, 25, 50] {
        let input = random_array(
            len,
            &ArrayBounds::default(),
            &mut StdRng::seed_from_u64(7),
        );
        let trace = registry
            .get("quick")
            .map(|a| Arc::new(a.generate_trace(&input)))
            .unwrap_or_default();

        group.bench_function(format!("{len}_values"), |b| {
            b.iter(|| {
                let host = VirtualLoop::new();
                let mut engine = PlaybackEngine::new(
                    PlaybackConfig::default(),
                    host.scheduler(),
                );
                engine.on_frame(|frame| {
                    let _ = black_box(frame.bars.len());
                    Ok(())
                });
                engine.load_trace(Arc::clone(&trace));
                engine.play();
                black_box(host.run_until_idle(&mut engine))
            })
        });
    }
    group.finish();
}

criterion_group!(benches, easing_benchmark, trace_generation_benchmark, playback_benchmark);
criterion_main!(benches);
