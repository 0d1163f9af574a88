use std::{
    hint::black_box,
    sync::atomic::{AtomicBool, Ordering},
    thread,
};

use criterion::{BenchmarkId, Criterion};
use rand::{rngs::StdRng, SeedableRng};

use crate::PLAYLIST_SIZES;

pub fn bench_pick(c: &mut Criterion) {
    let mut group = c.benchmark_group("registry/pick");

    for &size in PLAYLIST_SIZES {
        let registry = super::registry(size);
        registry.ensure_initialized();
        let mut rng = StdRng::seed_from_u64(7);

        group.bench_with_input(BenchmarkId::new("idle", size), &size, |b, _| {
            b.iter(|| black_box(registry.pick_random(&mut rng)))
        });

        // Same pick while another thread reloads as fast as it can
        let stop = AtomicBool::new(false);
        thread::scope(|s| {
            s.spawn(|| {
                while !stop.load(Ordering::Relaxed) {
                    registry.reload_configured();
                }
            });

            group.bench_with_input(BenchmarkId::new("reloading", size), &size, |b, _| {
                b.iter(|| black_box(registry.pick_random(&mut rng)))
            });

            stop.store(true, Ordering::Relaxed);
        });
    }

    group.finish();
}
