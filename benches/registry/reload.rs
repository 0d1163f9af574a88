use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};

use crate::PLAYLIST_SIZES;

pub fn bench_reload(c: &mut Criterion) {
    let mut group = c.benchmark_group("registry/reload");
    group.sample_size(20);

    for &size in PLAYLIST_SIZES {
        let registry = super::registry(size);

        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, _| {
            b.iter(|| black_box(registry.reload_configured().loaded()))
        });
    }

    group.finish();
}
