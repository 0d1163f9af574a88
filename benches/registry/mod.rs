//! Registry benchmarks and shared fixtures.

mod pick;
mod reload;

pub use pick::bench_pick;
pub use reload::bench_reload;

use std::io::Cursor;

use babybang::{Locator, MemoryResources, SoundConfig, SoundRegistry};

pub const PLAYLIST: &str = "bench.sounds";

/// A registry whose playlist holds `size` short clips.
pub fn registry(size: usize) -> SoundRegistry {
    let spec = hound::WavSpec {
        channels: 1,
        sample_rate: 48_000,
        bits_per_sample: 16,
        sample_format: hound::SampleFormat::Int,
    };

    let mut resources = MemoryResources::new();
    let mut playlist = String::new();
    for i in 0..size {
        let mut buf = Cursor::new(Vec::new());
        let mut writer = hound::WavWriter::new(&mut buf, spec).unwrap();
        for n in 0..4_800 {
            writer.write_sample(((n * 7 + i) % 2_000) as i16).unwrap();
        }
        writer.finalize().unwrap();

        let name = format!("clip{i}.wav");
        resources.insert(&name, buf.into_inner());
        playlist.push_str(&name);
        playlist.push('\n');
    }
    resources.insert(PLAYLIST, playlist);

    let config = SoundConfig::default().with_locator(Locator::Path(PLAYLIST.into()));
    SoundRegistry::new(resources, config)
}
