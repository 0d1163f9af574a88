//! Fixture helpers shared by the integration tests.

#![allow(dead_code)]

use std::{fs, io::Cursor, path::Path};

pub const PLAYLIST: &str = "sounds/config/test.sounds";

/// A short mono 16-bit WAV whose samples all equal `value`.
pub fn wav(value: i16, frames: usize) -> Vec<u8> {
    let spec = hound::WavSpec {
        channels: 1,
        sample_rate: 8_000,
        bits_per_sample: 16,
        sample_format: hound::SampleFormat::Int,
    };
    let mut buf = Cursor::new(Vec::new());
    let mut writer = hound::WavWriter::new(&mut buf, spec).unwrap();
    for _ in 0..frames {
        writer.write_sample(value).unwrap();
    }
    writer.finalize().unwrap();
    buf.into_inner()
}

/// Write `contents` to `root/path`, creating parent directories.
pub fn write(root: &Path, path: &str, contents: impl AsRef<[u8]>) {
    let full = root.join(path);
    if let Some(parent) = full.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(full, contents).unwrap();
}

/// Write one valid WAV per name under `root`.
pub fn write_sounds(root: &Path, names: &[&str]) {
    for (i, name) in names.iter().enumerate() {
        write(root, name, wav(i as i16 + 1, 16));
    }
}
