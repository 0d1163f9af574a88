//! Decoded, ready-to-play sound clips.

use std::{io::Read, sync::Arc, time::Duration};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClipError {
    #[error(transparent)]
    Wav(#[from] hound::Error),

    #[error("unsupported bit depth: {0}")]
    UnsupportedBitDepth(u16),

    #[error("audio has no samples")]
    Empty,

    #[error("sample rate is zero")]
    ZeroSampleRate,
}

/// A loaded sound: mono `f32` samples in `[-1, 1]` plus their sample rate.
///
/// Cloning is cheap; the sample buffer is shared.
#[derive(Debug, Clone)]
pub struct SoundClip {
    source: Arc<str>,
    samples: Arc<[f32]>,
    sample_rate: u32,
}

impl SoundClip {
    /// Build a clip from already-decoded mono samples.
    pub fn from_samples(source: &str, samples: Vec<f32>, sample_rate: u32) -> Self {
        Self {
            source: Arc::from(source),
            samples: Arc::from(samples),
            sample_rate,
        }
    }

    /// Decode a WAV stream, downmixing to mono.
    pub fn decode<R: Read>(source: &str, reader: R) -> Result<Self, ClipError> {
        let mut wav = hound::WavReader::new(reader)?;
        let spec = wav.spec();
        if spec.sample_rate == 0 {
            return Err(ClipError::ZeroSampleRate);
        }

        let interleaved: Vec<f32> = match spec.sample_format {
            hound::SampleFormat::Int => {
                if spec.bits_per_sample == 0 || spec.bits_per_sample > 32 {
                    return Err(ClipError::UnsupportedBitDepth(spec.bits_per_sample));
                }
                // Full scale for a signed integer of this width
                let scale = (1u64 << (spec.bits_per_sample - 1)) as f32;
                wav.samples::<i32>()
                    .map(|s| s.map(|v| v as f32 / scale))
                    .collect::<Result<_, _>>()?
            }
            hound::SampleFormat::Float => wav.samples::<f32>().collect::<Result<_, _>>()?,
        };

        let channels = usize::from(spec.channels.max(1));
        let samples: Vec<f32> = if channels == 1 {
            interleaved
        } else {
            interleaved
                .chunks_exact(channels)
                .map(|frame| frame.iter().sum::<f32>() / channels as f32)
                .collect()
        };

        if samples.is_empty() {
            return Err(ClipError::Empty);
        }

        // NaN and infinities play as silence
        let samples = samples
            .into_iter()
            .map(|s| if s.is_finite() { s.clamp(-1.0, 1.0) } else { 0.0 })
            .collect();
        Ok(Self::from_samples(source, samples, spec.sample_rate))
    }

    /// Resource path this clip was loaded from.
    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn samples(&self) -> &[f32] {
        &self.samples
    }

    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    pub fn frames(&self) -> usize {
        self.samples.len()
    }

    pub fn duration(&self) -> Duration {
        if self.sample_rate == 0 {
            return Duration::ZERO;
        }
        Duration::from_secs_f64(self.samples.len() as f64 / self.sample_rate as f64)
    }
}
