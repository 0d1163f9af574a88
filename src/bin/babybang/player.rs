//! Player - one clip at a time on the default output device
//!
//! The UI thread hands clips to the audio callback through an rtrb ring.
//! The callback plays the most recent clip, resampling by nearest sample,
//! and clears the shared `playing` flag when it runs out.

use color_eyre::eyre::{eyre, Result as EyreResult, WrapErr};
use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};
use rtrb::{Consumer, Producer, RingBuffer};
use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};

use babybang::SoundClip;

/// Output gain applied to every clip
const GAIN: f32 = 0.8;
const CLIP_QUEUE_LEN: usize = 4;

/// UI-side handle to the audio stream
pub struct Player {
    clips: Producer<SoundClip>,
    playing: Arc<AtomicBool>,
    /// Keeps the stream alive
    _stream: cpal::Stream,
}

impl Player {
    /// Open the default output device and start an (initially silent) stream
    pub fn start() -> EyreResult<Self> {
        let host = cpal::default_host();
        let device = host
            .default_output_device()
            .ok_or_else(|| eyre!("no default output device available"))?;
        let config = device
            .default_output_config()
            .wrap_err("failed to fetch default output config")?;

        let sample_rate = config.sample_rate().0;
        let channels = config.channels() as usize;

        let (clips_tx, clips_rx) = RingBuffer::<SoundClip>::new(CLIP_QUEUE_LEN);
        let playing = Arc::new(AtomicBool::new(false));

        let stream = device
            .build_output_stream(
                &config.into(),
                {
                    let mut voice = ClipVoice::new(clips_rx, sample_rate, playing.clone());
                    move |data: &mut [f32], _| voice.render(data, channels)
                },
                move |err| log::error!("audio stream error: {err}"),
                None,
            )
            .wrap_err("failed to build output stream")?;

        stream.play().wrap_err("failed to start output stream")?;
        log::info!("audio output: {sample_rate} Hz, {channels} channel(s)");

        Ok(Self {
            clips: clips_tx,
            playing,
            _stream: stream,
        })
    }

    /// Whether the last clip handed over is still sounding
    pub fn is_playing(&self) -> bool {
        self.playing.load(Ordering::Acquire)
    }

    /// Queue a clip; it replaces whatever is playing
    pub fn play(&mut self, clip: SoundClip) {
        self.playing.store(true, Ordering::Release);
        if self.clips.push(clip).is_err() {
            log::warn!("clip queue full, dropping clip");
        }
    }
}

/// Audio-thread side: the clip being played and where we are in it
struct ClipVoice {
    rx: Consumer<SoundClip>,
    current: Option<SoundClip>,
    /// Position in clip samples (fractional for resampling)
    position: f64,
    /// Clip samples per output frame
    step: f64,
    output_rate: u32,
    playing: Arc<AtomicBool>,
}

impl ClipVoice {
    fn new(rx: Consumer<SoundClip>, output_rate: u32, playing: Arc<AtomicBool>) -> Self {
        Self {
            rx,
            current: None,
            position: 0.0,
            step: 1.0,
            output_rate,
            playing,
        }
    }

    fn render(&mut self, data: &mut [f32], channels: usize) {
        // Newest clip wins
        while let Ok(clip) = self.rx.pop() {
            self.step = clip.sample_rate() as f64 / self.output_rate.max(1) as f64;
            self.position = 0.0;
            self.current = Some(clip);
        }

        for frame in data.chunks_mut(channels.max(1)) {
            let sample = self.next_sample();
            frame.fill(sample * GAIN);
        }
    }

    fn next_sample(&mut self) -> f32 {
        let Some(clip) = &self.current else {
            return 0.0;
        };

        match clip.samples().get(self.position as usize) {
            Some(&s) => {
                self.position += self.step;
                s
            }
            None => {
                self.current = None;
                self.playing.store(false, Ordering::Release);
                0.0
            }
        }
    }
}
