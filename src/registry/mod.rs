//! Sound registry - the shared set of loaded clips
//!
//! The registry is copy-on-write. A reload decodes every clip into a fresh
//! `Arc<[SoundClip]>` without blocking readers, then publishes it with a
//! single pointer swap. Readers clone the current `Arc` and work against
//! that snapshot, so they never see a half-built list.
//!
//! ```text
//!   reload ──► parse playlist ──► decode clips ──► swap Arc ──► readers
//!                                      │
//!                        failures become diagnostics
//! ```
//!
//! Reloads are serialized by their own mutex; `pick_random` only takes the
//! read side of the `RwLock` for as long as it takes to clone the `Arc`.

mod report;

use std::{
    io::Read,
    sync::{Arc, Mutex, Once, PoisonError, RwLock},
};

use rand::Rng;

pub use report::{ReloadOutcome, ReloadReport};

use crate::{
    clip::SoundClip,
    config::{Locator, SoundConfig},
    error::SoundError,
    playlist::{parse_playlist, PlaylistEntry},
    resource::ResourceSource,
};

pub struct SoundRegistry {
    resources: Box<dyn ResourceSource>,
    config: SoundConfig,
    clips: RwLock<Arc<[SoundClip]>>,
    reload_lock: Mutex<()>,
    init: Once,
}

impl SoundRegistry {
    /// Create an empty registry. Nothing is loaded until first use.
    pub fn new<S: ResourceSource + 'static>(resources: S, config: SoundConfig) -> Self {
        Self {
            resources: Box::new(resources),
            config,
            clips: RwLock::new(Arc::from(Vec::new())),
            reload_lock: Mutex::new(()),
            init: Once::new(),
        }
    }

    pub fn config(&self) -> &SoundConfig {
        &self.config
    }

    /// Load the configured playlist if no load has happened yet.
    ///
    /// Exactly one caller performs the load and receives its report; every
    /// other caller (including concurrent ones, which wait for it) gets
    /// `None`. An explicit [`reload`](Self::reload) also counts as the
    /// initial load.
    pub fn ensure_initialized(&self) -> Option<ReloadReport> {
        let mut report = None;
        self.init.call_once(|| {
            report = Some(self.reload_locked(&self.config.locator));
        });
        report
    }

    /// Rebuild the registry from a playlist.
    ///
    /// Never fails: problems are logged and returned in the report, and the
    /// registry keeps its previous contents unless sounds were disabled or a
    /// non-empty set was loaded.
    pub fn reload(&self, locator: &Locator) -> ReloadReport {
        // Waits for a running lazy init, or marks init as done.
        self.init.call_once(|| {});
        self.reload_locked(locator)
    }

    /// Reload from a locator string, honoring the disable token.
    pub fn reload_from(&self, value: &str) -> ReloadReport {
        let locator = self.config.locator_for(value);
        self.reload(&locator)
    }

    /// Reload the playlist this registry was configured with.
    pub fn reload_configured(&self) -> ReloadReport {
        self.reload(&self.config.locator)
    }

    /// Pick a uniformly random clip, or `None` when no sounds are loaded.
    pub fn pick_random<R: Rng>(&self, rng: &mut R) -> Option<SoundClip> {
        self.ensure_initialized();
        let clips = self.snapshot();
        if clips.is_empty() {
            return None;
        }
        let index = rng.random_range(0..clips.len());
        Some(clips[index].clone())
    }

    /// [`pick_random`](Self::pick_random) using the thread-local generator.
    pub fn pick_random_default(&self) -> Option<SoundClip> {
        self.pick_random(&mut rand::rng())
    }

    /// The current set of clips.
    pub fn snapshot(&self) -> Arc<[SoundClip]> {
        let clips = self.clips.read().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(&clips)
    }

    pub fn len(&self) -> usize {
        self.snapshot().len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshot().is_empty()
    }

    /// Source paths of the current clips, in playlist order.
    pub fn sources(&self) -> Vec<String> {
        self.snapshot()
            .iter()
            .map(|clip| clip.source().to_string())
            .collect()
    }

    fn reload_locked(&self, locator: &Locator) -> ReloadReport {
        let _guard = self
            .reload_lock
            .lock()
            .unwrap_or_else(PoisonError::into_inner);

        let mut report = ReloadReport::new(locator.clone());
        let requested = match locator {
            Locator::Disabled => {
                self.publish(Arc::from(Vec::new()));
                report.outcome = ReloadOutcome::Disabled;
                log::info!("sounds disabled");
                return report;
            }
            Locator::Path(path) => path,
        };

        let kept = self.len();
        report.outcome = ReloadOutcome::Unchanged { kept };

        let Some((config, reader)) = self.open_config(requested, &mut report) else {
            return report;
        };
        report.config = Some(config.clone());

        let text = match read_text(reader) {
            Ok(text) => text,
            Err(source) => {
                report.push(SoundError::Io { config, source });
                return report;
            }
        };

        let clips: Vec<SoundClip> = parse_playlist(&text)
            .iter()
            .filter_map(|entry| self.load_entry(&config, entry, &mut report))
            .collect();

        if clips.is_empty() {
            report.push(SoundError::NoEntriesLoaded { config, kept });
            return report;
        }

        let count = clips.len();
        self.publish(Arc::from(clips));
        report.outcome = ReloadOutcome::Loaded { count };
        log::info!(
            "loaded {} sound(s) from `{}` ({} skipped)",
            count,
            config,
            report.skipped_entries().count()
        );
        report
    }

    /// Open the requested playlist, falling back to the default one.
    fn open_config(
        &self,
        requested: &str,
        report: &mut ReloadReport,
    ) -> Option<(String, Box<dyn Read + Send>)> {
        let default = self.config.default_locator.as_str();

        let mut candidates = vec![requested];
        if requested != default {
            candidates.push(default);
        }

        for candidate in candidates {
            match self.resources.open(candidate) {
                Ok(Some(reader)) => {
                    if candidate != requested {
                        report.push(SoundError::DefaultConfigUsed {
                            requested: requested.to_string(),
                            default: default.to_string(),
                        });
                    }
                    return Some((candidate.to_string(), reader));
                }
                Ok(None) => continue,
                Err(source) => {
                    report.push(SoundError::Io {
                        config: candidate.to_string(),
                        source,
                    });
                    return None;
                }
            }
        }

        report.push(SoundError::ConfigNotFound {
            requested: requested.to_string(),
            default: default.to_string(),
        });
        None
    }

    fn load_entry(
        &self,
        config: &str,
        entry: &PlaylistEntry,
        report: &mut ReloadReport,
    ) -> Option<SoundClip> {
        let failed = |reason: String| SoundError::EntryLoadFailed {
            config: config.to_string(),
            line: entry.line,
            path: entry.path.clone(),
            reason,
        };

        let reader = match self.resources.open(&entry.path) {
            Ok(Some(reader)) => reader,
            Ok(None) => {
                report.push(SoundError::EntryNotFound {
                    config: config.to_string(),
                    line: entry.line,
                    path: entry.path.clone(),
                });
                return None;
            }
            Err(err) => {
                report.push(failed(err.to_string()));
                return None;
            }
        };

        match SoundClip::decode(&entry.path, reader) {
            Ok(clip) => {
                log::debug!(
                    "loaded `{}` ({} frames @ {} Hz)",
                    clip.source(),
                    clip.frames(),
                    clip.sample_rate()
                );
                Some(clip)
            }
            Err(err) => {
                report.push(failed(err.to_string()));
                None
            }
        }
    }

    fn publish(&self, clips: Arc<[SoundClip]>) {
        let mut current = self.clips.write().unwrap_or_else(PoisonError::into_inner);
        *current = clips;
    }
}

fn read_text(mut reader: Box<dyn Read + Send>) -> std::io::Result<String> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    Ok(text)
}
