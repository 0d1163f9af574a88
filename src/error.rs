//! Diagnostics raised while (re)loading the sound registry.
//!
//! None of these are fatal. A reload collects them into its
//! [`ReloadReport`](crate::registry::ReloadReport) and logs them, and the
//! registry keeps serving whatever it held before.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SoundError {
    /// Neither the requested nor the default playlist could be found.
    #[error("cannot find sound config `{requested}` or default `{default}`; sounds not loaded")]
    ConfigNotFound { requested: String, default: String },

    /// The requested playlist was missing, so the default one was used.
    #[error("cannot find sound config `{requested}`, using default `{default}`")]
    DefaultConfigUsed { requested: String, default: String },

    /// A playlist line names a resource that does not exist.
    #[error("{config}:{line}: cannot find `{path}`")]
    EntryNotFound {
        config: String,
        line: usize,
        path: String,
    },

    /// A playlist line names a resource that is not playable audio.
    #[error("{config}:{line}: cannot load `{path}`: {reason}")]
    EntryLoadFailed {
        config: String,
        line: usize,
        path: String,
        reason: String,
    },

    /// The playlist parsed but none of its entries loaded.
    #[error("no sounds loaded from `{config}`; keeping the previous {kept} sound(s)")]
    NoEntriesLoaded { config: String, kept: usize },

    /// The playlist stream itself could not be read.
    #[error("cannot read sound config `{config}`: {source}")]
    Io {
        config: String,
        #[source]
        source: std::io::Error,
    },
}

impl SoundError {
    /// True for conditions that left the registry without a usable reload.
    pub fn is_error(&self) -> bool {
        matches!(self, Self::ConfigNotFound { .. } | Self::Io { .. })
    }

    pub(crate) fn log(&self) {
        if self.is_error() {
            log::error!("{self}");
        } else {
            log::warn!("{self}");
        }
    }
}
