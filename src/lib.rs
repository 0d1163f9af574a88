//! Reloadable random sound registry for babybang.
//!
//! The host builds one [`SoundRegistry`] over a [`ResourceSource`], shares
//! it behind an `Arc`, and calls [`SoundRegistry::pick_random`] on every
//! key press. See `src/bin/babybang` for the terminal front end.

pub mod clip; // Decoded sound clips
pub mod config;
pub mod error;
pub mod playlist; // Playlist text format
pub mod registry;
pub mod resource; // Resource namespaces for playlists and sounds

pub use clip::{ClipError, SoundClip};
pub use config::{Locator, SoundConfig};
pub use error::SoundError;
pub use registry::{ReloadOutcome, ReloadReport, SoundRegistry};
pub use resource::{DirResources, MemoryResources, ResourceSource};
