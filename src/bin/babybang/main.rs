//! babybang - keyboard smashing for small people
//!
//! Run with: cargo run
//!
//! Every key press shows the key and plays a random sound from the
//! playlist. Quit with Alt+Shift+Q.
//!
//! Environment:
//!   BABYBANG_RESOURCES      resource directory (default: `resources`)
//!   BABYBANG_SOUNDS_CONFIG  playlist inside it, or `no.sounds` for silence
//!   RUST_LOG                log filter (default: `warn`)

mod app;
mod player;
mod ui;
mod watcher;

use app::BabyBang;
use babybang::{DirResources, SoundConfig};

const RESOURCES_ENV: &str = "BABYBANG_RESOURCES";
const DEFAULT_RESOURCES: &str = "resources";

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let root = std::env::var(RESOURCES_ENV).unwrap_or_else(|_| DEFAULT_RESOURCES.to_string());

    BabyBang::new(DirResources::new(root), SoundConfig::from_env()).run()
}
