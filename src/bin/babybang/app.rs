//! BabyBang - wires the registry, audio output and UI together

use color_eyre::eyre::Result as EyreResult;
use rtrb::RingBuffer;
use std::sync::Arc;

use babybang::{DirResources, Locator, SoundConfig, SoundRegistry};

use super::{player::Player, ui::UiApp, watcher};

pub struct BabyBang {
    resources: DirResources,
    config: SoundConfig,
}

impl BabyBang {
    pub fn new(resources: DirResources, config: SoundConfig) -> Self {
        Self { resources, config }
    }

    /// Run the application until the exit combination is pressed
    pub fn run(self) -> EyreResult<()> {
        let root = self.resources.root().to_path_buf();
        let registry = Arc::new(SoundRegistry::new(self.resources, self.config));
        let watched = match &registry.config().locator {
            Locator::Path(path) => Some(root.join(path.trim_start_matches('/'))),
            Locator::Disabled => None,
        };

        // Load before the terminal switches screens so diagnostics stay readable
        let status = registry
            .ensure_initialized()
            .map(|report| report.to_string())
            .unwrap_or_default();
        println!("babybang: {status}");

        // Without an output device the keys still work, just silently
        let player = match Player::start() {
            Ok(player) => Some(player),
            Err(err) => {
                log::error!("audio unavailable: {err:#}");
                None
            }
        };

        let (status_tx, status_rx) = RingBuffer::<String>::new(8);
        match watched {
            Some(playlist) => {
                watcher::spawn(registry.clone(), playlist, status_tx);
            }
            None => drop(status_tx),
        }

        let mut terminal = ratatui::init();
        let result = UiApp::new(registry, player, status_rx, status).run(&mut terminal);
        ratatui::restore();
        result
    }
}
