//! Playlist watcher - reloads the registry when the playlist file changes
//!
//! Runs on its own thread and polls the file's modification time. Reload
//! summaries go back to the UI over an rtrb ring; the thread exits once the
//! UI drops its end.

use rtrb::Producer;
use std::{
    path::{Path, PathBuf},
    sync::Arc,
    thread::{self, JoinHandle},
    time::{Duration, SystemTime},
};

use babybang::SoundRegistry;

const POLL_INTERVAL: Duration = Duration::from_secs(1);

pub fn spawn(
    registry: Arc<SoundRegistry>,
    playlist: PathBuf,
    mut status_tx: Producer<String>,
) -> JoinHandle<()> {
    thread::spawn(move || {
        let mut last_seen = modified(&playlist);
        log::debug!("watching {}", playlist.display());

        while !status_tx.is_abandoned() {
            thread::sleep(POLL_INTERVAL);

            let now = modified(&playlist);
            if now == last_seen {
                continue;
            }
            last_seen = now;

            let report = registry.reload_configured();
            // UI only shows the latest summary, drop if it's behind
            let _ = status_tx.push(report.to_string());
        }
    })
}

fn modified(path: &Path) -> Option<SystemTime> {
    path.metadata().and_then(|meta| meta.modified()).ok()
}
