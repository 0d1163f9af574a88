//! Result of a registry reload.

use std::fmt;

use crate::{config::Locator, error::SoundError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReloadOutcome {
    /// A new set of sounds replaced the old one.
    Loaded { count: usize },
    /// Sounds were switched off and the registry cleared.
    Disabled,
    /// Nothing usable was loaded; the previous sounds stay in place.
    Unchanged { kept: usize },
}

/// What a reload did, plus every non-fatal problem it ran into.
#[derive(Debug)]
pub struct ReloadReport {
    /// The locator the reload was asked to use.
    pub locator: Locator,
    /// The playlist that was actually read, if any.
    pub config: Option<String>,
    pub outcome: ReloadOutcome,
    pub diagnostics: Vec<SoundError>,
}

impl ReloadReport {
    pub(crate) fn new(locator: Locator) -> Self {
        Self {
            locator,
            config: None,
            outcome: ReloadOutcome::Unchanged { kept: 0 },
            diagnostics: Vec::new(),
        }
    }

    /// Log a diagnostic and keep it.
    pub(crate) fn push(&mut self, diagnostic: SoundError) {
        diagnostic.log();
        self.diagnostics.push(diagnostic);
    }

    /// Number of sounds loaded by this reload (0 unless it replaced the set).
    pub fn loaded(&self) -> usize {
        match self.outcome {
            ReloadOutcome::Loaded { count } => count,
            _ => 0,
        }
    }

    pub fn is_unchanged(&self) -> bool {
        matches!(self.outcome, ReloadOutcome::Unchanged { .. })
    }

    /// Entries that were skipped: `(line, path)` pairs in playlist order.
    pub fn skipped_entries(&self) -> impl Iterator<Item = (usize, &str)> {
        self.diagnostics.iter().filter_map(|d| match d {
            SoundError::EntryNotFound { line, path, .. }
            | SoundError::EntryLoadFailed { line, path, .. } => Some((*line, path.as_str())),
            _ => None,
        })
    }

    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(SoundError::is_error)
    }
}

impl fmt::Display for ReloadReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let config = self.config.as_deref().unwrap_or("<none>");
        match self.outcome {
            ReloadOutcome::Loaded { count } => {
                write!(f, "{count} sound(s) from {config}")?;
                let skipped = self.skipped_entries().count();
                if skipped > 0 {
                    write!(f, ", {skipped} skipped")?;
                }
                Ok(())
            }
            ReloadOutcome::Disabled => f.write_str("sounds disabled"),
            ReloadOutcome::Unchanged { kept } => match self.diagnostics.last() {
                Some(last) => write!(f, "kept {kept} sound(s): {last}"),
                None => write!(f, "kept {kept} sound(s)"),
            },
        }
    }
}
