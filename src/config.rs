//! Which playlist the registry loads.

/// Environment variable naming the playlist resource to load.
pub const SOUNDS_CONFIG_ENV: &str = "BABYBANG_SOUNDS_CONFIG";

/// Playlist loaded when nothing else is configured or found.
pub const DEFAULT_SOUNDS_CONFIG: &str = "sounds/config/babysmash.sounds";

/// Locator value that turns sounds off.
pub const NO_SOUNDS: &str = "no.sounds";

/// Where a reload should read its playlist from.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Locator {
    /// Load no sounds and clear the registry.
    Disabled,
    /// Load the playlist at this resource path.
    Path(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SoundConfig {
    /// Playlist used by lazy initialization.
    pub locator: Locator,
    /// Fallback playlist when `locator` cannot be found.
    pub default_locator: String,
    /// Reserved locator string that disables sounds.
    pub disable_token: String,
}

impl Default for SoundConfig {
    fn default() -> Self {
        Self {
            locator: Locator::Path(DEFAULT_SOUNDS_CONFIG.to_string()),
            default_locator: DEFAULT_SOUNDS_CONFIG.to_string(),
            disable_token: NO_SOUNDS.to_string(),
        }
    }
}

impl SoundConfig {
    /// Read the locator from [`SOUNDS_CONFIG_ENV`], falling back to the default.
    pub fn from_env() -> Self {
        Self::from_override(std::env::var(SOUNDS_CONFIG_ENV).ok().as_deref())
    }

    /// Apply an optional locator override on top of the defaults.
    pub fn from_override(value: Option<&str>) -> Self {
        let config = Self::default();
        match value.map(str::trim).filter(|v| !v.is_empty()) {
            Some(value) => {
                let locator = config.locator_for(value);
                config.with_locator(locator)
            }
            None => config,
        }
    }

    pub fn with_locator(mut self, locator: Locator) -> Self {
        self.locator = locator;
        self
    }

    pub fn with_default_locator(mut self, default_locator: impl Into<String>) -> Self {
        self.default_locator = default_locator.into();
        self
    }

    /// Interpret a locator string, honoring the disable token.
    pub fn locator_for(&self, value: &str) -> Locator {
        if value == self.disable_token {
            Locator::Disabled
        } else {
            Locator::Path(value.to_string())
        }
    }
}
