//! Configurator settings
//!
//! Settings are grouped into:
//! - Fill defaults (color used for every freshly initialized area)
//! - Undo/redo history (depth, commit mode)
//! - Text defaults (font and color applied when a payload omits them)
//! - Event bus tuning

use kitstudio_core::{EventBusConfig, HexColor};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{SettingsError, SettingsResult};

/// Hard ceiling on undo/redo snapshots.
pub const MAX_HISTORY_DEPTH: usize = 50;

const CONFIG_DIR_NAME: &str = "kitstudio";
const CONFIG_FILE_NAME: &str = "configurator.toml";

/// When snapshots are committed to the undo/redo history
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CommitMode {
    /// Every command that changes colors, patterns, gradients or decorations commits
    #[default]
    Auto,
    /// Only explicit `commit()` calls create snapshots
    Explicit,
}

impl std::fmt::Display for CommitMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Auto => write!(f, "auto"),
            Self::Explicit => write!(f, "explicit"),
        }
    }
}

/// Defaults applied to new text decorations
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TextDefaults {
    pub font_family: String,
    pub font_size: f64,
    pub color: HexColor,
}

impl Default for TextDefaults {
    fn default() -> Self {
        Self {
            font_family: "Arial".to_string(),
            font_size: 24.0,
            color: HexColor::black(),
        }
    }
}

/// Event bus tuning
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EventBusSettings {
    /// Broadcast channel capacity for async receivers
    pub channel_capacity: usize,
    /// Keep a bounded log of published events
    pub enable_history: bool,
    /// Size of that log
    pub max_history_size: usize,
}

impl Default for EventBusSettings {
    fn default() -> Self {
        Self {
            channel_capacity: 256,
            enable_history: false,
            max_history_size: 100,
        }
    }
}

impl From<&EventBusSettings> for EventBusConfig {
    fn from(settings: &EventBusSettings) -> Self {
        EventBusConfig {
            channel_capacity: settings.channel_capacity,
            enable_history: settings.enable_history,
            max_history_size: settings.max_history_size,
        }
    }
}

/// Complete configurator settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfiguratorSettings {
    /// Color every area starts with
    pub default_color: HexColor,
    /// Maximum number of history snapshots, 1..=50
    pub history_depth: usize,
    /// Snapshot commit policy
    pub commit_mode: CommitMode,
    pub text_defaults: TextDefaults,
    pub event_bus: EventBusSettings,
}

impl Default for ConfiguratorSettings {
    fn default() -> Self {
        Self {
            default_color: HexColor::white(),
            history_depth: MAX_HISTORY_DEPTH,
            commit_mode: CommitMode::Auto,
            text_defaults: TextDefaults::default(),
            event_bus: EventBusSettings::default(),
        }
    }
}

impl ConfiguratorSettings {
    /// Create settings with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Load settings from file (JSON or TOML, by extension)
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let content = std::fs::read_to_string(path)?;

        let settings: Self = match Format::of(path)? {
            Format::Json => serde_json::from_str(&content)?,
            Format::Toml => toml::from_str(&content)?,
        };

        settings.validate()?;
        tracing::debug!("Loaded configurator settings from {}", path.display());
        Ok(settings)
    }

    /// Load settings from `path`, falling back to defaults when the file does not exist
    pub fn load_or_default(path: &Path) -> SettingsResult<Self> {
        if path.exists() {
            Self::load_from_file(path)
        } else {
            tracing::info!(
                "No settings file at {}, using defaults",
                path.display()
            );
            Ok(Self::default())
        }
    }

    /// Save settings to file (JSON or TOML, by extension)
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;

        let content = match Format::of(path)? {
            Format::Json => serde_json::to_string_pretty(self)?,
            Format::Toml => toml::to_string_pretty(self)?,
        };

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Validate settings
    pub fn validate(&self) -> SettingsResult<()> {
        if self.history_depth == 0 || self.history_depth > MAX_HISTORY_DEPTH {
            return Err(SettingsError::invalid(
                "history_depth",
                format!("must be between 1 and {}", MAX_HISTORY_DEPTH),
            ));
        }

        let font_size = self.text_defaults.font_size;
        if !font_size.is_finite() || font_size <= 0.0 {
            return Err(SettingsError::invalid(
                "text_defaults.font_size",
                "must be > 0",
            ));
        }

        if self.text_defaults.font_family.trim().is_empty() {
            return Err(SettingsError::invalid(
                "text_defaults.font_family",
                "must not be empty",
            ));
        }

        if self.event_bus.channel_capacity == 0 {
            return Err(SettingsError::invalid(
                "event_bus.channel_capacity",
                "must be > 0",
            ));
        }

        Ok(())
    }

    /// Event bus configuration derived from these settings
    pub fn event_bus_config(&self) -> EventBusConfig {
        EventBusConfig::from(&self.event_bus)
    }

    /// Platform-specific settings path, e.g. `~/.config/kitstudio/configurator.toml`
    pub fn default_config_path() -> SettingsResult<PathBuf> {
        dirs::config_dir()
            .map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
            .ok_or_else(|| {
                SettingsError::ConfigDirectory("no config directory on this platform".to_string())
            })
    }
}

enum Format {
    Json,
    Toml,
}

impl Format {
    fn of(path: &Path) -> SettingsResult<Self> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Ok(Self::Json),
            Some("toml") => Ok(Self::Toml),
            other => Err(SettingsError::UnsupportedFormat(
                other.unwrap_or("<none>").to_string(),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let settings = ConfiguratorSettings::default();
        assert!(settings.validate().is_ok());
        assert_eq!(settings.history_depth, 50);
        assert_eq!(settings.default_color, "#ffffff");
        assert_eq!(settings.commit_mode, CommitMode::Auto);
        assert_eq!(CommitMode::default(), CommitMode::Auto);
    }

    #[test]
    fn test_history_depth_bounds() {
        let mut settings = ConfiguratorSettings::default();
        settings.history_depth = 0;
        assert!(settings.validate().is_err());
        settings.history_depth = 51;
        assert!(settings.validate().is_err());
        settings.history_depth = 1;
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_font_size_must_be_positive() {
        let mut settings = ConfiguratorSettings::default();
        settings.text_defaults.font_size = 0.0;
        assert!(matches!(
            settings.validate(),
            Err(SettingsError::InvalidSetting { .. })
        ));
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let settings: ConfiguratorSettings = toml::from_str(
            r##"
            default_color = "#112233"
            commit_mode = "explicit"

            [text_defaults]
            font_family = "Roboto"
            "##,
        )
        .unwrap();
        assert_eq!(settings.default_color, "#112233");
        assert_eq!(settings.commit_mode, CommitMode::Explicit);
        assert_eq!(settings.text_defaults.font_family, "Roboto");
        assert_eq!(settings.text_defaults.font_size, 24.0);
        assert_eq!(settings.history_depth, MAX_HISTORY_DEPTH);
    }

    #[test]
    fn test_event_bus_config_conversion() {
        let mut settings = ConfiguratorSettings::default();
        settings.event_bus.enable_history = true;
        let config = settings.event_bus_config();
        assert!(config.enable_history);
        assert_eq!(config.channel_capacity, 256);
    }
}
