//! # KitStudio Settings
//!
//! Engine settings: default fills, history depth, snapshot commit mode,
//! text defaults and event bus tuning. Settings are loaded from TOML or JSON
//! files; configurator state itself is never persisted.

pub mod config;
pub mod error;

pub use config::{
    CommitMode, ConfiguratorSettings, EventBusSettings, TextDefaults, MAX_HISTORY_DEPTH,
};
pub use error::{SettingsError, SettingsResult};
