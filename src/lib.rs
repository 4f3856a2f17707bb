//! # KitStudio
//!
//! State engine for a 3D garment configurator:
//! - Jersey, shorts, pants and tracksuit products with named areas
//! - Per-area solid colors, patterns and gradients
//! - One-way color links between areas
//! - Text and logo decorations
//! - Bounded undo/redo history
//!
//! ## Architecture
//!
//! KitStudio is organized as a workspace with multiple crates:
//!
//! 1. **kitstudio-core** - Domain types, catalogs, errors, event bus
//! 2. **kitstudio-settings** - Engine settings and their file format
//! 3. **kitstudio-configurator** - The configurator state engine
//! 4. **kitstudio** - Binary that replays command sessions

pub use kitstudio_core::{
    AppEvent, Area, AreaCatalog, ConfiguratorError, DecorationId, EventBus, EventCategory,
    EventFilter, FillType, GradientConfig, HexColor, LogoDecoration, PatternCatalog,
    PatternConfig, ProductType, RenderState, Result, TextDecoration, TextKind, Vec3,
};

pub use kitstudio_configurator::{
    CommandOutcome, Configurator, ConfiguratorCommand, ConfiguratorState, LogoPatch, NewLogo,
    NewText, TextPatch,
};

pub use kitstudio_settings::{CommitMode, ConfiguratorSettings, SettingsError};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Initialize logging with the default configuration
///
/// Logs go to stderr so stdout stays free for the render state.
/// `RUST_LOG` overrides the default `info` level.
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .with_line_number(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}

/// Applies `commands` in order and returns each outcome.
///
/// Stops at the first rejected command.
pub fn replay(
    engine: &mut Configurator,
    commands: Vec<ConfiguratorCommand>,
) -> Result<Vec<CommandOutcome>> {
    commands
        .into_iter()
        .map(|command| engine.dispatch(command))
        .collect()
}
