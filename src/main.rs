use std::io::Read;
use std::path::PathBuf;

use anyhow::Context;
use kitstudio::{init_logging, replay, Configurator, ConfiguratorCommand, ConfiguratorSettings};

/// Replays a JSON array of configurator commands and prints the final render state.
///
/// Usage: `kitstudio [SESSION.json]`; reads the session from stdin when no path is given.
fn main() -> anyhow::Result<()> {
    init_logging()?;
    tracing::info!("KitStudio {} ({})", kitstudio::VERSION, kitstudio::BUILD_DATE);

    let settings = match ConfiguratorSettings::default_config_path() {
        Ok(path) => ConfiguratorSettings::load_or_default(&path)
            .with_context(|| format!("loading settings from {}", path.display()))?,
        Err(err) => {
            tracing::warn!("{}, using default settings", err);
            ConfiguratorSettings::default()
        }
    };

    let session = match std::env::args_os().nth(1).map(PathBuf::from) {
        Some(path) => std::fs::read_to_string(&path)
            .with_context(|| format!("reading session {}", path.display()))?,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("reading session from stdin")?;
            buf
        }
    };
    let commands: Vec<ConfiguratorCommand> =
        serde_json::from_str(&session).context("parsing session commands")?;

    let mut engine = Configurator::with_settings(settings);
    let outcomes = replay(&mut engine, commands)?;
    tracing::info!("Applied {} commands", outcomes.len());

    println!("{}", serde_json::to_string_pretty(&engine.render_state())?);
    Ok(())
}
