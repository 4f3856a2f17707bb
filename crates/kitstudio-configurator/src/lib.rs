//! # KitStudio Configurator
//!
//! In-memory state engine behind the garment configurator.
//!
//! ## Core Components
//!
//! - **FillStore**: fill type, color, pattern and gradient per area
//! - **LinkGraph**: source area to target areas for color propagation
//! - **DecorationCollection**: ordered text and logo decorations
//! - **HistoryManager**: bounded undo/redo snapshot stack
//! - **Configurator**: the single command surface; publishes every change
//!   on its event bus
//!
//! ## Architecture
//!
//! ```text
//! Configurator (public API)
//!   ├── ConfiguratorState
//!   │     ├── FillStore
//!   │     ├── LinkGraph
//!   │     ├── DecorationCollection
//!   │     └── HistoryManager
//!   └── EventBus (renderer / UI subscribers)
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use kitstudio_configurator::Configurator;
//!
//! let mut engine = Configurator::new();
//! engine.link_areas("front", ["back"])?;
//! engine.set_color("front", "#ff0000")?;
//! assert_eq!(engine.state().colors()["back"], "#ff0000");
//! engine.undo();
//! ```

pub mod commands;
pub mod configurator;
pub mod decorations;
pub mod fill_store;
pub mod history;
pub mod link_graph;
pub mod state;

pub use commands::{CommandOutcome, ConfiguratorCommand};
pub use configurator::Configurator;
pub use decorations::{validate_text, DecorationCollection, LogoPatch, NewLogo, NewText, TextPatch};
pub use fill_store::FillStore;
pub use history::{HistoryManager, HistorySnapshot};
pub use link_graph::LinkGraph;
pub use state::ConfiguratorState;
