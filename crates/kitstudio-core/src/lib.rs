//! # KitStudio Core
//!
//! Core types, catalogs, and utilities for KitStudio.
//! Provides the garment vocabulary (products, areas, fills, decorations),
//! the static area and pattern catalogs, the error types shared by every
//! layer, and the event bus used to publish configurator state.

pub mod catalog;
pub mod error;
pub mod event_bus;
pub mod types;

pub use catalog::{AreaCatalog, PatternCatalog};

pub use error::{ConfiguratorError, Result};

// Re-export event bus for convenience
pub use event_bus::{
    AppEvent, DecorationEvent, EventBus, EventBusConfig, EventBusError, EventCategory,
    EventFilter, FillEvent, HistoryEvent, LinkEvent, ProductEvent, RecordedEvent, SubscriptionId,
};

pub use types::{
    Area, DecorationId, DecorationKind, FillType, GradientConfig, HexColor, LogoDecoration,
    PatternConfig, ProductType, RenderState, TextDecoration, TextKind, Vec3,
};
