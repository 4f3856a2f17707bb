//! # Event Bus Module
//!
//! Publish/subscribe channel through which the configurator announces
//! every applied command and the resulting state.
//!
//! ## Overview
//!
//! - The configurator publishes typed events without knowing its consumers
//! - Renderers and UI widgets subscribe with a filter and read what they need
//! - Supports both synchronous handlers and async broadcast receivers
//!
//! ## Usage
//!
//! ```rust,ignore
//! use kitstudio_core::event_bus::{AppEvent, EventBus, EventCategory, EventFilter};
//!
//! let bus = EventBus::new();
//! let subscription = bus.subscribe(
//!     EventFilter::Categories(vec![EventCategory::State]),
//!     |event| {
//!         if let AppEvent::State(state) = event {
//!             println!("front is now {}", state.colors["front"]);
//!         }
//!     },
//! );
//!
//! bus.unsubscribe(subscription);
//! ```

mod bus;
mod events;

pub use bus::*;
pub use events::*;
