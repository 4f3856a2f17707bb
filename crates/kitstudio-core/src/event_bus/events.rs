//! Event type definitions for the event bus.
//!
//! Events are cloneable and serializable so they can be logged or replayed.

use serde::{Deserialize, Serialize};

use crate::types::{
    Area, DecorationId, DecorationKind, FillType, GradientConfig, HexColor, PatternConfig,
    ProductType, RenderState,
};

/// Root event enum for everything the configurator publishes
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum AppEvent {
    /// Product selection and reset
    Product(ProductEvent),
    /// Fill type and fill value changes
    Fill(FillEvent),
    /// Link graph changes
    Link(LinkEvent),
    /// Text and logo changes
    Decoration(DecorationEvent),
    /// Snapshot commits and cursor moves
    History(HistoryEvent),
    /// Full state after a command completed
    State(Box<RenderState>),
}

impl AppEvent {
    /// Get the category of this event
    pub fn category(&self) -> EventCategory {
        match self {
            AppEvent::Product(_) => EventCategory::Product,
            AppEvent::Fill(_) => EventCategory::Fill,
            AppEvent::Link(_) => EventCategory::Link,
            AppEvent::Decoration(_) => EventCategory::Decoration,
            AppEvent::History(_) => EventCategory::History,
            AppEvent::State(_) => EventCategory::State,
        }
    }

    /// Get a short description of this event for logging
    pub fn description(&self) -> String {
        match self {
            AppEvent::Product(e) => e.description(),
            AppEvent::Fill(e) => e.description(),
            AppEvent::Link(e) => e.description(),
            AppEvent::Decoration(e) => e.description(),
            AppEvent::History(e) => e.description(),
            AppEvent::State(state) => format!("State updated ({})", state.selected_product),
        }
    }
}

/// Event category for filtering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventCategory {
    /// Product selection events.
    Product,
    /// Fill events.
    Fill,
    /// Link graph events.
    Link,
    /// Decoration events.
    Decoration,
    /// Undo/redo history events.
    History,
    /// Full state updates.
    State,
}

impl std::fmt::Display for EventCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EventCategory::Product => write!(f, "Product"),
            EventCategory::Fill => write!(f, "Fill"),
            EventCategory::Link => write!(f, "Link"),
            EventCategory::Decoration => write!(f, "Decoration"),
            EventCategory::History => write!(f, "History"),
            EventCategory::State => write!(f, "State"),
        }
    }
}

/// Product selection events
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum ProductEvent {
    /// Fill maps were rebuilt for another product.
    Switched {
        /// Product before the switch.
        from: ProductType,
        /// Product after the switch.
        to: ProductType,
    },
    /// The whole configuration was replaced by the default state.
    Reset,
}

impl ProductEvent {
    fn description(&self) -> String {
        match self {
            ProductEvent::Switched { from, to } => format!("Product switched {} -> {}", from, to),
            ProductEvent::Reset => "Configuration reset".to_string(),
        }
    }
}

/// Fill events
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum FillEvent {
    /// Display mode of an area changed.
    FillTypeChanged {
        /// Affected area.
        area: Area,
        /// New mode.
        fill_type: FillType,
    },
    /// Solid color written to an area and its link targets.
    ColorChanged {
        /// Area the color was set on.
        area: Area,
        /// The new color.
        color: HexColor,
        /// Link targets that received the same color.
        propagated_to: Vec<Area>,
    },
    /// Pattern config stored or cleared.
    PatternChanged {
        /// Affected area.
        area: Area,
        /// New config, `None` when cleared.
        pattern: Option<PatternConfig>,
    },
    /// Gradient config stored or cleared.
    GradientChanged {
        /// Affected area.
        area: Area,
        /// New config, `None` when cleared.
        gradient: Option<GradientConfig>,
    },
}

impl FillEvent {
    fn description(&self) -> String {
        match self {
            FillEvent::FillTypeChanged { area, fill_type } => {
                format!("Fill type of {} set to {}", area, fill_type)
            }
            FillEvent::ColorChanged {
                area,
                color,
                propagated_to,
            } => {
                if propagated_to.is_empty() {
                    format!("Color of {} set to {}", area, color)
                } else {
                    format!(
                        "Color of {} set to {} (linked: {})",
                        area,
                        color,
                        propagated_to.len()
                    )
                }
            }
            FillEvent::PatternChanged { area, pattern } => match pattern {
                Some(p) => format!("Pattern of {} set to {}", area, p.pattern_id),
                None => format!("Pattern of {} cleared", area),
            },
            FillEvent::GradientChanged { area, gradient } => match gradient {
                Some(g) => format!(
                    "Gradient of {} {}",
                    area,
                    if g.enabled { "enabled" } else { "disabled" }
                ),
                None => format!("Gradient of {} cleared", area),
            },
        }
    }
}

/// Link graph events
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum LinkEvent {
    /// Targets added to a source area.
    Linked {
        /// Source area.
        source: Area,
        /// Full target set after the union.
        targets: Vec<Area>,
    },
    /// Source entry removed.
    Unlinked {
        /// Former source area.
        source: Area,
    },
}

impl LinkEvent {
    fn description(&self) -> String {
        match self {
            LinkEvent::Linked { source, targets } => {
                format!("{} linked to {} area(s)", source, targets.len())
            }
            LinkEvent::Unlinked { source } => format!("{} unlinked", source),
        }
    }
}

/// Decoration events
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum DecorationEvent {
    /// Decoration appended.
    Added {
        /// Generated id.
        id: DecorationId,
        /// Text or logo.
        kind: DecorationKind,
    },
    /// Decoration patched in place.
    Updated {
        /// Patched id.
        id: DecorationId,
        /// Text or logo.
        kind: DecorationKind,
    },
    /// Decoration removed.
    Removed {
        /// Removed id.
        id: DecorationId,
        /// Text or logo.
        kind: DecorationKind,
    },
}

impl DecorationEvent {
    fn description(&self) -> String {
        match self {
            DecorationEvent::Added { id, kind } => format!("Added {} {}", kind, id),
            DecorationEvent::Updated { id, kind } => format!("Updated {} {}", kind, id),
            DecorationEvent::Removed { id, kind } => format!("Removed {} {}", kind, id),
        }
    }
}

/// Undo/redo history events
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum HistoryEvent {
    /// Snapshot appended.
    Committed {
        /// Cursor after the commit.
        index: usize,
        /// Stack length after the commit.
        len: usize,
    },
    /// Cursor moved back and the snapshot was applied.
    Undone {
        /// Cursor after the move.
        index: usize,
    },
    /// Cursor moved forward and the snapshot was applied.
    Redone {
        /// Cursor after the move.
        index: usize,
    },
}

impl HistoryEvent {
    fn description(&self) -> String {
        match self {
            HistoryEvent::Committed { index, len } => {
                format!("Snapshot committed at {} ({} total)", index, len)
            }
            HistoryEvent::Undone { index } => format!("Undo to {}", index),
            HistoryEvent::Redone { index } => format!("Redo to {}", index),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_categories() {
        assert_eq!(
            AppEvent::Product(ProductEvent::Reset).category(),
            EventCategory::Product
        );
        assert_eq!(
            AppEvent::History(HistoryEvent::Undone { index: 0 }).category(),
            EventCategory::History
        );
        assert_eq!(
            AppEvent::State(Box::default()).category(),
            EventCategory::State
        );
    }

    #[test]
    fn test_descriptions() {
        let switched = AppEvent::Product(ProductEvent::Switched {
            from: ProductType::Jersey,
            to: ProductType::Pants,
        });
        assert_eq!(switched.description(), "Product switched jersey -> pants");

        let color = AppEvent::Fill(FillEvent::ColorChanged {
            area: Area::new("front"),
            color: HexColor::black(),
            propagated_to: vec![Area::new("back"), Area::new("collar")],
        });
        assert_eq!(
            color.description(),
            "Color of front set to #000000 (linked: 2)"
        );

        let committed = AppEvent::History(HistoryEvent::Committed { index: 3, len: 4 });
        assert_eq!(committed.description(), "Snapshot committed at 3 (4 total)");
    }

    #[test]
    fn test_event_json() {
        let event = AppEvent::Link(LinkEvent::Linked {
            source: Area::new("front"),
            targets: vec![Area::new("back")],
        });
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["Link"]["Linked"]["source"], "front");
        assert_eq!(json["Link"]["Linked"]["targets"][0], "back");
    }
}
