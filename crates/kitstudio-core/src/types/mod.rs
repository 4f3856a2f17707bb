//! Garment configurator vocabulary.
//!
//! Value types shared by the configurator engine, the event bus and any
//! consumer that reads configurator state (renderer, UI widgets).

mod area;
mod color;
mod decoration;
mod fill;
mod product;
mod render;

pub use area::Area;
pub use color::HexColor;
pub use decoration::{
    DecorationId, DecorationKind, LogoDecoration, TextDecoration, TextKind, Vec3,
};
pub use fill::{FillType, GradientConfig, PatternConfig};
pub use product::ProductType;
pub use render::RenderState;
