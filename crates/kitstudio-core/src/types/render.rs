//! Read-only view handed to renderers and UI widgets.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::{
    Area, FillType, GradientConfig, HexColor, LogoDecoration, PatternConfig, ProductType,
    TextDecoration,
};

/// Everything a consumer needs to paint the garment and refresh controls.
///
/// Decorations bound to areas outside the selected product are already
/// filtered out.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderState {
    pub selected_product: ProductType,
    pub fill_types: BTreeMap<Area, FillType>,
    pub colors: BTreeMap<Area, HexColor>,
    pub patterns: BTreeMap<Area, Option<PatternConfig>>,
    pub gradients: BTreeMap<Area, Option<GradientConfig>>,
    pub texts: Vec<TextDecoration>,
    pub logos: Vec<LogoDecoration>,
    pub can_undo: bool,
    pub can_redo: bool,
}
