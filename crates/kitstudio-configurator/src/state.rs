//! The configurator aggregate.

use std::collections::BTreeMap;

use kitstudio_core::{
    Area, FillType, GradientConfig, HexColor, LogoDecoration, PatternConfig, ProductType,
    RenderState, TextDecoration,
};
use kitstudio_settings::ConfiguratorSettings;

use crate::decorations::DecorationCollection;
use crate::fill_store::FillStore;
use crate::history::{HistoryManager, HistorySnapshot};
use crate::link_graph::LinkGraph;

/// Complete configurator state, owned by a single [`Configurator`](crate::Configurator).
///
/// # Invariants
/// - The fill type, color, pattern and gradient maps hold exactly one entry
///   per area of `selected_product`.
/// - History holds at most the configured depth (never more than 50).
#[derive(Debug, Clone, PartialEq)]
pub struct ConfiguratorState {
    pub(crate) selected_product: ProductType,
    pub(crate) fills: FillStore,
    pub(crate) linked_areas: LinkGraph,
    pub(crate) decorations: DecorationCollection,
    pub(crate) history: HistoryManager,
}

impl ConfiguratorState {
    /// Default state: jersey, solid default color everywhere, nothing else.
    pub fn new(settings: &ConfiguratorSettings) -> Self {
        let product = ProductType::default();
        Self {
            selected_product: product,
            fills: FillStore::new(product, &settings.default_color),
            linked_areas: LinkGraph::new(),
            decorations: DecorationCollection::new(),
            history: HistoryManager::new(settings.history_depth),
        }
    }

    /// Deep copy of the undoable values.
    pub fn snapshot(&self) -> HistorySnapshot {
        HistorySnapshot {
            colors: self.fills.colors().clone(),
            patterns: self.fills.patterns().clone(),
            gradients: self.fills.gradients().clone(),
            texts: self.decorations.texts().to_vec(),
            logos: self.decorations.logos().to_vec(),
        }
    }

    /// Overwrites colors, patterns, gradients, texts and logos from `snapshot`.
    pub(crate) fn apply_snapshot(&mut self, snapshot: HistorySnapshot, default_color: &HexColor) {
        self.fills.restore_values(
            &snapshot.colors,
            &snapshot.patterns,
            &snapshot.gradients,
            default_color,
        );
        self.decorations.restore(snapshot.texts, snapshot.logos);
    }

    /// Texts bound to an area of the selected product.
    pub fn visible_texts(&self) -> impl Iterator<Item = &TextDecoration> {
        self.decorations
            .texts()
            .iter()
            .filter(|t| self.fills.contains(t.area.as_str()))
    }

    /// Logos bound to an area of the selected product.
    pub fn visible_logos(&self) -> impl Iterator<Item = &LogoDecoration> {
        self.decorations
            .logos()
            .iter()
            .filter(|l| self.fills.contains(l.area.as_str()))
    }

    /// View for renderers and UI widgets.
    pub fn render_state(&self) -> RenderState {
        RenderState {
            selected_product: self.selected_product,
            fill_types: self.fills.fill_types().clone(),
            colors: self.fills.colors().clone(),
            patterns: self.fills.patterns().clone(),
            gradients: self.fills.gradients().clone(),
            texts: self.visible_texts().cloned().collect(),
            logos: self.visible_logos().cloned().collect(),
            can_undo: self.history.can_undo(),
            can_redo: self.history.can_redo(),
        }
    }

    pub fn selected_product(&self) -> ProductType {
        self.selected_product
    }

    pub fn fill_types(&self) -> &BTreeMap<Area, FillType> {
        self.fills.fill_types()
    }

    pub fn colors(&self) -> &BTreeMap<Area, HexColor> {
        self.fills.colors()
    }

    pub fn patterns(&self) -> &BTreeMap<Area, Option<PatternConfig>> {
        self.fills.patterns()
    }

    pub fn gradients(&self) -> &BTreeMap<Area, Option<GradientConfig>> {
        self.fills.gradients()
    }

    pub fn linked_areas(&self) -> &LinkGraph {
        &self.linked_areas
    }

    /// All texts, including those on areas of other products.
    pub fn texts(&self) -> &[TextDecoration] {
        self.decorations.texts()
    }

    /// All logos, including those on areas of other products.
    pub fn logos(&self) -> &[LogoDecoration] {
        self.decorations.logos()
    }

    pub fn history(&self) -> &HistoryManager {
        &self.history
    }
}
