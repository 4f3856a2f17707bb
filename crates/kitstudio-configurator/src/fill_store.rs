//! Per-area fill storage.
//!
//! Holds the fill mode and the color, pattern and gradient values of every
//! area of the selected product. The key set of all four maps always equals
//! the product's area set; values for inactive modes stay dormant.

use std::collections::BTreeMap;

use kitstudio_core::{
    Area, AreaCatalog, ConfiguratorError, FillType, GradientConfig, HexColor, PatternConfig,
    ProductType, Result,
};

use crate::link_graph::LinkGraph;

/// Fill modes and fill values keyed by area
#[derive(Debug, Clone, PartialEq)]
pub struct FillStore {
    product: ProductType,
    fill_types: BTreeMap<Area, FillType>,
    colors: BTreeMap<Area, HexColor>,
    patterns: BTreeMap<Area, Option<PatternConfig>>,
    gradients: BTreeMap<Area, Option<GradientConfig>>,
}

impl FillStore {
    /// Creates a store for `product` with every area set to `default_color`.
    pub fn new(product: ProductType, default_color: &HexColor) -> Self {
        let mut store = Self {
            product,
            fill_types: BTreeMap::new(),
            colors: BTreeMap::new(),
            patterns: BTreeMap::new(),
            gradients: BTreeMap::new(),
        };
        store.reinitialize(product, default_color);
        store
    }

    /// Replaces all four maps with one fresh entry per area of `product`.
    pub fn reinitialize(&mut self, product: ProductType, default_color: &HexColor) {
        let areas = AreaCatalog::areas_for(product);
        self.product = product;
        self.fill_types = areas.iter().map(|a| (a.clone(), FillType::Color)).collect();
        self.colors = areas
            .iter()
            .map(|a| (a.clone(), default_color.clone()))
            .collect();
        self.patterns = areas.iter().map(|a| (a.clone(), None)).collect();
        self.gradients = areas.into_iter().map(|a| (a, None)).collect();
    }

    /// Product whose area set keys the maps.
    pub fn product(&self) -> ProductType {
        self.product
    }

    /// Fails with [`ConfiguratorError::InvalidArea`] unless `area` is active.
    pub fn ensure_area(&self, area: &Area) -> Result<()> {
        if self.colors.contains_key(area) {
            Ok(())
        } else {
            Err(ConfiguratorError::InvalidArea {
                area: area.clone(),
                product: self.product,
            })
        }
    }

    /// Whether `area` belongs to the active area set.
    pub fn contains(&self, area: &str) -> bool {
        self.colors.contains_key(area)
    }

    /// Sets the display mode of `area`. Stored values are left untouched.
    pub fn set_fill_type(&mut self, area: &Area, fill_type: FillType) -> Result<()> {
        self.ensure_area(area)?;
        self.fill_types.insert(area.clone(), fill_type);
        Ok(())
    }

    /// Writes `color` to `area`, then to each direct link target of `area`.
    ///
    /// Targets are read from `links` as it is now; they are not followed
    /// further. Targets outside the active area set are skipped.
    /// Returns the targets that received the color.
    pub fn set_color(
        &mut self,
        area: &Area,
        color: &HexColor,
        links: &LinkGraph,
    ) -> Result<Vec<Area>> {
        self.ensure_area(area)?;
        self.colors.insert(area.clone(), color.clone());

        let mut propagated = Vec::new();
        for target in links.targets_of(area.as_str()) {
            match self.colors.get_mut(target) {
                Some(slot) => {
                    *slot = color.clone();
                    propagated.push(target.clone());
                }
                None => tracing::trace!("Skipping inactive link target {}", target),
            }
        }
        Ok(propagated)
    }

    /// Stores (or clears) the pattern config of `area`.
    pub fn set_pattern(&mut self, area: &Area, pattern: Option<PatternConfig>) -> Result<()> {
        self.ensure_area(area)?;
        if let Some(cfg) = &pattern {
            cfg.validate()?;
        }
        self.patterns.insert(area.clone(), pattern);
        Ok(())
    }

    /// Stores (or clears) the gradient config of `area`.
    pub fn set_gradient(&mut self, area: &Area, gradient: Option<GradientConfig>) -> Result<()> {
        self.ensure_area(area)?;
        if let Some(cfg) = &gradient {
            cfg.validate()?;
        }
        self.gradients.insert(area.clone(), gradient);
        Ok(())
    }

    /// Overwrites the stored values from a snapshot, projected onto the active areas.
    ///
    /// Areas missing from the snapshot fall back to `default_color` and no
    /// pattern or gradient; snapshot keys outside the active set are dropped.
    /// Fill types are never touched.
    pub fn restore_values(
        &mut self,
        colors: &BTreeMap<Area, HexColor>,
        patterns: &BTreeMap<Area, Option<PatternConfig>>,
        gradients: &BTreeMap<Area, Option<GradientConfig>>,
        default_color: &HexColor,
    ) {
        for (area, slot) in self.colors.iter_mut() {
            *slot = colors.get(area).unwrap_or(default_color).clone();
        }
        for (area, slot) in self.patterns.iter_mut() {
            *slot = patterns.get(area).cloned().flatten();
        }
        for (area, slot) in self.gradients.iter_mut() {
            *slot = gradients.get(area).cloned().flatten();
        }
    }

    pub fn fill_type(&self, area: &str) -> Option<FillType> {
        self.fill_types.get(area).copied()
    }

    pub fn color(&self, area: &str) -> Option<&HexColor> {
        self.colors.get(area)
    }

    pub fn pattern(&self, area: &str) -> Option<&PatternConfig> {
        self.patterns.get(area).and_then(Option::as_ref)
    }

    pub fn gradient(&self, area: &str) -> Option<&GradientConfig> {
        self.gradients.get(area).and_then(Option::as_ref)
    }

    pub fn fill_types(&self) -> &BTreeMap<Area, FillType> {
        &self.fill_types
    }

    pub fn colors(&self) -> &BTreeMap<Area, HexColor> {
        &self.colors
    }

    pub fn patterns(&self) -> &BTreeMap<Area, Option<PatternConfig>> {
        &self.patterns
    }

    pub fn gradients(&self) -> &BTreeMap<Area, Option<GradientConfig>> {
        &self.gradients
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn red() -> HexColor {
        "#ff0000".parse().unwrap()
    }

    fn jersey() -> FillStore {
        FillStore::new(ProductType::Jersey, &HexColor::white())
    }

    #[test]
    fn test_new_covers_catalog() {
        let store = jersey();
        let expected: std::collections::BTreeSet<Area> =
            AreaCatalog::areas_for(ProductType::Jersey).into_iter().collect();
        let keys: std::collections::BTreeSet<Area> = store.colors().keys().cloned().collect();
        assert_eq!(keys, expected);
        assert!(store.fill_types().values().all(|t| *t == FillType::Color));
        assert!(store.patterns().values().all(Option::is_none));
    }

    #[test]
    fn test_invalid_area_rejected() {
        let mut store = jersey();
        let err = store
            .set_color(&Area::new("legs"), &red(), &LinkGraph::new())
            .unwrap_err();
        assert!(matches!(err, ConfiguratorError::InvalidArea { .. }));
        assert!(!store.colors().contains_key("legs"));
    }

    #[test]
    fn test_fill_type_switch_keeps_pattern() {
        let mut store = jersey();
        let front = Area::new("front");
        store
            .set_pattern(&front, Some(PatternConfig::new("dots", red())))
            .unwrap();
        store.set_fill_type(&front, FillType::Pattern).unwrap();
        store.set_fill_type(&front, FillType::Color).unwrap();
        assert_eq!(store.pattern("front").map(|p| p.pattern_id.as_str()), Some("dots"));
    }

    #[test]
    fn test_invalid_pattern_leaves_store_unchanged() {
        let mut store = jersey();
        let before = store.clone();
        let err = store
            .set_pattern(&Area::new("back"), Some(PatternConfig::new("paisley", red())))
            .unwrap_err();
        assert!(matches!(err, ConfiguratorError::UnknownPattern(_)));
        assert_eq!(store, before);
    }

    #[test]
    fn test_propagation_skips_inactive_targets() {
        let mut store = jersey();
        let mut links = LinkGraph::new();
        links.link(Area::new("front"), [Area::new("back"), Area::new("legs")]);

        let propagated = store.set_color(&Area::new("front"), &red(), &links).unwrap();
        assert_eq!(propagated, vec![Area::new("back")]);
        assert!(!store.colors().contains_key("legs"));
    }

    #[test]
    fn test_restore_values_projects_onto_active_areas() {
        let mut store = FillStore::new(ProductType::Shorts, &HexColor::white());
        let jersey_colors: BTreeMap<Area, HexColor> = AreaCatalog::areas_for(ProductType::Jersey)
            .into_iter()
            .map(|a| (a, red()))
            .collect();

        store.restore_values(
            &jersey_colors,
            &BTreeMap::new(),
            &BTreeMap::new(),
            &HexColor::white(),
        );

        assert_eq!(store.color("front"), Some(&red()));
        assert_eq!(store.color("waistband"), Some(&HexColor::white()));
        assert!(!store.colors().contains_key("collar"));
    }
}
