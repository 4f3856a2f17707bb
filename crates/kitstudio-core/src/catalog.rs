//! Static catalogs: customizable areas per product and the pattern library.
//!
//! Both catalogs are fixed configuration data compiled into the binary.

use crate::types::{Area, ProductType};

const JERSEY_AREAS: &[&str] = &[
    "front",
    "back",
    "leftSleeve",
    "rightSleeve",
    "collar",
    "element1",
    "element2",
];

const SHORTS_AREAS: &[&str] = &["front", "back", "waistband", "element1", "element2"];

const PANTS_AREAS: &[&str] = &["front", "back", "waistband", "legs", "element1", "element2"];

const TRACKSUIT_AREAS: &[&str] = &[
    "front",
    "back",
    "leftSleeve",
    "rightSleeve",
    "collar",
    "waistband",
    "legs",
];

const PATTERN_IDS: &[&str] = &[
    "stripes",
    "pinstripes",
    "dots",
    "checker",
    "camo",
    "chevron",
    "hexagon",
    "waves",
];

/// Lookup of customizable areas by product.
pub struct AreaCatalog;

impl AreaCatalog {
    /// Area names for `product`, in display order.
    pub fn names_for(product: ProductType) -> &'static [&'static str] {
        match product {
            ProductType::Jersey => JERSEY_AREAS,
            ProductType::Shorts => SHORTS_AREAS,
            ProductType::Pants => PANTS_AREAS,
            ProductType::Tracksuit => TRACKSUIT_AREAS,
        }
    }

    /// Areas for `product`, in display order.
    pub fn areas_for(product: ProductType) -> Vec<Area> {
        Self::names_for(product).iter().map(|&name| Area::new(name)).collect()
    }

    /// Whether `area` is customizable on `product`.
    pub fn contains(product: ProductType, area: &str) -> bool {
        Self::names_for(product).contains(&area)
    }
}

/// The fixed pattern library.
pub struct PatternCatalog;

impl PatternCatalog {
    /// All pattern ids.
    pub fn ids() -> &'static [&'static str] {
        PATTERN_IDS
    }

    /// Whether `id` names a known pattern.
    pub fn contains(id: &str) -> bool {
        PATTERN_IDS.contains(&id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_every_product_has_five_to_seven_areas() {
        for product in ProductType::ALL {
            let areas = AreaCatalog::areas_for(product);
            assert!(
                (5..=7).contains(&areas.len()),
                "{product} has {} areas",
                areas.len()
            );
        }
    }

    #[test]
    fn test_area_names_are_unique_per_product() {
        for product in ProductType::ALL {
            let names = AreaCatalog::names_for(product);
            let unique: HashSet<_> = names.iter().collect();
            assert_eq!(unique.len(), names.len());
        }
    }

    #[test]
    fn test_contains() {
        assert!(AreaCatalog::contains(ProductType::Jersey, "collar"));
        assert!(!AreaCatalog::contains(ProductType::Shorts, "collar"));
        assert!(AreaCatalog::contains(ProductType::Pants, "legs"));
    }

    #[test]
    fn test_pattern_catalog() {
        assert!(PatternCatalog::contains("camo"));
        assert!(!PatternCatalog::contains("Camo"));
        assert_eq!(PatternCatalog::ids().len(), 8);
    }
}
