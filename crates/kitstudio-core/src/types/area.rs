//! Customizable area identifiers.

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

/// Named zone of a garment that can receive a fill (`front`, `leftSleeve`, ...).
///
/// Which areas are valid depends on the selected product; see
/// [`AreaCatalog`](crate::AreaCatalog).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Area(String);

impl Area {
    /// Wraps an area name.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// The area name.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Area {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Area {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for Area {
    fn from(name: String) -> Self {
        Self(name)
    }
}

impl From<&Area> for Area {
    fn from(area: &Area) -> Self {
        area.clone()
    }
}

impl Borrow<str> for Area {
    fn borrow(&self) -> &str {
        &self.0
    }
}
