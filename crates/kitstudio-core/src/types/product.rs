//! Product types that can be configured.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Garment being configured
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProductType {
    /// Short or long sleeve shirt
    #[default]
    Jersey,
    /// Shorts with waistband
    Shorts,
    /// Full length pants
    Pants,
    /// Jacket and pants combination
    Tracksuit,
}

impl ProductType {
    /// All product types, in catalog order.
    pub const ALL: [ProductType; 4] = [
        ProductType::Jersey,
        ProductType::Shorts,
        ProductType::Pants,
        ProductType::Tracksuit,
    ];

    /// Lowercase identifier used in commands and files.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Jersey => "jersey",
            Self::Shorts => "shorts",
            Self::Pants => "pants",
            Self::Tracksuit => "tracksuit",
        }
    }
}

impl fmt::Display for ProductType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProductType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "jersey" => Ok(Self::Jersey),
            "shorts" => Ok(Self::Shorts),
            "pants" => Ok(Self::Pants),
            "tracksuit" => Ok(Self::Tracksuit),
            other => Err(format!("Unknown product type: {}", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_jersey() {
        assert_eq!(ProductType::default(), ProductType::Jersey);
    }

    #[test]
    fn test_product_from_str() {
        assert_eq!("Jersey".parse::<ProductType>(), Ok(ProductType::Jersey));
        assert_eq!("tracksuit".parse::<ProductType>(), Ok(ProductType::Tracksuit));
        assert!("hoodie".parse::<ProductType>().is_err());
    }

    #[test]
    fn test_product_serde_lowercase() {
        let json = serde_json::to_string(&ProductType::Shorts).unwrap();
        assert_eq!(json, "\"shorts\"");
    }
}
