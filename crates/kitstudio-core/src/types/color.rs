//! Hex RGB colors.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ConfiguratorError;

/// A validated `#rrggbb` color, stored lowercase.
///
/// Parsing accepts the value with or without the leading `#` and in any
/// letter case; the stored form is always `#` followed by six lowercase
/// hex digits.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct HexColor(String);

impl HexColor {
    /// Pure white, the stock fill for every area.
    pub fn white() -> Self {
        Self("#ffffff".to_string())
    }

    /// Pure black.
    pub fn black() -> Self {
        Self("#000000".to_string())
    }

    /// Normalized `#rrggbb` string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Red, green and blue channels.
    pub fn rgb(&self) -> (u8, u8, u8) {
        let channel = |i: usize| u8::from_str_radix(&self.0[i..i + 2], 16).unwrap_or(0);
        (channel(1), channel(3), channel(5))
    }
}

impl FromStr for HexColor {
    type Err = ConfiguratorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s.trim().strip_prefix('#').unwrap_or(s.trim());
        if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ConfiguratorError::InvalidColorFormat(s.to_string()));
        }
        Ok(Self(format!("#{}", digits.to_ascii_lowercase())))
    }
}

impl TryFrom<String> for HexColor {
    type Error = ConfiguratorError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<HexColor> for String {
    fn from(color: HexColor) -> Self {
        color.0
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl PartialEq<&str> for HexColor {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_normalizes() {
        let c: HexColor = "FF00aa".parse().unwrap();
        assert_eq!(c.as_str(), "#ff00aa");
        let c: HexColor = "#ABCDEF".parse().unwrap();
        assert_eq!(c, "#abcdef");
    }

    #[test]
    fn test_parse_rejects_malformed() {
        for bad in ["", "#fff", "#12345g", "#1234567", "red", "##ffffff"] {
            assert!(
                matches!(
                    bad.parse::<HexColor>(),
                    Err(ConfiguratorError::InvalidColorFormat(_))
                ),
                "{bad} should be rejected"
            );
        }
    }

    #[test]
    fn test_rgb_channels() {
        let c: HexColor = "#10ff00".parse().unwrap();
        assert_eq!(c.rgb(), (16, 255, 0));
    }

    #[test]
    fn test_deserialize_validates() {
        let ok: HexColor = serde_json::from_str("\"#00FF00\"").unwrap();
        assert_eq!(ok, "#00ff00");
        assert!(serde_json::from_str::<HexColor>("\"green\"").is_err());
    }
}
