//! Fill modes and fill values for a customizable area.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::HexColor;
use crate::catalog::PatternCatalog;
use crate::error::{ConfiguratorError, Result};

const ANGLE_RANGE: &str = "[0, 360)";

/// How an area is painted. Exactly one mode is active per area.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FillType {
    /// Solid color from the color map
    #[default]
    Color,
    /// Repeating pattern from the pattern map
    Pattern,
    /// Linear gradient from the gradient map
    Gradient,
}

impl fmt::Display for FillType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Color => write!(f, "color"),
            Self::Pattern => write!(f, "pattern"),
            Self::Gradient => write!(f, "gradient"),
        }
    }
}

/// Pattern fill parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatternConfig {
    /// Id from the [`PatternCatalog`]
    pub pattern_id: String,
    /// Repeat scale, strictly positive
    pub scale: f64,
    /// Rotation in degrees, `[0, 360)`
    pub angle: f64,
    /// Foreground color of the pattern
    pub color: HexColor,
}

impl PatternConfig {
    /// Creates a pattern config at scale 1 and angle 0.
    pub fn new(pattern_id: impl Into<String>, color: HexColor) -> Self {
        Self {
            pattern_id: pattern_id.into(),
            scale: 1.0,
            angle: 0.0,
            color,
        }
    }

    /// Checks the pattern id against the catalog and numeric fields against their ranges.
    pub fn validate(&self) -> Result<()> {
        if !PatternCatalog::contains(&self.pattern_id) {
            return Err(ConfiguratorError::UnknownPattern(self.pattern_id.clone()));
        }
        if !self.scale.is_finite() || self.scale <= 0.0 {
            return Err(ConfiguratorError::out_of_range("scale", self.scale, "> 0"));
        }
        validate_angle(self.angle)
    }
}

/// Linear gradient parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GradientConfig {
    /// Whether the gradient is switched on in the editor
    pub enabled: bool,
    /// Color at the gradient origin
    pub start_color: HexColor,
    /// Color at the gradient end
    pub end_color: HexColor,
    /// Direction in degrees, `[0, 360)`
    pub angle: f64,
    /// Offset of the gradient midpoint along its direction
    pub translate: f64,
}

impl GradientConfig {
    /// Checks numeric fields against their ranges.
    pub fn validate(&self) -> Result<()> {
        validate_angle(self.angle)?;
        if !self.translate.is_finite() {
            return Err(ConfiguratorError::out_of_range(
                "translate",
                self.translate,
                "a finite number",
            ));
        }
        Ok(())
    }
}

impl Default for GradientConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            start_color: HexColor::black(),
            end_color: HexColor::white(),
            angle: 0.0,
            translate: 0.0,
        }
    }
}

fn validate_angle(angle: f64) -> Result<()> {
    if !(0.0..360.0).contains(&angle) {
        return Err(ConfiguratorError::out_of_range("angle", angle, ANGLE_RANGE));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fill_type_defaults_to_color() {
        assert_eq!(FillType::default(), FillType::Color);
    }

    fn stripes() -> PatternConfig {
        PatternConfig::new("stripes", HexColor::black())
    }

    #[test]
    fn test_pattern_validate_ok() {
        assert!(stripes().validate().is_ok());
    }

    #[test]
    fn test_pattern_unknown_id() {
        let cfg = PatternConfig::new("paisley", HexColor::black());
        assert_eq!(
            cfg.validate(),
            Err(ConfiguratorError::UnknownPattern("paisley".to_string()))
        );
    }

    #[test]
    fn test_pattern_scale_and_angle_bounds() {
        let mut cfg = stripes();
        cfg.scale = 0.0;
        assert!(matches!(cfg.validate(), Err(ConfiguratorError::OutOfRange { .. })));

        let mut cfg = stripes();
        cfg.angle = 360.0;
        assert!(matches!(cfg.validate(), Err(ConfiguratorError::OutOfRange { .. })));

        let mut cfg = stripes();
        cfg.angle = 359.9;
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn test_gradient_validate() {
        let mut g = GradientConfig::default();
        assert!(g.validate().is_ok());
        g.angle = -1.0;
        assert!(g.validate().is_err());
        g.angle = 45.0;
        g.translate = f64::NAN;
        assert!(g.validate().is_err());
    }

    #[test]
    fn test_pattern_serde_camel_case() {
        let json = serde_json::to_value(stripes()).unwrap();
        assert_eq!(json["patternId"], "stripes");
        assert_eq!(json["color"], "#000000");
    }
}
