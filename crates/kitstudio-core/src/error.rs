//! Error handling for KitStudio
//!
//! Every configurator command validates its input before touching state.
//! A failed command surfaces one of these errors to the caller and leaves
//! the aggregate unchanged. None of them are retried.
//!
//! All error types use `thiserror` for ergonomic error handling.

use thiserror::Error;

use crate::types::{Area, ProductType};

/// Validation failure raised by a configurator command.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfiguratorError {
    /// Area is not part of the active product's area set
    #[error("Area '{area}' is not customizable on {product}")]
    InvalidArea {
        /// The rejected area.
        area: Area,
        /// The product that was active when the command ran.
        product: ProductType,
    },

    /// Color string is not a 6-digit hex RGB value
    #[error("Invalid color format: '{0}' (expected #rrggbb)")]
    InvalidColorFormat(String),

    /// Pattern id is not in the pattern catalog
    #[error("Unknown pattern: '{0}'")]
    UnknownPattern(String),

    /// Numeric field outside its allowed range
    #[error("Value {value} for '{field}' is out of range (expected {expected})")]
    OutOfRange {
        /// The field name, as exposed to callers.
        field: String,
        /// The rejected value.
        value: f64,
        /// Human-readable description of the valid range.
        expected: String,
    },

    /// Decoration payload failed length or format checks
    #[error("Invalid decoration: {0}")]
    DecorationValidation(String),
}

impl ConfiguratorError {
    /// Builds an [`ConfiguratorError::OutOfRange`] for `field`.
    pub fn out_of_range(field: &str, value: f64, expected: &str) -> Self {
        Self::OutOfRange {
            field: field.to_string(),
            value,
            expected: expected.to_string(),
        }
    }
}

/// Result type alias for configurator operations.
pub type Result<T> = std::result::Result<T, ConfiguratorError>;
