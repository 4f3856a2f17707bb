//! Text and logo decorations placed on garment areas.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::{Area, HexColor};

/// Unique id of a decoration within its collection.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DecorationId(String);

impl DecorationId {
    /// Wraps an id string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The id string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DecorationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for DecorationId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// Point or rotation in model space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vec3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vec3 {
    /// Creates a vector from its components.
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }
}

/// What a text decoration represents; governs its length rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextKind {
    /// Player name, at most 15 characters
    Name,
    /// Player number, at most 2 digits
    Number,
    /// Free text, at most 50 characters
    Custom,
}

impl TextKind {
    /// Maximum number of characters accepted for this kind.
    pub fn max_len(&self) -> usize {
        match self {
            Self::Name => 15,
            Self::Number => 2,
            Self::Custom => 50,
        }
    }
}

impl fmt::Display for TextKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Name => write!(f, "name"),
            Self::Number => write!(f, "number"),
            Self::Custom => write!(f, "custom"),
        }
    }
}

/// Text placed on an area.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextDecoration {
    pub id: DecorationId,
    pub kind: TextKind,
    pub text: String,
    pub area: Area,
    pub font_family: String,
    pub font_size: f64,
    pub color: HexColor,
    pub position: Vec3,
    pub rotation: Vec3,
}

/// Image placed on an area.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogoDecoration {
    pub id: DecorationId,
    pub area: Area,
    /// Opaque image reference (data URI, URL, ...)
    pub image_source: String,
    pub scale: f64,
    pub position: Vec3,
    pub rotation: Vec3,
}

/// Decoration variant, used in events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DecorationKind {
    Text,
    Logo,
}

impl fmt::Display for DecorationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text => write!(f, "text"),
            Self::Logo => write!(f, "logo"),
        }
    }
}
