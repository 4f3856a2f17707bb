//! Text and logo decorations.
//!
//! Decorations keep insertion order. Ids combine a timestamp, a per-collection
//! sequence number and a random suffix, so they never repeat within one
//! collection.

use kitstudio_core::{
    Area, ConfiguratorError, DecorationId, DecorationKind, HexColor, LogoDecoration, Result,
    TextDecoration, TextKind, Vec3,
};
use kitstudio_settings::TextDefaults;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Payload for a new text decoration. Unset styling falls back to [`TextDefaults`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewText {
    pub kind: TextKind,
    pub text: String,
    pub area: Area,
    #[serde(default)]
    pub font_family: Option<String>,
    #[serde(default)]
    pub font_size: Option<f64>,
    #[serde(default)]
    pub color: Option<HexColor>,
    #[serde(default)]
    pub position: Vec3,
    #[serde(default)]
    pub rotation: Vec3,
}

impl NewText {
    /// Text payload with default styling and placement.
    pub fn new(kind: TextKind, text: impl Into<String>, area: impl Into<Area>) -> Self {
        Self {
            kind,
            text: text.into(),
            area: area.into(),
            font_family: None,
            font_size: None,
            color: None,
            position: Vec3::default(),
            rotation: Vec3::default(),
        }
    }
}

/// Payload for a new logo decoration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewLogo {
    pub image_source: String,
    pub area: Area,
    #[serde(default = "default_logo_scale")]
    pub scale: f64,
    #[serde(default)]
    pub position: Vec3,
    #[serde(default)]
    pub rotation: Vec3,
}

impl NewLogo {
    /// Logo payload at scale 1 and the origin.
    pub fn new(image_source: impl Into<String>, area: impl Into<Area>) -> Self {
        Self {
            image_source: image_source.into(),
            area: area.into(),
            scale: default_logo_scale(),
            position: Vec3::default(),
            rotation: Vec3::default(),
        }
    }
}

fn default_logo_scale() -> f64 {
    1.0
}

/// Partial update of a text decoration; `None` fields are left as they are.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TextPatch {
    pub kind: Option<TextKind>,
    pub text: Option<String>,
    pub area: Option<Area>,
    pub font_family: Option<String>,
    pub font_size: Option<f64>,
    pub color: Option<HexColor>,
    pub position: Option<Vec3>,
    pub rotation: Option<Vec3>,
}

/// Partial update of a logo decoration; `None` fields are left as they are.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LogoPatch {
    pub image_source: Option<String>,
    pub area: Option<Area>,
    pub scale: Option<f64>,
    pub position: Option<Vec3>,
    pub rotation: Option<Vec3>,
}

/// Checks `text` against the length rule of `kind`.
pub fn validate_text(kind: TextKind, text: &str) -> Result<()> {
    let len = text.chars().count();
    if len > kind.max_len() {
        return Err(ConfiguratorError::DecorationValidation(format!(
            "{} text is {} characters long (max {})",
            kind,
            len,
            kind.max_len()
        )));
    }
    if kind == TextKind::Number && !text.chars().all(|c| c.is_ascii_digit()) {
        return Err(ConfiguratorError::DecorationValidation(format!(
            "number text '{}' must contain only digits",
            text
        )));
    }
    Ok(())
}

fn validate_text_decoration(text: &TextDecoration) -> Result<()> {
    validate_text(text.kind, &text.text)?;
    if !text.font_size.is_finite() || text.font_size <= 0.0 {
        return Err(ConfiguratorError::out_of_range(
            "fontSize",
            text.font_size,
            "> 0",
        ));
    }
    if text.font_family.trim().is_empty() {
        return Err(ConfiguratorError::DecorationValidation(
            "font family must not be empty".to_string(),
        ));
    }
    Ok(())
}

fn validate_logo_decoration(logo: &LogoDecoration) -> Result<()> {
    if logo.image_source.trim().is_empty() {
        return Err(ConfiguratorError::DecorationValidation(
            "logo image source must not be empty".to_string(),
        ));
    }
    if !logo.scale.is_finite() || logo.scale <= 0.0 {
        return Err(ConfiguratorError::out_of_range("scale", logo.scale, "> 0"));
    }
    Ok(())
}

/// Ordered text and logo decorations with unique ids
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DecorationCollection {
    texts: Vec<TextDecoration>,
    logos: Vec<LogoDecoration>,
    next_seq: u64,
}

impl DecorationCollection {
    pub fn new() -> Self {
        Self::default()
    }

    fn generate_id(&mut self, kind: DecorationKind) -> DecorationId {
        let seq = self.next_seq;
        self.next_seq += 1;
        let suffix = Uuid::new_v4().simple().to_string();
        DecorationId::new(format!(
            "{}-{}-{}-{}",
            kind,
            chrono::Utc::now().timestamp_millis(),
            seq,
            &suffix[..6]
        ))
    }

    /// Validates and appends a text decoration, returning its id.
    pub fn add_text(&mut self, new: NewText, defaults: &TextDefaults) -> Result<DecorationId> {
        let mut text = TextDecoration {
            id: DecorationId::new(""),
            kind: new.kind,
            text: new.text,
            area: new.area,
            font_family: new
                .font_family
                .unwrap_or_else(|| defaults.font_family.clone()),
            font_size: new.font_size.unwrap_or(defaults.font_size),
            color: new.color.unwrap_or_else(|| defaults.color.clone()),
            position: new.position,
            rotation: new.rotation,
        };
        validate_text_decoration(&text)?;

        text.id = self.generate_id(DecorationKind::Text);
        let id = text.id.clone();
        self.texts.push(text);
        Ok(id)
    }

    /// Validates and appends a logo decoration, returning its id.
    pub fn add_logo(&mut self, new: NewLogo) -> Result<DecorationId> {
        let mut logo = LogoDecoration {
            id: DecorationId::new(""),
            area: new.area,
            image_source: new.image_source,
            scale: new.scale,
            position: new.position,
            rotation: new.rotation,
        };
        validate_logo_decoration(&logo)?;

        logo.id = self.generate_id(DecorationKind::Logo);
        let id = logo.id.clone();
        self.logos.push(logo);
        Ok(id)
    }

    /// Applies `patch` to the text with `id`.
    ///
    /// Returns `Ok(false)` without changes when no text has that id. The
    /// patched decoration is validated before it replaces the original.
    pub fn update_text(&mut self, id: &DecorationId, patch: TextPatch) -> Result<bool> {
        let Some(slot) = self.texts.iter_mut().find(|t| &t.id == id) else {
            return Ok(false);
        };

        let mut updated = slot.clone();
        if let Some(kind) = patch.kind {
            updated.kind = kind;
        }
        if let Some(text) = patch.text {
            updated.text = text;
        }
        if let Some(area) = patch.area {
            updated.area = area;
        }
        if let Some(font_family) = patch.font_family {
            updated.font_family = font_family;
        }
        if let Some(font_size) = patch.font_size {
            updated.font_size = font_size;
        }
        if let Some(color) = patch.color {
            updated.color = color;
        }
        if let Some(position) = patch.position {
            updated.position = position;
        }
        if let Some(rotation) = patch.rotation {
            updated.rotation = rotation;
        }
        validate_text_decoration(&updated)?;

        *slot = updated;
        Ok(true)
    }

    /// Applies `patch` to the logo with `id`; `Ok(false)` when absent.
    pub fn update_logo(&mut self, id: &DecorationId, patch: LogoPatch) -> Result<bool> {
        let Some(slot) = self.logos.iter_mut().find(|l| &l.id == id) else {
            return Ok(false);
        };

        let mut updated = slot.clone();
        if let Some(image_source) = patch.image_source {
            updated.image_source = image_source;
        }
        if let Some(area) = patch.area {
            updated.area = area;
        }
        if let Some(scale) = patch.scale {
            updated.scale = scale;
        }
        if let Some(position) = patch.position {
            updated.position = position;
        }
        if let Some(rotation) = patch.rotation {
            updated.rotation = rotation;
        }
        validate_logo_decoration(&updated)?;

        *slot = updated;
        Ok(true)
    }

    /// Removes the text with `id`. Returns whether one was removed.
    pub fn remove_text(&mut self, id: &DecorationId) -> bool {
        let before = self.texts.len();
        self.texts.retain(|t| &t.id != id);
        self.texts.len() != before
    }

    /// Removes the logo with `id`. Returns whether one was removed.
    pub fn remove_logo(&mut self, id: &DecorationId) -> bool {
        let before = self.logos.len();
        self.logos.retain(|l| &l.id != id);
        self.logos.len() != before
    }

    /// Replaces both lists, e.g. from a history snapshot. Ids stay reserved.
    pub fn restore(&mut self, texts: Vec<TextDecoration>, logos: Vec<LogoDecoration>) {
        self.texts = texts;
        self.logos = logos;
    }

    pub fn text(&self, id: &DecorationId) -> Option<&TextDecoration> {
        self.texts.iter().find(|t| &t.id == id)
    }

    pub fn logo(&self, id: &DecorationId) -> Option<&LogoDecoration> {
        self.logos.iter().find(|l| &l.id == id)
    }

    pub fn texts(&self) -> &[TextDecoration] {
        &self.texts
    }

    pub fn logos(&self) -> &[LogoDecoration] {
        &self.logos
    }
}
