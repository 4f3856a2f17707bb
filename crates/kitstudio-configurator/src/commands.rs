//! Data-driven command dispatch.
//!
//! [`ConfiguratorCommand`] mirrors every facade command so a UI, a script
//! or a test can drive the engine with plain data.

use kitstudio_core::{
    Area, DecorationId, FillType, GradientConfig, PatternConfig, ProductType, Result,
};
use serde::{Deserialize, Serialize};

use crate::configurator::Configurator;
use crate::decorations::{LogoPatch, NewLogo, NewText, TextPatch};

/// A single configurator command
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(
    tag = "command",
    rename_all = "camelCase",
    rename_all_fields = "camelCase"
)]
pub enum ConfiguratorCommand {
    SetSelectedProduct {
        product: ProductType,
    },
    SetFillType {
        area: Area,
        fill_type: FillType,
    },
    SetColor {
        area: Area,
        color: String,
    },
    LinkAreas {
        source: Area,
        targets: Vec<Area>,
    },
    UnlinkArea {
        area: Area,
    },
    SetPattern {
        area: Area,
        #[serde(default)]
        pattern: Option<PatternConfig>,
    },
    SetGradient {
        area: Area,
        #[serde(default)]
        gradient: Option<GradientConfig>,
    },
    ToggleGradient {
        area: Area,
        enabled: bool,
    },
    AddText(NewText),
    UpdateText {
        id: DecorationId,
        patch: TextPatch,
    },
    RemoveText {
        id: DecorationId,
    },
    AddLogo(NewLogo),
    UpdateLogo {
        id: DecorationId,
        patch: LogoPatch,
    },
    RemoveLogo {
        id: DecorationId,
    },
    Commit,
    Undo,
    Redo,
    Reset,
}

/// What a dispatched command produced
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "outcome", content = "value", rename_all = "camelCase")]
pub enum CommandOutcome {
    /// The command ran; nothing further to report
    Applied,
    /// Color set; the link targets that received it
    Propagated(Vec<Area>),
    /// Decoration created with this id
    Added(DecorationId),
    /// Whether an update/remove/unlink/undo/redo changed anything
    Changed(bool),
    /// Snapshot committed at this history index
    Committed(usize),
}

impl Configurator {
    /// Runs `command` against the engine.
    pub fn dispatch(&mut self, command: ConfiguratorCommand) -> Result<CommandOutcome> {
        use ConfiguratorCommand as C;

        let outcome = match command {
            C::SetSelectedProduct { product } => {
                self.set_selected_product(product);
                CommandOutcome::Applied
            }
            C::SetFillType { area, fill_type } => {
                self.set_fill_type(area, fill_type)?;
                CommandOutcome::Applied
            }
            C::SetColor { area, color } => CommandOutcome::Propagated(self.set_color(area, &color)?),
            C::LinkAreas { source, targets } => {
                self.link_areas(source, targets)?;
                CommandOutcome::Applied
            }
            C::UnlinkArea { area } => CommandOutcome::Changed(self.unlink_area(area)),
            C::SetPattern { area, pattern } => {
                self.set_pattern(area, pattern)?;
                CommandOutcome::Applied
            }
            C::SetGradient { area, gradient } => {
                self.set_gradient(area, gradient)?;
                CommandOutcome::Applied
            }
            C::ToggleGradient { area, enabled } => {
                self.toggle_gradient(area, enabled)?;
                CommandOutcome::Applied
            }
            C::AddText(text) => CommandOutcome::Added(self.add_text(text)?),
            C::UpdateText { id, patch } => CommandOutcome::Changed(self.update_text(&id, patch)?),
            C::RemoveText { id } => CommandOutcome::Changed(self.remove_text(&id)),
            C::AddLogo(logo) => CommandOutcome::Added(self.add_logo(logo)?),
            C::UpdateLogo { id, patch } => CommandOutcome::Changed(self.update_logo(&id, patch)?),
            C::RemoveLogo { id } => CommandOutcome::Changed(self.remove_logo(&id)),
            C::Commit => CommandOutcome::Committed(self.commit()),
            C::Undo => CommandOutcome::Changed(self.undo()),
            C::Redo => CommandOutcome::Changed(self.redo()),
            C::Reset => {
                self.reset();
                CommandOutcome::Applied
            }
        };
        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kitstudio_core::{ConfiguratorError, TextKind};

    #[test]
    fn test_parse_set_color() {
        let cmd: ConfiguratorCommand =
            serde_json::from_str(r##"{"command":"setColor","area":"front","color":"#FF0000"}"##)
                .unwrap();
        assert_eq!(
            cmd,
            ConfiguratorCommand::SetColor {
                area: Area::new("front"),
                color: "#FF0000".to_string(),
            }
        );
    }

    #[test]
    fn test_parse_add_text_flattened() {
        let cmd: ConfiguratorCommand = serde_json::from_str(
            r#"{"command":"addText","kind":"number","text":"10","area":"back","fontSize":40}"#,
        )
        .unwrap();
        match cmd {
            ConfiguratorCommand::AddText(text) => {
                assert_eq!(text.kind, TextKind::Number);
                assert_eq!(text.font_size, Some(40.0));
                assert_eq!(text.font_family, None);
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_parse_set_fill_type_camel_case_field() {
        let cmd: ConfiguratorCommand = serde_json::from_str(
            r#"{"command":"setFillType","area":"collar","fillType":"pattern"}"#,
        )
        .unwrap();
        assert_eq!(
            cmd,
            ConfiguratorCommand::SetFillType {
                area: Area::new("collar"),
                fill_type: FillType::Pattern,
            }
        );
    }

    #[test]
    fn test_dispatch_round() {
        let mut engine = Configurator::new();
        engine
            .dispatch(ConfiguratorCommand::LinkAreas {
                source: Area::new("front"),
                targets: vec![Area::new("back")],
            })
            .unwrap();
        let outcome = engine
            .dispatch(ConfiguratorCommand::SetColor {
                area: Area::new("front"),
                color: "#00ff00".to_string(),
            })
            .unwrap();
        assert_eq!(outcome, CommandOutcome::Propagated(vec![Area::new("back")]));
        assert_eq!(
            engine.dispatch(ConfiguratorCommand::Undo).unwrap(),
            CommandOutcome::Changed(true)
        );
        assert_eq!(engine.state().colors()["back"], "#ffffff");
    }

    #[test]
    fn test_dispatch_propagates_errors() {
        let mut engine = Configurator::new();
        let err = engine
            .dispatch(ConfiguratorCommand::SetColor {
                area: Area::new("front"),
                color: "teal".to_string(),
            })
            .unwrap_err();
        assert!(matches!(err, ConfiguratorError::InvalidColorFormat(_)));
    }

    #[test]
    fn test_outcome_json() {
        let json = serde_json::to_value(CommandOutcome::Committed(3)).unwrap();
        assert_eq!(json["outcome"], "committed");
        assert_eq!(json["value"], 3);
    }
}
