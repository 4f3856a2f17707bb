//! Configurator facade.
//!
//! Owns the [`ConfiguratorState`] and is the only way to change it. Every
//! command validates before it mutates, so a rejected command leaves the
//! state untouched. After each applied command the facade publishes the
//! specific change and the resulting [`RenderState`] on its event bus.

use std::sync::Arc;

use kitstudio_core::{
    AppEvent, Area, DecorationEvent, DecorationId, DecorationKind, EventBus, EventFilter,
    FillEvent, FillType, GradientConfig, HexColor, HistoryEvent, LinkEvent, LogoDecoration,
    PatternConfig, ProductEvent, ProductType, RenderState, Result, SubscriptionId,
    TextDecoration,
};
use kitstudio_settings::{CommitMode, ConfiguratorSettings};
use tracing::{debug, info, warn};

use crate::decorations::{LogoPatch, NewLogo, NewText, TextPatch};
use crate::history::HistorySnapshot;
use crate::state::ConfiguratorState;

/// Command surface of the configurator engine
#[derive(Debug)]
pub struct Configurator {
    state: ConfiguratorState,
    settings: ConfiguratorSettings,
    bus: Arc<EventBus>,
}

impl Configurator {
    /// Creates an engine with default settings.
    pub fn new() -> Self {
        Self::with_settings(ConfiguratorSettings::default())
    }

    /// Creates an engine in the default state for `settings`.
    pub fn with_settings(settings: ConfiguratorSettings) -> Self {
        let bus = Arc::new(EventBus::with_config(settings.event_bus_config()));
        Self {
            state: ConfiguratorState::new(&settings),
            settings,
            bus,
        }
    }

    pub fn state(&self) -> &ConfiguratorState {
        &self.state
    }

    pub fn settings(&self) -> &ConfiguratorSettings {
        &self.settings
    }

    /// Shared handle to the bus this engine publishes on.
    pub fn event_bus(&self) -> Arc<EventBus> {
        Arc::clone(&self.bus)
    }

    /// Registers a synchronous handler on the engine's bus.
    pub fn subscribe<F>(&self, filter: impl Into<EventFilter>, handler: F) -> SubscriptionId
    where
        F: Fn(&AppEvent) + Send + Sync + 'static,
    {
        self.bus.subscribe(filter, handler)
    }

    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.bus.unsubscribe(id)
    }

    pub fn render_state(&self) -> RenderState {
        self.state.render_state()
    }

    pub fn can_undo(&self) -> bool {
        self.state.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.state.history.can_redo()
    }

    pub fn text(&self, id: &DecorationId) -> Option<&TextDecoration> {
        self.state.decorations.text(id)
    }

    pub fn logo(&self, id: &DecorationId) -> Option<&LogoDecoration> {
        self.state.decorations.logo(id)
    }

    /// Texts placed on an area of the selected product.
    pub fn visible_texts(&self) -> impl Iterator<Item = &TextDecoration> {
        self.state.visible_texts()
    }

    /// Logos placed on an area of the selected product.
    pub fn visible_logos(&self) -> impl Iterator<Item = &LogoDecoration> {
        self.state.visible_logos()
    }

    /// Switches product and rebuilds every fill map for its area set.
    ///
    /// Links, decorations and history survive the switch. Entries that name
    /// areas of the previous product stay stored but are skipped by color
    /// propagation and left out of the render state.
    pub fn set_selected_product(&mut self, product: ProductType) {
        let from = self.state.selected_product;
        let switched = self.mutate("setSelectedProduct", |state, settings| {
            state.selected_product = product;
            state.fills.reinitialize(product, &settings.default_color);
            Ok(())
        });
        if switched.is_ok() {
            info!("Product switched {} -> {}", from, product);
            self.finish(vec![AppEvent::Product(ProductEvent::Switched {
                from,
                to: product,
            })]);
        }
    }

    /// Sets how `area` is painted. Stored fill values are kept.
    pub fn set_fill_type(&mut self, area: impl Into<Area>, fill_type: FillType) -> Result<()> {
        let area = area.into();
        self.mutate("setFillType", |state, _| {
            state.fills.set_fill_type(&area, fill_type)
        })?;
        debug!("Fill type of {} set to {}", area, fill_type);
        self.finish(vec![AppEvent::Fill(FillEvent::FillTypeChanged { area, fill_type })]);
        Ok(())
    }

    /// Sets the color of `area` and copies it to the area's direct link targets.
    ///
    /// Returns the targets that received the color.
    pub fn set_color(&mut self, area: impl Into<Area>, color: &str) -> Result<Vec<Area>> {
        let area = area.into();
        let propagated = self.mutate("setColor", |state, _| {
            let color: HexColor = color.parse()?;
            state
                .fills
                .set_color(&area, &color, &state.linked_areas)
                .map(|targets| (color, targets))
        })?;
        let (color, targets) = propagated;
        debug!(
            "Color of {} set to {} (propagated to {})",
            area,
            color,
            targets.len()
        );
        self.finish(vec![AppEvent::Fill(FillEvent::ColorChanged {
            area,
            color,
            propagated_to: targets.clone(),
        })]);
        Ok(targets)
    }

    /// Adds `targets` to the link set of `source`.
    ///
    /// Current colors are not copied; the next color write on `source` propagates.
    /// Nothing is linked or published when `targets` names no area besides `source`.
    pub fn link_areas<I, A>(&mut self, source: impl Into<Area>, targets: I) -> Result<()>
    where
        I: IntoIterator<Item = A>,
        A: Into<Area>,
    {
        let source = source.into();
        let targets: Vec<Area> = targets.into_iter().map(Into::into).collect();
        let linked = self.mutate("linkAreas", |state, _| {
            state.fills.ensure_area(&source)?;
            for target in &targets {
                state.fills.ensure_area(target)?;
            }
            Ok(state
                .linked_areas
                .link(source.clone(), targets)
                .iter()
                .cloned()
                .collect::<Vec<_>>())
        })?;
        if linked.is_empty() {
            return Ok(());
        }
        debug!("{} linked to {:?}", source, linked);
        self.finish(vec![AppEvent::Link(LinkEvent::Linked {
            source,
            targets: linked,
        })]);
        Ok(())
    }

    /// Removes the link entry whose source is `area`. Returns whether one existed.
    pub fn unlink_area(&mut self, area: impl Into<Area>) -> bool {
        let area = area.into();
        if !self.state.linked_areas.unlink(area.as_str()) {
            return false;
        }
        debug!("{} unlinked", area);
        self.finish(vec![AppEvent::Link(LinkEvent::Unlinked { source: area })]);
        true
    }

    /// Stores or clears the pattern of `area`. The fill type is not changed.
    pub fn set_pattern(
        &mut self,
        area: impl Into<Area>,
        pattern: Option<PatternConfig>,
    ) -> Result<()> {
        let area = area.into();
        self.mutate("setPattern", |state, _| {
            state.fills.set_pattern(&area, pattern.clone())
        })?;
        debug!("Pattern of {} updated", area);
        self.finish(vec![AppEvent::Fill(FillEvent::PatternChanged { area, pattern })]);
        Ok(())
    }

    /// Stores or clears the gradient of `area`. The fill type is not changed.
    pub fn set_gradient(
        &mut self,
        area: impl Into<Area>,
        gradient: Option<GradientConfig>,
    ) -> Result<()> {
        let area = area.into();
        self.mutate("setGradient", |state, _| {
            state.fills.set_gradient(&area, gradient.clone())
        })?;
        debug!("Gradient of {} updated", area);
        self.finish(vec![AppEvent::Fill(FillEvent::GradientChanged {
            area,
            gradient,
        })]);
        Ok(())
    }

    /// Turns the gradient of `area` on or off and switches the fill type to match.
    ///
    /// A default gradient is created when the area has none. Enabling selects
    /// the `gradient` fill type, disabling falls back to `color`.
    pub fn toggle_gradient(&mut self, area: impl Into<Area>, enabled: bool) -> Result<()> {
        let area = area.into();
        let (gradient, fill_type) = self.mutate("toggleGradient", |state, _| {
            let mut gradient = state.fills.gradient(area.as_str()).cloned().unwrap_or_default();
            gradient.enabled = enabled;
            let fill_type = if enabled {
                FillType::Gradient
            } else {
                FillType::Color
            };
            state.fills.set_gradient(&area, Some(gradient.clone()))?;
            state.fills.set_fill_type(&area, fill_type)?;
            Ok((gradient, fill_type))
        })?;
        debug!("Gradient of {} toggled {}", area, enabled);
        self.finish(vec![
            AppEvent::Fill(FillEvent::GradientChanged {
                area: area.clone(),
                gradient: Some(gradient),
            }),
            AppEvent::Fill(FillEvent::FillTypeChanged { area, fill_type }),
        ]);
        Ok(())
    }

    /// Appends a text decoration and returns its id.
    pub fn add_text(&mut self, text: NewText) -> Result<DecorationId> {
        let id = self.mutate("addText", |state, settings| {
            state.fills.ensure_area(&text.area)?;
            state.decorations.add_text(text, &settings.text_defaults)
        })?;
        debug!("Added text {}", id);
        self.finish(vec![decoration_event(
            DecorationEventKind::Added,
            &id,
            DecorationKind::Text,
        )]);
        Ok(id)
    }

    /// Patches the text with `id`; `Ok(false)` when no such text exists.
    pub fn update_text(&mut self, id: &DecorationId, patch: TextPatch) -> Result<bool> {
        let changed = self.mutate("updateText", |state, _| {
            if let Some(area) = &patch.area {
                state.fills.ensure_area(area)?;
            }
            state.decorations.update_text(id, patch)
        })?;
        if changed {
            debug!("Updated text {}", id);
            self.finish(vec![decoration_event(
                DecorationEventKind::Updated,
                id,
                DecorationKind::Text,
            )]);
        }
        Ok(changed)
    }

    /// Removes the text with `id`. Returns whether it existed.
    pub fn remove_text(&mut self, id: &DecorationId) -> bool {
        let removed = self
            .mutate("removeText", |state, _| Ok(state.decorations.remove_text(id)))
            .unwrap_or(false);
        if removed {
            debug!("Removed text {}", id);
            self.finish(vec![decoration_event(
                DecorationEventKind::Removed,
                id,
                DecorationKind::Text,
            )]);
        }
        removed
    }

    /// Appends a logo decoration and returns its id.
    pub fn add_logo(&mut self, logo: NewLogo) -> Result<DecorationId> {
        let id = self.mutate("addLogo", |state, _| {
            state.fills.ensure_area(&logo.area)?;
            state.decorations.add_logo(logo)
        })?;
        debug!("Added logo {}", id);
        self.finish(vec![decoration_event(
            DecorationEventKind::Added,
            &id,
            DecorationKind::Logo,
        )]);
        Ok(id)
    }

    /// Patches the logo with `id`; `Ok(false)` when no such logo exists.
    pub fn update_logo(&mut self, id: &DecorationId, patch: LogoPatch) -> Result<bool> {
        let changed = self.mutate("updateLogo", |state, _| {
            if let Some(area) = &patch.area {
                state.fills.ensure_area(area)?;
            }
            state.decorations.update_logo(id, patch)
        })?;
        if changed {
            debug!("Updated logo {}", id);
            self.finish(vec![decoration_event(
                DecorationEventKind::Updated,
                id,
                DecorationKind::Logo,
            )]);
        }
        Ok(changed)
    }

    /// Removes the logo with `id`. Returns whether it existed.
    pub fn remove_logo(&mut self, id: &DecorationId) -> bool {
        let removed = self
            .mutate("removeLogo", |state, _| Ok(state.decorations.remove_logo(id)))
            .unwrap_or(false);
        if removed {
            debug!("Removed logo {}", id);
            self.finish(vec![decoration_event(
                DecorationEventKind::Removed,
                id,
                DecorationKind::Logo,
            )]);
        }
        removed
    }

    /// Commits the current values as a new history snapshot and returns its index.
    pub fn commit(&mut self) -> usize {
        let index = self.commit_snapshot(self.state.snapshot());
        self.finish(Vec::new());
        index
    }

    /// Steps back one snapshot and restores it. Returns false when there is nothing to undo.
    pub fn undo(&mut self) -> bool {
        let Some(snapshot) = self.state.history.undo().cloned() else {
            return false;
        };
        self.state.apply_snapshot(snapshot, &self.settings.default_color);
        let index = self.state.history.index().unwrap_or_default();
        debug!("Undo to snapshot {}", index);
        self.finish(vec![AppEvent::History(HistoryEvent::Undone { index })]);
        true
    }

    /// Steps forward one snapshot and restores it. Returns false when there is nothing to redo.
    pub fn redo(&mut self) -> bool {
        let Some(snapshot) = self.state.history.redo().cloned() else {
            return false;
        };
        self.state.apply_snapshot(snapshot, &self.settings.default_color);
        let index = self.state.history.index().unwrap_or_default();
        debug!("Redo to snapshot {}", index);
        self.finish(vec![AppEvent::History(HistoryEvent::Redone { index })]);
        true
    }

    /// Replaces the whole state with a fresh default state.
    pub fn reset(&mut self) {
        self.state = ConfiguratorState::new(&self.settings);
        info!("Configuration reset");
        self.finish(vec![AppEvent::Product(ProductEvent::Reset)]);
    }

    /// Runs `op` against the state and records history for it in auto mode.
    fn mutate<T>(
        &mut self,
        name: &str,
        op: impl FnOnce(&mut ConfiguratorState, &ConfiguratorSettings) -> Result<T>,
    ) -> Result<T> {
        let auto = self.settings.commit_mode == CommitMode::Auto;
        let baseline = (auto && self.state.history.is_empty()).then(|| self.state.snapshot());

        let value = op(&mut self.state, &self.settings).inspect_err(|err| {
            warn!("{} rejected: {}", name, err);
        })?;

        if auto {
            self.auto_commit(baseline);
        }
        Ok(value)
    }

    /// Commits the current values unless they equal the snapshot under the cursor.
    ///
    /// `baseline` is the state before the first recorded change; it is
    /// committed first so that change can be undone.
    fn auto_commit(&mut self, baseline: Option<HistorySnapshot>) {
        let snapshot = self.state.snapshot();
        if let Some(baseline) = baseline {
            if baseline == snapshot {
                return;
            }
            self.commit_snapshot(baseline);
        } else if self.state.history.current() == Some(&snapshot) {
            return;
        }
        self.commit_snapshot(snapshot);
    }

    fn commit_snapshot(&mut self, snapshot: HistorySnapshot) -> usize {
        let index = self.state.history.commit(snapshot);
        self.publish(AppEvent::History(HistoryEvent::Committed {
            index,
            len: self.state.history.len(),
        }));
        index
    }

    /// Publishes `events`, then the resulting render state.
    fn finish(&self, events: Vec<AppEvent>) {
        for event in events {
            self.publish(event);
        }
        self.publish(AppEvent::State(Box::new(self.state.render_state())));
    }

    fn publish(&self, event: AppEvent) {
        // Nobody listening is not an error for the engine
        self.bus.publish(event).ok();
    }
}

impl Default for Configurator {
    fn default() -> Self {
        Self::new()
    }
}

enum DecorationEventKind {
    Added,
    Updated,
    Removed,
}

fn decoration_event(
    what: DecorationEventKind,
    id: &DecorationId,
    kind: DecorationKind,
) -> AppEvent {
    let id = id.clone();
    AppEvent::Decoration(match what {
        DecorationEventKind::Added => DecorationEvent::Added { id, kind },
        DecorationEventKind::Updated => DecorationEvent::Updated { id, kind },
        DecorationEventKind::Removed => DecorationEvent::Removed { id, kind },
    })
}
