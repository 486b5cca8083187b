//! Toggle switch widget with a draggable knob.

use crate::error::StyleError;
use crate::geometry::SwitchGeometry;
use crate::style::{SwitchConfig, SwitchStyle};
use crate::track::TrackRenderer;
use crate::transition::{FrameUpdate, Transition};
use std::any::Any;
use std::fmt;
use std::sync::Arc;
use switchkit_core::{
    widget::{AccessibleRole, LayoutResult},
    CacheStats, Canvas, Color, Constraints, Event, Point, Rect, Size, Surface, TokenSource, TypeId,
    Widget,
};

/// Callback invoked with the new value after a user-driven flip.
pub type CheckedListener = Box<dyn FnMut(bool) + Send>;

/// Message emitted when the user flips the switch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SwitchChanged {
    /// The new state
    pub checked: bool,
}

/// Two-state switch with an animated, draggable knob.
///
/// The knob follows pointer moves while dragging. On release it settles to
/// the nearer end, animating unless it is already within the dead zone of
/// an end. A release without a preceding move toggles the switch.
///
/// Animations only advance when the host calls [`Widget::tick`].
pub struct Switch {
    config: SwitchConfig,
    geometry: SwitchGeometry,
    bounds: Rect,
    laid_out: bool,
    checked: bool,
    dragging: bool,
    knob_x: f32,
    knob_color: Color,
    track_color: Color,
    track: Option<Arc<Surface>>,
    renderer: TrackRenderer,
    transition: Option<Transition>,
    tokens: TokenSource,
    needs_redraw: bool,
    listener: Option<CheckedListener>,
    accessible_name_value: Option<String>,
    test_id_value: Option<String>,
}

impl fmt::Debug for Switch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Switch")
            .field("config", &self.config)
            .field("bounds", &self.bounds)
            .field("checked", &self.checked)
            .field("dragging", &self.dragging)
            .field("knob_x", &self.knob_x)
            .field("knob_color", &self.knob_color)
            .field("track_color", &self.track_color)
            .field("animating", &self.is_animating())
            .field("has_listener", &self.listener.is_some())
            .finish_non_exhaustive()
    }
}

impl Default for Switch {
    fn default() -> Self {
        Self::from_config(SwitchConfig::default())
    }
}

impl Switch {
    /// Create a switch with default styling.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a switch from a resolved configuration.
    #[must_use]
    pub fn from_config(config: SwitchConfig) -> Self {
        Self {
            config,
            geometry: SwitchGeometry::default(),
            bounds: Rect::default(),
            laid_out: false,
            checked: config.is_checked,
            dragging: false,
            knob_x: 0.0,
            knob_color: config.knob_color(config.is_checked),
            track_color: config.track_color(config.is_checked),
            track: None,
            renderer: TrackRenderer::new(),
            transition: None,
            tokens: TokenSource::new(),
            needs_redraw: true,
            listener: None,
            accessible_name_value: None,
            test_id_value: None,
        }
    }

    /// Create a switch from a style at the given display density.
    pub fn from_style(style: &SwitchStyle, density: f32) -> Result<Self, StyleError> {
        Ok(Self::from_config(style.resolve(density)?))
    }

    /// Set the knob radius in pixels.
    #[must_use]
    pub fn radius(mut self, radius: f32) -> Self {
        self.config.radius = radius.max(0.0);
        self.reconfigure()
    }

    /// Set the gap between knob and track edge in pixels.
    #[must_use]
    pub fn inner_padding(mut self, padding: f32) -> Self {
        self.config.inner_padding = padding.max(0.0);
        self.reconfigure()
    }

    /// Set the knob color when checked.
    #[must_use]
    pub fn checked_color(mut self, color: Color) -> Self {
        self.config.checked_color = color;
        self.reconfigure()
    }

    /// Set the knob color when unchecked.
    #[must_use]
    pub fn unchecked_color(mut self, color: Color) -> Self {
        self.config.unchecked_color = color;
        self.reconfigure()
    }

    /// Set the track color when unchecked.
    #[must_use]
    pub fn background_color(mut self, color: Color) -> Self {
        self.config.background_color = color;
        self.reconfigure()
    }

    /// Set the track color when checked.
    #[must_use]
    pub fn checked_background_color(mut self, color: Color) -> Self {
        self.config.checked_background_color = Some(color);
        self.reconfigure()
    }

    /// Set the initial state.
    #[must_use]
    pub fn checked(mut self, checked: bool) -> Self {
        self.config.is_checked = checked;
        self.checked = checked;
        self.reconfigure()
    }

    /// Set the full-travel animation duration.
    #[must_use]
    pub fn animation_duration(mut self, duration_ms: u32) -> Self {
        self.config.animation_duration_ms = duration_ms;
        self.reconfigure()
    }

    /// Set the change listener.
    #[must_use]
    pub fn on_checked(mut self, listener: impl FnMut(bool) + Send + 'static) -> Self {
        self.listener = Some(Box::new(listener));
        self
    }

    /// Set the accessible name.
    #[must_use]
    pub fn accessible_name(mut self, name: impl Into<String>) -> Self {
        self.accessible_name_value = Some(name.into());
        self
    }

    /// Set the test ID.
    #[must_use]
    pub fn test_id(mut self, id: impl Into<String>) -> Self {
        self.test_id_value = Some(id.into());
        self
    }

    /// Current logical state.
    #[must_use]
    pub const fn is_checked(&self) -> bool {
        self.checked
    }

    /// Change the state programmatically.
    ///
    /// Animates toward the new state but never invokes the listener.
    pub fn set_checked(&mut self, checked: bool) {
        if checked == self.checked {
            return;
        }
        log::debug!("switch set to {checked} programmatically");
        self.start_transition(checked);
        self.checked = checked;
    }

    /// Replace the change listener. `None` removes it.
    pub fn set_on_checked_listener(&mut self, listener: Option<CheckedListener>) {
        self.listener = listener;
    }

    /// Resolved configuration.
    #[must_use]
    pub const fn config(&self) -> &SwitchConfig {
        &self.config
    }

    /// Travel geometry from the last layout.
    #[must_use]
    pub const fn geometry(&self) -> &SwitchGeometry {
        &self.geometry
    }

    /// Knob center X in local coordinates.
    #[must_use]
    pub const fn knob_position(&self) -> f32 {
        self.knob_x
    }

    /// Current knob paint color.
    #[must_use]
    pub const fn knob_color(&self) -> Color {
        self.knob_color
    }

    /// Current track fill color.
    #[must_use]
    pub const fn track_color(&self) -> Color {
        self.track_color
    }

    /// Rendered track, available after the first layout.
    #[must_use]
    pub const fn track_surface(&self) -> Option<&Arc<Surface>> {
        self.track.as_ref()
    }

    /// Whether the knob is following a pointer.
    #[must_use]
    pub const fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Track surface cache statistics.
    #[must_use]
    pub const fn track_cache_stats(&self) -> &CacheStats {
        self.renderer.stats()
    }

    fn reconfigure(mut self) -> Self {
        self.knob_color = self.config.knob_color(self.checked);
        self.track_color = self.config.track_color(self.checked);
        if self.laid_out {
            self.apply_layout();
        }
        self
    }

    fn apply_layout(&mut self) {
        self.geometry = SwitchGeometry::compute(
            self.config.radius,
            self.config.inner_padding,
            self.config.animation_duration_ms,
        );
        self.cancel_transition();
        self.dragging = false;
        self.sync_to_state();
    }

    /// Jump every render field to the resting values of the logical state.
    fn sync_to_state(&mut self) {
        self.knob_x = self.geometry.end_for(self.checked);
        self.knob_color = self.config.knob_color(self.checked);
        self.set_track_color(self.config.track_color(self.checked));
        self.needs_redraw = true;
    }

    fn set_track_color(&mut self, color: Color) {
        self.track_color = color;
        if self.laid_out {
            let corner = SwitchGeometry::track_corner_radius(self.config.radius, self.config.inner_padding);
            self.track = Some(self.renderer.render(self.bounds.size(), corner, color));
        }
    }

    fn cancel_transition(&mut self) {
        if self.has_live_transition() {
            self.tokens.invalidate();
        }
    }

    fn has_live_transition(&self) -> bool {
        self.transition
            .as_ref()
            .is_some_and(|t| self.tokens.is_current(t.token()))
    }

    fn start_transition(&mut self, target: bool) {
        if !self.laid_out {
            self.knob_color = self.config.knob_color(target);
            self.track_color = self.config.track_color(target);
            return;
        }
        let token = self.tokens.issue();
        log::debug!(
            "transition {} toward {target} from x={}",
            token.generation(),
            self.knob_x
        );
        self.transition = Some(Transition::new(
            token,
            target,
            self.knob_x,
            &self.geometry,
            &self.config,
        ));
        self.needs_redraw = true;
    }

    /// Record a user-driven state, notifying only on an actual flip.
    fn commit(&mut self, checked: bool) -> Option<SwitchChanged> {
        if self.checked == checked {
            return None;
        }
        self.checked = checked;
        if let Some(listener) = self.listener.as_mut() {
            listener(checked);
        }
        Some(SwitchChanged { checked })
    }

    fn transition_to(&mut self, target: bool) -> Option<SwitchChanged> {
        self.start_transition(target);
        self.commit(target)
    }

    fn on_drag(&mut self, local_x: f32) {
        if !self.laid_out {
            return;
        }
        if self.has_live_transition() {
            log::trace!("drag interrupts transition");
            self.tokens.invalidate();
        }
        self.dragging = true;
        self.knob_x = self.geometry.clamp(local_x);
        self.needs_redraw = true;
    }

    fn on_release(&mut self) -> Option<SwitchChanged> {
        if !self.dragging {
            return self.transition_to(!self.checked);
        }
        self.dragging = false;
        let target = self.geometry.side_of(self.knob_x);
        if self.geometry.is_mid_travel(self.knob_x) {
            self.transition_to(target)
        } else {
            self.snap_to(target)
        }
    }

    fn on_cancel(&mut self) {
        if self.dragging {
            self.dragging = false;
            self.start_transition(self.checked);
        }
    }

    fn snap_to(&mut self, checked: bool) -> Option<SwitchChanged> {
        log::debug!("knob released in dead zone, snapping to {checked}");
        self.tokens.invalidate();
        let changed = self.commit(checked);
        self.sync_to_state();
        changed
    }

    fn apply_frame(&mut self, update: FrameUpdate) {
        if let Some(x) = update.knob_x {
            self.knob_x = x;
        }
        if let Some(color) = update.knob_color {
            self.knob_color = color;
        }
        if let Some(color) = update.track_color {
            if color != self.track_color {
                self.set_track_color(color);
            }
        }
        if !update.is_empty() {
            self.needs_redraw = true;
        }
    }
}

impl Widget for Switch {
    fn type_id(&self) -> TypeId {
        TypeId::of::<Self>()
    }

    fn measure(&self, constraints: Constraints) -> Size {
        constraints.constrain(SwitchGeometry::intrinsic_size(
            self.config.radius,
            self.config.inner_padding,
        ))
    }

    fn layout(&mut self, bounds: Rect) -> LayoutResult {
        let resized = !self.laid_out || bounds.size() != self.bounds.size();
        self.bounds = bounds;
        self.laid_out = true;
        if resized {
            self.apply_layout();
        }
        LayoutResult {
            size: bounds.size(),
        }
    }

    fn paint(&self, canvas: &mut dyn Canvas) {
        let Some(track) = &self.track else {
            return;
        };
        canvas.draw_surface(track, self.bounds.origin());
        canvas.fill_circle(
            Point::new(
                self.bounds.x + self.knob_x,
                self.bounds.y + self.geometry.knob_y,
            ),
            self.config.radius,
            self.knob_color,
        );
    }

    fn event(&mut self, event: &Event) -> Option<Box<dyn Any + Send>> {
        let changed = match event {
            Event::PointerMove { position, .. } => {
                self.on_drag(position.x - self.bounds.x);
                None
            }
            Event::PointerUp { .. } => self.on_release(),
            Event::PointerCancel { .. } => {
                self.on_cancel();
                None
            }
            _ => None,
        };
        changed.map(|c| Box::new(c) as Box<dyn Any + Send>)
    }

    fn tick(&mut self, delta_ms: u32) -> bool {
        let Some(mut transition) = self.transition.take() else {
            return false;
        };
        if !self.tokens.is_current(transition.token()) {
            log::trace!("dropping stale transition {}", transition.token().generation());
            return false;
        }
        let update = transition.advance(delta_ms);
        self.apply_frame(update);
        if transition.is_complete() {
            log::debug!("transition {} settled at {}", transition.token().generation(), transition.target());
            false
        } else {
            self.transition = Some(transition);
            true
        }
    }

    fn is_animating(&self) -> bool {
        self.has_live_transition()
    }

    fn take_redraw_request(&mut self) -> bool {
        std::mem::take(&mut self.needs_redraw)
    }

    fn is_interactive(&self) -> bool {
        true
    }

    fn accessible_name(&self) -> Option<&str> {
        self.accessible_name_value.as_deref()
    }

    fn accessible_role(&self) -> AccessibleRole {
        AccessibleRole::Switch
    }

    fn test_id(&self) -> Option<&str> {
        self.test_id_value.as_deref()
    }

    fn bounds(&self) -> Rect {
        self.bounds
    }
}
