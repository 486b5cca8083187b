//! Animated state transitions.
//!
//! A transition moves the knob to one end of travel and, when the configured
//! colors differ between states, cross-fades the knob and track colors over
//! the second half of the travel. All tracks start together and advance
//! independently on each host tick.

use crate::geometry::SwitchGeometry;
use crate::style::SwitchConfig;
use switchkit_core::{Color, TransitionToken, Tween};

/// Field values produced by one tick of a transition.
///
/// `None` means the field is untouched this frame.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FrameUpdate {
    /// New knob center X
    pub knob_x: Option<f32>,
    /// New knob paint color
    pub knob_color: Option<Color>,
    /// New track fill color
    pub track_color: Option<Color>,
}

impl FrameUpdate {
    /// Whether any field changed.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.knob_x.is_none() && self.knob_color.is_none() && self.track_color.is_none()
    }
}

/// An in-flight move toward one logical state.
#[derive(Debug, Clone)]
pub struct Transition {
    token: TransitionToken,
    target: bool,
    position: Tween<f32>,
    knob_color: Option<Tween<Color>>,
    track_color: Option<Tween<Color>>,
}

impl Transition {
    /// Build a transition from the knob's current position toward `target`.
    #[must_use]
    pub fn new(
        token: TransitionToken,
        target: bool,
        from_x: f32,
        geometry: &SwitchGeometry,
        config: &SwitchConfig,
    ) -> Self {
        let to_x = geometry.end_for(target);
        let position = Tween::new(from_x, to_x, geometry.travel_ms(from_x, to_x));

        let delay = geometry.color_delay_ms();
        let duration = geometry.color_duration_ms();
        let color_track = |from: Color, to: Color| {
            (from != to).then(|| Tween::new(from, to, duration).with_delay(delay))
        };

        Self {
            token,
            target,
            position,
            knob_color: color_track(config.knob_color(!target), config.knob_color(target)),
            track_color: color_track(config.track_color(!target), config.track_color(target)),
        }
    }

    /// Token this transition was started with.
    #[must_use]
    pub const fn token(&self) -> TransitionToken {
        self.token
    }

    /// Logical state the transition moves toward.
    #[must_use]
    pub const fn target(&self) -> bool {
        self.target
    }

    /// Number of color tracks running alongside the position track.
    #[must_use]
    pub fn color_track_count(&self) -> usize {
        usize::from(self.knob_color.is_some()) + usize::from(self.track_color.is_some())
    }

    /// Whether every track has finished.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.position.is_complete()
            && self.knob_color.as_ref().map_or(true, Tween::is_complete)
            && self.track_color.as_ref().map_or(true, Tween::is_complete)
    }

    /// Advance all tracks and report the fields they now hold.
    pub fn advance(&mut self, delta_ms: u32) -> FrameUpdate {
        self.position.advance(delta_ms);
        if let Some(tween) = self.knob_color.as_mut() {
            tween.advance(delta_ms);
        }
        if let Some(tween) = self.track_color.as_mut() {
            tween.advance(delta_ms);
        }

        FrameUpdate {
            knob_x: self.position.value(),
            knob_color: self.knob_color.as_ref().and_then(Tween::value),
            track_color: self.track_color.as_ref().and_then(Tween::value),
        }
    }
}
