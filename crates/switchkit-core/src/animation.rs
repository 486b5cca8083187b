//! Tween-based animation primitives driven by host frame ticks.
//!
//! Time is measured in whole milliseconds. A [`Tween`] may wait for a start
//! delay before it begins changing; until then it yields no value so the
//! animated field keeps whatever it currently holds.
//!
//! Cancellation uses generation tokens: every transition takes a fresh
//! [`TransitionToken`] from a [`TokenSource`], and work carrying a token that
//! is no longer current must be dropped.

use crate::Color;

// =============================================================================
// Interpolate Trait
// =============================================================================

/// Trait for types that can be linearly interpolated.
///
/// Implementations return `from` exactly at `t <= 0` and `to` exactly at
/// `t >= 1`.
pub trait Interpolate: Copy {
    /// Interpolate between two values.
    fn interpolate(from: &Self, to: &Self, t: f32) -> Self;
}

impl Interpolate for f32 {
    fn interpolate(from: &Self, to: &Self, t: f32) -> Self {
        if t <= 0.0 {
            *from
        } else if t >= 1.0 {
            *to
        } else {
            (*to - *from).mul_add(t, *from)
        }
    }
}

impl Interpolate for Color {
    fn interpolate(from: &Self, to: &Self, t: f32) -> Self {
        from.lerp(to, t)
    }
}

// =============================================================================
// Tween
// =============================================================================

/// A linear tween between two values with an optional start delay.
#[derive(Debug, Clone, PartialEq)]
pub struct Tween<T> {
    /// Starting value
    pub from: T,
    /// Ending value
    pub to: T,
    /// Time before the tween starts, in milliseconds
    pub delay_ms: u32,
    /// Duration in milliseconds
    pub duration_ms: u32,
    /// Elapsed time including the delay
    elapsed_ms: u32,
}

impl<T: Interpolate> Tween<T> {
    /// Create a new tween that starts immediately.
    #[must_use]
    pub const fn new(from: T, to: T, duration_ms: u32) -> Self {
        Self {
            from,
            to,
            delay_ms: 0,
            duration_ms,
            elapsed_ms: 0,
        }
    }

    /// Set the start delay.
    #[must_use]
    pub const fn with_delay(mut self, delay_ms: u32) -> Self {
        self.delay_ms = delay_ms;
        self
    }

    /// Elapsed time including the delay.
    #[must_use]
    pub const fn elapsed_ms(&self) -> u32 {
        self.elapsed_ms
    }

    /// Delay plus duration.
    #[must_use]
    pub const fn total_ms(&self) -> u32 {
        self.delay_ms.saturating_add(self.duration_ms)
    }

    /// Whether the start delay has passed.
    #[must_use]
    pub const fn is_started(&self) -> bool {
        self.elapsed_ms >= self.delay_ms
    }

    /// Check if the tween is complete.
    #[must_use]
    pub const fn is_complete(&self) -> bool {
        self.elapsed_ms >= self.total_ms()
    }

    /// Get the normalized progress (0.0 to 1.0) after the delay.
    #[must_use]
    pub fn progress(&self) -> f32 {
        if !self.is_started() {
            return 0.0;
        }
        if self.duration_ms == 0 {
            return 1.0;
        }
        let active = self.elapsed_ms - self.delay_ms;
        (active as f32 / self.duration_ms as f32).min(1.0)
    }

    /// Current value, or `None` while the start delay is pending.
    #[must_use]
    pub fn value(&self) -> Option<T> {
        self.is_started()
            .then(|| T::interpolate(&self.from, &self.to, self.progress()))
    }

    /// Advance the tween by delta milliseconds.
    pub fn advance(&mut self, delta_ms: u32) {
        self.elapsed_ms = self
            .elapsed_ms
            .saturating_add(delta_ms)
            .min(self.total_ms());
    }
}

/// Convert a travel distance into a whole-millisecond duration.
///
/// Non-finite or negative products yield zero.
#[must_use]
pub fn duration_for_distance(distance: f32, per_pixel_ms: f32) -> u32 {
    let ms = distance.abs() * per_pixel_ms;
    if ms.is_finite() && ms > 0.0 {
        ms.min(u32::MAX as f32) as u32
    } else {
        0
    }
}

// =============================================================================
// Generation tokens
// =============================================================================

/// Identifies one transition; stale tokens must be ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct TransitionToken(u64);

impl TransitionToken {
    /// Raw generation number.
    #[must_use]
    pub const fn generation(self) -> u64 {
        self.0
    }
}

/// Issues monotonically increasing transition tokens.
#[derive(Debug, Clone, Default)]
pub struct TokenSource {
    current: u64,
}

impl TokenSource {
    /// Create a source whose first token is generation 1.
    #[must_use]
    pub const fn new() -> Self {
        Self { current: 0 }
    }

    /// Issue a new token, invalidating every earlier one.
    pub fn issue(&mut self) -> TransitionToken {
        self.current = self.current.wrapping_add(1);
        TransitionToken(self.current)
    }

    /// Invalidate the current token without starting anything new.
    pub fn invalidate(&mut self) {
        self.current = self.current.wrapping_add(1);
    }

    /// Whether a token is still the latest issued.
    #[must_use]
    pub const fn is_current(&self, token: TransitionToken) -> bool {
        token.0 == self.current
    }
}

// =============================================================================
// Tests - TDD Style
// =============================================================================
