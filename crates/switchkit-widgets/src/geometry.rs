//! Knob travel geometry derived from radius, padding and duration.

use switchkit_core::{duration_for_distance, Size};

/// Margin at each end of travel where a drag release snaps instead of animating.
pub const DEAD_ZONE: f32 = 0.1;

/// Knob travel derived at layout time.
///
/// All X positions are knob centers in widget-local coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SwitchGeometry {
    /// Knob center when unchecked
    pub unchecked_x: f32,
    /// Knob center when checked
    pub checked_x: f32,
    /// Midpoint of travel
    pub middle_x: f32,
    /// Knob center Y
    pub knob_y: f32,
    /// Milliseconds per pixel of travel (0 for degenerate travel)
    pub per_pixel_ms: f32,
}

impl SwitchGeometry {
    /// Derive travel geometry.
    #[must_use]
    pub fn compute(radius: f32, inner_padding: f32, animation_duration_ms: u32) -> Self {
        let unchecked_x = radius + inner_padding;
        let checked_x = radius.mul_add(2.6, inner_padding);
        let middle_x = (unchecked_x + checked_x) / 2.0;
        let travel = (checked_x - unchecked_x).abs();
        let per_pixel_ms = if travel > 0.0 && travel.is_finite() {
            animation_duration_ms as f32 / travel
        } else {
            0.0
        };

        Self {
            unchecked_x,
            checked_x,
            middle_x,
            knob_y: inner_padding + radius,
            per_pixel_ms,
        }
    }

    /// Preferred size, truncated to whole pixels.
    #[must_use]
    pub fn intrinsic_size(radius: f32, inner_padding: f32) -> Size {
        let width = radius.mul_add(3.6, inner_padding * 2.0);
        let height = radius.mul_add(2.0, inner_padding * 2.0);
        Size::new(width.trunc().max(0.0), height.trunc().max(0.0))
    }

    /// Corner radius of the track.
    #[must_use]
    pub fn track_corner_radius(radius: f32, inner_padding: f32) -> f32 {
        radius + inner_padding
    }

    /// Knob center for a logical state.
    #[must_use]
    pub const fn end_for(&self, checked: bool) -> f32 {
        if checked {
            self.checked_x
        } else {
            self.unchecked_x
        }
    }

    /// Clamp a pointer X into the knob's travel.
    #[must_use]
    pub fn clamp(&self, x: f32) -> f32 {
        let lo = self.unchecked_x.min(self.checked_x);
        let hi = self.unchecked_x.max(self.checked_x);
        if x < lo {
            lo
        } else if x > hi {
            hi
        } else {
            x
        }
    }

    /// Whether `x` lies strictly inside travel, outside the dead zones.
    #[must_use]
    pub fn is_mid_travel(&self, x: f32) -> bool {
        x > self.unchecked_x + DEAD_ZONE && x < self.checked_x - DEAD_ZONE
    }

    /// Logical state on the knob's side of the midpoint.
    #[must_use]
    pub fn side_of(&self, x: f32) -> bool {
        x >= self.middle_x
    }

    /// Duration to move the knob between two positions.
    #[must_use]
    pub fn travel_ms(&self, from: f32, to: f32) -> u32 {
        duration_for_distance(to - from, self.per_pixel_ms)
    }

    /// Delay before color tracks start.
    #[must_use]
    pub fn color_delay_ms(&self) -> u32 {
        duration_for_distance(self.unchecked_x - self.middle_x, self.per_pixel_ms)
    }

    /// Duration of color tracks.
    #[must_use]
    pub fn color_duration_ms(&self) -> u32 {
        duration_for_distance(self.checked_x - self.middle_x, self.per_pixel_ms)
    }
}
