//! Draw commands produced by painting widgets.
//!
//! All rendering reduces to these primitives.

use crate::surface::Surface;
use crate::{Color, Point, Rect};
use std::sync::Arc;

/// A single drawing primitive.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// Fill a rectangle, optionally with rounded corners
    Rect {
        /// Rectangle bounds
        bounds: Rect,
        /// Uniform corner radius (0 = sharp corners)
        corner_radius: f32,
        /// Fill color
        color: Color,
    },

    /// Fill a circle
    Circle {
        /// Center point
        center: Point,
        /// Radius
        radius: f32,
        /// Fill color
        color: Color,
    },

    /// Composite an off-screen surface
    Surface {
        /// Top-left corner of the destination
        origin: Point,
        /// Pixels to composite
        surface: Arc<Surface>,
    },
}

impl DrawCommand {
    /// Create a filled rectangle command.
    #[must_use]
    pub const fn filled_rect(bounds: Rect, color: Color) -> Self {
        Self::Rect {
            bounds,
            corner_radius: 0.0,
            color,
        }
    }

    /// Create a filled rounded rectangle command.
    #[must_use]
    pub const fn rounded_rect(bounds: Rect, corner_radius: f32, color: Color) -> Self {
        Self::Rect {
            bounds,
            corner_radius,
            color,
        }
    }

    /// Create a filled circle command.
    #[must_use]
    pub const fn filled_circle(center: Point, radius: f32, color: Color) -> Self {
        Self::Circle {
            center,
            radius,
            color,
        }
    }

    /// Create a surface blit command.
    #[must_use]
    pub fn surface(origin: Point, surface: &Arc<Surface>) -> Self {
        Self::Surface {
            origin,
            surface: Arc::clone(surface),
        }
    }

    /// Fill color of a shape command.
    #[must_use]
    pub const fn color(&self) -> Option<Color> {
        match self {
            Self::Rect { color, .. } | Self::Circle { color, .. } => Some(*color),
            Self::Surface { .. } => None,
        }
    }
}
