//! Input events for widgets.

use crate::geometry::{Point, Size};
use serde::{Deserialize, Serialize};

/// Input event types.
///
/// Positions are in host coordinates; widgets translate them by their
/// own bounds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Event {
    /// Pointer pressed (touch contact or mouse button down)
    PointerDown {
        /// Pointer ID
        pointer_id: PointerId,
        /// Pointer type
        pointer_type: PointerType,
        /// Position
        position: Point,
    },
    /// Pointer moved while pressed
    PointerMove {
        /// Pointer ID
        pointer_id: PointerId,
        /// Pointer type
        pointer_type: PointerType,
        /// Position
        position: Point,
    },
    /// Pointer released
    PointerUp {
        /// Pointer ID
        pointer_id: PointerId,
        /// Pointer type
        pointer_type: PointerType,
        /// Position
        position: Point,
    },
    /// Pointer stream cancelled by the host
    PointerCancel {
        /// Pointer ID
        pointer_id: PointerId,
    },
    /// Pointer moved without being pressed
    PointerHover {
        /// Position
        position: Point,
    },
    /// Host surface resized
    Resize {
        /// New size
        size: Size,
    },
}

/// Pointer identifier for pointer events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct PointerId(pub u32);

/// Type of pointer device.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum PointerType {
    /// Mouse pointer
    #[default]
    Mouse,
    /// Touch pointer
    Touch,
    /// Pen/stylus pointer
    Pen,
}

impl Event {
    /// Primary touch pointer pressed at a position.
    #[must_use]
    pub const fn pointer_down(position: Point) -> Self {
        Self::PointerDown {
            pointer_id: PointerId(0),
            pointer_type: PointerType::Touch,
            position,
        }
    }

    /// Primary touch pointer moved to a position.
    #[must_use]
    pub const fn pointer_move(position: Point) -> Self {
        Self::PointerMove {
            pointer_id: PointerId(0),
            pointer_type: PointerType::Touch,
            position,
        }
    }

    /// Primary touch pointer released at a position.
    #[must_use]
    pub const fn pointer_up(position: Point) -> Self {
        Self::PointerUp {
            pointer_id: PointerId(0),
            pointer_type: PointerType::Touch,
            position,
        }
    }

    /// Check if this is a pointer event.
    #[must_use]
    pub const fn is_pointer(&self) -> bool {
        matches!(
            self,
            Self::PointerDown { .. }
                | Self::PointerMove { .. }
                | Self::PointerUp { .. }
                | Self::PointerCancel { .. }
                | Self::PointerHover { .. }
        )
    }

    /// Position carried by the event, if any.
    #[must_use]
    pub const fn position(&self) -> Option<Point> {
        match self {
            Self::PointerDown { position, .. }
            | Self::PointerMove { position, .. }
            | Self::PointerUp { position, .. }
            | Self::PointerHover { position } => Some(*position),
            Self::PointerCancel { .. } | Self::Resize { .. } => None,
        }
    }
}
