//! Widget trait and related types.
//!
//! Widgets follow a measure-layout-paint cycle driven by the host:
//!
//! 1. **Measure**: Compute intrinsic size given constraints
//! 2. **Layout**: Accept the bounds the host assigned
//! 3. **Paint**: Emit drawing operations onto a [`Canvas`]
//!
//! Between frames the host feeds input through [`Widget::event`] and
//! advances animations with [`Widget::tick`]. A widget never redraws on its
//! own; it raises a redraw request that the host collects with
//! [`Widget::take_redraw_request`] and coalesces with its render schedule.
//!
//! # Examples
//!
//! ```
//! use switchkit_core::TypeId;
//!
//! let string_type = TypeId::of::<String>();
//! let i32_type = TypeId::of::<i32>();
//! assert_ne!(string_type, i32_type);
//! ```

use crate::constraints::Constraints;
use crate::event::Event;
use crate::geometry::{Point, Rect, Size};
use crate::surface::Surface;
use crate::Color;
use serde::{Deserialize, Serialize};
use std::any::Any;
use std::sync::Arc;

/// Type identifier for widget types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TypeId(std::any::TypeId);

impl TypeId {
    /// Get the type ID for a type.
    #[must_use]
    pub fn of<T: 'static>() -> Self {
        Self(std::any::TypeId::of::<T>())
    }
}

/// Result of laying out a widget.
#[derive(Debug, Clone, Copy, Default)]
pub struct LayoutResult {
    /// Computed size after layout
    pub size: Size,
}

/// Core widget trait that all UI elements implement.
pub trait Widget: Send {
    /// Get the type identifier for this widget type.
    fn type_id(&self) -> TypeId;

    /// Compute intrinsic size constraints.
    fn measure(&self, constraints: Constraints) -> Size;

    /// Accept allocated bounds.
    fn layout(&mut self, bounds: Rect) -> LayoutResult;

    /// Emit drawing operations. Painting reads state only.
    fn paint(&self, canvas: &mut dyn Canvas);

    /// Handle input events, optionally returning a message for the host.
    fn event(&mut self, event: &Event) -> Option<Box<dyn Any + Send>>;

    /// Advance running animations by `delta_ms`.
    ///
    /// Returns `true` while animations remain.
    fn tick(&mut self, _delta_ms: u32) -> bool {
        false
    }

    /// Whether any animation is in flight.
    fn is_animating(&self) -> bool {
        false
    }

    /// Take the pending redraw request, clearing it.
    fn take_redraw_request(&mut self) -> bool {
        false
    }

    /// Check if this widget is interactive (can receive events).
    fn is_interactive(&self) -> bool {
        false
    }

    /// Get the accessible name for screen readers.
    fn accessible_name(&self) -> Option<&str> {
        None
    }

    /// Get the accessible role.
    fn accessible_role(&self) -> AccessibleRole {
        AccessibleRole::Generic
    }

    /// Get the test ID for this widget (if any).
    fn test_id(&self) -> Option<&str> {
        None
    }

    /// Get the current bounds of this widget.
    fn bounds(&self) -> Rect {
        Rect::new(0.0, 0.0, 0.0, 0.0)
    }
}

/// Canvas trait for paint operations.
///
/// This is a minimal abstraction over the rendering backend.
pub trait Canvas {
    /// Draw a filled rectangle.
    fn fill_rect(&mut self, rect: Rect, color: Color);

    /// Draw a filled rectangle with uniformly rounded corners.
    fn fill_rounded_rect(&mut self, rect: Rect, corner_radius: f32, color: Color);

    /// Draw a filled circle.
    fn fill_circle(&mut self, center: Point, radius: f32, color: Color);

    /// Composite an off-screen surface with its top-left at `origin`.
    fn draw_surface(&mut self, surface: &Arc<Surface>, origin: Point);
}

/// Accessible role for screen readers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum AccessibleRole {
    /// Generic element
    #[default]
    Generic,
    /// Two-state switch
    Switch,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_id() {
        let id1 = TypeId::of::<u32>();
        let id2 = TypeId::of::<u32>();
        let id3 = TypeId::of::<String>();

        assert_eq!(id1, id2);
        assert_ne!(id1, id3);
    }

    #[test]
    fn test_type_id_hash() {
        use std::collections::HashSet;
        let mut set = HashSet::new();
        set.insert(TypeId::of::<u32>());
        set.insert(TypeId::of::<String>());
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_accessible_role_default() {
        assert_eq!(AccessibleRole::default(), AccessibleRole::Generic);
    }

    #[test]
    fn test_layout_result_default() {
        let result = LayoutResult::default();
        assert_eq!(result.size, Size::new(0.0, 0.0));
    }

    struct Dot;

    impl Widget for Dot {
        fn type_id(&self) -> TypeId {
            TypeId::of::<Self>()
        }

        fn measure(&self, constraints: Constraints) -> Size {
            constraints.constrain(Size::new(4.0, 4.0))
        }

        fn layout(&mut self, bounds: Rect) -> LayoutResult {
            LayoutResult {
                size: bounds.size(),
            }
        }

        fn paint(&self, canvas: &mut dyn Canvas) {
            canvas.fill_circle(Point::new(2.0, 2.0), 2.0, Color::BLACK);
        }

        fn event(&mut self, _event: &Event) -> Option<Box<dyn Any + Send>> {
            None
        }
    }

    #[test]
    fn test_widget_defaults() {
        let mut dot = Dot;
        assert!(!dot.tick(16));
        assert!(!dot.is_animating());
        assert!(!dot.take_redraw_request());
        assert!(!dot.is_interactive());
        assert_eq!(dot.accessible_name(), None);
        assert_eq!(dot.accessible_role(), AccessibleRole::Generic);
        assert_eq!(dot.test_id(), None);
        assert_eq!(dot.bounds(), Rect::default());
        assert_eq!(dot.measure(Constraints::unbounded()), Size::new(4.0, 4.0));
    }
}
