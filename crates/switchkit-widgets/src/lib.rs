//! Animated toggle switch widget for switchkit.
//!
//! The [`Switch`] renders a rounded track with a circular knob, follows
//! pointer drags, and animates between states when the host ticks it.
//!
//! ```
//! use switchkit_core::{Constraints, Event, Point, Rect, Widget};
//! use switchkit_widgets::Switch;
//!
//! let mut switch = Switch::new().on_checked(|checked| println!("now {checked}"));
//! let size = switch.measure(Constraints::unbounded());
//! switch.layout(Rect::from_size(size));
//!
//! switch.event(&Event::pointer_up(Point::ORIGIN));
//! assert!(switch.is_checked());
//! while switch.tick(16) {}
//! assert_eq!(switch.knob_position(), switch.geometry().checked_x);
//! ```

mod error;
pub mod geometry;
pub mod style;
mod switch;
pub mod track;
pub mod transition;

pub use error::StyleError;
pub use geometry::SwitchGeometry;
pub use style::{Dimension, SwitchConfig, SwitchStyle};
pub use switch::{CheckedListener, Switch, SwitchChanged};
pub use track::TrackRenderer;
