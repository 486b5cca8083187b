//! Testing harness for switchkit widgets.
//!
//! [`Harness`] lays a widget out, feeds it pointer events, ticks its
//! animations and renders it either to draw commands or to pixels.
//! [`CallRecorder`] captures listener invocations.
//!
//! ```
//! use switchkit_test::{CallRecorder, Harness};
//! use switchkit_widgets::Switch;
//!
//! let calls = CallRecorder::new();
//! let mut harness = Harness::new(Switch::new().on_checked(calls.sink()));
//! harness.layout().tap().settle();
//!
//! assert!(harness.widget().is_checked());
//! assert_eq!(calls.calls(), vec![true]);
//! ```

#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]

mod harness;
mod recorder;

pub use harness::Harness;
pub use recorder::CallRecorder;
