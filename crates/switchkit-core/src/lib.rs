//! Core types and traits for switchkit widgets.
//!
//! This crate provides foundational types used throughout switchkit:
//! - Geometric primitives: [`Point`], [`Size`], [`Rect`]
//! - Color representation: [`Color`] with hex and packed ARGB conversion
//! - Layout constraints: [`Constraints`]
//! - Pointer input: [`Event`]
//! - Off-screen pixels: [`Surface`], [`SurfaceCache`]
//! - Painting: [`Canvas`], [`RecordingCanvas`], [`PixelCanvas`]
//! - Animation: [`Tween`], [`TokenSource`]

pub mod animation;
pub mod cache;
mod canvas;
mod color;
mod constraints;
pub mod draw;
mod event;
mod geometry;
mod surface;
pub mod widget;

pub use animation::{duration_for_distance, Interpolate, TokenSource, TransitionToken, Tween};
pub use cache::{CacheConfig, CacheStats, SurfaceCache, SurfaceKey};
pub use canvas::{PixelCanvas, RecordingCanvas};
pub use color::{Color, ColorParseError};
pub use constraints::Constraints;
pub use draw::DrawCommand;
pub use event::{Event, PointerId, PointerType};
pub use geometry::{Point, Rect, Size};
pub use surface::Surface;
pub use widget::{AccessibleRole, Canvas, LayoutResult, TypeId, Widget};
