//! ringstat core types
//!
//! The foundational primitives shared by every ringstat crate:
//!
//! - **Geometry**: `Point`, `Size`, `Rect` in surface coordinates
//! - **Color**: RGBA color with ARGB/hex conversions
//! - **Draw Context**: the `DrawContext` surface trait and the
//!   `RecordingContext` that records `DrawCommand`s for later replay
//!
//! # Example
//!
//! ```rust
//! use ringstat_core::{Color, DrawContext, Rect, RecordingContext, Size, Stroke};
//!
//! let mut ctx = RecordingContext::new(Size::new(200.0, 200.0));
//! ctx.stroke_arc(
//!     Rect::new(10.0, 10.0, 180.0, 180.0),
//!     -90.0,
//!     120.0,
//!     &Stroke::new(4.0),
//!     Color::BLUE,
//! );
//! assert_eq!(ctx.commands().len(), 1);
//! ```

pub mod draw;
pub mod geometry;

pub use draw::{
    DrawCommand, DrawContext, LineCap, LineJoin, RecordingContext, Stroke,
    TextAlign, TextStyle,
};
pub use geometry::{Color, ColorParseError, Point, Rect, Size};
