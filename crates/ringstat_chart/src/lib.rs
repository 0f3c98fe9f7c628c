//! ringstat chart
//!
//! An animated ring chart: a list of fractions is drawn as stroked arcs
//! around a circle, revealed progressively over a fixed duration using one of
//! four segment layouts, with the total shown as a centered percentage label.
//!
//! # Pieces
//!
//! - [`ChartRenderer`]: pure mapping of (dataset, layout, progress, geometry)
//!   to arc and label draw commands
//! - [`RingChart`]: the host-facing component tying the renderer to an
//!   [`AnimationDriver`](ringstat_animation::AnimationDriver)
//! - [`ChartConfig`]: construction-time configuration, loadable from TOML
//!
//! # Example
//!
//! ```ignore
//! use ringstat_animation::AnimationScheduler;
//! use ringstat_chart::{ChartConfig, RingChart};
//! use ringstat_core::{RecordingContext, Size};
//!
//! let scheduler = AnimationScheduler::new();
//! let mut chart = RingChart::new(ChartConfig::default(), scheduler.handle())?;
//! chart.on_resize(400.0, 400.0);
//! chart.set_dataset(vec![0.3, 0.2, 0.3734]);
//!
//! scheduler.tick_by(16.0);
//! let mut surface = RecordingContext::new(Size::new(400.0, 400.0));
//! chart.draw(&mut surface);
//! ```

pub mod chart;
pub mod config;
pub mod dataset;
pub mod error;
pub mod geometry;
pub mod layout;
pub mod palette;
pub mod renderer;

pub use chart::{RingChart, ANIMATION_DURATION_MS};
pub use config::ChartConfig;
pub use dataset::Dataset;
pub use error::{ChartError, Result};
pub use geometry::ChartGeometry;
pub use layout::{ArcSpan, LayoutMode, Segment, SegmentArcs};
pub use palette::{parse_palette, FallbackColors, Palette};
pub use renderer::{format_label, ChartRenderer, START_ANGLE};
