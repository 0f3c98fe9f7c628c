//! Segment layout modes
//!
//! Each mode maps one dataset element, plus the global progress, to the arcs
//! drawn for it. The shared start-angle cursor is advanced by the renderer,
//! not here, so every mode sees the same cursor sequence.

use serde::{Deserialize, Serialize};
use smallvec::{smallvec, SmallVec};

use crate::error::ChartError;

/// How segments are revealed as progress runs from 0 to 1
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum LayoutMode {
    /// Every segment grows in place from its start, all in lockstep
    #[default]
    Sequential = 0,
    /// One ring fills clockwise; later segments appear once progress
    /// passes their cumulative share
    CumulativeFill = 1,
    /// Each segment spreads both ways from a point 45° into its span
    Symmetric = 2,
    /// First segment grows in place; later ones swing into position
    Cascade = 3,
}

impl LayoutMode {
    pub const ALL: [LayoutMode; 4] = [
        LayoutMode::Sequential,
        LayoutMode::CumulativeFill,
        LayoutMode::Symmetric,
        LayoutMode::Cascade,
    ];

    /// Arcs for one segment at `progress`
    pub fn segment_arcs(self, segment: &Segment, progress: f32) -> SegmentArcs {
        let Segment {
            index,
            start_angle,
            angle,
            filled,
        } = *segment;

        match self {
            LayoutMode::Sequential => SegmentArcs::single(start_angle, angle * progress),
            LayoutMode::CumulativeFill => {
                if progress > filled {
                    SegmentArcs::single(start_angle, 360.0 * progress - start_angle - 90.0)
                } else {
                    SegmentArcs::Stop
                }
            }
            LayoutMode::Symmetric => {
                let anchor = start_angle + 45.0;
                let half = angle * progress / 2.0;
                SegmentArcs::Draw(smallvec![
                    ArcSpan::new(anchor, half),
                    ArcSpan::new(anchor, -half),
                ])
            }
            LayoutMode::Cascade if index == 0 => {
                SegmentArcs::single(start_angle, angle * progress)
            }
            LayoutMode::Cascade => {
                SegmentArcs::single((start_angle + angle) * progress - 90.0, angle * progress)
            }
        }
    }
}

impl TryFrom<u8> for LayoutMode {
    type Error = ChartError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(LayoutMode::Sequential),
            1 => Ok(LayoutMode::CumulativeFill),
            2 => Ok(LayoutMode::Symmetric),
            3 => Ok(LayoutMode::Cascade),
            other => Err(ChartError::InvalidLayoutMode(other)),
        }
    }
}

impl From<LayoutMode> for u8 {
    fn from(mode: LayoutMode) -> Self {
        mode as u8
    }
}

/// One dataset element as seen by a layout mode
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment {
    /// Position in the dataset
    pub index: usize,
    /// Cursor value before this element, in degrees (starts at -90)
    pub start_angle: f32,
    /// Full angular span of this element, `360 * fraction`
    pub angle: f32,
    /// Normalized share of the dataset drawn before this element
    pub filled: f32,
}

/// An arc as start and sweep angles in degrees
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ArcSpan {
    pub start: f32,
    pub sweep: f32,
}

impl ArcSpan {
    pub const fn new(start: f32, sweep: f32) -> Self {
        Self { start, sweep }
    }

    pub fn end(&self) -> f32 {
        self.start + self.sweep
    }
}

/// What a layout mode wants drawn for a segment
#[derive(Clone, Debug, PartialEq)]
pub enum SegmentArcs {
    /// Draw these arcs and continue with the next element
    Draw(SmallVec<[ArcSpan; 2]>),
    /// Draw nothing more this frame
    Stop,
}

impl SegmentArcs {
    fn single(start: f32, sweep: f32) -> Self {
        SegmentArcs::Draw(smallvec![ArcSpan::new(start, sweep)])
    }
}
