//! Ring chart renderer
//!
//! Turns a dataset, the current progress and the chart geometry into arc
//! and label draw commands. Apart from `Reroll` fallback colors the output is
//! fully determined by the inputs.

use ringstat_core::{DrawContext, LineCap, LineJoin, Point, Stroke, TextAlign, TextStyle};

use crate::config::ChartConfig;
use crate::dataset::Dataset;
use crate::geometry::ChartGeometry;
use crate::layout::{LayoutMode, Segment, SegmentArcs};
use crate::palette::Palette;

/// Cursor position of the first segment: 12 o'clock
pub const START_ANGLE: f32 = -90.0;

/// Draws a dataset as a ring of arcs plus a percentage label
#[derive(Debug)]
pub struct ChartRenderer {
    layout_mode: LayoutMode,
    stroke: Stroke,
    label_style: TextStyle,
    palette: Palette,
}

impl ChartRenderer {
    pub fn new(config: &ChartConfig) -> Self {
        Self::with_palette(
            config,
            Palette::new(config.palette.clone(), config.fallback_colors),
        )
    }

    /// Renderer using a caller-supplied palette, e.g. a seeded one
    pub fn with_palette(config: &ChartConfig, palette: Palette) -> Self {
        Self {
            layout_mode: config.layout_mode,
            stroke: Stroke::new(config.stroke_width)
                .with_cap(LineCap::Round)
                .with_join(LineJoin::Round),
            label_style: TextStyle::new(config.font_size)
                .with_color(config.label_color)
                .with_align(TextAlign::Center),
            palette,
        }
    }

    /// Draw one frame and return the number of arcs issued
    ///
    /// An empty dataset draws nothing at all. Otherwise the arcs are followed
    /// by exactly one label command.
    pub fn render(
        &mut self,
        ctx: &mut dyn DrawContext,
        dataset: &Dataset,
        geometry: &ChartGeometry,
        progress: f32,
    ) -> usize {
        if dataset.is_empty() {
            return 0;
        }

        let total = dataset.sum();
        let mut start_angle = START_ANGLE;
        let mut filled = 0.0;
        let mut arcs = 0;

        for (index, fraction) in dataset.iter().enumerate() {
            let angle = 360.0 * fraction;
            let color = self.palette.color_for(index);
            let segment = Segment {
                index,
                start_angle,
                angle,
                filled,
            };

            match self.layout_mode.segment_arcs(&segment, progress) {
                SegmentArcs::Draw(spans) => {
                    for span in spans {
                        ctx.stroke_arc(geometry.oval, span.start, span.sweep, &self.stroke, color);
                        arcs += 1;
                    }
                }
                SegmentArcs::Stop => break,
            }

            // An all-zero dataset has no shares to accumulate
            if total > 0.0 {
                filled += fraction / total;
            }
            start_angle += angle;
        }

        ctx.draw_text(
            &format_label(total),
            Point::new(
                geometry.center.x,
                geometry.center.y + self.label_style.size / 4.0,
            ),
            &self.label_style,
        );

        tracing::trace!(
            "rendered {} arcs for {} segments at progress {:.3} ({:?})",
            arcs,
            dataset.len(),
            progress,
            self.layout_mode
        );
        arcs
    }

    pub fn layout_mode(&self) -> LayoutMode {
        self.layout_mode
    }

    pub fn stroke(&self) -> &Stroke {
        &self.stroke
    }

    pub fn label_style(&self) -> &TextStyle {
        &self.label_style
    }
}

/// Format a total as a percentage with two decimals: `0.8734` → `"87.34%"`
pub fn format_label(total: f32) -> String {
    format!("{:.2}%", total * 100.0)
}
