//! Draw Context - surface-independent rendering API
//!
//! The `DrawContext` trait is the seam between chart rendering and whatever
//! actually puts pixels somewhere. The chart only ever strokes arcs and draws
//! a text label, so the trait is deliberately small.
//!
//! `RecordingContext` implements the trait by recording `DrawCommand`s for
//! later replay (GPU upload, SVG export, or assertions in tests).
//!
//! # Example
//!
//! ```ignore
//! fn paint(ctx: &mut dyn DrawContext) {
//!     let oval = Rect::new(0.0, 0.0, 100.0, 100.0);
//!     ctx.stroke_arc(oval, -90.0, 180.0, &Stroke::new(4.0), Color::BLUE);
//!     ctx.draw_text("50.00%", Point::new(50.0, 55.0), &TextStyle::new(20.0));
//! }
//! ```

use serde::Serialize;

use crate::geometry::{Color, Point, Rect, Size};

// ─────────────────────────────────────────────────────────────────────────────
// Stroke Configuration
// ─────────────────────────────────────────────────────────────────────────────

/// Line cap style
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LineCap {
    /// Flat cap at the endpoint
    #[default]
    Butt,
    /// Rounded cap extending past the endpoint
    Round,
    /// Square cap extending past the endpoint
    Square,
}

impl LineCap {
    /// SVG `stroke-linecap` keyword
    pub fn as_str(&self) -> &'static str {
        match self {
            LineCap::Butt => "butt",
            LineCap::Round => "round",
            LineCap::Square => "square",
        }
    }
}

/// Line join style
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LineJoin {
    /// Miter join (sharp corner)
    #[default]
    Miter,
    /// Round join
    Round,
    /// Bevel join (flat corner)
    Bevel,
}

impl LineJoin {
    /// SVG `stroke-linejoin` keyword
    pub fn as_str(&self) -> &'static str {
        match self {
            LineJoin::Miter => "miter",
            LineJoin::Round => "round",
            LineJoin::Bevel => "bevel",
        }
    }
}

/// Stroke style configuration
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Stroke {
    /// Line width
    pub width: f32,
    /// Line cap style
    pub cap: LineCap,
    /// Line join style
    pub join: LineJoin,
}

impl Default for Stroke {
    fn default() -> Self {
        Self {
            width: 1.0,
            cap: LineCap::Butt,
            join: LineJoin::Miter,
        }
    }
}

impl Stroke {
    /// Create a new stroke with the given width
    pub fn new(width: f32) -> Self {
        Self {
            width,
            ..Default::default()
        }
    }

    /// Set line cap style
    pub fn with_cap(mut self, cap: LineCap) -> Self {
        self.cap = cap;
        self
    }

    /// Set line join style
    pub fn with_join(mut self, join: LineJoin) -> Self {
        self.join = join;
        self
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Text Configuration
// ─────────────────────────────────────────────────────────────────────────────

/// Horizontal text alignment relative to the origin
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAlign {
    #[default]
    Left,
    Center,
    Right,
}

/// Text style configuration
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TextStyle {
    /// Font size in pixels
    pub size: f32,
    /// Text color
    pub color: Color,
    /// Text alignment
    pub align: TextAlign,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            size: 14.0,
            color: Color::BLACK,
            align: TextAlign::Left,
        }
    }
}

impl TextStyle {
    /// Create a new text style with font size
    pub fn new(size: f32) -> Self {
        Self {
            size,
            ..Default::default()
        }
    }

    /// Set text color
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    /// Set text alignment
    pub fn with_align(mut self, align: TextAlign) -> Self {
        self.align = align;
        self
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Draw Context Trait
// ─────────────────────────────────────────────────────────────────────────────

/// A drawing surface
pub trait DrawContext {
    /// Stroke an arc of the ellipse inscribed in `oval`
    ///
    /// `start_angle` and `sweep_angle` are in degrees; a negative sweep runs
    /// counter-clockwise. The arc is never closed to the center.
    fn stroke_arc(
        &mut self,
        oval: Rect,
        start_angle: f32,
        sweep_angle: f32,
        stroke: &Stroke,
        color: Color,
    );

    /// Draw text at a position
    fn draw_text(&mut self, text: &str, origin: Point, style: &TextStyle);

    /// Get the current viewport size
    fn viewport_size(&self) -> Size;
}

// ─────────────────────────────────────────────────────────────────────────────
// Recording Draw Context
// ─────────────────────────────────────────────────────────────────────────────

/// A draw command that can be recorded and replayed
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DrawCommand {
    StrokeArc {
        oval: Rect,
        start_angle: f32,
        sweep_angle: f32,
        stroke: Stroke,
        color: Color,
    },
    DrawText {
        text: String,
        origin: Point,
        style: TextStyle,
    },
}

impl DrawCommand {
    pub fn is_arc(&self) -> bool {
        matches!(self, DrawCommand::StrokeArc { .. })
    }

    /// Replay this command onto another surface
    pub fn replay(&self, ctx: &mut dyn DrawContext) {
        match self {
            DrawCommand::StrokeArc {
                oval,
                start_angle,
                sweep_angle,
                stroke,
                color,
            } => ctx.stroke_arc(*oval, *start_angle, *sweep_angle, stroke, *color),
            DrawCommand::DrawText {
                text,
                origin,
                style,
            } => ctx.draw_text(text, *origin, style),
        }
    }
}

/// A draw context that records commands for later execution
#[derive(Debug, Default)]
pub struct RecordingContext {
    commands: Vec<DrawCommand>,
    viewport: Size,
}

impl RecordingContext {
    /// Create a new recording context
    pub fn new(viewport: Size) -> Self {
        Self {
            commands: Vec::new(),
            viewport,
        }
    }

    /// Get the recorded commands
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Take the recorded commands
    pub fn take_commands(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }

    /// Number of recorded arc commands
    pub fn arc_count(&self) -> usize {
        self.commands.iter().filter(|c| c.is_arc()).count()
    }

    /// Clear all recorded commands
    pub fn clear(&mut self) {
        self.commands.clear();
    }
}

impl DrawContext for RecordingContext {
    fn stroke_arc(
        &mut self,
        oval: Rect,
        start_angle: f32,
        sweep_angle: f32,
        stroke: &Stroke,
        color: Color,
    ) {
        self.commands.push(DrawCommand::StrokeArc {
            oval,
            start_angle,
            sweep_angle,
            stroke: stroke.clone(),
            color,
        });
    }

    fn draw_text(&mut self, text: &str, origin: Point, style: &TextStyle) {
        self.commands.push(DrawCommand::DrawText {
            text: text.to_string(),
            origin,
            style: style.clone(),
        });
    }

    fn viewport_size(&self) -> Size {
        self.viewport
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recording_context() {
        let mut ctx = RecordingContext::new(Size::new(800.0, 600.0));

        ctx.stroke_arc(
            Rect::new(0.0, 0.0, 100.0, 100.0),
            -90.0,
            45.0,
            &Stroke::new(2.0),
            Color::BLUE,
        );
        ctx.draw_text("Hello", Point::new(10.0, 30.0), &TextStyle::default());

        assert_eq!(ctx.commands().len(), 2);
        assert_eq!(ctx.arc_count(), 1);
        assert_eq!(ctx.viewport_size(), Size::new(800.0, 600.0));
    }

    #[test]
    fn test_take_commands_empties_recording() {
        let mut ctx = RecordingContext::new(Size::new(100.0, 100.0));
        ctx.draw_text("a", Point::ZERO, &TextStyle::default());

        let taken = ctx.take_commands();
        assert_eq!(taken.len(), 1);
        assert!(ctx.commands().is_empty());
    }

    #[test]
    fn test_replay() {
        let mut source = RecordingContext::new(Size::new(100.0, 100.0));
        source.stroke_arc(
            Rect::new(0.0, 0.0, 50.0, 50.0),
            0.0,
            360.0,
            &Stroke::new(1.0),
            Color::RED,
        );
        source.draw_text("x", Point::new(1.0, 2.0), &TextStyle::new(12.0));

        let mut target = RecordingContext::new(Size::new(100.0, 100.0));
        for command in source.commands() {
            command.replay(&mut target);
        }
        assert_eq!(source.commands(), target.commands());
    }

    #[test]
    fn test_stroke_configuration() {
        let stroke = Stroke::new(2.0)
            .with_cap(LineCap::Round)
            .with_join(LineJoin::Round);

        assert_eq!(stroke.width, 2.0);
        assert_eq!(stroke.cap, LineCap::Round);
        assert_eq!(stroke.join.as_str(), "round");
    }

    #[test]
    fn test_text_style() {
        let style = TextStyle::new(16.0)
            .with_color(Color::WHITE)
            .with_align(TextAlign::Center);

        assert_eq!(style.size, 16.0);
        assert_eq!(style.color, Color::WHITE);
        assert_eq!(style.align, TextAlign::Center);
    }

    #[test]
    fn test_command_json_shape() {
        let command = DrawCommand::DrawText {
            text: "87.34%".to_string(),
            origin: Point::new(1.0, 2.0),
            style: TextStyle::new(40.0).with_align(TextAlign::Center),
        };
        let json = serde_json::to_value(&command).unwrap();
        assert_eq!(json["type"], "draw_text");
        assert_eq!(json["text"], "87.34%");
        assert_eq!(json["style"]["align"], "center");
        assert_eq!(json["style"]["color"], "#000000");
    }
}
