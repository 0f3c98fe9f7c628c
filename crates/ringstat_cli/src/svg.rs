//! SVG drawing surface
//!
//! Implements `DrawContext` by emitting SVG elements. Arcs become `<path>`
//! elements using the SVG elliptical arc command; a sweep of a full circle
//! or more is split into two half arcs because a single SVG arc cannot end
//! where it starts.

use ringstat_core::{Color, DrawContext, Point, Rect, Size, Stroke, TextAlign, TextStyle};

/// Sweeps smaller than this draw nothing
const MIN_SWEEP: f32 = 1e-4;

/// A draw context that renders to an SVG document
pub struct SvgContext {
    size: Size,
    body: String,
}

impl SvgContext {
    pub fn new(size: Size) -> Self {
        Self {
            size,
            body: String::new(),
        }
    }

    /// Finish the document
    pub fn finish(self) -> String {
        format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\">\n{body}</svg>\n",
            w = self.size.width,
            h = self.size.height,
            body = self.body,
        )
    }
}

impl DrawContext for SvgContext {
    fn stroke_arc(
        &mut self,
        oval: Rect,
        start_angle: f32,
        sweep_angle: f32,
        stroke: &Stroke,
        color: Color,
    ) {
        if oval.is_empty() || sweep_angle.abs() < MIN_SWEEP {
            return;
        }
        let Some(data) = arc_path_data(oval, start_angle, sweep_angle) else {
            return;
        };
        self.body.push_str(&format!(
            "  <path d=\"{data}\" fill=\"none\" stroke=\"{}\"{} stroke-width=\"{}\" stroke-linecap=\"{}\" stroke-linejoin=\"{}\"/>\n",
            rgb_hex(color),
            opacity_attr("stroke-opacity", color),
            stroke.width,
            stroke.cap.as_str(),
            stroke.join.as_str(),
        ));
    }

    fn draw_text(&mut self, text: &str, origin: Point, style: &TextStyle) {
        let anchor = match style.align {
            TextAlign::Left => "start",
            TextAlign::Center => "middle",
            TextAlign::Right => "end",
        };
        self.body.push_str(&format!(
            "  <text x=\"{:.2}\" y=\"{:.2}\" font-size=\"{}\" text-anchor=\"{anchor}\" fill=\"{}\"{}>{}</text>\n",
            origin.x,
            origin.y,
            style.size,
            rgb_hex(style.color),
            opacity_attr("fill-opacity", style.color),
            escape(text),
        ));
    }

    fn viewport_size(&self) -> Size {
        self.size
    }
}

/// SVG path data for an arc of the ellipse inscribed in `oval`
fn arc_path_data(oval: Rect, start_angle: f32, sweep_angle: f32) -> Option<String> {
    let center = oval.center();
    let rx = oval.width() / 2.0;
    let ry = oval.height() / 2.0;
    let point_at = |degrees: f32| {
        let radians = degrees.to_radians();
        Point::new(center.x + rx * radians.cos(), center.y + ry * radians.sin())
    };

    let sweep = sweep_angle.clamp(-360.0, 360.0);
    if !sweep.is_finite() || !start_angle.is_finite() {
        return None;
    }
    // Positive sweeps run clockwise on a y-down surface, SVG sweep-flag 1
    let sweep_flag = u8::from(sweep > 0.0);
    let start = point_at(start_angle);

    if sweep.abs() >= 360.0 {
        let half = start_angle + sweep / 2.0;
        let middle = point_at(half);
        return Some(format!(
            "M {:.2} {:.2} A {rx:.2} {ry:.2} 0 0 {sweep_flag} {:.2} {:.2} A {rx:.2} {ry:.2} 0 0 {sweep_flag} {:.2} {:.2}",
            start.x, start.y, middle.x, middle.y, start.x, start.y,
        ));
    }

    let end = point_at(start_angle + sweep);
    let large_arc = u8::from(sweep.abs() > 180.0);
    Some(format!(
        "M {:.2} {:.2} A {rx:.2} {ry:.2} 0 {large_arc} {sweep_flag} {:.2} {:.2}",
        start.x, start.y, end.x, end.y,
    ))
}

fn rgb_hex(color: Color) -> String {
    format!("#{:06X}", color.to_argb() & 0x00FF_FFFF)
}

fn opacity_attr(name: &str, color: Color) -> String {
    if color.is_opaque() {
        String::new()
    } else {
        format!(" {name}=\"{:.3}\"", color.a)
    }
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
