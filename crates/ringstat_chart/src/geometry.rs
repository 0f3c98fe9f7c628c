//! Chart geometry derived from the surface size

use ringstat_core::{Point, Rect, Size};

/// Bounding circle and square of the ring
///
/// Recomputed on every size change, never reused across sizes.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ChartGeometry {
    pub size: Size,
    pub center: Point,
    /// `min(width, height) / 2 - stroke_width / 2`, clamped at zero
    pub radius: f32,
    /// Square around `center` with side `2 * radius`; arcs are drawn on the
    /// ellipse inscribed in it
    pub oval: Rect,
}

impl ChartGeometry {
    pub fn new(width: f32, height: f32, stroke_width: f32) -> Self {
        let size = Size::new(width.max(0.0), height.max(0.0));
        let center = Point::new(size.width / 2.0, size.height / 2.0);
        // A surface thinner than the stroke yields a zero-size ring
        let radius = (size.min_side() / 2.0 - stroke_width / 2.0).max(0.0);

        Self {
            size,
            center,
            radius,
            oval: Rect::square_around(center, radius),
        }
    }

    /// True when arcs would be drawn with no extent
    pub fn is_degenerate(&self) -> bool {
        self.radius <= 0.0
    }
}
