//! Geometry and color types
//!
//! Surface coordinates follow the usual 2D canvas convention: the origin is
//! the top-left corner, x grows to the right and y grows downwards. Angles
//! are in degrees, 0° points at 3 o'clock and positive sweeps run clockwise.

use serde::{Deserialize, Serialize};
use thiserror::Error;

// ─────────────────────────────────────────────────────────────────────────────
// Core Geometry Types
// ─────────────────────────────────────────────────────────────────────────────

/// 2D point
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const ZERO: Point = Point { x: 0.0, y: 0.0 };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// 2D size
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub const ZERO: Size = Size {
        width: 0.0,
        height: 0.0,
    };

    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Length of the shorter side
    pub fn min_side(&self) -> f32 {
        self.width.min(self.height)
    }
}

/// 2D rectangle
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub origin: Point,
    pub size: Size,
}

impl Rect {
    pub const ZERO: Rect = Rect {
        origin: Point::ZERO,
        size: Size::ZERO,
    };

    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            origin: Point::new(x, y),
            size: Size::new(width, height),
        }
    }

    /// Build a rect from its left, top, right and bottom edges
    pub fn from_ltrb(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self::new(left, top, right - left, bottom - top)
    }

    /// Square rect of side `2 * radius` centered on `center`
    pub fn square_around(center: Point, radius: f32) -> Self {
        Self::from_ltrb(
            center.x - radius,
            center.y - radius,
            center.x + radius,
            center.y + radius,
        )
    }

    pub fn x(&self) -> f32 {
        self.origin.x
    }

    pub fn y(&self) -> f32 {
        self.origin.y
    }

    pub fn width(&self) -> f32 {
        self.size.width
    }

    pub fn height(&self) -> f32 {
        self.size.height
    }

    pub fn right(&self) -> f32 {
        self.origin.x + self.size.width
    }

    pub fn bottom(&self) -> f32 {
        self.origin.y + self.size.height
    }

    pub fn center(&self) -> Point {
        Point::new(
            self.origin.x + self.size.width / 2.0,
            self.origin.y + self.size.height / 2.0,
        )
    }

    /// True when the rect covers no area
    pub fn is_empty(&self) -> bool {
        self.size.width <= 0.0 || self.size.height <= 0.0
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Color
// ─────────────────────────────────────────────────────────────────────────────

/// Error returned when a color string cannot be parsed
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ColorParseError {
    #[error("color must start with '#': {0:?}")]
    MissingHash(String),

    #[error("color must have 6 (RRGGBB) or 8 (AARRGGBB) hex digits: {0:?}")]
    BadLength(String),

    #[error("invalid hex digits in color: {0:?}")]
    BadDigits(String),
}

/// RGBA color with components in 0.0..=1.0
///
/// Serializes as a `#RRGGBB` / `#AARRGGBB` string.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);
    pub const BLACK: Color = Color::rgb(0.0, 0.0, 0.0);
    pub const RED: Color = Color::rgb(1.0, 0.0, 0.0);
    pub const GREEN: Color = Color::rgb(0.0, 1.0, 0.0);
    pub const BLUE: Color = Color::rgb(0.0, 0.0, 1.0);
    pub const TRANSPARENT: Color = Color::rgba(0.0, 0.0, 0.0, 0.0);

    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque color from a `0xRRGGBB` value
    pub fn from_hex(hex: u32) -> Self {
        Self::from_argb(0xFF00_0000 | (hex & 0x00FF_FFFF))
    }

    /// Color from a packed `0xAARRGGBB` value
    pub fn from_argb(argb: u32) -> Self {
        let channel = |shift: u32| ((argb >> shift) & 0xFF) as f32 / 255.0;
        Self::rgba(channel(16), channel(8), channel(0), channel(24))
    }

    /// Pack into `0xAARRGGBB`
    pub fn to_argb(&self) -> u32 {
        let channel = |v: f32| u32::from((v.clamp(0.0, 1.0) * 255.0).round() as u8);
        (channel(self.a) << 24) | (channel(self.r) << 16) | (channel(self.g) << 8) | channel(self.b)
    }

    /// Alpha channel fully opaque
    pub fn is_opaque(&self) -> bool {
        self.to_argb() >> 24 == 0xFF
    }

    /// `#RRGGBB` for opaque colors, `#AARRGGBB` otherwise
    pub fn to_hex_string(&self) -> String {
        let argb = self.to_argb();
        if self.is_opaque() {
            format!("#{:06X}", argb & 0x00FF_FFFF)
        } else {
            format!("#{argb:08X}")
        }
    }

    /// Parse `#RRGGBB` or `#AARRGGBB`
    pub fn parse(s: &str) -> Result<Self, ColorParseError> {
        let digits = s
            .trim()
            .strip_prefix('#')
            .ok_or_else(|| ColorParseError::MissingHash(s.to_string()))?;
        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ColorParseError::BadDigits(s.to_string()));
        }
        let value =
            u32::from_str_radix(digits, 16).map_err(|_| ColorParseError::BadDigits(s.to_string()))?;
        match digits.len() {
            6 => Ok(Self::from_hex(value)),
            8 => Ok(Self::from_argb(value)),
            _ => Err(ColorParseError::BadLength(s.to_string())),
        }
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

impl TryFrom<String> for Color {
    type Error = ColorParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Color::parse(&value)
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_hex_string()
    }
}

impl std::str::FromStr for Color {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Color::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_square_around() {
        let rect = Rect::square_around(Point::new(200.0, 50.0), 46.0);
        assert_eq!(rect.x(), 154.0);
        assert_eq!(rect.y(), 4.0);
        assert_eq!(rect.right(), 246.0);
        assert_eq!(rect.bottom(), 96.0);
        assert_eq!(rect.center(), Point::new(200.0, 50.0));
    }

    #[test]
    fn test_zero_square_is_empty() {
        let rect = Rect::square_around(Point::new(10.0, 10.0), 0.0);
        assert!(rect.is_empty());
        assert!(!Rect::new(0.0, 0.0, 1.0, 1.0).is_empty());
    }

    #[test]
    fn test_argb_packing() {
        let color = Color::from_argb(0x80FF_5722);
        assert_eq!(color.to_argb(), 0x80FF_5722);
        assert!(!color.is_opaque());
        assert!(Color::from_hex(0x03A9F4).is_opaque());
    }

    #[test]
    fn test_parse_color() {
        assert_eq!(Color::parse("#FF0000").unwrap(), Color::RED);
        assert_eq!(Color::parse("#00000000").unwrap(), Color::TRANSPARENT);
        assert_eq!(Color::parse("#ff5722").unwrap().to_hex_string(), "#FF5722");
        assert_eq!(
            Color::parse("FF0000"),
            Err(ColorParseError::MissingHash("FF0000".to_string()))
        );
        assert!(matches!(
            Color::parse("#FFF"),
            Err(ColorParseError::BadLength(_))
        ));
        assert!(matches!(
            Color::parse("#GG0000"),
            Err(ColorParseError::BadDigits(_))
        ));
    }

    #[test]
    fn test_color_serde_as_string() {
        let json = serde_json::to_string(&Color::from_hex(0x8BC34A)).unwrap();
        assert_eq!(json, "\"#8BC34A\"");
        let back: Color = serde_json::from_str("\"#7F8BC34A\"").unwrap();
        assert_eq!(back.to_argb(), 0x7F8B_C34A);
    }
}
