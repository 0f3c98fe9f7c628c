//! Chart configuration
//!
//! Everything a chart needs at construction time. Fixed for the lifetime of
//! the chart. Can be written by hand or loaded from a TOML file:
//!
//! ```toml
//! stroke_width = 8.0
//! font_size = 32.0
//! layout_mode = 1
//! fallback_colors = "reroll"
//! palette = ["#FF5722", "#03A9F4", "#8BC34A"]
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use ringstat_core::Color;

use crate::error::{ChartError, Result};
use crate::layout::LayoutMode;
use crate::palette::FallbackColors;

/// Construction-time chart configuration
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ChartConfig {
    /// Ring stroke width in surface units
    pub stroke_width: f32,
    /// Label font size in surface units
    pub font_size: f32,
    /// Segment colors, by dataset index
    pub palette: Vec<Color>,
    /// Segment layout, `0..=3`
    pub layout_mode: LayoutMode,
    /// Colors for indices past the end of `palette`
    pub fallback_colors: FallbackColors,
    /// Label color
    pub label_color: Color,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            stroke_width: 5.0,
            font_size: 40.0,
            palette: Vec::new(),
            layout_mode: LayoutMode::default(),
            fallback_colors: FallbackColors::default(),
            label_color: Color::BLACK,
        }
    }
}

impl ChartConfig {
    /// Parse and validate a TOML document
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: ChartConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a TOML config file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config = Self::from_toml_str(&content)?;
        tracing::debug!("loaded chart config from {}", path.display());
        Ok(config)
    }

    /// Serialize to TOML string
    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Check values serde cannot check on its own
    pub fn validate(&self) -> Result<()> {
        if !self.stroke_width.is_finite() || self.stroke_width < 0.0 {
            return Err(ChartError::InvalidStrokeWidth(self.stroke_width));
        }
        if !self.font_size.is_finite() || self.font_size <= 0.0 {
            return Err(ChartError::InvalidFontSize(self.font_size));
        }
        Ok(())
    }

    pub fn with_stroke_width(mut self, stroke_width: f32) -> Self {
        self.stroke_width = stroke_width;
        self
    }

    pub fn with_font_size(mut self, font_size: f32) -> Self {
        self.font_size = font_size;
        self
    }

    pub fn with_palette(mut self, palette: Vec<Color>) -> Self {
        self.palette = palette;
        self
    }

    pub fn with_layout_mode(mut self, layout_mode: LayoutMode) -> Self {
        self.layout_mode = layout_mode;
        self
    }

    pub fn with_fallback_colors(mut self, fallback_colors: FallbackColors) -> Self {
        self.fallback_colors = fallback_colors;
        self
    }

    pub fn with_label_color(mut self, label_color: Color) -> Self {
        self.label_color = label_color;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ChartConfig::default();
        assert_eq!(config.stroke_width, 5.0);
        assert_eq!(config.font_size, 40.0);
        assert!(config.palette.is_empty());
        assert_eq!(config.layout_mode, LayoutMode::Sequential);
        assert_eq!(config.fallback_colors, FallbackColors::Cached);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_document_is_default() {
        assert_eq!(ChartConfig::from_toml_str("").unwrap(), ChartConfig::default());
    }

    #[test]
    fn test_parse_full_document() {
        let config = ChartConfig::from_toml_str(
            r##"
stroke_width = 8.0
font_size = 32.0
layout_mode = 1
fallback_colors = "reroll"
palette = ["#FF5722", "#03A9F4", "#808BC34A"]
label_color = "#333333"
"##,
        )
        .unwrap();

        assert_eq!(config.stroke_width, 8.0);
        assert_eq!(config.font_size, 32.0);
        assert_eq!(config.layout_mode, LayoutMode::CumulativeFill);
        assert_eq!(config.fallback_colors, FallbackColors::Reroll);
        assert_eq!(config.palette.len(), 3);
        assert_eq!(config.palette[0], Color::from_hex(0xFF5722));
        assert!(!config.palette[2].is_opaque());
        assert_eq!(config.label_color, Color::from_hex(0x333333));
    }

    #[test]
    fn test_toml_round_trip() {
        let config = ChartConfig::default()
            .with_layout_mode(LayoutMode::Cascade)
            .with_palette(vec![Color::from_hex(0x03A9F4)]);
        let text = config.to_toml().unwrap();
        assert_eq!(ChartConfig::from_toml_str(&text).unwrap(), config);
    }

    #[test]
    fn test_rejects_invalid_layout_mode() {
        let err = ChartConfig::from_toml_str("layout_mode = 7").unwrap_err();
        assert!(matches!(err, ChartError::Toml(_)));
        assert!(err.to_string().contains("invalid layout mode 7"));
    }

    #[test]
    fn test_rejects_invalid_color() {
        let err = ChartConfig::from_toml_str(r#"palette = ["red"]"#).unwrap_err();
        assert!(matches!(err, ChartError::Toml(_)));
    }

    #[test]
    fn test_rejects_bad_sizes() {
        assert!(matches!(
            ChartConfig::from_toml_str("stroke_width = -1.0"),
            Err(ChartError::InvalidStrokeWidth(_))
        ));
        assert!(matches!(
            ChartConfig::from_toml_str("font_size = 0.0"),
            Err(ChartError::InvalidFontSize(_))
        ));
    }

    #[test]
    fn test_load_missing_file() {
        let err = ChartConfig::load(Path::new("/nonexistent/ringstat.toml")).unwrap_err();
        assert!(matches!(err, ChartError::Io(_)));
    }
}
