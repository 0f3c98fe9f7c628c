//! Segment colors
//!
//! Colors are assigned positionally. Indices past the end of the configured
//! colors get a random opaque color, either generated once and reused
//! (`Cached`) or regenerated on every lookup (`Reroll`).

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use ringstat_core::Color;

use crate::error::{ChartError, Result};

/// Policy for indices the palette has no color for
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FallbackColors {
    /// Generate one color per index on first use and keep it
    #[default]
    Cached,
    /// Generate a fresh color on every lookup; segments flicker across frames
    Reroll,
}

/// Positional color source for chart segments
#[derive(Debug)]
pub struct Palette {
    colors: Vec<Color>,
    fallback: FallbackColors,
    /// Generated colors for indices `colors.len()..`
    generated: Vec<Color>,
    rng: StdRng,
}

impl Palette {
    pub fn new(colors: Vec<Color>, fallback: FallbackColors) -> Self {
        Self::with_rng(colors, fallback, StdRng::from_entropy())
    }

    /// Palette with a deterministic fallback sequence
    pub fn with_seed(colors: Vec<Color>, fallback: FallbackColors, seed: u64) -> Self {
        Self::with_rng(colors, fallback, StdRng::seed_from_u64(seed))
    }

    fn with_rng(colors: Vec<Color>, fallback: FallbackColors, rng: StdRng) -> Self {
        Self {
            colors,
            fallback,
            generated: Vec::new(),
            rng,
        }
    }

    /// Color for the segment at `index`
    pub fn color_for(&mut self, index: usize) -> Color {
        if let Some(color) = self.colors.get(index) {
            return *color;
        }
        match self.fallback {
            FallbackColors::Reroll => random_opaque_color(&mut self.rng),
            FallbackColors::Cached => {
                let slot = index - self.colors.len();
                while self.generated.len() <= slot {
                    let color = random_opaque_color(&mut self.rng);
                    tracing::debug!(
                        "generated fallback color {} for segment {}",
                        color.to_hex_string(),
                        self.colors.len() + self.generated.len()
                    );
                    self.generated.push(color);
                }
                self.generated[slot]
            }
        }
    }

    /// Configured colors, without generated fallbacks
    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    pub fn fallback(&self) -> FallbackColors {
        self.fallback
    }
}

/// Parse a comma separated color list such as `#FF5722, #03A9F4`
///
/// An empty string is an empty palette.
pub fn parse_palette(s: &str) -> Result<Vec<Color>> {
    if s.trim().is_empty() {
        return Ok(Vec::new());
    }
    s.split(',')
        .map(|part| Color::parse(part.trim()).map_err(ChartError::from))
        .collect()
}

/// Random color with a fully opaque alpha channel
///
/// Never pure white, so a segment stays visible on a white surface.
pub fn random_opaque_color<R: Rng + ?Sized>(rng: &mut R) -> Color {
    Color::from_argb(0xFF00_0000 | rng.gen_range(0..0x00FF_FFFF))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_configured_colors_first() {
        let mut palette = Palette::with_seed(vec![Color::RED, Color::BLUE], FallbackColors::Cached, 7);
        assert_eq!(palette.color_for(0), Color::RED);
        assert_eq!(palette.color_for(1), Color::BLUE);
        assert_eq!(palette.colors().len(), 2);
    }

    #[test]
    fn test_cached_fallback_is_stable() {
        let mut palette = Palette::with_seed(vec![Color::RED], FallbackColors::Cached, 7);

        let first: Vec<Color> = (0..6).map(|i| palette.color_for(i)).collect();
        let second: Vec<Color> = (0..6).map(|i| palette.color_for(i)).collect();

        assert_eq!(first, second);
        assert!(first.iter().all(Color::is_opaque));
    }

    #[test]
    fn test_cached_fallback_out_of_order() {
        let mut palette = Palette::with_seed(Vec::new(), FallbackColors::Cached, 3);
        let late = palette.color_for(4);
        let early = palette.color_for(1);
        assert_eq!(palette.color_for(4), late);
        assert_eq!(palette.color_for(1), early);
    }

    #[test]
    fn test_reroll_fallback_changes() {
        let mut palette = Palette::with_seed(Vec::new(), FallbackColors::Reroll, 11);

        let colors: Vec<Color> = (0..8).map(|_| palette.color_for(0)).collect();

        assert!(colors.iter().all(Color::is_opaque));
        assert!(colors.windows(2).any(|pair| pair[0] != pair[1]));
    }

    #[test]
    fn test_parse_palette() {
        let colors = parse_palette("#FF5722, #8003A9F4").unwrap();
        assert_eq!(colors, vec![Color::from_hex(0xFF5722), Color::from_argb(0x8003_A9F4)]);
        assert!(parse_palette("  ").unwrap().is_empty());
    }

    #[test]
    fn test_parse_palette_rejects_bad_color() {
        let err = parse_palette("#FF5722,red").unwrap_err();
        assert!(matches!(err, ChartError::InvalidColor(_)));

        assert!(matches!(
            parse_palette("#FF5722,,#03A9F4"),
            Err(ChartError::InvalidColor(_))
        ));
    }

    #[test]
    fn test_random_colors_are_opaque() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..1000 {
            let color = random_opaque_color(&mut rng);
            assert!(color.is_opaque());
            assert_ne!(color.to_argb(), 0xFFFF_FFFF);
        }
    }
}
