//! Error types for ringstat_chart

use std::io;
use thiserror::Error;

use ringstat_core::ColorParseError;

/// Errors raised while building or configuring a chart
///
/// Rendering itself never fails; these cover configuration input only.
#[derive(Error, Debug)]
pub enum ChartError {
    /// IO error when reading a config file
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// TOML config could not be parsed
    #[error("config parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Config could not be serialized
    #[error("config serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    /// Layout mode outside 0..=3
    #[error("invalid layout mode {0}, expected 0, 1, 2 or 3")]
    InvalidLayoutMode(u8),

    /// Malformed palette color
    #[error("invalid color: {0}")]
    InvalidColor(#[from] ColorParseError),

    /// Negative or non-finite stroke width
    #[error("invalid stroke width {0}, expected a finite value >= 0")]
    InvalidStrokeWidth(f32),

    /// Zero, negative or non-finite font size
    #[error("invalid font size {0}, expected a finite value > 0")]
    InvalidFontSize(f32),

    /// Dataset text could not be parsed
    #[error("invalid dataset value {0:?}")]
    InvalidDataset(String),
}

/// Result type for ringstat_chart operations
pub type Result<T> = std::result::Result<T, ChartError>;
