//! Chart dataset
//!
//! An ordered list of fractions of a whole. Order decides draw order and
//! default color assignment. The values need not add up to 1.0; their sum is
//! what the label shows.

use std::str::FromStr;

use crate::error::ChartError;

/// Ordered, immutable list of fractional values
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Dataset {
    values: Vec<f32>,
}

impl Dataset {
    pub fn new(values: Vec<f32>) -> Self {
        Self { values }
    }

    pub fn values(&self) -> &[f32] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = f32> + '_ {
        self.values.iter().copied()
    }

    /// Sum of all fractions
    pub fn sum(&self) -> f32 {
        self.values.iter().sum()
    }
}

impl From<Vec<f32>> for Dataset {
    fn from(values: Vec<f32>) -> Self {
        Self::new(values)
    }
}

impl From<&[f32]> for Dataset {
    fn from(values: &[f32]) -> Self {
        Self::new(values.to_vec())
    }
}

impl FromIterator<f32> for Dataset {
    fn from_iter<I: IntoIterator<Item = f32>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl FromStr for Dataset {
    type Err = ChartError;

    /// Parse a comma separated list such as `0.3, 0.2, 0.3734`
    ///
    /// Rejects negative and non-finite values and empty entries such as the
    /// middle of `0.3,,0.2`. An empty string is an empty dataset.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().is_empty() {
            return Ok(Self::default());
        }
        s.split(',')
            .map(str::trim)
            .map(|part| match part.parse::<f32>() {
                Ok(value) if value.is_finite() && value >= 0.0 => Ok(value),
                _ => Err(ChartError::InvalidDataset(part.to_string())),
            })
            .collect()
    }
}
