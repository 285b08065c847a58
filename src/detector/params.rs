//! Parameter types configuring the detector.
//!
//! Defaults follow the usual MSER settings (delta 5, diversity 0.2, regions
//! up to 75% of the grid). For noisy inputs start by raising `delta`; for
//! fewer nested duplicates raise `min_diversity`.

use crate::error::MserError;
use crate::grid::Polarity;
use crate::stability::CandidateFilter;
use serde::{Deserialize, Serialize};

/// Detector-wide parameters.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MserParams {
    /// Level window used by the variation score (>= 1).
    ///
    /// Only regions at levels `t` with `t >= delta` and `t + delta` within
    /// the intensity range are scored, so fully saturated blobs (value 0 or
    /// `MAX` under the chosen polarity) are never selected.
    pub delta: u32,
    /// Minimum relative size difference between nested regions, in [0, 1].
    pub min_diversity: f32,
    /// Smallest region as a fraction of the grid element count.
    pub min_area_fraction: f32,
    /// Absolute floor on region size; the larger of both bounds applies.
    pub min_area_elements: usize,
    /// Largest region as a fraction of the grid element count.
    pub max_area_fraction: f32,
    /// Drop stable regions whose variation exceeds this value.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_variation: Option<f32>,
    pub polarity: Polarity,
}

impl Default for MserParams {
    fn default() -> Self {
        Self {
            delta: 5,
            min_diversity: 0.2,
            min_area_fraction: 0.0,
            min_area_elements: 3,
            max_area_fraction: 0.75,
            max_variation: None,
            polarity: Polarity::BrightOnDark,
        }
    }
}

impl MserParams {
    pub fn with_polarity(mut self, polarity: Polarity) -> Self {
        self.polarity = polarity;
        self
    }

    pub fn with_delta(mut self, delta: u32) -> Self {
        self.delta = delta;
        self
    }

    pub fn with_area_fractions(mut self, min: f32, max: f32) -> Self {
        self.min_area_fraction = min;
        self.max_area_fraction = max;
        self
    }

    pub fn with_min_diversity(mut self, min_diversity: f32) -> Self {
        self.min_diversity = min_diversity;
        self
    }

    /// Reject out-of-range values before any traversal starts.
    pub fn validate(&self) -> Result<(), MserError> {
        if self.delta == 0 {
            return Err(MserError::config("delta must be at least 1"));
        }
        check_unit("min_diversity", self.min_diversity)?;
        check_unit("min_area_fraction", self.min_area_fraction)?;
        check_unit("max_area_fraction", self.max_area_fraction)?;
        if self.min_area_fraction > self.max_area_fraction {
            return Err(MserError::config(format!(
                "min_area_fraction {} exceeds max_area_fraction {}",
                self.min_area_fraction, self.max_area_fraction
            )));
        }
        if let Some(max_variation) = self.max_variation {
            if max_variation.is_nan() || max_variation < 0.0 {
                return Err(MserError::config(format!(
                    "max_variation must be non-negative, got {max_variation}"
                )));
            }
        }
        Ok(())
    }

    /// Absolute size window for a grid of `elements` elements.
    pub fn candidate_filter(&self, elements: usize) -> CandidateFilter {
        let total = elements as f64;
        // Absorb f32 rounding of the fractions before ceil/floor.
        let min_exact = self.min_area_fraction as f64 * total;
        let max_exact = self.max_area_fraction as f64 * total;
        let min_size = ((min_exact * (1.0 - 1e-6)).ceil() as usize)
            .max(self.min_area_elements)
            .max(1);
        let max_size = (max_exact * (1.0 + 1e-6)).floor() as usize;
        CandidateFilter {
            min_size,
            max_size,
            max_variation: self.max_variation,
        }
    }
}

fn check_unit(name: &str, value: f32) -> Result<(), MserError> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(MserError::config(format!(
            "{name} must lie in [0, 1], got {value}"
        )))
    }
}
