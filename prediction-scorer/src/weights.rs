//! Relative weighting between a spot's quality prior and its proximity.
#![forbid(unsafe_code)]

use crate::ScorerError;

/// Weight applied to the quality prior by default.
pub const DEFAULT_QUALITY_WEIGHT: f64 = 0.6;
/// Weight applied to the proximity factor by default.
pub const DEFAULT_PROXIMITY_WEIGHT: f64 = 0.4;

/// Relative weighting between intrinsic quality and proximity.
///
/// Blending divides by the weight total, so the default pair (which sums to
/// one) reduces to `0.6 * base + 0.4 * proximity`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ScoreWeights {
    /// Multiplier applied to the spot's quality prior.
    pub quality: f64,
    /// Multiplier applied to the distance-derived factor.
    pub proximity: f64,
}

impl ScoreWeights {
    /// Validate the weights and return a copy.
    ///
    /// # Errors
    /// Returns [`ScorerError::InvalidWeights`] when either value is negative
    /// or not finite, or the total weight is zero.
    pub fn validate(self) -> Result<Self, ScorerError> {
        if self.is_valid() {
            Ok(self)
        } else {
            Err(ScorerError::InvalidWeights {
                quality: self.quality,
                proximity: self.proximity,
            })
        }
    }

    const fn is_valid(self) -> bool {
        self.has_finite_values() && self.has_non_negative_values() && self.has_non_zero_total()
    }

    const fn has_finite_values(self) -> bool {
        self.quality.is_finite() && self.proximity.is_finite()
    }

    const fn has_non_negative_values(self) -> bool {
        self.quality >= 0.0 && self.proximity >= 0.0
    }

    #[expect(
        clippy::float_arithmetic,
        reason = "validation sums weights to ensure a non-zero total"
    )]
    const fn has_non_zero_total(self) -> bool {
        (self.quality + self.proximity) != 0.0
    }

    #[expect(
        clippy::float_arithmetic,
        reason = "score blending requires weighted averages"
    )]
    pub(crate) fn blend(self, quality: f64, proximity: f64) -> f64 {
        let total = self.quality + self.proximity;
        if total == 0.0 {
            return 0.0;
        }
        (quality * self.quality + proximity * self.proximity) / total
    }
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            quality: DEFAULT_QUALITY_WEIGHT,
            proximity: DEFAULT_PROXIMITY_WEIGHT,
        }
    }
}
