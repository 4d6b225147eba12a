//! The production scorer: quality prior blended with proximity.
//!
//! Without a reference location there is no proximity signal, so every spot
//! receives the neutral factor `0.5`. With one, the factor decays linearly
//! from `1.0` at the reference point to `0.0` at the configured radius and
//! stays at `0.0` beyond it.
//!
//! The factor is floored at zero and not capped at one. A negative
//! `distance_km` inflates the factor above one and the score with it.
//! Distances are supplied upstream and are not validated here.

#![forbid(unsafe_code)]

use prediction_core::{Scorer, ScoringContext, Spot, UserLocation};

use crate::{ScoreWeights, ScorerError};

/// Proximity factor used when no reference location is known.
pub const NEUTRAL_DISTANCE_FACTOR: f64 = 0.5;

/// Scorer blending a spot's quality prior with its distance factor.
///
/// # Examples
///
/// ```
/// use geo::Coord;
/// use prediction_core::{Mode, Scorer, ScoringContext, Spot, UserLocation};
/// use prediction_scorer::ProximityScorer;
///
/// let spot = Spot::new("x", "X", Coord { x: 0.0, y: 0.0 }, Mode::Land, 5.0, "shore")
///     .with_base_score(0.8);
/// let context = ScoringContext::new(Some(UserLocation::new(0.0, 0.0)), 20.0);
/// let score = ProximityScorer::default().score(&spot, &context);
/// assert!((score - 0.78).abs() < 1e-9);
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct ProximityScorer {
    weights: ScoreWeights,
}

impl ProximityScorer {
    /// Construct a scorer with custom weights.
    ///
    /// # Errors
    /// Returns [`ScorerError::InvalidWeights`] when the weights fail
    /// [`ScoreWeights::validate`].
    pub fn new(weights: ScoreWeights) -> Result<Self, ScorerError> {
        Ok(Self {
            weights: weights.validate()?,
        })
    }

    /// The weights in use.
    #[must_use]
    pub const fn weights(&self) -> ScoreWeights {
        self.weights
    }
}

impl Scorer for ProximityScorer {
    fn score(&self, spot: &Spot, context: &ScoringContext) -> f64 {
        let proximity = distance_factor(spot.distance_km, context);
        self.weights.blend(spot.base_score(), proximity)
    }
}

/// Proximity factor for a spot `distance_km` away.
///
/// # Examples
/// ```
/// use prediction_core::{ScoringContext, UserLocation};
/// use prediction_scorer::distance_factor;
///
/// let located = ScoringContext::new(Some(UserLocation::new(0.0, 0.0)), 20.0);
/// assert_eq!(distance_factor(5.0, &located), 0.75);
/// assert_eq!(distance_factor(45.0, &located), 0.0);
/// assert_eq!(distance_factor(5.0, &ScoringContext::default()), 0.5);
/// ```
#[must_use]
#[expect(
    clippy::float_arithmetic,
    reason = "the proximity factor decays linearly with distance"
)]
pub fn distance_factor(distance_km: f64, context: &ScoringContext) -> f64 {
    if context.user_location.is_none() {
        return NEUTRAL_DISTANCE_FACTOR;
    }
    (1.0 - distance_km / context.radius_km).max(0.0)
}

/// Score a spot with the default weights.
///
/// Convenience wrapper over [`ProximityScorer`] taking the reference location
/// and radius directly.
#[must_use]
pub fn score(spot: &Spot, user_location: Option<&UserLocation>, radius_km: f64) -> f64 {
    let context = ScoringContext::new(user_location.copied(), radius_km);
    ProximityScorer::default().score(spot, &context)
}
