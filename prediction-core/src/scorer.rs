//! Score spots for the current search context.
//!
//! The `Scorer` trait assigns a suitability score to a [`Spot`] given the
//! caller's [`ScoringContext`].

use crate::{ScoringContext, Spot};

/// Calculate a suitability score for a spot.
///
/// Higher scores indicate a better opportunity. Implementations must be
/// thread-safe (`Send` + `Sync`) so callers can score from any concurrency
/// model. The method is infallible and deterministic: missing spot fields
/// resolve to their defaults and identical inputs yield identical scores.
///
/// # Examples
///
/// ```rust
/// use geo::Coord;
/// use prediction_core::{Mode, Scorer, ScoringContext, Spot};
///
/// struct PriorOnly;
///
/// impl Scorer for PriorOnly {
///     fn score(&self, spot: &Spot, _context: &ScoringContext) -> f64 {
///         spot.base_score()
///     }
/// }
///
/// let spot = Spot::new("a", "A", Coord { x: 0.0, y: 0.0 }, Mode::Land, 1.0, "shore");
/// assert_eq!(PriorOnly.score(&spot, &ScoringContext::default()), 0.5);
/// ```
pub trait Scorer: Send + Sync {
    /// Return a score for `spot` within `context`.
    fn score(&self, spot: &Spot, context: &ScoringContext) -> f64;
}

impl<S: Scorer + ?Sized> Scorer for &S {
    fn score(&self, spot: &Spot, context: &ScoringContext) -> f64 {
        (**self).score(spot, context)
    }
}
