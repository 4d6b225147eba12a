//! Everything shown when a user opens a single spot.

#![forbid(unsafe_code)]

use prediction_core::{
    Alternative, Mode, ResolvedConditions, Scorer, ScoringContext, Spot, SpotCatalog,
};

use crate::AlternativeRecommender;

/// Factors contributing to every spot's score, in display order.
pub const SCORING_FACTORS: [&str; 3] = [
    "Proximity to your current or searched location.",
    "Static base quality score in demo data.",
    "Placeholder weather factors. Replace with real API data here.",
];

/// Score, conditions, and alternatives for one selected spot.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SpotDetail<'a> {
    /// The selected spot.
    pub spot: &'a Spot,
    /// Its score in the current context.
    pub score: f64,
    /// Its environmental signals with defaults applied.
    pub conditions: ResolvedConditions,
    /// Factors contributing to the score.
    pub factors: &'static [&'static str],
    /// Better nearby spots, best first.
    pub alternatives: Vec<Alternative<'a>>,
}

impl<'a> SpotDetail<'a> {
    /// Assemble the detail view for `spot_id` with the default scorer and
    /// result limit.
    ///
    /// Returns `None` when the catalog holds no such spot.
    ///
    /// # Examples
    /// ```
    /// use geo::Coord;
    /// use prediction_core::{Mode, ScoringContext, Spot, SpotCatalog};
    /// use prediction_scorer::SpotDetail;
    ///
    /// let catalog = SpotCatalog::new(vec![
    ///     Spot::new("ramp", "Ramp", Coord { x: 0.0, y: 0.0 }, Mode::Boat, 4.0, "ramp"),
    /// ]);
    /// let context = ScoringContext::default();
    /// let view = SpotDetail::build(&catalog, "ramp", Mode::Boat, &context).expect("known spot");
    /// assert_eq!(view.factors.len(), 3);
    /// assert!(view.alternatives.is_empty());
    /// assert!(SpotDetail::build(&catalog, "missing", Mode::Boat, &context).is_none());
    /// ```
    #[must_use]
    pub fn build(
        catalog: &'a SpotCatalog,
        spot_id: &str,
        mode: Mode,
        context: &ScoringContext,
    ) -> Option<Self> {
        detail(catalog, spot_id, mode, context)
    }
}

impl<S: Scorer> AlternativeRecommender<S> {
    /// Assemble the detail view for the spot with identifier `spot_id`.
    ///
    /// Returns `None` when the catalog holds no such spot.
    pub fn detail<'a>(
        &self,
        catalog: &'a SpotCatalog,
        spot_id: &str,
        mode: Mode,
        context: &ScoringContext,
    ) -> Option<SpotDetail<'a>> {
        let spot = catalog.get(spot_id)?;
        Some(SpotDetail {
            spot,
            score: self.scorer().score(spot, context),
            conditions: spot.conditions(),
            factors: &SCORING_FACTORS,
            alternatives: self.alternatives(spot, catalog, mode, context),
        })
    }
}

/// Assemble a detail view with the default scorer and result limit.
#[must_use]
pub fn detail<'a>(
    catalog: &'a SpotCatalog,
    spot_id: &str,
    mode: Mode,
    context: &ScoringContext,
) -> Option<SpotDetail<'a>> {
    AlternativeRecommender::<crate::ProximityScorer>::default()
        .detail(catalog, spot_id, mode, context)
}
