//! Find and justify better nearby spots for a selected spot.
//!
//! A candidate must clear two independent filters before it is offered:
//!
//! 1. its score must beat the selected spot's by more than
//!    [`SCORE_MARGIN`], and
//! 2. at least one of the wind, water temperature, or wave comparisons must
//!    favour it, each against its own fixed threshold.
//!
//! A score edge without a legible reason is not surfaced.

#![forbid(unsafe_code)]

use log::debug;
use prediction_core::{
    Alternative, Mode, Reason, ResolvedConditions, Scorer, ScoringContext, Spot, SpotCatalog,
};

use crate::ProximityScorer;
use crate::ranking::by_score_then_index;

/// Minimum score improvement, exclusive, for a candidate to be considered.
pub const SCORE_MARGIN: f64 = 0.05;
/// Wind reduction in km/h a candidate must exceed to count as calmer.
pub const WIND_MARGIN_KPH: f64 = 2.0;
/// Water temperature in °C treated as ideal.
pub const IDEAL_WATER_TEMP_C: f64 = 20.0;
/// Wave reduction in metres a candidate must exceed to count as calmer.
pub const WAVE_MARGIN_M: f64 = 0.2;
/// Number of alternatives returned unless configured otherwise.
pub const DEFAULT_MAX_ALTERNATIVES: usize = 3;

/// Recommends justified alternatives to a selected spot.
#[derive(Debug, Clone)]
pub struct AlternativeRecommender<S> {
    scorer: S,
    max_results: usize,
}

impl<S: Default> Default for AlternativeRecommender<S> {
    fn default() -> Self {
        Self {
            scorer: S::default(),
            max_results: DEFAULT_MAX_ALTERNATIVES,
        }
    }
}

impl<S: Scorer> AlternativeRecommender<S> {
    /// Wrap a scorer, returning at most [`DEFAULT_MAX_ALTERNATIVES`] results.
    pub const fn new(scorer: S) -> Self {
        Self {
            scorer,
            max_results: DEFAULT_MAX_ALTERNATIVES,
        }
    }

    /// Change the number of alternatives returned.
    #[must_use]
    pub fn with_max_results(mut self, max_results: usize) -> Self {
        self.max_results = max_results;
        self
    }

    /// The scorer used for both the selected spot and its candidates.
    pub const fn scorer(&self) -> &S {
        &self.scorer
    }

    /// The configured result limit.
    pub const fn max_results(&self) -> usize {
        self.max_results
    }

    /// Find better spots than `selected` among the in-range spots of `mode`.
    ///
    /// Returns an empty list when `selected` does not itself belong to
    /// `mode`. Results are ordered by descending score, ties in catalog
    /// order, and truncated to the configured limit.
    pub fn alternatives<'a>(
        &self,
        selected: &Spot,
        catalog: &'a SpotCatalog,
        mode: Mode,
        context: &ScoringContext,
    ) -> Vec<Alternative<'a>> {
        if selected.mode != mode {
            debug!(
                "spot {} is a {} spot; no {mode} alternatives apply",
                selected.id, selected.mode
            );
            return Vec::new();
        }

        let selected_score = self.scorer.score(selected, context);
        let selected_conditions = selected.conditions();

        let mut picks: Vec<Alternative<'a>> = catalog
            .in_mode(mode)
            .filter(|(_, candidate)| {
                candidate.id != selected.id && candidate.distance_km <= context.radius_km
            })
            .filter_map(|(catalog_index, candidate)| {
                let score = self.scorer.score(candidate, context);
                if !beats_by_margin(score, selected_score) {
                    debug!(
                        "candidate {} scored {score}, not clear of {selected_score}",
                        candidate.id
                    );
                    return None;
                }
                let reasons = compare_conditions(&candidate.conditions(), &selected_conditions);
                let pick = Alternative::new(candidate, score, catalog_index, reasons);
                if pick.is_none() {
                    debug!(
                        "candidate {} outscores {} but has no legible advantage",
                        candidate.id, selected.id
                    );
                }
                pick
            })
            .collect();

        picks.sort_by(|a, b| {
            by_score_then_index(
                (a.score, a.catalog_index()),
                (b.score, b.catalog_index()),
            )
        });
        picks.truncate(self.max_results);
        picks
    }
}

#[expect(
    clippy::float_arithmetic,
    reason = "the margin is an additive offset on the selected score"
)]
fn beats_by_margin(candidate: f64, selected: f64) -> bool {
    candidate > selected + SCORE_MARGIN
}

/// List every qualitative way `candidate` beats `selected`.
///
/// The comparisons are independent; any subset may hold.
///
/// # Examples
/// ```
/// use prediction_core::{Reason, ResolvedConditions};
/// use prediction_scorer::compare_conditions;
///
/// let selected = ResolvedConditions { wind_kph: 15.0, water_temp_c: 20.0, wave_height_m: 0.3 };
/// let candidate = ResolvedConditions { wind_kph: 10.0, ..selected };
/// assert_eq!(
///     compare_conditions(&candidate, &selected),
///     [Reason::LowerWind { candidate_kph: 10.0, selected_kph: 15.0 }],
/// );
/// ```
#[must_use]
#[expect(
    clippy::float_arithmetic,
    reason = "comparisons offset readings by fixed thresholds"
)]
pub fn compare_conditions(
    candidate: &ResolvedConditions,
    selected: &ResolvedConditions,
) -> Vec<Reason> {
    let mut reasons = Vec::new();
    if candidate.wind_kph + WIND_MARGIN_KPH < selected.wind_kph {
        reasons.push(Reason::LowerWind {
            candidate_kph: candidate.wind_kph,
            selected_kph: selected.wind_kph,
        });
    }
    if (candidate.water_temp_c - IDEAL_WATER_TEMP_C).abs()
        < (selected.water_temp_c - IDEAL_WATER_TEMP_C).abs()
    {
        reasons.push(Reason::CloserToIdealTemperature);
    }
    if candidate.wave_height_m + WAVE_MARGIN_M < selected.wave_height_m {
        reasons.push(Reason::CalmerSurface {
            candidate_m: candidate.wave_height_m,
            selected_m: selected.wave_height_m,
        });
    }
    reasons
}

/// Find alternatives with the default scorer and result limit.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use prediction_core::{Conditions, Mode, ScoringContext, Spot, SpotCatalog};
/// use prediction_scorer::alternatives;
///
/// let windy = Spot::new("windy", "Windy", Coord { x: 0.0, y: 0.0 }, Mode::Land, 2.0, "shore")
///     .with_base_score(0.5)
///     .with_conditions(Conditions { wind_kph: Some(15.0), ..Conditions::default() });
/// let sheltered = Spot::new("lee", "Lee", Coord { x: 0.0, y: 0.0 }, Mode::Land, 2.0, "shore")
///     .with_base_score(0.7);
/// let catalog = SpotCatalog::new(vec![windy.clone(), sheltered]);
///
/// let picks = alternatives(&windy, &catalog, Mode::Land, &ScoringContext::default());
/// assert_eq!(picks.len(), 1);
/// assert_eq!(picks[0].justification, "Better score and lower wind (10 vs 15 km/h).");
/// ```
#[must_use]
pub fn alternatives<'a>(
    selected: &Spot,
    catalog: &'a SpotCatalog,
    mode: Mode,
    context: &ScoringContext,
) -> Vec<Alternative<'a>> {
    AlternativeRecommender::new(ProximityScorer::default())
        .alternatives(selected, catalog, mode, context)
}
