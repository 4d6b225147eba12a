//! Rank the spots of one mode and pick the best opportunity.

#![forbid(unsafe_code)]

use std::cmp::Ordering;

use log::debug;
use prediction_core::{Mode, RankedEntry, Scorer, ScoringContext, SpotCatalog};

use crate::ProximityScorer;

/// Ranks catalog spots of a single mode by score.
///
/// Entries are ordered by descending score. Exact ties keep catalog order,
/// so identical inputs always produce identical rankings.
#[derive(Debug, Clone, Default)]
pub struct SpotRanker<S> {
    scorer: S,
}

impl<S: Scorer> SpotRanker<S> {
    /// Wrap a scorer.
    pub const fn new(scorer: S) -> Self {
        Self { scorer }
    }

    /// Score and order every spot in `catalog` whose mode is `mode`.
    ///
    /// Returns an empty list when no spot matches.
    pub fn rank<'a>(
        &self,
        catalog: &'a SpotCatalog,
        mode: Mode,
        context: &ScoringContext,
    ) -> Vec<RankedEntry<'a>> {
        let mut entries: Vec<RankedEntry<'a>> = catalog
            .in_mode(mode)
            .map(|(catalog_index, spot)| RankedEntry {
                spot,
                score: self.scorer.score(spot, context),
                catalog_index,
            })
            .collect();
        entries.sort_by(|a, b| {
            by_score_then_index((a.score, a.catalog_index), (b.score, b.catalog_index))
        });
        debug!(
            "ranked {} of {} spots for mode {mode}",
            entries.len(),
            catalog.len()
        );
        entries
    }
}

/// Descending score, then ascending catalog index.
pub(crate) fn by_score_then_index(a: (f64, usize), b: (f64, usize)) -> Ordering {
    b.0.total_cmp(&a.0).then_with(|| a.1.cmp(&b.1))
}

/// Rank `catalog` for `mode` with the default [`ProximityScorer`].
///
/// # Examples
/// ```
/// use geo::Coord;
/// use prediction_core::{Mode, ScoringContext, Spot, SpotCatalog};
/// use prediction_scorer::{best, rank};
///
/// let catalog = SpotCatalog::new(vec![
///     Spot::new("a", "A", Coord { x: 0.0, y: 0.0 }, Mode::Land, 1.0, "shore").with_base_score(0.2),
///     Spot::new("b", "B", Coord { x: 0.0, y: 0.0 }, Mode::Land, 1.0, "shore").with_base_score(0.9),
///     Spot::new("c", "C", Coord { x: 0.0, y: 0.0 }, Mode::Boat, 1.0, "ramp").with_base_score(1.0),
/// ]);
/// let ranked = rank(&catalog, Mode::Land, &ScoringContext::default());
/// let ids: Vec<&str> = ranked.iter().map(|entry| entry.spot.id.as_str()).collect();
/// assert_eq!(ids, ["b", "a"]);
/// assert_eq!(best(&ranked).map(|entry| entry.spot.id.as_str()), Some("b"));
/// ```
#[must_use]
pub fn rank<'a>(
    catalog: &'a SpotCatalog,
    mode: Mode,
    context: &ScoringContext,
) -> Vec<RankedEntry<'a>> {
    SpotRanker::new(ProximityScorer::default()).rank(catalog, mode, context)
}

/// The top entry of a ranking, or `None` when nothing was ranked.
#[must_use]
pub fn best<'r, 'a>(ranked: &'r [RankedEntry<'a>]) -> Option<&'r RankedEntry<'a>> {
    ranked.first()
}
