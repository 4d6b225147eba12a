//! Results produced by ranking and recommendation passes.
//!
//! These values are transient: they borrow from the catalog they were
//! computed against and are recomputed whenever the mode, radius, or user
//! location changes.

use std::fmt;

use crate::Spot;

/// A spot paired with its score in one ranking pass.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct RankedEntry<'a> {
    /// The scored spot.
    pub spot: &'a Spot,
    /// Suitability score.
    pub score: f64,
    /// Position of the spot in its catalog.
    #[cfg_attr(feature = "serde", serde(skip))]
    pub catalog_index: usize,
}

impl RankedEntry<'_> {
    /// The score as a whole percentage.
    #[must_use]
    pub fn percent(&self) -> i64 {
        score_percent(self.score)
    }

    /// The display band of the score.
    #[must_use]
    pub fn band(&self) -> ScoreBand {
        ScoreBand::from_score(self.score)
    }
}

/// A human-legible way in which an alternative beats the selected spot.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "snake_case"))]
pub enum Reason {
    /// The alternative is meaningfully less windy.
    LowerWind {
        /// Alternative wind speed in km/h.
        candidate_kph: f64,
        /// Selected spot wind speed in km/h.
        selected_kph: f64,
    },
    /// The alternative's water is closer to the ideal temperature.
    CloserToIdealTemperature,
    /// The alternative has meaningfully smaller waves.
    CalmerSurface {
        /// Alternative wave height in metres.
        candidate_m: f64,
        /// Selected spot wave height in metres.
        selected_m: f64,
    },
}

impl fmt::Display for Reason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LowerWind {
                candidate_kph,
                selected_kph,
            } => write!(f, "lower wind ({candidate_kph} vs {selected_kph} km/h)"),
            Self::CloserToIdealTemperature => f.write_str("closer to ideal water temperature"),
            Self::CalmerSurface {
                candidate_m,
                selected_m,
            } => write!(f, "calmer surface (waves {candidate_m} m vs {selected_m} m)"),
        }
    }
}

/// Render the sentence justifying an alternative.
///
/// # Examples
/// ```
/// use prediction_core::{Reason, justification};
///
/// let text = justification(&[
///     Reason::LowerWind { candidate_kph: 10.0, selected_kph: 15.0 },
///     Reason::CloserToIdealTemperature,
/// ]);
/// assert_eq!(
///     text,
///     "Better score and lower wind (10 vs 15 km/h), closer to ideal water temperature."
/// );
/// ```
#[must_use]
pub fn justification(reasons: &[Reason]) -> String {
    let phrases: Vec<String> = reasons.iter().map(ToString::to_string).collect();
    format!("Better score and {}.", phrases.join(", "))
}

/// A same-mode, in-range spot offered as an upgrade over a selected spot.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Alternative<'a> {
    /// The better spot.
    pub spot: &'a Spot,
    /// Its score in the same context as the selected spot.
    pub score: f64,
    /// Every qualitative way it beats the selected spot; never empty.
    pub reasons: Vec<Reason>,
    /// Sentence rendered from `reasons`.
    pub justification: String,
    #[cfg_attr(feature = "serde", serde(skip))]
    catalog_index: usize,
}

impl<'a> Alternative<'a> {
    /// Build an alternative, or `None` when there is no reason to prefer it.
    #[must_use]
    pub fn new(
        spot: &'a Spot,
        score: f64,
        catalog_index: usize,
        reasons: Vec<Reason>,
    ) -> Option<Self> {
        if reasons.is_empty() {
            return None;
        }
        let justification = justification(&reasons);
        Some(Self {
            spot,
            score,
            reasons,
            justification,
            catalog_index,
        })
    }

    /// Position of the spot in its catalog.
    #[must_use]
    pub const fn catalog_index(&self) -> usize {
        self.catalog_index
    }
}

/// Coarse display band for a score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ScoreBand {
    /// Below 0.4.
    Low,
    /// From 0.4 up to 0.7.
    Medium,
    /// 0.7 and above.
    High,
}

impl ScoreBand {
    /// Classify a score.
    ///
    /// # Examples
    /// ```
    /// use prediction_core::ScoreBand;
    ///
    /// assert_eq!(ScoreBand::from_score(0.39), ScoreBand::Low);
    /// assert_eq!(ScoreBand::from_score(0.4), ScoreBand::Medium);
    /// assert_eq!(ScoreBand::from_score(0.7), ScoreBand::High);
    /// ```
    #[must_use]
    pub fn from_score(score: f64) -> Self {
        if score < 0.4 {
            Self::Low
        } else if score < 0.7 {
            Self::Medium
        } else {
            Self::High
        }
    }

    /// Lowercase band name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

impl fmt::Display for ScoreBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Convert a score to a whole percentage, rounding half away from zero.
///
/// # Examples
/// ```
/// assert_eq!(prediction_core::score_percent(0.786), 79);
/// assert_eq!(prediction_core::score_percent(0.68), 68);
/// ```
#[must_use]
#[expect(
    clippy::float_arithmetic,
    clippy::cast_possible_truncation,
    reason = "percentages are rounded from bounded scores"
)]
pub fn score_percent(score: f64) -> i64 {
    (score * 100.0).round() as i64
}
