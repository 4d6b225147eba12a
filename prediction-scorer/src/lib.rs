//! Scoring, ranking, and recommendation for Pure Prediction spots.
//!
//! The crate provides the decision logic of the engine:
//! - **Scoring** blends a spot's quality prior with a proximity factor that
//!   decays linearly to zero at the configured radius ([`ProximityScorer`]).
//! - **Ranking** filters a [`SpotCatalog`](prediction_core::SpotCatalog) to
//!   one [`Mode`](prediction_core::Mode), scores each spot, and orders the
//!   result by descending score with catalog order breaking ties
//!   ([`rank`], [`best`]).
//! - **Alternatives** re-score the in-range spots of the same mode against a
//!   selected spot and keep only those that clear a score margin *and* show
//!   at least one human-legible advantage ([`alternatives`]).
//!
//! Every operation is a pure, synchronous function of its inputs. The
//! mode, radius, and user location are passed explicitly on each call.
//!
//! # Examples
//!
//! ```
//! use geo::Coord;
//! use prediction_core::{Mode, SearchSettings, Spot, SpotCatalog, UserLocation};
//! use prediction_scorer::{best, rank};
//!
//! let catalog = SpotCatalog::new(vec![
//!     Spot::new("near", "Near", Coord { x: 0.0, y: 0.0 }, Mode::Boat, 2.0, "ramp"),
//!     Spot::new("far", "Far", Coord { x: 0.0, y: 0.0 }, Mode::Boat, 18.0, "ramp"),
//! ]);
//! let settings = SearchSettings::default();
//! let context = settings.context(Some(UserLocation::new(-33.87, 151.21)));
//! let ranked = rank(&catalog, Mode::Boat, &context);
//! assert_eq!(best(&ranked).map(|entry| entry.spot.id.as_str()), Some("near"));
//! ```

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod alternatives;
mod detail;
mod error;
mod proximity;
mod ranking;
mod weights;

pub use alternatives::{
    AlternativeRecommender, DEFAULT_MAX_ALTERNATIVES, IDEAL_WATER_TEMP_C, SCORE_MARGIN,
    WAVE_MARGIN_M, WIND_MARGIN_KPH, alternatives, compare_conditions,
};
pub use detail::{SCORING_FACTORS, SpotDetail, detail};
pub use error::ScorerError;
pub use proximity::{NEUTRAL_DISTANCE_FACTOR, ProximityScorer, distance_factor, score};
pub use ranking::{SpotRanker, best, rank};
pub use weights::{DEFAULT_PROXIMITY_WEIGHT, DEFAULT_QUALITY_WEIGHT, ScoreWeights};
