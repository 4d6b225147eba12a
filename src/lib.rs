//! Facade crate for the Pure Prediction spot engine.
//!
//! This crate re-exports the core domain types and the default scoring,
//! ranking, and recommendation operations.

#![forbid(unsafe_code)]

pub use prediction_core::{
    Alternative, Conditions, DEFAULT_RADIUS_KM, Mode, ParseModeError, RankedEntry, Reason,
    ResolvedConditions, ScoreBand, Scorer, ScoringContext, SearchSettings, SettingsError, Spot,
    SpotCatalog, UserLocation, justification, score_percent,
};

#[cfg(feature = "serde")]
pub use prediction_core::CatalogError;

pub use prediction_scorer::{
    AlternativeRecommender, ProximityScorer, ScoreWeights, ScorerError, SpotDetail, SpotRanker,
    alternatives, best, detail, distance_factor, rank, score,
};
