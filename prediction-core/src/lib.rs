//! Core domain types for the Pure Prediction spot engine.
//!
//! A [`SpotCatalog`] holds candidate locations for fishing from land or
//! from a boat. A [`Scorer`] turns a [`Spot`] and the caller's
//! [`ScoringContext`] into a suitability score; ranking and recommendation
//! produce transient [`RankedEntry`] and [`Alternative`] values borrowing
//! from the catalog.
//!
//! Nothing here performs I/O or holds mutable state. Optional record fields
//! resolve to documented defaults rather than failing.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod catalog;
mod location;
mod mode;
mod recommendation;
pub mod scorer;
pub mod settings;
pub mod spot;
#[cfg(any(test, feature = "test-support"))]
#[cfg_attr(docsrs, doc(cfg(feature = "test-support")))]
pub mod test_support;

#[cfg(feature = "serde")]
pub use catalog::CatalogError;
pub use catalog::SpotCatalog;
pub use location::UserLocation;
pub use mode::{Mode, ParseModeError};
pub use recommendation::{
    Alternative, RankedEntry, Reason, ScoreBand, justification, score_percent,
};
pub use scorer::Scorer;
pub use settings::{DEFAULT_RADIUS_KM, ScoringContext, SearchSettings, SettingsError};
pub use spot::{Conditions, ResolvedConditions, Spot};
