//! Search configuration and per-call scoring context.
//!
//! The engine holds no state of its own. Callers resolve a
//! [`SearchSettings`] once from their configuration sources and thread a
//! [`ScoringContext`] into every ranking or recommendation call.

use thiserror::Error;

use crate::{Mode, UserLocation};

/// Radius in kilometres used when no configuration overrides it.
pub const DEFAULT_RADIUS_KM: f64 = 20.0;

/// Errors returned by [`SearchSettings::new`].
#[derive(Debug, Clone, Copy, Error, PartialEq)]
pub enum SettingsError {
    /// The radius was zero, negative, or not finite.
    #[error("search radius must be a positive number of kilometres, got {radius_km}")]
    InvalidRadius {
        /// Rejected radius.
        radius_km: f64,
    },
}

/// Activity mode and relevance radius selected by the user.
///
/// # Examples
/// ```
/// use prediction_core::{Mode, SearchSettings};
///
/// let settings = SearchSettings::default();
/// assert_eq!(settings.mode(), Mode::Land);
/// assert_eq!(settings.radius_km(), 20.0);
///
/// assert!(SearchSettings::new(Mode::Boat, 0.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchSettings {
    mode: Mode,
    radius_km: f64,
}

impl SearchSettings {
    /// Validate and construct settings.
    ///
    /// # Errors
    /// Returns [`SettingsError::InvalidRadius`] when `radius_km` is not a
    /// finite positive number.
    pub fn new(mode: Mode, radius_km: f64) -> Result<Self, SettingsError> {
        if !radius_km.is_finite() || radius_km <= 0.0 {
            return Err(SettingsError::InvalidRadius { radius_km });
        }
        Ok(Self { mode, radius_km })
    }

    /// The selected activity mode.
    #[must_use]
    pub const fn mode(&self) -> Mode {
        self.mode
    }

    /// The relevance radius in kilometres.
    #[must_use]
    pub const fn radius_km(&self) -> f64 {
        self.radius_km
    }

    /// Build the scoring context for the current reference location.
    #[must_use]
    pub const fn context(&self, user_location: Option<UserLocation>) -> ScoringContext {
        ScoringContext::new(user_location, self.radius_km)
    }
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            mode: Mode::default(),
            radius_km: DEFAULT_RADIUS_KM,
        }
    }
}

/// Inputs shared by every score computed in one ranking pass.
///
/// Replacing the user location invalidates scores computed with the old
/// context; nothing is cached.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoringContext {
    /// Reference location, absent until the user locates or searches.
    pub user_location: Option<UserLocation>,
    /// Radius normalising the proximity factor and bounding alternatives.
    pub radius_km: f64,
}

impl ScoringContext {
    /// Construct a context.
    #[must_use]
    pub const fn new(user_location: Option<UserLocation>, radius_km: f64) -> Self {
        Self {
            user_location,
            radius_km,
        }
    }

    /// Report whether a reference location is known.
    #[must_use]
    pub const fn has_location(&self) -> bool {
        self.user_location.is_some()
    }
}

impl Default for ScoringContext {
    fn default() -> Self {
        Self::new(None, DEFAULT_RADIUS_KM)
    }
}
