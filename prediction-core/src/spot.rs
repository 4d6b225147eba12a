//! Spot records and the resolution of their optional fields.
//!
//! Catalog records may omit the quality prior and any of the placeholder
//! environmental signals. [`Spot::base_score`] and [`Conditions::resolve`]
//! substitute the documented defaults so scoring code only ever sees
//! concrete values.

use geo::Coord;

use crate::Mode;

/// Quality prior used when a record carries no `base_score`.
pub const DEFAULT_BASE_SCORE: f64 = 0.5;
/// Wind speed in km/h assumed when a record carries none.
pub const DEFAULT_WIND_KPH: f64 = 10.0;
/// Water temperature in °C assumed when a record carries none.
pub const DEFAULT_WATER_TEMP_C: f64 = 20.0;
/// Wave height in metres assumed when a record carries none.
pub const DEFAULT_WAVE_HEIGHT_M: f64 = 0.3;

/// Placeholder environmental signals attached to a spot.
///
/// Every field is optional; use [`Conditions::resolve`] before comparing.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Conditions {
    /// Wind speed in km/h.
    pub wind_kph: Option<f64>,
    /// Water temperature in °C.
    pub water_temp_c: Option<f64>,
    /// Wave height in metres.
    pub wave_height_m: Option<f64>,
}

/// Environmental signals with defaults applied.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ResolvedConditions {
    /// Wind speed in km/h.
    pub wind_kph: f64,
    /// Water temperature in °C.
    pub water_temp_c: f64,
    /// Wave height in metres.
    pub wave_height_m: f64,
}

impl Conditions {
    /// Merge the recorded values with the documented defaults.
    ///
    /// # Examples
    /// ```
    /// use prediction_core::Conditions;
    ///
    /// let resolved = Conditions {
    ///     wind_kph: Some(25.0),
    ///     ..Conditions::default()
    /// }
    /// .resolve();
    /// assert_eq!(resolved.wind_kph, 25.0);
    /// assert_eq!(resolved.water_temp_c, 20.0);
    /// assert_eq!(resolved.wave_height_m, 0.3);
    /// ```
    #[must_use]
    pub fn resolve(&self) -> ResolvedConditions {
        ResolvedConditions {
            wind_kph: self.wind_kph.unwrap_or(DEFAULT_WIND_KPH),
            water_temp_c: self.water_temp_c.unwrap_or(DEFAULT_WATER_TEMP_C),
            wave_height_m: self.wave_height_m.unwrap_or(DEFAULT_WAVE_HEIGHT_M),
        }
    }
}

impl Default for ResolvedConditions {
    fn default() -> Self {
        Conditions::default().resolve()
    }
}

/// A candidate location for the tracked activity.
///
/// Coordinates are WGS84 with `x = longitude` and `y = latitude`.
/// `distance_km` is computed upstream from the current reference location
/// and is taken as given.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use prediction_core::{Mode, Spot};
///
/// let spot = Spot::new(
///     "bare-island",
///     "Bare Island",
///     Coord { x: 151.23, y: -33.99 },
///     Mode::Land,
///     12.4,
///     "shore",
/// );
/// assert_eq!(spot.base_score(), 0.5);
/// assert_eq!(spot.conditions().wind_kph, 10.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "crate::catalog::SpotRecord", into = "crate::catalog::SpotRecord")
)]
pub struct Spot {
    /// Stable unique identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Geospatial position.
    pub location: Coord<f64>,
    /// Activity this spot belongs to.
    pub mode: Mode,
    /// Distance from the current reference location in kilometres.
    pub distance_km: f64,
    /// Free-text access descriptor such as "shore" or "ramp".
    pub access: String,
    /// Optional static quality prior in `0.0..=1.0`.
    pub base_score: Option<f64>,
    /// Placeholder environmental signals.
    pub conditions: Conditions,
}

impl Spot {
    /// Construct a spot without a quality prior or recorded conditions.
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        location: Coord<f64>,
        mode: Mode,
        distance_km: f64,
        access: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            location,
            mode,
            distance_km,
            access: access.into(),
            base_score: None,
            conditions: Conditions::default(),
        }
    }

    /// Set the quality prior while returning `self` for chaining.
    #[must_use]
    pub fn with_base_score(mut self, base_score: f64) -> Self {
        self.base_score = Some(base_score);
        self
    }

    /// Replace the recorded conditions while returning `self` for chaining.
    #[must_use]
    pub fn with_conditions(mut self, conditions: Conditions) -> Self {
        self.conditions = conditions;
        self
    }

    /// The quality prior, or [`DEFAULT_BASE_SCORE`] when absent.
    #[must_use]
    pub fn base_score(&self) -> f64 {
        self.base_score.unwrap_or(DEFAULT_BASE_SCORE)
    }

    /// The environmental signals with defaults applied.
    #[must_use]
    pub fn conditions(&self) -> ResolvedConditions {
        self.conditions.resolve()
    }

    /// Human-readable lines describing the resolved conditions.
    ///
    /// # Examples
    /// ```
    /// use geo::Coord;
    /// use prediction_core::{Mode, Spot};
    ///
    /// let spot = Spot::new("a", "A", Coord { x: 0.0, y: 0.0 }, Mode::Boat, 1.0, "ramp");
    /// assert_eq!(
    ///     spot.conditions_summary(),
    ///     ["Sample wind: 10 km/h", "Sample temp: 20 °C", "Mock wave: 0.3 m"],
    /// );
    /// ```
    #[must_use]
    pub fn conditions_summary(&self) -> [String; 3] {
        let resolved = self.conditions();
        [
            format!("Sample wind: {} km/h", resolved.wind_kph),
            format!("Sample temp: {} °C", resolved.water_temp_c),
            format!("Mock wave: {} m", resolved.wave_height_m),
        ]
    }
}
