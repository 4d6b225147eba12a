//! The in-memory spot catalog and its JSON document format.
//!
//! A catalog is loaded once per session and is read-only afterwards. The
//! position of each spot in the catalog is significant: ranking uses it to
//! break exact score ties.
//!
//! With the `serde` feature enabled, catalogs decode from documents shaped
//! like:
//!
//! ```json
//! {
//!   "spots": [
//!     {
//!       "id": "bare-island",
//!       "name": "Bare Island",
//!       "lat": -33.99,
//!       "lon": 151.23,
//!       "mode": "land",
//!       "distance_km": 12.4,
//!       "access": "shore",
//!       "base_score": 0.8,
//!       "mock_wind_kph": 14,
//!       "mock_temp_c": 19,
//!       "mock_wave_m": 0.6
//!     }
//!   ]
//! }
//! ```
//!
//! Records that do not decode (an unknown `mode`, a missing coordinate or
//! distance) are skipped with a warning rather than failing the document.
//! A missing `name` falls back to the id and a missing `access` to an empty
//! string.
//!
//! Values are not validated. Records with a negative distance or a quality
//! prior outside `0.0..=1.0` are accepted and reported through `log::warn!`.

use std::collections::HashSet;

use log::warn;

use crate::{Mode, Spot};

/// Ordered collection of spots supplied by the catalog loader.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use prediction_core::{Mode, Spot, SpotCatalog};
///
/// let catalog = SpotCatalog::new(vec![
///     Spot::new("a", "A", Coord { x: 0.0, y: 0.0 }, Mode::Land, 1.0, "shore"),
///     Spot::new("b", "B", Coord { x: 0.0, y: 0.0 }, Mode::Boat, 2.0, "ramp"),
/// ]);
/// assert_eq!(catalog.len(), 2);
/// assert_eq!(catalog.in_mode(Mode::Boat).count(), 1);
/// assert_eq!(catalog.get("a").map(|spot| spot.name.as_str()), Some("A"));
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SpotCatalog {
    spots: Vec<Spot>,
}

impl SpotCatalog {
    /// Wrap an ordered list of spots.
    #[must_use]
    pub fn new(spots: Vec<Spot>) -> Self {
        report_suspicious(&spots);
        Self { spots }
    }

    /// All spots in catalog order.
    #[must_use]
    pub fn spots(&self) -> &[Spot] {
        &self.spots
    }

    /// Number of spots in the catalog.
    #[must_use]
    pub fn len(&self) -> usize {
        self.spots.len()
    }

    /// Report whether the catalog holds no spots.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.spots.is_empty()
    }

    /// Look up a spot by identifier. The first match wins.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Spot> {
        self.spots.iter().find(|spot| spot.id == id)
    }

    /// Iterate over the spots of one mode with their catalog index.
    pub fn in_mode(&self, mode: Mode) -> impl Iterator<Item = (usize, &Spot)> + '_ {
        self.spots
            .iter()
            .enumerate()
            .filter(move |(_, spot)| spot.mode == mode)
    }

    /// Consume the catalog and return the underlying spots.
    #[must_use]
    pub fn into_inner(self) -> Vec<Spot> {
        self.spots
    }
}

impl FromIterator<Spot> for SpotCatalog {
    fn from_iter<I: IntoIterator<Item = Spot>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

fn report_suspicious(spots: &[Spot]) {
    let mut seen = HashSet::new();
    for spot in spots {
        if !seen.insert(spot.id.as_str()) {
            warn!(
                "duplicate spot id {}; lookups resolve to the first entry",
                spot.id
            );
        }
        if spot.distance_km.is_sign_negative() || !spot.distance_km.is_finite() {
            warn!(
                "spot {} has distance {} km; scores for it may leave 0.0..=1.0",
                spot.id, spot.distance_km
            );
        }
        if let Some(base) = spot.base_score
            && !(0.0..=1.0).contains(&base)
        {
            warn!(
                "spot {} has base score {base} outside 0.0..=1.0",
                spot.id
            );
        }
    }
}

#[cfg(feature = "serde")]
pub use self::json::CatalogError;

#[cfg(feature = "serde")]
pub(crate) use self::json::SpotRecord;

#[cfg(feature = "serde")]
mod json {
    use std::io::Read;

    use geo::Coord;
    use log::warn;
    use serde::{Deserialize, Serialize};
    use thiserror::Error;

    use super::SpotCatalog;
    use crate::{Conditions, Mode, Spot};

    /// Errors raised while decoding a catalog document.
    #[derive(Debug, Error)]
    pub enum CatalogError {
        /// The document was not valid catalog JSON.
        #[error("failed to parse spot catalog: {source}")]
        Parse {
            /// Source error from `serde_json`.
            #[source]
            source: serde_json::Error,
        },
    }

    /// Flat wire representation of a [`Spot`].
    #[derive(Debug, Clone, Serialize, Deserialize)]
    pub(crate) struct SpotRecord {
        id: String,
        #[serde(default)]
        name: Option<String>,
        lat: f64,
        lon: f64,
        mode: Mode,
        distance_km: f64,
        #[serde(default)]
        access: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        base_score: Option<f64>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        mock_wind_kph: Option<f64>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        mock_temp_c: Option<f64>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        mock_wave_m: Option<f64>,
    }

    impl From<SpotRecord> for Spot {
        fn from(record: SpotRecord) -> Self {
            Self {
                name: record.name.unwrap_or_else(|| record.id.clone()),
                id: record.id,
                location: Coord {
                    x: record.lon,
                    y: record.lat,
                },
                mode: record.mode,
                distance_km: record.distance_km,
                access: record.access,
                base_score: record.base_score,
                conditions: Conditions {
                    wind_kph: record.mock_wind_kph,
                    water_temp_c: record.mock_temp_c,
                    wave_height_m: record.mock_wave_m,
                },
            }
        }
    }

    impl From<Spot> for SpotRecord {
        fn from(spot: Spot) -> Self {
            Self {
                id: spot.id,
                name: Some(spot.name),
                lat: spot.location.y,
                lon: spot.location.x,
                mode: spot.mode,
                distance_km: spot.distance_km,
                access: spot.access,
                base_score: spot.base_score,
                mock_wind_kph: spot.conditions.wind_kph,
                mock_temp_c: spot.conditions.water_temp_c,
                mock_wave_m: spot.conditions.wave_height_m,
            }
        }
    }

    #[derive(Deserialize)]
    struct CatalogDocument {
        #[serde(default)]
        spots: Option<Vec<serde_json::Value>>,
    }

    impl CatalogDocument {
        fn into_catalog(self) -> SpotCatalog {
            let spots = self
                .spots
                .unwrap_or_default()
                .into_iter()
                .enumerate()
                .filter_map(|(position, value)| {
                    match serde_json::from_value::<SpotRecord>(value) {
                        Ok(record) => Some(Spot::from(record)),
                        Err(err) => {
                            warn!("skipping catalog record {position}: {err}");
                            None
                        }
                    }
                })
                .collect();
            SpotCatalog::new(spots)
        }
    }

    impl SpotCatalog {
        /// Decode a catalog from a JSON string.
        ///
        /// A document without a `spots` array, or with `"spots": null`, yields
        /// an empty catalog. Records that cannot be decoded into a [`Spot`]
        /// are skipped with a warning; the remaining records keep their
        /// relative order. A record without a `name` is labelled with its id.
        ///
        /// # Errors
        /// Returns [`CatalogError::Parse`] when the document is not valid
        /// JSON or its `spots` member is not an array.
        ///
        /// # Examples
        /// ```
        /// use prediction_core::SpotCatalog;
        ///
        /// # fn main() -> Result<(), prediction_core::CatalogError> {
        /// let catalog = SpotCatalog::from_json_str(
        ///     r#"{"spots":[{"id":"a","name":"A","lat":0,"lon":0,"mode":"boat","distance_km":3,"access":"ramp"}]}"#,
        /// )?;
        /// assert_eq!(catalog.len(), 1);
        /// # Ok(())
        /// # }
        /// ```
        pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
            let document: CatalogDocument =
                serde_json::from_str(json).map_err(|source| CatalogError::Parse { source })?;
            Ok(document.into_catalog())
        }

        /// Decode a catalog from a JSON reader.
        ///
        /// Records are handled as in [`SpotCatalog::from_json_str`].
        ///
        /// # Errors
        /// Returns [`CatalogError::Parse`] when the stream cannot be read or
        /// is not valid JSON.
        pub fn from_reader<R: Read>(reader: R) -> Result<Self, CatalogError> {
            let document: CatalogDocument = serde_json::from_reader(reader)
                .map_err(|source| CatalogError::Parse { source })?;
            Ok(document.into_catalog())
        }
    }

}
