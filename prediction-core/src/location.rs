use geo::Coord;

/// The reference point spots are measured from.
///
/// Produced by an external location provider (device geolocation or a
/// place search). Coordinates are WGS84 with `x = longitude` and
/// `y = latitude`.
///
/// # Examples
/// ```
/// use prediction_core::UserLocation;
///
/// let sydney = UserLocation::new(-33.8688, 151.2093);
/// assert_eq!(sydney.latitude(), -33.8688);
/// assert_eq!(sydney.longitude(), 151.2093);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UserLocation {
    coord: Coord<f64>,
}

impl UserLocation {
    /// Construct a location from latitude and longitude in degrees.
    #[must_use]
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            coord: Coord {
                x: longitude,
                y: latitude,
            },
        }
    }

    /// Latitude in degrees.
    #[must_use]
    pub const fn latitude(&self) -> f64 {
        self.coord.y
    }

    /// Longitude in degrees.
    #[must_use]
    pub const fn longitude(&self) -> f64 {
        self.coord.x
    }

    /// The underlying coordinate.
    #[must_use]
    pub const fn coord(&self) -> Coord<f64> {
        self.coord
    }
}

impl From<Coord<f64>> for UserLocation {
    fn from(coord: Coord<f64>) -> Self {
        Self { coord }
    }
}
