//! Activity modes partitioning the spot catalog.
//!
//! The enum offers compile-time safety for catalog filtering.
//!
//! # Examples
//! ```
//! use prediction_core::Mode;
//!
//! assert_eq!(Mode::Boat.as_str(), "boat");
//! assert_eq!(Mode::Land.to_string(), "land");
//! ```

use thiserror::Error;

/// The activity a spot is suited to.
///
/// Serialises as lowercase. Deserialisation goes through [`FromStr`], so
/// catalog records and configuration layers accept any case.
///
/// [`FromStr`]: std::str::FromStr
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(rename_all = "lowercase", try_from = "String")
)]
pub enum Mode {
    /// Shore-based fishing from rocks, beaches, and jetties.
    #[default]
    Land,
    /// Fishing from a boat launched at a ramp or marina.
    Boat,
}

/// Error returned when a string does not name a [`Mode`].
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown mode '{input}' (expected 'land' or 'boat')")]
pub struct ParseModeError {
    /// The rejected input.
    pub input: String,
}

impl Mode {
    /// Return the mode as a lowercase `&str`.
    ///
    /// # Examples
    /// ```
    /// use prediction_core::Mode;
    ///
    /// assert_eq!(Mode::Land.as_str(), "land");
    /// ```
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Land => "land",
            Self::Boat => "boat",
        }
    }

    /// Return the capitalised label shown next to a spot's details.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Land => "Land",
            Self::Boat => "Boat",
        }
    }
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Mode {
    type Err = ParseModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "land" => Ok(Self::Land),
            "boat" => Ok(Self::Boat),
            _ => Err(ParseModeError {
                input: s.to_owned(),
            }),
        }
    }
}

impl TryFrom<String> for Mode {
    type Error = ParseModeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}
