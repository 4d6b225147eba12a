//! Test-only builders and scorers used by unit and behaviour tests.

use geo::Coord;

use crate::{Conditions, Mode, Scorer, ScoringContext, Spot};

/// Fluent builder for [`Spot`] fixtures.
///
/// Unset fields default to a land spot at the origin, one kilometre away,
/// with no quality prior and no recorded conditions.
#[derive(Debug, Clone)]
pub struct SpotBuilder {
    spot: Spot,
}

impl SpotBuilder {
    /// Start a spot whose name equals its identifier.
    pub fn new(id: &str) -> Self {
        Self {
            spot: Spot::new(id, id, Coord { x: 0.0, y: 0.0 }, Mode::Land, 1.0, "shore"),
        }
    }

    /// Set the mode.
    pub fn mode(mut self, mode: Mode) -> Self {
        self.spot.mode = mode;
        self
    }

    /// Set the distance from the reference location.
    pub fn distance_km(mut self, distance_km: f64) -> Self {
        self.spot.distance_km = distance_km;
        self
    }

    /// Set the quality prior.
    pub fn base_score(mut self, base_score: f64) -> Self {
        self.spot.base_score = Some(base_score);
        self
    }

    /// Set the wind speed.
    pub fn wind_kph(mut self, wind_kph: f64) -> Self {
        self.spot.conditions.wind_kph = Some(wind_kph);
        self
    }

    /// Set the water temperature.
    pub fn water_temp_c(mut self, water_temp_c: f64) -> Self {
        self.spot.conditions.water_temp_c = Some(water_temp_c);
        self
    }

    /// Set the wave height.
    pub fn wave_height_m(mut self, wave_height_m: f64) -> Self {
        self.spot.conditions.wave_height_m = Some(wave_height_m);
        self
    }

    /// Replace all recorded conditions.
    pub fn conditions(mut self, conditions: Conditions) -> Self {
        self.spot.conditions = conditions;
        self
    }

    /// Finish the spot.
    pub fn build(self) -> Spot {
        self.spot
    }
}

/// Test `Scorer` returning each spot's quality prior unchanged.
#[derive(Debug, Copy, Clone, Default)]
pub struct PriorScorer;

impl Scorer for PriorScorer {
    fn score(&self, spot: &Spot, _context: &ScoringContext) -> f64 {
        spot.base_score()
    }
}
