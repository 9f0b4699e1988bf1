use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::EstimateError;

/// A means of transportation, from a closed set.
///
/// Emission factors are the RATP public figures
/// (<https://www.ratp.fr/categorie-faq/5041>), in grams of CO2 per km,
/// attributed to the vehicle in aggregate (not per occupant).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TransportMode {
    Walk,
    Bike,
    Subway,
    RegionalRail,
    Tram,
    Bus,
    Car,
    CommuterRail,
}

impl TransportMode {
    /// Every mode, in declaration order.
    pub const ALL: [TransportMode; 8] = [
        TransportMode::Walk,
        TransportMode::Bike,
        TransportMode::Subway,
        TransportMode::RegionalRail,
        TransportMode::Tram,
        TransportMode::Bus,
        TransportMode::Car,
        TransportMode::CommuterRail,
    ];

    /// Emission level of this mode in grams of CO2 per km traveled.
    pub fn emission_factor(&self) -> f64 {
        use TransportMode::*;
        match self {
            Walk => 0.0,
            Bike => 0.0,
            Subway => 3.8,
            RegionalRail => 3.9,
            Tram => 3.1,
            Bus => 95.4,
            Car => 206.0,
            CommuterRail => 6.4,
        }
    }

    /// The canonical identifier of this mode, as used on the wire and by
    /// [`FromStr`].
    pub fn as_str(&self) -> &'static str {
        use TransportMode::*;
        match self {
            Walk => "walk",
            Bike => "bike",
            Subway => "subway",
            RegionalRail => "regional-rail",
            Tram => "tram",
            Bus => "bus",
            Car => "car",
            CommuterRail => "commuter-rail",
        }
    }
}

impl fmt::Display for TransportMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TransportMode {
    type Err = EstimateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|mode| mode.as_str() == s)
            .ok_or_else(|| EstimateError::UnrecognizedMode(s.to_string()))
    }
}
