#[forbid(unsafe_code)]
pub mod compat;
mod emissions;
mod mode;

pub use emissions::*;
pub use mode::*;

/// A geographic coordinate, in degrees
#[derive(Debug, Clone, Copy, PartialEq, ::serde::Serialize, ::serde::Deserialize)]
pub struct GeoPoint {
    latitude: f64,
    longitude: f64,
}

impl GeoPoint {
    /// Returns a new point. Coordinates are taken as-is; geographic
    /// plausibility (e.g. latitude within -90..90) is the caller's concern.
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    pub fn pos(&self) -> (f64, f64) {
        (self.latitude(), self.longitude())
    }

    /// Returns the distance to another [`GeoPoint`] in km
    pub fn distance_to(&self, other: &Self) -> f64 {
        distance(self.pos(), other.pos())
    }
}

/// Returns the great-circle distance between two geo-points in km
/// (haversine, mean Earth radius of 6371 km).
///
/// Zero for identical points and symmetric in its arguments. Longitude
/// wraparound needs no special handling; the trigonometric identities
/// take care of the antimeridian.
pub fn distance(from: (f64, f64), to: (f64, f64)) -> f64 {
    let from = geoutils::Location::new(from.0, from.1);
    let to = geoutils::Location::new(to.0, to.1);
    from.haversine_distance_to(&to).meters() / 1000.0
}
