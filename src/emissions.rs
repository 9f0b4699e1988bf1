use crate::{distance, GeoPoint, TransportMode};

/// Fixed average-occupancy/inefficiency correction applied to car trips only.
static CAR_OCCUPANCY_FACTOR: f64 = 1.2;

/// Why an estimate could not be produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EstimateError {
    /// the distance was zero or NaN
    InvalidDistance,
    /// the identifier is not in the [`TransportMode`] enumeration
    UnrecognizedMode(String),
    /// the start point has a zero or NaN coordinate
    InvalidStartPoint,
    /// the end point has a zero or NaN coordinate
    InvalidEndPoint,
}

impl EstimateError {
    /// The numeric code the original interface signaled this error with.
    ///
    /// Valid estimates are always `>= 0`, so the codes are distinguishable
    /// from results. Used by [`crate::compat`].
    pub fn sentinel(&self) -> f64 {
        match self {
            EstimateError::UnrecognizedMode(_) => -2.0,
            _ => -1.0,
        }
    }
}

impl std::fmt::Display for EstimateError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EstimateError::InvalidDistance => write!(f, "invalid distance"),
            EstimateError::UnrecognizedMode(mode) => {
                write!(f, "unrecognized transport mode \"{mode}\"")
            }
            EstimateError::InvalidStartPoint => write!(f, "invalid start point"),
            EstimateError::InvalidEndPoint => write!(f, "invalid end point"),
        }
    }
}

impl std::error::Error for EstimateError {}

/// Whether `value` takes the original's falsy branch. Zero and NaN do;
/// negative values do not.
pub(crate) fn is_falsy(value: f64) -> bool {
    value == 0.0 || value.is_nan()
}

/// Returns the average CO2 emission in grams for traveling `distance_km`
/// with `mode`.
///
/// A zero or NaN distance is [`EstimateError::InvalidDistance`], not a
/// 0 g estimate: a zero-length trip is treated as a request error.
pub fn emission_for_distance(
    distance_km: f64,
    mode: TransportMode,
) -> Result<f64, EstimateError> {
    use TransportMode::*;
    if is_falsy(distance_km) {
        log::warn!("invalid distance: {distance_km}");
        return Err(EstimateError::InvalidDistance);
    }
    Ok(match mode {
        Car => distance_km * CAR_OCCUPANCY_FACTOR * mode.emission_factor(),
        Subway | RegionalRail | Tram | CommuterRail | Bus => {
            distance_km * mode.emission_factor()
        }
        // zero by construction, independently of the factor table
        Walk | Bike => 0.0,
    })
}

/// Returns the average CO2 emission in grams for traveling from `start` to
/// `end` with `mode`.
///
/// A point with a zero or NaN coordinate is rejected. This keeps the
/// original contract: a point exactly on the equator or the prime meridian
/// is rejected as well, even though it is a geographically valid position.
pub fn emission_from_geo_points(
    start: &GeoPoint,
    end: &GeoPoint,
    mode: TransportMode,
) -> Result<f64, EstimateError> {
    if is_falsy(start.latitude()) || is_falsy(start.longitude()) {
        log::warn!("invalid start point: {start:?}");
        return Err(EstimateError::InvalidStartPoint);
    }
    if is_falsy(end.latitude()) || is_falsy(end.longitude()) {
        log::warn!("invalid end point: {end:?}");
        return Err(EstimateError::InvalidEndPoint);
    }
    emission_for_distance(distance(start.pos(), end.pos()), mode)
}
