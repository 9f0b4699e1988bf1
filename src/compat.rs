//! The original numeric call contract: failures are signaled as negative
//! return codes instead of [`Result`]s, and modes arrive as strings so
//! that identifiers outside the enumeration are expressible.
//!
//! Valid estimates are always `>= 0`; callers must check for a negative
//! value before using the result. `-1.0` is an invalid distance or point,
//! `-2.0` an unrecognized mode.

use crate::emissions::is_falsy;
use crate::{EstimateError, GeoPoint, TransportMode};

/// Returns the average CO2 emission in grams for traveling `distance_km`
/// with the mode named `mode`, or a negative code on failure.
pub fn emission_for_distance(distance_km: f64, mode: &str) -> f64 {
    // the distance guard fires before the mode is looked at, so a zero
    // distance with an unknown mode yields -1.0, not -2.0
    if is_falsy(distance_km) {
        log::warn!("invalid distance: {distance_km}");
        return EstimateError::InvalidDistance.sentinel();
    }
    match mode.parse::<TransportMode>() {
        Ok(mode) => match crate::emission_for_distance(distance_km, mode) {
            Ok(grams) => grams,
            Err(err) => err.sentinel(),
        },
        Err(err) => {
            log::warn!("{err}");
            err.sentinel()
        }
    }
}

/// Returns the average CO2 emission in grams for traveling from `start` to
/// `end` with the mode named `mode`, or a negative code on failure.
///
/// A missing point and a point with a zero or NaN coordinate are both
/// `-1.0`, exactly as in the original contract.
pub fn emission_from_geo_points(
    start: Option<GeoPoint>,
    end: Option<GeoPoint>,
    mode: &str,
) -> f64 {
    let Some(start) = start else {
        log::warn!("missing start point");
        return EstimateError::InvalidStartPoint.sentinel();
    };
    if is_falsy(start.latitude()) || is_falsy(start.longitude()) {
        log::warn!("invalid start point: {start:?}");
        return EstimateError::InvalidStartPoint.sentinel();
    }
    let Some(end) = end else {
        log::warn!("missing end point");
        return EstimateError::InvalidEndPoint.sentinel();
    };
    if is_falsy(end.latitude()) || is_falsy(end.longitude()) {
        log::warn!("invalid end point: {end:?}");
        return EstimateError::InvalidEndPoint.sentinel();
    }
    emission_for_distance(crate::distance(start.pos(), end.pos()), mode)
}
