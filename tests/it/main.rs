use commute::{distance, GeoPoint, TransportMode};

fn abs_difference<T: std::ops::Sub<Output = T> + PartialOrd>(x: T, y: T) -> T {
    if x < y {
        y - x
    } else {
        x - y
    }
}

/// Verifies the great-circle distance against a well-known city pair.
/// Paris -> Lyon is ~391.6 km; 1 km of tolerance absorbs the choice of
/// mean Earth radius.
#[test]
fn acceptance_distance_paris_lyon() {
    let paris = GeoPoint::new(48.8566, 2.3522);
    let lyon = GeoPoint::new(45.764, 4.8357);

    assert!(abs_difference(paris.distance_to(&lyon), 391.6) < 1.0);
}

/// Verifies the per-mode emission estimates against the published factors:
/// plain `distance * factor` for transit, a 1.2 occupancy correction for
/// cars, exactly zero for human-powered modes.
#[test]
fn acceptance_test_emissions() {
    let grams = commute::emission_for_distance(391.6, TransportMode::Bus).unwrap();
    assert!(abs_difference(grams, 37358.64) < 1e-9);

    let grams = commute::emission_for_distance(100.0, TransportMode::Car).unwrap();
    assert!(abs_difference(grams, 100.0 * 1.2 * 206.0) < 1e-9);

    for mode in [TransportMode::Walk, TransportMode::Bike] {
        assert_eq!(commute::emission_for_distance(100.0, mode).unwrap(), 0.0);
    }
}

/// The geo-point estimator is exactly the distance estimator composed with
/// the distance computation; no rounding happens in between.
#[test]
fn geo_point_estimate_composes() {
    let start = GeoPoint::new(48.0, 2.0);
    let end = GeoPoint::new(45.0, 4.0);

    let via_points = commute::emission_from_geo_points(&start, &end, TransportMode::Car);
    let via_distance =
        commute::emission_for_distance(distance(start.pos(), end.pos()), TransportMode::Car);
    assert_eq!(via_points, via_distance);

    // and the compat surface agrees with the typed one
    assert_eq!(
        commute::compat::emission_from_geo_points(Some(start), Some(end), "car"),
        via_points.unwrap()
    );
}

/// Every mode identifier exported by the crate is accepted by the compat
/// surface, and produces either a non-negative estimate or nothing at all.
#[test]
fn every_identifier_is_estimable() {
    for mode in TransportMode::ALL {
        let grams = commute::compat::emission_for_distance(10.0, mode.as_str());
        assert!(grams >= 0.0, "{mode}: {grams}");
    }
}

/// The legacy error codes: -1.0 for an invalid distance or point, -2.0 for
/// an unrecognized mode identifier.
#[test]
fn legacy_error_codes() {
    assert_eq!(commute::compat::emission_for_distance(0.0, "bus"), -1.0);
    assert_eq!(commute::compat::emission_for_distance(5.0, "unknown-mode"), -2.0);

    // latitude 0 is rejected as if the coordinate were missing; this is a
    // quirk of the original contract, kept for parity
    let on_equator = GeoPoint::new(0.0, 2.0);
    let inland = GeoPoint::new(1.0, 2.0);
    assert_eq!(
        commute::compat::emission_from_geo_points(Some(on_equator), Some(inland), "bus"),
        -1.0
    );
    assert_eq!(
        commute::compat::emission_from_geo_points(None, Some(inland), "bus"),
        -1.0
    );
}
