//! Tests for coordinate construction and great-circle distance

use super::*;

#[test]
fn test_new_accepts_valid_coordinates() {
    let coord = Coordinate::new(40.7128, -74.0060);
    assert!(coord.is_ok(), "Valid coordinates should not error");

    let coord = coord.unwrap();
    assert_eq!(coord.lat, 40.7128);
    assert_eq!(coord.lon, -74.0060);
}

#[test]
fn test_new_accepts_range_endpoints() {
    assert!(Coordinate::new(90.0, 180.0).is_ok());
    assert!(Coordinate::new(-90.0, -180.0).is_ok());
    assert!(Coordinate::new(0.0, 0.0).is_ok());
}

#[test]
fn test_new_rejects_latitude_out_of_range() {
    let result = Coordinate::new(90.1, 0.0);
    assert!(matches!(
        result.unwrap_err(),
        CoordError::InvalidLatitude(_)
    ));

    let result = Coordinate::new(-91.0, 0.0);
    assert!(matches!(
        result.unwrap_err(),
        CoordError::InvalidLatitude(_)
    ));
}

#[test]
fn test_new_rejects_longitude_out_of_range() {
    let result = Coordinate::new(0.0, 180.5);
    assert!(matches!(
        result.unwrap_err(),
        CoordError::InvalidLongitude(_)
    ));
}

#[test]
fn test_new_rejects_non_finite_values() {
    assert!(Coordinate::new(f64::NAN, 0.0).is_err());
    assert!(Coordinate::new(0.0, f64::INFINITY).is_err());
}

#[test]
fn test_distance_identical_points_is_zero() {
    let tehran = Coordinate::new(35.6892, 51.3890).unwrap();
    assert_eq!(great_circle_km(tehran, tehran), 0.0);
}

#[test]
fn test_distance_is_symmetric() {
    let tokyo = Coordinate::new(35.68, 139.69).unwrap();
    let seoul = Coordinate::new(37.57, 126.98).unwrap();

    let forward = great_circle_km(tokyo, seoul);
    let backward = great_circle_km(seoul, tokyo);
    assert_eq!(forward, backward, "Haversine must be symmetric");
}

#[test]
fn test_distance_tokyo_to_seoul() {
    // Tokyo to Seoul is roughly 1160 km
    let tokyo = Coordinate::new(35.68, 139.69).unwrap();
    let seoul = Coordinate::new(37.57, 126.98).unwrap();

    let distance = great_circle_km(tokyo, seoul);
    assert!(
        (1130.0..1190.0).contains(&distance),
        "Expected ~1160 km, got {distance}"
    );
}

#[test]
fn test_distance_brussels_to_amsterdam() {
    // Brussels to Amsterdam is well under 500 km
    let brussels = Coordinate::new(50.85, 4.35).unwrap();
    let amsterdam = Coordinate::new(52.37, 4.90).unwrap();

    let distance = great_circle_km(brussels, amsterdam);
    assert!(
        (150.0..200.0).contains(&distance),
        "Expected ~173 km, got {distance}"
    );
}

#[test]
fn test_distance_antipodal_points() {
    // Half the Earth's circumference, a hair over 20000 km
    let a = Coordinate::new(0.0, 0.0).unwrap();
    let b = Coordinate::new(0.0, 180.0).unwrap();

    let distance = great_circle_km(a, b);
    assert!(
        (20010.0..20020.0).contains(&distance),
        "Expected ~20015 km, got {distance}"
    );
}

#[test]
fn test_distance_is_never_negative() {
    let a = Coordinate::new(-90.0, -180.0).unwrap();
    let b = Coordinate::new(90.0, 180.0).unwrap();
    assert!(great_circle_km(a, b) >= 0.0);
}
