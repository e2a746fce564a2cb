//! Coordinate type definitions

use std::fmt;
use thiserror::Error;

/// Valid latitude range in decimal degrees.
pub const MIN_LAT: f64 = -90.0;
pub const MAX_LAT: f64 = 90.0;

/// Valid longitude range in decimal degrees.
pub const MIN_LON: f64 = -180.0;
pub const MAX_LON: f64 = 180.0;

/// A geographic point in decimal degrees.
///
/// Plain WGS-84 latitude/longitude, no projection applied. Values built
/// through [`Coordinate::new`] are guaranteed in range; the fields stay
/// public so trusted static data (the country registry) can construct
/// coordinates directly.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinate {
    /// Latitude in degrees, -90 (south pole) to 90 (north pole)
    pub lat: f64,
    /// Longitude in degrees, -180 to 180, 0 at Greenwich
    pub lon: f64,
}

impl Coordinate {
    /// Creates a coordinate, validating both components.
    ///
    /// # Errors
    ///
    /// Returns [`CoordError`] if either component is outside its valid
    /// range or is not a finite number.
    pub fn new(lat: f64, lon: f64) -> Result<Self, CoordError> {
        if !lat.is_finite() || !(MIN_LAT..=MAX_LAT).contains(&lat) {
            return Err(CoordError::InvalidLatitude(lat));
        }
        if !lon.is_finite() || !(MIN_LON..=MAX_LON).contains(&lon) {
            return Err(CoordError::InvalidLongitude(lon));
        }
        Ok(Self { lat, lon })
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.6}, {:.6})", self.lat, self.lon)
    }
}

/// Errors that can occur constructing a coordinate.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CoordError {
    /// Latitude outside [-90, 90]
    #[error("Invalid latitude {0}: must be between -90 and 90 degrees")]
    InvalidLatitude(f64),
    /// Longitude outside [-180, 180]
    #[error("Invalid longitude {0}: must be between -180 and 180 degrees")]
    InvalidLongitude(f64),
}
