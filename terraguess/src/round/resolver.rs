//! Ground-truth resolution for a confirmed coordinate.

use tracing::{debug, warn};

use crate::coord::Coordinate;
use crate::provider::ReverseGeocoder;

use super::error::RoundError;
use super::model::Round;

/// Resolves a sampler-confirmed coordinate into a playable [`Round`] by
/// reverse geocoding its country.
///
/// The resolver makes exactly one geocode call and never re-samples: a
/// coordinate with no country is surfaced as
/// [`RoundError::GeocodeMiss`] so the caller can decide whether to
/// start over with a fresh coordinate. Provider errors are treated the
/// same as "no country found".
pub async fn resolve_round<G: ReverseGeocoder>(
    geocoder: &G,
    coordinate: Coordinate,
) -> Result<Round, RoundError> {
    match geocoder.country_at(coordinate).await {
        Ok(Some(country)) => {
            debug!(%coordinate, country, "Round resolved");
            Ok(Round::new(coordinate, country))
        }
        Ok(None) => Err(RoundError::GeocodeMiss { coordinate }),
        Err(e) => {
            warn!(%coordinate, error = %e, "Reverse geocode failed");
            Err(RoundError::GeocodeMiss { coordinate })
        }
    }
}
