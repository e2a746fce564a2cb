//! Error types for the round pipeline.

use thiserror::Error;

use crate::coord::Coordinate;

/// Terminal failures of the sampler/resolver pipeline.
///
/// Both variants are round-level failures the player recovers from by
/// requesting a new round; they are kept distinct because they are
/// independently retryable ("no imagery anywhere we looked" versus
/// "imagery found, but no country under it").
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RoundError {
    /// The sampler used its full attempt budget without the imagery
    /// provider confirming a panorama.
    #[error("No panorama found after {attempts} attempts. Please try another round.")]
    ImageryExhausted { attempts: u32 },

    /// The geocoder returned no country for a confirmed coordinate.
    #[error("Could not identify a country at {coordinate}. Please try another round.")]
    GeocodeMiss { coordinate: Coordinate },
}
