//! Provider types and traits

use std::future::Future;

use thiserror::Error;

use crate::coord::Coordinate;

/// Errors that can occur during provider operations.
///
/// The round pipeline collapses these into "no result" at the
/// sampler/resolver boundary; they exist so provider implementations
/// can log what actually went wrong.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ProviderError {
    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(String),
    /// Response could not be parsed
    #[error("Invalid response: {0}")]
    InvalidResponse(String),
    /// Provider rejected the request (bad API key, quota, etc.)
    #[error("Provider error: {0}")]
    ProviderSpecific(String),
}

/// Trait for ground-level imagery availability checks.
///
/// Implementors answer one question: is there a usable panorama within
/// `radius_m` meters of the given coordinate, and if so, where exactly?
pub trait PanoramaLocator: Send + Sync {
    /// Queries the provider for panorama coverage near a coordinate.
    ///
    /// # Arguments
    ///
    /// * `coordinate` - The point to search around
    /// * `radius_m` - Search radius in meters
    ///
    /// # Returns
    ///
    /// `Ok(Some(snapped))` with the coordinate the provider actually has
    /// coverage for, `Ok(None)` when no imagery exists within the
    /// radius, or an error for provider failures.
    fn locate(
        &self,
        coordinate: Coordinate,
        radius_m: u32,
    ) -> impl Future<Output = Result<Option<Coordinate>, ProviderError>> + Send;
}

impl<T: PanoramaLocator> PanoramaLocator for std::sync::Arc<T> {
    fn locate(
        &self,
        coordinate: Coordinate,
        radius_m: u32,
    ) -> impl Future<Output = Result<Option<Coordinate>, ProviderError>> + Send {
        (**self).locate(coordinate, radius_m)
    }
}

/// Trait for reverse geocoding a coordinate to a country name.
pub trait ReverseGeocoder: Send + Sync {
    /// Resolves the country containing a coordinate.
    ///
    /// # Returns
    ///
    /// `Ok(Some(name))` with the country's display name, `Ok(None)` when
    /// the coordinate lies in open water or an unrecognized territory,
    /// or an error for provider failures.
    fn country_at(
        &self,
        coordinate: Coordinate,
    ) -> impl Future<Output = Result<Option<String>, ProviderError>> + Send;
}

impl<T: ReverseGeocoder> ReverseGeocoder for std::sync::Arc<T> {
    fn country_at(
        &self,
        coordinate: Coordinate,
    ) -> impl Future<Output = Result<Option<String>, ProviderError>> + Send {
        (**self).country_at(coordinate)
    }
}
