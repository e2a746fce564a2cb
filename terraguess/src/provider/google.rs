//! Google Maps Platform providers for panorama lookup and reverse
//! geocoding.
//!
//! Both providers require a Google Maps Platform API key with the
//! Street View Static API and Geocoding API enabled.
//!
//! # API Endpoints
//!
//! - Street View metadata:
//!   `https://maps.googleapis.com/maps/api/streetview/metadata?location={lat},{lng}&radius={r}&key={KEY}`
//! - Reverse geocoding:
//!   `https://maps.googleapis.com/maps/api/geocode/json?latlng={lat},{lng}&key={KEY}`
//!
//! The metadata endpoint is free of charge and returns `status: "OK"`
//! together with the snapped panorama location when coverage exists, or
//! `status: "ZERO_RESULTS"` when it does not.

use serde::Deserialize;
use tracing::{debug, warn};

use crate::coord::Coordinate;
use crate::provider::{AsyncHttpClient, PanoramaLocator, ProviderError, ReverseGeocoder};

const STREETVIEW_METADATA_URL: &str = "https://maps.googleapis.com/maps/api/streetview/metadata";
const GEOCODE_URL: &str = "https://maps.googleapis.com/maps/api/geocode/json";

/// Street View metadata response, reduced to the fields we read.
#[derive(Debug, Deserialize)]
struct MetadataResponse {
    status: String,
    location: Option<LatLng>,
}

#[derive(Debug, Deserialize)]
struct LatLng {
    lat: f64,
    lng: f64,
}

#[derive(Debug, Deserialize)]
struct GeocodeResponse {
    status: String,
    #[serde(default)]
    results: Vec<GeocodeResult>,
}

#[derive(Debug, Deserialize)]
struct GeocodeResult {
    #[serde(default)]
    address_components: Vec<AddressComponent>,
}

#[derive(Debug, Deserialize)]
struct AddressComponent {
    long_name: String,
    types: Vec<String>,
}

/// Panorama availability checks via the Street View metadata API.
pub struct GoogleStreetViewLocator<C: AsyncHttpClient> {
    http_client: C,
    api_key: String,
}

impl<C: AsyncHttpClient> GoogleStreetViewLocator<C> {
    /// Creates a locator with the given HTTP client and API key.
    pub fn new(http_client: C, api_key: String) -> Self {
        Self {
            http_client,
            api_key,
        }
    }

    fn build_url(&self, coordinate: Coordinate, radius_m: u32) -> String {
        format!(
            "{}?location={},{}&radius={}&source=outdoor&key={}",
            STREETVIEW_METADATA_URL, coordinate.lat, coordinate.lon, radius_m, self.api_key
        )
    }
}

impl<C: AsyncHttpClient> PanoramaLocator for GoogleStreetViewLocator<C> {
    async fn locate(
        &self,
        coordinate: Coordinate,
        radius_m: u32,
    ) -> Result<Option<Coordinate>, ProviderError> {
        let url = self.build_url(coordinate, radius_m);
        let body = self.http_client.get(&url).await?;

        let metadata: MetadataResponse = serde_json::from_slice(&body)
            .map_err(|e| ProviderError::InvalidResponse(format!("Metadata parse error: {e}")))?;

        match metadata.status.as_str() {
            "OK" => {
                let location = metadata.location.ok_or_else(|| {
                    ProviderError::InvalidResponse(
                        "Metadata status OK but no location field".to_string(),
                    )
                })?;
                let snapped = Coordinate::new(location.lat, location.lng).map_err(|e| {
                    ProviderError::InvalidResponse(format!("Snapped coordinate invalid: {e}"))
                })?;
                debug!(%coordinate, %snapped, "Panorama found");
                Ok(Some(snapped))
            }
            // No coverage near this point; the sampler just redraws
            "ZERO_RESULTS" | "NOT_FOUND" => Ok(None),
            other => Err(ProviderError::ProviderSpecific(format!(
                "Street View metadata status: {other}"
            ))),
        }
    }
}

/// Country resolution via the Google Geocoding API.
pub struct GoogleReverseGeocoder<C: AsyncHttpClient> {
    http_client: C,
    api_key: String,
}

impl<C: AsyncHttpClient> GoogleReverseGeocoder<C> {
    /// Creates a geocoder with the given HTTP client and API key.
    pub fn new(http_client: C, api_key: String) -> Self {
        Self {
            http_client,
            api_key,
        }
    }

    fn build_url(&self, coordinate: Coordinate) -> String {
        format!(
            "{}?latlng={},{}&key={}",
            GEOCODE_URL, coordinate.lat, coordinate.lon, self.api_key
        )
    }
}

impl<C: AsyncHttpClient> ReverseGeocoder for GoogleReverseGeocoder<C> {
    async fn country_at(&self, coordinate: Coordinate) -> Result<Option<String>, ProviderError> {
        let url = self.build_url(coordinate);
        let body = self.http_client.get(&url).await?;

        let response: GeocodeResponse = serde_json::from_slice(&body)
            .map_err(|e| ProviderError::InvalidResponse(format!("Geocode parse error: {e}")))?;

        match response.status.as_str() {
            "OK" => {
                // The country component is usually on the first result,
                // but scan all of them in case it is not
                let country = response
                    .results
                    .iter()
                    .flat_map(|r| r.address_components.iter())
                    .find(|c| c.types.iter().any(|t| t == "country"))
                    .map(|c| c.long_name.clone());

                if country.is_none() {
                    warn!(%coordinate, "Geocode returned results but no country component");
                }
                Ok(country)
            }
            "ZERO_RESULTS" => Ok(None),
            other => Err(ProviderError::ProviderSpecific(format!(
                "Geocode status: {other}"
            ))),
        }
    }
}
