//! External provider abstractions
//!
//! The round engine talks to two external capabilities: an imagery
//! availability check ([`PanoramaLocator`]) and a reverse geocoder
//! ([`ReverseGeocoder`]). Both are traits so tests can substitute
//! deterministic fakes; the Google Maps Platform implementations are
//! [`GoogleStreetViewLocator`] and [`GoogleReverseGeocoder`].

mod google;
mod http;
mod types;

pub use google::{GoogleReverseGeocoder, GoogleStreetViewLocator};
pub use http::{AsyncHttpClient, AsyncReqwestClient};
pub use types::{PanoramaLocator, ProviderError, ReverseGeocoder};

#[cfg(test)]
pub use http::tests::MockAsyncHttpClient;
