//! Random coordinate sampling against the imagery provider.

use rand::Rng;
use tracing::{debug, warn};

use crate::config::SamplerSettings;
use crate::coord::{Coordinate, MAX_LAT, MAX_LON, MIN_LAT, MIN_LON};
use crate::provider::PanoramaLocator;

use super::error::RoundError;

/// Draws random coordinates until the imagery provider confirms a
/// panorama, up to a fixed attempt budget.
///
/// Draws are uniform over the full sphere's coordinate ranges, with no
/// landmass bias; polar and ocean draws are expected and handled purely
/// by retrying. Each attempt is an independent draw, nothing is cached
/// between attempts, and the first confirmation wins.
pub struct RoundSampler<L> {
    locator: L,
    settings: SamplerSettings,
}

impl<L: PanoramaLocator> RoundSampler<L> {
    /// Creates a sampler over the given locator.
    pub fn new(locator: L, settings: SamplerSettings) -> Self {
        Self { locator, settings }
    }

    /// Samples until the provider confirms a panorama or the attempt
    /// budget runs out.
    ///
    /// Provider errors count as failed attempts exactly like "no
    /// imagery here" responses; the budget is the only retry policy.
    ///
    /// # Returns
    ///
    /// The snapped coordinate the provider has coverage for, or
    /// [`RoundError::ImageryExhausted`] after `max_attempts` failures.
    pub async fn sample<R: Rng + Send>(&self, rng: &mut R) -> Result<Coordinate, RoundError> {
        for attempt in 1..=self.settings.max_attempts {
            let draw = random_coordinate(rng);

            match self
                .locator
                .locate(draw, self.settings.search_radius_m)
                .await
            {
                Ok(Some(snapped)) => {
                    debug!(attempt, %draw, %snapped, "Panorama confirmed");
                    return Ok(snapped);
                }
                Ok(None) => {
                    debug!(attempt, %draw, "No imagery within radius");
                }
                Err(e) => {
                    // Same as a miss for retry accounting
                    warn!(attempt, %draw, error = %e, "Imagery check failed");
                }
            }
        }

        Err(RoundError::ImageryExhausted {
            attempts: self.settings.max_attempts,
        })
    }
}

/// Draws a coordinate uniformly from the full latitude/longitude
/// ranges.
fn random_coordinate<R: Rng>(rng: &mut R) -> Coordinate {
    Coordinate {
        lat: rng.gen_range(MIN_LAT..=MAX_LAT),
        lon: rng.gen_range(MIN_LON..=MAX_LON),
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicU32, Ordering};

    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;
    use crate::provider::ProviderError;

    /// Locator that confirms every query with a fixed snapped point.
    struct AlwaysConfirm {
        snapped: Coordinate,
        calls: AtomicU32,
    }

    impl PanoramaLocator for AlwaysConfirm {
        async fn locate(
            &self,
            _coordinate: Coordinate,
            _radius_m: u32,
        ) -> Result<Option<Coordinate>, ProviderError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(Some(self.snapped))
        }
    }

    /// Locator that never confirms, alternating miss and error replies.
    struct NeverConfirm {
        calls: AtomicU32,
    }

    impl PanoramaLocator for NeverConfirm {
        async fn locate(
            &self,
            _coordinate: Coordinate,
            _radius_m: u32,
        ) -> Result<Option<Coordinate>, ProviderError> {
            let call = self.calls.fetch_add(1, Ordering::SeqCst);
            if call % 2 == 0 {
                Ok(None)
            } else {
                Err(ProviderError::Http("connection reset".to_string()))
            }
        }
    }

    fn settings(max_attempts: u32) -> SamplerSettings {
        SamplerSettings {
            max_attempts,
            search_radius_m: 50_000,
        }
    }

    #[tokio::test]
    async fn test_first_confirmation_wins() {
        let snapped = Coordinate::new(40.748817, -73.985428).unwrap();
        let sampler = RoundSampler::new(
            AlwaysConfirm {
                snapped,
                calls: AtomicU32::new(0),
            },
            settings(10),
        );

        let mut rng = StdRng::seed_from_u64(7);
        let result = sampler.sample(&mut rng).await.unwrap();
        assert_eq!(result, snapped, "Sampler must return the snapped point");
        assert_eq!(
            sampler.locator.calls.load(Ordering::SeqCst),
            1,
            "A confirming locator must be queried exactly once"
        );
    }

    #[tokio::test]
    async fn test_budget_is_exact_and_errors_count_as_misses() {
        let sampler = RoundSampler::new(
            NeverConfirm {
                calls: AtomicU32::new(0),
            },
            settings(10),
        );

        let mut rng = StdRng::seed_from_u64(7);
        let result = sampler.sample(&mut rng).await;
        assert_eq!(
            result.unwrap_err(),
            RoundError::ImageryExhausted { attempts: 10 }
        );
        assert_eq!(
            sampler.locator.calls.load(Ordering::SeqCst),
            10,
            "Sampler must make exactly max_attempts provider calls"
        );
    }

    #[tokio::test]
    async fn test_zero_budget_fails_without_provider_call() {
        let sampler = RoundSampler::new(
            NeverConfirm {
                calls: AtomicU32::new(0),
            },
            settings(0),
        );

        let mut rng = StdRng::seed_from_u64(7);
        let result = sampler.sample(&mut rng).await;
        assert!(matches!(
            result.unwrap_err(),
            RoundError::ImageryExhausted { attempts: 0 }
        ));
        assert_eq!(sampler.locator.calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_random_coordinate_stays_in_range() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..1000 {
            let coord = random_coordinate(&mut rng);
            assert!((MIN_LAT..=MAX_LAT).contains(&coord.lat));
            assert!((MIN_LON..=MAX_LON).contains(&coord.lon));
        }
    }
}
