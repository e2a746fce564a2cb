//! Guess evaluation against a completed round.

use std::sync::Arc;

use tracing::debug;

use crate::coord::great_circle_km;
use crate::registry::{normalize, CountryRegistry};
use crate::round::Round;

use super::types::{DistanceTier, Outcome, Verdict};

/// Scores free-text guesses against a round's ground-truth country.
///
/// Stateless apart from the shared registry; evaluation never mutates
/// the round and a round may be scored any number of times.
pub struct GuessEvaluator {
    registry: Arc<CountryRegistry>,
}

impl GuessEvaluator {
    /// Creates an evaluator over the given registry.
    pub fn new(registry: Arc<CountryRegistry>) -> Self {
        Self { registry }
    }

    /// Evaluates a raw guess against a completed round.
    ///
    /// Guess and ground truth are both trimmed and lower-cased before
    /// comparison. An exact match is `Correct`; a guess outside the
    /// registry is `InvalidCountry`; otherwise the capital-to-capital
    /// great-circle distance drives a tiered `ValidButWrong` message,
    /// falling back to `Indeterminate` when the ground-truth country
    /// has no registry entry.
    pub fn evaluate(&self, round: &Round, raw_guess: &str) -> Outcome {
        let guess = normalize(raw_guess);
        let country = round.country();

        if guess == normalize(country) {
            return Outcome {
                verdict: Verdict::Correct,
                distance_km: None,
                message: format!(
                    "🎉 Congratulations! You guessed correctly. The country is {country}."
                ),
            };
        }

        let Some(guessed) = self.registry.lookup(&guess) else {
            return Outcome {
                verdict: Verdict::InvalidCountry,
                distance_km: None,
                message: format!(
                    "❌ Your guess \"{}\" is incorrect. This is a photo from {country}.",
                    raw_guess.trim()
                ),
            };
        };

        let Some(actual) = self.registry.lookup(country) else {
            debug!(country, "Ground-truth country missing from registry");
            return Outcome {
                verdict: Verdict::Indeterminate,
                distance_km: None,
                message: format!(
                    "❓ Could not calculate the distance, but \"{}\" is not the answer. \
                     This is a photo from {country}.",
                    raw_guess.trim()
                ),
            };
        };

        // Tier on the rounded value so the displayed distance and the
        // message tone never disagree at a boundary
        let distance_km = great_circle_km(guessed.capital, actual.capital).round() as u32;
        let message = match DistanceTier::for_km(distance_km) {
            DistanceTier::NearMiss => format!(
                "✨ Wow, almost! Your guess is only {distance_km} km away from {country} 😮."
            ),
            DistanceTier::Moderate => {
                format!("Not too far! Your guess is {distance_km} km away from {country}. 🗺️")
            }
            DistanceTier::Far => format!(
                "Your guess is {distance_km} km away from the actual location in {country}. 😔"
            ),
        };

        Outcome {
            verdict: Verdict::ValidButWrong,
            distance_km: Some(distance_km),
            message,
        }
    }
}
