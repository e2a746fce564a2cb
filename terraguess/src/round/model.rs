//! Round data model and lifecycle state machine.

use crate::coord::Coordinate;

use super::error::RoundError;

/// A completed, playable round: an imagery-confirmed coordinate and the
/// country containing it.
///
/// A `Round` only exists once both the sampler and the resolver have
/// succeeded, so holding one is proof the round is ready to score —
/// there is no separate status flag to check.
#[derive(Debug, Clone, PartialEq)]
pub struct Round {
    coordinate: Coordinate,
    country: String,
}

impl Round {
    /// Assembles a round from a snapped coordinate and its ground-truth
    /// country.
    pub fn new(coordinate: Coordinate, country: String) -> Self {
        Self {
            coordinate,
            country,
        }
    }

    /// The snapped, imagery-confirmed location of this round.
    pub fn coordinate(&self) -> Coordinate {
        self.coordinate
    }

    /// The ground-truth country name, as returned by reverse geocoding.
    pub fn country(&self) -> &str {
        &self.country
    }
}

/// Lifecycle of the single current round.
///
/// The engine publishes these as discrete transitions on a watch
/// channel: `Idle` before the first round, then `Sampling` and finally
/// either `Ready` or `Failed` for each round. Requesting a new round
/// replaces the state wholesale; there are no partial updates.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum RoundState {
    /// No round requested yet
    #[default]
    Idle,
    /// Sampler/resolver pipeline in flight
    Sampling,
    /// Round is playable and awaiting a guess
    Ready(Round),
    /// Pipeline failed; the player may request a new round
    Failed(RoundError),
}

impl RoundState {
    /// Returns the round when the state is `Ready`.
    pub fn round(&self) -> Option<&Round> {
        match self {
            RoundState::Ready(round) => Some(round),
            _ => None,
        }
    }

    /// True while the pipeline is still working.
    pub fn is_sampling(&self) -> bool {
        matches!(self, RoundState::Sampling)
    }
}
