//! Round lifecycle engine.
//!
//! Owns the single authoritative "current round" slot and runs the
//! sampler → resolver pipeline for each requested round. State
//! transitions are published on a watch channel so the presentation
//! layer subscribes to one state object instead of scattered flags.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use rand::rngs::StdRng;
use rand::SeedableRng;
use tokio::sync::watch;
use tokio_util::sync::CancellationToken;
use tracing::debug;

use crate::config::SamplerSettings;
use crate::provider::{PanoramaLocator, ReverseGeocoder};

use super::model::RoundState;
use super::resolver::resolve_round;
use super::sampler::RoundSampler;

/// Drives rounds from request to `Ready`/`Failed`.
///
/// Each call to [`new_round`](Self::new_round) supersedes any in-flight
/// pipeline: the previous round's cancellation token is cancelled and a
/// generation counter is bumped, and every pipeline re-checks its
/// captured generation before publishing so a stale completion can
/// never overwrite the current round's state.
pub struct RoundEngine<L, G> {
    locator: Arc<L>,
    geocoder: Arc<G>,
    settings: SamplerSettings,
    generation: Arc<AtomicU64>,
    state_tx: Arc<watch::Sender<RoundState>>,
    current_cancel: Mutex<CancellationToken>,
}

impl<L, G> RoundEngine<L, G>
where
    L: PanoramaLocator + 'static,
    G: ReverseGeocoder + 'static,
{
    /// Creates an engine over the given providers. The state channel
    /// starts at [`RoundState::Idle`].
    pub fn new(locator: L, geocoder: G, settings: SamplerSettings) -> Self {
        let (state_tx, _) = watch::channel(RoundState::Idle);
        Self {
            locator: Arc::new(locator),
            geocoder: Arc::new(geocoder),
            settings,
            generation: Arc::new(AtomicU64::new(0)),
            state_tx: Arc::new(state_tx),
            current_cancel: Mutex::new(CancellationToken::new()),
        }
    }

    /// Subscribes to round state transitions.
    ///
    /// The receiver observes discrete transitions: `Sampling`, then
    /// `Ready` or `Failed`, for each round in turn.
    pub fn subscribe(&self) -> watch::Receiver<RoundState> {
        self.state_tx.subscribe()
    }

    /// Returns a snapshot of the current round state.
    pub fn state(&self) -> RoundState {
        self.state_tx.borrow().clone()
    }

    /// Starts a new round, superseding any round still in flight.
    ///
    /// Publishes `Sampling` immediately and spawns the sampler →
    /// resolver pipeline. Returns the new round's generation number.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn new_round(&self) -> u64 {
        // Take the generation and install the new token in one critical
        // section: interleaved calls must never leave a newer round's
        // token cancelled while its generation stands
        let (generation, cancel) = {
            let mut guard = self.current_cancel.lock().expect("cancel lock poisoned");
            let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
            let cancel = CancellationToken::new();
            let previous = std::mem::replace(&mut *guard, cancel.clone());
            previous.cancel();
            (generation, cancel)
        };

        publish_if_current(
            &self.state_tx,
            &self.generation,
            generation,
            RoundState::Sampling,
        );

        let locator = Arc::clone(&self.locator);
        let geocoder = Arc::clone(&self.geocoder);
        let settings = self.settings;
        let state_tx = Arc::clone(&self.state_tx);
        let generation_ctr = Arc::clone(&self.generation);

        tokio::spawn(async move {
            let pipeline = async {
                let sampler = RoundSampler::new(locator, settings);
                let mut rng = StdRng::from_entropy();
                let coordinate = sampler.sample(&mut rng).await?;
                resolve_round(&*geocoder, coordinate).await
            };

            let outcome = tokio::select! {
                _ = cancel.cancelled() => {
                    debug!(generation, "Round superseded while in flight");
                    return;
                }
                outcome = pipeline => outcome,
            };

            let state = match outcome {
                Ok(round) => RoundState::Ready(round),
                Err(e) => RoundState::Failed(e),
            };
            publish_if_current(&state_tx, &generation_ctr, generation, state);
        });

        generation
    }

    /// The generation number of the most recently requested round.
    pub fn generation(&self) -> u64 {
        self.generation.load(Ordering::SeqCst)
    }
}

/// Publishes a state transition only if `generation` is still the
/// current round. Returns whether the state was applied.
fn publish_if_current(
    state_tx: &watch::Sender<RoundState>,
    generation_ctr: &AtomicU64,
    generation: u64,
    state: RoundState,
) -> bool {
    if generation_ctr.load(Ordering::SeqCst) == generation {
        state_tx.send_replace(state);
        true
    } else {
        debug!(generation, "Discarding stale round state");
        false
    }
}
