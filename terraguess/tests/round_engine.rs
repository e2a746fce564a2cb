//! Integration tests for the round pipeline: sampler budget, resolver
//! failure classes, and supersession of in-flight rounds.

use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use tokio::time::timeout;

use terraguess::config::SamplerSettings;
use terraguess::coord::Coordinate;
use terraguess::provider::{PanoramaLocator, ProviderError, ReverseGeocoder};
use terraguess::round::{resolve_round, RoundEngine, RoundError, RoundSampler, RoundState};

const WAIT: Duration = Duration::from_secs(5);

fn settings(max_attempts: u32) -> SamplerSettings {
    SamplerSettings {
        max_attempts,
        search_radius_m: 50_000,
    }
}

fn snapped_point() -> Coordinate {
    Coordinate::new(48.858, 2.294).unwrap()
}

/// Locator with a scriptable confirmation and an optional gate that
/// holds every call until the gate channel reads `true`.
struct ScriptedLocator {
    confirm: bool,
    calls: Arc<AtomicU32>,
    gate: Option<watch::Receiver<bool>>,
}

impl PanoramaLocator for ScriptedLocator {
    async fn locate(
        &self,
        _coordinate: Coordinate,
        _radius_m: u32,
    ) -> Result<Option<Coordinate>, ProviderError> {
        if let Some(gate) = &self.gate {
            let mut gate = gate.clone();
            gate.wait_for(|open| *open).await.expect("gate dropped");
        }
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.confirm.then(snapped_point))
    }
}

struct FixedGeocoder {
    country: Option<&'static str>,
}

impl ReverseGeocoder for FixedGeocoder {
    async fn country_at(&self, _coordinate: Coordinate) -> Result<Option<String>, ProviderError> {
        Ok(self.country.map(str::to_string))
    }
}

/// Waits until the watch channel reaches a terminal round state.
async fn wait_for_settled(rx: &mut watch::Receiver<RoundState>) -> RoundState {
    timeout(WAIT, async {
        loop {
            {
                let state = rx.borrow_and_update().clone();
                match state {
                    RoundState::Ready(_) | RoundState::Failed(_) => return state,
                    _ => {}
                }
            }
            rx.changed().await.expect("engine dropped");
        }
    })
    .await
    .expect("round did not settle in time")
}

#[tokio::test]
async fn test_round_reaches_ready_through_full_pipeline() {
    let calls = Arc::new(AtomicU32::new(0));
    let engine = RoundEngine::new(
        ScriptedLocator {
            confirm: true,
            calls: Arc::clone(&calls),
            gate: None,
        },
        FixedGeocoder {
            country: Some("France"),
        },
        settings(10),
    );

    let mut rx = engine.subscribe();
    engine.new_round();

    let state = wait_for_settled(&mut rx).await;
    let round = state.round().expect("pipeline should produce a round");
    assert_eq!(round.country(), "France");
    assert_eq!(round.coordinate(), snapped_point());
    assert_eq!(
        calls.load(Ordering::SeqCst),
        1,
        "A confirming provider is queried exactly once"
    );
}

#[tokio::test]
async fn test_exhausted_budget_fails_round() {
    let calls = Arc::new(AtomicU32::new(0));
    let engine = RoundEngine::new(
        ScriptedLocator {
            confirm: false,
            calls: Arc::clone(&calls),
            gate: None,
        },
        FixedGeocoder {
            country: Some("France"),
        },
        settings(10),
    );

    let mut rx = engine.subscribe();
    engine.new_round();

    let state = wait_for_settled(&mut rx).await;
    assert_eq!(
        state,
        RoundState::Failed(RoundError::ImageryExhausted { attempts: 10 })
    );
    assert_eq!(
        calls.load(Ordering::SeqCst),
        10,
        "Exactly max_attempts provider calls, then failure"
    );
}

#[tokio::test]
async fn test_geocode_miss_fails_round_without_resampling() {
    let calls = Arc::new(AtomicU32::new(0));
    let engine = RoundEngine::new(
        ScriptedLocator {
            confirm: true,
            calls: Arc::clone(&calls),
            gate: None,
        },
        FixedGeocoder { country: None },
        settings(10),
    );

    let mut rx = engine.subscribe();
    engine.new_round();

    let state = wait_for_settled(&mut rx).await;
    assert!(matches!(
        state,
        RoundState::Failed(RoundError::GeocodeMiss { .. })
    ));
    assert_eq!(
        calls.load(Ordering::SeqCst),
        1,
        "A geocode miss must not send the sampler back to work"
    );
}

#[tokio::test]
async fn test_new_round_supersedes_in_flight_round() {
    // Both rounds' locator calls are held at a gate. Round 1 is
    // superseded before the gate opens; once it does, only round 2's
    // result may reach the state channel.
    let (gate_tx, gate_rx) = watch::channel(false);
    let calls = Arc::new(AtomicU32::new(0));
    let engine = RoundEngine::new(
        ScriptedLocator {
            confirm: true,
            calls: Arc::clone(&calls),
            gate: Some(gate_rx),
        },
        FixedGeocoder {
            country: Some("Japan"),
        },
        settings(10),
    );

    let mut rx = engine.subscribe();
    let first = engine.new_round();
    let second = engine.new_round();
    assert!(second > first, "Generations must increase");

    gate_tx.send(true).expect("gate receiver dropped");

    let state = wait_for_settled(&mut rx).await;
    let round = state.round().expect("second round should be ready");
    assert_eq!(round.country(), "Japan");
    assert_eq!(engine.generation(), second);

    // Give any cancelled straggler time to finish, then confirm the
    // state did not flap
    tokio::time::sleep(Duration::from_millis(50)).await;
    assert!(
        engine.state().round().is_some(),
        "A superseded pipeline must never overwrite the current round"
    );
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_parallel_new_rounds_still_settle() {
    // Racing new_round callers must never cancel the newest round's
    // token; whatever interleaving wins, the engine has to leave
    // Sampling for a terminal state.
    let engine = Arc::new(RoundEngine::new(
        ScriptedLocator {
            confirm: true,
            calls: Arc::new(AtomicU32::new(0)),
            gate: None,
        },
        FixedGeocoder {
            country: Some("France"),
        },
        settings(10),
    ));

    let mut handles = Vec::new();
    for _ in 0..8 {
        let engine = Arc::clone(&engine);
        handles.push(tokio::spawn(async move { engine.new_round() }));
    }
    let mut generations = Vec::new();
    for handle in handles {
        generations.push(handle.await.expect("caller task panicked"));
    }

    let last = *generations.iter().max().expect("no generations");
    assert_eq!(
        engine.generation(),
        last,
        "Counter must land on the highest handed-out generation"
    );

    let mut rx = engine.subscribe();
    let state = wait_for_settled(&mut rx).await;
    let round = state.round().expect("surviving round should be ready");
    assert_eq!(round.country(), "France");
}

#[tokio::test]
async fn test_sampler_standalone_respects_budget() {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    let calls = Arc::new(AtomicU32::new(0));
    let sampler = RoundSampler::new(
        ScriptedLocator {
            confirm: false,
            calls: Arc::clone(&calls),
            gate: None,
        },
        settings(3),
    );

    let mut rng = StdRng::seed_from_u64(1);
    let result = sampler.sample(&mut rng).await;
    assert_eq!(
        result.unwrap_err(),
        RoundError::ImageryExhausted { attempts: 3 }
    );
    assert_eq!(calls.load(Ordering::SeqCst), 3);
}

#[tokio::test]
async fn test_resolver_standalone_reports_distinct_failure() {
    let geocoder = FixedGeocoder { country: None };
    let coord = snapped_point();

    let result = resolve_round(&geocoder, coord).await;
    assert_eq!(
        result.unwrap_err(),
        RoundError::GeocodeMiss { coordinate: coord }
    );
}
