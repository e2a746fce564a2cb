//! TerraGuess - Street-level geography guessing game engine
//!
//! This library implements the round engine for a game that drops the
//! player at a random street-level panorama somewhere on Earth and asks
//! them to name the country. It covers:
//!
//! - sampling random coordinates until an imagery provider confirms a
//!   playable panorama ([`round::RoundSampler`])
//! - resolving the confirmed coordinate to a ground-truth country via
//!   reverse geocoding ([`round::resolve_round`])
//! - scoring a free-text guess by exact match or great-circle distance
//!   between capital cities ([`score::GuessEvaluator`])
//!
//! # High-Level API
//!
//! The [`round::RoundEngine`] ties the pipeline together and publishes
//! round state transitions on a watch channel:
//!
//! ```ignore
//! use terraguess::provider::{AsyncReqwestClient, GoogleStreetViewLocator, GoogleReverseGeocoder};
//! use terraguess::round::{RoundEngine, RoundState};
//!
//! let engine = RoundEngine::new(locator, geocoder, settings);
//! let mut state = engine.subscribe();
//!
//! engine.new_round();
//! state.changed().await?;
//! if let RoundState::Ready(round) = &*state.borrow() {
//!     // present the panorama, collect a guess, evaluate it
//! }
//! ```

pub mod config;
pub mod coord;
pub mod logging;
pub mod provider;
pub mod registry;
pub mod round;
pub mod score;

/// Version of the TerraGuess library and CLI.
///
/// Synchronized across all workspace members via the workspace manifest.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
