//! Round pipeline: sampling, resolution, and lifecycle.
//!
//! A round moves through a fixed sequence: the [`RoundSampler`] finds
//! an imagery-confirmed coordinate, [`resolve_round`] attaches its
//! ground-truth country, and the resulting [`Round`] waits for a guess.
//! The [`RoundEngine`] runs that pipeline per play request and
//! publishes [`RoundState`] transitions for the presentation layer.

mod engine;
mod error;
mod model;
mod resolver;
mod sampler;

pub use engine::RoundEngine;
pub use error::RoundError;
pub use model::{Round, RoundState};
pub use resolver::resolve_round;
pub use sampler::RoundSampler;
