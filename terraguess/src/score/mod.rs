//! Guess scoring
//!
//! Turns a completed round plus a free-text guess into an [`Outcome`]:
//! a verdict, an optional capital-to-capital distance, and a feedback
//! message whose tone tracks how close the guess was.

mod evaluator;
mod types;

pub use evaluator::GuessEvaluator;
pub use types::{DistanceTier, Outcome, Verdict, MODERATE_KM, NEAR_MISS_KM};
