//! Guess outcome types.

/// How a guess scored against the round's ground truth.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// Guess names the ground-truth country
    Correct,
    /// Guess names a registered country, just not the right one
    ValidButWrong,
    /// Guess does not match any registered country
    InvalidCountry,
    /// Guess is a valid country but no distance could be computed
    /// (the ground-truth country has no registry entry)
    Indeterminate,
}

/// Distance band for a valid-but-wrong guess. Affects only the tone of
/// the feedback message, never the verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DistanceTier {
    /// Within 500 km of the answer
    NearMiss,
    /// Within 1000 km
    Moderate,
    /// More than 1000 km out
    Far,
}

/// Upper bound of the near-miss tier, inclusive.
pub const NEAR_MISS_KM: u32 = 500;

/// Upper bound of the moderate tier, inclusive.
pub const MODERATE_KM: u32 = 1000;

impl DistanceTier {
    /// Buckets a rounded kilometer distance. Boundaries are inclusive
    /// at the upper end: exactly 500 km is still a near miss, exactly
    /// 1000 km is still moderate.
    pub fn for_km(km: u32) -> Self {
        if km <= NEAR_MISS_KM {
            DistanceTier::NearMiss
        } else if km <= MODERATE_KM {
            DistanceTier::Moderate
        } else {
            DistanceTier::Far
        }
    }
}

/// The scored result of one guess.
#[derive(Debug, Clone, PartialEq)]
pub struct Outcome {
    /// Correctness classification
    pub verdict: Verdict,
    /// Rounded capital-to-capital distance, present only for
    /// [`Verdict::ValidButWrong`]
    pub distance_km: Option<u32>,
    /// Player-facing feedback message
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_boundaries_are_inclusive() {
        assert_eq!(DistanceTier::for_km(0), DistanceTier::NearMiss);
        assert_eq!(DistanceTier::for_km(500), DistanceTier::NearMiss);
        assert_eq!(DistanceTier::for_km(501), DistanceTier::Moderate);
        assert_eq!(DistanceTier::for_km(1000), DistanceTier::Moderate);
        assert_eq!(DistanceTier::for_km(1001), DistanceTier::Far);
        assert_eq!(DistanceTier::for_km(12000), DistanceTier::Far);
    }
}
