//! Score Aggregation — turns a full set of per-question ratings into an
//! average risk score and a risk tier.
//!
//! Pure functions only. Handlers own all I/O.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::assessment::questions::{MAX_RATING, MIN_RATING, QUESTION_COUNT};

/// Rejected submission input. The caller re-prompts; nothing is retried
/// automatically.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InvalidInputError {
    #[error("expected {expected} ratings, got {got}")]
    WrongCount { expected: usize, got: usize },

    #[error("rating {value} at position {position} is outside the {MIN_RATING}-{MAX_RATING} scale")]
    OutOfRange { value: u8, position: usize },
}

/// Risk tier derived solely from the average rating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RiskTier {
    Low,
    Moderate,
    High,
}

impl RiskTier {
    /// Tier thresholds: average < 4.0 is Low, 4.0 ≤ average < 7.0 is
    /// Moderate, average ≥ 7.0 is High. Both boundaries are inclusive on
    /// the higher tier.
    pub fn from_average(average: f64) -> Self {
        if average < 4.0 {
            RiskTier::Low
        } else if average < 7.0 {
            RiskTier::Moderate
        } else {
            RiskTier::High
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RiskTier::Low => "LOW",
            RiskTier::Moderate => "MODERATE",
            RiskTier::High => "HIGH",
        }
    }
}

impl std::fmt::Display for RiskTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One scored submission. Constructed once by [`aggregate`], immutable
/// thereafter.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssessmentResult {
    pub ratings: Vec<u8>,
    pub average_score: f64,
    pub risk_tier: RiskTier,
}

/// Human-readable feedback shown with a result.
#[derive(Debug, Clone, Serialize)]
pub struct Guidance {
    pub summary: &'static str,
    pub next_step: &'static str,
}

impl Guidance {
    pub fn for_tier(tier: RiskTier) -> Self {
        match tier {
            RiskTier::Low => Guidance {
                summary: "Your job appears stable and you seem fairly content.",
                next_step: "Want to stay ahead of future risks? Get a free monthly newsletter with job trends and alerts.",
            },
            RiskTier::Moderate => Guidance {
                summary: "There are warning signs. Monitor closely and explore your options.",
                next_step: "Get 3 expert tips to protect your job, course suggestions, and new job alerts.",
            },
            RiskTier::High => Guidance {
                summary: "You’re likely at risk or disengaged. Start preparing your exit strategy now.",
                next_step: "We'll help match your CV to real jobs, recommend retraining options, or suggest union support.",
            },
        }
    }
}

/// Validates a full rating sequence and computes its average and tier.
///
/// The sequence must cover every question exactly once, in question
/// order, with each value in `1..=10`.
pub fn aggregate(ratings: &[u8]) -> Result<AssessmentResult, InvalidInputError> {
    if ratings.len() != QUESTION_COUNT {
        return Err(InvalidInputError::WrongCount {
            expected: QUESTION_COUNT,
            got: ratings.len(),
        });
    }

    for (position, &value) in ratings.iter().enumerate() {
        if !(MIN_RATING..=MAX_RATING).contains(&value) {
            return Err(InvalidInputError::OutOfRange { value, position });
        }
    }

    let sum: u32 = ratings.iter().map(|&r| u32::from(r)).sum();
    let average_score = f64::from(sum) / QUESTION_COUNT as f64;

    Ok(AssessmentResult {
        ratings: ratings.to_vec(),
        average_score,
        risk_tier: RiskTier::from_average(average_score),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn uniform(value: u8) -> Vec<u8> {
        vec![value; QUESTION_COUNT]
    }

    #[test]
    fn test_all_ones_is_low() {
        let result = aggregate(&uniform(1)).unwrap();
        assert_eq!(result.average_score, 1.0);
        assert_eq!(result.risk_tier, RiskTier::Low);
    }

    #[test]
    fn test_all_tens_is_high() {
        let result = aggregate(&uniform(10)).unwrap();
        assert_eq!(result.average_score, 10.0);
        assert_eq!(result.risk_tier, RiskTier::High);
    }

    #[test]
    fn test_boundary_average_4_is_moderate_not_low() {
        let result = aggregate(&uniform(4)).unwrap();
        assert_eq!(result.average_score, 4.0);
        assert_eq!(result.risk_tier, RiskTier::Moderate);
    }

    #[test]
    fn test_boundary_average_7_is_high_not_moderate() {
        let result = aggregate(&uniform(7)).unwrap();
        assert_eq!(result.average_score, 7.0);
        assert_eq!(result.risk_tier, RiskTier::High);
    }

    #[test]
    fn test_just_below_4_is_low() {
        assert_eq!(RiskTier::from_average(3.999), RiskTier::Low);
    }

    #[test]
    fn test_just_below_7_is_moderate() {
        assert_eq!(RiskTier::from_average(6.999), RiskTier::Moderate);
    }

    #[test]
    fn test_average_always_within_scale() {
        for value in 1..=10u8 {
            let result = aggregate(&uniform(value)).unwrap();
            assert!((1.0..=10.0).contains(&result.average_score));
        }
    }

    #[test]
    fn test_too_few_ratings_rejected() {
        let err = aggregate(&vec![5; QUESTION_COUNT - 1]).unwrap_err();
        assert_eq!(
            err,
            InvalidInputError::WrongCount {
                expected: QUESTION_COUNT,
                got: QUESTION_COUNT - 1,
            }
        );
    }

    #[test]
    fn test_too_many_ratings_rejected() {
        let err = aggregate(&vec![5; QUESTION_COUNT + 1]).unwrap_err();
        assert!(matches!(err, InvalidInputError::WrongCount { .. }));
    }

    #[test]
    fn test_zero_rating_rejected() {
        let mut ratings = uniform(5);
        ratings[3] = 0;
        let err = aggregate(&ratings).unwrap_err();
        assert_eq!(err, InvalidInputError::OutOfRange { value: 0, position: 3 });
    }

    #[test]
    fn test_eleven_rating_rejected() {
        let mut ratings = uniform(5);
        ratings[QUESTION_COUNT - 1] = 11;
        let err = aggregate(&ratings).unwrap_err();
        assert_eq!(
            err,
            InvalidInputError::OutOfRange {
                value: 11,
                position: QUESTION_COUNT - 1,
            }
        );
    }

    #[test]
    fn test_mixed_ratings_average() {
        // Half 2s and half 8s over an even count averages to exactly 5.0.
        let mut ratings = vec![2; QUESTION_COUNT / 2];
        ratings.extend(vec![8; QUESTION_COUNT / 2]);
        let result = aggregate(&ratings).unwrap();
        assert_eq!(result.average_score, 5.0);
        assert_eq!(result.risk_tier, RiskTier::Moderate);
    }

    #[test]
    fn test_result_preserves_rating_order() {
        let mut ratings = uniform(5);
        ratings[0] = 1;
        ratings[QUESTION_COUNT - 1] = 10;
        let result = aggregate(&ratings).unwrap();
        assert_eq!(result.ratings, ratings);
    }

    #[test]
    fn test_tier_serializes_uppercase() {
        assert_eq!(serde_json::to_string(&RiskTier::Moderate).unwrap(), "\"MODERATE\"");
    }

    #[test]
    fn test_guidance_matches_tier() {
        assert!(Guidance::for_tier(RiskTier::Low).summary.contains("stable"));
        assert!(Guidance::for_tier(RiskTier::Moderate)
            .summary
            .contains("warning signs"));
        assert!(Guidance::for_tier(RiskTier::High)
            .next_step
            .contains("match your CV"));
    }
}
