use super::rules::{JudgmentContext, Rule, Side};
use serde::Serialize;
use std::fmt;

/// Minimum net score for a High-confidence Yes.
pub const STRONG_YES_TOTAL: f64 = 8.0;
/// Minimum net score for a Moderate Yes.
pub const YES_TOTAL: f64 = 5.0;
/// Minimum no-score for a No.
pub const NO_SCORE: f64 = 5.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Determination {
    Yes,
    No,
    Uncertain,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Confidence {
    High,
    Moderate,
    Low,
}

impl fmt::Display for Determination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Determination::Yes => "Yes",
            Determination::No => "No",
            Determination::Uncertain => "Uncertain",
        })
    }
}

impl fmt::Display for Confidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Confidence::High => "High",
            Confidence::Moderate => "Moderate",
            Confidence::Low => "Low",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Verdict {
    pub determination: Determination,
    pub confidence: Confidence,
    pub yes_score: f64,
    pub no_score: f64,
    /// Every rule that fired, in table order.
    pub factors: Vec<String>,
}

impl Verdict {
    pub fn total(&self) -> f64 {
        self.yes_score - self.no_score
    }
}

/// Map the two scores onto a determination and confidence.
pub fn decide(yes_score: f64, no_score: f64) -> (Determination, Confidence) {
    let total = yes_score - no_score;
    if total >= STRONG_YES_TOTAL {
        (Determination::Yes, Confidence::High)
    } else if total >= YES_TOTAL {
        (Determination::Yes, Confidence::Moderate)
    } else if no_score >= NO_SCORE {
        (Determination::No, Confidence::Moderate)
    } else {
        (Determination::Uncertain, Confidence::Low)
    }
}

/// Fold every rule over the context. All rules are evaluated.
pub fn score<'r>(rules: impl IntoIterator<Item = &'r Rule>, ctx: &JudgmentContext) -> Verdict {
    let mut yes_score = 0.0;
    let mut no_score = 0.0;
    let mut factors = Vec::new();

    for rule in rules {
        if let Some(factor) = rule.fire(ctx) {
            match factor.side {
                Side::Yes => yes_score += factor.weight,
                Side::No => no_score += factor.weight,
            }
            log::debug!("Rule fired: {}", factor);
            factors.push(factor.to_string());
        }
    }

    let (determination, confidence) = decide(yes_score, no_score);
    Verdict {
        determination,
        confidence,
        yes_score,
        no_score,
        factors,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decide_thresholds() {
        assert_eq!(decide(9.0, 0.0), (Determination::Yes, Confidence::High));
        assert_eq!(decide(10.0, 2.0), (Determination::Yes, Confidence::High));
        assert_eq!(decide(7.0, 2.0), (Determination::Yes, Confidence::Moderate));
        assert_eq!(decide(4.5, 0.0), (Determination::Uncertain, Confidence::Low));
        assert_eq!(decide(2.0, 7.0), (Determination::No, Confidence::Moderate));
        assert_eq!(decide(0.0, 4.0), (Determination::Uncertain, Confidence::Low));
    }

    #[test]
    fn test_yes_wins_over_no_score() {
        // Net total is checked before the no-score.
        assert_eq!(decide(13.0, 5.0), (Determination::Yes, Confidence::High));
    }
}
