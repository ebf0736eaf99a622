use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Outcome of scoring one assessment.
///
/// Carries the weighted sum and the theoretical maximum alongside the
/// percentage so a stored result can be audited without the raw answers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScoreResult {
    /// Pain percentage in [0, 100], rounded to one decimal place.
    pub percentage: f64,
    /// The profile has no scoreable weight; `percentage` is meaningless.
    pub degenerate: bool,
    pub raw_sum: f64,
    pub max_possible: f64,
}

impl ScoreResult {
    /// Result for a profile whose total possible weighted score is zero.
    pub fn degenerate() -> Self {
        Self {
            percentage: 0.0,
            degenerate: true,
            raw_sum: 0.0,
            max_possible: 0.0,
        }
    }
}

impl fmt::Display for ScoreResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.degenerate {
            f.write_str("assessment unavailable")
        } else {
            write!(f, "{:.1}%", self.percentage)
        }
    }
}
