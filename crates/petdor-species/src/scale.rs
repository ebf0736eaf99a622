use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::ScaleError;

/// Inclusive integer answer range for a question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Scale {
    pub low: i32,
    pub high: i32,
}

impl Scale {
    /// Frequency scale used by every implemented species (0 = never, 7 = constant).
    pub const ZERO_TO_SEVEN: Scale = Scale { low: 0, high: 7 };

    /// Binary yes/no answer, encoded as 0 (no) and 1 (yes).
    pub const YES_NO: Scale = Scale { low: 0, high: 1 };

    pub const fn new(low: i32, high: i32) -> Self {
        Self { low, high }
    }

    /// Parse the textual encodings used by older profile definitions:
    /// `"low-high"` (e.g. `"0-7"`) and `"sim-nao"`.
    pub fn parse(raw: &str) -> Result<Self, ScaleError> {
        let normalized = raw.trim().to_lowercase();
        if normalized == "sim-nao" || normalized == "sim-não" {
            return Ok(Self::YES_NO);
        }

        let (low, high) = normalized
            .split_once('-')
            .ok_or_else(|| ScaleError::Unrecognised(raw.to_string()))?;
        let low: i32 = low
            .trim()
            .parse()
            .map_err(|_| ScaleError::Unrecognised(raw.to_string()))?;
        let high: i32 = high
            .trim()
            .parse()
            .map_err(|_| ScaleError::Unrecognised(raw.to_string()))?;

        let scale = Self::new(low, high);
        scale.validate()?;
        Ok(scale)
    }

    pub fn validate(&self) -> Result<(), ScaleError> {
        if self.low < 0 {
            return Err(ScaleError::Negative { low: self.low });
        }
        if self.low > self.high {
            return Err(ScaleError::Reversed {
                low: self.low,
                high: self.high,
            });
        }
        Ok(())
    }

    pub fn contains(&self, value: i32) -> bool {
        (self.low..=self.high).contains(&value)
    }

    pub fn is_zero_based(&self) -> bool {
        self.low == 0
    }

    /// Mirror `value` across the scale, so `low` maps to `high` and back.
    pub fn reflect(&self, value: i32) -> i32 {
        self.high - value + self.low
    }

    /// Labels to offer for each answer, lowest first. A 0–1 scale is
    /// presented as no/yes.
    pub fn labels(&self) -> Vec<String> {
        if *self == Self::YES_NO {
            return vec!["Não".to_string(), "Sim".to_string()];
        }
        (self.low..=self.high).map(|v| v.to_string()).collect()
    }
}
