//! Turning a set of raw answers into a normalized pain percentage.
//!
//! Scoring is a pure function of `(profile, answers)`: no shared state, no
//! I/O, safe to call from any thread.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use ts_rs::TS;

use petdor_core::models::answer::{AnswerEntry, AnswerSet};
use petdor_core::models::score::ScoreResult;

use crate::profile::SpeciesProfile;

/// A problem with a submitted answer set. Always recoverable by asking the
/// user again.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS, Error)]
#[serde(tag = "kind", rename_all = "snake_case")]
#[ts(export)]
pub enum ValidationError {
    #[error("no answer for question '{question_id}'")]
    MissingAnswer { question_id: String },

    #[error("answer {value} given for unknown question '{question_id}'")]
    UnexpectedAnswer { question_id: String, value: i32 },

    #[error("question '{question_id}' answered more than once")]
    DuplicateAnswer { question_id: String },

    #[error("answer {value} for question '{question_id}' is outside [{low}, {high}]")]
    OutOfRange {
        question_id: String,
        value: i32,
        low: i32,
        high: i32,
    },
}

impl ValidationError {
    pub fn question_id(&self) -> &str {
        match self {
            Self::MissingAnswer { question_id }
            | Self::UnexpectedAnswer { question_id, .. }
            | Self::DuplicateAnswer { question_id }
            | Self::OutOfRange { question_id, .. } => question_id,
        }
    }
}

/// Fold form entries into an [`AnswerSet`], rejecting a question answered
/// twice instead of letting the last entry win.
pub fn answers_from_entries(
    entries: impl IntoIterator<Item = AnswerEntry>,
) -> Result<AnswerSet, ValidationError> {
    let mut answers = AnswerSet::new();
    for entry in entries {
        if answers.contains(&entry.question_id) {
            return Err(ValidationError::DuplicateAnswer {
                question_id: entry.question_id,
            });
        }
        answers.insert(entry.question_id, entry.value);
    }
    Ok(answers)
}

/// Every problem with `answers` relative to `profile`: missing and
/// out-of-range answers in question order, then answers for unknown
/// questions in id order.
pub fn validate_answers(profile: &SpeciesProfile, answers: &AnswerSet) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    let mut known = HashSet::with_capacity(profile.questions.len());

    for question in &profile.questions {
        known.insert(question.id.as_str());
        match answers.get(&question.id) {
            None => errors.push(ValidationError::MissingAnswer {
                question_id: question.id.clone(),
            }),
            Some(value) if !question.scale.contains(value) => {
                errors.push(ValidationError::OutOfRange {
                    question_id: question.id.clone(),
                    value,
                    low: question.scale.low,
                    high: question.scale.high,
                })
            }
            Some(_) => {}
        }
    }

    for (question_id, value) in answers.iter() {
        if !known.contains(question_id) {
            errors.push(ValidationError::UnexpectedAnswer {
                question_id: question_id.to_string(),
                value,
            });
        }
    }

    errors
}

/// Score `answers` against `profile`.
///
/// Fails with the first validation problem without computing anything.
/// A profile whose maximum weighted score is zero, or too large to
/// represent, yields a degenerate result rather than an error.
pub fn score(profile: &SpeciesProfile, answers: &AnswerSet) -> Result<ScoreResult, ValidationError> {
    if let Some(first) = validate_answers(profile, answers).into_iter().next() {
        return Err(first);
    }

    let mut raw_sum = 0.0;
    let mut max_possible = 0.0;
    for question in &profile.questions {
        let raw = answers
            .get(&question.id)
            .ok_or_else(|| ValidationError::MissingAnswer {
                question_id: question.id.clone(),
            })?;
        // Weight applies after inversion.
        raw_sum += f64::from(question.effective_value(raw)) * question.weight;
        max_possible += f64::from(question.scale.high) * question.weight;
    }

    if max_possible <= 0.0 || !max_possible.is_finite() {
        return Ok(ScoreResult::degenerate());
    }

    Ok(ScoreResult {
        percentage: round_to_tenth(raw_sum / max_possible * 100.0),
        degenerate: false,
        raw_sum,
        max_possible,
    })
}

/// Round half away from zero to one decimal place.
pub(crate) fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
