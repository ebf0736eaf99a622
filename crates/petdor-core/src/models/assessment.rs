use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use super::answer::AnswerSet;
use super::score::ScoreResult;

/// A scored assessment as handed to persistence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AssessmentRecord {
    pub id: Uuid,
    pub species_id: String,
    pub pet_id: Option<Uuid>,
    pub answers: AnswerSet,
    pub score: ScoreResult,
    /// Label of the pain band the score fell into, when the profile defines
    /// bands and the score is not degenerate.
    pub pain_level: Option<String>,
    pub notes: Option<String>,
    pub created_at: jiff::Timestamp,
}

impl AssessmentRecord {
    pub fn new(species_id: impl Into<String>, answers: AnswerSet, score: ScoreResult) -> Self {
        Self {
            id: Uuid::new_v4(),
            species_id: species_id.into(),
            pet_id: None,
            answers,
            score,
            pain_level: None,
            notes: None,
            created_at: jiff::Timestamp::now(),
        }
    }

    pub fn with_pet(mut self, pet_id: Uuid) -> Self {
        self.pet_id = Some(pet_id);
        self
    }

    pub fn with_pain_level(mut self, label: impl Into<String>) -> Self {
        self.pain_level = Some(label.into());
        self
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }
}
