use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use petdor_core::models::answer::AnswerSet;
use petdor_core::models::assessment::AssessmentRecord;
use petdor_core::sink::AssessmentSink;

use crate::error::SpeciesError;
use crate::registry::SpeciesRegistry;
use crate::scoring;

/// A completed questionnaire as it arrives from the form layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Submission {
    pub species_id: String,
    #[serde(default)]
    pub pet_id: Option<Uuid>,
    pub answers: AnswerSet,
    #[serde(default)]
    pub notes: Option<String>,
}

/// Score a submission and hand the resulting record to `sink`.
///
/// Nothing reaches the sink unless the submission scores cleanly.
pub fn submit(
    registry: &SpeciesRegistry,
    submission: Submission,
    sink: &dyn AssessmentSink,
) -> Result<AssessmentRecord, SpeciesError> {
    let profile = registry.lookup(&submission.species_id)?;
    let result = scoring::score(&profile, &submission.answers)?;

    let mut record = AssessmentRecord::new(&profile.species_id, submission.answers, result);
    if let Some(pet_id) = submission.pet_id {
        record = record.with_pet(pet_id);
    }
    if let Some(band) = profile.classify(&result) {
        record = record.with_pain_level(&band.label);
    }
    if let Some(notes) = submission.notes.filter(|n| !n.trim().is_empty()) {
        record = record.with_notes(notes);
    }

    sink.record(&record)?;

    info!(
        audit.action = "assessment.recorded",
        audit.resource_id = %record.id,
        species_id = %record.species_id,
        percentage = record.score.percentage,
        degenerate = record.score.degenerate,
        "audit event"
    );
    Ok(record)
}
