use std::sync::Mutex;

use petdor_core::error::CoreError;
use petdor_core::models::answer::AnswerSet;
use petdor_core::models::assessment::AssessmentRecord;
use petdor_core::sink::AssessmentSink;
use petdor_species::assessment::{submit, Submission};
use petdor_species::{SpeciesError, SpeciesRegistry};
use uuid::Uuid;

#[derive(Default)]
struct RecordingSink {
    records: Mutex<Vec<AssessmentRecord>>,
}

impl AssessmentSink for RecordingSink {
    fn record(&self, record: &AssessmentRecord) -> Result<(), CoreError> {
        self.records.lock().unwrap().push(record.clone());
        Ok(())
    }
}

struct FailingSink;

impl AssessmentSink for FailingSink {
    fn record(&self, _record: &AssessmentRecord) -> Result<(), CoreError> {
        Err(CoreError::Sink("disk full".into()))
    }
}

fn bird_answers(value: i32) -> AnswerSet {
    let registry = SpeciesRegistry::with_builtin().unwrap();
    registry
        .lookup("aves")
        .unwrap()
        .questions
        .iter()
        .map(|q| (q.id.clone(), value))
        .collect()
}

#[test]
fn submit_scores_classifies_and_records() {
    let registry = SpeciesRegistry::with_builtin().unwrap();
    let sink = RecordingSink::default();
    let pet_id = Uuid::new_v4();

    let record = submit(
        &registry,
        Submission {
            species_id: " AVES ".to_string(),
            pet_id: Some(pet_id),
            answers: bird_answers(7),
            notes: Some("Pós-operatório".to_string()),
        },
        &sink,
    )
    .unwrap();

    assert_eq!(record.species_id, "aves");
    assert_eq!(record.pet_id, Some(pet_id));
    assert_eq!(record.score.percentage, 100.0);
    assert_eq!(record.pain_level.as_deref(), Some("Alta"));
    assert_eq!(record.notes.as_deref(), Some("Pós-operatório"));

    let stored = sink.records.lock().unwrap();
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0], record);
}

#[test]
fn blank_notes_are_dropped() {
    let registry = SpeciesRegistry::with_builtin().unwrap();
    let record = submit(
        &registry,
        Submission {
            species_id: "aves".to_string(),
            pet_id: None,
            answers: bird_answers(0),
            notes: Some("   ".to_string()),
        },
        &RecordingSink::default(),
    )
    .unwrap();
    assert!(record.notes.is_none());
    assert_eq!(record.pain_level.as_deref(), Some("Baixa"));
}

#[test]
fn unknown_species_is_not_found_and_nothing_is_recorded() {
    let registry = SpeciesRegistry::with_builtin().unwrap();
    let sink = RecordingSink::default();

    let err = submit(
        &registry,
        Submission {
            species_id: "dragao".to_string(),
            pet_id: None,
            answers: AnswerSet::new(),
            notes: None,
        },
        &sink,
    )
    .unwrap_err();

    assert!(matches!(err, SpeciesError::NotFound(_)));
    assert!(sink.records.lock().unwrap().is_empty());
}

#[test]
fn invalid_answers_never_reach_the_sink() {
    let registry = SpeciesRegistry::with_builtin().unwrap();
    let sink = RecordingSink::default();
    let mut answers = bird_answers(3);
    answers.insert("come_menos", 9);

    let err = submit(
        &registry,
        Submission {
            species_id: "aves".to_string(),
            pet_id: None,
            answers,
            notes: None,
        },
        &sink,
    )
    .unwrap_err();

    assert!(matches!(err, SpeciesError::Validation(_)));
    assert!(sink.records.lock().unwrap().is_empty());
}

#[test]
fn degenerate_species_is_recorded_without_pain_level() {
    let registry = SpeciesRegistry::with_builtin().unwrap();
    let mut answers = AnswerSet::new();
    answers.insert("avaliacao_indisponivel", 0);

    let record = submit(
        &registry,
        Submission {
            species_id: "Répteis".to_string(),
            pet_id: None,
            answers,
            notes: None,
        },
        &RecordingSink::default(),
    )
    .unwrap();

    assert!(record.score.degenerate);
    assert!(record.pain_level.is_none());
}

#[test]
fn sink_failure_is_surfaced() {
    let registry = SpeciesRegistry::with_builtin().unwrap();
    let err = submit(
        &registry,
        Submission {
            species_id: "aves".to_string(),
            pet_id: None,
            answers: bird_answers(1),
            notes: None,
        },
        &FailingSink,
    )
    .unwrap_err();
    assert!(matches!(err, SpeciesError::Sink(CoreError::Sink(_))));
}
