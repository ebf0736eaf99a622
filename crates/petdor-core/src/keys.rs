//! Storage key conventions.
//!
//! Pure string functions. These define the canonical layout of assessment
//! records in whatever object store the persistence layer sits on.

use uuid::Uuid;

use crate::error::CoreError;

pub const ASSESSMENTS_PREFIX: &str = "assessments/";

pub fn assessment(id: Uuid) -> String {
    format!("{ASSESSMENTS_PREFIX}{id}.json")
}

pub fn pet_assessments_prefix(pet_id: Uuid) -> String {
    format!("pets/{pet_id}/assessments/")
}

/// Index entry linking a pet to one of its assessments. The object body is
/// empty; the assessment id is the last path segment.
pub fn pet_assessment(pet_id: Uuid, id: Uuid) -> String {
    format!("pets/{pet_id}/assessments/{id}")
}

/// Recover the assessment id from either an `assessment` key or a
/// `pet_assessment` index key.
pub fn assessment_id_from_key(key: &str) -> Result<Uuid, CoreError> {
    let last = key
        .rsplit('/')
        .next()
        .filter(|s| !s.is_empty())
        .ok_or_else(|| CoreError::InvalidKey(key.to_string()))?;
    let raw = last.strip_suffix(".json").unwrap_or(last);
    Ok(Uuid::parse_str(raw)?)
}
