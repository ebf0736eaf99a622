use thiserror::Error;

use petdor_core::error::CoreError;

use crate::scoring::ValidationError;

#[derive(Debug, Error)]
pub enum SpeciesError {
    #[error("unknown species: {0}")]
    NotFound(String),

    #[error("validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("invalid profile '{species_id}': {source}")]
    InvalidProfile {
        species_id: String,
        source: ProfileError,
    },

    #[error("catalog error: {0}")]
    Catalog(#[from] CatalogError),

    #[error("failed to record assessment: {0}")]
    Sink(#[from] CoreError),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScaleError {
    #[error("unrecognised scale: {0:?}")]
    Unrecognised(String),

    #[error("scale bounds are reversed: [{low}, {high}]")]
    Reversed { low: i32, high: i32 },

    #[error("scale low bound {low} is negative")]
    Negative { low: i32 },
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ProfileError {
    #[error("species id is empty")]
    MissingSpeciesId,

    #[error("display name is empty")]
    MissingDisplayName,

    #[error("profile has no questions and is not marked unavailable")]
    NoQuestions,

    #[error("question at position {index} has an empty id")]
    EmptyQuestionId { index: usize },

    #[error("duplicate question id '{0}'")]
    DuplicateQuestionId(String),

    #[error("question '{question_id}' has invalid weight {weight}")]
    InvalidWeight { question_id: String, weight: f64 },

    #[error("weighted maximum score is not a finite number")]
    UnboundedMaximum,

    #[error("question '{question_id}': {source}")]
    InvalidScale {
        question_id: String,
        source: ScaleError,
    },

    #[error("question '{question_id}' references unknown category '{category_id}'")]
    UnknownCategory {
        question_id: String,
        category_id: String,
    },

    #[error("duplicate category id '{0}'")]
    DuplicateCategoryId(String),

    #[error("pain band '{label}' threshold {min_percentage} is out of order or outside [0, 100]")]
    InvalidPainBand { label: String, min_percentage: f64 },
}

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to access catalog at {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("catalog is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("catalog_version {found} is newer than this build supports ({supported})")]
    UnsupportedVersion { found: u32, supported: u32 },

    #[error("malformed catalog: {0}")]
    Malformed(String),

    #[error("legacy scale could not be converted: {0}")]
    Scale(#[from] ScaleError),
}
