//! petdor-species
//!
//! Species-specific pain questionnaires and the engine that scores them.
//! Defines the question model, the registry of species profiles, the
//! built-in profiles, and the conversion of raw answers into a bounded
//! pain percentage.

pub mod assessment;
pub mod catalog;
pub mod error;
pub mod profile;
pub mod registry;
pub mod scale;
pub mod scoring;
pub mod species;

pub use error::SpeciesError;
pub use profile::{Category, PainBand, Question, SpeciesProfile};
pub use registry::{SharedRegistry, SpeciesRegistry};
pub use scale::Scale;
pub use scoring::{ValidationError, score, validate_answers};
