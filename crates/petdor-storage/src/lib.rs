//! petdor-storage
//!
//! In-process persistence for scored assessments. A key/value object store
//! plus the assessment layer that writes records under the canonical keys.

pub mod assessments;
pub mod error;
pub mod objects;
