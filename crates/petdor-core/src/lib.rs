//! petdor-core
//!
//! Pure domain types and storage key conventions. No scoring logic lives
//! here; this is the shared vocabulary between the species engine and the
//! persistence layer.

pub mod error;
pub mod keys;
pub mod models;
pub mod sink;
