use crate::error::CoreError;
use crate::models::assessment::AssessmentRecord;

/// Receives a finished assessment for durable recording.
///
/// The scoring side only ever hands records over through this trait; the
/// storage technology behind it is not its concern.
pub trait AssessmentSink: Send + Sync {
    fn record(&self, record: &AssessmentRecord) -> Result<(), CoreError>;
}
