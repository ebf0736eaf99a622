use uuid::Uuid;

use petdor_core::error::CoreError;
use petdor_core::keys;
use petdor_core::models::assessment::AssessmentRecord;
use petdor_core::sink::AssessmentSink;

use crate::error::StorageError;
use crate::objects::MemoryObjectStore;

/// Assessment records stored as JSON objects, with a per-pet index.
#[derive(Debug, Default)]
pub struct AssessmentStore {
    objects: MemoryObjectStore,
}

impl AssessmentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records are write-once; storing the same id twice is an error.
    pub fn put_assessment(&self, record: &AssessmentRecord) -> Result<(), StorageError> {
        let body = serde_json::to_vec(record)?;
        self.objects
            .put_object_if_absent(&keys::assessment(record.id), body)?;
        if let Some(pet_id) = record.pet_id {
            self.objects
                .put_object(&keys::pet_assessment(pet_id, record.id), Vec::new());
        }
        tracing::info!(
            assessment_id = %record.id,
            species_id = %record.species_id,
            "assessment stored"
        );
        Ok(())
    }

    pub fn get_assessment(&self, id: Uuid) -> Result<AssessmentRecord, StorageError> {
        let body = self.objects.get_object(&keys::assessment(id))?;
        Ok(serde_json::from_slice(&body)?)
    }

    pub fn list_assessments(&self) -> Result<Vec<AssessmentRecord>, StorageError> {
        let mut records = Vec::new();
        for key in self.objects.list_objects(keys::ASSESSMENTS_PREFIX) {
            let body = self.objects.get_object(&key)?;
            records.push(serde_json::from_slice(&body)?);
        }
        Ok(records)
    }

    /// A pet's assessments, oldest first.
    pub fn list_for_pet(&self, pet_id: Uuid) -> Result<Vec<AssessmentRecord>, StorageError> {
        let mut records = Vec::new();
        for key in self.objects.list_objects(&keys::pet_assessments_prefix(pet_id)) {
            let id = keys::assessment_id_from_key(&key)?;
            records.push(self.get_assessment(id)?);
        }
        records.sort_by_key(|r: &AssessmentRecord| r.created_at);
        Ok(records)
    }

    pub fn delete_assessment(&self, id: Uuid) -> Result<(), StorageError> {
        let record = self.get_assessment(id)?;
        self.objects.delete_object(&keys::assessment(id))?;
        if let Some(pet_id) = record.pet_id {
            self.objects
                .delete_object(&keys::pet_assessment(pet_id, id))?;
        }
        Ok(())
    }
}

impl AssessmentSink for AssessmentStore {
    fn record(&self, record: &AssessmentRecord) -> Result<(), CoreError> {
        self.put_assessment(record)
            .map_err(|e| CoreError::Sink(Box::new(e)))
    }
}
