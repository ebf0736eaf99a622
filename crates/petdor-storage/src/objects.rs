//! Object operations over an in-memory key space.

use std::collections::BTreeMap;
use std::sync::{PoisonError, RwLock};

use crate::error::StorageError;

/// Thread-safe map from object key to bytes. Keys list in lexical order.
#[derive(Debug, Default)]
pub struct MemoryObjectStore {
    objects: RwLock<BTreeMap<String, Vec<u8>>>,
}

impl MemoryObjectStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn put_object(&self, key: &str, body: Vec<u8>) {
        let mut objects = self.objects.write().unwrap_or_else(PoisonError::into_inner);
        objects.insert(key.to_string(), body);
        tracing::debug!(key, "object stored");
    }

    /// Store `body` only if nothing is stored under `key` yet.
    pub fn put_object_if_absent(&self, key: &str, body: Vec<u8>) -> Result<(), StorageError> {
        let mut objects = self.objects.write().unwrap_or_else(PoisonError::into_inner);
        if objects.contains_key(key) {
            return Err(StorageError::AlreadyExists {
                key: key.to_string(),
            });
        }
        objects.insert(key.to_string(), body);
        tracing::debug!(key, "object stored");
        Ok(())
    }

    pub fn get_object(&self, key: &str) -> Result<Vec<u8>, StorageError> {
        self.objects
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
            .cloned()
            .ok_or_else(|| StorageError::NotFound {
                key: key.to_string(),
            })
    }

    pub fn delete_object(&self, key: &str) -> Result<(), StorageError> {
        let mut objects = self.objects.write().unwrap_or_else(PoisonError::into_inner);
        if objects.remove(key).is_none() {
            return Err(StorageError::NotFound {
                key: key.to_string(),
            });
        }
        tracing::debug!(key, "object deleted");
        Ok(())
    }

    /// Keys under `prefix`, in lexical order.
    pub fn list_objects(&self, prefix: &str) -> Vec<String> {
        self.objects
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .range(prefix.to_string()..)
            .take_while(|(key, _)| key.starts_with(prefix))
            .map(|(key, _)| key.clone())
            .collect()
    }
}
