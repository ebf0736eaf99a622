//! Species id to profile lookup.
//!
//! [`SpeciesRegistry`] is a plain value: build it once at startup with
//! [`SpeciesRegistry::with_builtin`] (or from a catalog) and pass it to
//! whatever needs it. When profiles must be added while the process is
//! serving, wrap it in a [`SharedRegistry`].

use std::collections::HashMap;
use std::path::Path;
use std::sync::{Arc, Mutex, PoisonError, RwLock};

use tracing::{info, warn};

use crate::catalog;
use crate::error::SpeciesError;
use crate::profile::SpeciesProfile;
use crate::species;

/// Canonical form of a registry key: trimmed and lower-cased.
pub fn normalize_key(key: &str) -> String {
    key.trim().to_lowercase()
}

#[derive(Debug, Clone, Default)]
pub struct SpeciesRegistry {
    /// Registration order; a re-registered species keeps its first slot.
    profiles: Vec<Arc<SpeciesProfile>>,
    by_id: HashMap<String, usize>,
    /// Display-name aliases, for callers that still pass the human name.
    by_name: HashMap<String, usize>,
}

impl SpeciesRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding every built-in species, in their fixed order.
    pub fn with_builtin() -> Result<Self, SpeciesError> {
        Self::from_profiles(species::builtin_profiles())
    }

    pub fn from_profiles(
        profiles: impl IntoIterator<Item = SpeciesProfile>,
    ) -> Result<Self, SpeciesError> {
        let mut registry = Self::new();
        for profile in profiles {
            registry.register(profile)?;
        }
        info!(count = registry.len(), "species registry initialised");
        Ok(registry)
    }

    /// Registry holding the profiles of a catalog file, in file order.
    pub fn from_catalog(path: &Path) -> Result<Self, SpeciesError> {
        Self::from_profiles(catalog::load_catalog(path)?)
    }

    /// Register `profile` under its normalized species id.
    ///
    /// Registering an id that already exists replaces the earlier profile
    /// (last registration wins) while keeping its position in
    /// [`list_all`](Self::list_all).
    pub fn register(&mut self, profile: SpeciesProfile) -> Result<(), SpeciesError> {
        profile
            .validate()
            .map_err(|source| SpeciesError::InvalidProfile {
                species_id: profile.species_id.clone(),
                source,
            })?;

        let key = normalize_key(&profile.species_id);
        if profile.needs_migration_review() {
            warn!(
                species_id = %key,
                "profile scores questions on a scale not starting at zero; review before use"
            );
        }

        let profile = Arc::new(profile);
        match self.by_id.get(&key).copied() {
            Some(slot) => {
                warn!(species_id = %key, "species already registered, replacing");
                self.profiles[slot] = profile;
            }
            None => {
                self.by_id.insert(key.clone(), self.profiles.len());
                self.profiles.push(profile);
            }
        }
        self.rebuild_name_index();

        info!(species_id = %key, "species registered");
        Ok(())
    }

    /// Find a profile by species id, falling back to its display name.
    /// Case and surrounding whitespace are ignored.
    pub fn lookup(&self, key: &str) -> Result<Arc<SpeciesProfile>, SpeciesError> {
        let normalized = normalize_key(key);
        self.by_id
            .get(&normalized)
            .or_else(|| self.by_name.get(&normalized))
            .and_then(|&slot| self.profiles.get(slot))
            .cloned()
            .ok_or_else(|| SpeciesError::NotFound(key.trim().to_string()))
    }

    pub fn contains(&self, key: &str) -> bool {
        self.lookup(key).is_ok()
    }

    /// Every registered profile, in registration order.
    pub fn list_all(&self) -> &[Arc<SpeciesProfile>] {
        &self.profiles
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }

    fn rebuild_name_index(&mut self) {
        self.by_name = self
            .profiles
            .iter()
            .enumerate()
            .map(|(slot, profile)| (normalize_key(&profile.display_name), slot))
            .collect();
    }
}

/// A registry that accepts registrations at runtime.
///
/// Readers get an immutable snapshot and never see a partially updated map.
/// Writers are serialised and publish a fresh copy.
#[derive(Debug, Default)]
pub struct SharedRegistry {
    current: RwLock<Arc<SpeciesRegistry>>,
    writer: Mutex<()>,
}

impl SharedRegistry {
    pub fn new(registry: SpeciesRegistry) -> Self {
        Self {
            current: RwLock::new(Arc::new(registry)),
            writer: Mutex::new(()),
        }
    }

    pub fn snapshot(&self) -> Arc<SpeciesRegistry> {
        // The guarded value is always a complete Arc, so a poisoned lock
        // still holds a usable snapshot.
        self.current
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn lookup(&self, key: &str) -> Result<Arc<SpeciesProfile>, SpeciesError> {
        self.snapshot().lookup(key)
    }

    pub fn register(&self, profile: SpeciesProfile) -> Result<(), SpeciesError> {
        let _writer = self.writer.lock().unwrap_or_else(PoisonError::into_inner);

        let mut next = SpeciesRegistry::clone(&self.snapshot());
        next.register(profile)?;

        *self.current.write().unwrap_or_else(PoisonError::into_inner) = Arc::new(next);
        Ok(())
    }
}
