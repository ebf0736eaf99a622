//! Species catalog files.
//!
//! A catalog is a JSON document listing species profiles, used when the
//! questionnaires are maintained outside the binary. Files are versioned:
//! older shapes are migrated in place before deserializing.

use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::CatalogError;
use crate::profile::SpeciesProfile;
use crate::scale::Scale;

/// Current catalog version. Bump this when changing the shape and add the
/// corresponding step to [`migrate`].
pub const CURRENT_VERSION: u32 = 1;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Catalog {
    /// Schema version. Missing or 0 = pre-versioned catalog.
    #[serde(default)]
    pub catalog_version: u32,
    pub species: Vec<SpeciesProfile>,
}

pub fn parse_catalog(contents: &str) -> Result<Vec<SpeciesProfile>, CatalogError> {
    // Parse as raw JSON so we can run migrations before deserializing.
    let json: Value = serde_json::from_str(contents)?;
    let on_disk_version = json
        .get("catalog_version")
        .and_then(Value::as_u64)
        .unwrap_or(0) as u32;

    let migrated = migrate(json, on_disk_version)?;
    let catalog: Catalog = serde_json::from_value(migrated)?;
    Ok(catalog.species)
}

pub fn load_catalog(path: &Path) -> Result<Vec<SpeciesProfile>, CatalogError> {
    let contents = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
        path: path.display().to_string(),
        source,
    })?;
    let species = parse_catalog(&contents)?;
    tracing::info!(path = %path.display(), count = species.len(), "species catalog loaded");
    Ok(species)
}

/// Write `species` to `path` at [`CURRENT_VERSION`], via a temp file and a
/// rename so readers never see a half-written catalog.
pub fn save_catalog(path: &Path, species: &[SpeciesProfile]) -> Result<(), CatalogError> {
    let io_err = |source: std::io::Error| CatalogError::Io {
        path: path.display().to_string(),
        source,
    };

    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        std::fs::create_dir_all(dir).map_err(io_err)?;
    }

    let catalog = Catalog {
        catalog_version: CURRENT_VERSION,
        species: species.to_vec(),
    };
    let json = serde_json::to_string_pretty(&catalog)?;

    let tmp_path = path.with_extension("json.tmp");
    std::fs::write(&tmp_path, json.as_bytes()).map_err(io_err)?;
    std::fs::rename(&tmp_path, path).map_err(io_err)?;

    tracing::info!(path = %path.display(), count = species.len(), "species catalog saved");
    Ok(())
}

/// Run sequential migrations from `from_version` up to [`CURRENT_VERSION`].
fn migrate(mut json: Value, from_version: u32) -> Result<Value, CatalogError> {
    if from_version > CURRENT_VERSION {
        return Err(CatalogError::UnsupportedVersion {
            found: from_version,
            supported: CURRENT_VERSION,
        });
    }

    // v0 → v1: questions gain ids, scales become {low, high}
    if from_version < 1 {
        let obj = json
            .as_object_mut()
            .ok_or_else(|| CatalogError::Malformed("catalog is not a JSON object".to_string()))?;
        let species = obj
            .get_mut("species")
            .and_then(Value::as_array_mut)
            .ok_or_else(|| CatalogError::Malformed("missing species list".to_string()))?;
        for entry in species.iter_mut() {
            migrate_species_v0(entry)?;
        }
        obj.insert("catalog_version".to_string(), Value::Number(1.into()));
        tracing::info!("migrated species catalog v0 → v1 (question ids, structured scales)");
    }

    Ok(json)
}

fn migrate_species_v0(entry: &mut Value) -> Result<(), CatalogError> {
    let questions = entry
        .get_mut("questions")
        .and_then(Value::as_array_mut)
        .ok_or_else(|| CatalogError::Malformed("species entry has no questions list".to_string()))?;

    for (index, question) in questions.iter_mut().enumerate() {
        let question = question
            .as_object_mut()
            .ok_or_else(|| CatalogError::Malformed(format!("question {index} is not an object")))?;

        question
            .entry("id")
            .or_insert_with(|| Value::String(format!("q{}", index + 1)));

        let parsed = match question.get("scale") {
            Some(Value::String(raw)) => Some(Scale::parse(raw)?),
            _ => None,
        };
        if let Some(scale) = parsed {
            question.insert("scale".to_string(), serde_json::to_value(scale)?);
        }
    }
    Ok(())
}
