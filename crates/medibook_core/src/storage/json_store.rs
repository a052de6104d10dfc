//! JSON snapshot reader/writer for the person list.
//!
//! # Responsibility
//! - Serialize the ordered person list to pretty-printed JSON.
//! - Deserialize and fully re-validate snapshots on the way back in.
//!
//! # Invariants
//! - Returned person lists contain only validated, duplicate-free members.
//! - Save writes the whole snapshot or fails; no partial files are produced
//!   beyond what the filesystem itself allows.

use super::{StorageError, StorageResult};
use crate::model::person::Person;
use log::{error, info};
use std::path::Path;
use std::time::Instant;

/// Saves the person list as a JSON snapshot at `path`.
///
/// # Side effects
/// - Creates parent directories when missing.
/// - Emits `storage_save` logging events with duration and status.
pub fn save_address_book(path: impl AsRef<Path>, persons: &[Person]) -> StorageResult<()> {
    let path = path.as_ref();
    let started_at = Instant::now();
    info!("event=storage_save module=storage status=start persons={}", persons.len());

    let result = write_snapshot(path, persons);
    match &result {
        Ok(()) => info!(
            "event=storage_save module=storage status=ok persons={} duration_ms={}",
            persons.len(),
            started_at.elapsed().as_millis()
        ),
        Err(err) => error!(
            "event=storage_save module=storage status=error duration_ms={} error={}",
            started_at.elapsed().as_millis(),
            err
        ),
    }
    result
}

fn write_snapshot(path: &Path, persons: &[Person]) -> StorageResult<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    let json = serde_json::to_string_pretty(persons)?;
    std::fs::write(path, json)?;
    Ok(())
}

/// Loads a person list from the JSON snapshot at `path`.
///
/// Every person is re-validated and the same-person duplicate invariant is
/// re-checked, so registry construction from the result cannot fail for
/// domain reasons.
///
/// # Side effects
/// - Emits `storage_load` logging events with duration and status.
pub fn load_address_book(path: impl AsRef<Path>) -> StorageResult<Vec<Person>> {
    let path = path.as_ref();
    let started_at = Instant::now();
    info!("event=storage_load module=storage status=start");

    let result = read_snapshot(path);
    match &result {
        Ok(persons) => info!(
            "event=storage_load module=storage status=ok persons={} duration_ms={}",
            persons.len(),
            started_at.elapsed().as_millis()
        ),
        Err(err) => error!(
            "event=storage_load module=storage status=error duration_ms={} error={}",
            started_at.elapsed().as_millis(),
            err
        ),
    }
    result
}

fn read_snapshot(path: &Path) -> StorageResult<Vec<Person>> {
    let json = std::fs::read_to_string(path)?;
    let persons: Vec<Person> = serde_json::from_str(&json)?;

    for person in &persons {
        person.validate().map_err(|err| {
            StorageError::InvalidData(format!("person {}: {err}", person.id()))
        })?;
    }
    for (index, person) in persons.iter().enumerate() {
        let duplicated = persons[..index]
            .iter()
            .any(|earlier| earlier.is_same_person(person));
        if duplicated {
            return Err(StorageError::InvalidData(format!(
                "duplicate person entry for {}",
                person.id()
            )));
        }
    }

    Ok(persons)
}
