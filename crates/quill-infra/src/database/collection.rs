//! Write rules shared by every repository backend.
//!
//! A collection is a plain `Vec<T>` in stored order; backends load it, run
//! one of these functions under their write lock, then persist it.

use quill_core::domain::Record;
use quill_core::error::RepoError;
use quill_core::ports::Mutation;

/// Insert or replace `entity`, enforcing the version check and unique key.
pub(crate) fn upsert<T: Record>(records: &mut Vec<T>, mut entity: T) -> Result<T, RepoError> {
    if let Some((field, key)) = entity.unique_key() {
        let taken = records
            .iter()
            .any(|r| r.id() != entity.id() && r.unique_key().is_some_and(|(_, k)| k == key));
        if taken {
            return Err(RepoError::Constraint(format!(
                "{field} '{key}' is already taken"
            )));
        }
    }

    match records.iter().position(|r| r.id() == entity.id()) {
        Some(index) => {
            let stored = records[index].version();
            if stored != entity.version() {
                return Err(RepoError::Stale {
                    id: entity.id().to_string(),
                    expected: entity.version(),
                    found: stored,
                });
            }
            entity.set_version(stored + 1);
            records[index] = entity.clone();
        }
        // A versioned record that is no longer stored was deleted after it was read.
        None if entity.version() != 0 => return Err(RepoError::NotFound),
        None => {
            entity.set_version(1);
            records.push(entity.clone());
        }
    }

    Ok(entity)
}

/// Apply `change` to the stored record with `id` and write it back.
///
/// Runs inside the backend's write lock, so concurrent changes never
/// overwrite each other.
pub(crate) fn mutate<T: Record>(
    records: &mut Vec<T>,
    id: &str,
    change: Mutation<T>,
) -> Result<T, RepoError> {
    let mut entity = records
        .iter()
        .find(|r| r.id() == id)
        .cloned()
        .ok_or(RepoError::NotFound)?;
    change(&mut entity);
    upsert(records, entity)
}

/// Remove the record with `id`.
pub(crate) fn remove<T: Record>(records: &mut Vec<T>, id: &str) -> Result<T, RepoError> {
    let index = records
        .iter()
        .position(|r| r.id() == id)
        .ok_or(RepoError::NotFound)?;
    Ok(records.remove(index))
}
