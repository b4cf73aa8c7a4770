use serde::Serialize;
use serde::de::DeserializeOwned;

/// A record that lives in a keyed collection.
///
/// Repositories use the version to reject stale writes and the unique key
/// to enforce a secondary uniqueness constraint (e.g. post slugs).
pub trait Record: Clone + Serialize + DeserializeOwned + Send + Sync + 'static {
    /// Human-readable entity name used in errors and logs.
    const KIND: &'static str;

    fn id(&self) -> &str;

    fn version(&self) -> u64;

    fn set_version(&mut self, version: u64);

    /// Secondary key that must be unique across the collection, with its field name.
    fn unique_key(&self) -> Option<(&'static str, &str)> {
        None
    }
}
