//! JSON collection files - one array of records per file.

use std::io;
use std::marker::PhantomData;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;
use tokio::sync::Mutex;

use quill_core::domain::{Post, Record, User};
use quill_core::error::RepoError;
use quill_core::ports::{BaseRepository, Mutation, PostRepository, UserRepository};

use super::collection;

/// Repository backed by a single JSON file holding the whole collection.
///
/// Every write reloads the file, applies the change and rewrites the file
/// through a temporary sibling plus rename. Writes are serialized by a
/// per-repository mutex; reads take no lock and always see a complete file.
/// A missing or empty file is an empty collection.
///
/// Single-process only: two processes sharing a file will clobber each other.
pub struct JsonFileRepository<T> {
    path: PathBuf,
    write_lock: Mutex<()>,
    _record: PhantomData<fn() -> T>,
}

/// JSON-file post repository.
pub type JsonFilePostRepository = JsonFileRepository<Post>;

/// JSON-file user repository.
pub type JsonFileUserRepository = JsonFileRepository<User>;

impl<T: Record> JsonFileRepository<T> {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        tracing::info!(kind = T::KIND, path = %path.display(), "Using JSON collection file");
        Self {
            path,
            write_lock: Mutex::new(()),
            _record: PhantomData,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn load(&self) -> Result<Vec<T>, RepoError> {
        let bytes = match fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(self.storage_error("read", e)),
        };
        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(Vec::new());
        }

        serde_json::from_slice(&bytes).map_err(|e| {
            tracing::error!(path = %self.path.display(), error = %e, "Malformed collection file");
            RepoError::Serialization(format!("{}: {e}", self.path.display()))
        })
    }

    async fn persist(&self, records: &[T]) -> Result<(), RepoError> {
        let bytes = serde_json::to_vec_pretty(records)
            .map_err(|e| RepoError::Serialization(e.to_string()))?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| self.storage_error("create directory for", e))?;
        }

        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, bytes)
            .await
            .map_err(|e| self.storage_error("write", e))?;
        fs::rename(&tmp, &self.path)
            .await
            .map_err(|e| self.storage_error("replace", e))?;

        tracing::debug!(path = %self.path.display(), records = records.len(), "Collection written");
        Ok(())
    }

    /// Run one read-modify-write cycle under the write lock.
    async fn modify<R, F>(&self, change: F) -> Result<R, RepoError>
    where
        F: FnOnce(&mut Vec<T>) -> Result<R, RepoError> + Send,
        R: Send,
    {
        let _guard = self.write_lock.lock().await;
        let mut records = self.load().await?;
        let outcome = change(&mut records)?;
        self.persist(&records).await?;
        Ok(outcome)
    }

    fn storage_error(&self, action: &str, err: io::Error) -> RepoError {
        tracing::error!(path = %self.path.display(), error = %err, "Failed to {action} collection file");
        RepoError::Storage(format!("failed to {action} {}: {err}", self.path.display()))
    }
}

#[async_trait]
impl<T: Record> BaseRepository<T> for JsonFileRepository<T> {
    async fn find_by_id(&self, id: &str) -> Result<Option<T>, RepoError> {
        Ok(self.load().await?.into_iter().find(|r| r.id() == id))
    }

    async fn find_all(&self) -> Result<Vec<T>, RepoError> {
        self.load().await
    }

    async fn save(&self, entity: T) -> Result<T, RepoError> {
        self.modify(move |records| collection::upsert(records, entity))
            .await
    }

    async fn mutate(&self, id: &str, change: Mutation<T>) -> Result<T, RepoError> {
        self.modify(move |records| collection::mutate(records, id, change))
            .await
    }

    async fn delete(&self, id: &str) -> Result<(), RepoError> {
        self.modify(|records| collection::remove(records, id).map(|_| ()))
            .await
    }
}

#[async_trait]
impl PostRepository for JsonFilePostRepository {
    async fn find_by_slug(&self, slug: &str) -> Result<Option<Post>, RepoError> {
        Ok(self.load().await?.into_iter().find(|p| p.slug == slug))
    }
}

impl UserRepository for JsonFileUserRepository {}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;

    fn post(title: &str) -> Post {
        Post::new(
            title.to_string(),
            "content".to_string(),
            "summary".to_string(),
            "author".to_string(),
            vec!["news".to_string()],
        )
    }

    #[tokio::test]
    async fn test_missing_file_is_empty_collection() {
        let dir = tempfile::tempdir().unwrap();
        let repo = JsonFilePostRepository::new(dir.path().join("posts.json"));
        assert!(repo.find_all().await.unwrap().is_empty());
        assert!(repo.find_by_id("nope").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_writes_whole_collection_as_json_array() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("posts.json");
        let repo = JsonFilePostRepository::new(&path);

        let first = repo.save(post("First")).await.unwrap();
        repo.save(post("Second")).await.unwrap();

        let raw: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        let array = raw.as_array().unwrap();
        assert_eq!(array.len(), 2);
        assert_eq!(array[0]["slug"], "first");
        assert!(!path.with_extension("json.tmp").exists());

        // A fresh handle sees the persisted data.
        let reopened = JsonFilePostRepository::new(&path);
        let found = reopened.find_by_slug("first").await.unwrap().unwrap();
        assert_eq!(found.id, first.id);
        assert_eq!(found.version, 1);
    }

    #[tokio::test]
    async fn test_reads_files_written_by_hand() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("users.json");
        std::fs::write(&path, r#"[{"id": "user1", "name": "Aziz"}]"#).unwrap();

        let repo = JsonFileUserRepository::new(&path);
        assert!(repo.exists("user1").await.unwrap());
        assert!(!repo.exists("user2").await.unwrap());
    }

    #[tokio::test]
    async fn test_malformed_file_is_a_serialization_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("posts.json");
        std::fs::write(&path, "{ not json").unwrap();

        let repo = JsonFilePostRepository::new(&path);
        assert!(matches!(
            repo.find_all().await,
            Err(RepoError::Serialization(_))
        ));
        assert!(matches!(
            repo.save(post("Any")).await,
            Err(RepoError::Serialization(_))
        ));
    }

    #[tokio::test]
    async fn test_delete_unknown_id() {
        let dir = tempfile::tempdir().unwrap();
        let repo = JsonFilePostRepository::new(dir.path().join("posts.json"));
        assert!(matches!(repo.delete("ghost").await, Err(RepoError::NotFound)));
    }

    #[tokio::test]
    async fn test_deleted_record_stays_deleted() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("posts.json");
        let repo = JsonFilePostRepository::new(&path);
        let saved = repo.save(post("Removed")).await.unwrap();
        repo.delete(&saved.id).await.unwrap();

        let mut stale = saved.clone();
        stale.likes += 1;
        assert!(matches!(repo.save(stale).await, Err(RepoError::NotFound)));
        assert!(matches!(
            repo.mutate(&saved.id, Box::new(Post::record_view)).await,
            Err(RepoError::NotFound)
        ));
        assert!(JsonFilePostRepository::new(&path).find_all().await.unwrap().is_empty());
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_mutations_are_not_lost() {
        let dir = tempfile::tempdir().unwrap();
        let repo = Arc::new(JsonFilePostRepository::new(dir.path().join("posts.json")));
        let saved = repo.save(post("Hot")).await.unwrap();

        let handles: Vec<_> = (0..16)
            .map(|_| {
                let repo = Arc::clone(&repo);
                let id = saved.id.clone();
                tokio::spawn(async move { repo.mutate(&id, Box::new(Post::record_view)).await })
            })
            .collect();
        for handle in handles {
            handle.await.unwrap().unwrap();
        }

        let stored = repo.find_by_slug("hot").await.unwrap().unwrap();
        assert_eq!((stored.views, stored.version), (16, 17));
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_inserts_are_not_lost() {
        let dir = tempfile::tempdir().unwrap();
        let repo = Arc::new(JsonFilePostRepository::new(dir.path().join("posts.json")));

        let handles: Vec<_> = (0..16)
            .map(|i| {
                let repo = Arc::clone(&repo);
                tokio::spawn(async move { repo.save(post(&format!("Post {i}"))).await })
            })
            .collect();
        for handle in handles {
            handle.await.unwrap().unwrap();
        }

        assert_eq!(repo.find_all().await.unwrap().len(), 16);
    }
}
