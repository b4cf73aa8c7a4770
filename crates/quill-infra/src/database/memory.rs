//! In-memory repository - used when no collection files are configured.

use async_trait::async_trait;
use tokio::sync::RwLock;

use quill_core::domain::{Post, Record, User};
use quill_core::error::RepoError;
use quill_core::ports::{BaseRepository, Mutation, PostRepository, UserRepository};

use super::collection;

/// In-memory collection guarded by an async RwLock.
///
/// Note: Data is lost on process restart.
pub struct InMemoryRepository<T> {
    records: RwLock<Vec<T>>,
}

/// In-memory post repository.
pub type InMemoryPostRepository = InMemoryRepository<Post>;

/// In-memory user repository.
pub type InMemoryUserRepository = InMemoryRepository<User>;

impl<T: Record> InMemoryRepository<T> {
    pub fn new() -> Self {
        Self::with_records(Vec::new())
    }

    /// Start from an existing collection, e.g. fixtures.
    pub fn with_records(records: Vec<T>) -> Self {
        Self {
            records: RwLock::new(records),
        }
    }
}

impl<T: Record> Default for InMemoryRepository<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<T: Record> BaseRepository<T> for InMemoryRepository<T> {
    async fn find_by_id(&self, id: &str) -> Result<Option<T>, RepoError> {
        let records = self.records.read().await;
        Ok(records.iter().find(|r| r.id() == id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<T>, RepoError> {
        Ok(self.records.read().await.clone())
    }

    async fn save(&self, entity: T) -> Result<T, RepoError> {
        let mut records = self.records.write().await;
        collection::upsert(&mut records, entity)
    }

    async fn mutate(&self, id: &str, change: Mutation<T>) -> Result<T, RepoError> {
        let mut records = self.records.write().await;
        collection::mutate(&mut records, id, change)
    }

    async fn delete(&self, id: &str) -> Result<(), RepoError> {
        let mut records = self.records.write().await;
        collection::remove(&mut records, id).map(|_| ())
    }
}

#[async_trait]
impl PostRepository for InMemoryPostRepository {
    async fn find_by_slug(&self, slug: &str) -> Result<Option<Post>, RepoError> {
        let records = self.records.read().await;
        Ok(records.iter().find(|p| p.slug == slug).cloned())
    }
}

impl UserRepository for InMemoryUserRepository {}
