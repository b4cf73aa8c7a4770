use async_trait::async_trait;

use crate::domain::{Post, Record, User};
use crate::error::RepoError;

/// In-place change applied to a stored record by [`BaseRepository::mutate`].
pub type Mutation<T> = Box<dyn FnOnce(&mut T) + Send>;

/// Keyed record store with per-record CRUD operations.
///
/// `save` is a compare-and-swap on the record version: implementations must
/// reject a write whose version differs from the stored one with
/// [`RepoError::Stale`], bump the version of every accepted write, and reject
/// a record whose [`Record::unique_key`] is already taken by another record
/// with [`RepoError::Constraint`].
#[async_trait]
pub trait BaseRepository<T: Record>: Send + Sync {
    /// Find an entity by its unique ID.
    async fn find_by_id(&self, id: &str) -> Result<Option<T>, RepoError>;

    /// All entities in stored order.
    async fn find_all(&self) -> Result<Vec<T>, RepoError>;

    /// Save an entity (create or update). Returns the stored copy.
    async fn save(&self, entity: T) -> Result<T, RepoError>;

    /// Apply `change` to the stored record atomically with respect to every
    /// other write, then save it. [`RepoError::NotFound`] if `id` is not stored.
    async fn mutate(&self, id: &str, change: Mutation<T>) -> Result<T, RepoError>;

    /// Delete an entity by its ID.
    async fn delete(&self, id: &str) -> Result<(), RepoError>;
}

/// User repository.
#[async_trait]
pub trait UserRepository: BaseRepository<User> {
    async fn exists(&self, id: &str) -> Result<bool, RepoError> {
        Ok(self.find_by_id(id).await?.is_some())
    }
}

/// Post repository.
#[async_trait]
pub trait PostRepository: BaseRepository<Post> {
    async fn find_by_slug(&self, slug: &str) -> Result<Option<Post>, RepoError>;
}
