//! Application state - shared across all handlers.

use std::sync::Arc;

use quill_core::ports::{PostRepository, UserRepository};
use quill_core::services::{PostService, PostServiceConfig, UserService};
use quill_infra::{InMemoryPostRepository, InMemoryUserRepository};

use crate::config::{AppConfig, StorageConfig};

type Repositories = (Arc<dyn PostRepository>, Arc<dyn UserRepository>);

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub posts: PostService,
    pub users: UserService,
}

impl AppState {
    /// Build the application state with the configured storage backend.
    pub fn new(config: &AppConfig) -> Self {
        let (posts, users) = match &config.storage {
            StorageConfig::JsonFile {
                posts_file,
                users_file,
            } => json_repositories(posts_file, users_file),
            StorageConfig::Memory => {
                tracing::warn!("STORAGE_BACKEND=memory - data is lost on restart");
                memory_repositories()
            }
        };

        tracing::info!("Application state initialized");
        Self::from_repositories(posts, users, config.posts.clone())
    }

    pub fn from_repositories(
        posts: Arc<dyn PostRepository>,
        users: Arc<dyn UserRepository>,
        post_config: PostServiceConfig,
    ) -> Self {
        Self {
            posts: PostService::new(posts, users.clone(), post_config),
            users: UserService::new(users),
        }
    }

    /// State over fresh in-memory repositories.
    #[cfg(test)]
    pub fn in_memory(post_config: PostServiceConfig) -> Self {
        let (posts, users) = memory_repositories();
        Self::from_repositories(posts, users, post_config)
    }
}

fn memory_repositories() -> Repositories {
    (
        Arc::new(InMemoryPostRepository::new()),
        Arc::new(InMemoryUserRepository::new()),
    )
}

#[cfg(feature = "json-file")]
fn json_repositories(posts_file: &std::path::Path, users_file: &std::path::Path) -> Repositories {
    use quill_infra::{JsonFilePostRepository, JsonFileUserRepository};

    (
        Arc::new(JsonFilePostRepository::new(posts_file)),
        Arc::new(JsonFileUserRepository::new(users_file)),
    )
}

#[cfg(not(feature = "json-file"))]
fn json_repositories(_posts_file: &std::path::Path, _users_file: &std::path::Path) -> Repositories {
    tracing::warn!("Built without json-file feature - using in-memory repositories");
    memory_repositories()
}
