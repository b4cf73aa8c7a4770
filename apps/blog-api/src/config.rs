//! Application configuration loaded from environment variables.

use std::env;
use std::path::PathBuf;

use quill_core::services::{PostServiceConfig, ValidationMode};

/// Where the post and user collections live.
#[derive(Debug, Clone, PartialEq)]
pub enum StorageConfig {
    JsonFile {
        posts_file: PathBuf,
        users_file: PathBuf,
    },
    Memory,
}

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub storage: StorageConfig,
    pub posts: PostServiceConfig,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the configuration from any key/value source.
    fn from_lookup(var: impl Fn(&str) -> Option<String>) -> Self {
        let storage = match var("STORAGE_BACKEND").as_deref() {
            Some("memory") => StorageConfig::Memory,
            backend => {
                if let Some(other) = backend.filter(|b| *b != "json") {
                    tracing::warn!(backend = other, "Unknown STORAGE_BACKEND, using json");
                }
                StorageConfig::JsonFile {
                    posts_file: var("POSTS_FILE")
                        .unwrap_or_else(|| "data/posts.json".to_string())
                        .into(),
                    users_file: var("USERS_FILE")
                        .unwrap_or_else(|| "data/users.json".to_string())
                        .into(),
                }
            }
        };

        let defaults = PostServiceConfig::default();
        let validation = var("VALIDATION_MODE")
            .and_then(|mode| {
                mode.parse::<ValidationMode>()
                    .inspect_err(|e| tracing::warn!("{e}, using lenient"))
                    .ok()
            })
            .unwrap_or(defaults.validation);

        Self {
            host: var("HOST").unwrap_or_else(|| "127.0.0.1".to_string()),
            port: var("PORT").and_then(|p| p.parse().ok()).unwrap_or(8080),
            storage,
            posts: PostServiceConfig {
                validation,
                max_page_limit: var("MAX_PAGE_LIMIT")
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(defaults.max_page_limit),
            },
        }
    }
}
