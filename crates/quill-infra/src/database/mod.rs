//! Record repositories - JSON collection files and an in-memory fallback.

mod collection;
mod memory;

#[cfg(feature = "json-file")]
mod json_file;

pub use memory::{InMemoryPostRepository, InMemoryRepository, InMemoryUserRepository};

#[cfg(feature = "json-file")]
pub use json_file::{JsonFilePostRepository, JsonFileRepository, JsonFileUserRepository};
