//! # Quill Core
//!
//! The domain layer of Quill.
//! Entities, business rules and the ports that storage adapters implement.
//! Nothing in this crate performs I/O.

pub mod domain;
pub mod error;
pub mod ports;
pub mod services;

pub use error::{DomainError, RepoError};
