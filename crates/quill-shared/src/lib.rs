//! # Quill Shared
//!
//! Wire types shared by the Quill HTTP services.

pub mod dto;
pub mod response;

pub use response::ErrorResponse;
