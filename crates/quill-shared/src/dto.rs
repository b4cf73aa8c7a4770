//! Data Transfer Objects - request/response types for the APIs.
//!
//! Request fields are optional so that missing values surface as domain
//! validation errors rather than deserialization failures.

use serde::{Deserialize, Serialize};

/// Request to create a post.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreatePostRequest {
    pub title: Option<String>,
    pub content: Option<String>,
    pub summary: Option<String>,
    pub author_id: Option<String>,
    pub categories: Option<Vec<String>>,
}

/// Partial post update. Fields outside this set are ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdatePostRequest {
    pub title: Option<String>,
    pub content: Option<String>,
    pub summary: Option<String>,
    pub author_id: Option<String>,
    pub categories: Option<Vec<String>>,
    pub status: Option<String>,
}

/// Query string of `GET /posts`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListPostsQuery {
    pub search: Option<String>,
    #[serde(rename = "sortBy", alias = "sort_by")]
    pub sort_by: Option<String>,
    #[serde(rename = "sortOrder", alias = "sort_order")]
    pub sort_order: Option<String>,
    pub page: Option<usize>,
    pub limit: Option<usize>,
}

/// Response of a like toggle.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LikeResponse<P> {
    pub message: String,
    pub post: P,
}

/// Request to register a user.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateUserRequest {
    pub username: Option<String>,
    pub email: Option<String>,
}

/// Request to record an expense. `amount` may be a number or a numeric string.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateExpenseRequest {
    pub name: Option<String>,
    pub amount: Option<serde_json::Value>,
}

/// Liveness probe payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
    pub version: String,
}
