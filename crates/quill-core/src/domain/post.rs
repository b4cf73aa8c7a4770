use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::record::Record;
use super::slug::slugify;
use crate::error::DomainError;

/// Maximum summary length, counted in characters.
pub const SUMMARY_MAX_LEN: usize = 200;

/// Publication state of a post.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PostStatus {
    #[default]
    Draft,
    Published,
    Archived,
}

impl PostStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PostStatus::Draft => "draft",
            PostStatus::Published => "published",
            PostStatus::Archived => "archived",
        }
    }
}

impl FromStr for PostStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "draft" => Ok(PostStatus::Draft),
            "published" => Ok(PostStatus::Published),
            "archived" => Ok(PostStatus::Archived),
            other => Err(DomainError::validation(format!(
                "Unknown status '{other}', expected draft, published or archived"
            ))),
        }
    }
}

impl fmt::Display for PostStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Post entity - a blog article with engagement counters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    pub id: String,
    pub title: String,
    pub slug: String,
    pub summary: String,
    pub content: String,
    pub author_id: String,
    pub categories: Vec<String>,
    #[serde(default)]
    pub status: PostStatus,
    #[serde(default)]
    pub views: u64,
    #[serde(default)]
    pub likes: u64,
    #[serde(default)]
    pub liked_by: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default)]
    pub version: u64,
}

/// Fields submitted to create a post. Presence is checked by the post service.
#[derive(Debug, Clone, Default)]
pub struct NewPost {
    pub title: Option<String>,
    pub content: Option<String>,
    pub summary: Option<String>,
    pub author_id: Option<String>,
    pub categories: Option<Vec<String>>,
}

/// Partial update of the editable post fields.
#[derive(Debug, Clone, Default)]
pub struct PostPatch {
    pub title: Option<String>,
    pub content: Option<String>,
    pub summary: Option<String>,
    pub author_id: Option<String>,
    pub categories: Option<Vec<String>>,
    pub status: Option<PostStatus>,
}

/// Result of toggling a like.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LikeOutcome {
    Liked,
    Unliked,
}

impl LikeOutcome {
    pub fn message(&self) -> &'static str {
        match self {
            LikeOutcome::Liked => "Liked",
            LikeOutcome::Unliked => "Unliked",
        }
    }
}

impl Post {
    /// Create a draft post with a generated ID, derived slug and zeroed counters.
    pub fn new(
        title: String,
        content: String,
        summary: String,
        author_id: String,
        categories: Vec<String>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4().to_string(),
            slug: slugify(&title),
            title,
            summary,
            content,
            author_id,
            categories,
            status: PostStatus::Draft,
            views: 0,
            likes: 0,
            liked_by: Vec::new(),
            created_at: now,
            updated_at: now,
            version: 0,
        }
    }

    /// Merge a patch into the post. A new title re-derives the slug.
    pub fn apply(&mut self, patch: &PostPatch) {
        if let Some(title) = &patch.title {
            self.title = title.clone();
            self.slug = slugify(title);
        }
        if let Some(content) = &patch.content {
            self.content = content.clone();
        }
        if let Some(summary) = &patch.summary {
            self.summary = summary.clone();
        }
        if let Some(author_id) = &patch.author_id {
            self.author_id = author_id.clone();
        }
        if let Some(categories) = &patch.categories {
            self.categories = categories.clone();
        }
        if let Some(status) = patch.status {
            self.status = status;
        }
        self.updated_at = Utc::now();
    }

    pub fn record_view(&mut self) {
        self.views = self.views.saturating_add(1);
    }

    /// Add the user to `liked_by`, or remove them if they already liked the post.
    pub fn toggle_like(&mut self, user_id: &str) -> LikeOutcome {
        if let Some(pos) = self.liked_by.iter().position(|uid| uid == user_id) {
            self.liked_by.remove(pos);
            self.likes = self.likes.saturating_sub(1);
            LikeOutcome::Unliked
        } else {
            self.liked_by.push(user_id.to_string());
            self.likes = self.likes.saturating_add(1);
            LikeOutcome::Liked
        }
    }

    /// Case-insensitive substring match over title, content, summary and categories.
    ///
    /// `needle` must already be lowercased.
    pub fn matches(&self, needle: &str) -> bool {
        let hit = |field: &str| field.to_lowercase().contains(needle);
        hit(&self.title)
            || hit(&self.content)
            || hit(&self.summary)
            || self.categories.iter().any(|c| hit(c))
    }
}

impl Record for Post {
    const KIND: &'static str = "Post";

    fn id(&self) -> &str {
        &self.id
    }

    fn version(&self) -> u64 {
        self.version
    }

    fn set_version(&mut self, version: u64) {
        self.version = version;
    }

    fn unique_key(&self) -> Option<(&'static str, &str)> {
        Some(("slug", &self.slug))
    }
}

pub(crate) fn validate_summary(summary: &str) -> Result<(), DomainError> {
    if summary.chars().count() > SUMMARY_MAX_LEN {
        return Err(DomainError::validation(format!(
            "Summary max length is {SUMMARY_MAX_LEN} characters"
        )));
    }
    Ok(())
}
