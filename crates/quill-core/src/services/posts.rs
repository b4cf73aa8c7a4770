//! Post service - creation, editing, listing and engagement counters.

use std::sync::Arc;

use crate::domain::{
    LikeOutcome, NewPost, Post, PostPage, PostPatch, PostQuery, Record, User, slugify,
    validate_summary,
};
use crate::error::{DomainError, RepoError};
use crate::ports::{Mutation, PostRepository, UserRepository};

use super::ValidationMode;

/// Tunables for [`PostService`].
#[derive(Debug, Clone)]
pub struct PostServiceConfig {
    pub validation: ValidationMode,
    /// Upper bound applied to the `limit` of list queries.
    pub max_page_limit: usize,
}

impl Default for PostServiceConfig {
    fn default() -> Self {
        Self {
            validation: ValidationMode::Lenient,
            max_page_limit: 100,
        }
    }
}

/// Business rules for posts.
#[derive(Clone)]
pub struct PostService {
    posts: Arc<dyn PostRepository>,
    users: Arc<dyn UserRepository>,
    config: PostServiceConfig,
}

impl PostService {
    pub fn new(
        posts: Arc<dyn PostRepository>,
        users: Arc<dyn UserRepository>,
        config: PostServiceConfig,
    ) -> Self {
        Self {
            posts,
            users,
            config,
        }
    }

    pub fn config(&self) -> &PostServiceConfig {
        &self.config
    }

    /// Create a draft post.
    ///
    /// Checks run in order: required fields, summary length, slug
    /// availability, author existence.
    pub async fn create(&self, input: NewPost) -> Result<Post, DomainError> {
        let (Some(title), Some(content), Some(summary), Some(author_id), Some(categories)) = (
            non_empty(input.title),
            non_empty(input.content),
            non_empty(input.summary),
            non_empty(input.author_id),
            input.categories,
        ) else {
            return Err(DomainError::validation(
                "Title, content, summary, author_id and categories are required",
            ));
        };
        if self.config.validation == ValidationMode::Strict {
            validate_categories(&categories)?;
        }
        validate_summary(&summary)?;
        validate_title(&title)?;

        let post = Post::new(title, content, summary, author_id, categories);

        if self.posts.find_by_slug(&post.slug).await?.is_some() {
            return Err(DomainError::Duplicate(format!(
                "slug '{}' is already taken",
                post.slug
            )));
        }
        if !self.users.exists(&post.author_id).await? {
            return Err(DomainError::validation("Author not found"));
        }

        let saved = self.posts.save(post).await?;
        tracing::info!(post_id = %saved.id, slug = %saved.slug, "Post created");
        Ok(saved)
    }

    /// Look a post up by ID, falling back to its slug.
    pub async fn resolve(&self, identifier: &str) -> Result<Post, DomainError> {
        if let Some(post) = self.posts.find_by_id(identifier).await? {
            return Ok(post);
        }
        self.posts
            .find_by_slug(identifier)
            .await?
            .ok_or_else(|| DomainError::not_found(Post::KIND, identifier))
    }

    /// Merge a partial update into the post and refresh `updated_at`.
    ///
    /// Checks run in order: identifier, new slug, summary, then the
    /// strict-mode author and category checks.
    pub async fn update(&self, identifier: &str, patch: PostPatch) -> Result<Post, DomainError> {
        let post = self.resolve(identifier).await?;
        if let Some(title) = &patch.title {
            validate_title(title)?;
            let slug = slugify(title);
            if let Some(other) = self.posts.find_by_slug(&slug).await? {
                if other.id != post.id {
                    return Err(DomainError::Duplicate(format!(
                        "slug '{slug}' is already taken"
                    )));
                }
            }
        }
        if let Some(summary) = &patch.summary {
            validate_summary(summary)?;
        }
        if self.config.validation == ValidationMode::Strict {
            if let Some(categories) = &patch.categories {
                validate_categories(categories)?;
            }
            if let Some(author_id) = &patch.author_id {
                if !self.users.exists(author_id).await? {
                    return Err(DomainError::validation("Author not found"));
                }
            }
        }

        let post = self
            .apply(&post.id, identifier, Box::new(move |post: &mut Post| post.apply(&patch)))
            .await?;
        tracing::info!(post_id = %post.id, version = post.version, "Post updated");
        Ok(post)
    }

    pub async fn delete(&self, identifier: &str) -> Result<(), DomainError> {
        let post = self.resolve(identifier).await?;
        match self.posts.delete(&post.id).await {
            Ok(()) => {
                tracing::info!(post_id = %post.id, "Post deleted");
                Ok(())
            }
            Err(RepoError::NotFound) => Err(DomainError::not_found(Post::KIND, identifier)),
            Err(err) => Err(err.into()),
        }
    }

    /// Search, sort and paginate the collection.
    pub async fn find(&self, query: &PostQuery) -> Result<PostPage, DomainError> {
        let posts = self.posts.find_all().await?;
        Ok(query.apply(posts))
    }

    /// Fetch a post, counting the read as a view.
    pub async fn find_one(&self, identifier: &str) -> Result<Post, DomainError> {
        let post = self.resolve(identifier).await?;
        let post = self
            .apply(&post.id, identifier, Box::new(Post::record_view))
            .await?;
        tracing::debug!(post_id = %post.id, views = post.views, "Post viewed");
        Ok(post)
    }

    /// Like the post on behalf of the user, or undo an earlier like.
    pub async fn toggle_like(
        &self,
        identifier: &str,
        user_id: &str,
    ) -> Result<(Post, LikeOutcome), DomainError> {
        let post = self.resolve(identifier).await?;
        if !self.users.exists(user_id).await? {
            return Err(DomainError::not_found(User::KIND, user_id));
        }

        let liker = user_id.to_string();
        let post = self
            .apply(
                &post.id,
                identifier,
                Box::new(move |post: &mut Post| {
                    post.toggle_like(&liker);
                }),
            )
            .await?;
        let outcome = if post.liked_by.iter().any(|uid| uid == user_id) {
            LikeOutcome::Liked
        } else {
            LikeOutcome::Unliked
        };
        tracing::info!(
            post_id = %post.id,
            user_id,
            likes = post.likes,
            outcome = outcome.message(),
            "Post like toggled"
        );
        Ok((post, outcome))
    }

    /// Run `change` on the stored post inside the repository's write lock.
    ///
    /// A post deleted since it was resolved is reported as not found.
    async fn apply(
        &self,
        id: &str,
        identifier: &str,
        change: Mutation<Post>,
    ) -> Result<Post, DomainError> {
        match self.posts.mutate(id, change).await {
            Ok(post) => Ok(post),
            Err(RepoError::NotFound) => Err(DomainError::not_found(Post::KIND, identifier)),
            Err(err) => Err(err.into()),
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

fn validate_title(title: &str) -> Result<(), DomainError> {
    if slugify(title).is_empty() {
        return Err(DomainError::validation(
            "Title must contain at least one letter or digit",
        ));
    }
    Ok(())
}

fn validate_categories(categories: &[String]) -> Result<(), DomainError> {
    if categories.is_empty() || categories.iter().any(|c| c.trim().is_empty()) {
        return Err(DomainError::validation(
            "Categories must be a non-empty list of non-blank names",
        ));
    }
    Ok(())
}
