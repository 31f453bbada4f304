use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::domain::error::DomainError;
use crate::domain::post::{Post, PostFields};

#[derive(Debug, Clone)]
pub(crate) struct NewPost {
    pub(crate) fields: PostFields,
    pub(crate) created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub(crate) struct PostPatch {
    pub(crate) fields: PostFields,
    pub(crate) updated_at: DateTime<Utc>,
}

/// Persistence boundary for blog posts.
///
/// Ids are opaque strings. An id the backend cannot interpret is treated the
/// same as an id with no record.
#[async_trait]
pub(crate) trait PostRepository: Send + Sync {
    /// Persists a new post with `created_at == updated_at` and a fresh id.
    async fn create_post(&self, input: NewPost) -> Result<Post, DomainError>;
    async fn list_posts(&self) -> Result<Vec<Post>, DomainError>;
    async fn get_post(&self, id: &str) -> Result<Option<Post>, DomainError>;
    /// Returns `false` when no record matched `id`.
    async fn update_post(&self, id: &str, patch: PostPatch) -> Result<bool, DomainError>;
    /// Returns `false` when no record matched `id`.
    async fn delete_post(&self, id: &str) -> Result<bool, DomainError>;
}
