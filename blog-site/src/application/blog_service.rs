use std::sync::Arc;

use chrono::{DateTime, SubsecRound, Utc};
use tracing::debug;

use crate::data::post_repository::{NewPost, PostPatch, PostRepository};
use crate::domain::error::DomainError;
use crate::domain::post::{NewPostFields, Post, PostFields};

pub(crate) struct BlogService {
    repo: Arc<dyn PostRepository>,
}

impl BlogService {
    pub(crate) fn new(repo: Arc<dyn PostRepository>) -> Self {
        Self { repo }
    }

    pub(crate) async fn create_post(&self, fields: NewPostFields) -> Result<Post, DomainError> {
        let new_post = NewPost {
            fields: fields.with_defaults(),
            created_at: now(),
        };
        self.repo.create_post(new_post).await
    }

    pub(crate) async fn list_posts(&self) -> Result<Vec<Post>, DomainError> {
        self.repo.list_posts().await
    }

    pub(crate) async fn get_post(&self, id: &str) -> Result<Post, DomainError> {
        self.repo
            .get_post(id)
            .await?
            .ok_or_else(|| DomainError::NotFound(format!("post id: {id}")))
    }

    pub(crate) async fn update_post(&self, id: &str, fields: PostFields) -> Result<(), DomainError> {
        let patch = PostPatch {
            fields,
            updated_at: now(),
        };
        let updated = self.repo.update_post(id, patch).await?;
        if !updated {
            return Err(DomainError::NotFound(format!("post id: {id}")));
        }
        Ok(())
    }

    /// Deleting an id that has no record succeeds.
    pub(crate) async fn delete_post(&self, id: &str) -> Result<(), DomainError> {
        let deleted = self.repo.delete_post(id).await?;
        if !deleted {
            debug!(post_id = id, "delete matched no post");
        }
        Ok(())
    }
}

// BSON dates keep milliseconds only.
fn now() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(3)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::BlogService;
    use crate::data::repositories::memory::post_repository::{
        InMemoryPostRepository, UnreachablePostRepository,
    };
    use crate::domain::error::DomainError;
    use crate::domain::post::{NewPostFields, PostFields};

    fn service() -> BlogService {
        BlogService::new(Arc::new(InMemoryPostRepository::new()))
    }

    fn fields(author: &str, title: &str, body: &str) -> PostFields {
        PostFields {
            author: author.to_string(),
            title: title.to_string(),
            body: body.to_string(),
        }
    }

    #[tokio::test]
    async fn create_post_applies_defaults() {
        let service = service();

        let created = service
            .create_post(NewPostFields::default())
            .await
            .expect("create_post must succeed");

        assert_eq!(created.author, "anon");
        assert_eq!(created.title, "blog title");
        assert_eq!(created.body, "blog body");
    }

    #[tokio::test]
    async fn create_post_stamps_equal_timestamps() {
        let service = service();

        let created = service
            .create_post(NewPostFields::default())
            .await
            .expect("create_post must succeed");

        assert_eq!(created.created_at, created.updated_at);
        assert!(!created.id.is_empty());
    }

    #[tokio::test]
    async fn get_post_returns_created_post() {
        let service = service();
        let created = service
            .create_post(NewPostFields {
                author: Some("alice".to_string()),
                title: Some("Hi".to_string()),
                body: Some("hello".to_string()),
            })
            .await
            .expect("create_post must succeed");

        let fetched = service
            .get_post(&created.id)
            .await
            .expect("get_post must succeed");
        assert_eq!(fetched, created);
    }

    #[tokio::test]
    async fn get_post_returns_not_found_when_missing() {
        let service = service();

        let err = service
            .get_post("000000000000000000000000")
            .await
            .expect_err("post must be missing");
        assert!(matches!(err, DomainError::NotFound(_)));
    }

    #[tokio::test]
    async fn update_post_overwrites_fields_and_keeps_created_at() {
        let service = service();
        let created = service
            .create_post(NewPostFields::default())
            .await
            .expect("create_post must succeed");

        service
            .update_post(&created.id, fields("bob", "", "new body"))
            .await
            .expect("update must succeed");

        let updated = service
            .get_post(&created.id)
            .await
            .expect("get_post must succeed");
        assert_eq!(updated.author, "bob");
        assert_eq!(updated.title, "");
        assert_eq!(updated.body, "new body");
        assert_eq!(updated.created_at, created.created_at);
        assert!(updated.updated_at >= created.updated_at);
    }

    #[tokio::test]
    async fn update_post_returns_not_found_when_missing() {
        let service = service();

        let err = service
            .update_post("missing", fields("a", "b", "c"))
            .await
            .expect_err("update must fail");
        assert!(matches!(err, DomainError::NotFound(_)));
    }

    #[tokio::test]
    async fn delete_post_is_idempotent() {
        let service = service();
        let created = service
            .create_post(NewPostFields::default())
            .await
            .expect("create_post must succeed");

        service
            .delete_post(&created.id)
            .await
            .expect("first delete must succeed");
        let err = service
            .get_post(&created.id)
            .await
            .expect_err("post must be gone");
        assert!(matches!(err, DomainError::NotFound(_)));

        service
            .delete_post(&created.id)
            .await
            .expect("second delete must succeed");
    }

    #[tokio::test]
    async fn list_posts_keeps_insertion_order() {
        let service = service();
        for title in ["first", "second"] {
            service
                .create_post(NewPostFields {
                    title: Some(title.to_string()),
                    ..Default::default()
                })
                .await
                .expect("create_post must succeed");
        }

        let posts = service.list_posts().await.expect("list must succeed");
        let titles: Vec<_> = posts.iter().map(|post| post.title.as_str()).collect();
        assert_eq!(titles, ["first", "second"]);
    }

    #[tokio::test]
    async fn store_failures_stay_distinct_from_not_found() {
        let service = BlogService::new(Arc::new(UnreachablePostRepository));

        let err = service
            .get_post("anything")
            .await
            .expect_err("store must fail");
        assert!(matches!(err, DomainError::Store(_)));

        let err = service
            .delete_post("anything")
            .await
            .expect_err("store must fail");
        assert!(matches!(err, DomainError::Store(_)));
    }
}
