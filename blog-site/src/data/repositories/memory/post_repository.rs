use std::sync::RwLock;

use async_trait::async_trait;
use bson::oid::ObjectId;

use crate::data::post_repository::{NewPost, PostPatch, PostRepository};
use crate::domain::error::DomainError;
use crate::domain::post::Post;

/// Insertion-ordered store used by service and router tests.
#[derive(Debug, Default)]
pub(crate) struct InMemoryPostRepository {
    posts: RwLock<Vec<Post>>,
}

impl InMemoryPostRepository {
    pub(crate) fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PostRepository for InMemoryPostRepository {
    async fn create_post(&self, input: NewPost) -> Result<Post, DomainError> {
        let post = Post::new(
            ObjectId::new().to_hex(),
            input.fields,
            input.created_at,
            input.created_at,
        )?;
        self.posts
            .write()
            .expect("posts lock poisoned")
            .push(post.clone());
        Ok(post)
    }

    async fn list_posts(&self) -> Result<Vec<Post>, DomainError> {
        Ok(self.posts.read().expect("posts lock poisoned").clone())
    }

    async fn get_post(&self, id: &str) -> Result<Option<Post>, DomainError> {
        Ok(self
            .posts
            .read()
            .expect("posts lock poisoned")
            .iter()
            .find(|post| post.id == id)
            .cloned())
    }

    async fn update_post(&self, id: &str, patch: PostPatch) -> Result<bool, DomainError> {
        let mut posts = self.posts.write().expect("posts lock poisoned");
        let Some(post) = posts.iter_mut().find(|post| post.id == id) else {
            return Ok(false);
        };

        post.author = patch.fields.author;
        post.title = patch.fields.title;
        post.body = patch.fields.body;
        post.updated_at = patch.updated_at;
        Ok(true)
    }

    async fn delete_post(&self, id: &str) -> Result<bool, DomainError> {
        let mut posts = self.posts.write().expect("posts lock poisoned");
        let before = posts.len();
        posts.retain(|post| post.id != id);
        Ok(posts.len() < before)
    }
}

/// Store whose every call fails, for exercising error mapping.
#[derive(Debug, Default)]
pub(crate) struct UnreachablePostRepository;

#[async_trait]
impl PostRepository for UnreachablePostRepository {
    async fn create_post(&self, _input: NewPost) -> Result<Post, DomainError> {
        Err(unreachable_store())
    }

    async fn list_posts(&self) -> Result<Vec<Post>, DomainError> {
        Err(unreachable_store())
    }

    async fn get_post(&self, _id: &str) -> Result<Option<Post>, DomainError> {
        Err(unreachable_store())
    }

    async fn update_post(&self, _id: &str, _patch: PostPatch) -> Result<bool, DomainError> {
        Err(unreachable_store())
    }

    async fn delete_post(&self, _id: &str) -> Result<bool, DomainError> {
        Err(unreachable_store())
    }
}

fn unreachable_store() -> DomainError {
    DomainError::Store("connection refused".to_string())
}
