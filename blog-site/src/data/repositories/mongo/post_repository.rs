use async_trait::async_trait;
use bson::oid::ObjectId;
use bson::{Document, doc};
use chrono::{DateTime, Utc};
use futures_util::TryStreamExt;
use mongodb::{Collection, Database};
use serde::{Deserialize, Serialize};

use crate::data::post_repository::{NewPost, PostPatch, PostRepository};
use crate::domain::error::DomainError;
use crate::domain::post::{Post, PostFields};

pub(crate) const POSTS_COLLECTION: &str = "blogs";

#[derive(Debug, Clone)]
pub(crate) struct MongoPostRepository {
    collection: Collection<PostDocument>,
}

impl MongoPostRepository {
    pub(crate) fn new(database: &Database) -> Self {
        Self {
            collection: database.collection(POSTS_COLLECTION),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct PostDocument {
    #[serde(rename = "_id")]
    id: ObjectId,
    author: String,
    title: String,
    body: String,
    #[serde(
        rename = "createdAt",
        with = "bson::serde_helpers::chrono_datetime_as_bson_datetime"
    )]
    created_at: DateTime<Utc>,
    #[serde(
        rename = "updatedAt",
        with = "bson::serde_helpers::chrono_datetime_as_bson_datetime"
    )]
    updated_at: DateTime<Utc>,
}

#[async_trait]
impl PostRepository for MongoPostRepository {
    async fn create_post(&self, input: NewPost) -> Result<Post, DomainError> {
        let document = PostDocument {
            id: ObjectId::new(),
            author: input.fields.author,
            title: input.fields.title,
            body: input.fields.body,
            created_at: input.created_at,
            updated_at: input.created_at,
        };

        self.collection
            .insert_one(&document, None)
            .await
            .map_err(map_post_db_error)?;

        map_document_to_post(document)
    }

    async fn list_posts(&self) -> Result<Vec<Post>, DomainError> {
        let documents: Vec<PostDocument> = self
            .collection
            .find(None, None)
            .await
            .map_err(map_post_db_error)?
            .try_collect()
            .await
            .map_err(map_post_db_error)?;

        documents.into_iter().map(map_document_to_post).collect()
    }

    async fn get_post(&self, id: &str) -> Result<Option<Post>, DomainError> {
        let Some(filter) = id_filter(id) else {
            return Ok(None);
        };

        let document = self
            .collection
            .find_one(filter, None)
            .await
            .map_err(map_post_db_error)?;

        document.map(map_document_to_post).transpose()
    }

    async fn update_post(&self, id: &str, patch: PostPatch) -> Result<bool, DomainError> {
        let Some(filter) = id_filter(id) else {
            return Ok(false);
        };

        let update = doc! {
            "$set": {
                "author": patch.fields.author,
                "title": patch.fields.title,
                "body": patch.fields.body,
                "updatedAt": bson::DateTime::from_chrono(patch.updated_at),
            }
        };

        let result = self
            .collection
            .update_one(filter, update, None)
            .await
            .map_err(map_post_db_error)?;

        Ok(result.matched_count > 0)
    }

    async fn delete_post(&self, id: &str) -> Result<bool, DomainError> {
        let Some(filter) = id_filter(id) else {
            return Ok(false);
        };

        let result = self
            .collection
            .delete_one(filter, None)
            .await
            .map_err(map_post_db_error)?;

        Ok(result.deleted_count > 0)
    }
}

fn id_filter(id: &str) -> Option<Document> {
    ObjectId::parse_str(id).ok().map(|oid| doc! { "_id": oid })
}

fn map_document_to_post(document: PostDocument) -> Result<Post, DomainError> {
    Post::new(
        document.id.to_hex(),
        PostFields {
            author: document.author,
            title: document.title,
            body: document.body,
        },
        document.created_at,
        document.updated_at,
    )
}

fn map_post_db_error(err: mongodb::error::Error) -> DomainError {
    DomainError::Store(err.to_string())
}
