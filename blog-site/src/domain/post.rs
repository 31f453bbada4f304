use chrono::{DateTime, Utc};

use super::error::DomainError;

pub(crate) const DEFAULT_AUTHOR: &str = "anon";
pub(crate) const DEFAULT_TITLE: &str = "blog title";
pub(crate) const DEFAULT_BODY: &str = "blog body";

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Post {
    pub(crate) id: String,
    pub(crate) author: String,
    pub(crate) title: String,
    pub(crate) body: String,
    pub(crate) created_at: DateTime<Utc>,
    pub(crate) updated_at: DateTime<Utc>,
}

/// Fields submitted when creating a post. Any of them may be missing.
#[derive(Debug, Clone, Default)]
pub(crate) struct NewPostFields {
    pub(crate) author: Option<String>,
    pub(crate) title: Option<String>,
    pub(crate) body: Option<String>,
}

/// Fields written by an update. All three overwrite the stored values as-is.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct PostFields {
    pub(crate) author: String,
    pub(crate) title: String,
    pub(crate) body: String,
}

impl NewPostFields {
    /// Substitutes defaults for missing fields. Empty strings count as missing.
    pub(crate) fn with_defaults(self) -> PostFields {
        PostFields {
            author: or_default(self.author, DEFAULT_AUTHOR),
            title: or_default(self.title, DEFAULT_TITLE),
            body: or_default(self.body, DEFAULT_BODY),
        }
    }
}

impl Post {
    pub(crate) fn new(
        id: impl Into<String>,
        fields: PostFields,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Result<Self, DomainError> {
        if updated_at < created_at {
            return Err(DomainError::Store(
                "updated_at must be >= created_at".to_string(),
            ));
        }

        Ok(Self {
            id: id.into(),
            author: fields.author,
            title: fields.title,
            body: fields.body,
            created_at,
            updated_at,
        })
    }
}

fn or_default(value: Option<String>, default: &str) -> String {
    match value {
        Some(value) if !value.is_empty() => value,
        _ => default.to_string(),
    }
}
