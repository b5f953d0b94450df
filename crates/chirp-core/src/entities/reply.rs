//! Reply entity - a comment on a tweet

use chrono::{DateTime, Utc};

use crate::value_objects::EntityId;

/// Reply entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub id: EntityId,
    pub tweet_id: EntityId,
    pub author_id: EntityId,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Reply {
    pub fn new(id: EntityId, tweet_id: EntityId, author_id: EntityId, content: String) -> Self {
        let now = Utc::now();
        Self {
            id,
            tweet_id,
            author_id,
            content,
            created_at: now,
            updated_at: now,
        }
    }
}
