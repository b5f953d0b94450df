//! Like entity - a (user, tweet) interest marker
//!
//! The store does not enforce one like per (user, tweet) pair; counts are
//! counts of rows, and writers decide whether to deduplicate.

use chrono::{DateTime, Utc};

use crate::value_objects::EntityId;

/// Like entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Like {
    pub id: EntityId,
    pub tweet_id: EntityId,
    pub user_id: EntityId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Like {
    pub fn new(id: EntityId, tweet_id: EntityId, user_id: EntityId) -> Self {
        let now = Utc::now();
        Self {
            id,
            tweet_id,
            user_id,
            created_at: now,
            updated_at: now,
        }
    }

    /// Whether this like marks the given (tweet, user) pair
    #[inline]
    pub fn marks(&self, tweet_id: EntityId, user_id: EntityId) -> bool {
        self.tweet_id == tweet_id && self.user_id == user_id
    }
}
