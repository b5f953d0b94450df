//! Followship entity - a directed follow edge

use chrono::{DateTime, Utc};

use crate::value_objects::EntityId;

/// `follower_id` follows `following_id`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Followship {
    pub id: EntityId,
    pub follower_id: EntityId,
    pub following_id: EntityId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Followship {
    pub fn new(id: EntityId, follower_id: EntityId, following_id: EntityId) -> Self {
        let now = Utc::now();
        Self {
            id,
            follower_id,
            following_id,
            created_at: now,
            updated_at: now,
        }
    }

    #[inline]
    pub fn is_self_follow(&self) -> bool {
        self.follower_id == self.following_id
    }
}
