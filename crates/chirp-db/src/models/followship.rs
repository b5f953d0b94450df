//! Followship database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for followships table
#[derive(Debug, Clone, FromRow)]
pub struct FollowshipModel {
    pub id: i64,
    pub follower_id: i64,
    pub following_id: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

