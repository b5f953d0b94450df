//! Like database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for likes table
#[derive(Debug, Clone, FromRow)]
pub struct LikeModel {
    pub id: i64,
    pub tweet_id: i64,
    pub user_id: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
