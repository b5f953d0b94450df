//! Reply database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for replies table
#[derive(Debug, Clone, FromRow)]
pub struct ReplyModel {
    pub id: i64,
    pub tweet_id: i64,
    pub author_id: i64,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
