//! Tweet database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for tweets table
#[derive(Debug, Clone, FromRow)]
pub struct TweetModel {
    pub id: i64,
    pub author_id: i64,
    pub description: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
