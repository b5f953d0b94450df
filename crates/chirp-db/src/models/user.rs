//! User database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for the users table.
///
/// The `password` column is never selected into this struct.
#[derive(Debug, Clone, FromRow)]
pub struct UserModel {
    pub id: i64,
    pub account: String,
    pub name: String,
    pub email: String,
    pub introduction: String,
    pub avatar: String,
    pub banner: String,
    pub role: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
