//! Error handling utilities for repositories

use chirp_core::error::DomainError;
use chirp_core::value_objects::EntityId;
use sqlx::Error as SqlxError;

/// Convert SQLx error to DomainError
pub fn map_db_error(e: SqlxError) -> DomainError {
    DomainError::DatabaseError(e.to_string())
}

/// Map a unique violation on the users table to the matching conflict
pub fn map_user_conflict(e: SqlxError) -> DomainError {
    if let Some(db_err) = e.as_database_error() {
        if db_err.is_unique_violation() {
            return match db_err.constraint() {
                Some(name) if name.contains("email") => DomainError::EmailAlreadyExists,
                _ => DomainError::AccountAlreadyExists,
            };
        }
    }
    DomainError::DatabaseError(e.to_string())
}

/// Map a foreign key violation on an activity row to the missing parent
pub fn map_reference_error(e: SqlxError, tweet_id: EntityId, user_id: EntityId) -> DomainError {
    if let Some(db_err) = e.as_database_error() {
        if db_err.is_foreign_key_violation() {
            return match db_err.constraint() {
                Some(name) if name.contains("tweet_id") => DomainError::TweetNotFound(tweet_id),
                _ => DomainError::UserNotFound(user_id),
            };
        }
    }
    DomainError::DatabaseError(e.to_string())
}
