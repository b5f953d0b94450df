//! Domain errors - error types for the domain layer

use thiserror::Error;

use crate::value_objects::EntityId;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("User not found: {0}")]
    UserNotFound(EntityId),

    #[error("Tweet not found: {0}")]
    TweetNotFound(EntityId),

    #[error("Account does not exist: {0}")]
    AccountNotFound(String),

    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Content too long: max {max} characters")]
    ContentTooLong { max: usize },

    // =========================================================================
    // Conflict Errors
    // =========================================================================
    #[error("Account already in use")]
    AccountAlreadyExists,

    #[error("Email already in use")]
    EmailAlreadyExists,

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl DomainError {
    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            // Not Found
            Self::UserNotFound(_) => "UNKNOWN_USER",
            Self::TweetNotFound(_) => "UNKNOWN_TWEET",
            Self::AccountNotFound(_) => "UNKNOWN_ACCOUNT",

            // Validation
            Self::ValidationError(_) => "VALIDATION_ERROR",
            Self::ContentTooLong { .. } => "CONTENT_TOO_LONG",

            // Conflict
            Self::AccountAlreadyExists => "ACCOUNT_ALREADY_EXISTS",
            Self::EmailAlreadyExists => "EMAIL_ALREADY_EXISTS",

            // Infrastructure
            Self::DatabaseError(_) => "DATABASE_ERROR",
            Self::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::UserNotFound(_) | Self::TweetNotFound(_) | Self::AccountNotFound(_)
        )
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::ValidationError(_) | Self::ContentTooLong { .. })
    }

    /// Check if this is a conflict error
    pub fn is_conflict(&self) -> bool {
        matches!(self, Self::AccountAlreadyExists | Self::EmailAlreadyExists)
    }

    /// Check if this came from the storage layer
    pub fn is_infrastructure(&self) -> bool {
        matches!(self, Self::DatabaseError(_) | Self::InternalError(_))
    }
}
