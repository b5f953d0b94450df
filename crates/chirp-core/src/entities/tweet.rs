//! Tweet entity - a short post owned by one user

use chrono::{DateTime, Utc};

use crate::error::DomainError;
use crate::value_objects::EntityId;

/// Upper bound on a tweet's description, in characters
pub const MAX_DESCRIPTION_CHARS: usize = 140;

/// Tweet entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tweet {
    pub id: EntityId,
    pub author_id: EntityId,
    pub description: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Tweet {
    /// Create a new Tweet, enforcing the description bound
    pub fn new(id: EntityId, author_id: EntityId, description: String) -> Result<Self, DomainError> {
        Self::validate_description(&description)?;
        let now = Utc::now();
        Ok(Self {
            id,
            author_id,
            description,
            created_at: now,
            updated_at: now,
        })
    }

    /// Check the description is non-blank and within bounds
    pub fn validate_description(description: &str) -> Result<(), DomainError> {
        if description.trim().is_empty() {
            return Err(DomainError::ValidationError(
                "description must not be empty".to_string(),
            ));
        }
        if description.chars().count() > MAX_DESCRIPTION_CHARS {
            return Err(DomainError::ContentTooLong {
                max: MAX_DESCRIPTION_CHARS,
            });
        }
        Ok(())
    }
}
