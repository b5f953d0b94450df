//! User entity - an account on the service

use chrono::{DateTime, Utc};

use crate::error::DomainError;
use crate::value_objects::{EntityId, Role, SignInPortal};

/// Avatar assigned when signup leaves it empty
pub const DEFAULT_AVATAR: &str = "https://via.placeholder.com/224";

/// Banner assigned when signup leaves it empty
pub const DEFAULT_BANNER: &str = "https://images.unsplash.com/photo-1580436541340-36b8d0c60bae";

/// Display names are capped at signup
pub const MAX_NAME_CHARS: usize = 50;

/// User entity. The password hash lives only in the store and is never
/// loaded into this type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: EntityId,
    pub account: String,
    pub name: String,
    pub email: String,
    pub introduction: String,
    pub avatar: String,
    pub banner: String,
    pub role: Role,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Create a new front-end user with signup defaults
    pub fn new(id: EntityId, account: String, name: String, email: String) -> Self {
        let now = Utc::now();
        Self {
            id,
            account,
            name,
            email,
            introduction: String::new(),
            avatar: DEFAULT_AVATAR.to_string(),
            banner: DEFAULT_BANNER.to_string(),
            role: Role::User,
            created_at: now,
            updated_at: now,
        }
    }

    /// Same as `new` but with the admin role
    pub fn new_admin(id: EntityId, account: String, name: String, email: String) -> Self {
        Self {
            role: Role::Admin,
            ..Self::new(id, account, name, email)
        }
    }

    #[inline]
    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }

    /// Check that this account may use the given sign-in portal.
    ///
    /// A role mismatch is reported exactly like an unknown account so the
    /// portal does not reveal which accounts exist on the other side.
    pub fn check_portal(&self, portal: SignInPortal) -> Result<(), DomainError> {
        if self.role == portal.accepted_role() {
            Ok(())
        } else {
            Err(DomainError::AccountNotFound(self.account.clone()))
        }
    }

    /// Signup-side check of the display name length
    pub fn validate_name(name: &str) -> Result<(), DomainError> {
        if name.chars().count() > MAX_NAME_CHARS {
            return Err(DomainError::ContentTooLong { max: MAX_NAME_CHARS });
        }
        Ok(())
    }
}
