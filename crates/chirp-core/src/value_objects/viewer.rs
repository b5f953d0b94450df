//! Viewer - who is asking for a view
//!
//! Supplied by the identity collaborator for every call that computes
//! viewer-relative state. There is no implicit "current user": an anonymous
//! viewer is a valid input and simply disables viewer-relative fields.

use super::{EntityId, Role};

/// The requester of a view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Viewer {
    #[default]
    Anonymous,
    Authenticated { id: EntityId, role: Role },
}

impl Viewer {
    /// An authenticated front-end user
    pub fn user(id: EntityId) -> Self {
        Self::Authenticated { id, role: Role::User }
    }

    /// An authenticated back-office operator
    pub fn admin(id: EntityId) -> Self {
        Self::Authenticated { id, role: Role::Admin }
    }

    /// Viewer id if authenticated
    #[inline]
    pub fn id(&self) -> Option<EntityId> {
        match self {
            Self::Anonymous => None,
            Self::Authenticated { id, .. } => Some(*id),
        }
    }

    #[inline]
    pub fn role(&self) -> Option<Role> {
        match self {
            Self::Anonymous => None,
            Self::Authenticated { role, .. } => Some(*role),
        }
    }

    #[inline]
    pub fn is_anonymous(&self) -> bool {
        matches!(self, Self::Anonymous)
    }

    #[inline]
    pub fn is_admin(&self) -> bool {
        self.role().is_some_and(|r| r.is_admin())
    }
}
