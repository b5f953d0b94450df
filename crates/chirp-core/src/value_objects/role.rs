//! Account role and the sign-in portal it gates

use serde::{Deserialize, Serialize};
use std::fmt;

/// Account role, fixed at signup
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    User,
    Admin,
}

impl Role {
    /// Stored column value
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Admin => "admin",
        }
    }

    /// Parse the stored column value
    pub fn from_str_opt(s: &str) -> Option<Self> {
        match s {
            "user" => Some(Self::User),
            "admin" => Some(Self::Admin),
            _ => None,
        }
    }

    #[inline]
    pub fn is_admin(&self) -> bool {
        matches!(self, Self::Admin)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which sign-in flow a credential check is running for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignInPortal {
    /// Public front-end
    Front,
    /// Back-office
    Admin,
}

impl SignInPortal {
    /// The only role this portal accepts
    pub fn accepted_role(&self) -> Role {
        match self {
            Self::Front => Role::User,
            Self::Admin => Role::Admin,
        }
    }
}
