//! EntityId - primary key shared by every table in the store
//!
//! Rows are keyed by store-assigned positive integers. The newtype keeps ids
//! from being mixed up with counts, which are plain `i64` as well.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Store-assigned record identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct EntityId(i64);

impl EntityId {
    /// Create an EntityId from a raw i64 value
    #[inline]
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    /// Get the inner i64 value
    #[inline]
    pub const fn into_inner(self) -> i64 {
        self.0
    }

    /// Ids are assigned from 1 upwards; zero means "not yet persisted"
    #[inline]
    pub const fn is_unassigned(&self) -> bool {
        self.0 <= 0
    }

    /// Parse from a path segment or CLI argument
    pub fn parse(s: &str) -> Result<Self, EntityIdParseError> {
        let id = s
            .trim()
            .parse::<i64>()
            .map_err(|_| EntityIdParseError::InvalidFormat)?;
        if id <= 0 {
            return Err(EntityIdParseError::NotPositive);
        }
        Ok(Self(id))
    }
}

/// Error when parsing an EntityId from string
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum EntityIdParseError {
    #[error("invalid id format")]
    InvalidFormat,

    #[error("id must be a positive integer")]
    NotPositive,
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for EntityId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl From<EntityId> for i64 {
    fn from(id: EntityId) -> Self {
        id.0
    }
}

impl std::str::FromStr for EntityId {
    type Err = EntityIdParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        EntityId::parse(s)
    }
}

// Serialized as a bare number, matching the integer keys of the store
impl Serialize for EntityId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_i64(self.0)
    }
}

impl<'de> Deserialize<'de> for EntityId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde::de::{self, Visitor};

        struct EntityIdVisitor;

        impl Visitor<'_> for EntityIdVisitor {
            type Value = EntityId;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("an integer or numeric string id")
            }

            fn visit_i64<E>(self, value: i64) -> Result<EntityId, E>
            where
                E: de::Error,
            {
                Ok(EntityId(value))
            }

            fn visit_u64<E>(self, value: u64) -> Result<EntityId, E>
            where
                E: de::Error,
            {
                i64::try_from(value)
                    .map(EntityId)
                    .map_err(|_| de::Error::custom("id out of range"))
            }

            fn visit_str<E>(self, value: &str) -> Result<EntityId, E>
            where
                E: de::Error,
            {
                EntityId::parse(value).map_err(de::Error::custom)
            }
        }

        deserializer.deserialize_any(EntityIdVisitor)
    }
}
