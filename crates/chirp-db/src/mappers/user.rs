//! User entity <-> model mapper

use chirp_core::entities::User;
use chirp_core::error::DomainError;
use chirp_core::value_objects::{EntityId, Role};

use crate::models::UserModel;

/// Convert UserModel to User entity. Fails if the role column holds a value
/// the domain does not know.
impl TryFrom<UserModel> for User {
    type Error = DomainError;

    fn try_from(model: UserModel) -> Result<Self, Self::Error> {
        let role = Role::from_str_opt(&model.role).ok_or_else(|| {
            DomainError::DatabaseError(format!(
                "user {} has unknown role '{}'",
                model.id, model.role
            ))
        })?;

        Ok(User {
            id: EntityId::new(model.id),
            account: model.account,
            name: model.name,
            email: model.email,
            introduction: model.introduction,
            avatar: model.avatar,
            banner: model.banner,
            role,
            created_at: model.created_at,
            updated_at: model.updated_at,
        })
    }
}

/// Convert User entity reference to values for database insertion
pub struct UserInsert<'a> {
    pub account: &'a str,
    pub name: &'a str,
    pub email: &'a str,
    pub password_hash: &'a str,
    pub introduction: &'a str,
    pub avatar: &'a str,
    pub banner: &'a str,
    pub role: &'static str,
}

impl<'a> UserInsert<'a> {
    pub fn new(user: &'a User, password_hash: &'a str) -> Self {
        Self {
            account: &user.account,
            name: &user.name,
            email: &user.email,
            password_hash,
            introduction: &user.introduction,
            avatar: &user.avatar,
            banner: &user.banner,
            role: user.role.as_str(),
        }
    }
}
