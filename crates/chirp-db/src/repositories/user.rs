//! PostgreSQL implementation of UserRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use chirp_core::entities::User;
use chirp_core::traits::{RepoResult, UserRepository};
use chirp_core::value_objects::EntityId;

use crate::mappers::UserInsert;
use crate::models::UserModel;

use super::error::{map_db_error, map_user_conflict};

const USER_COLUMNS: &str =
    "id, account, name, email, introduction, avatar, banner, role, created_at, updated_at";

/// PostgreSQL implementation of UserRepository
#[derive(Clone)]
pub struct PgUserRepository {
    pool: PgPool,
}

impl PgUserRepository {
    /// Create a new PgUserRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: EntityId) -> RepoResult<Option<User>> {
        let sql = format!("SELECT {USER_COLUMNS} FROM users WHERE id = $1");
        let result = sqlx::query_as::<_, UserModel>(&sql)
            .bind(id.into_inner())
            .fetch_optional(&self.pool)
            .await
            .map_err(map_db_error)?;

        result.map(User::try_from).transpose()
    }

    #[instrument(skip(self))]
    async fn find_by_account(&self, account: &str) -> RepoResult<Option<User>> {
        let sql = format!("SELECT {USER_COLUMNS} FROM users WHERE account = $1");
        let result = sqlx::query_as::<_, UserModel>(&sql)
            .bind(account)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_db_error)?;

        result.map(User::try_from).transpose()
    }

    #[instrument(skip(self))]
    async fn find_by_email(&self, email: &str) -> RepoResult<Option<User>> {
        let sql = format!("SELECT {USER_COLUMNS} FROM users WHERE LOWER(email) = LOWER($1)");
        let result = sqlx::query_as::<_, UserModel>(&sql)
            .bind(email)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_db_error)?;

        result.map(User::try_from).transpose()
    }

    #[instrument(skip(self))]
    async fn find_all(&self) -> RepoResult<Vec<User>> {
        let sql = format!("SELECT {USER_COLUMNS} FROM users ORDER BY id");
        let results = sqlx::query_as::<_, UserModel>(&sql)
            .fetch_all(&self.pool)
            .await
            .map_err(map_db_error)?;

        results.into_iter().map(User::try_from).collect()
    }

    #[instrument(skip(self, password_hash))]
    async fn create(&self, user: &User, password_hash: &str) -> RepoResult<User> {
        let insert = UserInsert::new(user, password_hash);
        let sql = format!(
            r"
            INSERT INTO users (account, name, email, password, introduction, avatar, banner, role)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING {USER_COLUMNS}
            "
        );
        let model = sqlx::query_as::<_, UserModel>(&sql)
            .bind(insert.account)
            .bind(insert.name)
            .bind(insert.email)
            .bind(insert.password_hash)
            .bind(insert.introduction)
            .bind(insert.avatar)
            .bind(insert.banner)
            .bind(insert.role)
            .fetch_one(&self.pool)
            .await
            .map_err(map_user_conflict)?;

        User::try_from(model)
    }
}
