//! PostgreSQL implementation of FollowshipRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use chirp_core::entities::Followship;
use chirp_core::error::DomainError;
use chirp_core::traits::{FollowshipRepository, RepoResult};
use chirp_core::value_objects::EntityId;

use crate::mappers::FollowshipInsert;
use crate::models::FollowshipModel;

use super::error::map_db_error;

/// PostgreSQL implementation of FollowshipRepository
#[derive(Clone)]
pub struct PgFollowshipRepository {
    pool: PgPool,
}

impl PgFollowshipRepository {
    /// Create a new PgFollowshipRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl FollowshipRepository for PgFollowshipRepository {
    #[instrument(skip(self, followship))]
    async fn create(&self, followship: &Followship) -> RepoResult<Followship> {
        if followship.is_self_follow() {
            return Err(DomainError::ValidationError(
                "users cannot follow themselves".to_string(),
            ));
        }
        let insert = FollowshipInsert::new(followship);

        let model = sqlx::query_as::<_, FollowshipModel>(
            r"
            INSERT INTO followships (follower_id, following_id)
            VALUES ($1, $2)
            RETURNING id, follower_id, following_id, created_at, updated_at
            ",
        )
        .bind(insert.follower_id)
        .bind(insert.following_id)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(Followship::from(model))
    }

    #[instrument(skip(self))]
    async fn delete(&self, follower_id: EntityId, following_id: EntityId) -> RepoResult<u64> {
        let result =
            sqlx::query("DELETE FROM followships WHERE follower_id = $1 AND following_id = $2")
                .bind(follower_id.into_inner())
                .bind(following_id.into_inner())
                .execute(&self.pool)
                .await
                .map_err(map_db_error)?;

        Ok(result.rows_affected())
    }
}
