//! PostgreSQL implementation of LikeRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use chirp_core::entities::Like;
use chirp_core::traits::{LikeRepository, RepoResult};
use chirp_core::value_objects::EntityId;

use crate::mappers::LikeInsert;
use crate::models::LikeModel;

use super::error::{map_db_error, map_reference_error};

/// PostgreSQL implementation of LikeRepository
#[derive(Clone)]
pub struct PgLikeRepository {
    pool: PgPool,
}

impl PgLikeRepository {
    /// Create a new PgLikeRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl LikeRepository for PgLikeRepository {
    #[instrument(skip(self))]
    async fn find_by_user(&self, user_id: EntityId) -> RepoResult<Vec<Like>> {
        let results = sqlx::query_as::<_, LikeModel>(
            r"
            SELECT id, tweet_id, user_id, created_at, updated_at
            FROM likes
            WHERE user_id = $1
            ORDER BY created_at DESC, id DESC
            ",
        )
        .bind(user_id.into_inner())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Like::from).collect())
    }

    #[instrument(skip(self, like), fields(tweet_id = %like.tweet_id, user_id = %like.user_id))]
    async fn create(&self, like: &Like) -> RepoResult<Like> {
        let insert = LikeInsert::new(like);

        let model = sqlx::query_as::<_, LikeModel>(
            r"
            INSERT INTO likes (tweet_id, user_id)
            VALUES ($1, $2)
            RETURNING id, tweet_id, user_id, created_at, updated_at
            ",
        )
        .bind(insert.tweet_id)
        .bind(insert.user_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_reference_error(e, like.tweet_id, like.user_id))?;

        Ok(Like::from(model))
    }

    #[instrument(skip(self))]
    async fn delete_pair(&self, tweet_id: EntityId, user_id: EntityId) -> RepoResult<u64> {
        let result = sqlx::query("DELETE FROM likes WHERE tweet_id = $1 AND user_id = $2")
            .bind(tweet_id.into_inner())
            .bind(user_id.into_inner())
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(result.rows_affected())
    }

    #[instrument(skip(self))]
    async fn delete_by_tweet(&self, tweet_id: EntityId) -> RepoResult<u64> {
        let result = sqlx::query("DELETE FROM likes WHERE tweet_id = $1")
            .bind(tweet_id.into_inner())
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(result.rows_affected())
    }
}
