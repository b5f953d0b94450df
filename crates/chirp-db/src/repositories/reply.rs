//! PostgreSQL implementation of ReplyRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use chirp_core::entities::Reply;
use chirp_core::traits::{ReplyRepository, RepoResult};
use chirp_core::value_objects::EntityId;

use crate::mappers::ReplyInsert;
use crate::models::ReplyModel;

use super::error::{map_db_error, map_reference_error};

/// PostgreSQL implementation of ReplyRepository
#[derive(Clone)]
pub struct PgReplyRepository {
    pool: PgPool,
}

impl PgReplyRepository {
    /// Create a new PgReplyRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ReplyRepository for PgReplyRepository {
    #[instrument(skip(self))]
    async fn find_by_author(&self, author_id: EntityId) -> RepoResult<Vec<Reply>> {
        let results = sqlx::query_as::<_, ReplyModel>(
            r"
            SELECT id, tweet_id, author_id, content, created_at, updated_at
            FROM replies
            WHERE author_id = $1
            ORDER BY created_at DESC, id DESC
            ",
        )
        .bind(author_id.into_inner())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Reply::from).collect())
    }

    #[instrument(skip(self, reply), fields(tweet_id = %reply.tweet_id))]
    async fn create(&self, reply: &Reply) -> RepoResult<Reply> {
        let insert = ReplyInsert::new(reply);

        let model = sqlx::query_as::<_, ReplyModel>(
            r"
            INSERT INTO replies (tweet_id, author_id, content)
            VALUES ($1, $2, $3)
            RETURNING id, tweet_id, author_id, content, created_at, updated_at
            ",
        )
        .bind(insert.tweet_id)
        .bind(insert.author_id)
        .bind(insert.content)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_reference_error(e, reply.tweet_id, reply.author_id))?;

        Ok(Reply::from(model))
    }

    #[instrument(skip(self))]
    async fn delete_by_tweet(&self, tweet_id: EntityId) -> RepoResult<u64> {
        let result = sqlx::query("DELETE FROM replies WHERE tweet_id = $1")
            .bind(tweet_id.into_inner())
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(result.rows_affected())
    }
}
