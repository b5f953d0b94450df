//! PostgreSQL implementation of TweetRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::{debug, instrument};

use chirp_core::entities::Tweet;
use chirp_core::traits::{RepoResult, TweetRepository};
use chirp_core::value_objects::EntityId;

use crate::mappers::TweetInsert;
use crate::models::TweetModel;

use super::error::map_db_error;

/// PostgreSQL implementation of TweetRepository
#[derive(Clone)]
pub struct PgTweetRepository {
    pool: PgPool,
}

impl PgTweetRepository {
    /// Create a new PgTweetRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TweetRepository for PgTweetRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: EntityId) -> RepoResult<Option<Tweet>> {
        let result = sqlx::query_as::<_, TweetModel>(
            r"
            SELECT id, author_id, description, created_at, updated_at
            FROM tweets
            WHERE id = $1
            ",
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Tweet::from))
    }

    #[instrument(skip(self))]
    async fn find_by_author(&self, author_id: EntityId) -> RepoResult<Vec<Tweet>> {
        let results = sqlx::query_as::<_, TweetModel>(
            r"
            SELECT id, author_id, description, created_at, updated_at
            FROM tweets
            WHERE author_id = $1
            ORDER BY created_at DESC, id DESC
            ",
        )
        .bind(author_id.into_inner())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Tweet::from).collect())
    }

    #[instrument(skip(self))]
    async fn find_all(&self) -> RepoResult<Vec<Tweet>> {
        let results = sqlx::query_as::<_, TweetModel>(
            r"
            SELECT id, author_id, description, created_at, updated_at
            FROM tweets
            ORDER BY created_at DESC, id DESC
            ",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Tweet::from).collect())
    }

    #[instrument(skip(self, tweet), fields(author_id = %tweet.author_id))]
    async fn create(&self, tweet: &Tweet) -> RepoResult<Tweet> {
        Tweet::validate_description(&tweet.description)?;
        let insert = TweetInsert::new(tweet);

        let model = sqlx::query_as::<_, TweetModel>(
            r"
            INSERT INTO tweets (author_id, description)
            VALUES ($1, $2)
            RETURNING id, author_id, description, created_at, updated_at
            ",
        )
        .bind(insert.author_id)
        .bind(insert.description)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(Tweet::from(model))
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: EntityId) -> RepoResult<bool> {
        let result = sqlx::query("DELETE FROM tweets WHERE id = $1")
            .bind(id.into_inner())
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(result.rows_affected() > 0)
    }

    #[instrument(skip(self))]
    async fn delete_cascade(&self, id: EntityId) -> RepoResult<Option<Tweet>> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        // Row lock blocks reply/like inserts whose FK check targets this tweet
        let locked = sqlx::query_scalar::<_, i64>(
            r"
            SELECT id FROM tweets
            WHERE id = $1
            FOR UPDATE
            ",
        )
        .bind(id.into_inner())
        .fetch_optional(&mut *tx)
        .await
        .map_err(map_db_error)?;

        // Dropping the transaction rolls it back
        if locked.is_none() {
            return Ok(None);
        }

        // Dependents first: replies and likes reference tweets(id)
        let replies = sqlx::query("DELETE FROM replies WHERE tweet_id = $1")
            .bind(id.into_inner())
            .execute(&mut *tx)
            .await
            .map_err(map_db_error)?;

        let likes = sqlx::query("DELETE FROM likes WHERE tweet_id = $1")
            .bind(id.into_inner())
            .execute(&mut *tx)
            .await
            .map_err(map_db_error)?;

        let model = sqlx::query_as::<_, TweetModel>(
            r"
            DELETE FROM tweets
            WHERE id = $1
            RETURNING id, author_id, description, created_at, updated_at
            ",
        )
        .bind(id.into_inner())
        .fetch_one(&mut *tx)
        .await
        .map_err(map_db_error)?;

        tx.commit().await.map_err(map_db_error)?;

        debug!(
            replies = replies.rows_affected(),
            likes = likes.rows_affected(),
            "Tweet cascade committed"
        );

        Ok(Some(Tweet::from(model)))
    }
}
