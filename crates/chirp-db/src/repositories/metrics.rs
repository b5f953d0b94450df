//! PostgreSQL implementation of MetricsRepository
//!
//! Every metric is a single correlated `COUNT(*)` or `EXISTS` against live
//! rows. Nothing is cached, so a count always reflects the last committed
//! write.

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use chirp_core::traits::{MetricsRepository, RepoResult};
use chirp_core::value_objects::EntityId;

use super::error::map_db_error;

/// PostgreSQL implementation of MetricsRepository
#[derive(Clone)]
pub struct PgMetricsRepository {
    pool: PgPool,
}

impl PgMetricsRepository {
    /// Create a new PgMetricsRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn count(&self, sql: &str, id: EntityId) -> RepoResult<i64> {
        sqlx::query_scalar::<_, i64>(sql)
            .bind(id.into_inner())
            .fetch_one(&self.pool)
            .await
            .map_err(map_db_error)
    }
}

#[async_trait]
impl MetricsRepository for PgMetricsRepository {
    #[instrument(skip(self))]
    async fn count_tweets_by_user(&self, user_id: EntityId) -> RepoResult<i64> {
        self.count("SELECT COUNT(*) FROM tweets WHERE author_id = $1", user_id)
            .await
    }

    #[instrument(skip(self))]
    async fn count_likes_received_by_user(&self, user_id: EntityId) -> RepoResult<i64> {
        self.count(
            r"
            SELECT COUNT(*)
            FROM likes l
            JOIN tweets t ON t.id = l.tweet_id
            WHERE t.author_id = $1
            ",
            user_id,
        )
        .await
    }

    #[instrument(skip(self))]
    async fn count_followers(&self, user_id: EntityId) -> RepoResult<i64> {
        self.count(
            "SELECT COUNT(*) FROM followships WHERE following_id = $1",
            user_id,
        )
        .await
    }

    #[instrument(skip(self))]
    async fn count_followings(&self, user_id: EntityId) -> RepoResult<i64> {
        self.count(
            "SELECT COUNT(*) FROM followships WHERE follower_id = $1",
            user_id,
        )
        .await
    }

    #[instrument(skip(self))]
    async fn count_replies(&self, tweet_id: EntityId) -> RepoResult<i64> {
        self.count("SELECT COUNT(*) FROM replies WHERE tweet_id = $1", tweet_id)
            .await
    }

    #[instrument(skip(self))]
    async fn count_likes(&self, tweet_id: EntityId) -> RepoResult<i64> {
        self.count("SELECT COUNT(*) FROM likes WHERE tweet_id = $1", tweet_id)
            .await
    }

    #[instrument(skip(self))]
    async fn is_liked_by(&self, tweet_id: EntityId, viewer_id: EntityId) -> RepoResult<bool> {
        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS (SELECT 1 FROM likes WHERE tweet_id = $1 AND user_id = $2)",
        )
        .bind(tweet_id.into_inner())
        .bind(viewer_id.into_inner())
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)
    }
}
