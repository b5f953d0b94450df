//! Metrics service
//!
//! Composes the correlated count queries of the metrics repository into the
//! per-tweet and per-user metric sets the listings need. Independent counts
//! run concurrently; nothing is cached.

use chirp_core::{EntityId, Viewer};
use tracing::instrument;

use crate::dto::{TweetMetrics, UserMetrics};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Metrics service
pub struct MetricsService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> MetricsService<'a> {
    /// Create a new MetricsService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Reply count, like count and whether `viewer` liked the tweet.
    ///
    /// An anonymous viewer gets `is_liked = false` without a store call.
    #[instrument(skip(self))]
    pub async fn tweet_metrics(
        &self,
        tweet_id: EntityId,
        viewer: &Viewer,
    ) -> ServiceResult<TweetMetrics> {
        let metrics = self.ctx.metrics_repo();
        let liked = async {
            match viewer.id() {
                Some(viewer_id) => metrics.is_liked_by(tweet_id, viewer_id).await,
                None => Ok(false),
            }
        };

        let (replies_num, likes_num, is_liked) = tokio::try_join!(
            metrics.count_replies(tweet_id),
            metrics.count_likes(tweet_id),
            liked
        )?;

        Ok(TweetMetrics {
            replies_num,
            likes_num,
            is_liked,
        })
    }

    /// Tweets authored, likes received, followers and followings
    #[instrument(skip(self))]
    pub async fn user_metrics(&self, user_id: EntityId) -> ServiceResult<UserMetrics> {
        let metrics = self.ctx.metrics_repo();

        let (tweets_num, likes_num, followers_num, followings_num) = tokio::try_join!(
            metrics.count_tweets_by_user(user_id),
            metrics.count_likes_received_by_user(user_id),
            metrics.count_followers(user_id),
            metrics.count_followings(user_id)
        )?;

        Ok(UserMetrics {
            tweets_num,
            likes_num,
            followers_num,
            followings_num,
        })
    }

    /// Whether `viewer` liked the tweet; false for an anonymous viewer
    #[instrument(skip(self))]
    pub async fn is_liked_by(&self, tweet_id: EntityId, viewer: &Viewer) -> ServiceResult<bool> {
        match viewer.id() {
            Some(viewer_id) => Ok(self
                .ctx
                .metrics_repo()
                .is_liked_by(tweet_id, viewer_id)
                .await?),
            None => Ok(false),
        }
    }
}
