//! Moderation service
//!
//! Back-office operations: the moderation listing, the leaderboards and
//! tweet deletion. Every call takes the requesting viewer and requires an
//! authenticated admin.
//!
//! Deleting a tweet removes the tweet, its replies and its likes. With
//! [`CascadeStrategy::Transactional`] the store does all three in one
//! transaction. With [`CascadeStrategy::Concurrent`] the reply and like
//! deletions run side by side and the tweet row follows once both succeed.
//! Each failed step is retried, and steps that still fail (or a tweet row
//! kept because its dependents remain) are reported as
//! `PartialCascadeFailure`.

use std::time::Duration;

use chirp_common::CascadeStrategy;
use chirp_core::{CascadeStep, DomainError, EntityId, Viewer};
use tracing::{error, info, instrument, warn};

use crate::dto::{DeletedTweetRecord, ModerationTweetSummary, RankedTweet, RankedUser};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};
use super::feed::FeedService;
use super::ranking::RankingService;

/// Pause before retry `n` is `n * RETRY_BACKOFF`
const RETRY_BACKOFF: Duration = Duration::from_millis(20);

/// Moderation service
pub struct ModerationService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ModerationService<'a> {
    /// Create a new ModerationService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Every tweet with a description excerpt, newest first
    #[instrument(skip(self))]
    pub async fn list_tweets(&self, viewer: &Viewer) -> ServiceResult<Vec<ModerationTweetSummary>> {
        require_admin(viewer, "list tweets for moderation")?;
        FeedService::new(self.ctx)
            .list_all_tweets_for_moderation()
            .await
    }

    /// The user leaderboard
    #[instrument(skip(self))]
    pub async fn rank_users(&self, viewer: &Viewer) -> ServiceResult<Vec<RankedUser>> {
        require_admin(viewer, "rank users")?;
        RankingService::new(self.ctx).rank_users().await
    }

    /// The tweet leaderboard
    #[instrument(skip(self))]
    pub async fn rank_tweets(&self, viewer: &Viewer) -> ServiceResult<Vec<RankedTweet>> {
        require_admin(viewer, "rank tweets")?;
        RankingService::new(self.ctx).rank_tweets().await
    }

    /// Delete a tweet with its replies and likes, returning the prior record.
    ///
    /// A missing tweet yields `NotFound` and nothing is written.
    #[instrument(skip(self))]
    pub async fn delete_tweet(
        &self,
        viewer: &Viewer,
        tweet_id: EntityId,
    ) -> ServiceResult<DeletedTweetRecord> {
        require_admin(viewer, "delete tweets")?;

        let cascade = self.ctx.cascade();
        let deleted = match cascade.strategy {
            CascadeStrategy::Transactional => self.delete_transactional(tweet_id).await?,
            CascadeStrategy::Concurrent => {
                self.delete_concurrent(tweet_id, cascade.max_retries).await?
            }
        };

        info!(
            tweet_id = %tweet_id,
            author_id = %deleted.user_id,
            strategy = ?cascade.strategy,
            "Tweet deleted"
        );

        Ok(deleted)
    }

    async fn delete_transactional(&self, tweet_id: EntityId) -> ServiceResult<DeletedTweetRecord> {
        self.ctx
            .tweet_repo()
            .delete_cascade(tweet_id)
            .await?
            .map(DeletedTweetRecord::from)
            .ok_or_else(|| ServiceError::not_found("Tweet", tweet_id.to_string()))
    }

    async fn delete_concurrent(
        &self,
        tweet_id: EntityId,
        max_retries: u32,
    ) -> ServiceResult<DeletedTweetRecord> {
        let tweet = self
            .ctx
            .tweet_repo()
            .find_by_id(tweet_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Tweet", tweet_id.to_string()))?;

        // Replies and likes reference the tweet row, so it goes last
        let (replies_step, likes_step) = tokio::join!(
            self.run_step(tweet_id, CascadeStep::Replies, max_retries),
            self.run_step(tweet_id, CascadeStep::Likes, max_retries)
        );
        let tweet_step = if replies_step.is_ok() && likes_step.is_ok() {
            self.run_step(tweet_id, CascadeStep::Tweet, max_retries).await
        } else {
            Err(DomainError::DatabaseError(
                "tweet kept while dependents remain".to_string(),
            ))
        };

        let failed_steps: Vec<CascadeStep> = [
            (CascadeStep::Tweet, tweet_step),
            (CascadeStep::Replies, replies_step),
            (CascadeStep::Likes, likes_step),
        ]
        .into_iter()
        .filter_map(|(step, outcome)| outcome.err().map(|_| step))
        .collect();

        if !failed_steps.is_empty() {
            error!(
                tweet_id = %tweet_id,
                failed_steps = ?failed_steps,
                "Tweet cascade incomplete after retries"
            );
            return Err(ServiceError::PartialCascadeFailure {
                tweet_id,
                failed_steps,
            });
        }

        Ok(DeletedTweetRecord::from(tweet))
    }

    /// One cascade statement with up to `max_retries` retries
    async fn run_step(
        &self,
        tweet_id: EntityId,
        step: CascadeStep,
        max_retries: u32,
    ) -> Result<(), DomainError> {
        let mut attempt = 0;
        loop {
            let outcome = match step {
                CascadeStep::Tweet => self.ctx.tweet_repo().delete(tweet_id).await.map(drop),
                CascadeStep::Replies => self
                    .ctx
                    .reply_repo()
                    .delete_by_tweet(tweet_id)
                    .await
                    .map(drop),
                CascadeStep::Likes => self
                    .ctx
                    .like_repo()
                    .delete_by_tweet(tweet_id)
                    .await
                    .map(drop),
            };

            match outcome {
                Ok(()) => return Ok(()),
                Err(e) if attempt < max_retries => {
                    attempt += 1;
                    warn!(
                        tweet_id = %tweet_id,
                        step = %step,
                        attempt,
                        error = %e,
                        "Cascade step failed, retrying"
                    );
                    tokio::time::sleep(RETRY_BACKOFF * attempt).await;
                }
                Err(e) => return Err(e),
            }
        }
    }
}

/// Admin gate shared by every moderation operation
fn require_admin(viewer: &Viewer, operation: &'static str) -> ServiceResult<EntityId> {
    match viewer {
        Viewer::Anonymous => Err(ServiceError::invalid_viewer(operation)),
        Viewer::Authenticated { id, role } if role.is_admin() => Ok(*id),
        Viewer::Authenticated { .. } => Err(ServiceError::permission_denied(operation)),
    }
}
