//! Feed service
//!
//! Builds the user-facing listings: a user's tweets, replies and likes, the
//! moderation listing, and a user's profile. Every listing resolves its root
//! user first and fails with `NotFound` when a referenced user or tweet is
//! missing, rather than returning a row with empty fields.

use std::collections::HashMap;

use chirp_core::entities::{Like, Reply, Tweet, User};
use chirp_core::{EntityId, Viewer};
use futures::future::try_join_all;
use tracing::{debug, instrument};

use crate::dto::{
    AuthorSummary, EnrichedLike, EnrichedReply, EnrichedTweet, ModerationTweetSummary,
    TweetMetrics, UserProfile,
};
use crate::presentation::excerpt;

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};
use super::metrics::MetricsService;

/// Feed service
pub struct FeedService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> FeedService<'a> {
    /// Create a new FeedService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Tweets by `user_id`, newest first, with counts and the viewer's like flag
    #[instrument(skip(self))]
    pub async fn list_tweets_by_author(
        &self,
        user_id: EntityId,
        viewer: &Viewer,
    ) -> ServiceResult<Vec<EnrichedTweet>> {
        let author = self.require_user(user_id).await?;
        let tweets = self.ctx.tweet_repo().find_by_author(user_id).await?;
        let summary = AuthorSummary::from(&author);
        let metrics = MetricsService::new(self.ctx);

        let enriched = try_join_all(tweets.into_iter().map(|tweet| {
            let summary = summary.clone();
            let metrics = &metrics;
            async move {
                let counts = metrics.tweet_metrics(tweet.id, viewer).await?;
                let from_now = self.ctx.formatter().from_now(tweet.created_at);
                Ok::<_, ServiceError>(EnrichedTweet::new(tweet, summary, counts, from_now))
            }
        }))
        .await?;

        debug!(count = enriched.len(), "Composed tweets by author");
        Ok(enriched)
    }

    /// Replies written by `user_id`, newest first
    #[instrument(skip(self))]
    pub async fn list_replies_by_author(
        &self,
        user_id: EntityId,
    ) -> ServiceResult<Vec<EnrichedReply>> {
        let author = self.require_user(user_id).await?;
        let replies = self.ctx.reply_repo().find_by_author(user_id).await?;
        let summary = AuthorSummary::from(&author);

        try_join_all(
            replies
                .into_iter()
                .map(|reply| self.enrich_reply(reply, summary.clone())),
        )
        .await
    }

    /// Tweets liked by `user_id`, ordered by the like's time, newest first
    #[instrument(skip(self))]
    pub async fn list_liked_tweets_by_user(
        &self,
        user_id: EntityId,
    ) -> ServiceResult<Vec<EnrichedLike>> {
        self.require_user(user_id).await?;
        let likes = self.ctx.like_repo().find_by_user(user_id).await?;

        try_join_all(likes.into_iter().map(|like| self.enrich_like(like))).await
    }

    /// Every tweet with a description excerpt, newest first
    #[instrument(skip(self))]
    pub async fn list_all_tweets_for_moderation(
        &self,
    ) -> ServiceResult<Vec<ModerationTweetSummary>> {
        let (tweets, authors) = load_tweets_with_authors(self.ctx).await?;
        let max_chars = self.ctx.excerpt_chars();

        tweets
            .into_iter()
            .map(|tweet| {
                let author = lookup_author(&authors, tweet.author_id)?;
                let description = excerpt(&tweet.description, max_chars);
                let from_now = self.ctx.formatter().from_now(tweet.updated_at);
                Ok(ModerationTweetSummary::new(tweet, author, description, from_now))
            })
            .collect()
    }

    /// A user's public data with follower and following counts
    #[instrument(skip(self))]
    pub async fn get_user_profile(&self, user_id: EntityId) -> ServiceResult<UserProfile> {
        let user = self.require_user(user_id).await?;
        let metrics = self.ctx.metrics_repo();

        let (followers, followings) = tokio::try_join!(
            metrics.count_followers(user_id),
            metrics.count_followings(user_id)
        )?;

        Ok(UserProfile::new(user, followers, followings))
    }

    async fn require_user(&self, id: EntityId) -> ServiceResult<User> {
        self.ctx
            .user_repo()
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("User", id.to_string()))
    }

    async fn require_tweet(&self, id: EntityId) -> ServiceResult<Tweet> {
        self.ctx
            .tweet_repo()
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Tweet", id.to_string()))
    }

    async fn enrich_reply(
        &self,
        reply: Reply,
        author: AuthorSummary,
    ) -> ServiceResult<EnrichedReply> {
        let tweet = self.require_tweet(reply.tweet_id).await?;
        let replied_to = self.require_user(tweet.author_id).await?;

        Ok(EnrichedReply {
            id: reply.id,
            tweet_id: reply.tweet_id,
            from_now: self.ctx.formatter().from_now(reply.created_at),
            content: reply.content,
            created_at: reply.created_at,
            author,
            replied_to: replied_to.account,
        })
    }

    async fn enrich_like(&self, like: Like) -> ServiceResult<EnrichedLike> {
        let tweet = self.require_tweet(like.tweet_id).await?;
        let metrics = self.ctx.metrics_repo();

        let (author, replies_num, likes_num) = tokio::try_join!(
            self.require_user(tweet.author_id),
            async { Ok::<_, ServiceError>(metrics.count_replies(tweet.id).await?) },
            async { Ok::<_, ServiceError>(metrics.count_likes(tweet.id).await?) }
        )?;

        // The liker is the subject of this listing
        let counts = TweetMetrics {
            replies_num,
            likes_num,
            is_liked: true,
        };
        let from_now = self.ctx.formatter().from_now(tweet.created_at);

        Ok(EnrichedLike {
            id: like.id,
            tweet_id: like.tweet_id,
            user_id: like.user_id,
            created_at: like.created_at,
            tweet: EnrichedTweet::new(tweet, AuthorSummary::from(&author), counts, from_now),
        })
    }
}

/// Every tweet plus an index of author summaries.
///
/// Tweets are read before users. Users are never deleted, so every author of
/// a tweet in the scan is present in the later user scan.
pub(crate) async fn load_tweets_with_authors(
    ctx: &ServiceContext,
) -> ServiceResult<(Vec<Tweet>, HashMap<EntityId, AuthorSummary>)> {
    let tweets = ctx.tweet_repo().find_all().await?;
    let users = ctx.user_repo().find_all().await?;
    Ok((tweets, index_authors(&users)))
}

fn index_authors(users: &[User]) -> HashMap<EntityId, AuthorSummary> {
    users
        .iter()
        .map(|user| (user.id, AuthorSummary::from(user)))
        .collect()
}

pub(crate) fn lookup_author(
    authors: &HashMap<EntityId, AuthorSummary>,
    id: EntityId,
) -> ServiceResult<AuthorSummary> {
    authors
        .get(&id)
        .cloned()
        .ok_or_else(|| ServiceError::not_found("User", id.to_string()))
}
