//! Ranking service
//!
//! Leaderboards ordered by derived metrics. [`rank`] is a stable sort on a
//! key tuple, every component descending, so rows that tie on the whole key
//! keep their input order and repeated calls on unchanged data agree.

use chirp_core::Viewer;
use futures::future::try_join_all;
use tracing::{info, instrument};

use crate::dto::{RankedTweet, RankedUser};

use super::context::ServiceContext;
use super::error::ServiceResult;
use super::feed::{load_tweets_with_authors, lookup_author};
use super::metrics::MetricsService;

/// Something with a ranking key. Larger keys rank first.
pub trait Ranked {
    type Key: Ord;

    fn rank_key(&self) -> Self::Key;
}

impl Ranked for RankedUser {
    type Key = (i64, i64, i64, i64);

    fn rank_key(&self) -> Self::Key {
        (
            self.metrics.tweets_num,
            self.metrics.likes_num,
            self.metrics.followers_num,
            self.metrics.followings_num,
        )
    }
}

impl Ranked for RankedTweet {
    type Key = (i64, i64);

    fn rank_key(&self) -> Self::Key {
        (self.likes_num, self.replies_num)
    }
}

/// Order `items` by descending key, keeping input order among ties
pub fn rank<T: Ranked>(mut items: Vec<T>) -> Vec<T> {
    items.sort_by(|a, b| b.rank_key().cmp(&a.rank_key()));
    items
}

/// Ranking service
pub struct RankingService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> RankingService<'a> {
    /// Create a new RankingService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Every user ranked by (tweets, likes received, followers, followings)
    #[instrument(skip(self))]
    pub async fn rank_users(&self) -> ServiceResult<Vec<RankedUser>> {
        // Id order makes the tie order reproducible
        let users = self.ctx.user_repo().find_all().await?;
        let metrics = MetricsService::new(self.ctx);

        let rows = try_join_all(users.into_iter().map(|user| {
            let metrics = &metrics;
            async move {
                let counts = metrics.user_metrics(user.id).await?;
                ServiceResult::Ok(RankedUser::new(user, counts))
            }
        }))
        .await?;

        info!(count = rows.len(), "Ranked users");
        Ok(rank(rows))
    }

    /// Every tweet ranked by (likes, replies)
    #[instrument(skip(self))]
    pub async fn rank_tweets(&self) -> ServiceResult<Vec<RankedTweet>> {
        let (tweets, authors) = load_tweets_with_authors(self.ctx).await?;
        let metrics = MetricsService::new(self.ctx);

        let rows = try_join_all(tweets.into_iter().map(|tweet| {
            let metrics = &metrics;
            let author = lookup_author(&authors, tweet.author_id);
            async move {
                let author = author?;
                let counts = metrics
                    .tweet_metrics(tweet.id, &Viewer::Anonymous)
                    .await?;
                ServiceResult::Ok(RankedTweet::new(tweet, author, counts))
            }
        }))
        .await?;

        info!(count = rows.len(), "Ranked tweets");
        Ok(rank(rows))
    }
}
