//! Entity to DTO mappers
//!
//! Implements `From` conversions from domain entities to response DTOs, and
//! constructors that combine an entity with its derived values.

use chirp_core::entities::{Tweet, User};

use super::responses::{
    AuthorSummary, DeletedTweetRecord, EnrichedTweet, ModerationTweetSummary, RankedTweet,
    RankedUser, TweetMetrics, UserMetrics, UserProfile,
};

// ============================================================================
// User Mappers
// ============================================================================

impl From<&User> for AuthorSummary {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            account: user.account.clone(),
            name: user.name.clone(),
            avatar: user.avatar.clone(),
        }
    }
}

impl UserProfile {
    pub fn new(user: User, follower_num: i64, following_num: i64) -> Self {
        Self {
            id: user.id,
            account: user.account,
            name: user.name,
            email: user.email,
            introduction: user.introduction,
            avatar: user.avatar,
            banner: user.banner,
            role: user.role,
            created_at: user.created_at,
            updated_at: user.updated_at,
            follower_num,
            following_num,
        }
    }
}

impl RankedUser {
    pub fn new(user: User, metrics: UserMetrics) -> Self {
        Self {
            id: user.id,
            account: user.account,
            name: user.name,
            avatar: user.avatar,
            banner: user.banner,
            role: user.role,
            metrics,
        }
    }
}

// ============================================================================
// Tweet Mappers
// ============================================================================

impl EnrichedTweet {
    pub fn new(
        tweet: Tweet,
        author: AuthorSummary,
        metrics: TweetMetrics,
        from_now: String,
    ) -> Self {
        Self {
            id: tweet.id,
            description: tweet.description,
            created_at: tweet.created_at,
            updated_at: tweet.updated_at,
            author,
            replies_num: metrics.replies_num,
            likes_num: metrics.likes_num,
            is_liked: metrics.is_liked,
            from_now,
        }
    }
}

impl ModerationTweetSummary {
    pub fn new(tweet: Tweet, author: AuthorSummary, excerpt: String, from_now: String) -> Self {
        Self {
            id: tweet.id,
            description: excerpt,
            created_at: tweet.created_at,
            updated_at: tweet.updated_at,
            author,
            from_now,
        }
    }
}

impl RankedTweet {
    pub fn new(tweet: Tweet, author: AuthorSummary, metrics: TweetMetrics) -> Self {
        Self {
            id: tweet.id,
            description: tweet.description,
            created_at: tweet.created_at,
            author,
            likes_num: metrics.likes_num,
            replies_num: metrics.replies_num,
        }
    }
}

impl From<Tweet> for DeletedTweetRecord {
    fn from(tweet: Tweet) -> Self {
        Self {
            id: tweet.id,
            user_id: tweet.author_id,
            description: tweet.description,
            created_at: tweet.created_at,
            updated_at: tweet.updated_at,
        }
    }
}
