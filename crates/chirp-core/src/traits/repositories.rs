//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer defines what it needs from the entity store, and the
//! infrastructure layer provides the implementation. Derived metrics are
//! never stored: `MetricsRepository` computes each one from live rows on
//! every call.

use async_trait::async_trait;
use std::fmt;

use crate::entities::{Followship, Like, Reply, Tweet, User};
use crate::error::DomainError;
use crate::value_objects::EntityId;

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// User Repository
// ============================================================================

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find user by ID
    async fn find_by_id(&self, id: EntityId) -> RepoResult<Option<User>>;

    /// Find user by account handle
    async fn find_by_account(&self, account: &str) -> RepoResult<Option<User>>;

    /// Find user by email
    async fn find_by_email(&self, email: &str) -> RepoResult<Option<User>>;

    /// List every user, ordered by id ascending
    async fn find_all(&self) -> RepoResult<Vec<User>>;

    /// Insert a user; the store assigns the id and returns the stored row
    async fn create(&self, user: &User, password_hash: &str) -> RepoResult<User>;
}

// ============================================================================
// Tweet Repository
// ============================================================================

#[async_trait]
pub trait TweetRepository: Send + Sync {
    /// Find tweet by ID
    async fn find_by_id(&self, id: EntityId) -> RepoResult<Option<Tweet>>;

    /// Tweets by one author, newest first (id breaks timestamp ties)
    async fn find_by_author(&self, author_id: EntityId) -> RepoResult<Vec<Tweet>>;

    /// Every tweet, newest first (id breaks timestamp ties)
    async fn find_all(&self) -> RepoResult<Vec<Tweet>>;

    /// Insert a tweet; the store assigns the id
    async fn create(&self, tweet: &Tweet) -> RepoResult<Tweet>;

    /// Delete the tweet row only. Returns false if nothing was deleted.
    /// Fails while replies or likes still reference the tweet.
    async fn delete(&self, id: EntityId) -> RepoResult<bool>;

    /// Delete the tweet together with its replies and likes in one
    /// transaction. Returns the deleted row, or `None` (with no side
    /// effects) if the tweet does not exist.
    async fn delete_cascade(&self, id: EntityId) -> RepoResult<Option<Tweet>>;
}

// ============================================================================
// Reply Repository
// ============================================================================

#[async_trait]
pub trait ReplyRepository: Send + Sync {
    /// Replies written by one user, newest first
    async fn find_by_author(&self, author_id: EntityId) -> RepoResult<Vec<Reply>>;

    /// Insert a reply; fails with `TweetNotFound` if the tweet is gone
    async fn create(&self, reply: &Reply) -> RepoResult<Reply>;

    /// Delete every reply on a tweet, returning the number removed
    async fn delete_by_tweet(&self, tweet_id: EntityId) -> RepoResult<u64>;
}

// ============================================================================
// Like Repository
// ============================================================================

#[async_trait]
pub trait LikeRepository: Send + Sync {
    /// Likes given by one user, newest first
    async fn find_by_user(&self, user_id: EntityId) -> RepoResult<Vec<Like>>;

    /// Insert a like; fails with `TweetNotFound` if the tweet is gone
    async fn create(&self, like: &Like) -> RepoResult<Like>;

    /// Remove every like row for a (tweet, user) pair
    async fn delete_pair(&self, tweet_id: EntityId, user_id: EntityId) -> RepoResult<u64>;

    /// Delete every like on a tweet, returning the number removed
    async fn delete_by_tweet(&self, tweet_id: EntityId) -> RepoResult<u64>;
}

// ============================================================================
// Followship Repository
// ============================================================================

#[async_trait]
pub trait FollowshipRepository: Send + Sync {
    /// Insert a follow edge; the store assigns the id
    async fn create(&self, followship: &Followship) -> RepoResult<Followship>;

    /// Remove the edge follower -> following
    async fn delete(&self, follower_id: EntityId, following_id: EntityId) -> RepoResult<u64>;
}

// ============================================================================
// Metrics Repository
// ============================================================================

/// Correlated-count queries. All counts are `>= 0`; an id with no matching
/// rows yields 0 rather than an error.
#[async_trait]
pub trait MetricsRepository: Send + Sync {
    /// Tweets authored by the user
    async fn count_tweets_by_user(&self, user_id: EntityId) -> RepoResult<i64>;

    /// Likes on any tweet authored by the user
    async fn count_likes_received_by_user(&self, user_id: EntityId) -> RepoResult<i64>;

    /// Followship rows where the user is `following_id`
    async fn count_followers(&self, user_id: EntityId) -> RepoResult<i64>;

    /// Followship rows where the user is `follower_id`
    async fn count_followings(&self, user_id: EntityId) -> RepoResult<i64>;

    /// Replies referencing the tweet
    async fn count_replies(&self, tweet_id: EntityId) -> RepoResult<i64>;

    /// Like rows referencing the tweet
    async fn count_likes(&self, tweet_id: EntityId) -> RepoResult<i64>;

    /// Whether at least one like exists for the (tweet, viewer) pair
    async fn is_liked_by(&self, tweet_id: EntityId, viewer_id: EntityId) -> RepoResult<bool>;
}

// ============================================================================
// Cascade steps
// ============================================================================

/// The independent deletion statements that make up a tweet cascade
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CascadeStep {
    Tweet,
    Replies,
    Likes,
}

impl CascadeStep {
    pub const ALL: [CascadeStep; 3] = [Self::Tweet, Self::Replies, Self::Likes];
}

impl fmt::Display for CascadeStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Tweet => "tweet",
            Self::Replies => "replies",
            Self::Likes => "likes",
        })
    }
}
