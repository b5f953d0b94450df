//! Response DTOs
//!
//! All response DTOs implement `Serialize` with camelCase field names
//! (`repliesNum`, `likesNum`, `isLiked`, `fromNow`, ...). Ids serialize as
//! JSON numbers. No DTO carries a password hash.

use chirp_core::{EntityId, Role};
use chrono::{DateTime, Utc};
use serde::Serialize;

// ============================================================================
// Metrics
// ============================================================================

/// Derived counts for one tweet, plus the viewer-relative like flag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TweetMetrics {
    pub replies_num: i64,
    pub likes_num: i64,
    /// Always false for an anonymous viewer
    pub is_liked: bool,
}

/// Derived counts for one user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserMetrics {
    pub tweets_num: i64,
    /// Likes received on the user's tweets
    pub likes_num: i64,
    pub followers_num: i64,
    pub followings_num: i64,
}

// ============================================================================
// Users
// ============================================================================

/// Author identity attached to every listed item
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorSummary {
    pub id: EntityId,
    pub account: String,
    pub name: String,
    pub avatar: String,
}

/// A user's public data with follow counts
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub id: EntityId,
    pub account: String,
    pub name: String,
    pub email: String,
    pub introduction: String,
    pub avatar: String,
    pub banner: String,
    pub role: Role,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub follower_num: i64,
    pub following_num: i64,
}

/// One row of the user leaderboard
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RankedUser {
    pub id: EntityId,
    pub account: String,
    pub name: String,
    pub avatar: String,
    pub banner: String,
    pub role: Role,
    #[serde(flatten)]
    pub metrics: UserMetrics,
}

// ============================================================================
// Tweets
// ============================================================================

/// A tweet with author, counts, viewer flag and relative time
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrichedTweet {
    pub id: EntityId,
    pub description: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub author: AuthorSummary,
    pub replies_num: i64,
    pub likes_num: i64,
    pub is_liked: bool,
    pub from_now: String,
}

/// A reply with its author and the account it answers
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrichedReply {
    pub id: EntityId,
    pub tweet_id: EntityId,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub author: AuthorSummary,
    /// Account of the replied tweet's author
    pub replied_to: String,
    pub from_now: String,
}

/// A like with the tweet it marks
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrichedLike {
    pub id: EntityId,
    pub tweet_id: EntityId,
    pub user_id: EntityId,
    pub created_at: DateTime<Utc>,
    pub tweet: EnrichedTweet,
}

/// Moderation listing row
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ModerationTweetSummary {
    pub id: EntityId,
    /// Leading characters of the description only
    pub description: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub author: AuthorSummary,
    /// Relative to `updated_at`
    pub from_now: String,
}

/// One row of the tweet leaderboard
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RankedTweet {
    pub id: EntityId,
    pub description: String,
    pub created_at: DateTime<Utc>,
    pub author: AuthorSummary,
    pub likes_num: i64,
    pub replies_num: i64,
}

/// The tweet as it was before deletion
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeletedTweetRecord {
    pub id: EntityId,
    pub user_id: EntityId,
    pub description: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
