//! Data transfer objects returned by the services
//!
//! This module provides:
//! - Response DTOs for serializing listings and confirmations
//! - Mappers for converting domain entities to DTOs

pub mod mappers;
pub mod responses;

pub use responses::{
    AuthorSummary, DeletedTweetRecord, EnrichedLike, EnrichedReply, EnrichedTweet,
    ModerationTweetSummary, RankedTweet, RankedUser, TweetMetrics, UserMetrics, UserProfile,
};
