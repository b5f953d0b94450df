//! Tweet, Reply, Like and Followship entity <-> model mappers

use chirp_core::entities::{Followship, Like, Reply, Tweet};
use chirp_core::value_objects::EntityId;

use crate::models::{FollowshipModel, LikeModel, ReplyModel, TweetModel};

impl From<TweetModel> for Tweet {
    fn from(model: TweetModel) -> Self {
        Tweet {
            id: EntityId::new(model.id),
            author_id: EntityId::new(model.author_id),
            description: model.description,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

impl From<ReplyModel> for Reply {
    fn from(model: ReplyModel) -> Self {
        Reply {
            id: EntityId::new(model.id),
            tweet_id: EntityId::new(model.tweet_id),
            author_id: EntityId::new(model.author_id),
            content: model.content,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

impl From<LikeModel> for Like {
    fn from(model: LikeModel) -> Self {
        Like {
            id: EntityId::new(model.id),
            tweet_id: EntityId::new(model.tweet_id),
            user_id: EntityId::new(model.user_id),
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

impl From<FollowshipModel> for Followship {
    fn from(model: FollowshipModel) -> Self {
        Followship {
            id: EntityId::new(model.id),
            follower_id: EntityId::new(model.follower_id),
            following_id: EntityId::new(model.following_id),
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

/// Values for a tweet insertion; the id is assigned by the store
pub struct TweetInsert<'a> {
    pub author_id: i64,
    pub description: &'a str,
}

impl<'a> TweetInsert<'a> {
    pub fn new(tweet: &'a Tweet) -> Self {
        Self {
            author_id: tweet.author_id.into_inner(),
            description: &tweet.description,
        }
    }
}

/// Values for a reply insertion
pub struct ReplyInsert<'a> {
    pub tweet_id: i64,
    pub author_id: i64,
    pub content: &'a str,
}

impl<'a> ReplyInsert<'a> {
    pub fn new(reply: &'a Reply) -> Self {
        Self {
            tweet_id: reply.tweet_id.into_inner(),
            author_id: reply.author_id.into_inner(),
            content: &reply.content,
        }
    }
}

/// Values for a like insertion
pub struct LikeInsert {
    pub tweet_id: i64,
    pub user_id: i64,
}

impl LikeInsert {
    pub fn new(like: &Like) -> Self {
        Self {
            tweet_id: like.tweet_id.into_inner(),
            user_id: like.user_id.into_inner(),
        }
    }
}

/// Values for a followship insertion
pub struct FollowshipInsert {
    pub follower_id: i64,
    pub following_id: i64,
}

impl FollowshipInsert {
    pub fn new(followship: &Followship) -> Self {
        Self {
            follower_id: followship.follower_id.into_inner(),
            following_id: followship.following_id.into_inner(),
        }
    }
}
