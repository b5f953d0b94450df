//! Ports implemented by the storage layer

mod repositories;

pub use repositories::{
    CascadeStep, FollowshipRepository, LikeRepository, MetricsRepository, ReplyRepository,
    RepoResult, TweetRepository, UserRepository,
};
