//! Database models - SQLx-compatible structs for PostgreSQL tables

mod followship;
mod like;
mod reply;
mod tweet;
mod user;

pub use followship::FollowshipModel;
pub use like::LikeModel;
pub use reply::ReplyModel;
pub use tweet::TweetModel;
pub use user::UserModel;
