//! Domain entities - core business objects

mod followship;
mod like;
mod reply;
mod tweet;
mod user;

pub use followship::Followship;
pub use like::Like;
pub use reply::Reply;
pub use tweet::{Tweet, MAX_DESCRIPTION_CHARS};
pub use user::{User, DEFAULT_AVATAR, DEFAULT_BANNER, MAX_NAME_CHARS};
