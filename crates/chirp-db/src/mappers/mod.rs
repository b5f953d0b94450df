//! Entity to model mappers
//!
//! This module provides conversions between domain entities (chirp-core) and database models.
//! - `From<Model> for Entity` / `TryFrom`: Convert database rows to domain objects
//! - `*Insert` structs: Prepare entity data for database operations

mod activity;
mod user;

pub use activity::{FollowshipInsert, LikeInsert, ReplyInsert, TweetInsert};
pub use user::UserInsert;
