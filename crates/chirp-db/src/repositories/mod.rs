//! Repository implementations
//!
//! PostgreSQL implementations of the repository traits defined in chirp-core.
//! Each repository handles database operations for a specific domain entity;
//! `PgMetricsRepository` runs the correlated count queries.

mod error;
mod followship;
mod like;
mod metrics;
mod reply;
mod tweet;
mod user;

pub use followship::PgFollowshipRepository;
pub use like::PgLikeRepository;
pub use metrics::PgMetricsRepository;
pub use reply::PgReplyRepository;
pub use tweet::PgTweetRepository;
pub use user::PgUserRepository;
