//! # chirp-core
//!
//! Domain layer containing entities, value objects, and repository traits.
//! This crate has zero dependencies on infrastructure (database, runtime, etc.).

pub mod entities;
pub mod error;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{Followship, Like, Reply, Tweet, User};
pub use error::DomainError;
pub use traits::{
    CascadeStep, FollowshipRepository, LikeRepository, MetricsRepository, ReplyRepository,
    RepoResult, TweetRepository, UserRepository,
};
pub use value_objects::{EntityId, EntityIdParseError, Role, SignInPortal, Viewer};
