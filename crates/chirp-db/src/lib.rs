//! # chirp-db
//!
//! Database layer implementing repository traits with PostgreSQL via SQLx.
//!
//! ## Overview
//!
//! This crate provides PostgreSQL implementations for all repository traits
//! defined in `chirp-core`. It handles:
//!
//! - Connection pool management and migrations
//! - Database models with SQLx `FromRow` derives
//! - Entity ↔ Model mappers
//! - Repository implementations, including the correlated metric queries
//!
//! ## Usage
//!
//! ```rust,ignore
//! use chirp_db::pool::{create_pool, PoolConfig};
//! use chirp_db::repositories::PgMetricsRepository;
//! use chirp_core::traits::MetricsRepository;
//!
//! async fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let pool = create_pool(&PoolConfig::from_env()).await?;
//!     let metrics = PgMetricsRepository::new(pool);
//!     let likes = metrics.count_likes(7.into()).await?;
//!     Ok(())
//! }
//! ```

pub mod mappers;
pub mod models;
pub mod pool;
pub mod repositories;

// Re-export commonly used types
pub use pool::{create_pool, create_pool_from_env, run_migrations, PgPool, PoolConfig};
pub use repositories::{
    PgFollowshipRepository, PgLikeRepository, PgMetricsRepository, PgReplyRepository,
    PgTweetRepository, PgUserRepository,
};
