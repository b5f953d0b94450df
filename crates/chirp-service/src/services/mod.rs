//! Business logic services
//!
//! This module contains the service layer: the aggregation engine
//! (`MetricsService`), the feed composer (`FeedService`), the ranking engine
//! (`RankingService`) and the deletion coordinator (`ModerationService`).

pub mod context;
pub mod error;
pub mod feed;
pub mod metrics;
pub mod moderation;
pub mod ranking;

// Re-export all services for convenience
pub use context::{ServiceContext, ServiceContextBuilder};
pub use error::{ServiceError, ServiceResult};
pub use feed::FeedService;
pub use metrics::MetricsService;
pub use moderation::ModerationService;
pub use ranking::{rank, Ranked, RankingService};
