//! # chirp-service
//!
//! Application layer: the aggregation engine, feed composer, ranking engine
//! and deletion coordinator, plus the DTOs they return.
//!
//! Every service borrows a [`ServiceContext`], which owns the repositories,
//! the relative-time formatter and the cascade/deadline settings. Nothing in
//! this crate keeps global state; the viewer, the clock and the locale are
//! always passed in.

pub mod dto;
pub mod presentation;
pub mod services;

pub use presentation::{excerpt, Clock, FixedClock, RelativeTimeFormatter, SystemClock};
pub use services::{
    FeedService, MetricsService, ModerationService, RankingService, ServiceContext,
    ServiceContextBuilder, ServiceError, ServiceResult,
};
