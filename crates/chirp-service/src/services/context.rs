//! Service context - dependency container for services
//!
//! Holds the repositories, the relative-time formatter and the per-request
//! settings needed by services.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use chirp_common::{AppConfig, CascadeConfig, PresentationConfig, RequestConfig};
use chirp_core::traits::{
    LikeRepository, MetricsRepository, ReplyRepository, TweetRepository, UserRepository,
};
use chirp_db::{
    PgLikeRepository, PgMetricsRepository, PgPool, PgReplyRepository, PgTweetRepository,
    PgUserRepository,
};
use tracing::warn;

use crate::presentation::{Clock, RelativeTimeFormatter, SystemClock};

use super::error::{ServiceError, ServiceResult};

/// Service context containing all dependencies
///
/// This is the dependency container that gets passed to all services.
/// It provides access to:
/// - Entity store repositories
/// - The metrics (correlated count) repository
/// - The relative-time formatter and presentation settings
/// - Cascade deletion and deadline settings
#[derive(Clone)]
pub struct ServiceContext {
    // Repositories
    user_repo: Arc<dyn UserRepository>,
    tweet_repo: Arc<dyn TweetRepository>,
    reply_repo: Arc<dyn ReplyRepository>,
    like_repo: Arc<dyn LikeRepository>,
    metrics_repo: Arc<dyn MetricsRepository>,

    // Presentation
    formatter: RelativeTimeFormatter,
    presentation: PresentationConfig,

    // Policies
    cascade: CascadeConfig,
    request: RequestConfig,
}

impl ServiceContext {
    /// Wire PostgreSQL repositories and wall-clock time from configuration
    pub fn from_pool(pool: PgPool, config: &AppConfig) -> Self {
        Self {
            user_repo: Arc::new(PgUserRepository::new(pool.clone())),
            tweet_repo: Arc::new(PgTweetRepository::new(pool.clone())),
            reply_repo: Arc::new(PgReplyRepository::new(pool.clone())),
            like_repo: Arc::new(PgLikeRepository::new(pool.clone())),
            metrics_repo: Arc::new(PgMetricsRepository::new(pool)),
            formatter: RelativeTimeFormatter::system(config.presentation.locale),
            presentation: config.presentation.clone(),
            cascade: config.cascade,
            request: config.request,
        }
    }

    // === Repositories ===

    /// Get the user repository
    pub fn user_repo(&self) -> &dyn UserRepository {
        self.user_repo.as_ref()
    }

    /// Get the tweet repository
    pub fn tweet_repo(&self) -> &dyn TweetRepository {
        self.tweet_repo.as_ref()
    }

    /// Get the reply repository
    pub fn reply_repo(&self) -> &dyn ReplyRepository {
        self.reply_repo.as_ref()
    }

    /// Get the like repository
    pub fn like_repo(&self) -> &dyn LikeRepository {
        self.like_repo.as_ref()
    }

    /// Get the metrics repository
    pub fn metrics_repo(&self) -> &dyn MetricsRepository {
        self.metrics_repo.as_ref()
    }

    // === Presentation ===

    /// Get the relative-time formatter
    pub fn formatter(&self) -> &RelativeTimeFormatter {
        &self.formatter
    }

    /// Characters kept from a description in moderation listings
    pub fn excerpt_chars(&self) -> usize {
        self.presentation.excerpt_chars
    }

    // === Policies ===

    pub fn cascade(&self) -> CascadeConfig {
        self.cascade
    }

    /// Deadline applied by [`Self::within_request_deadline`]
    pub fn request_deadline(&self) -> Duration {
        self.request.deadline
    }

    /// Run `fut`, giving up after `deadline`.
    ///
    /// On timeout the future is dropped, which cancels every store call it
    /// still has in flight, including concurrent branches.
    pub async fn within<T, F>(&self, deadline: Duration, fut: F) -> ServiceResult<T>
    where
        F: Future<Output = ServiceResult<T>>,
    {
        if let Ok(result) = tokio::time::timeout(deadline, fut).await {
            result
        } else {
            warn!(deadline_ms = deadline.as_millis() as u64, "Deadline exceeded");
            Err(ServiceError::DeadlineExceeded)
        }
    }

    /// [`Self::within`] using the configured request deadline
    pub async fn within_request_deadline<T, F>(&self, fut: F) -> ServiceResult<T>
    where
        F: Future<Output = ServiceResult<T>>,
    {
        self.within(self.request.deadline, fut).await
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("repositories", &"...")
            .field("formatter", &self.formatter)
            .field("presentation", &self.presentation)
            .field("cascade", &self.cascade)
            .field("request", &self.request)
            .finish()
    }
}

/// Builder for creating ServiceContext with custom repositories
///
/// Repositories are required; presentation, cascade and request settings
/// fall back to their defaults, and the clock to wall-clock time.
pub struct ServiceContextBuilder {
    user_repo: Option<Arc<dyn UserRepository>>,
    tweet_repo: Option<Arc<dyn TweetRepository>>,
    reply_repo: Option<Arc<dyn ReplyRepository>>,
    like_repo: Option<Arc<dyn LikeRepository>>,
    metrics_repo: Option<Arc<dyn MetricsRepository>>,
    clock: Option<Arc<dyn Clock>>,
    presentation: PresentationConfig,
    cascade: CascadeConfig,
    request: RequestConfig,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self {
            user_repo: None,
            tweet_repo: None,
            reply_repo: None,
            like_repo: None,
            metrics_repo: None,
            clock: None,
            presentation: PresentationConfig::default(),
            cascade: CascadeConfig::default(),
            request: RequestConfig::default(),
        }
    }

    pub fn user_repo(mut self, repo: Arc<dyn UserRepository>) -> Self {
        self.user_repo = Some(repo);
        self
    }

    pub fn tweet_repo(mut self, repo: Arc<dyn TweetRepository>) -> Self {
        self.tweet_repo = Some(repo);
        self
    }

    pub fn reply_repo(mut self, repo: Arc<dyn ReplyRepository>) -> Self {
        self.reply_repo = Some(repo);
        self
    }

    pub fn like_repo(mut self, repo: Arc<dyn LikeRepository>) -> Self {
        self.like_repo = Some(repo);
        self
    }

    pub fn metrics_repo(mut self, repo: Arc<dyn MetricsRepository>) -> Self {
        self.metrics_repo = Some(repo);
        self
    }

    pub fn clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = Some(clock);
        self
    }

    pub fn presentation(mut self, presentation: PresentationConfig) -> Self {
        self.presentation = presentation;
        self
    }

    pub fn cascade(mut self, cascade: CascadeConfig) -> Self {
        self.cascade = cascade;
        self
    }

    pub fn request(mut self, request: RequestConfig) -> Self {
        self.request = request;
        self
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns `ServiceError::Validation` if any repository is missing
    pub fn build(self) -> ServiceResult<ServiceContext> {
        let clock = self.clock.unwrap_or_else(|| Arc::new(SystemClock));
        Ok(ServiceContext {
            user_repo: self
                .user_repo
                .ok_or_else(|| ServiceError::validation("user_repo is required"))?,
            tweet_repo: self
                .tweet_repo
                .ok_or_else(|| ServiceError::validation("tweet_repo is required"))?,
            reply_repo: self
                .reply_repo
                .ok_or_else(|| ServiceError::validation("reply_repo is required"))?,
            like_repo: self
                .like_repo
                .ok_or_else(|| ServiceError::validation("like_repo is required"))?,
            metrics_repo: self
                .metrics_repo
                .ok_or_else(|| ServiceError::validation("metrics_repo is required"))?,
            formatter: RelativeTimeFormatter::new(self.presentation.locale, clock),
            presentation: self.presentation,
            cascade: self.cascade,
            request: self.request,
        })
    }
}

impl Default for ServiceContextBuilder {
    fn default() -> Self {
        Self::new()
    }
}
