//! Test fixtures
//!
//! `TestWorld` bundles an in-memory store, a fixed clock and a
//! `ServiceContext` wired to both. Helpers create rows through the
//! repository traits the same way the signup and posting collaborators do.

use std::sync::Arc;

use chrono::{DateTime, Duration, TimeZone, Utc};

use chirp_common::{CascadeConfig, CascadeStrategy, Locale, PresentationConfig, RequestConfig};
use chirp_core::entities::{Followship, Like, Reply, Tweet, User};
use chirp_core::traits::{
    FollowshipRepository, LikeRepository, ReplyRepository, TweetRepository, UserRepository,
};
use chirp_core::{EntityId, Viewer};
use chirp_service::{FixedClock, ServiceContext, ServiceContextBuilder};

use crate::memory::MemoryStore;

/// Instant every test world starts at
pub fn epoch() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 1, 9, 0, 0)
        .single()
        .expect("valid fixture timestamp")
}

/// Settings for a test world
#[derive(Debug, Clone)]
pub struct WorldOptions {
    pub locale: Locale,
    pub cascade: CascadeConfig,
    pub request: RequestConfig,
}

impl Default for WorldOptions {
    fn default() -> Self {
        Self {
            locale: Locale::ZhTw,
            cascade: CascadeConfig::default(),
            request: RequestConfig::default(),
        }
    }
}

impl WorldOptions {
    /// Concurrent cascade with the given retry budget
    pub fn concurrent(max_retries: u32) -> Self {
        Self {
            cascade: CascadeConfig {
                strategy: CascadeStrategy::Concurrent,
                max_retries,
            },
            ..Self::default()
        }
    }
}

/// In-memory store, clock and service context for one test
pub struct TestWorld {
    pub store: Arc<MemoryStore>,
    pub clock: Arc<FixedClock>,
    pub ctx: ServiceContext,
}

impl TestWorld {
    pub fn new() -> Self {
        Self::with_options(WorldOptions::default())
    }

    pub fn with_options(options: WorldOptions) -> Self {
        let clock = Arc::new(FixedClock::new(epoch()));
        let store = Arc::new(MemoryStore::new(clock.clone()));

        let ctx = ServiceContextBuilder::new()
            .user_repo(store.clone())
            .tweet_repo(store.clone())
            .reply_repo(store.clone())
            .like_repo(store.clone())
            .metrics_repo(store.clone())
            .clock(clock.clone())
            .presentation(PresentationConfig {
                locale: options.locale,
                ..PresentationConfig::default()
            })
            .cascade(options.cascade)
            .request(options.request)
            .build()
            .expect("all repositories supplied");

        Self { store, clock, ctx }
    }

    /// Move the clock forward
    pub fn advance(&self, by: Duration) {
        self.clock.advance(by);
    }

    /// A front-end user with signup defaults
    pub async fn user(&self, account: &str) -> User {
        let user = User::new(
            EntityId::default(),
            account.to_string(),
            account.to_uppercase(),
            format!("{account}@example.com"),
        );
        UserRepository::create(self.store.as_ref(), &user, "$2a$10$fixture")
            .await
            .expect("create user")
    }

    /// An admin account
    pub async fn admin(&self, account: &str) -> User {
        let user = User::new_admin(
            EntityId::default(),
            account.to_string(),
            account.to_uppercase(),
            format!("{account}@example.com"),
        );
        UserRepository::create(self.store.as_ref(), &user, "$2a$10$fixture")
            .await
            .expect("create admin")
    }

    /// An admin viewer backed by a fresh admin account
    pub async fn admin_viewer(&self) -> Viewer {
        let admin = self.admin("root").await;
        Viewer::admin(admin.id)
    }

    pub async fn tweet(&self, author: &User, description: &str) -> Tweet {
        let tweet = Tweet::new(EntityId::default(), author.id, description.to_string())
            .expect("valid description");
        TweetRepository::create(self.store.as_ref(), &tweet)
            .await
            .expect("create tweet")
    }

    pub async fn reply(&self, tweet: &Tweet, author: &User, content: &str) -> Reply {
        let reply = Reply::new(EntityId::default(), tweet.id, author.id, content.to_string());
        ReplyRepository::create(self.store.as_ref(), &reply)
            .await
            .expect("create reply")
    }

    pub async fn like(&self, tweet: &Tweet, user: &User) -> Like {
        let like = Like::new(EntityId::default(), tweet.id, user.id);
        LikeRepository::create(self.store.as_ref(), &like)
            .await
            .expect("create like")
    }

    pub async fn unlike(&self, tweet: &Tweet, user: &User) -> u64 {
        LikeRepository::delete_pair(self.store.as_ref(), tweet.id, user.id)
            .await
            .expect("delete like")
    }

    pub async fn follow(&self, follower: &User, following: &User) -> Followship {
        let edge = Followship::new(EntityId::default(), follower.id, following.id);
        FollowshipRepository::create(self.store.as_ref(), &edge)
            .await
            .expect("create followship")
    }

    /// `n` tweets by `author`, one minute apart
    pub async fn tweets(&self, author: &User, n: usize) -> Vec<Tweet> {
        let mut tweets = Vec::with_capacity(n);
        for i in 0..n {
            tweets.push(self.tweet(author, &format!("tweet {i} by {}", author.account)).await);
            self.advance(Duration::minutes(1));
        }
        tweets
    }
}

impl Default for TestWorld {
    fn default() -> Self {
        Self::new()
    }
}
