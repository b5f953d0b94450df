//! Tweet deletion: strategies, retries, failure reporting and the admin gate

use std::time::Duration;

use chirp_common::{AppError, RequestConfig};
use chirp_core::{CascadeStep, EntityId, Viewer};
use chirp_service::{FeedService, ModerationService, ServiceError};
use integration_tests::{Fault, TestWorld, WorldOptions};

/// A tweet with two replies and one like
async fn seeded(world: &TestWorld) -> (Viewer, chirp_core::Tweet) {
    let admin = world.admin_viewer().await;
    let author = world.user("author").await;
    let other = world.user("other").await;
    let tweet = world.tweet(&author, "under review").await;
    world.reply(&tweet, &other, "one").await;
    world.reply(&tweet, &author, "two").await;
    world.like(&tweet, &other).await;
    (admin, tweet)
}

#[tokio::test]
async fn concurrent_steps_recover_within_retry_budget() {
    let world = TestWorld::with_options(WorldOptions::concurrent(3));
    let (admin, tweet) = seeded(&world).await;

    world.store.fail_times(Fault::DeleteReplies, 2);
    world.store.fail_times(Fault::DeleteLikes, 3);

    let record = ModerationService::new(&world.ctx)
        .delete_tweet(&admin, tweet.id)
        .await
        .unwrap();

    assert_eq!(record.id, tweet.id);
    assert_eq!(world.store.tweet_count(), 0);
    assert_eq!(world.store.reply_count_for(tweet.id), 0);
    assert_eq!(world.store.like_count_for(tweet.id), 0);
}

#[tokio::test]
async fn exhausted_retries_report_failed_steps() {
    let world = TestWorld::with_options(WorldOptions::concurrent(1));
    let (admin, tweet) = seeded(&world).await;

    world.store.fail_times(Fault::DeleteLikes, 5);

    let err = ModerationService::new(&world.ctx)
        .delete_tweet(&admin, tweet.id)
        .await
        .unwrap_err();

    match &err {
        ServiceError::PartialCascadeFailure {
            tweet_id,
            failed_steps,
        } => {
            assert_eq!(*tweet_id, tweet.id);
            assert_eq!(failed_steps, &vec![CascadeStep::Tweet, CascadeStep::Likes]);
        }
        other => panic!("expected PartialCascadeFailure, got {other:?}"),
    }

    // The tweet row stays while a like still references it
    assert_eq!(world.store.tweet_count(), 1);
    assert_eq!(world.store.reply_count_for(tweet.id), 0);
    assert_eq!(world.store.like_count_for(tweet.id), 1);

    assert!(!err.is_not_found());
    assert_eq!(err.status_code(), 500);
    let app: AppError = err.into();
    assert_eq!(app.error_code(), "INCONSISTENT_STATE");
}

#[tokio::test]
async fn several_failed_steps_are_listed_in_order() {
    let world = TestWorld::with_options(WorldOptions::concurrent(0));
    let (admin, tweet) = seeded(&world).await;

    world.store.fail_times(Fault::DeleteTweet, 1);
    world.store.fail_times(Fault::DeleteReplies, 1);

    let err = ModerationService::new(&world.ctx)
        .delete_tweet(&admin, tweet.id)
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        ServiceError::PartialCascadeFailure { ref failed_steps, .. }
            if failed_steps == &[CascadeStep::Tweet, CascadeStep::Replies]
    ));
    assert_eq!(world.store.tweet_count(), 1);
    assert_eq!(world.store.like_count_for(tweet.id), 0);
}

#[tokio::test]
async fn tweet_row_goes_last_in_concurrent_mode() {
    let world = TestWorld::with_options(WorldOptions::concurrent(1));
    let (admin, tweet) = seeded(&world).await;

    world.store.fail_times(Fault::DeleteTweet, 2);

    let err = ModerationService::new(&world.ctx)
        .delete_tweet(&admin, tweet.id)
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        ServiceError::PartialCascadeFailure { ref failed_steps, .. }
            if failed_steps == &[CascadeStep::Tweet]
    ));
    // Dependents are gone, so nothing references a missing tweet
    assert_eq!(world.store.tweet_count(), 1);
    assert_eq!(world.store.reply_count_for(tweet.id), 0);
    assert_eq!(world.store.like_count_for(tweet.id), 0);

    // A second attempt finishes the job
    ModerationService::new(&world.ctx)
        .delete_tweet(&admin, tweet.id)
        .await
        .unwrap();
    assert_eq!(world.store.tweet_count(), 0);
}

#[tokio::test]
async fn transactional_failure_leaves_everything_in_place() {
    let world = TestWorld::new();
    let (admin, tweet) = seeded(&world).await;

    world.store.fail_times(Fault::CascadeMidway, 1);

    let err = ModerationService::new(&world.ctx)
        .delete_tweet(&admin, tweet.id)
        .await
        .unwrap_err();
    assert!(matches!(err, ServiceError::Domain(_)));
    assert!(!err.is_not_found());

    assert_eq!(world.store.tweet_count(), 1);
    assert_eq!(world.store.reply_count_for(tweet.id), 2);
    assert_eq!(world.store.like_count_for(tweet.id), 1);

    // The fault is spent; a retry by the caller succeeds
    ModerationService::new(&world.ctx)
        .delete_tweet(&admin, tweet.id)
        .await
        .unwrap();
    assert_eq!(world.store.reply_count_for(tweet.id), 0);
}

async fn missing_tweet_is_not_found(options: WorldOptions) {
    let world = TestWorld::with_options(options);
    let (admin, tweet) = seeded(&world).await;

    let err = ModerationService::new(&world.ctx)
        .delete_tweet(&admin, EntityId::new(9_999))
        .await
        .unwrap_err();

    assert!(err.is_not_found());
    assert_eq!(err.status_code(), 404);
    assert_eq!(world.store.tweet_count(), 1);
    assert_eq!(world.store.reply_count_for(tweet.id), 2);
    assert_eq!(world.store.like_count_for(tweet.id), 1);
}

#[tokio::test]
async fn missing_tweet_is_not_found_transactional() {
    missing_tweet_is_not_found(WorldOptions::default()).await;
}

#[tokio::test]
async fn missing_tweet_is_not_found_concurrent() {
    missing_tweet_is_not_found(WorldOptions::concurrent(2)).await;
}

#[tokio::test]
async fn only_admins_may_delete() {
    let world = TestWorld::new();
    let (_admin, tweet) = seeded(&world).await;
    let regular = world.user("regular").await;
    let moderation = ModerationService::new(&world.ctx);

    let err = moderation
        .delete_tweet(&Viewer::user(regular.id), tweet.id)
        .await
        .unwrap_err();
    assert!(matches!(err, ServiceError::PermissionDenied { .. }));
    assert_eq!(err.status_code(), 403);

    let err = moderation
        .delete_tweet(&Viewer::Anonymous, tweet.id)
        .await
        .unwrap_err();
    assert!(matches!(err, ServiceError::InvalidViewerContext { .. }));

    assert_eq!(world.store.tweet_count(), 1);
}

#[tokio::test]
async fn moderation_listings_require_admin() {
    let world = TestWorld::new();
    let regular = world.user("regular").await;
    let moderation = ModerationService::new(&world.ctx);
    let viewer = Viewer::user(regular.id);

    assert!(matches!(
        moderation.list_tweets(&viewer).await,
        Err(ServiceError::PermissionDenied { .. })
    ));
    assert!(matches!(
        moderation.rank_users(&viewer).await,
        Err(ServiceError::PermissionDenied { .. })
    ));
    assert!(matches!(
        moderation.rank_tweets(&Viewer::Anonymous).await,
        Err(ServiceError::InvalidViewerContext { .. })
    ));
}

#[tokio::test]
async fn slow_store_trips_the_request_deadline() {
    let world = TestWorld::with_options(WorldOptions {
        request: RequestConfig {
            deadline: Duration::from_millis(20),
        },
        ..WorldOptions::default()
    });
    let author = world.user("author").await;
    world.tweets(&author, 2).await;

    world.store.set_latency(Some(Duration::from_millis(200)));

    let feed = FeedService::new(&world.ctx);
    let err = world
        .ctx
        .within_request_deadline(feed.list_tweets_by_author(author.id, &Viewer::Anonymous))
        .await
        .unwrap_err();

    assert!(matches!(err, ServiceError::DeadlineExceeded));
    assert_eq!(err.status_code(), 504);

    world.store.set_latency(None);
    let listing = world
        .ctx
        .within_request_deadline(feed.list_tweets_by_author(author.id, &Viewer::Anonymous))
        .await
        .unwrap();
    assert_eq!(listing.len(), 2);
}
