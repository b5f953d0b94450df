//! End-to-end scenarios over the in-memory store

use chrono::Duration;

use chirp_core::Viewer;
use chirp_service::{FeedService, ModerationService, RankingService, ServiceError};
use integration_tests::{TestWorld, WorldOptions};

#[tokio::test]
async fn tweets_by_author_carry_counts_and_viewer_flag() {
    let world = TestWorld::new();
    let alice = world.user("alice").await;
    let viewer1 = world.user("viewer1").await;
    let viewer2 = world.user("viewer2").await;

    let tweets = world.tweets(&alice, 3).await;
    world.like(&tweets[0], &viewer1).await;
    world.like(&tweets[0], &viewer2).await;

    let listing = FeedService::new(&world.ctx)
        .list_tweets_by_author(alice.id, &Viewer::user(viewer1.id))
        .await
        .unwrap();

    let ids: Vec<_> = listing.iter().map(|t| t.id).collect();
    assert_eq!(ids, vec![tweets[2].id, tweets[1].id, tweets[0].id]);

    let first = &listing[2];
    assert_eq!(first.likes_num, 2);
    assert!(first.is_liked);
    assert_eq!(first.author.account, "alice");
    assert!(!listing[0].is_liked);
    assert_eq!(listing[0].likes_num, 0);
}

async fn delete_tweet_cascades(options: WorldOptions) {
    let world = TestWorld::with_options(options);
    let admin = world.admin_viewer().await;
    let author = world.user("author").await;
    let replier1 = world.user("replier1").await;
    let replier2 = world.user("replier2").await;
    let fan = world.user("fan").await;

    let tweet = world.tweet(&author, "soon gone").await;
    world.reply(&tweet, &replier1, "first!").await;
    world.reply(&tweet, &replier2, "second").await;
    world.like(&tweet, &fan).await;

    let moderation = ModerationService::new(&world.ctx);
    let record = moderation.delete_tweet(&admin, tweet.id).await.unwrap();
    assert_eq!(record.id, tweet.id);
    assert_eq!(record.user_id, author.id);
    assert_eq!(record.description, "soon gone");

    let feed = FeedService::new(&world.ctx);
    assert!(feed.list_replies_by_author(replier1.id).await.unwrap().is_empty());
    assert!(feed.list_replies_by_author(replier2.id).await.unwrap().is_empty());
    assert!(feed.list_liked_tweets_by_user(fan.id).await.unwrap().is_empty());

    let again = moderation.delete_tweet(&admin, tweet.id).await.unwrap_err();
    assert!(again.is_not_found());
}

#[tokio::test]
async fn delete_tweet_cascades_transactionally() {
    delete_tweet_cascades(WorldOptions::default()).await;
}

#[tokio::test]
async fn delete_tweet_cascades_concurrently() {
    delete_tweet_cascades(WorldOptions::concurrent(3)).await;
}

#[tokio::test]
async fn rank_users_orders_by_tweets_before_likes() {
    let world = TestWorld::new();
    let a = world.user("a").await;
    let b = world.user("b").await;
    let likers = [
        world.user("l1").await,
        world.user("l2").await,
        world.user("l3").await,
        world.user("l4").await,
    ];

    let a_tweets = world.tweets(&a, 5).await;
    let b_tweets = world.tweets(&b, 2).await;

    // A: 10 likes received, B: 20
    for liker in &likers {
        for tweet in &a_tweets[..2] {
            world.like(tweet, liker).await;
        }
        for _ in 0..5 {
            world.like(&b_tweets[0], liker).await;
        }
    }
    world.like(&a_tweets[4], &likers[0]).await;
    world.like(&a_tweets[4], &likers[1]).await;

    // A: 3 followers, 1 following
    for liker in &likers[..3] {
        world.follow(liker, &a).await;
    }
    world.follow(&a, &likers[3]).await;

    let ranked = RankingService::new(&world.ctx).rank_users().await.unwrap();
    assert_eq!(ranked[0].id, a.id);
    assert_eq!(ranked[1].id, b.id);

    let a_row = &ranked[0].metrics;
    assert_eq!(
        (a_row.tweets_num, a_row.likes_num, a_row.followers_num, a_row.followings_num),
        (5, 10, 3, 1)
    );
    let b_row = &ranked[1].metrics;
    assert_eq!(
        (b_row.tweets_num, b_row.likes_num, b_row.followers_num, b_row.followings_num),
        (2, 20, 0, 0)
    );
}

#[tokio::test]
async fn moderation_summary_truncates_long_descriptions() {
    let world = TestWorld::new();
    let admin = world.admin_viewer().await;
    let author = world.user("writer").await;
    let long = "x".repeat(120);
    world.tweet(&author, &long).await;
    world.advance(Duration::seconds(1));
    world.tweet(&author, "short").await;

    let summaries = ModerationService::new(&world.ctx)
        .list_tweets(&admin)
        .await
        .unwrap();

    assert_eq!(summaries.len(), 2);
    assert_eq!(summaries[0].description, "short");
    assert_eq!(summaries[1].description.chars().count(), 50);
    assert!(long.starts_with(&summaries[1].description));
}

#[tokio::test]
async fn anonymous_viewer_gets_false_like_flags() {
    let world = TestWorld::new();
    let author = world.user("author").await;
    let fan = world.user("fan").await;
    let tweet = world.tweet(&author, "public").await;
    world.like(&tweet, &fan).await;

    let listing = FeedService::new(&world.ctx)
        .list_tweets_by_author(author.id, &Viewer::Anonymous)
        .await
        .unwrap();

    assert_eq!(listing.len(), 1);
    assert_eq!(listing[0].likes_num, 1);
    assert!(!listing[0].is_liked);

    let json = serde_json::to_value(&listing).unwrap();
    assert_eq!(json[0]["isLiked"], false);
    assert_eq!(json[0]["likesNum"], 1);
}

#[tokio::test]
async fn unknown_root_user_is_not_found() {
    let world = TestWorld::new();
    let err = FeedService::new(&world.ctx)
        .list_tweets_by_author(chirp_core::EntityId::new(404), &Viewer::Anonymous)
        .await
        .unwrap_err();
    assert!(matches!(err, ServiceError::NotFound { resource: "User", .. }));
}
