//! Properties that hold for any store contents

use chrono::Duration;

use chirp_common::Locale;
use chirp_core::Viewer;
use chirp_service::services::rank;
use chirp_service::{FeedService, MetricsService, ModerationService, RankingService};
use integration_tests::{TestWorld, WorldOptions};

#[tokio::test]
async fn counts_match_stored_rows() {
    let world = TestWorld::new();
    let users = [
        world.user("u0").await,
        world.user("u1").await,
        world.user("u2").await,
        world.user("u3").await,
    ];

    let mut tweets = Vec::new();
    for (i, user) in users.iter().enumerate() {
        tweets.extend(world.tweets(user, i + 1).await);
    }
    for (i, tweet) in tweets.iter().enumerate() {
        for (j, user) in users.iter().enumerate() {
            if (i + j) % 3 == 0 {
                world.like(tweet, user).await;
            }
            if (i * j) % 4 == 1 {
                world.reply(tweet, user, "noted").await;
            }
        }
    }
    world.follow(&users[0], &users[1]).await;
    world.follow(&users[2], &users[1]).await;
    world.follow(&users[1], &users[3]).await;

    let metrics = MetricsService::new(&world.ctx);
    for tweet in &tweets {
        let counts = metrics.tweet_metrics(tweet.id, &Viewer::Anonymous).await.unwrap();
        assert_eq!(counts.likes_num, world.store.like_count_for(tweet.id) as i64);
        assert_eq!(counts.replies_num, world.store.reply_count_for(tweet.id) as i64);
    }

    for (i, user) in users.iter().enumerate() {
        let counts = metrics.user_metrics(user.id).await.unwrap();
        assert_eq!(counts.tweets_num, (i + 1) as i64);

        let received: usize = tweets
            .iter()
            .filter(|t| t.author_id == user.id)
            .map(|t| world.store.like_count_for(t.id))
            .sum();
        assert_eq!(counts.likes_num, received as i64);
    }

    let followed = metrics.user_metrics(users[1].id).await.unwrap();
    assert_eq!((followed.followers_num, followed.followings_num), (2, 1));
}

#[tokio::test]
async fn like_flag_tracks_current_rows() {
    let world = TestWorld::new();
    let author = world.user("author").await;
    let fan = world.user("fan").await;
    let tweet = world.tweet(&author, "flip").await;
    let metrics = MetricsService::new(&world.ctx);
    let viewer = Viewer::user(fan.id);

    assert!(!metrics.is_liked_by(tweet.id, &viewer).await.unwrap());

    world.like(&tweet, &fan).await;
    assert!(metrics.is_liked_by(tweet.id, &viewer).await.unwrap());
    assert!(!metrics.is_liked_by(tweet.id, &Viewer::Anonymous).await.unwrap());

    assert_eq!(world.unlike(&tweet, &fan).await, 1);
    assert!(!metrics.is_liked_by(tweet.id, &viewer).await.unwrap());
    let counts = metrics.tweet_metrics(tweet.id, &viewer).await.unwrap();
    assert_eq!(counts.likes_num, 0);
    assert!(!counts.is_liked);
}

#[tokio::test]
async fn ranking_is_sorted_and_idempotent() {
    let world = TestWorld::new();
    let users = [
        world.user("p").await,
        world.user("q").await,
        world.user("r").await,
        world.user("s").await,
    ];
    let p_tweets = world.tweets(&users[0], 2).await;
    world.tweets(&users[1], 2).await;
    world.tweets(&users[3], 1).await;
    world.like(&p_tweets[0], &users[2]).await;

    let ranked = RankingService::new(&world.ctx).rank_users().await.unwrap();
    assert_eq!(ranked.len(), users.len());

    for pair in ranked.windows(2) {
        let a = &pair[0].metrics;
        let b = &pair[1].metrics;
        let key = |m: &chirp_service::dto::UserMetrics| {
            (m.tweets_num, m.likes_num, m.followers_num, m.followings_num)
        };
        assert!(key(a) >= key(b));
    }

    // p and q tie on tweets, likes decide
    let order: Vec<_> = ranked.iter().map(|u| u.id).collect();
    assert_eq!(order, vec![users[0].id, users[1].id, users[3].id, users[2].id]);

    assert_eq!(rank(ranked.clone()), ranked);
}

#[tokio::test]
async fn fully_tied_users_keep_id_order() {
    let world = TestWorld::new();
    let first = world.user("first").await;
    let second = world.user("second").await;
    let third = world.user("third").await;

    let ranked = RankingService::new(&world.ctx).rank_users().await.unwrap();
    let order: Vec<_> = ranked.iter().map(|u| u.id).collect();
    assert_eq!(order, vec![first.id, second.id, third.id]);
}

#[tokio::test]
async fn tweet_ranking_prefers_likes_then_replies() {
    let world = TestWorld::new();
    let admin = world.admin_viewer().await;
    let author = world.user("author").await;
    let fan = world.user("fan").await;
    let tweets = world.tweets(&author, 3).await;

    world.like(&tweets[0], &fan).await;
    world.like(&tweets[1], &fan).await;
    world.reply(&tweets[1], &fan, "and a reply").await;

    let ranked = ModerationService::new(&world.ctx)
        .rank_tweets(&admin)
        .await
        .unwrap();
    let order: Vec<_> = ranked.iter().map(|t| t.id).collect();
    assert_eq!(order, vec![tweets[1].id, tweets[0].id, tweets[2].id]);
    assert_eq!(rank(ranked.clone()), ranked);
}

#[tokio::test]
async fn labels_age_with_the_clock() {
    let world = TestWorld::new();
    let author = world.user("author").await;
    world.tweet(&author, "aging").await;
    let feed = FeedService::new(&world.ctx);

    let steps = [
        (Duration::zero(), "幾秒前"),
        (Duration::seconds(30), "幾秒前"),
        (Duration::seconds(30), "1 分鐘前"),
        (Duration::minutes(9), "10 分鐘前"),
        (Duration::minutes(110), "2 小時前"),
        (Duration::hours(22), "1 天前"),
        (Duration::days(39), "1 個月前"),
        (Duration::days(360), "1 年前"),
    ];

    for (advance, expected) in steps {
        world.advance(advance);
        let listing = feed
            .list_tweets_by_author(author.id, &Viewer::Anonymous)
            .await
            .unwrap();
        assert_eq!(listing[0].from_now, expected);
    }
}

#[tokio::test]
async fn english_labels_follow_locale() {
    let world = TestWorld::with_options(WorldOptions {
        locale: Locale::En,
        ..WorldOptions::default()
    });
    let author = world.user("author").await;
    world.tweet(&author, "hello").await;
    world.advance(Duration::hours(3));

    let listing = FeedService::new(&world.ctx)
        .list_tweets_by_author(author.id, &Viewer::Anonymous)
        .await
        .unwrap();
    assert_eq!(listing[0].from_now, "3 hours ago");
}

#[tokio::test]
async fn excerpts_never_split_characters() {
    let world = TestWorld::new();
    let admin = world.admin_viewer().await;
    let author = world.user("author").await;
    let text = "推文".repeat(40);
    world.tweet(&author, &text).await;
    world.advance(Duration::seconds(1));
    world.tweet(&author, "剛好").await;

    let summaries = ModerationService::new(&world.ctx)
        .list_tweets(&admin)
        .await
        .unwrap();

    assert_eq!(summaries[0].description, "剛好");
    assert_eq!(summaries[1].description.chars().count(), 50);
    assert!(text.starts_with(&summaries[1].description));
}
