//! Integration tests for [`storage::TrendRepository`].
//!
//! Covers offer listing/stats, user upsert, referral crediting and the leaderboard, and the post
//! log, using an in-memory SQLite database (plus one on-disk database for reopen behaviour).

use storage::{
    NewOffer, NewReferral, NewUser, OfferQuery, ReferralStatus, StorageError, TrendRepository,
};
use tempfile::TempDir;

async fn memory_repo() -> TrendRepository {
    TrendRepository::new("sqlite::memory:")
        .await
        .expect("Failed to create repository")
}

fn offer(title: &str, category: &str, platform: &str, commission: f64) -> NewOffer {
    NewOffer {
        title: title.to_string(),
        description: format!("{} description", title),
        category: category.to_string(),
        commission,
        gravity: Some(50.0),
        affiliate_link: format!("https://trendbot.link/{}/1?ref=trendbot", platform.to_lowercase()),
        platform: platform.to_string(),
    }
}

fn new_user(user_id: i64, first_name: &str, code: &str, referred_by: Option<&str>) -> NewUser {
    NewUser {
        user_id,
        username: first_name.to_lowercase(),
        first_name: first_name.to_string(),
        referral_code: code.to_string(),
        referred_by: referred_by.map(String::from),
    }
}

fn confirmed(code: &str, referred_user_id: i64, reward: f64) -> NewReferral {
    NewReferral {
        referrer_code: code.to_string(),
        referred_user_id,
        reward_amount: reward,
        status: ReferralStatus::Confirmed,
    }
}

/// **Test: offers come back newest first and can be filtered by category.**
#[tokio::test]
async fn test_get_offers_newest_first_with_category_filter() {
    let repo = memory_repo().await;

    repo.save_offer(&offer("First", "ai_tools", "ClickBank", 30.0))
        .await
        .unwrap();
    repo.save_offer(&offer("Second", "make_money", "Digistore24", 40.0))
        .await
        .unwrap();
    let third = repo
        .save_offer(&offer("Third", "ai_tools", "SparkLoop", 3.0))
        .await
        .unwrap();

    let latest = repo.get_offers(&OfferQuery::latest(2)).await.unwrap();
    assert_eq!(latest.len(), 2);
    assert_eq!(latest[0].id, third);
    assert_eq!(latest[0].title, "Third");
    assert_eq!(latest[1].title, "Second");

    let ai = repo
        .get_offers(&OfferQuery::in_category("ai_tools", 10))
        .await
        .unwrap();
    assert_eq!(ai.len(), 2);
    assert!(ai.iter().all(|o| o.category == "ai_tools"));

    assert_eq!(repo.count_offers().await.unwrap(), 3);
}

/// **Test: batch save returns ids in order and the row keeps every field.**
#[tokio::test]
async fn test_save_offers_batch_and_get_by_id() {
    let repo = memory_repo().await;
    let mut batch = vec![
        offer("A", "gadgets", "beehiiv", 2.5),
        offer("B", "newsletters", "beehiiv", 4.0),
    ];
    batch[1].gravity = None;

    let ids = repo.save_offers(&batch).await.unwrap();
    assert_eq!(ids.len(), 2);
    assert!(ids[0] < ids[1]);

    let b = repo.get_offer_by_id(ids[1]).await.unwrap().unwrap();
    assert_eq!(b.title, "B");
    assert_eq!(b.gravity, None);
    assert_eq!(b.commission, 4.0);
    assert_eq!(b.platform, "beehiiv");

    assert!(repo.get_offer_by_id(9999).await.unwrap().is_none());
}

/// **Test: stats average commissions and rank platforms/categories by count.**
#[tokio::test]
async fn test_offer_stats() {
    let repo = memory_repo().await;

    let empty = repo.get_offer_stats().await.unwrap();
    assert_eq!(empty.total_offers, 0);
    assert_eq!(empty.average_commission, 0.0);
    assert!(empty.top_platform().is_none());

    repo.save_offers(&[
        offer("A", "ai_tools", "ClickBank", 10.0),
        offer("B", "ai_tools", "ClickBank", 20.0),
        offer("C", "gadgets", "beehiiv", 30.0),
    ])
    .await
    .unwrap();

    let stats = repo.get_offer_stats().await.unwrap();
    assert_eq!(stats.total_offers, 3);
    assert!((stats.average_commission - 20.0).abs() < 1e-9);
    assert_eq!(stats.top_platform(), Some("ClickBank"));
    assert_eq!(stats.top_category(), Some("ai_tools"));
    assert_eq!(stats.by_platform[1].key, "beehiiv");
    assert_eq!(stats.by_platform[1].count, 1);
}

/// **Test: saving a known user updates names and keeps the original referral code.**
#[tokio::test]
async fn test_save_user_insert_then_update() {
    let repo = memory_repo().await;

    let id = repo
        .save_user(&new_user(12345, "Alice", "LUXAAAA0001", None))
        .await
        .unwrap();

    let mut again = new_user(12345, "Alicia", "LUXBBBB0002", None);
    again.username = "alicia".to_string();
    let same_id = repo.save_user(&again).await.unwrap();
    assert_eq!(id, same_id);

    let stored = repo.get_user(12345).await.unwrap().unwrap();
    assert_eq!(stored.first_name, "Alicia");
    assert_eq!(stored.username, "alicia");
    assert_eq!(stored.referral_code, "LUXAAAA0001");
    assert_eq!(stored.referral_count, 0);
    assert_eq!(stored.total_earnings, 0.0);

    assert!(repo.get_user(999).await.unwrap().is_none());
    assert!(repo.touch_user(12345).await.unwrap());
    assert!(!repo.touch_user(999).await.unwrap());
    assert_eq!(repo.count_users().await.unwrap(), 1);
}

/// **Test: a second user cannot take an existing referral code.**
#[tokio::test]
async fn test_duplicate_referral_code_is_already_exists() {
    let repo = memory_repo().await;
    repo.save_user(&new_user(1, "Alice", "LUXDUPLICATE", None))
        .await
        .unwrap();

    let err = repo
        .save_user(&new_user(2, "Bob", "LUXDUPLICATE", None))
        .await
        .unwrap_err();
    assert!(matches!(err, StorageError::AlreadyExists(_)), "got {:?}", err);
}

/// **Test: create_user inserts once and reports repeats as None.**
#[tokio::test]
async fn test_create_user_is_insert_only() {
    let repo = memory_repo().await;

    let first = repo
        .create_user(&new_user(7, "Carol", "LUXCCCC0003", None))
        .await
        .unwrap();
    assert!(first.is_some());

    let again = repo
        .create_user(&new_user(7, "Caroline", "LUXDDDD0004", Some("LUXCCCC0003")))
        .await
        .unwrap();
    assert!(again.is_none());

    let stored = repo.get_user(7).await.unwrap().unwrap();
    assert_eq!(stored.first_name, "Carol");
    assert_eq!(stored.referral_code, "LUXCCCC0003");
    assert_eq!(stored.referred_by, None);

    let err = repo
        .create_user(&new_user(8, "Dan", "LUXCCCC0003", None))
        .await
        .unwrap_err();
    assert!(matches!(err, StorageError::AlreadyExists(_)), "got {:?}", err);
}

/// **Test: referral flow credits the referrer once per referral.**
///
/// Mirrors the referral walkthrough: Alice refers Bob, Alice's count and earnings go up,
/// Bob's record keeps the referrer's code, and Alice shows on the leaderboard.
#[tokio::test]
async fn test_referral_credits_referrer_and_leaderboard() {
    let repo = memory_repo().await;

    repo.save_user(&new_user(12345, "Alice", "LUXALICE001", None))
        .await
        .unwrap();
    repo.save_user(&new_user(67890, "Bob", "LUXBOB00002", Some("LUXALICE001")))
        .await
        .unwrap();

    repo.save_referral(&confirmed("LUXALICE001", 67890, 5.0))
        .await
        .unwrap();

    let alice = repo.get_user(12345).await.unwrap().unwrap();
    assert_eq!(alice.referral_count, 1);
    assert!((alice.total_earnings - 5.0).abs() < 1e-9);

    let bob = repo.get_user(67890).await.unwrap().unwrap();
    assert_eq!(bob.referred_by.as_deref(), Some("LUXALICE001"));

    let by_code = repo
        .get_user_by_referral_code("LUXALICE001")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(by_code.user_id, 12345);

    let referrals = repo.get_referrals("LUXALICE001").await.unwrap();
    assert_eq!(referrals.len(), 1);
    assert_eq!(referrals[0].referred_user_id, 67890);
    assert_eq!(referrals[0].status(), ReferralStatus::Confirmed);

    let board = repo.get_leaderboard(5).await.unwrap();
    assert_eq!(board.len(), 1);
    assert_eq!(board[0].user_id, 12345);
}

/// **Test: unknown referrer code is rejected and nothing is written.**
#[tokio::test]
async fn test_referral_with_unknown_code_is_not_found() {
    let repo = memory_repo().await;
    repo.save_user(&new_user(1, "Bob", "LUXBOB00001", None))
        .await
        .unwrap();

    let err = repo
        .save_referral(&confirmed("LUXNOBODY000", 1, 5.0))
        .await
        .unwrap_err();
    assert!(matches!(err, StorageError::NotFound(_)));
    assert!(repo.get_referrals("LUXNOBODY000").await.unwrap().is_empty());
}

/// **Test: a referred signup writes the user and the credit together, or neither.**
#[tokio::test]
async fn test_create_referred_user_is_all_or_nothing() {
    let repo = memory_repo().await;
    repo.save_user(&new_user(1, "Alice", "LUXA0000001", None))
        .await
        .unwrap();

    let created = repo
        .create_referred_user(
            &new_user(2, "Bob", "LUXB0000002", Some("LUXA0000001")),
            &confirmed("LUXA0000001", 2, 5.0),
        )
        .await
        .unwrap();
    assert!(created.is_some());
    let alice = repo.get_user(1).await.unwrap().unwrap();
    assert_eq!(alice.referral_count, 1);
    assert_eq!(repo.get_referrals("LUXA0000001").await.unwrap().len(), 1);

    // Repeat signup: nothing new is written and the referrer is not credited again.
    let again = repo
        .create_referred_user(
            &new_user(2, "Bob", "LUXB0000003", Some("LUXA0000001")),
            &confirmed("LUXA0000001", 2, 5.0),
        )
        .await
        .unwrap();
    assert!(again.is_none());
    assert_eq!(repo.get_user(1).await.unwrap().unwrap().referral_count, 1);

    // Failing credit rolls the user row back, so no referrer is recorded without a credit.
    let err = repo
        .create_referred_user(
            &new_user(3, "Cid", "LUXC0000003", Some("LUXGONE0000")),
            &confirmed("LUXGONE0000", 3, 5.0),
        )
        .await
        .unwrap_err();
    assert!(matches!(err, StorageError::NotFound(_)), "got {:?}", err);
    assert!(repo.get_user(3).await.unwrap().is_none());

    // Colliding referral code: rolled back as well, and reported for a retry.
    let err = repo
        .create_referred_user(
            &new_user(4, "Dee", "LUXA0000001", Some("LUXA0000001")),
            &confirmed("LUXA0000001", 4, 5.0),
        )
        .await
        .unwrap_err();
    assert!(matches!(err, StorageError::AlreadyExists(_)), "got {:?}", err);
    assert!(repo.get_user(4).await.unwrap().is_none());
    assert_eq!(repo.get_user(1).await.unwrap().unwrap().referral_count, 1);
}

/// **Test: leaderboard skips users without referrals and breaks count ties by earnings.**
#[tokio::test]
async fn test_leaderboard_ordering() {
    let repo = memory_repo().await;
    for (id, name, code) in [
        (1, "Ann", "LUXANN000001"),
        (2, "Ben", "LUXBEN000002"),
        (3, "Cat", "LUXCAT000003"),
        (4, "Dan", "LUXDAN000004"),
    ] {
        repo.save_user(&new_user(id, name, code, None)).await.unwrap();
    }

    // Ann: 1 referral worth 5; Ben: 2 worth 5+5; Cat: 1 worth 9; Dan: none.
    repo.save_referral(&confirmed("LUXANN000001", 4, 5.0))
        .await
        .unwrap();
    repo.save_referral(&confirmed("LUXBEN000002", 4, 5.0))
        .await
        .unwrap();
    repo.save_referral(&confirmed("LUXBEN000002", 3, 5.0))
        .await
        .unwrap();
    repo.save_referral(&confirmed("LUXCAT000003", 1, 9.0))
        .await
        .unwrap();

    let board = repo.get_leaderboard(10).await.unwrap();
    let names: Vec<&str> = board.iter().map(|u| u.first_name.as_str()).collect();
    assert_eq!(names, vec!["Ben", "Cat", "Ann"]);

    let top_two = repo.get_leaderboard(2).await.unwrap();
    assert_eq!(top_two.len(), 2);
}

/// **Test: posts are logged against their offer and listed newest first.**
#[tokio::test]
async fn test_log_post_and_recent_posts() {
    let repo = memory_repo().await;
    let offer_id = repo
        .save_offer(&offer("A", "ai_tools", "ClickBank", 30.0))
        .await
        .unwrap();

    repo.log_post(offer_id, "@trend_channel", 10).await.unwrap();
    repo.log_post(offer_id, "@trend_channel", 11).await.unwrap();

    assert_eq!(repo.count_posts().await.unwrap(), 2);
    let recent = repo.get_recent_posts(1).await.unwrap();
    assert_eq!(recent.len(), 1);
    assert_eq!(recent[0].message_id, 11);
    assert_eq!(recent[0].channel_id, "@trend_channel");
    assert_eq!(recent[0].offer_id, offer_id);
}

/// **Test: an on-disk database is created and keeps data across reopen.**
#[tokio::test]
async fn test_file_database_persists_across_reopen() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("trendbot.db");
    let url = path.to_str().unwrap();

    {
        let repo = TrendRepository::new(url).await.unwrap();
        repo.save_offer(&offer("Kept", "gadgets", "Digistore24", 15.0))
            .await
            .unwrap();
    }
    assert!(path.exists());

    let reopened = TrendRepository::new(url).await.unwrap();
    let offers = reopened.get_offers(&OfferQuery::latest(10)).await.unwrap();
    assert_eq!(offers.len(), 1);
    assert_eq!(offers[0].title, "Kept");
}
