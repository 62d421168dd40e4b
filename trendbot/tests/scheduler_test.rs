//! Integration tests for [`trendbot::spawn_post_scheduler`].

mod common;

use common::{channel, service_with, MockBot};
use std::sync::Arc;
use std::time::Duration;
use tokio::time::timeout;
use trendbot::spawn_post_scheduler;

/// **Test: the scheduler posts repeatedly and survives a failed post.**
///
/// The first send fails; later ticks still post to the channel.
#[tokio::test]
async fn test_scheduler_posts_and_keeps_going_after_failure() {
    let (bot, mut rx) = MockBot::with_receiver();
    let service = Arc::new(service_with(bot.clone()).await);
    bot.fail_next(1);

    let handle = spawn_post_scheduler(
        service.clone(),
        Duration::from_millis(10),
        Duration::from_millis(50),
    );

    for _ in 0..2 {
        let record = timeout(Duration::from_secs(10), rx.recv())
            .await
            .expect("scheduler did not post in time")
            .expect("bot dropped");
        assert_eq!(record.destination, channel());
    }
    handle.abort();

    assert!(service.repo().count_posts().await.unwrap() >= 2);
    assert!(service.stats().posts_sent() >= 2);
}

/// **Test: nothing is posted before the first delay.**
#[tokio::test]
async fn test_scheduler_waits_first_delay() {
    let (bot, mut rx) = MockBot::with_receiver();
    let service = Arc::new(service_with(bot.clone()).await);

    let handle = spawn_post_scheduler(service, Duration::from_secs(3600), Duration::from_secs(60));
    tokio::time::sleep(Duration::from_millis(100)).await;
    assert!(rx.try_recv().is_err());
    handle.abort();
}
