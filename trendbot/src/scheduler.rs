//! Periodic channel posting.

use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::{error, info};

use crate::service::TrendBotService;

/// Spawns the posting loop: wait `first_delay`, then post every `interval`.
///
/// A failed post is logged and the loop keeps going. Abort the returned handle to stop it.
pub fn spawn_post_scheduler(
    service: Arc<TrendBotService>,
    first_delay: Duration,
    interval: Duration,
) -> JoinHandle<()> {
    // tokio's interval panics on a zero period.
    let interval = interval.max(Duration::from_millis(1));
    info!(
        first_delay_secs = first_delay.as_secs(),
        interval_secs = interval.as_secs(),
        "Scheduling channel posts"
    );

    tokio::spawn(async move {
        tokio::time::sleep(first_delay).await;

        let mut ticker = tokio::time::interval(interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        loop {
            ticker.tick().await;
            match service.post_to_channel().await {
                Ok(outcome) => info!(
                    offer_id = outcome.offer_id,
                    message_id = outcome.message_id,
                    "Scheduled post sent"
                ),
                Err(e) => error!(error = %e, "Scheduled post failed"),
            }
        }
    })
}
