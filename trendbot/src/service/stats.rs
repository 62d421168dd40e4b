//! Runtime counters and duration formatting for /status.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

/// Process-lifetime counters. Reset on restart; the database keeps the durable history.
#[derive(Debug)]
pub struct BotStats {
    posts_sent: AtomicU64,
    offers_generated: AtomicU64,
    started: Instant,
}

impl Default for BotStats {
    fn default() -> Self {
        Self::new()
    }
}

impl BotStats {
    pub fn new() -> Self {
        Self {
            posts_sent: AtomicU64::new(0),
            offers_generated: AtomicU64::new(0),
            started: Instant::now(),
        }
    }

    pub fn posts_sent(&self) -> u64 {
        self.posts_sent.load(Ordering::Relaxed)
    }

    pub fn offers_generated(&self) -> u64 {
        self.offers_generated.load(Ordering::Relaxed)
    }

    pub fn record_post(&self) {
        self.posts_sent.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_generated(&self, count: u64) {
        self.offers_generated.fetch_add(count, Ordering::Relaxed);
    }

    pub fn uptime(&self) -> Duration {
        self.started.elapsed()
    }
}

/// `H:MM:SS`, or `N day(s), H:MM:SS` past 24 hours. Sub-second precision is dropped.
pub fn format_uptime(uptime: Duration) -> String {
    let total = uptime.as_secs();
    let days = total / 86_400;
    let hours = (total % 86_400) / 3_600;
    let minutes = (total % 3_600) / 60;
    let seconds = total % 60;
    let clock = format!("{}:{:02}:{:02}", hours, minutes, seconds);
    match days {
        0 => clock,
        1 => format!("1 day, {}", clock),
        n => format!("{} days, {}", n, clock),
    }
}

/// Human cadence for the posting interval, e.g. "every 4 hours".
pub fn format_interval(interval: Duration) -> String {
    let secs = interval.as_secs();
    let (n, unit) = if secs > 0 && secs % 3_600 == 0 {
        (secs / 3_600, "hour")
    } else if secs > 0 && secs % 60 == 0 {
        (secs / 60, "minute")
    } else {
        (secs, "second")
    };
    if n == 1 {
        format!("every {}", unit)
    } else {
        format!("every {} {}s", n, unit)
    }
}
