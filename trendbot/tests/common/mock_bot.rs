//! Mock implementation of [`trendbot_core::Bot`] for integration tests.
//!
//! Records every sent message on an unbounded channel so tests can assert on destination and
//! text without hitting Telegram. Can be told to fail sends to given destinations, or the next
//! N sends.

use async_trait::async_trait;
use std::sync::atomic::{AtomicI32, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use tokio::sync::mpsc;
use trendbot_core::{Bot, BotError, Destination, Result, SentMessage};

/// One recorded successful send.
#[derive(Debug, Clone)]
pub struct SentRecord {
    pub destination: Destination,
    pub text: String,
    pub message_id: i32,
}

pub struct MockBot {
    tx: mpsc::UnboundedSender<SentRecord>,
    next_id: AtomicI32,
    blocked: Mutex<Vec<Destination>>,
    failures_remaining: AtomicUsize,
}

impl MockBot {
    /// Creates a MockBot and returns the receiver for sent records. Message ids start at 100.
    pub fn with_receiver() -> (Arc<Self>, mpsc::UnboundedReceiver<SentRecord>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let bot = Arc::new(Self {
            tx,
            next_id: AtomicI32::new(100),
            blocked: Mutex::new(Vec::new()),
            failures_remaining: AtomicUsize::new(0),
        });
        (bot, rx)
    }

    /// Every send to `destination` fails from now on.
    pub fn block(&self, destination: Destination) {
        self.blocked.lock().unwrap().push(destination);
    }

    /// The next `n` sends fail regardless of destination.
    pub fn fail_next(&self, n: usize) {
        self.failures_remaining.store(n, Ordering::SeqCst);
    }

    fn take_failure(&self) -> bool {
        self.failures_remaining
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1))
            .is_ok()
    }
}

#[async_trait]
impl Bot for MockBot {
    async fn send_message(&self, destination: &Destination, text: &str) -> Result<SentMessage> {
        if self.take_failure() {
            return Err(BotError::Bot("injected failure".to_string()));
        }
        if self.blocked.lock().unwrap().contains(destination) {
            return Err(BotError::Bot("Forbidden: bot was blocked by the user".to_string()));
        }

        let message_id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let _ = self.tx.send(SentRecord {
            destination: destination.clone(),
            text: text.to_string(),
            message_id,
        });
        let chat_id = match destination {
            Destination::Id(id) => *id,
            Destination::Username(_) => -1_001_000_000_000,
        };
        Ok(SentMessage {
            chat_id,
            message_id,
        })
    }
}

/// Everything sent so far, without waiting.
pub fn drain(rx: &mut mpsc::UnboundedReceiver<SentRecord>) -> Vec<SentRecord> {
    let mut out = Vec::new();
    while let Ok(record) = rx.try_recv() {
        out.push(record);
    }
    out
}
