//! Record of an offer published to a channel.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One row from the `posts` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct PostRecord {
    pub id: i64,
    pub offer_id: i64,
    pub channel_id: String,
    pub message_id: i64,
    pub posted_at: DateTime<Utc>,
}
