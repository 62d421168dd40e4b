//! Channel post log.

use chrono::Utc;

use super::TrendRepository;
use crate::error::StorageError;
use crate::models::PostRecord;

impl TrendRepository {
    /// Records that `offer_id` was published as `message_id` in `channel_id`.
    pub async fn log_post(
        &self,
        offer_id: i64,
        channel_id: &str,
        message_id: i64,
    ) -> Result<i64, StorageError> {
        let result = sqlx::query(
            "INSERT INTO posts (offer_id, channel_id, message_id, posted_at) VALUES (?, ?, ?, ?)",
        )
        .bind(offer_id)
        .bind(channel_id)
        .bind(message_id)
        .bind(Utc::now())
        .execute(self.pool())
        .await?;
        Ok(result.last_insert_rowid())
    }

    pub async fn count_posts(&self) -> Result<i64, StorageError> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM posts")
            .fetch_one(self.pool())
            .await?;
        Ok(count)
    }

    /// Most recent posts first.
    pub async fn get_recent_posts(&self, limit: i64) -> Result<Vec<PostRecord>, StorageError> {
        let posts = sqlx::query_as::<_, PostRecord>(
            "SELECT * FROM posts ORDER BY posted_at DESC, id DESC LIMIT ?",
        )
        .bind(limit)
        .fetch_all(self.pool())
        .await?;
        Ok(posts)
    }
}
