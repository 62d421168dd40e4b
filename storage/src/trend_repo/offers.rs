//! Offer catalogue queries.

use chrono::Utc;
use tracing::info;

use super::TrendRepository;
use crate::error::StorageError;
use crate::models::{CountByKey, NewOffer, OfferQuery, OfferRecord, OfferStats};

impl TrendRepository {
    /// Inserts an offer and returns its id.
    pub async fn save_offer(&self, offer: &NewOffer) -> Result<i64, StorageError> {
        let now = Utc::now();
        let result = sqlx::query(
            r#"
            INSERT INTO offers (title, description, category, commission, gravity, affiliate_link, platform, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&offer.title)
        .bind(&offer.description)
        .bind(&offer.category)
        .bind(offer.commission)
        .bind(offer.gravity)
        .bind(&offer.affiliate_link)
        .bind(&offer.platform)
        .bind(now)
        .bind(now)
        .execute(self.pool())
        .await?;

        Ok(result.last_insert_rowid())
    }

    /// Inserts offers in one transaction and returns their ids in input order.
    pub async fn save_offers(&self, offers: &[NewOffer]) -> Result<Vec<i64>, StorageError> {
        let mut tx = self.pool().begin().await?;
        let mut ids = Vec::with_capacity(offers.len());
        let now = Utc::now();

        for offer in offers {
            let result = sqlx::query(
                r#"
                INSERT INTO offers (title, description, category, commission, gravity, affiliate_link, platform, created_at, updated_at)
                VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
                "#,
            )
            .bind(&offer.title)
            .bind(&offer.description)
            .bind(&offer.category)
            .bind(offer.commission)
            .bind(offer.gravity)
            .bind(&offer.affiliate_link)
            .bind(&offer.platform)
            .bind(now)
            .bind(now)
            .execute(&mut *tx)
            .await?;
            ids.push(result.last_insert_rowid());
        }

        tx.commit().await?;
        info!(count = ids.len(), "Saved offers");
        Ok(ids)
    }

    /// Newest offers first, optionally limited to one category.
    pub async fn get_offers(&self, query: &OfferQuery) -> Result<Vec<OfferRecord>, StorageError> {
        let offers = match &query.category {
            Some(category) => {
                sqlx::query_as::<_, OfferRecord>(
                    "SELECT * FROM offers WHERE category = ? ORDER BY created_at DESC, id DESC LIMIT ?",
                )
                .bind(category)
                .bind(query.limit)
                .fetch_all(self.pool())
                .await?
            }
            None => {
                sqlx::query_as::<_, OfferRecord>(
                    "SELECT * FROM offers ORDER BY created_at DESC, id DESC LIMIT ?",
                )
                .bind(query.limit)
                .fetch_all(self.pool())
                .await?
            }
        };

        Ok(offers)
    }

    pub async fn get_offer_by_id(&self, id: i64) -> Result<Option<OfferRecord>, StorageError> {
        let offer = sqlx::query_as::<_, OfferRecord>("SELECT * FROM offers WHERE id = ?")
            .bind(id)
            .fetch_optional(self.pool())
            .await?;
        Ok(offer)
    }

    pub async fn count_offers(&self) -> Result<i64, StorageError> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM offers")
            .fetch_one(self.pool())
            .await?;
        Ok(count)
    }

    /// Totals and per-platform / per-category breakdowns over the whole catalogue.
    pub async fn get_offer_stats(&self) -> Result<OfferStats, StorageError> {
        let pool = self.pool();

        let (total_offers, average_commission): (i64, Option<f64>) =
            sqlx::query_as("SELECT COUNT(*), AVG(commission) FROM offers")
                .fetch_one(pool)
                .await?;

        let by_platform = sqlx::query_as::<_, CountByKey>(
            "SELECT platform AS key, COUNT(*) AS count FROM offers GROUP BY platform ORDER BY count DESC, key ASC",
        )
        .fetch_all(pool)
        .await?;

        let by_category = sqlx::query_as::<_, CountByKey>(
            "SELECT category AS key, COUNT(*) AS count FROM offers GROUP BY category ORDER BY count DESC, key ASC",
        )
        .fetch_all(pool)
        .await?;

        Ok(OfferStats {
            total_offers,
            average_commission: average_commission.unwrap_or(0.0),
            by_platform,
            by_category,
        })
    }
}
