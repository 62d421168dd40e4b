//! Offer models: insert payload and stored row.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Offer fields supplied by a generator or importer; ids and timestamps are assigned on save.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewOffer {
    pub title: String,
    pub description: String,
    pub category: String,
    /// Dollars per sale, or per subscriber on newsletter platforms.
    pub commission: f64,
    /// Popularity score 0–100, when the platform reports one.
    pub gravity: Option<f64>,
    pub affiliate_link: String,
    pub platform: String,
}

/// One row from the `offers` table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct OfferRecord {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub category: String,
    pub commission: f64,
    pub gravity: Option<f64>,
    pub affiliate_link: String,
    pub platform: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
