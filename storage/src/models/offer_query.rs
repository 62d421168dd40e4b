//! Query parameters for listing offers.

use serde::{Deserialize, Serialize};

/// Filter for TrendRepository::get_offers. Results are newest first.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OfferQuery {
    /// Only offers in this category.
    pub category: Option<String>,
    /// Maximum number of rows to return.
    pub limit: i64,
}

impl OfferQuery {
    pub fn latest(limit: i64) -> Self {
        Self {
            category: None,
            limit,
        }
    }

    pub fn in_category(category: impl Into<String>, limit: i64) -> Self {
        Self {
            category: Some(category.into()),
            limit,
        }
    }
}

impl Default for OfferQuery {
    fn default() -> Self {
        Self::latest(10)
    }
}
