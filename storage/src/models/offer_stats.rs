//! Aggregate statistics for the offer catalogue.
//!
//! Returned by TrendRepository::get_offer_stats.

use serde::{Deserialize, Serialize};

/// How many offers share one platform or category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct CountByKey {
    pub key: String,
    pub count: i64,
}

/// Catalogue totals; breakdowns are sorted by count (desc) then key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OfferStats {
    pub total_offers: i64,
    pub average_commission: f64,
    pub by_platform: Vec<CountByKey>,
    pub by_category: Vec<CountByKey>,
}

impl OfferStats {
    pub fn top_platform(&self) -> Option<&str> {
        self.by_platform.first().map(|c| c.key.as_str())
    }

    pub fn top_category(&self) -> Option<&str> {
        self.by_category.first().map(|c| c.key.as_str())
    }

    /// Sum of one conversion on every offer.
    pub fn revenue_potential(&self) -> f64 {
        self.average_commission * self.total_offers as f64
    }

    /// One average conversion per day over 30 days.
    pub fn monthly_projection(&self) -> f64 {
        self.average_commission * 30.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn projections_follow_average() {
        let stats = OfferStats {
            total_offers: 4,
            average_commission: 12.5,
            by_platform: vec![CountByKey {
                key: "ClickBank".to_string(),
                count: 4,
            }],
            by_category: vec![],
        };
        assert_eq!(stats.revenue_potential(), 50.0);
        assert_eq!(stats.monthly_projection(), 375.0);
        assert_eq!(stats.top_platform(), Some("ClickBank"));
        assert_eq!(stats.top_category(), None);
    }
}
