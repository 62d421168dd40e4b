//! Referral models: status, insert payload and stored row.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::StorageError;

/// Lifecycle of a referral reward. Stored as lower-case text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReferralStatus {
    Pending,
    Confirmed,
    Paid,
}

impl ReferralStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReferralStatus::Pending => "pending",
            ReferralStatus::Confirmed => "confirmed",
            ReferralStatus::Paid => "paid",
        }
    }
}

impl fmt::Display for ReferralStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReferralStatus {
    type Err = StorageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(ReferralStatus::Pending),
            "confirmed" => Ok(ReferralStatus::Confirmed),
            "paid" => Ok(ReferralStatus::Paid),
            other => Err(StorageError::Database(format!(
                "unknown referral status: {}",
                other
            ))),
        }
    }
}

/// Referral to record; crediting the referrer happens in the same transaction.
#[derive(Debug, Clone, PartialEq)]
pub struct NewReferral {
    pub referrer_code: String,
    pub referred_user_id: i64,
    pub reward_amount: f64,
    pub status: ReferralStatus,
}

/// One row from the `referrals` table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct ReferralRecord {
    pub id: i64,
    pub referrer_code: String,
    pub referred_user_id: i64,
    pub reward_amount: f64,
    /// Raw status text; see [`ReferralRecord::status`].
    #[sqlx(rename = "status")]
    pub status_text: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ReferralRecord {
    /// Parsed status; unknown values read as pending.
    pub fn status(&self) -> ReferralStatus {
        self.status_text.parse().unwrap_or(ReferralStatus::Pending)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_text_round_trips() {
        for status in [
            ReferralStatus::Pending,
            ReferralStatus::Confirmed,
            ReferralStatus::Paid,
        ] {
            assert_eq!(status.as_str().parse::<ReferralStatus>().unwrap(), status);
        }
        assert!("refunded".parse::<ReferralStatus>().is_err());
    }
}
