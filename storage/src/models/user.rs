//! User models with referral bookkeeping.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// User to insert on first contact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    /// Telegram user id.
    pub user_id: i64,
    pub username: String,
    pub first_name: String,
    pub referral_code: String,
    /// Code of the user who referred this one.
    pub referred_by: Option<String>,
}

/// One row from the `users` table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct UserRecord {
    pub id: i64,
    pub user_id: i64,
    pub username: String,
    pub first_name: String,
    pub referral_code: String,
    pub referred_by: Option<String>,
    pub referral_count: i64,
    pub total_earnings: f64,
    pub created_at: DateTime<Utc>,
    pub last_active: DateTime<Utc>,
}

impl UserRecord {
    /// Name for public lists: first name, then username, then `fallback`.
    pub fn display_name<'a>(&'a self, fallback: &'a str) -> &'a str {
        if !self.first_name.is_empty() {
            &self.first_name
        } else if !self.username.is_empty() {
            &self.username
        } else {
            fallback
        }
    }
}
