//! Referral bookkeeping and the leaderboard.

use chrono::Utc;
use tracing::info;

use sqlx::SqliteConnection;

use super::TrendRepository;
use crate::error::StorageError;
use crate::models::{NewReferral, ReferralRecord, UserRecord};

impl TrendRepository {
    /// Records a referral and credits the referrer (`referral_count + 1`,
    /// `total_earnings + reward`) atomically. Fails with NotFound if no user owns the code.
    pub async fn save_referral(&self, referral: &NewReferral) -> Result<i64, StorageError> {
        let mut tx = self.pool().begin().await?;
        let id = insert_referral(&mut tx, referral).await?;
        tx.commit().await?;

        info!(
            referrer_code = %referral.referrer_code,
            referred_user_id = referral.referred_user_id,
            reward = referral.reward_amount,
            "Saved referral"
        );
        Ok(id)
    }

    /// Referrals credited to the code, newest first.
    pub async fn get_referrals(
        &self,
        referrer_code: &str,
    ) -> Result<Vec<ReferralRecord>, StorageError> {
        let referrals = sqlx::query_as::<_, ReferralRecord>(
            "SELECT * FROM referrals WHERE referrer_code = ? ORDER BY created_at DESC, id DESC",
        )
        .bind(referrer_code)
        .fetch_all(self.pool())
        .await?;
        Ok(referrals)
    }

    /// Users with at least one referral, by referral count then earnings.
    pub async fn get_leaderboard(&self, limit: i64) -> Result<Vec<UserRecord>, StorageError> {
        let users = sqlx::query_as::<_, UserRecord>(
            r#"
            SELECT * FROM users
            WHERE referral_count > 0
            ORDER BY referral_count DESC, total_earnings DESC, id ASC
            LIMIT ?
            "#,
        )
        .bind(limit)
        .fetch_all(self.pool())
        .await?;
        Ok(users)
    }
}

/// Credits the referrer and inserts the referral row on `conn`; the caller owns the transaction.
pub(super) async fn insert_referral(
    conn: &mut SqliteConnection,
    referral: &NewReferral,
) -> Result<i64, StorageError> {
    let now = Utc::now();
    let credited = sqlx::query(
        r#"
        UPDATE users SET
            referral_count = referral_count + 1,
            total_earnings = total_earnings + ?
        WHERE referral_code = ?
        "#,
    )
    .bind(referral.reward_amount)
    .bind(&referral.referrer_code)
    .execute(&mut *conn)
    .await?;

    if credited.rows_affected() == 0 {
        return Err(StorageError::NotFound(format!(
            "referral code {}",
            referral.referrer_code
        )));
    }

    let result = sqlx::query(
        r#"
        INSERT INTO referrals (referrer_code, referred_user_id, reward_amount, status, created_at, updated_at)
        VALUES (?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(&referral.referrer_code)
    .bind(referral.referred_user_id)
    .bind(referral.reward_amount)
    .bind(referral.status.as_str())
    .bind(now)
    .bind(now)
    .execute(&mut *conn)
    .await?;
    Ok(result.last_insert_rowid())
}
