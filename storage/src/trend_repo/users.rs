//! User queries: first-contact insert, activity updates, lookups.

use chrono::Utc;
use tracing::info;

use sqlx::SqliteConnection;

use super::referrals::insert_referral;
use super::TrendRepository;
use crate::error::StorageError;
use crate::models::{NewReferral, NewUser, UserRecord};

impl TrendRepository {
    /// Inserts the user, or refreshes `username`, `first_name` and `last_active` when the
    /// Telegram id is already known. Returns the row id either way.
    ///
    /// A clash on `referral_code` with another user surfaces as [`StorageError::AlreadyExists`].
    pub async fn save_user(&self, user: &NewUser) -> Result<i64, StorageError> {
        let now = Utc::now();
        let mut tx = self.pool().begin().await?;

        let existing: Option<(i64,)> = sqlx::query_as("SELECT id FROM users WHERE user_id = ?")
            .bind(user.user_id)
            .fetch_optional(&mut *tx)
            .await?;

        let id = match existing {
            Some((id,)) => {
                sqlx::query(
                    "UPDATE users SET username = ?, first_name = ?, last_active = ? WHERE user_id = ?",
                )
                .bind(&user.username)
                .bind(&user.first_name)
                .bind(now)
                .bind(user.user_id)
                .execute(&mut *tx)
                .await?;
                id
            }
            None => {
                let result = sqlx::query(
                    r#"
                    INSERT INTO users (user_id, username, first_name, referral_code, referred_by, created_at, last_active)
                    VALUES (?, ?, ?, ?, ?, ?, ?)
                    "#,
                )
                .bind(user.user_id)
                .bind(&user.username)
                .bind(&user.first_name)
                .bind(&user.referral_code)
                .bind(&user.referred_by)
                .bind(now)
                .bind(now)
                .execute(&mut *tx)
                .await?;
                info!(user_id = user.user_id, referral_code = %user.referral_code, "Created user");
                result.last_insert_rowid()
            }
        };

        tx.commit().await?;
        Ok(id)
    }

    /// Inserts the user only if the Telegram id is new. Returns `None` when the user already
    /// existed, so callers can tell a first contact from a repeated one.
    pub async fn create_user(&self, user: &NewUser) -> Result<Option<i64>, StorageError> {
        let mut conn = self.pool().acquire().await?;
        insert_new_user(&mut conn, user).await
    }

    /// Like [`create_user`](Self::create_user), but also records `referral` and credits the
    /// referrer in the same transaction. Nothing is written when the user already existed or
    /// the referral cannot be saved, so `referred_by` is never set without the credit.
    pub async fn create_referred_user(
        &self,
        user: &NewUser,
        referral: &NewReferral,
    ) -> Result<Option<i64>, StorageError> {
        let mut tx = self.pool().begin().await?;
        let Some(id) = insert_new_user(&mut tx, user).await? else {
            return Ok(None);
        };
        insert_referral(&mut tx, referral).await?;
        tx.commit().await?;

        info!(
            user_id = user.user_id,
            referrer_code = %referral.referrer_code,
            reward = referral.reward_amount,
            "Created referred user"
        );
        Ok(Some(id))
    }

    /// Marks the user active now; returns false if the user is unknown.
    pub async fn touch_user(&self, user_id: i64) -> Result<bool, StorageError> {
        let result = sqlx::query("UPDATE users SET last_active = ? WHERE user_id = ?")
            .bind(Utc::now())
            .bind(user_id)
            .execute(self.pool())
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Looks a user up by Telegram id.
    pub async fn get_user(&self, user_id: i64) -> Result<Option<UserRecord>, StorageError> {
        let user = sqlx::query_as::<_, UserRecord>("SELECT * FROM users WHERE user_id = ?")
            .bind(user_id)
            .fetch_optional(self.pool())
            .await?;
        Ok(user)
    }

    pub async fn get_user_by_referral_code(
        &self,
        referral_code: &str,
    ) -> Result<Option<UserRecord>, StorageError> {
        let user = sqlx::query_as::<_, UserRecord>("SELECT * FROM users WHERE referral_code = ?")
            .bind(referral_code)
            .fetch_optional(self.pool())
            .await?;
        Ok(user)
    }

    pub async fn count_users(&self) -> Result<i64, StorageError> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM users")
            .fetch_one(self.pool())
            .await?;
        Ok(count)
    }
}

/// `INSERT … ON CONFLICT(user_id) DO NOTHING`; `None` when the Telegram id is taken.
async fn insert_new_user(
    conn: &mut SqliteConnection,
    user: &NewUser,
) -> Result<Option<i64>, StorageError> {
    let now = Utc::now();
    let result = sqlx::query(
        r#"
        INSERT INTO users (user_id, username, first_name, referral_code, referred_by, created_at, last_active)
        VALUES (?, ?, ?, ?, ?, ?, ?)
        ON CONFLICT(user_id) DO NOTHING
        "#,
    )
    .bind(user.user_id)
    .bind(&user.username)
    .bind(&user.first_name)
    .bind(&user.referral_code)
    .bind(&user.referred_by)
    .bind(now)
    .bind(now)
    .execute(&mut *conn)
    .await?;

    if result.rows_affected() == 0 {
        return Ok(None);
    }
    info!(user_id = user.user_id, referral_code = %user.referral_code, "Created user");
    Ok(Some(result.last_insert_rowid()))
}
