//! Trend repository: persistence and queries for offers, users, referrals and posts.
//!
//! Uses SqlitePoolManager and the models. One type covers all four tables because referral
//! bookkeeping touches `users` and `referrals` in the same transaction.

mod offers;
mod posts;
mod referrals;
mod users;

use crate::error::StorageError;
use crate::sqlite_pool::SqlitePoolManager;
use sqlx::SqlitePool;
use tracing::{error, info};

#[derive(Clone)]
pub struct TrendRepository {
    pool_manager: SqlitePoolManager,
}

impl TrendRepository {
    /// Opens (or creates) the database and ensures the schema exists.
    pub async fn new(database_url: &str) -> Result<Self, StorageError> {
        let pool_manager = SqlitePoolManager::new(database_url).await.map_err(|e| {
            error!(error = %e, database_url = %database_url, "Failed to open database");
            StorageError::from(e)
        })?;
        let repo = Self { pool_manager };
        repo.init().await?;
        Ok(repo)
    }

    fn pool(&self) -> &SqlitePool {
        self.pool_manager.pool()
    }

    async fn init(&self) -> Result<(), StorageError> {
        info!("Creating database tables if not exist");

        let pool = self.pool();

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS offers (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                title TEXT NOT NULL,
                description TEXT NOT NULL DEFAULT '',
                category TEXT NOT NULL DEFAULT '',
                commission REAL NOT NULL DEFAULT 0.0,
                gravity REAL,
                affiliate_link TEXT NOT NULL DEFAULT '',
                platform TEXT NOT NULL DEFAULT '',
                created_at TEXT NOT NULL,
                updated_at TEXT NOT NULL
            )
            "#,
        )
        .execute(pool)
        .await?;

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS users (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                user_id INTEGER UNIQUE NOT NULL,
                username TEXT NOT NULL DEFAULT '',
                first_name TEXT NOT NULL DEFAULT '',
                referral_code TEXT UNIQUE NOT NULL,
                referred_by TEXT,
                referral_count INTEGER NOT NULL DEFAULT 0,
                total_earnings REAL NOT NULL DEFAULT 0.0,
                created_at TEXT NOT NULL,
                last_active TEXT NOT NULL
            )
            "#,
        )
        .execute(pool)
        .await?;

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS referrals (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                referrer_code TEXT NOT NULL,
                referred_user_id INTEGER NOT NULL,
                reward_amount REAL NOT NULL DEFAULT 0.0,
                status TEXT NOT NULL DEFAULT 'pending',
                created_at TEXT NOT NULL,
                updated_at TEXT NOT NULL,
                FOREIGN KEY (referred_user_id) REFERENCES users (user_id)
            )
            "#,
        )
        .execute(pool)
        .await?;

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS posts (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                offer_id INTEGER NOT NULL,
                channel_id TEXT NOT NULL,
                message_id INTEGER NOT NULL,
                posted_at TEXT NOT NULL,
                FOREIGN KEY (offer_id) REFERENCES offers (id)
            )
            "#,
        )
        .execute(pool)
        .await?;

        sqlx::query(
            r#"
            CREATE INDEX IF NOT EXISTS idx_offers_category ON offers(category);
            CREATE INDEX IF NOT EXISTS idx_offers_created_at ON offers(created_at);
            CREATE INDEX IF NOT EXISTS idx_referrals_referrer_code ON referrals(referrer_code);
            CREATE INDEX IF NOT EXISTS idx_users_referral_count ON users(referral_count);
            CREATE INDEX IF NOT EXISTS idx_posts_posted_at ON posts(posted_at);
            "#,
        )
        .execute(pool)
        .await?;

        info!("Database tables created successfully");
        Ok(())
    }
}
