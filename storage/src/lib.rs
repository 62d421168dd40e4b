//! Storage crate: SQLite persistence for offers, users, referrals and channel posts.
//!
//! ## Modules
//!
//! - [`error`] – Storage error types
//! - [`models`] – OfferRecord, UserRecord, ReferralRecord, PostRecord and their insert payloads
//! - [`trend_repo`] – TrendRepository (SQLite)
//! - [`sqlite_pool`] – SqlitePoolManager

mod error;
mod models;
mod sqlite_pool;
mod trend_repo;

pub use error::StorageError;
pub use models::{
    CountByKey, NewOffer, NewReferral, NewUser, OfferQuery, OfferRecord, OfferStats, PostRecord,
    ReferralRecord, ReferralStatus, UserRecord,
};
pub use sqlite_pool::SqlitePoolManager;
pub use trend_repo::TrendRepository;
