//! Data models for storage (offers, users, referrals, posts, queries, stats).
//!
//! Used by TrendRepository and callers of the storage API.

mod offer;
mod offer_query;
mod offer_stats;
mod post;
mod referral;
mod user;

pub use offer::{NewOffer, OfferRecord};
pub use offer_query::OfferQuery;
pub use offer_stats::{CountByKey, OfferStats};
pub use post::PostRecord;
pub use referral::{NewReferral, ReferralRecord, ReferralStatus};
pub use user::{NewUser, UserRecord};
