//! # offers
//!
//! The built-in offer catalogue, random offer generation from it, and rendering of
//! channel posts (Telegram HTML).
//!
//! Generation and rendering take an explicit RNG in their `*_with` forms so tests can seed them.

mod catalog;
mod content;
mod format;
mod generator;
mod referral;

pub use catalog::{OfferTemplate, CATEGORIES, NEWSLETTER_PLATFORMS, PLATFORMS};
pub use content::ContentGenerator;
pub use format::{html_escape, title_case_category};
pub use generator::OfferGenerator;
pub use referral::{is_referral_code, referral_code, referral_code_with};
