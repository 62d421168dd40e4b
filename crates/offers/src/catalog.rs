//! Offer templates embedded at build time.

use anyhow::{Context, Result};
use serde::Deserialize;

pub const CATEGORIES: [&str; 5] = [
    "make_money",
    "ai_tools",
    "crypto_airdrops",
    "newsletters",
    "gadgets",
];

pub const PLATFORMS: [&str; 4] = ["ClickBank", "Digistore24", "SparkLoop", "beehiiv"];

/// Platforms that pay per newsletter subscriber rather than per sale.
pub const NEWSLETTER_PLATFORMS: [&str; 2] = ["SparkLoop", "beehiiv"];

const TEMPLATES_JSON: &str = include_str!("templates.json");

/// One catalogue entry; generated offers draw commission and gravity uniformly from the ranges.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct OfferTemplate {
    pub title: String,
    pub description: String,
    pub category: String,
    pub platform: String,
    pub commission_range: (f64, f64),
    pub gravity_range: (f64, f64),
}

/// Parses the embedded catalogue.
pub(crate) fn load_templates() -> Result<Vec<OfferTemplate>> {
    let templates: Vec<OfferTemplate> =
        serde_json::from_str(TEMPLATES_JSON).context("invalid embedded offer templates")?;
    if templates.is_empty() {
        anyhow::bail!("embedded offer catalogue is empty");
    }
    Ok(templates)
}
