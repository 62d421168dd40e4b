//! Random offers drawn from the embedded catalogue.

use anyhow::Result;
use rand::seq::SliceRandom;
use rand::Rng;
use storage::NewOffer;

use crate::catalog::{load_templates, OfferTemplate};

/// Generates offers from catalogue templates with randomized commission, gravity and title.
#[derive(Debug, Clone)]
pub struct OfferGenerator {
    templates: Vec<OfferTemplate>,
}

impl OfferGenerator {
    /// Uses the embedded catalogue.
    pub fn new() -> Result<Self> {
        Ok(Self {
            templates: load_templates()?,
        })
    }

    /// Uses the given templates; fails if there are none.
    pub fn with_templates(templates: Vec<OfferTemplate>) -> Result<Self> {
        if templates.is_empty() {
            anyhow::bail!("offer generator needs at least one template");
        }
        Ok(Self { templates })
    }

    pub fn templates(&self) -> &[OfferTemplate] {
        &self.templates
    }

    pub fn generate(&self, count: usize) -> Vec<NewOffer> {
        self.generate_with(count, &mut rand::thread_rng())
    }

    /// Offer `i` (0-based) links to `https://trendbot.link/{platform}/{i + 1}?ref=trendbot`.
    pub fn generate_with<R: Rng + ?Sized>(&self, count: usize, rng: &mut R) -> Vec<NewOffer> {
        (0..count)
            .filter_map(|i| {
                let template = self.templates.choose(rng)?;
                Some(NewOffer {
                    title: title_variation(&template.title, rng),
                    description: template.description.clone(),
                    category: template.category.clone(),
                    commission: uniform(template.commission_range, rng),
                    gravity: Some(uniform(template.gravity_range, rng)),
                    affiliate_link: format!(
                        "https://trendbot.link/{}/{}?ref=trendbot",
                        template.platform.to_lowercase(),
                        i + 1
                    ),
                    platform: template.platform.clone(),
                })
            })
            .collect()
    }
}

fn uniform<R: Rng + ?Sized>((lo, hi): (f64, f64), rng: &mut R) -> f64 {
    if lo >= hi {
        lo
    } else {
        rng.gen_range(lo..=hi)
    }
}

fn title_variation<R: Rng + ?Sized>(title: &str, rng: &mut R) -> String {
    match rng.gen_range(0..4) {
        0 => title.to_string(),
        1 => format!("{} - Limited Time", title),
        2 => format!("🔥 {}", title),
        _ => format!("{} 2025 Edition", title),
    }
}
