//! Tests for offer generation and post rendering.
//!
//! Generation is checked against the catalogue ranges and link format; rendering against the
//! fields a subscriber must see (title, commission wording, platform, link).

use chrono::Utc;
use offers::{ContentGenerator, OfferGenerator, NEWSLETTER_PLATFORMS};
use rand::rngs::StdRng;
use rand::SeedableRng;
use storage::OfferRecord;

fn record(platform: &str, category: &str, commission: f64, gravity: Option<f64>) -> OfferRecord {
    OfferRecord {
        id: 7,
        title: "AI Weekly Insider".to_string(),
        description: "Weekly newsletter covering the latest AI tools & trends.".to_string(),
        category: category.to_string(),
        commission,
        gravity,
        affiliate_link: "https://trendbot.link/sparkloop/7?ref=trendbot".to_string(),
        platform: platform.to_string(),
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

/// **Test: generated offers stay inside their template's ranges and follow the link pattern.**
#[test]
fn test_generated_offers_match_templates() {
    let generator = OfferGenerator::new().unwrap();
    let mut rng = StdRng::seed_from_u64(7);
    let offers = generator.generate_with(200, &mut rng);
    assert_eq!(offers.len(), 200);

    for (i, offer) in offers.iter().enumerate() {
        let template = generator
            .templates()
            .iter()
            .find(|t| offer.title.contains(t.title.as_str()) && t.platform == offer.platform)
            .unwrap_or_else(|| panic!("no template for {:?}", offer.title));

        let (lo, hi) = template.commission_range;
        assert!(offer.commission >= lo && offer.commission <= hi);
        let (glo, ghi) = template.gravity_range;
        let gravity = offer.gravity.unwrap();
        assert!(gravity >= glo && gravity <= ghi);

        assert_eq!(offer.category, template.category);
        assert_eq!(offer.description, template.description);
        assert_eq!(
            offer.affiliate_link,
            format!(
                "https://trendbot.link/{}/{}?ref=trendbot",
                template.platform.to_lowercase(),
                i + 1
            )
        );
    }
}

/// **Test: all four title variations show up over enough draws.**
#[test]
fn test_title_variations() {
    let generator = OfferGenerator::new().unwrap();
    let mut rng = StdRng::seed_from_u64(42);
    let offers = generator.generate_with(300, &mut rng);

    assert!(offers.iter().any(|o| o.title.ends_with(" - Limited Time")));
    assert!(offers.iter().any(|o| o.title.starts_with("🔥 ")));
    assert!(offers.iter().any(|o| o.title.ends_with(" 2025 Edition")));
    assert!(offers
        .iter()
        .any(|o| generator.templates().iter().any(|t| t.title == o.title)));
}

#[test]
fn test_generate_zero_and_empty_templates() {
    let generator = OfferGenerator::new().unwrap();
    assert!(generator.generate(0).is_empty());
    assert!(OfferGenerator::with_templates(Vec::new()).is_err());
}

/// **Test: newsletter platforms advertise a per-subscriber payout.**
#[test]
fn test_render_newsletter_commission() {
    assert!(NEWSLETTER_PLATFORMS.contains(&"SparkLoop"));
    let content = ContentGenerator::new();
    let mut rng = StdRng::seed_from_u64(1);
    let post = content.render_with(&record("SparkLoop", "ai_tools", 4.5, Some(72.4)), &mut rng);

    assert!(post.contains("<b>AI Weekly Insider</b>"));
    assert!(post.contains("💵 <b>Earn</b>: $4.50 per subscriber"));
    assert!(post.contains("⭐ <b>Platform</b>: SparkLoop"));
    assert!(post.contains("📈 <b>Category</b>: Ai Tools"));
    assert!(post.contains("🔥 <b>Popularity</b>: 72/100"));
    assert!(post.contains("AI tools &amp; trends."));
    assert!(post.contains("🔗 https://trendbot.link/sparkloop/7?ref=trendbot"));
}

/// **Test: sales platforms show a plain commission; popularity is omitted without gravity.**
#[test]
fn test_render_sales_commission_without_gravity() {
    let content = ContentGenerator::new();
    let post = content.render(&record("ClickBank", "make_money", 97.0, None));

    assert!(post.contains("💵 <b>Commission</b>: $97.00"));
    assert!(!post.contains("per subscriber"));
    assert!(!post.contains("Popularity"));
    assert!(post.contains("📈 <b>Category</b>: Make Money"));
    assert!(post.ends_with("</i>"));
}
