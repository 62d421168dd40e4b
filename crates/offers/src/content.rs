//! Channel post rendering in Telegram HTML.

use rand::seq::SliceRandom;
use rand::Rng;
use storage::OfferRecord;

use crate::catalog::NEWSLETTER_PLATFORMS;
use crate::format::{html_escape, title_case_category};

const HOOKS: [&str; 7] = [
    "🚨 MONEY OPPORTUNITY ALERT!",
    "💰 EXCLUSIVE DEAL DISCOVERED!",
    "🔥 TRENDING NOW - LIMITED TIME!",
    "⚡ INSTANT PROFIT OPPORTUNITY!",
    "🎯 HIGH-COMMISSION ALERT!",
    "💎 PREMIUM OPPORTUNITY FOUND!",
    "🚀 VIRAL MONEY-MAKER SPOTTED!",
];

const CTAS: [&str; 7] = [
    "👆 CLICK TO CLAIM YOUR OPPORTUNITY",
    "🔗 TAP HERE TO START EARNING",
    "💰 CLICK NOW - LIMITED SPOTS",
    "⚡ INSTANT ACCESS - CLICK HERE",
    "🎯 CLAIM YOUR COMMISSION NOW",
    "🚀 START EARNING TODAY - CLICK",
    "💎 EXCLUSIVE ACCESS - TAP HERE",
];

const URGENCY: [&str; 5] = [
    "⏰ Limited time offer - Act fast!",
    "🔥 Trending now - Don't miss out!",
    "⚡ High demand - Secure your spot!",
    "💎 Exclusive access - Limited availability!",
    "🚀 Viral opportunity - Join now!",
];

fn category_emojis(category: &str) -> &'static [&'static str] {
    match category {
        "make_money" => &["💰", "💵", "🤑", "💸", "🏆", "💎", "🚀"],
        "ai_tools" => &["🤖", "⚡", "🚀", "💡", "🔥", "⭐", "🎯"],
        "crypto_airdrops" => &["🪙", "💎", "🚀", "📈", "⭐", "🔥", "💰"],
        "newsletters" => &["📧", "📰", "📊", "💌", "🎯", "📈", "⭐"],
        "gadgets" => &["📱", "💻", "⌚", "🎧", "🔌", "🚀", "💡"],
        _ => &["🔥"],
    }
}

/// Renders promotional posts for offers.
#[derive(Debug, Clone, Default)]
pub struct ContentGenerator;

impl ContentGenerator {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, offer: &OfferRecord) -> String {
        self.render_with(offer, &mut rand::thread_rng())
    }

    pub fn render_with<R: Rng + ?Sized>(&self, offer: &OfferRecord, rng: &mut R) -> String {
        let emoji = category_emojis(&offer.category)
            .choose(rng)
            .copied()
            .unwrap_or("🔥");
        let hook = HOOKS.choose(rng).copied().unwrap_or(HOOKS[0]);
        let cta = CTAS.choose(rng).copied().unwrap_or(CTAS[0]);
        let urgency = URGENCY.choose(rng).copied().unwrap_or(URGENCY[0]);

        let mut post = format!("{emoji} <b>{hook}</b> {emoji}\n\n");
        post.push_str(&format!("🎯 <b>{}</b>\n\n", html_escape(&offer.title)));
        post.push_str(&commission_line(offer));
        post.push('\n');
        post.push_str(&format!(
            "⭐ <b>Platform</b>: {}\n",
            html_escape(&offer.platform)
        ));
        post.push_str(&format!(
            "📈 <b>Category</b>: {}\n",
            html_escape(&title_case_category(&offer.category))
        ));
        if let Some(gravity) = offer.gravity {
            post.push_str(&format!("🔥 <b>Popularity</b>: {:.0}/100\n", gravity));
        }
        post.push_str(&format!("\n{}\n\n", html_escape(&offer.description)));
        post.push_str(cta);
        post.push('\n');
        post.push_str(&format!("🔗 {}\n\n", html_escape(&offer.affiliate_link)));
        post.push_str(&format!("<i>{}</i>", urgency));
        post
    }
}

/// Newsletter platforms pay per subscriber; everything else per sale.
fn commission_line(offer: &OfferRecord) -> String {
    if NEWSLETTER_PLATFORMS.contains(&offer.platform.as_str()) {
        format!("💵 <b>Earn</b>: ${:.2} per subscriber", offer.commission)
    } else {
        format!("💵 <b>Commission</b>: ${:.2}", offer.commission)
    }
}
