//! Reply texts in Telegram HTML. Anything user- or database-supplied goes through `html_escape`.

use chrono::{DateTime, Local};
use offers::{html_escape, title_case_category};
use std::fmt::Write;
use storage::{OfferStats, ReferralRecord, ReferralStatus, UserRecord};

pub const POST_SENT: &str = "✅ Test post sent to channel!";
pub const NO_STATS: &str = "📊 No statistics available yet. Generating offers...";

const MEDALS: [&str; 3] = ["🥇", "🥈", "🥉"];
const RECENT_REFERRALS: usize = 5;

/// `$5` for whole amounts, `$2.50` otherwise.
pub fn reward_label(reward: f64) -> String {
    if reward.fract() == 0.0 {
        format!("${:.0}", reward)
    } else {
        format!("${:.2}", reward)
    }
}

pub fn referral_link(bot_username: &str, code: &str) -> String {
    format!("https://t.me/{}?start={}", bot_username, code)
}

const PITCH: &str = "I'm your premium automated money opportunity finder. \
I discover the most exclusive and high-paying opportunities:

💰 <b>Premium Affiliate Offers</b> - High-commission luxury products
📧 <b>Elite Newsletter Monetization</b> - Exclusive subscriber rewards
🚀 <b>Cutting-Edge AI Tools</b> - Latest technology opportunities
💎 <b>Luxury Crypto Airdrops</b> - Premium blockchain opportunities";

pub fn welcome_new(
    bot_username: &str,
    link: &str,
    referred: bool,
    reward: f64,
    cadence: &str,
) -> String {
    let mut text = format!("💎 <b>Welcome to {}!</b>\n\n", html_escape(bot_username));
    if referred {
        text.push_str("🎉 <b>You were referred by a VIP member!</b>\n\n");
    }
    text.push_str(PITCH);
    let _ = write!(
        text,
        "\n\n<b>🔥 REFERRAL PROGRAM:</b>\n\
         💸 Earn {reward} for each person you refer!\n\
         🔗 Your referral link: {link}\n\
         📊 Share and earn unlimited rewards!\n\n\
         <b>Commands:</b>\n\
         /referral - Get your referral link &amp; stats\n\
         /leaderboard - See top earners\n\
         /help - Show all commands\n\
         /status - Check bot status\n\n\
         🎯 <i>I automatically post premium opportunities {cadence}!</i>\n\n\
         💎 <b>Start earning luxury-level passive income today!</b>",
        reward = reward_label(reward),
        link = html_escape(link),
        cadence = cadence,
    );
    text
}

pub fn welcome_returning(bot_username: &str, user: &UserRecord, link: &str) -> String {
    format!(
        "💎 <b>Welcome back to {name}!</b>\n\n\
         <b>Your Referral Stats:</b>\n\
         👥 Referrals: {count}\n\
         💰 Earnings: ${earnings:.2}\n\
         🔗 Your link: {link}\n\n\
         <b>Quick Commands:</b>\n\
         /referral - Referral dashboard\n\
         /leaderboard - Top earners\n\
         /help - All commands\n\n\
         🎯 <i>Keep sharing to earn more rewards!</i>",
        name = html_escape(bot_username),
        count = user.referral_count,
        earnings = user.total_earnings,
        link = html_escape(link),
    )
}

/// Sent to the referrer when someone joins with their code.
pub fn referral_notification(new_member: &str, reward: f64, total_referrals: i64) -> String {
    format!(
        "🎉 <b>New Referral!</b>\n\n\
         💎 {name} joined using your referral link!\n\
         💰 You earned: ${reward:.2}\n\
         📊 Total referrals: {total}\n\n\
         Keep sharing to earn more! 🚀",
        name = html_escape(new_member),
        reward = reward,
        total = total_referrals,
    )
}

pub fn help(bot_username: &str, reward: f64, cadence: &str) -> String {
    let reward = reward_label(reward);
    format!(
        "💎 <b>{name} Help</b>\n\n\
         <b>🔥 REFERRAL COMMANDS:</b>\n\
         • <code>/referral</code> - Your referral dashboard &amp; link\n\
         • <code>/leaderboard</code> - Top referrers leaderboard\n\
         • <b>Earn {reward} per referral!</b> 💰\n\n\
         <b>📊 BOT COMMANDS:</b>\n\
         • <code>/start</code> - Welcome message\n\
         • <code>/help</code> - Show this help\n\
         • <code>/status</code> - Check bot status\n\
         • <code>/stats</code> - View statistics\n\
         • <code>/post</code> - Send test post to channel\n\n\
         <b>💸 REFERRAL PROGRAM:</b>\n\
         • Share your unique referral link\n\
         • Earn {reward} for each person who joins\n\
         • Unlimited earning potential\n\
         • Instant rewards &amp; notifications\n\
         • Climb the leaderboard for recognition\n\n\
         <b>Exclusive Platforms:</b>\n\
         • <b>ClickBank Premium</b> - High-commission luxury affiliate offers\n\
         • <b>Digistore24 Elite</b> - Premium digital product commissions\n\
         • <b>SparkLoop VIP</b> - Exclusive newsletter monetization ($2-7/subscriber)\n\
         • <b>beehiiv Premium</b> - High-value newsletter growth opportunities\n\n\
         <b>Automation:</b>\n\
         • Posts {cadence} automatically\n\
         • Smart premium offer rotation\n\
         • Category-based luxury content\n\n\
         💎 <i>Bot runs 24/7 to maximize your earning potential!</i>\n\n\
         🚀 <b>Use /referral to start earning immediately!</b>",
        name = html_escape(bot_username),
        reward = reward,
        cadence = cadence,
    )
}

pub struct StatusView<'a> {
    pub offers_loaded: i64,
    pub channel: &'a str,
    pub cadence: &'a str,
    pub uptime: &'a str,
    pub posts_sent: u64,
    pub offers_generated: u64,
    pub now: DateTime<Local>,
}

pub fn status(view: &StatusView<'_>) -> String {
    format!(
        "✅ <b>TrendBot Status</b>\n\n\
         🤖 <b>Bot</b>: Online and running\n\
         📊 <b>Database</b>: Connected\n\
         💾 <b>Offers Loaded</b>: {offers}\n\
         🔄 <b>Auto-posting</b>: {cadence}\n\
         📢 <b>Channel</b>: {channel}\n\
         ⏰ <b>Uptime</b>: {uptime}\n\n\
         <b>Performance:</b>\n\
         • Posts sent: {posts}\n\
         • Offers generated: {generated}\n\n\
         <b>Last Update</b>: {now}\n\n\
         🎯 <i>Everything is working perfectly!</i>",
        offers = view.offers_loaded,
        cadence = capitalize(view.cadence),
        channel = html_escape(view.channel),
        uptime = view.uptime,
        posts = view.posts_sent,
        generated = view.offers_generated,
        now = view.now.format("%Y-%m-%d %H:%M:%S"),
    )
}

pub fn stats(stats: &OfferStats) -> String {
    if stats.total_offers == 0 {
        return NO_STATS.to_string();
    }

    let mut text = format!(
        "📊 <b>TrendBot Statistics</b>\n\n\
         💰 <b>Total Offers</b>: {}\n\
         💵 <b>Average Commission</b>: ${:.2}\n\
         🏆 <b>Top Platform</b>: {}\n\
         🎯 <b>Top Category</b>: {}\n\n\
         <b>Platform Breakdown:</b>\n",
        stats.total_offers,
        stats.average_commission,
        html_escape(stats.top_platform().unwrap_or("-")),
        html_escape(&title_case_category(stats.top_category().unwrap_or("-"))),
    );
    for entry in &stats.by_platform {
        let _ = writeln!(text, "• {}: {} offers", html_escape(&entry.key), entry.count);
    }
    text.push_str("\n<b>Category Breakdown:</b>\n");
    for entry in &stats.by_category {
        let _ = writeln!(
            text,
            "• {}: {} offers",
            html_escape(&title_case_category(&entry.key)),
            entry.count
        );
    }
    let _ = write!(
        text,
        "\n<b>Revenue Potential</b>: ${:.2}\n<b>Monthly Projection</b>: ${:.2} (1 conversion/day)",
        stats.revenue_potential(),
        stats.monthly_projection()
    );
    text
}

pub fn referral_dashboard(
    user: &UserRecord,
    link: &str,
    referrals: &[ReferralRecord],
    reward: f64,
) -> String {
    let mut text = format!(
        "💎 <b>Your Referral Dashboard</b>\n\n\
         <b>📊 Your Stats:</b>\n\
         👥 <b>Total Referrals</b>: {count}\n\
         💰 <b>Total Earnings</b>: ${earnings:.2}\n\
         🏆 <b>Referral Code</b>: {code}\n\n\
         <b>🔗 Your Referral Link:</b>\n\
         <code>{link}</code>\n\n\
         <b>💸 How It Works:</b>\n\
         • Share your link with friends\n\
         • Earn {reward} for each person who joins\n\
         • No limits - unlimited earning potential!\n\
         • Instant rewards when someone joins\n\n\
         <b>🚀 Sharing Tips:</b>\n\
         • Post in social media groups\n\
         • Share with entrepreneur friends\n\
         • Add to your email signature\n\
         • Include in your content\n\n\
         <b>Recent Referrals:</b>\n",
        count = user.referral_count,
        earnings = user.total_earnings,
        code = html_escape(&user.referral_code),
        link = html_escape(link),
        reward = reward_label(reward),
    );

    if referrals.is_empty() {
        text.push_str("No referrals yet. Start sharing your link! 🚀\n");
    } else {
        for referral in referrals.iter().take(RECENT_REFERRALS) {
            let mark = if referral.status() == ReferralStatus::Confirmed {
                "✅"
            } else {
                "⏳"
            };
            let _ = writeln!(
                text,
                "{} ${:.2} - {}",
                mark,
                referral.reward_amount,
                referral.created_at.format("%m/%d")
            );
        }
    }

    text.push_str("\n💎 <b>Keep sharing to climb the leaderboard!</b>");
    text
}

pub fn leaderboard(users: &[UserRecord]) -> String {
    if users.is_empty() {
        return "🏆 <b>Referral Leaderboard</b>\n\n\
                No referrers yet! Be the first to start earning! 🚀\n\n\
                Use /referral to get your link and start climbing the leaderboard! 💎"
            .to_string();
    }

    let mut text = String::from("🏆 <b>Top Referrers - Leaderboard</b>\n\n");
    for (i, user) in users.iter().enumerate() {
        let rank = MEDALS
            .get(i)
            .map(|m| m.to_string())
            .unwrap_or_else(|| format!("{}.", i + 1));
        let _ = write!(
            text,
            "{} <b>{}</b>\n   👥 {} referrals | 💰 ${:.2}\n\n",
            rank,
            html_escape(user.display_name("Anonymous")),
            user.referral_count,
            user.total_earnings
        );
    }
    text.push_str("💎 <b>Want to be on the leaderboard?</b>\n");
    text.push_str("Use /referral to get your link and start earning! 🚀");
    text
}

pub fn post_failed(error: &anyhow::Error) -> String {
    format!("❌ Failed to send post: {}", html_escape(&error.to_string()))
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
