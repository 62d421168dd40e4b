//! TrendBot application services: referral programme, command replies, channel posting.
//!
//! [`TrendBotService`] is transport-agnostic: it talks to Telegram only through [`Bot`], so tests
//! drive it with a mock bot and an in-memory database.

mod stats;
pub mod texts;

use anyhow::{Context, Result};
use chrono::Local;
use offers::{is_referral_code, referral_code, ContentGenerator, OfferGenerator};
use rand::seq::SliceRandom;
use std::sync::Arc;
use std::time::Duration;
use storage::{
    NewReferral, NewUser, OfferQuery, OfferRecord, ReferralStatus, StorageError, TrendRepository,
    UserRecord,
};
use tracing::{error, info, instrument, warn};
use trendbot_core::{Bot, Destination, User};

use crate::config::AppSettings;
use crate::copywriter::{polish_or_draft, Copywriter};

pub use stats::{format_interval, format_uptime, BotStats};

/// Offers generated when `post_to_channel` finds an empty catalogue.
pub const FALLBACK_OFFER_COUNT: usize = 20;
/// How many of the newest offers a post is drawn from.
pub const POST_POOL_SIZE: i64 = 10;
const LEADERBOARD_SIZE: i64 = 10;
const REFERRAL_CODE_ATTEMPTS: usize = 5;

/// Which welcome `/start` produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WelcomeKind {
    New,
    NewWithReferral,
    Returning,
}

#[derive(Debug, Clone)]
pub struct StartReply {
    pub kind: WelcomeKind,
    pub user: UserRecord,
    pub text: String,
}

/// Result of one channel post.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostOutcome {
    pub offer_id: i64,
    pub message_id: i32,
    pub post_id: i64,
}

pub struct TrendBotService {
    repo: TrendRepository,
    offer_generator: OfferGenerator,
    content: ContentGenerator,
    copywriter: Option<Arc<dyn Copywriter>>,
    bot: Arc<dyn Bot>,
    channel: Destination,
    settings: AppSettings,
    stats: BotStats,
}

impl TrendBotService {
    pub fn new(
        repo: TrendRepository,
        bot: Arc<dyn Bot>,
        channel: Destination,
        settings: AppSettings,
    ) -> Result<Self> {
        Ok(Self {
            repo,
            offer_generator: OfferGenerator::new()?,
            content: ContentGenerator::new(),
            copywriter: None,
            bot,
            channel,
            settings,
            stats: BotStats::new(),
        })
    }

    pub fn with_copywriter(mut self, copywriter: Arc<dyn Copywriter>) -> Self {
        self.copywriter = Some(copywriter);
        self
    }

    pub fn repo(&self) -> &TrendRepository {
        &self.repo
    }

    pub fn stats(&self) -> &BotStats {
        &self.stats
    }

    pub fn settings(&self) -> &AppSettings {
        &self.settings
    }

    pub fn channel(&self) -> &Destination {
        &self.channel
    }

    pub fn referral_link(&self, code: &str) -> String {
        texts::referral_link(&self.settings.bot_username, code)
    }

    fn cadence(&self) -> String {
        format_interval(self.settings.post_interval())
    }

    /// Generates and stores `count` offers; returns how many were saved.
    #[instrument(skip(self))]
    pub async fn seed_offers(&self, count: usize) -> Result<usize> {
        let offers = self.offer_generator.generate(count);
        let ids = self.repo.save_offers(&offers).await.map_err(|e| {
            error!(error = %e, count = count, "Failed to save generated offers");
            e
        })?;
        self.stats.record_generated(ids.len() as u64);
        info!(count = ids.len(), "Generated offers");
        Ok(ids.len())
    }

    /// Seeds `initial_offer_count` offers when the catalogue is empty. Returns how many were added.
    #[instrument(skip(self))]
    pub async fn ensure_offers(&self) -> Result<usize> {
        if self.repo.count_offers().await? > 0 {
            return Ok(0);
        }
        info!("Offer catalogue is empty, generating initial offers");
        self.seed_offers(self.settings.initial_offer_count).await
    }

    /// `/start [code]`: registers new users (crediting a valid referrer) or welcomes them back.
    #[instrument(skip(self, user), fields(user_id = user.id))]
    pub async fn start(&self, user: &User, code: Option<&str>) -> Result<StartReply> {
        if self.repo.get_user(user.id).await?.is_some() {
            return self.welcome_back(user).await;
        }

        let referrer = match code {
            Some(code) => self.find_referrer(code, user.id).await?,
            None => None,
        };

        if !self.create_user(user, referrer.as_ref()).await? {
            // Lost a race with a concurrent /start from the same user.
            return self.welcome_back(user).await;
        }

        if let Some(ref referrer) = referrer {
            self.notify_referrer(referrer, user).await;
        }

        let current = self.require_user(user.id).await?;
        let kind = if referrer.is_some() {
            WelcomeKind::NewWithReferral
        } else {
            WelcomeKind::New
        };
        let text = texts::welcome_new(
            &self.settings.bot_username,
            &self.referral_link(&current.referral_code),
            kind == WelcomeKind::NewWithReferral,
            self.settings.referral_reward,
            &self.cadence(),
        );
        Ok(StartReply {
            kind,
            user: current,
            text,
        })
    }

    /// The user owning `code`, unless the code is malformed, unknown, or the caller's own.
    async fn find_referrer(&self, code: &str, user_id: i64) -> Result<Option<UserRecord>> {
        if !is_referral_code(code) {
            info!(code = %code, "Ignoring malformed referral code");
            return Ok(None);
        }
        let referrer = self
            .repo
            .get_user_by_referral_code(code)
            .await?
            .filter(|r| r.user_id != user_id);
        if referrer.is_none() {
            info!(code = %code, "Referral code does not belong to another user");
        }
        Ok(referrer)
    }

    async fn welcome_back(&self, user: &User) -> Result<StartReply> {
        self.repo.touch_user(user.id).await?;
        let current = self.require_user(user.id).await?;
        let text = texts::welcome_returning(
            &self.settings.bot_username,
            &current,
            &self.referral_link(&current.referral_code),
        );
        Ok(StartReply {
            kind: WelcomeKind::Returning,
            user: current,
            text,
        })
    }

    /// Inserts the user with a fresh referral code, retrying on code collisions. With a
    /// referrer, the user and the referral credit are written in one transaction.
    /// Returns false when the user already existed.
    async fn create_user(&self, user: &User, referrer: Option<&UserRecord>) -> Result<bool> {
        for attempt in 1..=REFERRAL_CODE_ATTEMPTS {
            let new_user = NewUser {
                user_id: user.id,
                username: user.username.clone().unwrap_or_default(),
                first_name: user.first_name.clone().unwrap_or_default(),
                referral_code: referral_code(),
                referred_by: referrer.map(|r| r.referral_code.clone()),
            };
            let created = match referrer {
                Some(referrer) => {
                    let referral = NewReferral {
                        referrer_code: referrer.referral_code.clone(),
                        referred_user_id: user.id,
                        reward_amount: self.settings.referral_reward,
                        status: ReferralStatus::Confirmed,
                    };
                    self.repo.create_referred_user(&new_user, &referral).await
                }
                None => self.repo.create_user(&new_user).await,
            };
            match created {
                Ok(id) => return Ok(id.is_some()),
                Err(StorageError::AlreadyExists(reason)) => {
                    warn!(attempt = attempt, reason = %reason, "Referral code collision, retrying");
                }
                Err(e) => {
                    error!(error = %e, user_id = user.id, "Failed to create user");
                    return Err(e.into());
                }
            }
        }
        anyhow::bail!(
            "could not allocate a unique referral code after {} attempts",
            REFERRAL_CODE_ATTEMPTS
        )
    }

    /// Tells the referrer about the new signup; delivery failures are only logged.
    async fn notify_referrer(&self, referrer: &UserRecord, user: &User) {
        let text = texts::referral_notification(
            user.display_name("Someone"),
            self.settings.referral_reward,
            referrer.referral_count + 1,
        );
        if let Err(e) = self
            .bot
            .send_message(&Destination::Id(referrer.user_id), &text)
            .await
        {
            // The referrer may have blocked the bot.
            warn!(error = %e, referrer_id = referrer.user_id, "Failed to notify referrer");
        }
    }

    async fn require_user(&self, user_id: i64) -> Result<UserRecord> {
        self.repo
            .get_user(user_id)
            .await?
            .with_context(|| format!("user {} not found after save", user_id))
    }

    async fn get_or_create_user(&self, user: &User) -> Result<UserRecord> {
        if let Some(existing) = self.repo.get_user(user.id).await? {
            return Ok(existing);
        }
        self.create_user(user, None).await?;
        self.require_user(user.id).await
    }

    pub fn help(&self) -> String {
        texts::help(
            &self.settings.bot_username,
            self.settings.referral_reward,
            &self.cadence(),
        )
    }

    #[instrument(skip(self))]
    pub async fn status(&self) -> Result<String> {
        let offers_loaded = self.repo.count_offers().await?;
        let channel = self.channel.to_string();
        let cadence = self.cadence();
        let uptime = format_uptime(self.stats.uptime());
        Ok(texts::status(&texts::StatusView {
            offers_loaded,
            channel: &channel,
            cadence: &cadence,
            uptime: &uptime,
            posts_sent: self.stats.posts_sent(),
            offers_generated: self.stats.offers_generated(),
            now: Local::now(),
        }))
    }

    #[instrument(skip(self))]
    pub async fn offer_stats(&self) -> Result<String> {
        let stats = self.repo.get_offer_stats().await?;
        Ok(texts::stats(&stats))
    }

    /// `/referral`: the caller's dashboard (registering them first if needed).
    #[instrument(skip(self, user), fields(user_id = user.id))]
    pub async fn referral(&self, user: &User) -> Result<String> {
        let record = self.get_or_create_user(user).await?;
        let referrals = self.repo.get_referrals(&record.referral_code).await?;
        Ok(texts::referral_dashboard(
            &record,
            &self.referral_link(&record.referral_code),
            &referrals,
            self.settings.referral_reward,
        ))
    }

    #[instrument(skip(self))]
    pub async fn leaderboard(&self) -> Result<String> {
        let users = self.repo.get_leaderboard(LEADERBOARD_SIZE).await?;
        Ok(texts::leaderboard(&users))
    }

    /// Publishes one of the newest offers to the channel and records the post.
    #[instrument(skip(self), fields(channel = %self.channel))]
    pub async fn post_to_channel(&self) -> Result<PostOutcome> {
        let mut pool = self.repo.get_offers(&OfferQuery::latest(POST_POOL_SIZE)).await?;
        if pool.is_empty() {
            info!("No offers found, generating new ones");
            self.seed_offers(FALLBACK_OFFER_COUNT).await?;
            pool = self.repo.get_offers(&OfferQuery::latest(POST_POOL_SIZE)).await?;
        }

        let offer = pick_offer(&pool).context("no offers available to post")?;
        let draft = self.content.render(&offer);
        let text = match self.copywriter {
            Some(ref copywriter) => {
                polish_or_draft(
                    copywriter.as_ref(),
                    &offer,
                    draft.clone(),
                    self.settings.copywriter_timeout(),
                )
                .await
            }
            None => draft.clone(),
        };

        let sent = match self.bot.send_message(&self.channel, &text).await {
            Ok(sent) => sent,
            Err(e) if text != draft => {
                warn!(error = %e, offer_id = offer.id, "Polished post rejected, sending draft");
                self.bot.send_message(&self.channel, &draft).await?
            }
            Err(e) => {
                error!(error = %e, offer_id = offer.id, "Failed to post to channel");
                return Err(e.into());
            }
        };

        let post_id = self
            .repo
            .log_post(offer.id, &self.channel.to_string(), i64::from(sent.message_id))
            .await?;
        self.stats.record_post();

        info!(
            offer_id = offer.id,
            message_id = sent.message_id,
            title = %offer.title,
            commission = offer.commission,
            "Posted offer to channel"
        );
        Ok(PostOutcome {
            offer_id: offer.id,
            message_id: sent.message_id,
            post_id,
        })
    }

    /// `/post`: posts now and reports the result to the caller.
    pub async fn post_command(&self) -> String {
        match self.post_to_channel().await {
            Ok(_) => texts::POST_SENT.to_string(),
            Err(e) => texts::post_failed(&e),
        }
    }

    /// Interval and first delay for the scheduler.
    pub fn schedule(&self) -> (Duration, Duration) {
        (
            self.settings.post_first_delay(),
            self.settings.post_interval(),
        )
    }
}

fn pick_offer(pool: &[OfferRecord]) -> Option<OfferRecord> {
    pool.choose(&mut rand::thread_rng()).cloned()
}
