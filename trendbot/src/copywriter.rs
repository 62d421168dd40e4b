//! Optional LLM polishing of channel posts.

use anyhow::Result;
use async_trait::async_trait;
use std::time::Duration;
use openai_client::OpenAIClient;
use storage::OfferRecord;
use tracing::{info, warn};

use crate::config::OpenAiSettings;

const SYSTEM_PROMPT: &str = "You rewrite promotional Telegram channel posts. \
Keep every fact (title, commission, platform, category, popularity) and keep the affiliate link \
exactly as given. Reply with the post only. Use Telegram HTML: only <b> and <i> tags, \
and escape any other '<', '>' or '&'. Keep it under 900 characters.";

/// Rewrites a rendered post.
#[async_trait]
pub trait Copywriter: Send + Sync {
    async fn polish(&self, offer: &OfferRecord, draft: &str) -> Result<String>;
}

/// Copywriter backed by the OpenAI chat API.
pub struct OpenAiCopywriter {
    client: OpenAIClient,
    model: String,
}

impl OpenAiCopywriter {
    pub fn new(client: OpenAIClient, model: impl Into<String>) -> Self {
        Self {
            client,
            model: model.into(),
        }
    }

    pub fn from_settings(settings: &OpenAiSettings) -> Self {
        let client = OpenAIClient::with_base_url(settings.api_key.clone(), settings.base_url.clone());
        Self::new(client, settings.model.clone())
    }
}

#[async_trait]
impl Copywriter for OpenAiCopywriter {
    async fn polish(&self, offer: &OfferRecord, draft: &str) -> Result<String> {
        let reply = self.client.complete(&self.model, SYSTEM_PROMPT, draft).await?;
        info!(offer_id = offer.id, chars = reply.chars().count(), "Copywriter reply");
        Ok(reply.trim().to_string())
    }
}

/// Runs `copywriter` over `draft`, keeping the draft when the reply is empty, drops the
/// affiliate link, the call fails, or it does not finish within `timeout`.
pub async fn polish_or_draft(
    copywriter: &dyn Copywriter,
    offer: &OfferRecord,
    draft: String,
    timeout: Duration,
) -> String {
    let polished = match tokio::time::timeout(timeout, copywriter.polish(offer, &draft)).await {
        Ok(result) => result,
        Err(_) => {
            warn!(
                offer_id = offer.id,
                timeout_ms = timeout.as_millis() as u64,
                "Copywriter timed out, using draft"
            );
            return draft;
        }
    };
    match polished {
        Ok(text) if text.trim().is_empty() => {
            warn!(offer_id = offer.id, "Copywriter returned empty text, using draft");
            draft
        }
        Ok(text) if !text.contains(&offer.affiliate_link) => {
            warn!(offer_id = offer.id, "Copywriter dropped the affiliate link, using draft");
            draft
        }
        Ok(text) => text,
        Err(e) => {
            warn!(error = %e, offer_id = offer.id, "Copywriter failed, using draft");
            draft
        }
    }
}
