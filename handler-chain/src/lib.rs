//! # Handler chain
//!
//! Runs a sequence of handlers for each incoming message. Every `before` runs in order (any
//! `false` stops the chain), then `handle` runs until one handler returns Stop or Reply, then every
//! `after` runs in reverse order with the final response.

use std::sync::Arc;
use tracing::{debug, error, info, instrument};
use trendbot_core::{Handler, HandlerResponse, Message, Result};

/// Chain of handlers: before (all) → handle (until Stop/Reply) → after (reverse).
#[derive(Clone, Default)]
pub struct HandlerChain {
    handlers: Vec<Arc<dyn Handler>>,
}

impl HandlerChain {
    /// Creates an empty chain.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a handler.
    pub fn add_handler(mut self, handler: Arc<dyn Handler>) -> Self {
        self.handlers.push(handler);
        self
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    /// Runs the three phases for one message and returns the final response.
    ///
    /// Every `after` hook runs even if an earlier one fails; the first `after` error is returned.
    #[instrument(skip(self, message), fields(user_id = message.user.id, chat_id = message.chat.id))]
    pub async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        debug!(message_id = %message.id, handlers = self.handlers.len(), "handler chain started");

        for h in &self.handlers {
            if !h.before(message).await? {
                info!(
                    handler = %std::any::type_name_of_val(h.as_ref()),
                    "before returned false, chain stopped"
                );
                return Ok(HandlerResponse::Stop);
            }
        }

        let mut final_response = HandlerResponse::Continue;
        for h in &self.handlers {
            let response = h.handle(message).await?;
            debug!(
                handler = %std::any::type_name_of_val(h.as_ref()),
                response = ?response,
                "handler processed"
            );
            if matches!(response, HandlerResponse::Stop | HandlerResponse::Reply(_)) {
                final_response = response;
                break;
            }
        }

        let mut first_err = None;
        for h in self.handlers.iter().rev() {
            if let Err(e) = h.after(message, &final_response).await {
                error!(
                    handler = %std::any::type_name_of_val(h.as_ref()),
                    error = %e,
                    "after hook failed"
                );
                first_err.get_or_insert(e);
            }
        }
        if let Some(e) = first_err {
            return Err(e);
        }

        debug!(message_id = %message.id, "handler chain finished");
        Ok(final_response)
    }
}
