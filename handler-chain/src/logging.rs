//! Middleware that logs each inbound message and the chain outcome.

use async_trait::async_trait;
use relay_core::{HandlerResponse, Message, Middleware, Result};
use tracing::{debug, info, instrument};

/// Logs each message in `before()` and the outcome in `after()`; always continues.
pub struct LoggingMiddleware;

#[async_trait]
impl Middleware for LoggingMiddleware {
    #[instrument(skip(self, message))]
    async fn before(&self, message: &Message) -> Result<bool> {
        info!(
            chat_id = message.chat.id,
            user_id = message.user.id,
            username = %message.user.username.as_deref().unwrap_or("unknown"),
            is_bot = message.user.is_bot,
            mentions = ?message.mentions,
            "Received message"
        );
        Ok(true)
    }

    #[instrument(skip(self, message, response))]
    async fn after(&self, message: &Message, response: &HandlerResponse) -> Result<()> {
        let (outcome, reply_len) = match response {
            HandlerResponse::Continue => ("continue", None),
            HandlerResponse::Stop => ("stop", None),
            HandlerResponse::Ignore => ("ignore", None),
            HandlerResponse::Reply(text) => ("reply", Some(text.len())),
        };
        debug!(
            chat_id = message.chat.id,
            message_id = %message.id,
            outcome = %outcome,
            reply_len = ?reply_len,
            "Processed message"
        );
        Ok(())
    }
}
