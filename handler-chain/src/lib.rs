//! # Handler chain
//!
//! Runs a sequence of middleware (before/after) and handlers for each inbound message. Middleware
//! can stop the chain; the first handler that returns Stop or Reply ends handler execution; after
//! callbacks run in reverse order.

mod logging;

pub use logging::LoggingMiddleware;

use relay_core::{Handler, HandlerResponse, Message, Middleware, Result};
use std::sync::Arc;
use tracing::{debug, info, instrument};

/// Chain of middleware and handlers: middleware `before` in order, then handlers, then middleware
/// `after` in reverse order.
#[derive(Clone, Default)]
pub struct HandlerChain {
    middleware: Vec<Arc<dyn Middleware>>,
    handlers: Vec<Arc<dyn Handler>>,
}

impl HandlerChain {
    /// Creates an empty chain (no middleware, no handlers).
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a middleware (runs before handlers, after in reverse).
    pub fn add_middleware(mut self, middleware: Arc<dyn Middleware>) -> Self {
        self.middleware.push(middleware);
        self
    }

    /// Appends a handler (runs in order; first Stop/Reply ends handler phase).
    pub fn add_handler(mut self, handler: Arc<dyn Handler>) -> Self {
        self.handlers.push(handler);
        self
    }

    /// Runs middleware before, then handlers; then middleware after in reverse. Returns the first
    /// Stop or Reply, or Continue when no handler claimed the message.
    #[instrument(skip(self, message), fields(chat_id = message.chat.id, message_id = %message.id))]
    pub async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        for mw in &self.middleware {
            let mw_name = std::any::type_name_of_val(mw.as_ref());
            if !mw.before(message).await? {
                info!(
                    chat_id = message.chat.id,
                    middleware = %mw_name,
                    "middleware before returned false, chain stopped"
                );
                return Ok(HandlerResponse::Stop);
            }
        }

        let mut final_response = HandlerResponse::Continue;
        for handler in &self.handlers {
            let handler_name = std::any::type_name_of_val(handler.as_ref());
            let response = handler.handle(message).await?;
            debug!(
                chat_id = message.chat.id,
                handler = %handler_name,
                response = ?response,
                "handler done"
            );
            match response {
                HandlerResponse::Stop | HandlerResponse::Reply(_) => {
                    final_response = response;
                    break;
                }
                HandlerResponse::Continue | HandlerResponse::Ignore => continue,
            }
        }

        for mw in self.middleware.iter().rev() {
            mw.after(message, &final_response).await?;
        }

        Ok(final_response)
    }
}

// Tests live in tests/handler_chain_test.rs
