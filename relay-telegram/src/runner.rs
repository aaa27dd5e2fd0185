//! REPL runner: converts each teloxide message to a core Message and hands it to the HandlerChain
//! on its own task, so a slow backend call in one chat does not hold up the others.

use anyhow::{Context, Result};
use handler_chain::HandlerChain;
use relay_core::{BotIdentity, ToCoreMessage};
use std::sync::Arc;
use teloxide::prelude::*;
use tokio::sync::RwLock;
use tracing::{debug, error, info, instrument};

use super::adapters::TelegramMessageWrapper;

/// Learns the bot's identity via `get_me`, stores it in `identity`, then runs the REPL until
/// shutdown.
#[instrument(skip(bot, handler_chain, identity))]
pub async fn run_repl(
    bot: teloxide::Bot,
    handler_chain: HandlerChain,
    identity: Arc<RwLock<Option<BotIdentity>>>,
) -> Result<()> {
    let me = bot.get_me().await.context("get_me failed; check BOT_TOKEN")?;
    match &me.user.username {
        Some(username) => {
            *identity.write().await = Some(BotIdentity::new(me.user.id.0 as i64, username));
            info!(username = %username, "Bot identity set before repl");
        }
        None => error!("Bot account has no username; mentions will not be recognized"),
    }

    let chain = handler_chain;
    teloxide::repl(bot, move |_bot: Bot, msg: teloxide::types::Message| {
        let chain = chain.clone();

        async move {
            if msg.text().is_none() {
                debug!(chat_id = msg.chat.id.0, "Skipping non-text message");
                return Ok(());
            }
            let core_msg = TelegramMessageWrapper(&msg).to_core();
            debug!(
                chat_id = core_msg.chat.id,
                message_id = %core_msg.id,
                "Dispatching message to handler chain"
            );

            tokio::spawn(async move {
                if let Err(e) = chain.handle(&core_msg).await {
                    error!(
                        error = %e,
                        user_id = core_msg.user.id,
                        chat_id = core_msg.chat.id,
                        "Handler chain failed"
                    );
                }
            });

            Ok(())
        }
    })
    .await;

    Ok(())
}
