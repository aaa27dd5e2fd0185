//! persona-relay: run the Telegram persona bot, or list its personas.

use anyhow::Result;
use clap::Parser;
use prompt::PersonaRegistry;
use relay_cli::{format_personas, run_bot, BotConfig, Cli, Commands};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run { token } => {
            let config = BotConfig::load(token)?;
            run_bot(config).await
        }
        Commands::Personas => {
            print!("{}", format_personas(&PersonaRegistry::builtin()));
            Ok(())
        }
    }
}
