//! CLI parser.

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "persona-relay")]
#[command(about = "Telegram persona chat bot backed by an OpenAI-compatible model", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the Telegram bot (config from env; token can override BOT_TOKEN).
    Run {
        #[arg(short, long)]
        token: Option<String>,
    },
    /// Print the built-in personas and exit.
    Personas,
}
