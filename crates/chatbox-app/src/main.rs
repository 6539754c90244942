use anyhow::Result;
use clap::Parser;

use chatbox::app::{run_history, run_repl_mode, run_send, run_theme};
use chatbox::{AppConfig, Cli, Commands};

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file if it exists
    dotenvy::dotenv().ok();

    // Parse CLI arguments
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = AppConfig::from_cli(&cli)?;

    match &cli.command {
        Some(Commands::Send { message }) => run_send(&config, message).await,
        Some(Commands::History) => run_history(&config),
        Some(Commands::Theme { action }) => run_theme(&config, *action),
        None => run_repl_mode(&config).await,
    }
}
