use anyhow::Result;
use dotenvy::dotenv;
use log::info;

use kindle::client::{bootstrap, BootstrapOptions};
use kindle::core::Config;
use kindle::modules::all_modules;

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenv().ok();

    let config = Config::from_env()?;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&config.log_level))
        .init();

    info!("Starting kindle bot...");
    info!(
        "Guild: {} | Prefix: {}",
        config.discord_guild_id, config.command_prefix
    );

    bootstrap(config, all_modules(), BootstrapOptions::default()).await
}
