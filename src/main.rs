use anyhow::Result;
use clap::Parser;
use is_terminal::IsTerminal;
use maildequate::error::Error::Discord;
use maildequate::records::DynRecordProvider;
use maildequate::{CommandHandler, Config, Settings, Shared, VercelClient};
use std::num::NonZeroU64;
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Discord bot handing out email forwarding addresses.
///
/// Settings are read from the JSON config file, then the environment, then the flags, with later
/// sources taking precedence.
#[derive(Parser, Debug)]
#[command(name = "maildequate", version)]
struct Cli {
    /// JSON config file with any of the settings below, in snake_case.
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Token for the Discord bot.
    #[arg(long, env = "MAILDEQUATE_BOT_TOKEN", hide_env_values = true)]
    bot_token: Option<String>,

    /// Token for the Vercel API.
    #[arg(long, env = "MAILDEQUATE_VERCEL_TOKEN", hide_env_values = true)]
    vercel_token: Option<String>,

    /// Domain to create forwarding addresses on.
    #[arg(long, env = "MAILDEQUATE_DOMAIN")]
    domain: Option<String>,

    /// Register the command in this guild only (e.g. a test guild).
    #[arg(long = "guild", env = "MAILDEQUATE_GUILD")]
    guild_id: Option<NonZeroU64>,

    /// Vercel API base URL.
    #[arg(long, env = "MAILDEQUATE_API_BASE_URL")]
    api_base_url: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_init();

    let cli = Cli::parse();
    let config = config_init(cli)?;
    tracing::info!("forwarding addresses on {}", config.domain);

    let provider: DynRecordProvider = Arc::new(VercelClient::new(
        config.api_base_url.clone(),
        config.vercel_token.clone(),
    )?);
    let handler = CommandHandler::new(provider, config.domain.clone());
    let mut client = maildequate::new_discord(&config, handler).await?;
    let shard_manager = client.shard_manager.clone();
    let shutdown = maildequate::shutdown::signal()?;

    tokio::select! {
        reason = shutdown => {
            tracing::info!("received {reason:?}, gracefully shutting down");
            shard_manager.shutdown_all().await;
        },
        res = client.start() => {
            if let Err(err) = res {
                return Err(Discord(err).into())
            }
        }
    }
    tracing::info!("goodbye");
    Ok(())
}

fn tracing_init() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_ansi(std::io::stdout().is_terminal()))
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "maildequate=info".into()),
        )
        .init();
}

fn config_init(cli: Cli) -> Result<Shared> {
    let file_settings = match &cli.config {
        None => Settings::default(),
        Some(config_file) => {
            let settings = Settings::try_from_file(config_file)?;
            tracing::debug!("loaded config from {}", config_file.display());
            settings
        }
    };
    let cli_settings = Settings {
        bot_token: cli.bot_token,
        vercel_token: cli.vercel_token,
        domain: cli.domain,
        guild_id: cli.guild_id,
        api_base_url: cli.api_base_url,
    };
    let config = Config::try_from(file_settings.merge(cli_settings))?;
    Ok(Arc::new(config))
}
