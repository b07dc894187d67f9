use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use ttrave::cli::{execute, Cli};
use ttrave::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so command output stays parseable.
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| "ttrave=info,ttrave_core=info".into());
    let (json_layer, text_layer) = if cli.log_json {
        (
            Some(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr)),
            None,
        )
    } else {
        (
            None,
            Some(tracing_subscriber::fmt::layer().with_writer(std::io::stderr)),
        )
    };
    tracing_subscriber::registry()
        .with(filter)
        .with(json_layer)
        .with(text_layer)
        .init();

    let config = cli.config().context("Invalid configuration")?;
    let state = AppState::from_config(&config).await?;
    tracing::debug!(backend = %state.backend, "Storage ready");

    let output = execute(&state, cli.command, cli.format).await?;
    println!("{output}");
    Ok(())
}
