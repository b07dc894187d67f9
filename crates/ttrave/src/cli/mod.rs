//! CLI command definitions.
//!
//! Every command goes through the storage contract, so the CLI behaves the
//! same against either backend.

pub mod content;
pub mod destinations;
pub mod gallery;
pub mod newsletter;
pub mod packages;
pub mod submissions;
pub mod users;

use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use uuid::Uuid;

use ttrave_core::storage::{RepositoryError, Storage};

use crate::config::{Config, StorageMode};
use crate::output::{format_json, format_output, pretty};
use crate::state::{AppState, BackendKind};

/// Admin CLI for the TTRAVE site storage.
#[derive(Debug, Parser)]
#[command(name = "ttrave")]
#[command(version, about = "Admin CLI for the TTRAVE site storage", long_about = None)]
pub struct Cli {
    /// SQLite database URL. In-memory storage is used when unset.
    #[arg(long, env = "DATABASE_URL")]
    pub database_url: Option<String>,

    /// Storage backend.
    #[arg(long, env = "STORAGE_BACKEND", value_enum)]
    pub backend: Option<StorageMode>,

    /// Output format.
    #[arg(long, default_value = "pretty")]
    pub format: OutputFormat,

    /// Emit logs as JSON lines.
    #[arg(long, env = "TTRAVE_LOG_JSON")]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Environment configuration with command-line overrides applied.
    pub fn config(&self) -> anyhow::Result<Config> {
        let mut config = Config::from_env()?;
        if let Some(url) = self.database_url.as_deref().filter(|u| !u.trim().is_empty()) {
            config.database_url = Some(url.parse()?);
        }
        if let Some(backend) = self.backend {
            config.backend = backend;
        }
        Ok(config)
    }
}

/// Output format options.
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    /// Compact JSON output.
    Json,
    /// Human-readable output.
    #[default]
    Pretty,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show the active backend and row counts.
    Status,
    /// Editable site copy.
    Content(content::ContentCommand),
    /// Destination management.
    Destinations(destinations::DestinationsCommand),
    /// Travel package management.
    Packages(packages::PackagesCommand),
    /// Contact form submissions.
    Submissions(submissions::SubmissionsCommand),
    /// Newsletter subscriptions.
    Newsletter(newsletter::NewsletterCommand),
    /// Gallery moderation.
    Gallery(gallery::GalleryCommand),
    /// Admin accounts.
    Users(users::UsersCommand),
}

/// Summary printed by `ttrave status`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusReport {
    pub backend: BackendKind,
    pub durable: bool,
    pub destinations: usize,
    pub packages: usize,
    pub content: usize,
    pub contact_submissions: usize,
    pub newsletter_subscriptions: usize,
    pub gallery_images: usize,
}

impl StatusReport {
    pub async fn collect(state: &AppState) -> Result<Self, RepositoryError> {
        let storage = state.storage.as_ref();
        Ok(Self {
            backend: state.backend,
            durable: state.backend.is_durable(),
            destinations: storage.get_destinations().await?.len(),
            packages: storage.get_packages().await?.len(),
            content: storage.get_content().await?.len(),
            contact_submissions: storage.get_contact_submissions().await?.len(),
            newsletter_subscriptions: storage.get_newsletter_subscriptions().await?.len(),
            gallery_images: storage.get_gallery_images().await?.len(),
        })
    }
}

/// Runs a command and returns the text to print.
pub async fn execute(
    state: &AppState,
    command: Commands,
    format: OutputFormat,
) -> anyhow::Result<String> {
    let storage: &dyn Storage = state.storage.as_ref();
    match command {
        Commands::Status => {
            let status = StatusReport::collect(state).await?;
            Ok(format_output(&status, format, pretty::format_status))
        }
        Commands::Content(cmd) => cmd.run(storage, format).await,
        Commands::Destinations(cmd) => cmd.run(storage, format).await,
        Commands::Packages(cmd) => cmd.run(storage, format).await,
        Commands::Submissions(cmd) => cmd.run(storage, format).await,
        Commands::Newsletter(cmd) => cmd.run(storage, format).await,
        Commands::Gallery(cmd) => cmd.run(storage, format).await,
        Commands::Users(cmd) => cmd.run(storage, format).await,
    }
}

/// Turns a missing record into a `NotFound` error for the CLI.
pub(crate) fn found<T>(
    value: Option<T>,
    entity_type: &'static str,
    id: impl ToString,
) -> Result<T, RepositoryError> {
    value.ok_or_else(|| RepositoryError::NotFound {
        entity_type,
        id: id.to_string(),
    })
}

/// Confirmation printed after a successful `delete`.
pub(crate) fn deleted_output(id: Uuid, format: OutputFormat, what: &str) -> String {
    match format {
        OutputFormat::Json => format_json(&serde_json::json!({ "id": id, "deleted": true })),
        OutputFormat::Pretty => format!("Deleted {what} {id}"),
    }
}
