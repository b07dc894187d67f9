//! Newsletter CLI commands.

use clap::{Parser, Subcommand};

use ttrave_core::site::{NewNewsletterSubscription, NewsletterSubscription};
use ttrave_core::storage::{Record, Storage};

use super::{found, OutputFormat};
use crate::output::{format_output, pretty};

/// Newsletter commands.
#[derive(Debug, Parser)]
pub struct NewsletterCommand {
    #[command(subcommand)]
    pub action: NewsletterAction,
}

/// Available newsletter actions.
#[derive(Debug, Subcommand)]
pub enum NewsletterAction {
    /// List every subscription, active or not.
    List,
    /// Subscribe an email, reactivating it if it had unsubscribed.
    Subscribe { email: String },
    /// Mark an email as unsubscribed.
    Unsubscribe { email: String },
}

impl NewsletterCommand {
    pub async fn run(self, storage: &dyn Storage, format: OutputFormat) -> anyhow::Result<String> {
        let subscription = match self.action {
            NewsletterAction::List => {
                let subscriptions = storage.get_newsletter_subscriptions().await?;
                return Ok(format_output(&subscriptions, format, |s| {
                    pretty::format_subscriptions(s)
                }));
            }
            NewsletterAction::Subscribe { email } => {
                storage
                    .create_newsletter_subscription(NewNewsletterSubscription::new(email))
                    .await?
            }
            NewsletterAction::Unsubscribe { email } => found(
                storage.unsubscribe_newsletter(&email).await?,
                NewsletterSubscription::KIND,
                email,
            )?,
        };
        Ok(format_output(&subscription, format, pretty::format_subscription))
    }
}
