//! Contact submission CLI commands.

use clap::{Parser, Subcommand};
use uuid::Uuid;

use ttrave_core::site::ContactSubmission;
use ttrave_core::storage::{Record, Storage};

use super::{found, OutputFormat};
use crate::output::{format_output, pretty};

/// Contact submission commands.
#[derive(Debug, Parser)]
pub struct SubmissionsCommand {
    #[command(subcommand)]
    pub action: SubmissionsAction,
}

/// Available submission actions.
#[derive(Debug, Subcommand)]
pub enum SubmissionsAction {
    /// List submissions in the order they arrived.
    List,
    /// Set the workflow status of a submission.
    Status {
        /// Submission ID.
        id: Uuid,
        /// New status, e.g. `read` or `replied`.
        status: String,
    },
}

impl SubmissionsCommand {
    pub async fn run(self, storage: &dyn Storage, format: OutputFormat) -> anyhow::Result<String> {
        match self.action {
            SubmissionsAction::List => {
                let submissions = storage.get_contact_submissions().await?;
                Ok(format_output(&submissions, format, |s| {
                    pretty::format_submissions(s)
                }))
            }
            SubmissionsAction::Status { id, status } => {
                let submission = found(
                    storage.update_contact_submission_status(id, &status).await?,
                    ContactSubmission::KIND,
                    id,
                )?;
                Ok(format_output(&submission, format, pretty::format_submission))
            }
        }
    }
}
