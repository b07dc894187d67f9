//! Gallery moderation CLI commands.

use clap::{Parser, Subcommand};
use uuid::Uuid;

use ttrave_core::site::GalleryImage;
use ttrave_core::storage::{Record, Storage};

use super::{deleted_output, found, OutputFormat};
use crate::output::{format_output, pretty};

/// Gallery moderation commands.
#[derive(Debug, Parser)]
pub struct GalleryCommand {
    #[command(subcommand)]
    pub action: GalleryAction,
}

/// Available gallery actions.
#[derive(Debug, Subcommand)]
pub enum GalleryAction {
    /// List gallery images.
    List {
        /// Only images already approved for the public gallery.
        #[arg(long)]
        approved: bool,
    },
    /// Approve an image for the public gallery.
    Approve {
        /// Image ID.
        id: Uuid,
    },
    /// Remove an image permanently.
    Delete {
        /// Image ID.
        id: Uuid,
    },
}

impl GalleryCommand {
    pub async fn run(self, storage: &dyn Storage, format: OutputFormat) -> anyhow::Result<String> {
        match self.action {
            GalleryAction::List { approved } => {
                let images = if approved {
                    storage.get_approved_gallery_images().await?
                } else {
                    storage.get_gallery_images().await?
                };
                Ok(format_output(&images, format, |i| {
                    pretty::format_gallery_images(i)
                }))
            }
            GalleryAction::Approve { id } => {
                let image = found(
                    storage.approve_gallery_image(id).await?,
                    GalleryImage::KIND,
                    id,
                )?;
                Ok(format_output(&image, format, pretty::format_gallery_image))
            }
            GalleryAction::Delete { id } => {
                let deleted = storage.delete_gallery_image(id).await?;
                found(deleted.then_some(()), GalleryImage::KIND, id)?;
                Ok(deleted_output(id, format, "gallery image"))
            }
        }
    }
}
