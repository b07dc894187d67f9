//! Destination CLI commands.

use clap::{Parser, Subcommand};
use uuid::Uuid;

use ttrave_core::site::{Destination, DestinationPatch, DestinationType, NewDestination};
use ttrave_core::storage::{Record, Storage};

use super::{deleted_output, found, OutputFormat};
use crate::output::{format_output, pretty};

/// Destination management commands.
#[derive(Debug, Parser)]
pub struct DestinationsCommand {
    #[command(subcommand)]
    pub action: DestinationsAction,
}

/// Available destination actions.
#[derive(Debug, Subcommand)]
pub enum DestinationsAction {
    /// List active destinations.
    List {
        /// Only `domestic` or `international` destinations.
        #[arg(long = "type")]
        destination_type: Option<DestinationType>,
    },
    /// Get destination by ID, active or not.
    Get {
        /// Destination ID.
        id: Uuid,
    },
    /// Create a new destination.
    Create {
        #[arg(long)]
        name: String,
        #[arg(long)]
        description: String,
        /// `domestic` or `international`.
        #[arg(long = "type")]
        destination_type: DestinationType,
        #[arg(long)]
        image_url: Option<String>,
        /// Bootstrap icon class (default: bi-geo-alt-fill).
        #[arg(long)]
        icon: Option<String>,
    },
    /// Update a destination.
    Update {
        /// Destination ID.
        id: Uuid,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        description: Option<String>,
        #[arg(long = "type")]
        destination_type: Option<DestinationType>,
        #[arg(long, conflicts_with = "clear_image")]
        image_url: Option<String>,
        /// Remove the image.
        #[arg(long)]
        clear_image: bool,
        #[arg(long)]
        icon: Option<String>,
        /// Re-activate (`true`) or hide (`false`) the destination.
        #[arg(long)]
        active: Option<bool>,
    },
    /// Hide a destination. The row is kept.
    Delete {
        /// Destination ID.
        id: Uuid,
    },
}

impl DestinationsCommand {
    pub async fn run(self, storage: &dyn Storage, format: OutputFormat) -> anyhow::Result<String> {
        match self.action {
            DestinationsAction::List { destination_type } => {
                let destinations = match destination_type {
                    Some(destination_type) => {
                        storage.get_destinations_by_type(destination_type).await?
                    }
                    None => storage.get_destinations().await?,
                };
                Ok(format_output(&destinations, format, |d| {
                    pretty::format_destinations(d)
                }))
            }
            DestinationsAction::Get { id } => {
                let destination = found(storage.get_destination(id).await?, Destination::KIND, id)?;
                Ok(format_output(&destination, format, pretty::format_destination))
            }
            DestinationsAction::Create {
                name,
                description,
                destination_type,
                image_url,
                icon,
            } => {
                let mut input = NewDestination::new(name, description, destination_type);
                input.image_url = image_url;
                input.icon = icon;

                let destination = storage.create_destination(input).await?;
                Ok(format_output(&destination, format, |d| {
                    format!("Created:\n{}", pretty::format_destination(d))
                }))
            }
            DestinationsAction::Update {
                id,
                name,
                description,
                destination_type,
                image_url,
                clear_image,
                icon,
                active,
            } => {
                let image_url = match (image_url, clear_image) {
                    (Some(url), _) => Some(Some(url)),
                    (None, true) => Some(None),
                    (None, false) => None,
                };
                let patch = DestinationPatch {
                    name,
                    description,
                    destination_type,
                    image_url,
                    icon,
                    is_active: active,
                };
                let destination = found(
                    storage.update_destination(id, patch).await?,
                    Destination::KIND,
                    id,
                )?;
                Ok(format_output(&destination, format, |d| {
                    format!("Updated:\n{}", pretty::format_destination(d))
                }))
            }
            DestinationsAction::Delete { id } => {
                let deleted = storage.delete_destination(id).await?;
                found(deleted.then_some(()), Destination::KIND, id)?;
                Ok(deleted_output(id, format, "destination"))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::cli::test_support::{memory_state, run_json};

    #[tokio::test]
    async fn test_create_list_and_filter() {
        let state = memory_state();

        run_json(
            &state,
            &[
                "destinations",
                "create",
                "--name",
                "Goa",
                "--description",
                "Beaches",
                "--type",
                "domestic",
            ],
        )
        .await
        .unwrap();
        let bali = run_json(
            &state,
            &[
                "destinations",
                "create",
                "--name",
                "Bali",
                "--description",
                "Temples",
                "--type",
                "international",
                "--icon",
                "bi-airplane",
            ],
        )
        .await
        .unwrap();

        assert_eq!(bali["type"], "international");
        assert_eq!(bali["icon"], "bi-airplane");

        let all = run_json(&state, &["destinations", "list"]).await.unwrap();
        assert_eq!(all.as_array().map(Vec::len), Some(2));

        let international = run_json(&state, &["destinations", "list", "--type", "international"])
            .await
            .unwrap();
        assert_eq!(international.as_array().map(Vec::len), Some(1));
        assert_eq!(international[0]["name"], "Bali");
    }

    #[tokio::test]
    async fn test_delete_hides_but_get_still_finds() {
        let state = memory_state();
        let goa = run_json(
            &state,
            &[
                "destinations",
                "create",
                "--name",
                "Goa",
                "--description",
                "Beaches",
                "--type",
                "domestic",
            ],
        )
        .await
        .unwrap();
        let id = goa["id"].as_str().unwrap().to_string();

        let deleted = run_json(&state, &["destinations", "delete", &id]).await.unwrap();
        assert_eq!(deleted["deleted"], true);

        let list = run_json(&state, &["destinations", "list"]).await.unwrap();
        assert_eq!(list.as_array().map(Vec::len), Some(0));

        let got = run_json(&state, &["destinations", "get", &id]).await.unwrap();
        assert_eq!(got["isActive"], false);

        let updated = run_json(&state, &["destinations", "update", &id, "--active", "true"])
            .await
            .unwrap();
        assert_eq!(updated["isActive"], true);
    }

    #[tokio::test]
    async fn test_update_can_clear_image() {
        let state = memory_state();
        let bali = run_json(
            &state,
            &[
                "destinations",
                "create",
                "--name",
                "Bali",
                "--description",
                "Temples",
                "--type",
                "international",
                "--image-url",
                "https://img/bali.jpg",
            ],
        )
        .await
        .unwrap();
        let id = bali["id"].as_str().unwrap().to_string();

        let renamed = run_json(&state, &["destinations", "update", &id, "--name", "Ubud"])
            .await
            .unwrap();
        assert_eq!(renamed["imageUrl"], "https://img/bali.jpg");

        let cleared = run_json(&state, &["destinations", "update", &id, "--clear-image"])
            .await
            .unwrap();
        assert!(cleared["imageUrl"].is_null());
        assert_eq!(cleared["name"], "Ubud");
    }

    #[tokio::test]
    async fn test_unknown_type_is_rejected() {
        let state = memory_state();

        let result = run_json(&state, &["destinations", "list", "--type", "lunar"]).await;

        assert!(result.is_err());
    }
}
