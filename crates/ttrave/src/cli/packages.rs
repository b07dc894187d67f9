//! Travel package CLI commands.

use clap::{Parser, Subcommand};
use uuid::Uuid;

use ttrave_core::site::{NewPackage, Package};
use ttrave_core::storage::{Record, Storage};

use super::{deleted_output, found, OutputFormat};
use crate::output::{format_output, pretty};

/// Travel package commands.
#[derive(Debug, Parser)]
pub struct PackagesCommand {
    #[command(subcommand)]
    pub action: PackagesAction,
}

/// Available package actions.
#[derive(Debug, Subcommand)]
pub enum PackagesAction {
    /// List active packages.
    List {
        /// Only packages for this destination.
        #[arg(long, conflicts_with = "featured")]
        destination: Option<Uuid>,
        /// Only featured packages.
        #[arg(long)]
        featured: bool,
    },
    /// Get package by ID, active or not.
    Get {
        /// Package ID.
        id: Uuid,
    },
    /// Create a new package.
    Create {
        /// Destination ID.
        #[arg(long)]
        destination: Uuid,
        #[arg(long)]
        title: String,
        #[arg(long)]
        description: String,
        /// Price in whole rupees.
        #[arg(long)]
        price: i64,
        /// Free text, e.g. `4D/3N`.
        #[arg(long)]
        duration: String,
        #[arg(long)]
        image_url: Option<String>,
        #[arg(long)]
        featured: bool,
    },
    /// Hide a package. The row is kept.
    Delete {
        /// Package ID.
        id: Uuid,
    },
}

impl PackagesCommand {
    pub async fn run(self, storage: &dyn Storage, format: OutputFormat) -> anyhow::Result<String> {
        match self.action {
            PackagesAction::List {
                destination,
                featured,
            } => {
                let packages = match (destination, featured) {
                    (Some(destination_id), _) => {
                        storage.get_packages_by_destination(destination_id).await?
                    }
                    (None, true) => storage.get_featured_packages().await?,
                    (None, false) => storage.get_packages().await?,
                };
                Ok(format_output(&packages, format, |p| pretty::format_packages(p)))
            }
            PackagesAction::Get { id } => {
                let package = found(storage.get_package(id).await?, Package::KIND, id)?;
                Ok(format_output(&package, format, pretty::format_package))
            }
            PackagesAction::Create {
                destination,
                title,
                description,
                price,
                duration,
                image_url,
                featured,
            } => {
                let mut input = NewPackage::new(destination, title, description, price, duration);
                input.image_url = image_url;
                input.is_featured = Some(featured);

                let package = storage.create_package(input).await?;
                Ok(format_output(&package, format, |p| {
                    format!("Created:\n{}", pretty::format_package(p))
                }))
            }
            PackagesAction::Delete { id } => {
                let deleted = storage.delete_package(id).await?;
                found(deleted.then_some(()), Package::KIND, id)?;
                Ok(deleted_output(id, format, "package"))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use uuid::Uuid;

    use crate::cli::test_support::{memory_state, run_json};

    #[tokio::test]
    async fn test_featured_and_destination_filters() {
        let state = memory_state();
        let goa = Uuid::new_v4().to_string();
        let bali = Uuid::new_v4().to_string();

        for (destination, title, featured) in [
            (&goa, "Beach Week", false),
            (&goa, "Forts Trail", true),
            (&bali, "Villas", true),
        ] {
            let mut args = vec![
                "packages",
                "create",
                "--destination",
                destination.as_str(),
                "--title",
                title,
                "--description",
                "Trip",
                "--price",
                "20000",
                "--duration",
                "4D/3N",
            ];
            if featured {
                args.push("--featured");
            }
            run_json(&state, &args).await.unwrap();
        }

        let featured = run_json(&state, &["packages", "list", "--featured"])
            .await
            .unwrap();
        assert_eq!(featured.as_array().map(Vec::len), Some(2));

        let for_goa = run_json(&state, &["packages", "list", "--destination", &goa])
            .await
            .unwrap();
        assert_eq!(for_goa[0]["title"], "Beach Week");
        assert_eq!(for_goa[1]["title"], "Forts Trail");
        assert_eq!(for_goa[1]["price"], 20000);
    }

    #[tokio::test]
    async fn test_delete_unknown_package_fails() {
        let state = memory_state();
        let id = Uuid::new_v4().to_string();

        let err = run_json(&state, &["packages", "delete", &id])
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), format!("Package not found: {id}"));
    }
}
