//! Site content CLI commands.

use clap::{Parser, Subcommand};

use ttrave_core::site::{Content, NewContent};
use ttrave_core::storage::{Record, Storage};

use super::{found, OutputFormat};
use crate::output::{format_output, pretty};

/// Site content commands.
#[derive(Debug, Parser)]
pub struct ContentCommand {
    #[command(subcommand)]
    pub action: ContentAction,
}

/// Available content actions.
#[derive(Debug, Subcommand)]
pub enum ContentAction {
    /// List every content key.
    List,
    /// Show one key.
    Get {
        /// Content key, e.g. `hero.title`.
        key: String,
    },
    /// Create the key or overwrite its value.
    Set {
        key: String,
        value: String,
    },
    /// Overwrite the value of an existing key.
    Update {
        key: String,
        value: String,
    },
}

impl ContentCommand {
    pub async fn run(self, storage: &dyn Storage, format: OutputFormat) -> anyhow::Result<String> {
        match self.action {
            ContentAction::List => {
                let content = storage.get_content().await?;
                Ok(format_output(&content, format, |c| pretty::format_content(c)))
            }
            ContentAction::Get { key } => {
                let content = found(storage.get_content_by_key(&key).await?, Content::KIND, key)?;
                Ok(format_output(&content, format, pretty::format_content_entry))
            }
            ContentAction::Set { key, value } => {
                let content = storage.set_content(NewContent::new(key, value)).await?;
                Ok(format_output(&content, format, pretty::format_content_entry))
            }
            ContentAction::Update { key, value } => {
                let content = found(
                    storage.update_content(&key, &value).await?,
                    Content::KIND,
                    key,
                )?;
                Ok(format_output(&content, format, pretty::format_content_entry))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::cli::test_support::{memory_state, run_json};

    #[tokio::test]
    async fn test_set_then_get() {
        let state = memory_state();

        let set = run_json(&state, &["content", "set", "footer.note", "Bon voyage"])
            .await
            .unwrap();
        let got = run_json(&state, &["content", "get", "footer.note"])
            .await
            .unwrap();

        assert_eq!(set, got);
        assert_eq!(got["value"], "Bon voyage");
    }

    #[tokio::test]
    async fn test_update_unknown_key_fails() {
        let state = memory_state();

        let err = run_json(&state, &["content", "update", "no.such.key", "x"])
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), "Content not found: no.such.key");
    }

    #[tokio::test]
    async fn test_list_returns_seeded_rows() {
        let state = memory_state();

        let list = run_json(&state, &["content", "list"]).await.unwrap();

        assert_eq!(list[1]["key"], "hero.title");
    }
}
