//! Admin account CLI commands.

use clap::{Parser, Subcommand};

use ttrave_core::site::User;
use ttrave_core::storage::{Record, Storage};

use super::{found, OutputFormat};
use crate::output::{format_output, pretty};

/// Admin account commands.
#[derive(Debug, Parser)]
pub struct UsersCommand {
    #[command(subcommand)]
    pub action: UsersAction,
}

/// Available user actions.
#[derive(Debug, Subcommand)]
pub enum UsersAction {
    /// Change an admin password.
    Passwd {
        /// Account to change.
        #[arg(long, default_value = "admin")]
        username: String,
        /// New password.
        #[arg(long, env = "TTRAVE_NEW_PASSWORD", hide_env_values = true)]
        password: String,
    },
}

/// What `users` commands print. Never includes the password.
#[derive(Debug, serde::Serialize)]
#[serde(rename_all = "camelCase")]
struct UserSummary<'a> {
    id: uuid::Uuid,
    username: &'a str,
    created_at: chrono::DateTime<chrono::Utc>,
}

impl UsersCommand {
    pub async fn run(self, storage: &dyn Storage, format: OutputFormat) -> anyhow::Result<String> {
        match self.action {
            UsersAction::Passwd { username, password } => {
                let user = found(
                    storage.get_user_by_username(&username).await?,
                    User::KIND,
                    &username,
                )?;
                let user = found(
                    storage.update_user_password(user.id, &password).await?,
                    User::KIND,
                    user.id,
                )?;
                tracing::info!(user_id = %user.id, username = %user.username, "Password changed");

                let summary = UserSummary {
                    id: user.id,
                    username: &user.username,
                    created_at: user.created_at,
                };
                Ok(format_output(&summary, format, |_| {
                    format!("Password updated:\n{}", pretty::format_user(&user))
                }))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::cli::test_support::{memory_state, run_json};

    #[tokio::test]
    async fn test_passwd_changes_password_without_echoing_it() {
        let state = memory_state();

        let output = run_json(
            &state,
            &["users", "passwd", "--username", "admin", "--password", "n3w"],
        )
        .await
        .unwrap();

        assert_eq!(output["username"], "admin");
        assert!(output.get("password").is_none());

        let admin = state
            .storage
            .get_user_by_username("admin")
            .await
            .unwrap()
            .unwrap();
        assert_eq!(admin.password, "n3w");
    }

    #[tokio::test]
    async fn test_passwd_unknown_user_fails() {
        let state = memory_state();

        let err = run_json(
            &state,
            &["users", "passwd", "--username", "ghost", "--password", "x"],
        )
        .await
        .unwrap_err();

        assert_eq!(err.to_string(), "User not found: ghost");
    }
}
