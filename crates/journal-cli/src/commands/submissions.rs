//! Submission inspection CLI commands.

use clap::{Args, Subcommand};

use crate::output::{self, OutputFormat};
use journal_core::error::AppError;
use journal_entity::submission::SubmissionStore;

/// Arguments for submission commands
#[derive(Debug, Args)]
pub struct SubmissionsArgs {
    /// Submission subcommand
    #[command(subcommand)]
    pub command: SubmissionsCommand,
}

/// Submission subcommands
#[derive(Debug, Subcommand)]
pub enum SubmissionsCommand {
    /// Show one submission by slug or id
    Show {
        /// Slug or id
        key: String,
    },
}

/// Execute submission commands
pub async fn execute(
    args: &SubmissionsArgs,
    env: &str,
    format: OutputFormat,
) -> Result<(), AppError> {
    let config = super::load_config(env)?;
    let store = super::create_store(&config)?;

    match &args.command {
        SubmissionsCommand::Show { key } => {
            let submission = store
                .get_by_slug_or_id(key)
                .await?
                .ok_or_else(|| AppError::not_found(format!("Submission '{key}' not found")))?;
            output::print_item(&submission, format);
        }
    }

    Ok(())
}
