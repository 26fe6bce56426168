//! CLI command definitions and dispatch.

pub mod review;
pub mod submissions;

use std::sync::Arc;

use clap::{Parser, Subcommand};

use crate::output::OutputFormat;
use journal_core::config::AppConfig;
use journal_core::error::AppError;
use journal_service::review::ReviewService;
use journal_store::client::ServiceClient;
use journal_store::RestSubmissionStore;

/// Law Journal — review and administration CLI
#[derive(Debug, Parser)]
#[command(name = "journal-cli", version, about, long_about = None)]
pub struct Cli {
    /// Configuration environment (selects config/<env>.toml)
    #[arg(short, long, default_value = "development")]
    pub env: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Review pending submissions
    Review(review::ReviewArgs),
    /// Inspect individual submissions
    Submissions(submissions::SubmissionsArgs),
}

impl Cli {
    /// Execute the CLI command
    pub async fn execute(&self) -> Result<(), AppError> {
        match &self.command {
            Commands::Review(args) => review::execute(args, &self.env, self.format).await,
            Commands::Submissions(args) => {
                submissions::execute(args, &self.env, self.format).await
            }
        }
    }
}

/// Load configuration for the given environment.
pub(crate) fn load_config(env: &str) -> Result<AppConfig, AppError> {
    AppConfig::load(env)
}

/// Build the remote submission store from configuration.
pub(crate) fn create_store(config: &AppConfig) -> Result<Arc<RestSubmissionStore>, AppError> {
    let client = ServiceClient::new(&config.store)?;
    Ok(Arc::new(RestSubmissionStore::new(client)))
}

/// Build the review service from configuration.
pub(crate) fn create_review_service(config: &AppConfig) -> Result<ReviewService, AppError> {
    Ok(ReviewService::new(create_store(config)?))
}
