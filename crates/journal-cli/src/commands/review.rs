//! Review CLI commands.

use clap::{Args, Subcommand};
use serde::Serialize;
use tabled::Tabled;
use uuid::Uuid;

use crate::output::{self, OutputFormat};
use journal_core::error::AppError;
use journal_entity::submission::{ReviewStatus, Submission};

/// Arguments for review commands
#[derive(Debug, Args)]
pub struct ReviewArgs {
    /// Review subcommand
    #[command(subcommand)]
    pub command: ReviewCommand,
}

/// Review subcommands
#[derive(Debug, Subcommand)]
pub enum ReviewCommand {
    /// List submissions
    List {
        /// Filter by status (pending, approved, rejected)
        #[arg(short, long)]
        status: Option<String>,
    },
    /// Approve a pending submission
    Approve {
        /// Submission id
        id: Uuid,
        /// Reviewer identity stamped on the record
        #[arg(long)]
        reviewer: String,
        /// Feedback to the author
        #[arg(long)]
        feedback: Option<String>,
    },
    /// Reject a pending submission (asks for confirmation)
    Reject {
        /// Submission id
        id: Uuid,
        /// Reviewer identity stamped on the record
        #[arg(long)]
        reviewer: String,
        /// Feedback to the author
        #[arg(long)]
        feedback: Option<String>,
        /// Skip the interactive confirmation
        #[arg(long)]
        yes: bool,
    },
}

/// Submission display row for table output
#[derive(Debug, Serialize, Tabled)]
struct SubmissionRow {
    /// Submission ID
    id: String,
    /// Title
    title: String,
    /// Author
    author: String,
    /// Legal area
    area: String,
    /// Status
    status: String,
    /// Submitted at
    submitted: String,
}

impl SubmissionRow {
    fn from_submission(s: &Submission) -> Self {
        Self {
            id: s.id.to_string(),
            title: s.title.clone(),
            author: s.author_name.clone(),
            area: s.area.to_string(),
            status: s.status.to_string(),
            submitted: s.submitted_at.format("%Y-%m-%d %H:%M").to_string(),
        }
    }
}

/// Execute review commands
pub async fn execute(args: &ReviewArgs, env: &str, format: OutputFormat) -> Result<(), AppError> {
    let config = super::load_config(env)?;
    let service = super::create_review_service(&config)?;

    match &args.command {
        ReviewCommand::List { status } => {
            let status = status
                .as_deref()
                .map(str::parse::<ReviewStatus>)
                .transpose()?;
            let rows: Vec<SubmissionRow> = service
                .list(status)
                .await?
                .iter()
                .map(SubmissionRow::from_submission)
                .collect();
            output::print_list(&rows, format);
        }
        ReviewCommand::Approve {
            id,
            reviewer,
            feedback,
        } => {
            service.approve(*id, reviewer, feedback.clone()).await?;
            output::print_success(&format!("Submission {id} approved"));
        }
        ReviewCommand::Reject {
            id,
            reviewer,
            feedback,
            yes,
        } => {
            let confirmed = *yes
                || dialoguer::Confirm::new()
                    .with_prompt(format!(
                        "Reject submission {id}? The author will need to resubmit."
                    ))
                    .default(false)
                    .interact()
                    .map_err(|e| AppError::internal(format!("Confirmation prompt failed: {e}")))?;

            if !confirmed {
                output::print_warning("Rejection cancelled; submission left unchanged.");
                return Ok(());
            }

            service
                .reject(*id, reviewer, feedback.clone(), confirmed)
                .await?;
            output::print_success(&format!("Submission {id} rejected"));
        }
    }

    Ok(())
}
