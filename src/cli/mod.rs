//! Command-line interface.

pub mod output;
pub mod preview;

use clap::Parser;

use crate::core::constants::GCLOUD;

/// Deploy a pull-request preview of the site to Cloud Run.
///
/// Configuration comes from GCP_CREDENTIALS, GCP_PROJECT_ID, GCP_REGION,
/// PR_AUTHOR, AUTHORIZED_PR_AUTHORS and the optional GCP_SOURCE_DIR.
#[derive(Parser, Debug)]
#[command(
    name = "preview-deploy",
    about = "Allowlist-gated preview deployments to Cloud Run",
    version
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Print the commands that would run without running them
    #[arg(long)]
    pub dry_run: bool,

    /// Print the dry-run plan as JSON
    #[arg(long, requires = "dry_run")]
    pub json: bool,

    /// Cloud CLI binary to invoke
    #[arg(long, env = "PREVIEW_DEPLOY_GCLOUD", default_value = GCLOUD)]
    pub gcloud: String,
}

/// Execute the parsed command line.
pub fn execute(cli: &Cli) -> crate::error::Result<()> {
    preview::execute(&cli.gcloud, cli.dry_run, cli.json)
}
