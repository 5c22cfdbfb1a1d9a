//! preview-deploy - allowlist-gated preview deployments to Cloud Run.

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use preview_deploy::cli::output;
use preview_deploy::cli::{execute, Cli};
use preview_deploy::error::{ConfigError, DeployError, Error};

fn main() {
    let cli = Cli::parse();

    // Initialize tracing subscriber with env-filter support
    let filter = EnvFilter::try_from_env("PREVIEW_DEPLOY_LOG").unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("preview_deploy=debug")
        } else {
            EnvFilter::new("preview_deploy=warn")
        }
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();

    if let Err(e) = execute(&cli) {
        let suggestion = match &e {
            Error::Config(ConfigError::MissingVar(name)) => {
                Some(format!("export {} before running", name))
            }
            Error::Config(ConfigError::SourceDirMissing(_)) => {
                Some("set GCP_SOURCE_DIR to the built site directory".to_string())
            }
            Error::Deploy(DeployError::GcloudNotFound(_)) => {
                Some("pass --gcloud or set PREVIEW_DEPLOY_GCLOUD to point at the CLI".to_string())
            }
            _ => None,
        };

        output::error(&e.to_string());
        if let Some(hint) = suggestion {
            output::hint(&hint);
        }
        std::process::exit(1);
    }
}
