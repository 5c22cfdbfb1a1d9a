//! Error types for preview-deploy.
//!
//! Errors are grouped by the pipeline stage that raises them and folded into
//! a single top-level [`Error`].

use std::path::PathBuf;
use std::process::ExitStatus;
use thiserror::Error;

/// Top-level error type.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Deploy(#[from] DeployError),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Environment and filesystem configuration errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingVar(&'static str),

    #[error("Environment variable {0} is not valid Unicode")]
    NotUnicode(&'static str),

    #[error("Source directory does not exist: {}", .0.display())]
    SourceDirMissing(PathBuf),
}

/// Input validation errors.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Sanitized author name is empty; cannot deploy (author: '{0}')")]
    EmptyServiceName(String),
}

/// Errors raised while talking to the cloud CLI.
#[derive(Error, Debug)]
pub enum DeployError {
    #[error("{0} CLI not found. Install it from https://cloud.google.com/sdk/docs/install")]
    GcloudNotFound(String),

    #[error("failed to write credential file: {0}")]
    CredentialWrite(#[source] std::io::Error),

    #[error("failed to spawn `{command}`: {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("command `{command}` failed with {status}")]
    CommandFailed { command: String, status: ExitStatus },
}

pub type Result<T> = std::result::Result<T, Error>;
