//! Names and literals shared across the pipeline.

/// Raw service-account credential content.
pub const ENV_CREDENTIALS: &str = "GCP_CREDENTIALS";

/// Target project identifier.
pub const ENV_PROJECT_ID: &str = "GCP_PROJECT_ID";

/// Target region identifier.
pub const ENV_REGION: &str = "GCP_REGION";

/// Identity requesting the deployment.
pub const ENV_AUTHOR: &str = "PR_AUTHOR";

/// Comma/whitespace separated allowlist of authors.
pub const ENV_AUTHORIZED: &str = "AUTHORIZED_PR_AUTHORS";

/// Optional path to the deployable directory.
pub const ENV_SOURCE_DIR: &str = "GCP_SOURCE_DIR";

/// Source directory used when `GCP_SOURCE_DIR` is unset.
pub const DEFAULT_SOURCE_DIR: &str = "site";

/// Prefix for service names that would otherwise not start with a letter.
pub const SERVICE_PREFIX: &str = "p-";

/// Cloud Run platform target.
pub const PLATFORM: &str = "managed";

/// Default cloud CLI binary.
pub const GCLOUD: &str = "gcloud";

/// Placeholder shown for the key file in dry runs.
pub const KEY_FILE_PLACEHOLDER: &str = "<credentials-file>";
