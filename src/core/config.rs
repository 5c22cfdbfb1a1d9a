//! Deployment configuration loaded from the environment.

use std::ffi::OsString;
use std::fmt;
use std::path::PathBuf;
use tracing::debug;
use zeroize::Zeroizing;

use crate::core::constants::{
    DEFAULT_SOURCE_DIR, ENV_AUTHOR, ENV_AUTHORIZED, ENV_CREDENTIALS, ENV_PROJECT_ID, ENV_REGION,
    ENV_SOURCE_DIR,
};
use crate::error::{ConfigError, Result};

/// Everything a preview deployment needs, read once at startup.
pub struct Config {
    /// Raw service-account credential content
    pub credentials: Zeroizing<String>,
    /// Target project identifier
    pub project_id: String,
    /// Target region identifier
    pub region: String,
    /// Author requesting the deployment, as given
    pub author: String,
    /// Unparsed allowlist
    pub authorized_raw: String,
    /// Directory handed to `gcloud run deploy --source`
    pub source_dir: PathBuf,
}

impl Config {
    /// Load configuration from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var_os(name))
    }

    /// Load configuration through an arbitrary variable lookup.
    ///
    /// Required variables are checked in a fixed order and the first one that
    /// is absent or empty is reported. `GCP_SOURCE_DIR` is taken as raw bytes
    /// and only defaults when unset; the resulting directory must exist.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<OsString>,
    {
        let required = |name: &'static str| -> Result<String> {
            match lookup(name) {
                Some(value) if !value.is_empty() => value
                    .into_string()
                    .map_err(|_| ConfigError::NotUnicode(name).into()),
                _ => Err(ConfigError::MissingVar(name).into()),
            }
        };

        let credentials = Zeroizing::new(required(ENV_CREDENTIALS)?);
        let project_id = required(ENV_PROJECT_ID)?;
        let region = required(ENV_REGION)?;
        let author = required(ENV_AUTHOR)?;
        let authorized_raw = required(ENV_AUTHORIZED)?;
        let source_dir = PathBuf::from(
            lookup(ENV_SOURCE_DIR).unwrap_or_else(|| OsString::from(DEFAULT_SOURCE_DIR)),
        );

        if !source_dir.is_dir() {
            return Err(ConfigError::SourceDirMissing(source_dir).into());
        }

        let config = Self {
            credentials,
            project_id,
            region,
            author,
            authorized_raw,
            source_dir,
        };
        debug!(?config, "loaded configuration");
        Ok(config)
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("credentials", &"<redacted>")
            .field("project_id", &self.project_id)
            .field("region", &self.region)
            .field("author", &self.author)
            .field("authorized_raw", &self.authorized_raw)
            .field("source_dir", &self.source_dir)
            .finish()
    }
}
