//! Transient service-account key file.
//!
//! `gcloud auth activate-service-account` only accepts a key file, so the
//! credential blob is written to disk for the duration of a deploy and
//! removed afterwards.

use serde::Deserialize;
use std::io::{ErrorKind, Write};
use std::path::Path;
use tempfile::NamedTempFile;
use tracing::debug;

use crate::error::{DeployError, Result};

/// A uniquely named temporary file holding the raw credentials.
///
/// Created with owner-only permissions. The file is removed by
/// [`CredentialFile::remove`], or on drop if that is never reached.
pub struct CredentialFile {
    file: NamedTempFile,
}

impl CredentialFile {
    /// Write `credentials` to a fresh temporary file.
    pub fn create(credentials: &str) -> Result<Self> {
        let mut file = tempfile::Builder::new()
            .prefix("gcp-credentials-")
            .suffix(".json")
            .tempfile()
            .map_err(DeployError::CredentialWrite)?;

        file.write_all(credentials.as_bytes())
            .and_then(|_| file.flush())
            .map_err(DeployError::CredentialWrite)?;

        if let Some(account) = service_account_email(credentials) {
            debug!(%account, "service account key");
        }
        debug!(path = %file.path().display(), "wrote credential file");

        Ok(Self { file })
    }

    pub fn path(&self) -> &Path {
        self.file.path()
    }

    /// Delete the file. Failures are logged and otherwise ignored.
    pub fn remove(self) {
        let path = self.file.path().to_path_buf();
        match self.file.close() {
            Ok(()) => debug!(path = %path.display(), "removed credential file"),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %path.display(), "credential file already gone")
            }
            Err(e) => debug!(path = %path.display(), error = %e, "could not remove credential file"),
        }
    }
}

#[derive(Deserialize)]
struct ServiceAccountKey {
    client_email: Option<String>,
}

/// The `client_email` of a JSON service-account key, if the blob is one.
fn service_account_email(credentials: &str) -> Option<String> {
    serde_json::from_str::<ServiceAccountKey>(credentials)
        .ok()
        .and_then(|key| key.client_email)
}
