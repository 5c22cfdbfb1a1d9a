//! Preview deployment pipeline.

use std::ffi::OsStr;
use tracing::{debug, info};

use crate::core::allowlist::Allowlist;
use crate::core::config::Config;
use crate::core::credentials::CredentialFile;
use crate::core::gcloud::{self, Invocation, Runner};
use crate::core::service;
use crate::error::Result;

/// Result of the authorization gate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    /// Author is allowlisted; deploy under this service name.
    Deploy { service: String },
    /// Author is not allowlisted; nothing to do.
    Skip,
}

/// Check the author against the allowlist and derive the service name.
///
/// The service name is only computed for authorized authors, so an
/// unsanitizable handle that is not on the list still skips cleanly.
pub fn authorize(config: &Config) -> Result<Decision> {
    let allowlist = Allowlist::parse(&config.authorized_raw);
    debug!(entries = allowlist.len(), "parsed allowlist");

    if !allowlist.permits(&config.author) {
        info!(author = %config.author, "author not on allowlist");
        return Ok(Decision::Skip);
    }

    let service = service::service_name(&config.author)?;
    debug!(%service, "derived service name");
    Ok(Decision::Deploy { service })
}

/// Deploy `service` with the given runner.
///
/// Writes the credential file, runs the four `gcloud` commands in order and
/// stops at the first failure. The credential file is removed exactly once
/// whether or not the commands succeed. `echo` sees each invocation before it
/// runs.
pub fn deploy<R, E>(
    config: &Config,
    service: &str,
    program: &str,
    runner: &mut R,
    mut echo: E,
) -> Result<()>
where
    R: Runner,
    E: FnMut(&Invocation),
{
    let key_file = CredentialFile::create(&config.credentials)?;

    let sequence = gcloud::deploy_sequence(
        OsStr::new(program),
        config,
        service,
        key_file.path().as_os_str(),
    );
    let outcome = sequence.iter().try_for_each(|invocation| {
        echo(invocation);
        runner.run(invocation)
    });

    key_file.remove();
    outcome
}
