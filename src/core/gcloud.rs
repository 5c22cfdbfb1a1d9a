//! `gcloud` invocations.
//!
//! The deploy sequence is built as plain data ([`Invocation`]) and handed to a
//! [`Runner`], so the real process runner and the test recorder see exactly the
//! same command lines.

use serde::Serialize;
use std::ffi::{OsStr, OsString};
use std::fmt;
use std::path::{Path, PathBuf};
use std::process::Command;
use tracing::trace;

use crate::core::config::Config;
use crate::core::constants::PLATFORM;
use crate::error::{DeployError, Result};

/// One command line against the cloud CLI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub program: OsString,
    pub args: Vec<OsString>,
}

impl Invocation {
    fn new<I, S>(program: &OsStr, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<OsString>,
    {
        Self {
            program: program.to_os_string(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }

    /// Arguments as lossy UTF-8, for display and JSON output.
    pub fn args_lossy(&self) -> Vec<String> {
        self.args
            .iter()
            .map(|a| a.to_string_lossy().into_owned())
            .collect()
    }
}

impl fmt::Display for Invocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program.to_string_lossy())?;
        for arg in &self.args {
            write!(f, " {}", arg.to_string_lossy())?;
        }
        Ok(())
    }
}

impl Serialize for Invocation {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut argv = vec![self.program.to_string_lossy().into_owned()];
        argv.extend(self.args_lossy());
        argv.serialize(serializer)
    }
}

/// The four commands of a preview deployment, in execution order.
pub fn deploy_sequence(
    program: &OsStr,
    config: &Config,
    service: &str,
    key_file: &OsStr,
) -> Vec<Invocation> {
    vec![
        Invocation::new(
            program,
            [
                OsStr::new("auth"),
                OsStr::new("activate-service-account"),
                OsStr::new("--key-file"),
                key_file,
            ],
        ),
        Invocation::new(program, ["config", "set", "project", config.project_id.as_str()]),
        Invocation::new(program, ["config", "set", "run/region", config.region.as_str()]),
        Invocation::new(
            program,
            [
                OsStr::new("run"),
                OsStr::new("deploy"),
                OsStr::new(service),
                OsStr::new("--source"),
                config.source_dir.as_os_str(),
                OsStr::new("--region"),
                OsStr::new(&config.region),
                OsStr::new("--platform"),
                OsStr::new(PLATFORM),
                OsStr::new("--allow-unauthenticated"),
            ],
        ),
    ]
}

/// Resolve the cloud CLI binary on `PATH`.
pub fn locate(program: &str) -> Result<PathBuf> {
    which::which(program).map_err(|_| DeployError::GcloudNotFound(program.to_string()).into())
}

/// Executes invocations one at a time.
pub trait Runner {
    /// Run an invocation to completion. A non-zero exit is an error.
    fn run(&mut self, invocation: &Invocation) -> Result<()>;
}

/// Runs invocations as child processes with inherited stdio.
pub struct ProcessRunner {
    binary: PathBuf,
}

impl ProcessRunner {
    /// Runner that spawns `binary` in place of each invocation's program name.
    pub fn new(binary: impl AsRef<Path>) -> Self {
        Self {
            binary: binary.as_ref().to_path_buf(),
        }
    }
}

impl Runner for ProcessRunner {
    fn run(&mut self, invocation: &Invocation) -> Result<()> {
        trace!(binary = %self.binary.display(), args = ?invocation.args, "spawning");

        let status = Command::new(&self.binary)
            .args(&invocation.args)
            .status()
            .map_err(|source| DeployError::Spawn {
                command: invocation.to_string(),
                source,
            })?;

        if !status.success() {
            return Err(DeployError::CommandFailed {
                command: invocation.to_string(),
                status,
            }
            .into());
        }

        Ok(())
    }
}
