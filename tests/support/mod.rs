//! Test support utilities for preview-deploy integration tests.
//!
//! Provides an isolated working directory per test and a fake `gcloud`
//! that records its arguments instead of talking to Google Cloud.

#![allow(dead_code)]

pub mod assertions;

#[allow(unused_imports)]
pub use assertions::*;
#[allow(unused_imports)]
pub use fixtures::*;

use std::path::{Path, PathBuf};
use std::sync::OnceLock;
use tempfile::TempDir;

/// Test environment with an isolated project directory.
///
/// The project directory holds a `site/` directory, a private `tmp/` used
/// as `TMPDIR` for the credential file, and the fake gcloud log. Child
/// processes use `.current_dir()` so tests can run in parallel.
pub struct Test {
    /// Temporary directory for the test project
    pub dir: TempDir,
}

impl Test {
    /// Create a test environment with an empty `site/` directory.
    pub fn new() -> Self {
        let dir = TempDir::new().expect("failed to create temp dir");
        std::fs::create_dir(dir.path().join("site")).expect("failed to create site dir");
        std::fs::write(dir.path().join("site").join("index.html"), "<h1>preview</h1>")
            .expect("failed to write index.html");
        std::fs::create_dir(dir.path().join("tmp")).expect("failed to create tmp dir");
        Self { dir }
    }

    /// Path inside the project directory.
    pub fn path(&self, rel: &str) -> PathBuf {
        self.dir.path().join(rel)
    }

    /// Directory used as `TMPDIR` by the binary under test.
    pub fn tmp(&self) -> PathBuf {
        self.path("tmp")
    }

    /// File the fake gcloud appends one line of arguments to per call.
    pub fn log_path(&self) -> PathBuf {
        self.path("gcloud.log")
    }

    /// Argument lines recorded by the fake gcloud, empty if never called.
    pub fn gcloud_calls(&self) -> Vec<String> {
        std::fs::read_to_string(self.log_path())
            .map(|s| s.lines().map(str::to_string).collect())
            .unwrap_or_default()
    }

    /// Key file path the fake gcloud was handed during `auth`.
    pub fn key_file(&self) -> Option<PathBuf> {
        std::fs::read_to_string(self.path("gcloud.log.keyfile"))
            .ok()
            .map(|s| PathBuf::from(s.trim_end()))
    }

    /// Contents of the key file as seen by the fake gcloud during `auth`.
    pub fn key_contents(&self) -> Option<String> {
        std::fs::read_to_string(self.path("gcloud.log.key")).ok()
    }

    /// Whether the private `TMPDIR` is empty.
    pub fn tmp_is_empty(&self) -> bool {
        std::fs::read_dir(self.tmp())
            .expect("failed to read tmp dir")
            .next()
            .is_none()
    }
}

const FAKE_GCLOUD: &str = r#"#!/bin/sh
log="$FAKE_GCLOUD_LOG"
printf '%s\n' "$*" >> "$log"
if [ "$1" = "auth" ]; then
  printf '%s\n' "$4" > "$log.keyfile"
  cat "$4" > "$log.key"
fi
if [ -n "$FAKE_GCLOUD_FAIL_ON" ]; then
  case "$*" in
    "$FAKE_GCLOUD_FAIL_ON"*)
      echo "fake gcloud: refusing '$*'" >&2
      exit 3
      ;;
  esac
fi
exit 0
"#;

/// Path to the fake gcloud script, written once per test binary.
pub fn fake_gcloud() -> &'static Path {
    static SCRIPT: OnceLock<PathBuf> = OnceLock::new();
    SCRIPT.get_or_init(|| {
        let path = Path::new(env!("CARGO_TARGET_TMPDIR")).join("fake-gcloud.sh");
        std::fs::write(&path, FAKE_GCLOUD).expect("failed to write fake gcloud");
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755))
                .expect("failed to chmod fake gcloud");
        }
        path
    })
}
