//! preview-deploy - allowlist-gated preview deployments to Cloud Run.
//!
//! # Architecture
//!
//! ```text
//! src/
//! ├── cli/              # Command-line interface
//! │   ├── output        # Terminal output helpers
//! │   └── preview       # The deploy pipeline as a command
//! └── core/             # Core library components
//!     ├── config        # Environment configuration
//!     ├── allowlist     # Author allowlist
//!     ├── service       # Service name derivation
//!     ├── credentials   # Transient key file
//!     ├── gcloud        # gcloud invocations and runners
//!     └── deploy        # Authorization gate and deploy sequence
//! ```
//!
//! # Pipeline
//!
//! 1. Load and validate configuration from the environment
//! 2. Skip (successfully) when the author is not allowlisted
//! 3. Derive the Cloud Run service name from the author
//! 4. Authenticate `gcloud`, set project and region, deploy the source dir

pub mod cli;
pub mod core;
pub mod error;
