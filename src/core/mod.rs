//! Core library components.
//!
//! Configuration loading, author authorization, service naming and the
//! `gcloud` deploy sequence. Nothing in here writes to the terminal.

pub mod allowlist;
pub mod config;
pub mod constants;
pub mod credentials;
pub mod deploy;
pub mod gcloud;
pub mod service;
