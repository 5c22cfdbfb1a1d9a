//! Preview deploy command.
//!
//! Wires the core pipeline to the terminal: loads configuration, applies the
//! allowlist gate, then either prints the plan (dry run) or deploys.

use serde::Serialize;
use std::borrow::Cow;
use std::ffi::OsStr;

use crate::cli::output;
use crate::core::config::Config;
use crate::core::constants::KEY_FILE_PLACEHOLDER;
use crate::core::deploy::{self, Decision};
use crate::core::gcloud::{self, Invocation, ProcessRunner};
use crate::error::Result;

/// What a run would do, as printed by `--dry-run --json`.
#[derive(Debug, Serialize)]
struct Plan<'a> {
    author: &'a str,
    authorized: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    service: Option<&'a str>,
    project: &'a str,
    region: &'a str,
    source_dir: Cow<'a, str>,
    commands: Vec<Invocation>,
}

/// Run the preview deployment.
pub fn execute(program: &str, dry_run: bool, json: bool) -> Result<()> {
    let config = Config::from_env()?;
    let decision = deploy::authorize(&config)?;

    if dry_run {
        return print_plan(&config, program, &decision, json);
    }

    let service = match decision {
        Decision::Skip => {
            skip_notice(&config.author);
            return Ok(());
        }
        Decision::Deploy { service } => service,
    };

    println!(
        "Deploying preview for '{}' as service '{}'.",
        config.author, service
    );

    let binary = gcloud::locate(program)?;
    let mut runner = ProcessRunner::new(binary);
    deploy::deploy(&config, &service, program, &mut runner, |invocation| {
        output::command(invocation)
    })?;

    output::success("Deployment completed.");
    Ok(())
}

fn skip_notice(author: &str) {
    output::warn(&format!(
        "Author '{}' is not authorized for deployment; skipping.",
        author
    ));
}

fn print_plan(config: &Config, program: &str, decision: &Decision, json: bool) -> Result<()> {
    let service = match decision {
        Decision::Deploy { service } => Some(service.as_str()),
        Decision::Skip => None,
    };
    let commands = service
        .map(|service| {
            gcloud::deploy_sequence(
                OsStr::new(program),
                config,
                service,
                OsStr::new(KEY_FILE_PLACEHOLDER),
            )
        })
        .unwrap_or_default();

    if json {
        let plan = Plan {
            author: &config.author,
            authorized: service.is_some(),
            service,
            project: &config.project_id,
            region: &config.region,
            source_dir: config.source_dir.to_string_lossy(),
            commands,
        };
        println!("{}", serde_json::to_string_pretty(&plan)?);
        return Ok(());
    }

    let Some(service) = service else {
        skip_notice(&config.author);
        return Ok(());
    };

    output::header("Preview deployment (dry run)");
    output::kv("author: ", &config.author);
    output::kv("service:", service);
    output::kv("project:", &config.project_id);
    output::kv("region: ", &config.region);
    output::kv("source: ", config.source_dir.display());
    println!();
    for invocation in &commands {
        output::command(invocation);
    }
    Ok(())
}
