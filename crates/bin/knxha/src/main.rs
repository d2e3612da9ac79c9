//! # knxha: KNX project to Home Assistant converter
//!
//! Composition root that wires the project source, the conversion service
//! and the YAML renderer together.
//!
//! ## Responsibilities
//! - Parse command line arguments and configuration (file, env vars)
//! - Install the `tracing` subscriber (stderr, so stdout stays pure YAML)
//! - Construct the project source adapter and the conversion service
//! - Render the result to stdout or the requested file
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer: no classification logic belongs here.

mod cli;
mod config;

use std::io::Write;

use anyhow::Context;
use clap::Parser;
use knxha_adapter_project_json::JsonProjectSource;
use knxha_adapter_yaml::{to_annotated_yaml, to_yaml};
use knxha_app::services::conversion_service::ConversionService;
use tracing_subscriber::EnvFilter;

use crate::cli::Cli;
use crate::config::Config;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = Config::load(cli.config.as_deref()).context("failed to load configuration")?;
    if let Some(language) = cli.language {
        config.project.language = language;
    }
    init_tracing(&config.logging.filter, cli.debug);

    // Services
    let service = ConversionService::new(JsonProjectSource::new(), config.ranges);
    let registry = service
        .load(&cli.input, &config.project.language)
        .with_context(|| format!("failed to load project {}", cli.input.display()))?;
    let conversion = service.convert(&registry);

    // Output
    let yaml = if cli.comments {
        to_annotated_yaml(&conversion.config, |id| conversion.index.path_of(id))
    } else {
        to_yaml(&conversion.config)
    }
    .context("failed to render configuration")?;

    match &cli.output {
        Some(path) => std::fs::write(path, &yaml)
            .with_context(|| format!("failed to write {}", path.display()))?,
        None => std::io::stdout()
            .lock()
            .write_all(yaml.as_bytes())
            .context("failed to write to stdout")?,
    }

    if cli.debug {
        tracing::debug!("{}", conversion.coverage());
    }
    if !conversion.diagnostics.is_empty() {
        tracing::info!(
            count = conversion.diagnostics.len(),
            "conversion finished with diagnostics"
        );
    }

    Ok(())
}

fn init_tracing(filter: &str, debug: bool) {
    let filter = if debug {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_new(filter).unwrap_or_else(|err| {
            eprintln!("knxha: ignoring invalid log filter {filter:?}: {err}");
            EnvFilter::new("info")
        })
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
