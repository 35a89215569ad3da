//! childgen CLI entrypoint
//! Parses command-line arguments and dispatches to the core generator.

// Internal imports (std, crate)
use std::path::PathBuf;

// External imports (alphabetized)
use anyhow::Context;
use childgen_core::{AtomicFilePublisher, Config, PublishOutcome, SlotCount};
use clap::Parser;
use tracing_subscriber::EnvFilter;

/// Generate numbered SandboxedProcessService classes into a srcjar
#[derive(Parser, Debug)]
#[command(name = "childgen")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Number of service classes to generate
    #[arg(value_name = "number", allow_negative_numbers = true)]
    number: SlotCount,
    /// Path of the srcjar to write
    #[arg(value_name = "output")]
    output: PathBuf,
}

fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    tracing::debug!(
        "Resolved invocation: number={}, output={}",
        cli.number,
        cli.output.display()
    );

    let config = Config::new(cli.number, cli.output);
    let summary = childgen_core::generate(&config, &AtomicFilePublisher::new())
        .with_context(|| format!("Failed to generate {}", config.output.display()))?;

    match summary.outcome {
        PublishOutcome::Written => tracing::info!(
            "Wrote {} services ({} bytes) to {}",
            summary.entries,
            summary.bytes,
            config.output.display()
        ),
        PublishOutcome::Unchanged => tracing::info!(
            "{} is up to date ({} services)",
            config.output.display(),
            summary.entries
        ),
    }
    Ok(())
}
