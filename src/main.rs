//! labelcat - Merge every book directory of PDFs into one document.

use anyhow::Context;
use clap::Parser;
use std::process;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use labelcat::batch::{BatchReport, BatchRunner};
use labelcat::cli::Cli;
use labelcat::error::LabelCatError;

#[tokio::main]
async fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    init_tracing(&cli);

    match run(cli).await {
        Ok(report) => process::exit(report.exit_code()),
        Err(err) => {
            error!("{err:#}");
            let code = err
                .downcast_ref::<LabelCatError>()
                .map_or(1, LabelCatError::exit_code);
            process::exit(code);
        }
    }
}

/// Log to stderr at the level chosen by `--verbose`/`--quiet`.
fn init_tracing(cli: &Cli) {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(cli.log_level()))
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

/// Main application logic.
async fn run(cli: Cli) -> anyhow::Result<BatchReport> {
    let config = cli.to_config()?;

    info!("{} v{}", labelcat::NAME, labelcat::VERSION);

    let runner = BatchRunner::new(&config);
    let report = runner
        .run()
        .await
        .with_context(|| format!("Failed to process {}", cli.root.display()))?;

    for failure in &report.failed {
        error!(dir = %failure.name, "{}", failure.error);
    }

    Ok(report)
}
