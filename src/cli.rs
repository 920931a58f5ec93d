//! CLI argument parsing for labelcat.
//!
//! # Examples
//!
//! ```no_run
//! use labelcat::cli::Cli;
//! use clap::Parser;
//!
//! let cli = Cli::parse();
//! println!("Merging books under {}", cli.root.display());
//! ```

use clap::Parser;
use std::path::PathBuf;

use crate::config::Config;
use crate::error::Result;

/// Merge the PDFs of every book directory, ordered by page label.
///
/// Each immediate subdirectory of ROOT is a book. Its PDFs are merged into
/// `<dir>/<dir name>_MERGED.pdf`, ordered by the label printed on each
/// document's first page. Books that already have a merged file are skipped.
#[derive(Parser, Debug)]
#[command(name = "labelcat")]
#[command(version)]
#[command(about = "Merge the PDFs of every book directory, ordered by page label", long_about = None)]
#[command(author)]
#[command(arg_required_else_help = true)]
pub struct Cli {
    /// Directory whose subdirectories hold the PDFs to merge
    #[arg(value_name = "ROOT")]
    pub root: PathBuf,

    /// Verbose output - log each document as it is loaded and appended
    #[arg(short, long)]
    pub verbose: bool,

    /// Suppress all non-error output
    ///
    /// Only warnings and errors are logged.
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

impl Cli {
    /// Convert CLI arguments into a validated Config.
    ///
    /// # Errors
    ///
    /// Returns an error if the root does not exist or is not a directory.
    pub fn to_config(&self) -> Result<Config> {
        let config = Config {
            verbose: self.verbose,
            quiet: self.quiet,
            ..Config::new(self.root.clone())
        };

        config.validate()?;

        Ok(config)
    }

    /// Default log filter for the selected verbosity.
    pub fn log_level(&self) -> &'static str {
        if self.quiet {
            "warn"
        } else if self.verbose {
            "debug"
        } else {
            "info"
        }
    }
}
