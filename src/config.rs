//! Configuration module for labelcat.
//!
//! The root directory and the accepted input extension are fixed for the
//! lifetime of a run. They live in a [`Config`] value built once at startup
//! and handed to the orchestrator; there is no global state.

use std::path::{Path, PathBuf};

use crate::error::{LabelCatError, Result};

/// Extension an input file name must end with to be merged.
pub const DEFAULT_EXTENSION: &str = ".pdf";

/// Suffix appended to a book directory's name to form its output name.
pub const MERGED_SUFFIX: &str = "_MERGED";

/// Extension of the merged output file.
pub const OUTPUT_EXTENSION: &str = ".pdf";

/// Complete configuration for a batch run.
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory whose immediate subdirectories are book directories.
    pub root: PathBuf,

    /// Case-sensitive file name suffix selecting input documents.
    pub extension: String,

    /// Verbose output mode.
    pub verbose: bool,

    /// Quiet mode - only warnings and errors are logged.
    pub quiet: bool,
}

impl Config {
    /// Create a configuration for `root` with default settings.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            extension: DEFAULT_EXTENSION.to_string(),
            verbose: false,
            quiet: false,
        }
    }

    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The root does not exist or is not a directory
    /// - The extension is empty
    /// - Verbose and quiet modes are both enabled
    pub fn validate(&self) -> Result<()> {
        if !self.root.try_exists()? {
            return Err(LabelCatError::root_not_found(self.root.clone()));
        }

        if !self.root.is_dir() {
            return Err(LabelCatError::not_a_directory(self.root.clone()));
        }

        if self.extension.is_empty() {
            return Err(LabelCatError::invalid_config(
                "Accepted extension cannot be empty",
            ));
        }

        if self.verbose && self.quiet {
            return Err(LabelCatError::invalid_config(
                "Cannot use both --verbose and --quiet",
            ));
        }

        Ok(())
    }

    /// Name of the merged file produced for a directory called `base`.
    ///
    /// # Examples
    ///
    /// ```
    /// use labelcat::config::Config;
    ///
    /// let config = Config::new("/books");
    /// assert_eq!(config.output_file_name("Lisbon"), "Lisbon_MERGED.pdf");
    /// ```
    pub fn output_file_name(&self, base: &str) -> String {
        format!("{base}{MERGED_SUFFIX}{OUTPUT_EXTENSION}")
    }

    /// Expected output path for a book directory: `<dir>/<dir name>_MERGED.pdf`.
    ///
    /// Returns `None` for paths without a final component (such as `/`).
    pub fn output_path_for(&self, dir: &Path) -> Option<PathBuf> {
        let base = dir.file_name()?.to_string_lossy();
        Some(dir.join(self.output_file_name(&base)))
    }

    /// Whether a file name selects the file as merge input.
    pub fn is_candidate(&self, file_name: &str) -> bool {
        file_name.ends_with(&self.extension)
    }
}
