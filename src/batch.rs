//! Batch orchestration over the book directories of a root.
//!
//! Every immediate subdirectory of the root is one book. Books are handled
//! one after another. A book that already has its merged output is left
//! alone, and a book that fails is recorded and does not stop the run.

use std::path::PathBuf;
use std::time::{Duration, Instant};
use tracing::{debug, error, info};

use crate::config::Config;
use crate::error::{LabelCatError, Result};
use crate::merge::{DirectoryMerger, DirectoryOutcome, MergeSummary};
use crate::walker;

/// A book directory whose merge failed.
#[derive(Debug)]
pub struct DirectoryFailure {
    /// Path of the book directory.
    pub dir: PathBuf,
    /// Directory name, as logged.
    pub name: String,
    /// What went wrong.
    pub error: LabelCatError,
}

/// What happened to each book directory during a run.
#[derive(Debug, Default)]
pub struct BatchReport {
    /// Directories for which an output file was written.
    pub merged: Vec<MergeSummary>,

    /// Directories skipped because their output already existed.
    pub already_merged: Vec<PathBuf>,

    /// Directories where no document carried page labels.
    pub nothing_to_merge: Vec<PathBuf>,

    /// Directories whose merge failed.
    pub failed: Vec<DirectoryFailure>,

    /// Wall-clock time of the run.
    pub elapsed: Duration,
}

impl BatchReport {
    /// Number of book directories visited.
    pub fn directories(&self) -> usize {
        self.merged.len() + self.already_merged.len() + self.nothing_to_merge.len() + self.failed.len()
    }

    /// Whether any book directory failed.
    pub fn has_failures(&self) -> bool {
        !self.failed.is_empty()
    }

    /// Process exit code for the run: 1 if any directory failed, else 0.
    pub fn exit_code(&self) -> i32 {
        if self.has_failures() { 1 } else { 0 }
    }

    fn record_failure(&mut self, dir: PathBuf, name: String, error: LabelCatError) {
        self.failed.push(DirectoryFailure { dir, name, error });
    }
}

/// Walks the root and merges each book directory in turn.
#[derive(Debug)]
pub struct BatchRunner {
    config: Config,
    merger: DirectoryMerger,
}

impl BatchRunner {
    /// Create a runner for `config`.
    pub fn new(config: &Config) -> Self {
        Self {
            config: config.clone(),
            merger: DirectoryMerger::new(config),
        }
    }

    /// Merge every book directory under the root.
    ///
    /// # Errors
    ///
    /// Only an unusable root is an error. Failures inside a book directory
    /// are collected in [`BatchReport::failed`].
    pub async fn run(&self) -> Result<BatchReport> {
        let start = Instant::now();
        self.config.validate()?;

        let dirs = walker::subdirectories(&self.config.root)?;
        info!(root = %self.config.root.display(), directories = dirs.len(), "starting batch");

        let mut report = BatchReport::default();

        for dir in dirs {
            let Some(output) = self.config.output_path_for(&dir) else {
                continue;
            };
            let name = dir
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_default();

            // Anything but a definite "absent" must not lead to a write.
            match tokio::fs::try_exists(&output).await {
                Ok(true) => {
                    info!(dir = %name, "already merged, skipping");
                    report.already_merged.push(dir);
                    continue;
                }
                Ok(false) => {}
                Err(err) => {
                    error!(dir = %name, error = %err, "cannot check for merged output");
                    report.record_failure(dir, name, err.into());
                    continue;
                }
            }

            debug!(dir = %name, "merging directory");

            match self.merger.merge_directory(&dir, &name).await {
                Ok(DirectoryOutcome::Merged(summary)) => report.merged.push(summary),
                Ok(DirectoryOutcome::NothingToMerge { .. }) => report.nothing_to_merge.push(dir),
                Err(err) => {
                    error!(dir = %name, error = %err, "failed to merge directory");
                    report.record_failure(dir, name, err);
                }
            }
        }

        report.elapsed = start.elapsed();

        info!(
            merged = report.merged.len(),
            already_merged = report.already_merged.len(),
            nothing_to_merge = report.nothing_to_merge.len(),
            failed = report.failed.len(),
            elapsed = ?report.elapsed,
            "batch complete"
        );

        Ok(report)
    }
}
