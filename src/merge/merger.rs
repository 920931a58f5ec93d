//! Directory merger.
//!
//! Merges every labelled PDF directly inside one book directory into
//! `<dir>/<base>_MERGED.pdf`, in page-label order.

use std::fmt;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use crate::config::Config;
use crate::error::Result;
use crate::io::{PdfReader, PdfWriter, WriteStatistics, unlock};
use crate::labels::{LabeledPdf, first_page_label, sort_by_page_label};
use crate::merge::pages;
use crate::walker;

/// Why a candidate file was left out of the merge without failing it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// The document carries no page-label metadata.
    NoPageLabels,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoPageLabels => write!(f, "no page labels, document seems to be corrupted"),
        }
    }
}

/// Outcome of examining one candidate file.
#[derive(Debug)]
pub enum Admission {
    /// The document will be merged.
    Accepted(LabeledPdf),
    /// The document was released without being merged.
    Skipped {
        /// Path to the skipped file.
        path: PathBuf,
        /// Why it was skipped.
        reason: SkipReason,
    },
}

/// Summary of a completed directory merge.
#[derive(Debug, Clone)]
pub struct MergeSummary {
    /// Path of the merged output.
    pub output: PathBuf,

    /// Input files in the order they were merged.
    pub merged_files: Vec<PathBuf>,

    /// Number of candidates skipped for lack of page labels.
    pub files_skipped: usize,

    /// Pages in the merged output.
    pub total_pages: usize,

    /// Statistics of the output write.
    pub write: WriteStatistics,
}

impl MergeSummary {
    /// Number of documents merged.
    pub fn files_merged(&self) -> usize {
        self.merged_files.len()
    }
}

/// Result of merging one directory.
#[derive(Debug, Clone)]
pub enum DirectoryOutcome {
    /// An output file was written.
    Merged(MergeSummary),
    /// No candidate carried page labels; nothing was written.
    NothingToMerge {
        /// Number of candidates skipped for lack of page labels.
        files_skipped: usize,
    },
}

/// Merges the PDFs of one book directory.
#[derive(Debug, Clone)]
pub struct DirectoryMerger {
    config: Config,
    reader: PdfReader,
    writer: PdfWriter,
}

impl DirectoryMerger {
    /// Create a merger using `config`'s extension and output naming.
    pub fn new(config: &Config) -> Self {
        Self {
            config: config.clone(),
            reader: PdfReader::new(),
            writer: PdfWriter::new(),
        }
    }

    /// Candidate input files of `dir`, sorted by name.
    ///
    /// Regular files directly inside `dir` ending with the configured
    /// extension, minus the merged output itself.
    pub fn candidates(&self, dir: &Path, output_base: &str) -> Result<Vec<PathBuf>> {
        let output_name = self.config.output_file_name(output_base);

        Ok(walker::files(dir)?
            .into_iter()
            .filter(|path| {
                path.file_name().is_some_and(|name| {
                    let name = name.to_string_lossy();
                    self.config.is_candidate(&name) && name != output_name
                })
            })
            .collect())
    }

    /// Load one candidate and decide whether it takes part in the merge.
    ///
    /// The document is decrypted and stripped of protection before its
    /// labels are read. A document without page labels is released here.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be loaded, cannot be opened with
    /// the empty password, has a broken label tree, or has a first-page label
    /// that is not numeric.
    pub async fn admit(&self, path: &Path) -> Result<Admission> {
        let mut pdf = self.reader.load(path).await?;
        let protection = unlock(&mut pdf)?;
        debug!(file = %pdf.file_name(), pages = pdf.page_count, ?protection, "loaded");

        match first_page_label(&pdf)? {
            Some(label) => Ok(Admission::Accepted(LabeledPdf::new(pdf, label)?)),
            None => Ok(Admission::Skipped {
                path: pdf.path.clone(),
                reason: SkipReason::NoPageLabels,
            }),
        }
    }

    /// Merge the labelled PDFs of `dir` into `<dir>/<output_base>_MERGED.pdf`.
    ///
    /// # Errors
    ///
    /// Any load, decryption, label or write failure aborts this directory.
    /// Documents already loaded are released and no output file is left
    /// behind.
    pub async fn merge_directory(&self, dir: &Path, output_base: &str) -> Result<DirectoryOutcome> {
        let output = dir.join(self.config.output_file_name(output_base));
        let candidates = self.candidates(dir, output_base)?;

        if candidates.is_empty() {
            warn!(dir = %dir.display(), "no candidate files, nothing to merge");
            return Ok(DirectoryOutcome::NothingToMerge { files_skipped: 0 });
        }

        let mut accepted = Vec::with_capacity(candidates.len());
        let mut files_skipped = 0;

        for path in &candidates {
            match self.admit(path).await? {
                Admission::Accepted(labeled) => accepted.push(labeled),
                Admission::Skipped { path, reason } => {
                    warn!(file = %path.display(), %reason, "skipping file");
                    files_skipped += 1;
                }
            }
        }

        if accepted.is_empty() {
            warn!(
                dir = %dir.display(),
                files_skipped,
                "all files skipped, nothing to merge"
            );
            return Ok(DirectoryOutcome::NothingToMerge { files_skipped });
        }

        sort_by_page_label(&mut accepted);

        let mut merged = pages::new_output_document();
        let mut merged_files = Vec::with_capacity(accepted.len());
        let mut total_pages = 0;

        for labeled in accepted {
            debug!(
                file = %labeled.pdf.file_name(),
                label = %labeled.label,
                key = labeled.key,
                "appending"
            );
            merged_files.push(labeled.pdf.path);
            total_pages += pages::append_document(&mut merged, labeled.pdf.document)?;
        }

        pages::finalize(&mut merged);
        let write = self.writer.save(merged, &output).await?;

        info!(
            output = %output.display(),
            files = merged_files.len(),
            pages = total_pages,
            size = %write.format_file_size(),
            "merge complete"
        );

        Ok(DirectoryOutcome::Merged(MergeSummary {
            output,
            merged_files,
            files_skipped,
            total_pages,
            write,
        }))
    }
}
