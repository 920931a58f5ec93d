//! PDF writing and saving operations.
//!
//! The merged document is written to a temporary sibling file first and
//! renamed into place only after a complete, flushed write. Since the
//! presence of `<dir>_MERGED.pdf` marks a book directory as done, a
//! truncated file under that name must never exist.
//!
//! # Examples
//!
//! ```no_run
//! use labelcat::io::writer::PdfWriter;
//! use lopdf::Document;
//! use std::path::Path;
//!
//! # async fn example(doc: Document) -> Result<(), Box<dyn std::error::Error>> {
//! let writer = PdfWriter::new();
//! let stats = writer.save(doc, Path::new("Porto/Porto_MERGED.pdf")).await?;
//! println!("Wrote {}", stats.format_file_size());
//! # Ok(())
//! # }
//! ```

use lopdf::Document;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};
use tokio::task;

use crate::error::{LabelCatError, Result};

/// Buffer size for writing (in bytes).
const BUFFER_SIZE: usize = 8192;

/// Statistics about a write operation.
#[derive(Debug, Clone)]
pub struct WriteStatistics {
    /// Time taken to write the file.
    pub write_time: Duration,

    /// Size of the written file in bytes.
    pub file_size: u64,

    /// Path where the file was written.
    pub output_path: PathBuf,
}

impl WriteStatistics {
    /// Format file size as human-readable string.
    pub fn format_file_size(&self) -> String {
        format_file_size(self.file_size)
    }
}

/// PDF writer. Output is always compressed.
#[derive(Debug, Clone, Default)]
pub struct PdfWriter;

impl PdfWriter {
    /// Create a new PDF writer.
    pub fn new() -> Self {
        Self
    }

    /// Temporary path used while `path` is being written.
    pub fn temp_path_for(path: &Path) -> PathBuf {
        path.with_extension("tmp")
    }

    /// Save a PDF document to a file.
    ///
    /// The document is consumed: it is released once the write finishes,
    /// whether or not the write succeeded.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The temporary file cannot be created
    /// - Serialization or flushing fails
    /// - The temporary file cannot be renamed over `path`
    ///
    /// In every error case the temporary file has been removed and `path`
    /// has not been touched.
    pub async fn save(&self, doc: Document, path: &Path) -> Result<WriteStatistics> {
        let path_buf = path.to_path_buf();
        task::spawn_blocking(move || write_atomically(doc, path_buf))
            .await
            .map_err(|e| LabelCatError::other(format!("Write task failed: {e}")))?
    }
}

fn write_atomically(mut doc: Document, path: PathBuf) -> Result<WriteStatistics> {
    let start = Instant::now();
    let temp_path = PdfWriter::temp_path_for(&path);

    doc.compress();

    let result = write_to(&mut doc, &temp_path).and_then(|()| {
        std::fs::rename(&temp_path, &path).map_err(|e| LabelCatError::FailedToWrite {
            path: path.clone(),
            source: e,
        })
    });
    drop(doc);

    if let Err(err) = result {
        let _ = std::fs::remove_file(&temp_path);
        return Err(err);
    }

    let file_size = std::fs::metadata(&path).map(|m| m.len()).unwrap_or(0);

    Ok(WriteStatistics {
        write_time: start.elapsed(),
        file_size,
        output_path: path,
    })
}

fn write_to(doc: &mut Document, path: &Path) -> Result<()> {
    let file = std::fs::File::create(path).map_err(|e| LabelCatError::FailedToCreateOutput {
        path: path.to_path_buf(),
        source: e,
    })?;

    let mut writer = std::io::BufWriter::with_capacity(BUFFER_SIZE, file);

    doc.save_to(&mut writer)
        .map_err(|e| LabelCatError::FailedToWrite {
            path: path.to_path_buf(),
            source: std::io::Error::other(e),
        })?;

    writer.flush().map_err(|e| LabelCatError::FailedToWrite {
        path: path.to_path_buf(),
        source: e,
    })?;

    Ok(())
}

/// Format file size as human-readable string.
fn format_file_size(size: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    const GB: u64 = MB * 1024;

    if size >= GB {
        format!("{:.2} GB", size as f64 / GB as f64)
    } else if size >= MB {
        format!("{:.2} MB", size as f64 / MB as f64)
    } else if size >= KB {
        format!("{:.2} KB", size as f64 / KB as f64)
    } else {
        format!("{size} bytes")
    }
}
