//! PDF reading and loading operations.
//!
//! Documents are parsed on tokio's blocking pool so the runtime stays free,
//! but callers await each load before starting the next: a book directory is
//! always read one file at a time.
//!
//! # Examples
//!
//! ```no_run
//! use labelcat::io::reader::PdfReader;
//! use std::path::Path;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let reader = PdfReader::new();
//! let loaded = reader.load(Path::new("chapter-01.pdf")).await?;
//! println!("{} has {} pages", loaded.file_name(), loaded.page_count);
//! # Ok(())
//! # }
//! ```

use lopdf::Document;
use std::path::{Path, PathBuf};
use tokio::task;

use crate::error::{LabelCatError, Result};

/// A loaded PDF document bound to the file it came from.
///
/// The document is owned exclusively by whoever holds the `LoadedPdf`;
/// dropping it releases the parsed objects.
#[derive(Debug)]
pub struct LoadedPdf {
    /// The PDF document.
    pub document: Document,

    /// Path to the source file.
    pub path: PathBuf,

    /// Number of pages in the document.
    pub page_count: usize,
}

impl LoadedPdf {
    /// Wrap an already parsed document.
    pub fn new(document: Document, path: PathBuf) -> Self {
        let page_count = document.get_pages().len();
        Self {
            document,
            path,
            page_count,
        }
    }

    /// File name of the source, for logs and tie-breaking.
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.path.display().to_string())
    }
}

/// PDF reader.
#[derive(Debug, Clone, Default)]
pub struct PdfReader;

impl PdfReader {
    /// Create a new PDF reader.
    pub fn new() -> Self {
        Self
    }

    /// Load a single PDF document.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - File cannot be read
    /// - File is not a valid PDF container
    /// - The library refuses to open an encrypted document
    pub async fn load(&self, path: &Path) -> Result<LoadedPdf> {
        let path_buf = path.to_path_buf();

        let document = task::spawn_blocking({
            let path_buf = path_buf.clone();
            move || Document::load(&path_buf)
        })
        .await
        .map_err(|e| LabelCatError::other(format!("Load task failed: {e}")))?
        .map_err(|e| {
            let err_msg = e.to_string();
            let lowered = err_msg.to_lowercase();
            if lowered.contains("encrypt")
                || lowered.contains("password")
                || lowered.contains("decrypt")
            {
                LabelCatError::password_required(path_buf.clone())
            } else {
                LabelCatError::failed_to_load_pdf(path_buf.clone(), err_msg)
            }
        })?;

        Ok(LoadedPdf::new(document, path_buf))
    }
}
