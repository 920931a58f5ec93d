//! labelcat - Merge every book directory of PDFs into one document.
//!
//! Each immediate subdirectory of a root directory is treated as one book.
//! The PDFs directly inside it are merged into `<dir>/<dir name>_MERGED.pdf`,
//! ordered by the page label printed on each document's first page:
//!
//! - documents without page labels are skipped with a warning
//! - a label such as `"12-15"` sorts by the number before the hyphen
//! - a book that already has its merged file is left untouched
//! - a book that fails is logged and the run carries on
//!
//! # Examples
//!
//! ## Batch Run
//!
//! ```no_run
//! use labelcat::batch::BatchRunner;
//! use labelcat::config::Config;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let report = BatchRunner::new(&Config::new("/books")).run().await?;
//! println!("{} book(s) merged", report.merged.len());
//! # Ok(())
//! # }
//! ```
//!
//! ## Single Directory
//!
//! ```no_run
//! use labelcat::config::Config;
//! use labelcat::merge::{DirectoryMerger, DirectoryOutcome};
//! use std::path::Path;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let merger = DirectoryMerger::new(&Config::new("/books"));
//! match merger.merge_directory(Path::new("/books/Porto"), "Porto").await? {
//!     DirectoryOutcome::Merged(summary) => println!("{} pages", summary.total_pages),
//!     DirectoryOutcome::NothingToMerge { .. } => println!("nothing to merge"),
//! }
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod batch;
pub mod cli;
pub mod config;
pub mod error;
pub mod io;
pub mod labels;
pub mod merge;
pub mod walker;

#[cfg(test)]
pub(crate) mod fixtures;

// Re-export commonly used types
pub use batch::{BatchReport, BatchRunner};
pub use config::Config;
pub use error::{LabelCatError, Result};

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name.
pub const NAME: &str = env!("CARGO_PKG_NAME");
