//! Error types for labelcat.
//!
//! Every error surfaced by the merge pipeline is fatal to the directory it
//! happened in and to nothing else. The batch orchestrator records the error,
//! logs the directory name, and moves on to the next directory.
//!
//! A document without page-label metadata is not an error at all: it is a
//! per-file skip, modelled by [`crate::merge::Admission`].
//!
//! # Error Categories
//!
//! - **Startup errors**: missing root, invalid configuration
//! - **PDF errors**: unreadable container, encryption, unparseable labels
//! - **Output errors**: the merged file could not be created or written

use std::io;
use std::num::ParseIntError;
use std::path::PathBuf;

/// Result type alias for labelcat operations.
pub type Result<T> = std::result::Result<T, LabelCatError>;

/// Main error type for labelcat operations.
#[derive(Debug, thiserror::Error)]
pub enum LabelCatError {
    /// The configured root directory does not exist.
    #[error("Root directory not found: {}", path.display())]
    RootNotFound {
        /// Configured root path.
        path: PathBuf,
    },

    /// A path expected to be a directory is something else.
    #[error("Not a directory: {}", path.display())]
    NotADirectory {
        /// Offending path.
        path: PathBuf,
    },

    /// The PDF container could not be parsed.
    #[error("Failed to load PDF: {}\n  Reason: {reason}", path.display())]
    FailedToLoadPdf {
        /// Path to the PDF file.
        path: PathBuf,
        /// Reason reported by the PDF library.
        reason: String,
    },

    /// The PDF loaded, but its structure is not usable.
    #[error("Corrupted or invalid PDF: {}\n  Details: {details}", path.display())]
    CorruptedPdf {
        /// Path to the PDF file.
        path: PathBuf,
        /// Details about the corruption.
        details: String,
    },

    /// The PDF is encrypted and the empty password does not open it.
    #[error(
        "PDF requires a password: {}\n  \
         Hint: only documents that open with an empty password can be merged",
        path.display()
    )]
    PasswordRequired {
        /// Path to the encrypted PDF.
        path: PathBuf,
    },

    /// The first-page label cannot be turned into a sort key.
    #[error("Page label '{label}' of {} is not numeric: {source}", path.display())]
    InvalidPageLabel {
        /// Path to the PDF carrying the label.
        path: PathBuf,
        /// The label as printed on the first page.
        label: String,
        /// Underlying integer parse failure.
        source: ParseIntError,
    },

    /// Page concatenation failed.
    #[error("Merge operation failed: {reason}")]
    MergeFailed {
        /// Description of what went wrong.
        reason: String,
    },

    /// The output file could not be created.
    #[error("Failed to create output file: {}\n  Reason: {source}", path.display())]
    FailedToCreateOutput {
        /// Path where output should be created.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// Writing the output file failed.
    #[error("Failed to write to output file: {}\n  Reason: {source}", path.display())]
    FailedToWrite {
        /// Path being written to.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// Invalid configuration.
    #[error("Invalid configuration: {message}")]
    InvalidConfig {
        /// Description of what's wrong with the configuration.
        message: String,
    },

    /// Generic I/O error.
    #[error("I/O error: {source}")]
    Io {
        /// Underlying I/O error.
        #[from]
        source: io::Error,
    },

    /// Generic error with a custom message.
    #[error("{message}")]
    Other {
        /// Error message.
        message: String,
    },
}

impl LabelCatError {
    /// Create a RootNotFound error.
    pub fn root_not_found(path: PathBuf) -> Self {
        Self::RootNotFound { path }
    }

    /// Create a NotADirectory error.
    pub fn not_a_directory(path: PathBuf) -> Self {
        Self::NotADirectory { path }
    }

    /// Create a FailedToLoadPdf error.
    pub fn failed_to_load_pdf(path: PathBuf, reason: impl Into<String>) -> Self {
        Self::FailedToLoadPdf {
            path,
            reason: reason.into(),
        }
    }

    /// Create a CorruptedPdf error.
    pub fn corrupted_pdf(path: PathBuf, details: impl Into<String>) -> Self {
        Self::CorruptedPdf {
            path,
            details: details.into(),
        }
    }

    /// Create a PasswordRequired error.
    pub fn password_required(path: PathBuf) -> Self {
        Self::PasswordRequired { path }
    }

    /// Create an InvalidPageLabel error.
    pub fn invalid_page_label(
        path: PathBuf,
        label: impl Into<String>,
        source: ParseIntError,
    ) -> Self {
        Self::InvalidPageLabel {
            path,
            label: label.into(),
            source,
        }
    }

    /// Create a MergeFailed error.
    pub fn merge_failed(reason: impl Into<String>) -> Self {
        Self::MergeFailed {
            reason: reason.into(),
        }
    }

    /// Create an InvalidConfig error.
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }

    /// Create an Other error with a custom message.
    pub fn other(message: impl Into<String>) -> Self {
        Self::Other {
            message: message.into(),
        }
    }

    /// Get the process exit code for this error.
    ///
    /// Only errors that stop the whole run reach `main`; per-directory
    /// failures are reported through [`crate::batch::BatchReport`].
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::RootNotFound { .. } | Self::NotADirectory { .. } => 2,
            _ => 1,
        }
    }
}
