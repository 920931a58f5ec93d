//! Merging the PDFs of a book directory.
//!
//! - [`merger`]: candidate selection, admission and the merge loop
//! - [`pages`]: page concatenation onto the output document

pub mod merger;
pub mod pages;

pub use merger::{Admission, DirectoryMerger, DirectoryOutcome, MergeSummary, SkipReason};
