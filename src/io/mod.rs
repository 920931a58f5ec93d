//! PDF input and output.
//!
//! Thin wrappers over `lopdf` exposing exactly what the merge pipeline
//! needs from a PDF library: load a document, open its encryption with the
//! empty password, and write the merged result safely.

pub mod reader;
pub mod security;
pub mod writer;

pub use reader::{LoadedPdf, PdfReader};
pub use security::{Protection, unlock};
pub use writer::{PdfWriter, WriteStatistics};
