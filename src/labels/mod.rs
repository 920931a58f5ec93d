//! Page labels: reading them from a document and ordering documents by them.

pub mod ordering;
pub mod tree;

pub use ordering::{LabeledPdf, coerce_to_integer, sort_by_page_label};
pub use tree::{LabelRange, NumberingStyle, PageLabels, first_page_label};
