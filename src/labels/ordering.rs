//! Ordering of documents by their first-page label.
//!
//! A label is coerced to an integer sort key: a range label such as `12-14`
//! sorts by its first number, anything else must be an integer on its own.
//! Front-matter labels (`iv`) are not coerced; they fail the directory.

use std::cmp::Ordering;
use std::num::ParseIntError;
use tracing::debug;

use crate::error::{LabelCatError, Result};
use crate::io::LoadedPdf;

/// Coerce a page label to its integer sort key.
///
/// If the label has a hyphen after its first character, the text before the
/// first hyphen is parsed; otherwise the whole label is parsed. No trimming
/// is done.
///
/// # Examples
///
/// ```
/// use labelcat::labels::coerce_to_integer;
///
/// assert_eq!(coerce_to_integer("12-14").unwrap(), 12);
/// assert_eq!(coerce_to_integer("7").unwrap(), 7);
/// assert!(coerce_to_integer("iv").is_err());
/// ```
pub fn coerce_to_integer(label: &str) -> std::result::Result<i64, ParseIntError> {
    debug!(label, "coercing page label");

    let digits = match label.find('-') {
        Some(index) if index > 0 => &label[..index],
        _ => label,
    };
    let key = digits.parse::<i64>()?;

    debug!(label, key, "coerced page label");
    Ok(key)
}

/// A loaded document admitted for merging, with its label and sort key.
#[derive(Debug)]
pub struct LabeledPdf {
    /// The loaded, unlocked document.
    pub pdf: LoadedPdf,

    /// Label of the document's first page.
    pub label: String,

    /// Integer sort key derived from `label`.
    pub key: i64,
}

impl LabeledPdf {
    /// Attach `label` to `pdf`, computing its sort key.
    ///
    /// # Errors
    ///
    /// Returns [`LabelCatError::InvalidPageLabel`] if the label does not
    /// coerce to an integer. The document is dropped with the error.
    pub fn new(pdf: LoadedPdf, label: String) -> Result<Self> {
        let key = coerce_to_integer(&label)
            .map_err(|e| LabelCatError::invalid_page_label(pdf.path.clone(), label.clone(), e))?;

        Ok(Self { pdf, label, key })
    }

    /// Merge order: ascending key, then file name, then full path.
    pub fn merge_order(&self, other: &Self) -> Ordering {
        self.key
            .cmp(&other.key)
            .then_with(|| self.pdf.file_name().cmp(&other.pdf.file_name()))
            .then_with(|| self.pdf.path.cmp(&other.pdf.path))
    }
}

/// Sort admitted documents into merge order.
pub fn sort_by_page_label(documents: &mut [LabeledPdf]) {
    documents.sort_by(LabeledPdf::merge_order);
}
