//! Encryption handling for input documents.
//!
//! Inputs are opened with the empty password only. Once a document is
//! decrypted its `/Encrypt` entry is dropped from the trailer, so none of
//! the source security settings leak into the merged output.

use lopdf::Object;
use tracing::debug;

use crate::error::{LabelCatError, Result};
use crate::io::LoadedPdf;

/// What [`unlock`] had to do to a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Protection {
    /// The document was never encrypted.
    Unprotected,
    /// The document was decrypted with the empty password and its security
    /// handler removed.
    Removed,
}

/// Decrypt `pdf` with the empty password and strip its protection.
///
/// Decryption always happens before protection is stripped; both happen
/// before any page labels are read or pages appended.
///
/// # Errors
///
/// Returns [`LabelCatError::PasswordRequired`] if the document is encrypted
/// and the empty password does not open it.
pub fn unlock(pdf: &mut LoadedPdf) -> Result<Protection> {
    if pdf.document.encryption_state.is_some() {
        // The loader opened it with the empty password; decrypting again
        // would garble every string.
        debug!(file = %pdf.file_name(), "already decrypted on load");
        strip_protection(pdf);
        return Ok(Protection::Removed);
    }

    if !pdf.document.is_encrypted() {
        return Ok(strip_protection(pdf));
    }

    debug!(file = %pdf.file_name(), "decrypting with empty password");

    pdf.document.decrypt("").map_err(|e| {
        debug!(file = %pdf.file_name(), error = %e, "decryption failed");
        LabelCatError::password_required(pdf.path.clone())
    })?;

    strip_protection(pdf);
    Ok(Protection::Removed)
}

/// Remove the trailer's security handler reference, if one is left.
fn strip_protection(pdf: &mut LoadedPdf) -> Protection {
    pdf.document.encryption_state = None;

    match pdf.document.trailer.remove(b"Encrypt") {
        Some(Object::Reference(id)) => {
            pdf.document.objects.remove(&id);
            Protection::Removed
        }
        Some(_) => Protection::Removed,
        None => Protection::Unprotected,
    }
}
