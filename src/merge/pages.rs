//! Page tree manipulation for the merged output.
//!
//! The output starts as an empty document (catalog plus an empty page tree)
//! and grows one source document at a time. Source objects are renumbered
//! past the output's highest id, every page is re-parented directly under
//! the output's root `Pages` node, and the source catalog is discarded.

use lopdf::{Dictionary, Document, Object, ObjectId, dictionary};

use crate::error::{LabelCatError, Result};

/// Page attributes a page may inherit from its ancestors in the page tree.
const INHERITABLE_ATTRIBUTES: [&[u8]; 4] = [b"Resources", b"MediaBox", b"CropBox", b"Rotate"];

/// PDF version of a freshly created output document.
const OUTPUT_VERSION: &str = "1.4";

/// Create an empty output document with a catalog and an empty page tree.
pub fn new_output_document() -> Document {
    let mut doc = Document::with_version(OUTPUT_VERSION);

    let pages_id = doc.new_object_id();
    doc.objects.insert(
        pages_id,
        dictionary! {
            "Type" => "Pages",
            "Kids" => Vec::<Object>::new(),
            "Count" => 0,
        }
        .into(),
    );

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    doc
}

/// Append every page of `source`, in page order, to the end of `target`.
///
/// `source` is consumed; whatever the output does not reference is dropped
/// with it or pruned when the output is finalized.
///
/// # Errors
///
/// Returns an error if either document's page tree is malformed.
///
/// Returns the number of pages appended.
pub fn append_document(target: &mut Document, mut source: Document) -> Result<usize> {
    let target_pages_id = pages_root(target)?;

    source.renumber_objects_with(target.max_id + 1);

    let source_catalog_id = source
        .trailer
        .get(b"Root")
        .and_then(Object::as_reference)
        .map_err(|e| LabelCatError::merge_failed(format!("Source has no catalog: {e}")))?;

    let page_ids: Vec<ObjectId> = source.get_pages().into_values().collect();

    for &page_id in &page_ids {
        let inherited = inherited_attributes(&source, page_id);
        let page = source
            .get_dictionary_mut(page_id)
            .map_err(|e| LabelCatError::merge_failed(format!("Failed to get page object: {e}")))?;

        for (key, value) in inherited {
            page.set(key, value);
        }
        page.set("Parent", target_pages_id);
    }

    source.objects.remove(&source_catalog_id);

    if source.version > target.version {
        target.version = source.version.clone();
    }

    target.max_id = target.max_id.max(source.max_id);
    target.objects.extend(source.objects);

    add_pages_to_tree(target, target_pages_id, &page_ids)?;

    Ok(page_ids.len())
}

/// Drop objects no page references any more and renumber the rest.
pub fn finalize(doc: &mut Document) {
    doc.prune_objects();
    doc.renumber_objects();
}

/// Object id of the document's root `Pages` node.
fn pages_root(doc: &Document) -> Result<ObjectId> {
    doc.catalog()
        .and_then(|catalog| catalog.get(b"Pages"))
        .and_then(Object::as_reference)
        .map_err(|e| LabelCatError::merge_failed(format!("Failed to get pages reference: {e}")))
}

/// Inheritable attributes the page lacks but one of its ancestors defines.
fn inherited_attributes(doc: &Document, page_id: ObjectId) -> Vec<(Vec<u8>, Object)> {
    let Ok(page) = doc.get_dictionary(page_id) else {
        return Vec::new();
    };

    let mut found: Vec<(Vec<u8>, Object)> = Vec::new();
    let mut parent = parent_of(page);
    let mut hops = 0;

    while let Some(parent_id) = parent {
        // Cycles in Parent chains exist in the wild.
        hops += 1;
        if hops > 64 {
            break;
        }

        let Ok(node) = doc.get_dictionary(parent_id) else {
            break;
        };

        for key in INHERITABLE_ATTRIBUTES {
            let already = page.has(key) || found.iter().any(|(k, _)| k.as_slice() == key);
            if !already && let Ok(value) = node.get(key) {
                found.push((key.to_vec(), value.clone()));
            }
        }

        parent = parent_of(node);
    }

    found
}

fn parent_of(node: &Dictionary) -> Option<ObjectId> {
    node.get(b"Parent").and_then(Object::as_reference).ok()
}

/// Add pages to the end of the page tree rooted at `pages_id`.
fn add_pages_to_tree(doc: &mut Document, pages_id: ObjectId, page_ids: &[ObjectId]) -> Result<()> {
    let pages_dict = doc
        .get_object_mut(pages_id)
        .map_err(|e| LabelCatError::merge_failed(format!("Failed to get pages object: {e}")))?;

    let Object::Dictionary(dict) = pages_dict else {
        return Err(LabelCatError::merge_failed("Pages object is not a dictionary"));
    };

    let kids = dict
        .get_mut(b"Kids")
        .map_err(|_| LabelCatError::merge_failed("Pages dictionary missing Kids array"))?;

    let Object::Array(kids_array) = kids else {
        return Err(LabelCatError::merge_failed("Kids is not an array"));
    };

    kids_array.extend(page_ids.iter().map(|&id| Object::Reference(id)));

    let current_count = dict.get(b"Count").and_then(Object::as_i64).unwrap_or(0);
    dict.set("Count", Object::Integer(current_count + page_ids.len() as i64));

    Ok(())
}
