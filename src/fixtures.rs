//! In-memory PDF builders shared by the unit tests.

use lopdf::{
    Document, EncryptionState, EncryptionVersion, Object, ObjectId, Permissions, Stream, dictionary,
};
use std::path::{Path, PathBuf};

/// Build a document whose pages show `texts`, one page per entry.
pub(crate) fn build_document_with_texts(texts: &[&str], page_labels: Option<Object>) -> Document {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();

    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica",
    });
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! { "F1" => font_id },
    });

    let mut kids: Vec<Object> = Vec::new();
    for text in texts {
        let content = format!("BT /F1 24 Tf 72 720 Td ({text}) Tj ET");
        let content_id = doc.add_object(Stream::new(dictionary! {}, content.into_bytes()));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
        });
        kids.push(page_id.into());
    }

    doc.objects.insert(
        pages_id,
        dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => texts.len() as i64,
            "Resources" => resources_id,
            "MediaBox" => vec![0.into(), 0.into(), 595.into(), 842.into()],
        }
        .into(),
    );

    let mut catalog = dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    };
    if let Some(labels) = page_labels {
        catalog.set("PageLabels", labels);
    }
    let catalog_id = doc.add_object(catalog);
    doc.trailer.set("Root", catalog_id);

    doc
}

/// Build a document with `pages` pages showing "Page 1", "Page 2", ...
pub(crate) fn build_document(pages: usize, page_labels: Option<Object>) -> Document {
    let texts: Vec<String> = (1..=pages).map(|n| format!("Page {n}")).collect();
    let texts: Vec<&str> = texts.iter().map(String::as_str).collect();
    build_document_with_texts(&texts, page_labels)
}

/// Label tree whose first page is labelled with exactly `prefix`.
pub(crate) fn prefix_labels(prefix: &str) -> Object {
    dictionary! {
        "Nums" => vec![0.into(), dictionary! { "P" => Object::string_literal(prefix) }.into()],
    }
    .into()
}

/// Label tree numbering pages in decimal from `start`.
pub(crate) fn decimal_labels(start: i64) -> Object {
    dictionary! {
        "Nums" => vec![0.into(), dictionary! { "S" => "D", "St" => start }.into()],
    }
    .into()
}

/// Encrypt `doc` with RC4 128-bit under `user_password`.
pub(crate) fn encrypt(doc: &mut Document, user_password: &str) {
    doc.trailer.set(
        "ID",
        vec![
            Object::string_literal(vec![0x11u8; 16]),
            Object::string_literal(vec![0x22u8; 16]),
        ],
    );
    let version = EncryptionVersion::V2 {
        document: doc,
        owner_password: "owner",
        user_password,
        key_length: 128,
        permissions: Permissions::all(),
    };
    let state = EncryptionState::try_from(version).unwrap();
    doc.encrypt(&state).unwrap();
}

/// Save `doc` as `dir/name`.
pub(crate) fn write_pdf(dir: &Path, name: &str, doc: &mut Document) -> PathBuf {
    let path = dir.join(name);
    doc.save(&path).unwrap();
    path
}

/// Text between the parentheses of a page's content stream.
pub(crate) fn page_text(doc: &Document, page_id: ObjectId) -> String {
    let content = doc.get_page_content(page_id).unwrap();
    let content = String::from_utf8_lossy(&content);
    let start = content.find('(').unwrap() + 1;
    let end = content.rfind(')').unwrap();
    content[start..end].to_string()
}
