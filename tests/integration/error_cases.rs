//! Failures stay inside the book directory they happen in.

use labelcat::error::LabelCatError;

use lopdf::dictionary;

use crate::common::{Library, encrypted, labeled, one_page, page_texts, save};

#[tokio::test]
async fn test_roman_label_fails_only_its_book() {
    let library = Library::new();
    let bad = library.book("Preface");
    save(&bad, "intro.pdf", labeled("iv"));
    save(&bad, "body.pdf", labeled("1"));
    let good = library.book("Sequel");
    save(&good, "part.pdf", labeled("1"));

    let report = library.run().await;

    assert_eq!(report.failed.len(), 1);
    assert_eq!(report.failed[0].name, "Preface");
    assert!(matches!(
        report.failed[0].error,
        LabelCatError::InvalidPageLabel { .. }
    ));
    assert!(!library.merged_path("Preface").exists());
    assert!(library.merged_path("Sequel").exists());
    assert_eq!(report.exit_code(), 1);
}

#[tokio::test]
async fn test_lone_unparseable_label_fails_its_book() {
    let library = Library::new();
    let book = library.book("Lone");
    save(&book, "only.pdf", labeled("A-1"));

    let report = library.run().await;

    assert_eq!(report.failed.len(), 1);
    assert!(!library.merged_path("Lone").exists());
}

#[tokio::test]
async fn test_malformed_pdf_fails_its_book() {
    let library = Library::new();
    let book = library.book("Damaged");
    save(&book, "good.pdf", labeled("1"));
    std::fs::write(book.join("bad.pdf"), b"%PDF-1.7\nthis is not a pdf").unwrap();

    let report = library.run().await;

    assert_eq!(report.failed.len(), 1);
    assert!(matches!(
        report.failed[0].error,
        LabelCatError::FailedToLoadPdf { .. }
    ));
    assert!(!library.merged_path("Damaged").exists());
    assert!(!book.join("Damaged_MERGED.tmp").exists());
}

#[tokio::test]
async fn test_user_password_fails_only_its_book() {
    let library = Library::new();
    let locked = library.book("Locked");
    save(&locked, "open.pdf", labeled("1"));
    save(&locked, "locked.pdf", encrypted("2", "secret"));
    let other = library.book("Other");
    save(&other, "part.pdf", labeled("1"));

    let report = library.run().await;

    assert_eq!(report.failed.len(), 1);
    assert_eq!(report.failed[0].name, "Locked");
    assert!(matches!(
        report.failed[0].error,
        LabelCatError::PasswordRequired { .. }
    ));
    assert!(!library.merged_path("Locked").exists());
    assert!(library.merged_path("Other").exists());
}

#[tokio::test]
async fn test_empty_password_encryption_is_merged() {
    let library = Library::new();
    let book = library.book("Sealed");
    save(&book, "a.pdf", labeled("3"));
    save(&book, "b.pdf", encrypted("1-2", ""));
    save(&book, "c.pdf", encrypted("10", ""));

    let report = library.run().await;

    assert!(!report.has_failures());
    assert_eq!(report.merged.len(), 1);
    assert_eq!(page_texts(&library.merged_path("Sealed")), ["1-2", "3", "10"]);

    let merged = lopdf::Document::load(library.merged_path("Sealed")).unwrap();
    assert!(!merged.is_encrypted());
}

#[tokio::test]
async fn test_overflowing_label_tree_fails_only_its_book() {
    let library = Library::new();
    let bad = library.book("A_bad");
    let labels = dictionary! {
        "Nums" => vec![(-1).into(), dictionary! { "S" => "D", "St" => i64::MAX }.into()],
    };
    save(&bad, "x.pdf", one_page("x", Some(labels.into())));
    let good = library.book("B_good");
    save(&good, "y.pdf", labeled("1"));

    let report = library.run().await;

    assert_eq!(report.failed.len(), 1);
    assert_eq!(report.failed[0].name, "A_bad");
    assert!(matches!(
        report.failed[0].error,
        LabelCatError::CorruptedPdf { .. }
    ));
    assert!(library.merged_path("B_good").exists());
}
