//! Documents and paths that are left out without failing anything.

use crate::common::{Library, labeled, page_texts, save, unlabeled};

#[tokio::test]
async fn test_unlabeled_documents_are_left_out() {
    let library = Library::new();
    let book = library.book("Mixed");
    save(&book, "labeled.pdf", labeled("1"));
    save(&book, "plain.pdf", unlabeled("plain"));

    let report = library.run().await;

    assert!(!report.has_failures());
    assert_eq!(report.merged[0].files_skipped, 1);
    assert_eq!(page_texts(&library.merged_path("Mixed")), ["1"]);
}

#[tokio::test]
async fn test_book_without_labels_writes_nothing() {
    let library = Library::new();
    let book = library.book("Blank");
    save(&book, "one.pdf", unlabeled("one"));
    save(&book, "two.pdf", unlabeled("two"));

    let report = library.run().await;

    assert_eq!(report.nothing_to_merge, [book]);
    assert!(report.merged.is_empty());
    assert!(!library.merged_path("Blank").exists());
    assert_eq!(report.exit_code(), 0);
}

#[tokio::test]
async fn test_non_matching_files_are_ignored() {
    let library = Library::new();
    let book = library.book("Notes");
    save(&book, "part.pdf", labeled("1"));
    std::fs::write(book.join("readme.txt"), b"not a pdf").unwrap();
    std::fs::write(book.join("scan.PDF"), b"not a pdf either").unwrap();
    std::fs::create_dir(book.join("extra")).unwrap();
    save(&book.join("extra"), "nested.pdf", labeled("0"));

    let report = library.run().await;

    assert!(!report.has_failures());
    assert_eq!(report.merged[0].merged_files, [book.join("part.pdf")]);
}

#[tokio::test]
async fn test_files_at_root_are_ignored() {
    let library = Library::new();
    save(library.root(), "stray.pdf", labeled("1"));
    std::fs::write(library.root().join("broken.pdf"), b"garbage").unwrap();

    let report = library.run().await;

    assert_eq!(report.directories(), 0);
    assert!(!report.has_failures());
}
