//! Merge order follows the first-page labels.

use crate::common::{Library, labeled, page_texts, save};

#[tokio::test]
async fn test_hyphenated_labels_sort_numerically() {
    let library = Library::new();
    let book = library.book("Atlas");
    save(&book, "a.pdf", labeled("3"));
    save(&book, "b.pdf", labeled("1-2"));
    save(&book, "c.pdf", labeled("10"));

    let report = library.run().await;

    assert_eq!(report.merged.len(), 1);
    let summary = &report.merged[0];
    assert_eq!(summary.output, library.merged_path("Atlas"));
    assert_eq!(
        summary.merged_files,
        [book.join("b.pdf"), book.join("a.pdf"), book.join("c.pdf")]
    );
    assert_eq!(page_texts(&summary.output), ["1-2", "3", "10"]);
}

#[tokio::test]
async fn test_equal_labels_keep_file_name_order() {
    let library = Library::new();
    let book = library.book("Twins");
    save(&book, "second.pdf", labeled("5"));
    save(&book, "first.pdf", labeled("5-6"));

    let report = library.run().await;

    assert_eq!(
        report.merged[0].merged_files,
        [book.join("first.pdf"), book.join("second.pdf")]
    );
}

#[tokio::test]
async fn test_single_document_book() {
    let library = Library::new();
    let book = library.book("Solo");
    save(&book, "only.pdf", labeled("42"));

    let report = library.run().await;

    assert_eq!(report.merged.len(), 1);
    assert_eq!(report.merged[0].total_pages, 1);
    assert_eq!(page_texts(&library.merged_path("Solo")), ["42"]);
}
