//! A merged output file marks its book as done.

use crate::common::{Library, labeled, save};

#[tokio::test]
async fn test_second_run_leaves_output_untouched() {
    let library = Library::new();
    let book = library.book("Repeat");
    save(&book, "a.pdf", labeled("1"));
    save(&book, "b.pdf", labeled("2"));

    let first = library.run().await;
    assert_eq!(first.merged.len(), 1);

    let output = library.merged_path("Repeat");
    let before = std::fs::read(&output).unwrap();

    // Nothing in a completed book may be loaded again.
    std::fs::write(book.join("late.pdf"), b"garbage").unwrap();

    let second = library.run().await;

    assert!(second.merged.is_empty());
    assert_eq!(second.already_merged, [book]);
    assert!(!second.has_failures());
    assert_eq!(std::fs::read(&output).unwrap(), before);
}
