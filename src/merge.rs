//! Shallow merging of parsed documents
//!
//! Only top-level keys are merged. When both sides hold a sub-document under the
//! same key, the incoming sub-document replaces the existing one wholesale.

use crate::domain::Document;

/// Overlay every top-level key of `source` onto `target`, returning `target`.
pub fn merge(target: &mut Document, source: Document) -> &mut Document {
    target.extend(source);
    target
}

/// Fold documents left to right into a new document; later documents win.
pub fn merge_all(documents: impl IntoIterator<Item = Document>) -> Document {
    let mut merged = Document::new();
    for doc in documents {
        merge(&mut merged, doc);
    }
    merged
}
