//! Shared ledger document model.
//!
//! A document is a flat map from reading-type key to the last-known record
//! value for that key. Sibling keys may be owned by other producers, so a
//! merge only ever replaces the keys present in the incoming fragment.

use std::collections::BTreeMap;

use serde_json::Value;

/// One shared key-value document as held by the external store.
pub type Document = BTreeMap<String, Value>;

/// Applies `fragment` to `doc` with per-key shallow replacement: every key in
/// the fragment overwrites the whole value stored at that key, every other
/// key is left untouched. Applying the same fragment a second time changes
/// nothing.
pub fn merge_into(doc: &mut Document, fragment: &Document) {
    for (key, value) in fragment {
        doc.insert(key.clone(), value.clone());
    }
}
