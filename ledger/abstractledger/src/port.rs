//! Narrow interface to the externally owned ledger store.

use async_trait::async_trait;
use thiserror::Error;

use crate::document::Document;

#[derive(Error, Debug)]
pub enum LedgerError {
    /// The underlying store could not be reached or refused the operation.
    #[error("ledger unavailable: {0}")]
    Unavailable(String),
}

/// Handle to one named shared document.
///
/// Implementations own connectivity and conflict resolution between
/// producers; callers get a snapshot read and a per-key merge write and
/// nothing else. `merge_write` must be idempotent: applying the same fragment
/// twice in sequence yields the same document as applying it once.
#[async_trait]
pub trait Ledger: Send + Sync {
    /// Name of the shared document this handle is bound to.
    fn document_name(&self) -> &str;

    /// Read-only snapshot of the current document.
    async fn fetch_current(&self) -> Result<Document, LedgerError>;

    /// Replaces the values at the fragment's keys, leaving siblings untouched.
    async fn merge_write(&self, fragment: Document) -> Result<(), LedgerError>;
}
