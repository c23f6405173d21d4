//! In-process ledger store.
//!
//! Holds every named document in one RwLock-guarded map. Handles are cheap
//! clones sharing the same state, so a test can write through one handle and
//! assert through another.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::trace;

use abstractledger::{merge_into, Document, Ledger, LedgerError};

#[derive(Clone, Default)]
pub struct MemoryLedger {
    docs: Arc<RwLock<HashMap<String, Document>>>,
}

impl MemoryLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Opens a handle to the named document. The document itself is created
    /// lazily on the first merge write.
    pub fn open(&self, name: &str) -> DocumentHandle {
        DocumentHandle {
            name: name.to_string(),
            docs: self.docs.clone(),
        }
    }
}

/// Per-document handle handed out by [`MemoryLedger::open`].
#[derive(Clone)]
pub struct DocumentHandle {
    name: String,
    docs: Arc<RwLock<HashMap<String, Document>>>,
}

#[async_trait]
impl Ledger for DocumentHandle {
    fn document_name(&self) -> &str {
        &self.name
    }

    async fn fetch_current(&self) -> Result<Document, LedgerError> {
        let guard = self.docs.read().await;
        Ok(guard.get(&self.name).cloned().unwrap_or_default())
    }

    async fn merge_write(&self, fragment: Document) -> Result<(), LedgerError> {
        let mut guard = self.docs.write().await;
        let doc = guard.entry(self.name.clone()).or_default();
        merge_into(doc, &fragment);
        trace!("{}: merged {} key(s)", self.name, fragment.len());
        Ok(())
    }
}
