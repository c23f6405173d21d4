//! Per-event orchestration: parse, normalize, merge-write.

use tracing::debug;

use abstractledger::Ledger;

use crate::error::ReformatError;
use crate::models::payload::Event;
use crate::normalizer::{self, Normalized};
use crate::parser;

/// Terminal outcome of one successful invocation.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// The canonical fragment was merged under its reading-type key.
    MergeCommitted { key: &'static str },
    /// Recognized no-op: unrecognized reading type, nothing written.
    Skipped { reading_type: Option<String> },
}

/// Runs the pipeline against an injected ledger handle.
///
/// Holds no state between invocations; the only side effect is the single
/// merge-write on the committed path. The current document is never read
/// before merging, the merge is unconditional.
pub struct EventHandler<L> {
    ledger: L,
}

impl<L: Ledger> EventHandler<L> {
    pub fn new(ledger: L) -> Self {
        Self { ledger }
    }

    pub async fn handle(&self, event: &Event) -> Result<Outcome, ReformatError> {
        let payload = parser::parse(&event.event_data)?;

        let record = match normalizer::normalize(payload) {
            Normalized::Record(record) => record,
            Normalized::Skip { reading_type } => {
                debug!(
                    "skipping reading type {:?} for '{}'",
                    reading_type,
                    self.ledger.document_name()
                );
                return Ok(Outcome::Skipped { reading_type });
            }
        };

        let key = record.ledger_key();
        self.ledger.merge_write(record.into_fragment()).await?;
        debug!("merged '{key}' into '{}'", self.ledger.document_name());

        Ok(Outcome::MergeCommitted { key })
    }
}
