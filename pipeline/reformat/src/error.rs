//! Error taxonomy for one pipeline invocation.

use thiserror::Error;

use abstractledger::LedgerError;

#[derive(Error, Debug)]
pub enum ReformatError {
    /// Payload is not valid JSON. Carries the raw text so the caller can log
    /// the offending input.
    #[error("malformed payload {raw:?}: {source}")]
    MalformedPayload {
        raw: String,
        #[source]
        source: serde_json::Error,
    },

    /// Recognized reading type with a missing or mistyped required field.
    /// Fatal: placeholder values are never written to the shared document.
    #[error("incomplete {reading_type} payload: {source}")]
    IncompleteRecord {
        reading_type: String,
        #[source]
        source: serde_json::Error,
    },

    /// The external store failed. Propagated untouched, never retried here.
    #[error(transparent)]
    LedgerUnavailable(#[from] LedgerError),
}
