pub mod document;
pub mod port;

pub use document::{merge_into, Document};
pub use port::{Ledger, LedgerError};
