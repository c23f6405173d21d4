pub mod store;

pub use store::{DocumentHandle, MemoryLedger};
