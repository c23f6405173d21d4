pub mod error;
pub mod handler;
pub mod models;
pub mod normalizer;
pub mod parser;

pub use error::ReformatError;
pub use handler::{EventHandler, Outcome};
pub use models::payload::{Event, ParsedPayload, Timestamp};
pub use models::record::{CanonicalRecord, ImuRecord, TempRecord};
pub use normalizer::Normalized;
