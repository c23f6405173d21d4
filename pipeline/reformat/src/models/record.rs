//! Canonical per-type records, keyed in the shared document by reading type.

use serde::{Deserialize, Serialize};
use serde_json::json;

use abstractledger::Document;

use crate::models::payload::Timestamp;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TempRecord {
    pub ts: Timestamp,
    #[serde(rename = "tempF")]
    pub temp_f: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImuRecord {
    pub ts: Timestamp,
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

/// A record ready for a merge-write: exactly one populated reading-type key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum CanonicalRecord {
    #[serde(rename = "temp")]
    Temp(TempRecord),
    #[serde(rename = "imu")]
    Imu(ImuRecord),
}

impl CanonicalRecord {
    /// The document key this record is merged under.
    pub fn ledger_key(&self) -> &'static str {
        match self {
            CanonicalRecord::Temp(_) => "temp",
            CanonicalRecord::Imu(_) => "imu",
        }
    }

    /// Converts into the one-key fragment handed to the store.
    pub fn into_fragment(self) -> Document {
        let value = match &self {
            CanonicalRecord::Temp(r) => json!({ "ts": r.ts, "tempF": r.temp_f }),
            CanonicalRecord::Imu(r) => json!({ "ts": r.ts, "x": r.x, "y": r.y, "z": r.z }),
        };
        Document::from([(self.ledger_key().to_string(), value)])
    }
}
