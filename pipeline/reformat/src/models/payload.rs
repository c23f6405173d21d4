//! Wire-side models: the invocation input and its decoded payload.

use serde::{Deserialize, Serialize};
use serde_json::Number;

/// One inbound telemetry event as delivered by the transport.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Event {
    /// Opaque serialized payload text.
    #[serde(rename = "eventData")]
    pub event_data: String,
}

/// Event timestamp, passed through to the ledger without interpretation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Timestamp {
    Number(Number),
    Text(String),
}

/// Required fields of a `"temp"` reading.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TempFields {
    pub ts: Timestamp,
    #[serde(rename = "tempF")]
    pub temp_f: f64,
}

/// Required fields of an `"imu"` reading.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ImuFields {
    pub ts: Timestamp,
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

/// Decoded payload, validated against the known reading shapes.
///
/// Any payload whose `type` discriminant is not a known reading lands in
/// `Unrecognized` instead of failing, so payload kinds written by other
/// producers pass through the pipeline as clean no-ops.
#[derive(Debug, Clone, PartialEq)]
pub enum ParsedPayload {
    Temp(TempFields),
    Imu(ImuFields),
    Unrecognized { reading_type: Option<String> },
}
