//! Payload decoding: syntax first, then shape for recognized readings.

use serde_json::Value;

use crate::error::ReformatError;
use crate::models::payload::{ImuFields, ParsedPayload, TempFields};

/// Decodes one raw payload string.
///
/// Invalid JSON fails with `MalformedPayload` before any ledger access. A
/// recognized reading type whose required fields are missing or mistyped
/// fails with `IncompleteRecord`. Every other discriminant (unknown, absent,
/// or not a string) passes through as `Unrecognized` for the normalizer to
/// skip.
pub fn parse(raw: &str) -> Result<ParsedPayload, ReformatError> {
    let value: Value =
        serde_json::from_str(raw).map_err(|source| ReformatError::MalformedPayload {
            raw: raw.to_string(),
            source,
        })?;

    let reading_type = value
        .get("type")
        .and_then(Value::as_str)
        .map(str::to_string);

    match reading_type.as_deref() {
        Some("temp") => {
            let fields: TempFields = decode_fields("temp", value)?;
            Ok(ParsedPayload::Temp(fields))
        }
        Some("imu") => {
            let fields: ImuFields = decode_fields("imu", value)?;
            Ok(ParsedPayload::Imu(fields))
        }
        _ => Ok(ParsedPayload::Unrecognized { reading_type }),
    }
}

fn decode_fields<T: serde::de::DeserializeOwned>(
    reading_type: &str,
    value: Value,
) -> Result<T, ReformatError> {
    serde_json::from_value(value).map_err(|source| ReformatError::IncompleteRecord {
        reading_type: reading_type.to_string(),
        source,
    })
}
