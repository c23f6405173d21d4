//! Pure dispatch from decoded payloads to canonical records.

use crate::models::payload::ParsedPayload;
use crate::models::record::{CanonicalRecord, ImuRecord, TempRecord};

/// Result of normalization: a canonical record, or a recognized no-op.
#[derive(Debug, Clone, PartialEq)]
pub enum Normalized {
    Record(CanonicalRecord),
    /// Not an error: the reading type has no canonical form here.
    Skip { reading_type: Option<String> },
}

/// Builds the canonical record for a decoded payload. No I/O, no side
/// effects.
pub fn normalize(payload: ParsedPayload) -> Normalized {
    match payload {
        ParsedPayload::Temp(f) => Normalized::Record(CanonicalRecord::Temp(TempRecord {
            ts: f.ts,
            temp_f: f.temp_f,
        })),
        ParsedPayload::Imu(f) => Normalized::Record(CanonicalRecord::Imu(ImuRecord {
            ts: f.ts,
            x: f.x,
            y: f.y,
            z: f.z,
        })),
        ParsedPayload::Unrecognized { reading_type } => Normalized::Skip { reading_type },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::payload::{ImuFields, TempFields, Timestamp};

    #[test]
    fn test_temp_maps_to_canonical_record() {
        let normalized = normalize(ParsedPayload::Temp(TempFields {
            ts: Timestamp::Number(1690000000.into()),
            temp_f: 72.5,
        }));

        assert_eq!(
            normalized,
            Normalized::Record(CanonicalRecord::Temp(TempRecord {
                ts: Timestamp::Number(1690000000.into()),
                temp_f: 72.5,
            }))
        );
    }

    #[test]
    fn test_imu_maps_to_canonical_record() {
        let normalized = normalize(ParsedPayload::Imu(ImuFields {
            ts: Timestamp::Number(1690000001.into()),
            x: 0.1,
            y: 0.2,
            z: 9.8,
        }));

        match normalized {
            Normalized::Record(record) => assert_eq!(record.ledger_key(), "imu"),
            other => panic!("expected record, got {other:?}"),
        }
    }

    #[test]
    fn test_unrecognized_skips_and_keeps_type() {
        let normalized = normalize(ParsedPayload::Unrecognized {
            reading_type: Some("humidity".to_string()),
        });

        assert_eq!(
            normalized,
            Normalized::Skip {
                reading_type: Some("humidity".to_string())
            }
        );
    }
}
