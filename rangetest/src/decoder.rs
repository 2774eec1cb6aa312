use crate::frame::Byte;
use crate::packets::telemetry::DecodedTelemetry;
use serde::ser::{Serialize, SerializeMap, Serializer};

/// Result of decoding one frame.
///
/// A frame shorter than [`FRAME_LEN`](crate::frame::FRAME_LEN) is not an
/// error. It decodes to [`Outcome::Empty`] and no field is populated.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Decoded(DecodedTelemetry),
    Empty,
}

impl Outcome {
    pub fn is_empty(&self) -> bool {
        matches!(self, Outcome::Empty)
    }

    pub fn telemetry(&self) -> Option<&DecodedTelemetry> {
        match self {
            Outcome::Decoded(telemetry) => Some(telemetry),
            Outcome::Empty => None,
        }
    }

    pub fn into_telemetry(self) -> Option<DecodedTelemetry> {
        match self {
            Outcome::Decoded(telemetry) => Some(telemetry),
            Outcome::Empty => None,
        }
    }
}

impl From<Option<DecodedTelemetry>> for Outcome {
    fn from(value: Option<DecodedTelemetry>) -> Self {
        match value {
            Some(telemetry) => Outcome::Decoded(telemetry),
            None => Outcome::Empty,
        }
    }
}

/// `Decoded` serializes as the telemetry object, `Empty` as `{}`.
impl Serialize for Outcome {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Outcome::Decoded(telemetry) => telemetry.serialize(serializer),
            Outcome::Empty => serializer.serialize_map(Some(0))?.end(),
        }
    }
}

/// Decodes one range-test frame.
///
/// Only bytes `0..11` are read; anything after them is ignored. Stateless, so
/// it can be called from any number of threads at once.
pub fn decode(frame: &[Byte]) -> Outcome {
    match DecodedTelemetry::try_from(frame) {
        Ok(telemetry) => {
            log::trace!("decoded frame #{}", telemetry.packet_counter);
            Outcome::Decoded(telemetry)
        }
        Err(err) => {
            log::trace!("{err}, nothing decoded");
            Outcome::Empty
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frame::FRAME_LEN;

    const CASE_A: [Byte; 11] = [
        0x00, 0x05, 0xC8, 0x80, 0x07, 0x00, 0x39, 0x87, 0x38, 0x0C, 0x1C,
    ];

    #[test]
    fn test_decode_short_frame_is_empty() {
        assert_eq!(decode(&[0x01, 0x02, 0x03]), Outcome::Empty);
    }

    #[test]
    fn test_decode_empty_input() {
        assert!(decode(&[]).is_empty());
    }

    #[test]
    fn test_decode_length_boundary() {
        assert_eq!(decode(&CASE_A[..FRAME_LEN - 1]), Outcome::Empty);

        let outcome = decode(&CASE_A[..FRAME_LEN]);
        assert_eq!(outcome.telemetry().map(|t| t.packet_counter), Some(5));
    }

    #[test]
    fn test_decode_reference_frame() {
        let telemetry = decode(&CASE_A).into_telemetry().unwrap();

        assert_eq!(telemetry.packet_counter, 5);
        assert_eq!(telemetry.rssi, 0);
        assert_eq!(telemetry.snr, 0);
        assert_eq!(telemetry.spreading_factor, 7);
        assert_eq!(telemetry.frequency, 3.770168);
        assert_eq!(telemetry.battery_voltage, 3.1);
    }

    #[test]
    fn test_outcome_from_option() {
        assert_eq!(Outcome::from(None), Outcome::Empty);
        assert_eq!(
            Outcome::from(decode(&CASE_A).into_telemetry()),
            decode(&CASE_A)
        );
    }

    #[test]
    fn test_outcome_serialization() {
        assert_eq!(serde_json::to_string(&Outcome::Empty).unwrap(), "{}");
        assert_eq!(
            serde_json::to_string(&decode(&CASE_A)).unwrap(),
            r#"{"packet_counter":5,"rssi":0,"snr":0,"spreading_factor":7,"frequency":3.770168,"battery_voltage":3.1}"#
        );
    }
}
