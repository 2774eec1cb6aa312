use crate::frame::FREQUENCY_SCALE;
use crate::packets::telemetry::DecodedTelemetry;
use serde::{Deserialize, Serialize};

/// Range-test result as uploaded to the collection server.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RangeTestRecord {
    pub packet: u16,
    pub rssi: i16,
    pub snr: i16,
    pub sf: u8,
    pub freq: u32, // Hz
    pub gw_rssi: i16, // 0 when the gateway did not report one
    pub battery: f64,
}

impl RangeTestRecord {
    pub fn new(telemetry: &DecodedTelemetry, gateway_rssi: Option<i16>) -> Self {
        RangeTestRecord {
            packet: telemetry.packet_counter,
            rssi: telemetry.rssi,
            snr: telemetry.snr,
            sf: telemetry.spreading_factor,
            freq: (telemetry.frequency * FREQUENCY_SCALE).round() as u32,
            gw_rssi: gateway_rssi.unwrap_or(0),
            battery: (telemetry.battery_voltage * 100.0).round() / 100.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decoder::decode;

    #[test]
    fn test_record_from_reference_frame() {
        let frame = [
            0x00, 0x05, 0xC8, 0x80, 0x07, 0x00, 0x39, 0x87, 0x38, 0x0C, 0x1C,
        ];
        let telemetry = decode(&frame).into_telemetry().unwrap();
        let record = RangeTestRecord::new(&telemetry, Some(-87));

        assert_eq!(
            serde_json::to_string(&record).unwrap(),
            r#"{"packet":5,"rssi":0,"snr":0,"sf":7,"freq":3770168,"gw_rssi":-87,"battery":3.1}"#
        );
    }

    #[test]
    fn test_record_restores_full_frequency_range() {
        let frame = [0x00, 0x00, 0x00, 0x00, 0x0C, 0xFF, 0xFF, 0xFF, 0xFF, 0x0D, 0x80];
        let telemetry = decode(&frame).into_telemetry().unwrap();
        let record = RangeTestRecord::new(&telemetry, None);

        assert_eq!(record.freq, u32::MAX);
        assert_eq!(record.gw_rssi, 0);
        // 3456 mV
        assert_eq!(record.battery, 3.46);
    }

    #[test]
    fn test_record_without_gateway_rssi_posts_zero() {
        let frame = [
            0x00, 0x05, 0xC8, 0x80, 0x07, 0x00, 0x39, 0x87, 0x38, 0x0C, 0x1C,
        ];
        let telemetry = decode(&frame).into_telemetry().unwrap();
        let json = serde_json::to_string(&RangeTestRecord::new(&telemetry, None)).unwrap();

        assert!(json.contains(r#""gw_rssi":0,"#));
    }
}
