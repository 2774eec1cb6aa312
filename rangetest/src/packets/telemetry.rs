use crate::frame::{
    BATTERY_SCALE, Byte, FREQUENCY_SCALE, FrameError, RSSI_BIAS, RawFields, SNR_BIAS,
};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Measurements carried by one range-test frame, already scaled.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecodedTelemetry {
    pub packet_counter: u16,
    pub rssi: i16,            // dBm
    pub snr: i16,             // dB
    pub spreading_factor: u8, // passed through, not validated
    pub frequency: f64,       // raw value / 1e6
    pub battery_voltage: f64, // volts
}

impl DecodedTelemetry {
    pub fn from_raw(raw: &RawFields) -> Self {
        DecodedTelemetry {
            packet_counter: raw.packet_counter(),
            rssi: i16::from(raw.rssi_raw()) - RSSI_BIAS,
            snr: i16::from(raw.snr_raw()) - SNR_BIAS,
            spreading_factor: raw.spreading_factor(),
            frequency: f64::from(raw.frequency_raw()) / FREQUENCY_SCALE,
            battery_voltage: f64::from(raw.battery_raw()) / BATTERY_SCALE,
        }
    }
}

impl TryFrom<&[Byte]> for DecodedTelemetry {
    type Error = FrameError;

    fn try_from(bytes: &[Byte]) -> Result<Self, Self::Error> {
        let raw = RawFields::from_prefix(bytes)?;
        Ok(DecodedTelemetry::from_raw(&raw))
    }
}

// Same layout the device prints on its serial console.
impl fmt::Display for DecodedTelemetry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== Range Test Data ===")?;
        writeln!(f, "Packet: {}", self.packet_counter)?;
        writeln!(f, "RSSI: {} dBm", self.rssi)?;
        writeln!(f, "SNR: {} dB", self.snr)?;
        writeln!(f, "SF: {}", self.spreading_factor)?;
        writeln!(f, "Freq: {:.1} MHz", self.frequency)?;
        writeln!(f, "Battery: {:.2} V", self.battery_voltage)?;
        write!(f, "======================")
    }
}
