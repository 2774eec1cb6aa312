use thiserror::Error;

pub type Byte = u8;

/*
 * Counter | RSSI | SNR | SF | Frequency | Battery
 *   2B    |  1B  | 1B  | 1B |    4B     |   2B
 */

/// Number of leading bytes a frame needs before it can be decoded.
pub const FRAME_LEN: usize = 11;

const PACKET_COUNTER: usize = 0;
const RSSI: usize = 2;
const SNR: usize = 3;
const SPREADING_FACTOR: usize = 4;
const FREQUENCY: usize = 5;
const BATTERY: usize = 9;

/// Subtracted from the raw RSSI byte to get dBm.
pub const RSSI_BIAS: i16 = 200;
/// Subtracted from the raw SNR byte to get dB.
pub const SNR_BIAS: i16 = 128;
pub const FREQUENCY_SCALE: f64 = 1_000_000.0;
pub const BATTERY_SCALE: f64 = 1_000.0;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FrameError {
    #[error("frame too short: have {have} bytes, need {need}")]
    TooShort { have: usize, need: usize },
}

/// The first [`FRAME_LEN`] bytes of a frame, before any scaling.
///
/// Multi-byte fields are big-endian. Every accessor widens the unsigned bytes
/// first, so no shift or bias can sign-extend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawFields([Byte; FRAME_LEN]);

impl RawFields {
    /// Copies the fixed-size prefix out of `bytes`. Trailing bytes are ignored.
    pub fn from_prefix(bytes: &[Byte]) -> Result<Self, FrameError> {
        let prefix = bytes
            .first_chunk::<FRAME_LEN>()
            .ok_or(FrameError::TooShort {
                have: bytes.len(),
                need: FRAME_LEN,
            })?;

        Ok(RawFields(*prefix))
    }

    pub fn packet_counter(&self) -> u16 {
        self.u16_at(PACKET_COUNTER)
    }

    pub fn rssi_raw(&self) -> u8 {
        self.0[RSSI]
    }

    pub fn snr_raw(&self) -> u8 {
        self.0[SNR]
    }

    pub fn spreading_factor(&self) -> u8 {
        self.0[SPREADING_FACTOR]
    }

    pub fn frequency_raw(&self) -> u32 {
        let b = &self.0;
        u32::from_be_bytes([b[FREQUENCY], b[FREQUENCY + 1], b[FREQUENCY + 2], b[FREQUENCY + 3]])
    }

    pub fn battery_raw(&self) -> u16 {
        self.u16_at(BATTERY)
    }

    fn u16_at(&self, at: usize) -> u16 {
        u16::from_be_bytes([self.0[at], self.0[at + 1]])
    }
}
