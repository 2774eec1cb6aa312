//! Decoder for the 11-byte telemetry frame sent by the LoRaWAN range-test
//! node.
//!
//! ```
//! use rangetest::{Outcome, decode};
//!
//! let frame = [0x00, 0x05, 0xC8, 0x80, 0x07, 0x00, 0x39, 0x87, 0x38, 0x0C, 0x1C];
//! let telemetry = decode(&frame).into_telemetry().unwrap();
//! assert_eq!(telemetry.packet_counter, 5);
//! assert_eq!(telemetry.battery_voltage, 3.1);
//!
//! assert_eq!(decode(&[0x01, 0x02, 0x03]), Outcome::Empty);
//! ```

pub mod codec;
mod decoder;
pub mod frame;
pub mod packets;
mod record;

pub use decoder::{Outcome, decode};
pub use frame::{FRAME_LEN, FrameError};
pub use packets::telemetry::DecodedTelemetry;
pub use record::RangeTestRecord;
