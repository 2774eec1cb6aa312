//! Network-server codec hook.
//!
//! The network server hands every uplink to a per-device `decodeUplink`
//! function and stores whatever object it returns under `data`. These types
//! mirror that hook's input and output documents.

use crate::decoder::{Outcome, decode};
use crate::frame::Byte;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UplinkInput {
    pub bytes: Vec<Byte>,
    #[serde(default)]
    pub f_port: Option<u8>,
    #[serde(default)]
    pub recv_time: Option<DateTime<Utc>>,
    #[serde(default)]
    pub variables: HashMap<String, String>,
}

impl UplinkInput {
    pub fn new(bytes: Vec<Byte>) -> Self {
        UplinkInput {
            bytes,
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UplinkOutput {
    pub data: Outcome,
}

#[derive(Debug, Error)]
pub enum CodecError {
    #[error("malformed uplink document: {0}")]
    Json(#[from] serde_json::Error),
}

pub fn decode_uplink(input: &UplinkInput) -> UplinkOutput {
    log::debug!(
        "uplink: {} bytes, fPort {:?}, received {:?}",
        input.bytes.len(),
        input.f_port,
        input.recv_time
    );

    UplinkOutput {
        data: decode(&input.bytes),
    }
}

/// Parses a hook input document, decodes it and renders the output document.
pub fn decode_uplink_json(input: &str) -> Result<String, CodecError> {
    let input: UplinkInput = serde_json::from_str(input)?;
    let output = decode_uplink(&input);

    Ok(serde_json::to_string(&output)?)
}
