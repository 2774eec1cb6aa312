use thiserror::Error;

/// Custom error type for CLI operations
#[derive(Debug, Error)]
pub enum CliError {
    #[error("Error loading configuration: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Invalid hex payload {payload:?}: {source}")]
    InvalidHex {
        payload: String,
        source: hex::FromHexError,
    },

    #[error("Invalid base64 payload {payload:?}: {source}")]
    InvalidBase64 {
        payload: String,
        source: base64::DecodeError,
    },

    #[error("Error serializing data: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Error decoding uplink: {0}")]
    Codec(#[from] rangetest::codec::CodecError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
