use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// How a payload is written on the command line or on stdin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Encoding {
    Hex,
    Base64,
}

/// What gets printed for each decoded frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    /// The decoded telemetry object.
    Json,
    /// The device's serial console layout.
    Report,
    /// The collection-server record.
    Record,
    /// The codec hook output document.
    Uplink,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub format: Format,
    pub encoding: Encoding,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogConfig {
    pub level: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub output: OutputConfig,
    pub log: LogConfig,
}

impl Config {
    /// Defaults, then the optional config file, then `RANGETEST_*` variables.
    pub fn load(path: &str) -> Result<Self, config::ConfigError> {
        let _ = dotenvy::dotenv();

        let settings = config::Config::builder()
            .set_default("output.format", "json")?
            .set_default("output.encoding", "hex")?
            .set_default("log.level", "info")?
            .add_source(config::File::with_name(path).required(false))
            .add_source(config::Environment::with_prefix("RANGETEST").separator("_"))
            .build()?;

        settings.try_deserialize()
    }
}
