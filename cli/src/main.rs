use clap::{Parser, Subcommand};
use log::{error, info, warn};
use rangetest::codec::{self, UplinkOutput};
use rangetest::{Outcome, RangeTestRecord, decode};
use std::io::{self, BufRead, Read, Write};
use std::path::PathBuf;
use std::process::ExitCode;

mod config;
mod error;
mod payload;

use config::{Config, Encoding, Format};
use error::CliError;
use payload::parse_payload;

/// Range-test telemetry decoder
#[derive(Parser, Debug)]
#[command(version, about = "Range-test telemetry decoder", long_about = None)]
struct Args {
    /// Configuration file name, extension optional
    #[arg(short, long, default_value = "rangetest")]
    config: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Decode frames given as arguments, or one per line on stdin
    Decode {
        /// Encoded frames
        payloads: Vec<String>,

        /// Payload encoding (defaults to output.encoding)
        #[arg(short, long, value_enum)]
        encoding: Option<Encoding>,

        /// Output format (defaults to output.format)
        #[arg(short, long, value_enum)]
        format: Option<Format>,

        /// RSSI measured at the gateway in dBm, used by the record format
        #[arg(long, allow_negative_numbers = true)]
        gateway_rssi: Option<i16>,
    },

    /// Run the codec hook on a decodeUplink input document
    Uplink {
        /// Input document (stdin when omitted)
        file: Option<PathBuf>,
    },
}

fn render(
    outcome: &Outcome,
    format: Format,
    gateway_rssi: Option<i16>,
    frame_len: usize,
) -> Result<String, CliError> {
    let rendered = match (format, outcome.telemetry()) {
        (Format::Json, _) => serde_json::to_string(outcome)?,
        (Format::Uplink, _) => serde_json::to_string(&UplinkOutput {
            data: outcome.clone(),
        })?,
        (Format::Report, Some(telemetry)) => telemetry.to_string(),
        (Format::Record, Some(telemetry)) => {
            serde_json::to_string(&RangeTestRecord::new(telemetry, gateway_rssi))?
        }
        (Format::Report | Format::Record, None) => {
            warn!("{frame_len} byte frame is too short to decode");
            format!("no telemetry ({frame_len} bytes)")
        }
    };

    Ok(rendered)
}

fn decode_payloads<I, W>(
    payloads: I,
    encoding: Encoding,
    format: Format,
    gateway_rssi: Option<i16>,
    out: &mut W,
) -> Result<usize, CliError>
where
    I: IntoIterator<Item = io::Result<String>>,
    W: Write,
{
    let mut decoded = 0;

    for line in payloads {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let frame = parse_payload(&line, encoding)?;
        let outcome = decode(&frame);
        if !outcome.is_empty() {
            decoded += 1;
        }

        writeln!(out, "{}", render(&outcome, format, gateway_rssi, frame.len())?)?;
    }

    Ok(decoded)
}

/// Command-line flags win over `output.*` from the config layers.
fn resolve_output(
    encoding: Option<Encoding>,
    format: Option<Format>,
    config: &Config,
) -> (Encoding, Format) {
    (
        encoding.unwrap_or(config.output.encoding),
        format.unwrap_or(config.output.format),
    )
}

fn run_uplink<R, W>(file: Option<PathBuf>, mut stdin: R, out: &mut W) -> Result<(), CliError>
where
    R: Read,
    W: Write,
{
    let input = match file {
        Some(path) => std::fs::read_to_string(path)?,
        None => {
            let mut buf = String::new();
            stdin.read_to_string(&mut buf)?;
            buf
        }
    };

    writeln!(out, "{}", codec::decode_uplink_json(&input)?)?;
    Ok(())
}

fn run(command: Commands, config: &Config) -> Result<(), CliError> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match command {
        Commands::Decode {
            payloads,
            encoding,
            format,
            gateway_rssi,
        } => {
            let (encoding, format) = resolve_output(encoding, format, config);

            let decoded = if payloads.is_empty() {
                let stdin = io::stdin();
                decode_payloads(stdin.lock().lines(), encoding, format, gateway_rssi, &mut out)?
            } else {
                decode_payloads(payloads.into_iter().map(Ok), encoding, format, gateway_rssi, &mut out)?
            };

            info!("Decoded {decoded} frame(s)");
        }
        Commands::Uplink { file } => run_uplink(file, io::stdin(), &mut out)?,
    }

    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();

    let config = match Config::load(&args.config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", CliError::from(e));
            return ExitCode::FAILURE;
        }
    };

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(config.log.level.as_str()),
    )
    .init();

    match run(args.command, &config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}
