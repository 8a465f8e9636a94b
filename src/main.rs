//! irenc - Send arbitrary data bytes via infrared
//!
//! Reads hex digits from `--data` or standard input. Every newline ends a
//! pulse train and sends it; commas chain several trains into one send.

use std::io;

use anyhow::Context;
use clap::Parser;
use tracing::info;

use ir_pulse_encoder::config::{
    Carrier, PulseTiming, DEFAULT_BIT_MARK_US, DEFAULT_BIT_ONE_SPACE_US,
    DEFAULT_BIT_ZERO_SPACE_US, DEFAULT_HDR_MARK_US, DEFAULT_HDR_SPACE_US,
    DEFAULT_TAIL_MARK_US, DEFAULT_TAIL_SPACE_US,
};
use ir_pulse_encoder::logging::{init_logging, LogLevel};
use ir_pulse_encoder::{transmitter, PulseEncoder, Session};

#[derive(Parser, Debug)]
#[command(
    name = "irenc",
    version = env!("VERSION_STRING"),
    about = "Send arbitrary data bytes via infrared"
)]
struct Cli {
    /// Hex data to send. Reads standard input when absent.
    #[arg(short, long, env = "IRENC_DATA", value_name = "HEX")]
    data: Option<String>,

    /// Header mark
    #[arg(long, env = "IRENC_HDR_MARK", value_name = "US", default_value_t = DEFAULT_HDR_MARK_US)]
    hdr_mark: u32,

    /// Header space
    #[arg(short = 'r', long, env = "IRENC_HDR_SPACE", value_name = "US", default_value_t = DEFAULT_HDR_SPACE_US)]
    hdr_space: u32,

    /// Bit mark
    #[arg(long, env = "IRENC_BIT_MARK", value_name = "US", default_value_t = DEFAULT_BIT_MARK_US)]
    bit_mark: u32,

    /// Bit zero space
    #[arg(short = 'z', long, env = "IRENC_BIT_ZERO_SPACE", value_name = "US", default_value_t = DEFAULT_BIT_ZERO_SPACE_US)]
    bit_zero_space: u32,

    /// Bit one space
    #[arg(short = 'o', long, env = "IRENC_BIT_ONE_SPACE", value_name = "US", default_value_t = DEFAULT_BIT_ONE_SPACE_US)]
    bit_one_space: u32,

    /// Tail mark
    #[arg(long, env = "IRENC_TAIL_MARK", value_name = "US", default_value_t = DEFAULT_TAIL_MARK_US)]
    tail_mark: u32,

    /// Tail space
    #[arg(short = 't', long, env = "IRENC_TAIL_SPACE", value_name = "US", default_value_t = DEFAULT_TAIL_SPACE_US)]
    tail_space: u32,

    /// Send bytes LSB first
    #[arg(short = 's', long, env = "IRENC_BIT_SWAP")]
    bit_swap: bool,

    /// GPIO driving the IR LED. 0 dumps pulses to stdout instead.
    #[arg(short = 'g', long, env = "IRENC_GPIO", value_name = "PIN", default_value_t = 0)]
    gpio: u32,

    /// Minimum log level (stderr).
    #[arg(long, env = "IRENC_LOG_LEVEL", value_name = "LEVEL", default_value = "warn")]
    log_level: LogLevel,
}

impl Cli {
    fn timing(&self) -> PulseTiming {
        PulseTiming {
            header_mark_us: self.hdr_mark,
            header_space_us: self.hdr_space,
            bit_mark_us: self.bit_mark,
            bit_zero_space_us: self.bit_zero_space,
            bit_one_space_us: self.bit_one_space,
            tail_mark_us: self.tail_mark,
            tail_space_us: self.tail_space,
            bit_swap: self.bit_swap,
        }
    }
}

fn main() -> anyhow::Result<()> {
    #[cfg(target_os = "espidf")]
    esp_idf_svc::sys::link_patches();

    let cli = Cli::parse();
    init_logging(cli.log_level);

    let tx = transmitter::select(Some(cli.gpio)).context("setting up IR transmitter")?;
    let mut session = Session::new(PulseEncoder::new(cli.timing()), tx, Carrier::IR_38KHZ);
    info!(timing = ?session.encoder().timing(), gpio = cli.gpio, "starting");

    match &cli.data {
        Some(data) => session.run_str(data),
        None => session
            .run_reader(io::stdin().lock())
            .context("reading standard input")?,
    }

    let stats = session.stats();
    info!(
        sent = stats.trains_sent,
        failed = stats.trains_failed,
        pulses = stats.pulses_sent,
        "done"
    );
    Ok(())
}
