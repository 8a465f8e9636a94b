//! # IrPulseEncoder
//!
//! Send arbitrary data bytes via infrared.
//!
//! ## Architecture
//!
//! Characters flow one way, from input to LED:
//! - [`PulseEncoder`] turns hex text into [`PulseTrain`]s, pure logic
//! - [`Session`] feeds the encoder and hands each finished train to a
//!   [`Transmitter`]
//! - Transmitters either dump the train as text or modulate a 38 kHz
//!   carrier on a GPIO (ESP-IDF targets)

pub mod config;
pub mod pulse;
pub mod encoder;
pub mod transmitter;
pub mod session;
pub mod logging;

pub use config::{Carrier, PulseTiming};
pub use pulse::{Level, Pulse, PulseTrain};
pub use encoder::PulseEncoder;
pub use transmitter::{TextDump, Transmitter, TxError};
pub use session::{Session, SessionStats};
