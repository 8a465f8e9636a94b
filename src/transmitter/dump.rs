//! Text dump transmitter.
//!
//! Stands in for the IR hardware on targets without it. Output format,
//! one duration per line:
//!
//! ```text
//! pulse 3500
//! space 1700
//! pulse 440
//! ...
//! ```

use std::io::{self, Write};

use super::{Transmitter, TxError};
use crate::config::Carrier;
use crate::pulse::PulseTrain;

/// Writes every train as labeled duration lines.
pub struct TextDump<W: Write> {
    out: W,
}

impl TextDump<io::Stdout> {
    /// Dump to standard output.
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> TextDump<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Get the underlying writer.
    pub fn get_ref(&self) -> &W {
        &self.out
    }

    /// Consume the dump, returning the writer.
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Transmitter for TextDump<W> {
    fn transmit(&mut self, train: &PulseTrain, _carrier: &Carrier) -> Result<(), TxError> {
        for pulse in train.pulses() {
            writeln!(self.out, "{} {}", pulse.level.as_str(), pulse.duration_us)?;
        }
        self.out.flush()?;
        Ok(())
    }
}
