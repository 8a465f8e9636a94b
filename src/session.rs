//! Encoding session: feeds characters to the encoder and dispatches
//! completed trains to the transmitter.
//!
//! # Rules
//!
//! - A train is transmitted whole or not at all
//! - Trains are transmitted in the order they complete
//! - A failed transmission is logged and counted, never retried,
//!   and never stops the session

use std::io::{self, BufReader, Read};

use tracing::{debug, error};

use crate::config::Carrier;
use crate::encoder::PulseEncoder;
use crate::pulse::PulseTrain;
use crate::transmitter::Transmitter;

/// Counters for one session.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SessionStats {
    /// Trains the transmitter accepted.
    pub trains_sent: u64,
    /// Trains the transmitter rejected.
    pub trains_failed: u64,
    /// Durations (marks + spaces) in accepted trains.
    pub pulses_sent: u64,
}

/// Drives one [`PulseEncoder`] into one [`Transmitter`].
pub struct Session<T: Transmitter> {
    encoder: PulseEncoder,
    transmitter: T,
    carrier: Carrier,
    stats: SessionStats,
}

impl<T: Transmitter> Session<T> {
    pub fn new(encoder: PulseEncoder, transmitter: T, carrier: Carrier) -> Self {
        Self {
            encoder,
            transmitter,
            carrier,
            stats: SessionStats::default(),
        }
    }

    /// Feed one character, transmitting if it completes a train.
    pub fn process_char(&mut self, c: char) {
        if let Some(train) = self.encoder.process_char(c) {
            self.dispatch(&train);
        }
    }

    /// Encode an explicit data string. A trailing newline is implied.
    pub fn run_str(&mut self, data: &str) {
        for c in data.chars() {
            self.process_char(c);
        }
        self.process_char('\n');
    }

    /// Encode everything read from `reader` until end of stream.
    ///
    /// Each byte is one character. Input after the last newline is dropped.
    pub fn run_reader<R: Read>(&mut self, reader: R) -> io::Result<()> {
        for byte in BufReader::new(reader).bytes() {
            self.process_char(char::from(byte?));
        }

        if self.encoder.has_payload() {
            debug!(
                pulses = self.encoder.buffered().len(),
                pending_nibble = self.encoder.pending_nibble().is_some(),
                "end of input, dropping unterminated train"
            );
        }
        Ok(())
    }

    /// Get session counters.
    pub fn stats(&self) -> SessionStats {
        self.stats
    }

    /// Get the encoder.
    pub fn encoder(&self) -> &PulseEncoder {
        &self.encoder
    }

    /// Get the transmitter.
    pub fn transmitter(&self) -> &T {
        &self.transmitter
    }

    /// Consume the session, returning the transmitter.
    pub fn into_transmitter(self) -> T {
        self.transmitter
    }

    fn dispatch(&mut self, train: &PulseTrain) {
        match self.transmitter.transmit(train, &self.carrier) {
            Ok(()) => {
                self.stats.trains_sent = self.stats.trains_sent.saturating_add(1);
                self.stats.pulses_sent = self
                    .stats
                    .pulses_sent
                    .saturating_add(train.len() as u64);
                debug!(
                    pulses = train.len(),
                    duration_us = train.total_duration_us(),
                    "train sent"
                );
            }
            Err(e) => {
                self.stats.trains_failed = self.stats.trains_failed.saturating_add(1);
                error!(pulses = train.len(), "transmission failed: {e}");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PulseTiming;
    use crate::transmitter::TxError;

    struct AlwaysFails;

    impl Transmitter for AlwaysFails {
        fn transmit(&mut self, _train: &PulseTrain, _carrier: &Carrier) -> Result<(), TxError> {
            Err(TxError::CarrierMismatch)
        }
    }

    struct AlwaysOk;

    impl Transmitter for AlwaysOk {
        fn transmit(&mut self, _train: &PulseTrain, _carrier: &Carrier) -> Result<(), TxError> {
            Ok(())
        }
    }

    #[test]
    fn test_counters_saturate() {
        let encoder = PulseEncoder::new(PulseTiming::default());
        let mut session = Session::new(encoder, AlwaysOk, Carrier::IR_38KHZ);
        session.stats.trains_sent = u64::MAX;
        session.stats.pulses_sent = u64::MAX - 1;

        session.run_str("00");
        assert_eq!(session.stats().trains_sent, u64::MAX);
        assert_eq!(session.stats().pulses_sent, u64::MAX);

        let encoder = PulseEncoder::new(PulseTiming::default());
        let mut session = Session::new(encoder, AlwaysFails, Carrier::IR_38KHZ);
        session.stats.trains_failed = u64::MAX;

        session.run_str("00");
        assert_eq!(session.stats().trains_failed, u64::MAX);
        assert_eq!(session.stats().trains_sent, 0);
    }
}
