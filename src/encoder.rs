//! Hex-to-pulse encoder state machine.
//!
//! Pure logic, no hardware dependencies. Consumes characters,
//! produces completed pulse trains. Fully testable on host.
//!
//! # Input Grammar
//!
//! - **`0-9 a-f A-F`**: one nibble; two nibbles form a byte
//! - **`,`**: closes the current train with a tail and opens a new one
//!   with a header, in the same transmission
//! - **`\n`**: closes the current train with a tail and hands it out
//! - Anything else is ignored

use crate::config::PulseTiming;
use crate::pulse::PulseTrain;

/// Pulse encoder.
///
/// Converts a character stream into [`PulseTrain`]s, one per newline.
///
/// # Example
///
/// ```
/// use ir_pulse_encoder::config::PulseTiming;
/// use ir_pulse_encoder::encoder::PulseEncoder;
///
/// let mut encoder = PulseEncoder::new(PulseTiming::default());
///
/// assert!(encoder.process_char('4').is_none());
/// assert!(encoder.process_char('1').is_none());
///
/// let train = encoder.process_char('\n').unwrap();
/// assert_eq!(train.len(), 2 + 16 + 2); // header + one byte + tail
/// ```
pub struct PulseEncoder {
    timing: PulseTiming,

    // First digit of a byte pair, waiting for its partner
    high_nibble: Option<u8>,

    // Train under construction
    buffer: PulseTrain,
}

impl PulseEncoder {
    /// Create a new encoder. The header of the first train is emitted immediately.
    pub fn new(timing: PulseTiming) -> Self {
        let mut encoder = Self {
            timing,
            high_nibble: None,
            buffer: PulseTrain::new(),
        };
        encoder.push_header();
        encoder
    }

    /// Get configured timing.
    pub fn timing(&self) -> &PulseTiming {
        &self.timing
    }

    /// High nibble waiting for its low nibble, if any.
    pub fn pending_nibble(&self) -> Option<u8> {
        self.high_nibble
    }

    /// Durations accumulated since the last completed train.
    pub fn buffered(&self) -> &[u32] {
        self.buffer.as_slice()
    }

    /// Check whether anything beyond the opening header has been received.
    pub fn has_payload(&self) -> bool {
        self.high_nibble.is_some() || self.buffer.len() > 2
    }

    /// Feed one character.
    ///
    /// Returns the completed train when `c` is a newline.
    pub fn process_char(&mut self, c: char) -> Option<PulseTrain> {
        if let Some(nibble) = c.to_digit(16) {
            self.push_nibble(nibble as u8);
            return None;
        }

        match c {
            ',' => {
                self.push_tail();
                self.push_header();
                self.high_nibble = None;
                None
            }
            '\n' => {
                self.push_tail();
                let train = core::mem::take(&mut self.buffer);
                self.high_nibble = None;
                self.push_header();
                Some(train)
            }
            _ => None,
        }
    }

    /// Feed a whole string followed by the implicit trailing newline.
    ///
    /// Returns all completed trains in order.
    pub fn encode_str(&mut self, data: &str) -> Vec<PulseTrain> {
        data.chars()
            .chain(core::iter::once('\n'))
            .filter_map(|c| self.process_char(c))
            .collect()
    }

    // --- Private methods ---

    fn push_nibble(&mut self, nibble: u8) {
        match self.high_nibble.take() {
            None => self.high_nibble = Some(nibble),
            Some(high) => self.push_byte(high << 4 | nibble),
        }
    }

    fn push_byte(&mut self, byte: u8) {
        for pos in (0..8u8).rev() {
            // Swap flips the tested bit, not the loop direction
            let bit = if self.timing.bit_swap { 7 - pos } else { pos };
            let one = (byte >> bit) & 1 == 1;
            self.buffer
                .push_pair(self.timing.bit_mark_us, self.timing.bit_space_us(one));
        }
    }

    fn push_header(&mut self) {
        self.buffer
            .push_pair(self.timing.header_mark_us, self.timing.header_space_us);
    }

    fn push_tail(&mut self) {
        self.buffer
            .push_pair(self.timing.tail_mark_us, self.timing.tail_space_us);
    }
}
