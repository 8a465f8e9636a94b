//! Module: config
//!
//! Purpose: Timing and carrier configuration for the pulse encoder.
//!
//! Architecture:
//! - Default constants are the single source of truth for both the
//!   library and the `irenc` command line
//! - `PulseTiming` is handed to an encoder once and never mutated
//! - Durations are opaque microsecond counts, no range checks
//!
//! Safety: Safe. Copy types only.

/// Default header mark in microseconds.
pub const DEFAULT_HDR_MARK_US: u32 = 3500;
/// Default header space in microseconds.
pub const DEFAULT_HDR_SPACE_US: u32 = 1700;
/// Default bit mark in microseconds.
pub const DEFAULT_BIT_MARK_US: u32 = 440;
/// Default space following a `0` bit.
pub const DEFAULT_BIT_ZERO_SPACE_US: u32 = 400;
/// Default space following a `1` bit.
pub const DEFAULT_BIT_ONE_SPACE_US: u32 = 1300;
/// Default tail mark in microseconds.
pub const DEFAULT_TAIL_MARK_US: u32 = 440;
/// Default tail space in microseconds.
pub const DEFAULT_TAIL_SPACE_US: u32 = 15000;

/// Carrier frequency used by every transmitter.
pub const CARRIER_FREQUENCY_HZ: u32 = 38_000;
/// Carrier duty cycle used by every transmitter.
pub const CARRIER_DUTY_CYCLE: f32 = 0.5;

/// Mark/space durations of one pulse train.
///
/// Every byte expands to eight `{bit_mark, bit_*_space}` pairs framed by a
/// header pair and a tail pair:
///
/// ```text
/// [hdr mark][hdr space] ([bit mark][0/1 space]) x 8 x N [tail mark][tail space]
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PulseTiming {
    pub header_mark_us: u32,
    pub header_space_us: u32,
    pub bit_mark_us: u32,
    pub bit_zero_space_us: u32,
    pub bit_one_space_us: u32,
    pub tail_mark_us: u32,
    pub tail_space_us: u32,

    /// Send bytes LSB first instead of MSB first.
    pub bit_swap: bool,
}

impl Default for PulseTiming {
    fn default() -> Self {
        Self {
            header_mark_us: DEFAULT_HDR_MARK_US,
            header_space_us: DEFAULT_HDR_SPACE_US,
            bit_mark_us: DEFAULT_BIT_MARK_US,
            bit_zero_space_us: DEFAULT_BIT_ZERO_SPACE_US,
            bit_one_space_us: DEFAULT_BIT_ONE_SPACE_US,
            tail_mark_us: DEFAULT_TAIL_MARK_US,
            tail_space_us: DEFAULT_TAIL_SPACE_US,
            bit_swap: false,
        }
    }
}

impl PulseTiming {
    /// Default timing with LSB-first bit order.
    pub fn swapped() -> Self {
        Self {
            bit_swap: true,
            ..Default::default()
        }
    }

    /// Space that follows the mark of a bit with the given value.
    #[inline]
    pub fn bit_space_us(&self, one: bool) -> u32 {
        if one {
            self.bit_one_space_us
        } else {
            self.bit_zero_space_us
        }
    }
}

/// IR carrier parameters passed along with every train.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Carrier {
    pub frequency_hz: u32,

    /// Fraction of the carrier period the LED is on, in (0, 1].
    pub duty_cycle: f32,
}

impl Carrier {
    /// Consumer IR carrier: 38 kHz, 50% duty.
    pub const IR_38KHZ: Carrier = Carrier {
        frequency_hz: CARRIER_FREQUENCY_HZ,
        duty_cycle: CARRIER_DUTY_CYCLE,
    };

    /// Check frequency is non-zero and duty cycle lies in (0, 1].
    pub fn is_valid(&self) -> bool {
        self.frequency_hz > 0 && self.duty_cycle > 0.0 && self.duty_cycle <= 1.0
    }

    /// Duty cycle rounded to whole percent.
    pub fn duty_percent(&self) -> u8 {
        (self.duty_cycle.clamp(0.0, 1.0) * 100.0).round() as u8
    }
}

impl Default for Carrier {
    fn default() -> Self {
        Self::IR_38KHZ
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_timing() {
        let t = PulseTiming::default();
        assert_eq!(t.header_mark_us, 3500);
        assert_eq!(t.header_space_us, 1700);
        assert_eq!(t.bit_mark_us, 440);
        assert_eq!(t.bit_zero_space_us, 400);
        assert_eq!(t.bit_one_space_us, 1300);
        assert_eq!(t.tail_mark_us, 440);
        assert_eq!(t.tail_space_us, 15000);
        assert!(!t.bit_swap);
    }

    #[test]
    fn test_bit_space() {
        let t = PulseTiming::default();
        assert_eq!(t.bit_space_us(true), 1300);
        assert_eq!(t.bit_space_us(false), 400);
    }

    #[test]
    fn test_carrier_validity() {
        assert!(Carrier::IR_38KHZ.is_valid());
        assert_eq!(Carrier::IR_38KHZ.duty_percent(), 50);

        let zero_freq = Carrier { frequency_hz: 0, duty_cycle: 0.5 };
        assert!(!zero_freq.is_valid());

        let no_duty = Carrier { frequency_hz: 38_000, duty_cycle: 0.0 };
        assert!(!no_duty.is_valid());

        let full = Carrier { frequency_hz: 38_000, duty_cycle: 1.0 };
        assert!(full.is_valid());
        assert_eq!(full.duty_percent(), 100);
    }
}
