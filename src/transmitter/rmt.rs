//! RMT transmitter for IR LED output.
//!
//! The RMT peripheral generates the carrier in hardware, so marks are
//! modulated at exactly the configured frequency without CPU involvement.
//!
//! # Hardware Setup
//!
//! ```text
//! ESP32 GPIOx ──[R]──▶ NPN base ──▶ IR LED (940 nm)
//! ```

use esp_idf_svc::hal::gpio::AnyOutputPin;
use esp_idf_svc::hal::peripheral::Peripheral;
use esp_idf_svc::hal::rmt::config::{CarrierConfig, DutyPercent, TransmitConfig};
use esp_idf_svc::hal::rmt::{
    PinState, Pulse, PulseTicks, RmtChannel, TxRmtDriver, VariableLengthSignal,
};
use esp_idf_svc::hal::units::Hertz;
use esp_idf_svc::sys::EspError;

use super::{Transmitter, TxError};
use crate::config::Carrier;
use crate::pulse::{Level, PulseTrain};

/// 80 MHz APB clock / 80 = 1 tick per microsecond.
const CLOCK_DIVIDER: u8 = 80;

/// Largest duration a single RMT item can hold (15-bit tick count).
const MAX_TICKS: u32 = 32_767;

impl From<EspError> for TxError {
    fn from(e: EspError) -> Self {
        TxError::Driver { code: e.code() }
    }
}

/// IR transmitter on one RMT channel.
pub struct RmtTransmitter {
    driver: TxRmtDriver<'static>,
    carrier: Carrier,
}

impl RmtTransmitter {
    /// Configure `channel` to drive `pin` with the given carrier.
    pub fn new<C: RmtChannel>(
        channel: impl Peripheral<P = C> + 'static,
        pin: u32,
        carrier: Carrier,
    ) -> Result<Self, TxError> {
        if !carrier.is_valid() {
            return Err(TxError::InvalidCarrier {
                frequency_hz: carrier.frequency_hz,
                duty_cycle: carrier.duty_cycle,
            });
        }
        let gpio = i32::try_from(pin).map_err(|_| TxError::InvalidPin(pin))?;

        let carrier_config = CarrierConfig::new()
            .frequency(Hertz(carrier.frequency_hz))
            .carrier_level(PinState::High)
            .duty_percent(DutyPercent::new(carrier.duty_percent())?);
        let config = TransmitConfig::new()
            .clock_divider(CLOCK_DIVIDER)
            .carrier(Some(carrier_config));

        // SAFETY: nothing else in this program claims the IR output pin.
        let output = unsafe { AnyOutputPin::new(gpio) };
        let driver = TxRmtDriver::new(channel, output, &config)?;

        Ok(Self { driver, carrier })
    }

    fn build_signal(train: &PulseTrain) -> Result<VariableLengthSignal, TxError> {
        let mut signal = VariableLengthSignal::with_capacity(train.len());

        for pulse in train.pulses() {
            let level = match pulse.level {
                Level::Mark => PinState::High,
                Level::Space => PinState::Low,
            };

            // Split durations beyond one item into same-level chunks
            let mut remaining = pulse.duration_us;
            while remaining > 0 {
                let chunk = remaining.min(MAX_TICKS);
                let ticks = PulseTicks::new(chunk as u16)?;
                signal.push(&[Pulse::new(level, ticks)])?;
                remaining -= chunk;
            }
        }

        Ok(signal)
    }
}

impl Transmitter for RmtTransmitter {
    fn transmit(&mut self, train: &PulseTrain, carrier: &Carrier) -> Result<(), TxError> {
        if *carrier != self.carrier {
            return Err(TxError::CarrierMismatch);
        }

        let signal = Self::build_signal(train)?;
        self.driver.start_blocking(&signal)?;
        Ok(())
    }
}
