//! Transmitters for completed pulse trains.
//!
//! Two implementations behind one trait:
//! - [`TextDump`]: `pulse N` / `space N` lines on any writer (host default)
//! - `RmtTransmitter`: 38 kHz carrier on a GPIO via the RMT peripheral
//!   (ESP-IDF targets only)

pub mod dump;
#[cfg(target_os = "espidf")]
pub mod rmt;

pub use dump::TextDump;
#[cfg(target_os = "espidf")]
pub use rmt::RmtTransmitter;

use crate::config::Carrier;
use crate::pulse::PulseTrain;

/// Transmission error.
///
/// Never fatal for a session: the train is dropped and encoding continues.
#[derive(Debug, thiserror::Error)]
pub enum TxError {
    /// Writing the text dump failed.
    #[error("output error: {0}")]
    Io(#[from] std::io::Error),

    /// Hardware driver returned an error code.
    #[error("driver error {code}")]
    Driver { code: i32 },

    /// Carrier frequency is zero or duty cycle is outside (0, 1].
    #[error("invalid carrier {frequency_hz} Hz @ {duty_cycle} duty")]
    InvalidCarrier { frequency_hz: u32, duty_cycle: f32 },

    /// Train requested a carrier the hardware was not configured for.
    #[error("carrier differs from the one configured at startup")]
    CarrierMismatch,

    /// GPIO number cannot drive an output.
    #[error("GPIO {0} is not a usable output pin")]
    InvalidPin(u32),
}

/// Sink for completed pulse trains.
///
/// `transmit` blocks until the whole train has been emitted.
pub trait Transmitter {
    fn transmit(&mut self, train: &PulseTrain, carrier: &Carrier) -> Result<(), TxError>;
}

impl<T: Transmitter + ?Sized> Transmitter for Box<T> {
    fn transmit(&mut self, train: &PulseTrain, carrier: &Carrier) -> Result<(), TxError> {
        (**self).transmit(train, carrier)
    }
}

/// Pick a transmitter for the given GPIO.
///
/// `None` or pin 0 selects the text dump on stdout.
#[cfg(not(target_os = "espidf"))]
pub fn select(gpio: Option<u32>) -> Result<Box<dyn Transmitter>, TxError> {
    if let Some(pin) = gpio.filter(|&p| p != 0) {
        tracing::warn!(
            pin,
            "hardware transmission needs an ESP-IDF target, dumping pulses instead"
        );
    }
    Ok(Box::new(TextDump::stdout()))
}

/// Pick a transmitter for the given GPIO.
///
/// `None` or pin 0 selects the text dump on stdout. Any other pin is
/// driven through RMT channel 0.
#[cfg(target_os = "espidf")]
pub fn select(gpio: Option<u32>) -> Result<Box<dyn Transmitter>, TxError> {
    use esp_idf_svc::hal::peripherals::Peripherals;

    let Some(pin) = gpio.filter(|&p| p != 0) else {
        return Ok(Box::new(TextDump::stdout()));
    };

    let peripherals = Peripherals::take().map_err(|e| TxError::Driver { code: e.code() })?;
    let tx = RmtTransmitter::new(peripherals.rmt.channel0, pin, Carrier::IR_38KHZ)?;
    tracing::info!(pin, "IR transmitter on RMT channel 0");
    Ok(Box::new(tx))
}
