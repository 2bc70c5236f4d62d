//! ESP32 UART transmitter for the BC759x serial link.
//!
//! The chip only listens, so the driver is TX-only: one GPIO wired to the
//! chip's RX pin, 8N1 at the configured baud rate (9600 by default).
//!
//! # Wiring
//!
//! - TX (GPIO21 by default) → BC759x RX
//! - GND → GND

use crate::config::UartSettings;
use crate::hal::io::write_fully;
use crate::traits::ByteSink;
use esp_idf_hal::gpio::{AnyIOPin, OutputPin};
use esp_idf_hal::peripheral::Peripheral;
use esp_idf_hal::prelude::*;
use esp_idf_hal::uart::{config::Config, Uart, UartTxDriver};

/// UART transmitter driving a BC759x chip.
///
/// Write errors are logged and counted, never surfaced to the display
/// encoder.
///
/// # Example
///
/// ```ignore
/// use bc759x_display::{SegmentDisplay, config::UartSettings, hal::esp32::Esp32Uart};
///
/// let peripherals = Peripherals::take()?;
/// let uart = Esp32Uart::new(
///     peripherals.uart1,
///     peripherals.pins.gpio21,
///     &UartSettings::default(),
/// )?;
///
/// let mut display = SegmentDisplay::new(uart);
/// display.clear();
/// display.display_decimal(1234, 0, 4);
/// ```
pub struct Esp32Uart<'d> {
    driver: UartTxDriver<'d>,
    write_errors: u32,
}

impl<'d> Esp32Uart<'d> {
    /// Creates a TX-only UART driver.
    ///
    /// # Arguments
    ///
    /// * `uart` - UART peripheral (UART1 keeps UART0 free for the console)
    /// * `tx` - GPIO wired to the chip's RX pin
    /// * `settings` - Baud rate
    ///
    /// # Errors
    ///
    /// Returns an error if the UART driver cannot be installed.
    pub fn new<U: Uart>(
        uart: impl Peripheral<P = U> + 'd,
        tx: impl Peripheral<P = impl OutputPin> + 'd,
        settings: &UartSettings,
    ) -> Result<Self, esp_idf_hal::sys::EspError> {
        let config = Config::default().baudrate(settings.baud_rate.Hz());
        let driver = UartTxDriver::new(
            uart,
            tx,
            Option::<AnyIOPin>::None,
            Option::<AnyIOPin>::None,
            &config,
        )?;

        log::info!("BC759x UART ready at {} baud", settings.baud_rate);

        Ok(Self {
            driver,
            write_errors: 0,
        })
    }

    /// Number of bytes that failed to write.
    #[inline]
    pub fn write_errors(&self) -> u32 {
        self.write_errors
    }

    /// Blocks until every queued byte has left the TX FIFO.
    pub fn wait_done(&self) -> Result<(), esp_idf_hal::sys::EspError> {
        self.driver.wait_done(esp_idf_hal::delay::BLOCK)
    }
}

impl ByteSink for Esp32Uart<'_> {
    fn write_byte(&mut self, byte: u8) {
        self.write_bytes(&[byte]);
    }

    fn write_bytes(&mut self, bytes: &[u8]) {
        let driver = &mut self.driver;
        if write_fully(bytes, |chunk| driver.write(chunk)).is_err() {
            self.write_errors = self.write_errors.saturating_add(1);
        }
    }
}
