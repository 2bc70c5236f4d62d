//! ESP32-C3 SuperMini BC759x display demo.
//!
//! Drives a BC759x chip over UART1 and runs a 10Hz loop that:
//! - Counts up in decimal on the low digits
//! - Shows the same counter in hex next to it
//! - Shows a slowly changing float with two fraction digits
//! - Toggles blinking on the most significant digit every second
//!
//! # Build
//!
//! ```bash
//! cargo build --release --features esp32 --bin esp32_main
//! espflash flash --monitor target/riscv32imc-esp-espidf/release/esp32_main
//! ```

use bc759x_display::config::{ChipModel, DisplayConfig};
use bc759x_display::hal::esp32::{pins, Esp32Uart};
use bc759x_display::{DisplayDirection, SegmentDisplay, KEEP_LEADING_ZEROS};
use esp_idf_hal::peripherals::Peripherals;
use std::thread;
use std::time::Duration;

/// Main loop interval in milliseconds (10Hz)
const LOOP_INTERVAL_MS: u64 = 100;

/// Loop ticks between blink toggles (1s at 10Hz)
const BLINK_TICKS: u32 = 10;

fn main() -> anyhow::Result<()> {
    // Initialize ESP-IDF
    esp_idf_hal::sys::link_patches();
    esp_idf_svc::log::EspLogger::initialize_default();

    log::info!("bc759x display demo");

    // =========================================================================
    // Configuration
    // =========================================================================
    let chip = option_env!("BC759X_CHIP")
        .and_then(ChipModel::from_text)
        .unwrap_or_default();
    let direction = option_env!("BC759X_DIRECTION")
        .and_then(DisplayDirection::from_text)
        .unwrap_or_default();
    let config = DisplayConfig::default()
        .with_chip(chip)
        .with_direction(direction);

    log::info!(
        "chip {} ({} digits), low digit on {}",
        config.chip.as_str(),
        config.chip.digit_count(),
        config.direction.as_str()
    );

    // =========================================================================
    // Initialize UART (GPIO21 TX)
    // =========================================================================
    log::info!("UART1 TX on GPIO{}", pins::DISPLAY_TX);
    let peripherals = Peripherals::take()?;
    let uart = Esp32Uart::new(peripherals.uart1, peripherals.pins.gpio21, &config.uart)?;
    let mut display = SegmentDisplay::with_config(uart, &config);
    log::info!("[OK] Display cleared");

    // =========================================================================
    // Layout
    // =========================================================================
    // Digits counted from the low end of the board.
    // BC7595: counter on digits 0-5 only.
    // BC7591: counter 0-7, hex 8-11, float 12-17.
    let wide = config.chip.digit_count() >= 18;
    let counter_width = if wide { 8 } else { config.chip.digit_count() };
    let counter_at = config.digit_position(0).unwrap_or(0);
    let hex_at = config.digit_position(8).unwrap_or(0);
    let float_at = config.digit_position(12).unwrap_or(0);
    let blink_at = config.digit_position(config.max_position()).unwrap_or(0);

    let mut counter: u32 = 0;
    let mut blinking = false;

    loop {
        display.display_decimal(counter, counter_at, counter_width);

        if wide {
            display.display_hex(counter as u16, hex_at, 4);
            let value = counter as f32 / 7.0;
            display.display_float(value, float_at, 6 | KEEP_LEADING_ZEROS, 2);
        }

        if counter % BLINK_TICKS == 0 {
            blinking = !blinking;
            display.digit_blink(blink_at, blinking);
        }

        if counter % 100 == 0 && display.sink().write_errors() > 0 {
            log::warn!("{} UART write errors so far", display.sink().write_errors());
        }

        counter = counter.wrapping_add(1);
        thread::sleep(Duration::from_millis(LOOP_INTERVAL_MS));
    }
}
