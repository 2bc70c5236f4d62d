//! Desktop example that drives a BC759x over a serial device, or dumps the
//! command stream it would send.
//!
//! The serial port must already be configured (9600 8N1, raw), e.g. with
//! `stty -F /dev/ttyUSB0 9600 raw -echo`.
//!
//! # Usage
//!
//! ```sh
//! cargo run --example wire_dump -- [chip [direction [device]]]
//! ```
//!
//! Print the command stream as hex:
//! ```sh
//! cargo run --example wire_dump -- bc7595 left
//! ```
//!
//! Send to a real display:
//! ```sh
//! cargo run --example wire_dump -- bc7595 left /dev/ttyUSB0
//! ```

use bc759x_display::config::{ChipModel, DisplayConfig};
use bc759x_display::hal::{MockSink, StdIoSink};
use bc759x_display::{ByteSink, DisplayDirection, SegmentDisplay, KEEP_LEADING_ZEROS};
use std::fs::OpenOptions;

/// Renders the demo screen on any transport.
///
/// Fields are placed from the low end of the board, so the layout holds in
/// both directions.
fn draw<S: ByteSink>(display: &mut SegmentDisplay<S>, config: &DisplayConfig) {
    let digits = config.chip.digit_count();

    if let Some(position) = config.digit_position(0) {
        display.display_decimal(20_241_016, position, digits.min(8));
    }
    if let (Some(hex_at), Some(float_at)) = (config.digit_position(8), config.digit_position(12)) {
        display.display_hex(0xBEEF, hex_at, 4);
        display.display_float(-273.15, float_at, 7 | KEEP_LEADING_ZEROS, 2);
    }
    if let Some(position) = config.digit_position(config.max_position()) {
        display.digit_blink(position, true);
    }
}

fn main() -> anyhow::Result<()> {
    let mut args = std::env::args().skip(1);
    let chip = match args.next() {
        Some(text) => ChipModel::from_text(&text)
            .ok_or_else(|| anyhow::anyhow!("unknown chip model: {}", text))?,
        None => ChipModel::default(),
    };
    let direction = match args.next() {
        Some(text) => DisplayDirection::from_text(&text)
            .ok_or_else(|| anyhow::anyhow!("unknown direction: {}", text))?,
        None => DisplayDirection::default(),
    };
    let device = args.next();

    let config = DisplayConfig::default()
        .with_chip(chip)
        .with_direction(direction);

    match device {
        Some(path) => {
            let port = OpenOptions::new().write(true).open(&path)?;
            let mut display = SegmentDisplay::with_config(StdIoSink::new(port), &config);
            draw(&mut display, &config);

            let mut sink = display.release();
            sink.flush()?;
            if sink.write_errors() > 0 {
                anyhow::bail!("{} bytes failed to reach {}", sink.write_errors(), path);
            }
            println!("Sent demo screen to {}", path);
        }
        None => {
            let mut display = SegmentDisplay::with_config(MockSink::new(), &config);
            draw(&mut display, &config);

            for cmd in display.sink().commands() {
                println!("{:02X} {:02X}", cmd.opcode, cmd.data);
            }
        }
    }

    Ok(())
}
