//! # bc759x-display
//!
//! A UART driver for the BC759x family of 7-segment LED display/keyboard
//! controller chips (BC7591: 32 digits, BC7595: 6 digits).
//!
//! ## Features
//!
//! - **Number rendering**: Decimal, hexadecimal and fixed-point values split into digits
//! - **Leading zeros**: Blanked by default, or kept on request
//! - **Direction-aware addressing**: Boards with digit 0 on the right or on the left
//! - **Blink control**: Per-digit blinking, with the combined registers for digits 16-31 tracked locally
//! - **Transport agnostic**: Any [`ByteSink`] carries the two-byte commands
//!
//! ## Architecture
//!
//! The crate is structured to allow testing on desktop without hardware:
//!
//! - `commands` - Opcode table and the two-byte [`Command`] frame
//! - `traits` - The [`ByteSink`] transport abstraction
//! - `display` - [`SegmentDisplay`], the encoder that ties everything together
//! - `config` - Chip model, direction and UART settings
//! - `hal` - Concrete transports (mock for testing, I/O adapters, esp32 for hardware)
//!
//! ## Example
//!
//! ```rust
//! use bc759x_display::{SegmentDisplay, KEEP_LEADING_ZEROS, hal::MockSink};
//!
//! // Create encoder with a recording transport
//! let mut display = SegmentDisplay::new(MockSink::new());
//! display.clear();
//!
//! // Minutes and seconds, "07:05" style, on digits 0-3
//! display.display_decimal(5, 0, 2 | KEEP_LEADING_ZEROS);
//! display.display_decimal(7, 2, 2 | KEEP_LEADING_ZEROS);
//!
//! // Blink the seconds
//! display.digit_blink(0, true);
//! display.digit_blink(1, true);
//!
//! assert_eq!(display.sink().last_command().map(|c| c.to_bytes()), Some([0x31, 0xFF]));
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]

extern crate alloc;

/// BC759x opcodes and the two-byte command frame.
pub mod commands;
/// Display configuration: chip model, direction, UART settings.
pub mod config;
/// The display encoder.
pub mod display;
/// Transport implementations: mock, I/O adapters and ESP32 UART.
pub mod hal;
/// Core traits for transport abstraction.
pub mod traits;

// Re-exports for convenience
pub use commands::{
    BlinkRegister, Command, BLANK_DIGIT, KEEP_LEADING_ZEROS, MAX_POSITION, WIDTH_MASK,
};
pub use config::{ChipModel, DisplayConfig, UartSettings};
pub use display::{DisplayDirection, SegmentDisplay};
pub use traits::ByteSink;
