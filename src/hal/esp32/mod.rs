//! ESP32 hardware support for BC759x displays.
//!
//! This module provides the UART transport for driving a BC759x chip from
//! an ESP32-C3 SuperMini.
//!
//! # Hardware Configuration
//!
//! - **MCU**: ESP32-C3 SuperMini (RISC-V 160MHz, 4MB Flash)
//! - **Display**: BC7591 (32 digits) or BC7595 (6 digits), UART at 9600 baud
//!
//! # Pin Assignments
//!
//! See the [`pins`] module for GPIO assignments.

mod uart;

pub use uart::Esp32Uart;

/// Pin assignments for SuperMini ESP32-C3.
pub mod pins {
    /// UART TX to the chip's RX pin
    pub const DISPLAY_TX: i32 = 21;
}
