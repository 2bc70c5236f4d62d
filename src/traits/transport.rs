//! Byte-sink abstraction for the serial link to the display chip.
//!
//! The driver only ever needs to push single bytes, in order, to the chip.
//! [`ByteSink`] captures exactly that capability. Write failures are the
//! transport's business: the driver never sees them.
//!
//! # Implementations
//!
//! | Type | Feature | Notes |
//! |------|---------|-------|
//! | `&mut S` | - | Borrow a sink owned elsewhere |
//! | `Vec<u8>` | - | Appends every byte (uses `alloc`) |
//! | `heapless::Vec<u8, N>` | - | Drops bytes once full |
//! | [`MockSink`](crate::hal::MockSink) | - | Recording test double |
//! | `IoSink` | `embedded-io` | Any `embedded_io::Write` |
//! | `StdIoSink` | `std` | Any `std::io::Write` |
//! | `Esp32Uart` | `esp32` | ESP-IDF UART transmitter |
//!
//! # Example
//!
//! ```rust
//! use bc759x_display::traits::ByteSink;
//!
//! let mut wire: Vec<u8> = Vec::new();
//! wire.write_byte(0xF1);
//! wire.write_byte(0x00);
//! assert_eq!(wire, [0xF1, 0x00]);
//! ```

use alloc::vec::Vec;

/// Synchronous, ordered, fire-and-forget byte output.
///
/// # Implementation Notes
///
/// - Bytes must reach the link in call order
/// - Blocking until the byte is queued is fine; the driver has no timeouts
/// - Errors must not panic; swallow (and ideally log) them
pub trait ByteSink {
    /// Writes one byte to the link.
    fn write_byte(&mut self, byte: u8);

    /// Writes several bytes in order.
    ///
    /// Default implementation calls [`write_byte`](Self::write_byte) per byte.
    fn write_bytes(&mut self, bytes: &[u8]) {
        for &byte in bytes {
            self.write_byte(byte);
        }
    }
}

impl<S: ByteSink + ?Sized> ByteSink for &mut S {
    #[inline]
    fn write_byte(&mut self, byte: u8) {
        (**self).write_byte(byte);
    }

    #[inline]
    fn write_bytes(&mut self, bytes: &[u8]) {
        (**self).write_bytes(bytes);
    }
}

impl ByteSink for Vec<u8> {
    #[inline]
    fn write_byte(&mut self, byte: u8) {
        self.push(byte);
    }

    fn write_bytes(&mut self, bytes: &[u8]) {
        self.extend_from_slice(bytes);
    }
}

impl<const N: usize> ByteSink for heapless::Vec<u8, N> {
    #[inline]
    fn write_byte(&mut self, byte: u8) {
        // Full buffer: the byte is lost, like a dropped byte on the wire.
        let _ = self.push(byte);
    }
}
