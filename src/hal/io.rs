//! Adapters from generic writers to [`ByteSink`].
//!
//! Serial drivers expose fallible writers; the display encoder expects a
//! fire-and-forget sink. These adapters bridge the two: a failed write is
//! logged at `warn`, counted, and otherwise dropped.
//!
//! - [`IoSink`] wraps any `embedded_io::Write` (feature `embedded-io`)
//! - [`StdIoSink`] wraps any `std::io::Write` (feature `std`)

use crate::traits::ByteSink;

/// Feeds `bytes` to a writer that may accept only part of a slice per call.
///
/// Gives up at the first error or zero-length write, logging it at `warn`,
/// and returns the number of bytes left unsent.
#[cfg_attr(not(feature = "esp32"), allow(dead_code))]
pub(crate) fn write_fully<E: core::fmt::Debug>(
    bytes: &[u8],
    mut write: impl FnMut(&[u8]) -> Result<usize, E>,
) -> Result<(), usize> {
    let mut remaining = bytes;
    while !remaining.is_empty() {
        match write(remaining) {
            Ok(0) => {
                log::warn!("serial writer stalled, dropped {} bytes", remaining.len());
                return Err(remaining.len());
            }
            Ok(written) => remaining = &remaining[written.min(remaining.len())..],
            Err(e) => {
                log::warn!("serial write failed: {:?}", e);
                return Err(remaining.len());
            }
        }
    }
    Ok(())
}

/// [`ByteSink`] over an `embedded_io::Write` serial writer.
///
/// # Example
///
/// ```rust,ignore
/// use bc759x_display::{SegmentDisplay, hal::IoSink};
///
/// let uart = /* HAL UART TX implementing embedded_io::Write */;
/// let mut display = SegmentDisplay::new(IoSink::new(uart));
/// display.clear();
/// ```
#[cfg(feature = "embedded-io")]
pub struct IoSink<W: embedded_io::Write> {
    writer: W,
    write_errors: u32,
}

#[cfg(feature = "embedded-io")]
impl<W: embedded_io::Write> IoSink<W> {
    /// Wraps a writer.
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            write_errors: 0,
        }
    }

    /// Number of bytes that failed to write.
    #[inline]
    pub fn write_errors(&self) -> u32 {
        self.write_errors
    }

    /// Flushes the underlying writer.
    pub fn flush(&mut self) -> Result<(), W::Error> {
        self.writer.flush()
    }

    /// Returns the wrapped writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

#[cfg(feature = "embedded-io")]
impl<W: embedded_io::Write> ByteSink for IoSink<W> {
    fn write_byte(&mut self, byte: u8) {
        if let Err(e) = self.writer.write_all(&[byte]) {
            self.write_errors = self.write_errors.saturating_add(1);
            log::warn!("serial write failed: {:?}", e);
        }
    }
}

/// [`ByteSink`] over a `std::io::Write`, e.g. an opened serial device file.
///
/// # Example
///
/// ```rust
/// use bc759x_display::{SegmentDisplay, hal::StdIoSink};
///
/// let mut display = SegmentDisplay::new(StdIoSink::new(Vec::new()));
/// display.write_all(0xFF);
///
/// let sink = display.release();
/// assert_eq!(sink.write_errors(), 0);
/// assert_eq!(sink.into_inner(), [0xF1, 0xFF]);
/// ```
#[cfg(feature = "std")]
pub struct StdIoSink<W: std::io::Write> {
    writer: W,
    write_errors: u32,
}

#[cfg(feature = "std")]
impl<W: std::io::Write> StdIoSink<W> {
    /// Wraps a writer.
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            write_errors: 0,
        }
    }

    /// Number of bytes that failed to write.
    #[inline]
    pub fn write_errors(&self) -> u32 {
        self.write_errors
    }

    /// Flushes the underlying writer.
    pub fn flush(&mut self) -> std::io::Result<()> {
        self.writer.flush()
    }

    /// Returns the wrapped writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

#[cfg(feature = "std")]
impl<W: std::io::Write> ByteSink for StdIoSink<W> {
    fn write_byte(&mut self, byte: u8) {
        if let Err(e) = self.writer.write_all(&[byte]) {
            self.write_errors = self.write_errors.saturating_add(1);
            log::warn!("serial write failed: {}", e);
        }
    }
}
