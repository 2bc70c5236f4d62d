//! Transport implementations.
//!
//! This module contains concrete implementations of the
//! [`ByteSink`](crate::traits::ByteSink) trait for various platforms.
//!
//! # Available Implementations
//!
//! - `mock`: Recording sink for tests and desktop development
//! - `io`: Adapters over `embedded_io::Write` and `std::io::Write`
//! - `esp32`: ESP-IDF UART transmitter (requires `esp32` feature)

pub mod io;
pub mod mock;

#[cfg(feature = "esp32")]
pub mod esp32;

#[cfg(feature = "embedded-io")]
pub use io::IoSink;
#[cfg(feature = "std")]
pub use io::StdIoSink;
pub use mock::*;

#[cfg(feature = "esp32")]
pub use esp32::*;
