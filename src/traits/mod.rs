//! Trait definitions for transport abstraction.
//!
//! This module defines the abstraction that lets the display encoder run on
//! different transports (ESP32 UART, `embedded-io` serial, desktop mock).
//!
//! # Submodules
//!
//! - `transport`: The [`ByteSink`] byte output trait

pub mod transport;

pub use transport::*;
