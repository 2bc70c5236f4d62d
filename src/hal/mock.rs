//! Mock transport for testing without hardware.
//!
//! [`MockSink`] records every byte the encoder emits so tests can assert on
//! the exact wire stream.
//!
//! # Example
//!
//! ```rust
//! use bc759x_display::{SegmentDisplay, hal::MockSink};
//!
//! let mut display = SegmentDisplay::new(MockSink::new());
//! display.display_hex(0x2F, 0, 2);
//!
//! let sink = display.release();
//! assert_eq!(sink.bytes, [0x80, 0x0F, 0x81, 0x02]);
//! assert_eq!(sink.pairs(), [(0x80, 0x0F), (0x81, 0x02)]);
//! ```

use alloc::vec::Vec;

use crate::commands::Command;
use crate::traits::ByteSink;

/// Recording byte sink.
///
/// Use the public `bytes` field or the command views to inspect what was
/// sent.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MockSink {
    /// Every byte written, in order.
    pub bytes: Vec<u8>,
    /// Number of `write_byte` calls.
    pub write_count: usize,
}

impl MockSink {
    /// Creates an empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the stream split into commands.
    ///
    /// A trailing odd byte is ignored.
    pub fn commands(&self) -> Vec<Command> {
        self.bytes
            .chunks_exact(2)
            .map(|pair| Command::new(pair[0], pair[1]))
            .collect()
    }

    /// Returns the stream as `(opcode, data)` pairs.
    pub fn pairs(&self) -> Vec<(u8, u8)> {
        self.commands()
            .into_iter()
            .map(|cmd| (cmd.opcode, cmd.data))
            .collect()
    }

    /// Returns the recorded commands and empties the sink.
    pub fn take_commands(&mut self) -> Vec<Command> {
        let commands = self.commands();
        self.reset();
        commands
    }

    /// Number of complete commands recorded.
    pub fn command_count(&self) -> usize {
        self.bytes.len() / 2
    }

    /// Returns the last complete command, if any.
    pub fn last_command(&self) -> Option<Command> {
        self.commands().last().copied()
    }

    /// Forgets everything recorded so far.
    pub fn reset(&mut self) {
        self.bytes.clear();
        self.write_count = 0;
    }
}

impl ByteSink for MockSink {
    fn write_byte(&mut self, byte: u8) {
        self.bytes.push(byte);
        self.write_count += 1;
    }
}
