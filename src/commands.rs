//! BC759x command set and the two-byte command frame.
//!
//! Every command sent to the chip is exactly two bytes, `[opcode, data]`,
//! with no framing, checksum or delimiter. For most categories the low bits
//! of the opcode carry a target index (digit position, blink group or
//! register number).
//!
//! # Example
//!
//! ```rust
//! use bc759x_display::commands::{opcode, Command};
//!
//! let cmd = Command::decode_write(3, 7);
//! assert_eq!(cmd.opcode, opcode::DECODE_WRITE | 3);
//! assert_eq!(cmd.to_bytes(), [0x83, 0x07]);
//! ```

/// Highest addressable digit position (BC7591 has 32 digits).
pub const MAX_POSITION: u8 = 31;

/// Width bit requesting that leading zeros are rendered as `0`.
///
/// OR it into the width argument of
/// [`SegmentDisplay::display_decimal`](crate::SegmentDisplay::display_decimal).
pub const KEEP_LEADING_ZEROS: u8 = 0x80;

/// Mask selecting the digit count from a width argument.
pub const WIDTH_MASK: u8 = 0x7F;

/// Data bit marking a decode-write digit as a leading zero.
///
/// The chip renders a zero digit carrying this bit as blank.
pub const BLANK_DIGIT: u8 = 0x80;

/// Data value selecting every bit of a blink group.
pub const ALL_BITS: u8 = 0xFF;

/// Number of per-digit blink groups (digits 0-15).
pub const BLINK_GROUPS: u8 = 16;

/// BC759x opcodes.
///
/// Several opcodes share a value; the chip interprets them by context
/// (e.g. segment vs. coordinate addressing).
pub mod opcode {
    /// Write raw segment bitmap to a digit (`| position`).
    pub const DIRECT_WRITE: u8 = 0x00;
    /// Column write, same encoding as [`DIRECT_WRITE`].
    pub const COLUMN_WRITE: u8 = 0x00;
    /// Clear blink flags of a digit group (`| group`).
    pub const BLINK_WRITE_CLEAR: u8 = 0x20;
    /// Set blink flags of a digit group (`| group`).
    pub const BLINK_WRITE_SET: u8 = 0x30;
    /// Shift display towards high digits and write.
    pub const SHIFT_HIGH_WRITE: u8 = 0x40;
    /// Rotate display right.
    pub const ROTATE_RIGHT: u8 = 0x5F;
    /// Rotate display left.
    pub const ROTATE_LEFT: u8 = 0x60;
    /// Shift display towards low digits and write.
    pub const SHIFT_LOW_WRITE: u8 = 0x61;
    /// Write one decoded digit (`| position`).
    pub const DECODE_WRITE: u8 = 0x80;
    /// Quarter write, bottom half.
    pub const QUARTER_WRITE_BOTTOM: u8 = 0xA0;
    /// Quarter insert, bottom half.
    pub const QUARTER_INSERT_BOTTOM: u8 = 0xA4;
    /// Quarter write, top half.
    pub const QUARTER_WRITE_TOP: u8 = 0xA8;
    /// Extended write, same encoding as [`QUARTER_WRITE_TOP`].
    pub const WRITE_EXTENDED: u8 = 0xA8;
    /// Quarter insert, top half.
    pub const QUARTER_INSERT_TOP: u8 = 0xAC;
    /// Extended decode write.
    pub const DECODE_EXTENDED: u8 = 0xB0;
    /// Turn one segment off.
    pub const SEGMENT_OFF: u8 = 0xC0;
    /// Turn one coordinate off, same encoding as [`SEGMENT_OFF`].
    pub const COORDINATE_OFF: u8 = 0xC0;
    /// Turn one segment on.
    pub const SEGMENT_ON: u8 = 0xC1;
    /// Turn one coordinate on, same encoding as [`SEGMENT_ON`].
    pub const COORDINATE_ON: u8 = 0xC1;
    /// Blink register for digits 16-23 (`+ 1` for digits 24-31).
    pub const BLINK_DIGIT_CONTROL: u8 = 0xD0;
    /// Global control register.
    pub const GLOBAL_CONTROL: u8 = 0xF0;
    /// Write data to every segment.
    pub const WRITE_ALL: u8 = 0xF1;
    /// Blink speed register.
    pub const BLINK_SPEED: u8 = 0xF2;
    /// Brightness (dimming) register.
    pub const DIM_CONTROL: u8 = 0xF3;
    /// Reset, first byte.
    pub const RESET_HIGH: u8 = 0xFF;
    /// Reset, second byte.
    pub const RESET_LOW: u8 = 0x5A;
}

/// Selector for one of the two combined blink registers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BlinkRegister {
    /// Digits 16-23.
    Low,
    /// Digits 24-31.
    High,
}

impl BlinkRegister {
    /// Returns the register that holds the blink bit for `digit` (16-31).
    #[inline]
    pub const fn for_digit(digit: u8) -> Self {
        if digit & 0x08 != 0 {
            BlinkRegister::High
        } else {
            BlinkRegister::Low
        }
    }

    /// Returns the opcode that writes this register.
    #[inline]
    pub const fn opcode(self) -> u8 {
        match self {
            BlinkRegister::Low => opcode::BLINK_DIGIT_CONTROL,
            BlinkRegister::High => opcode::BLINK_DIGIT_CONTROL + 1,
        }
    }
}

/// A single two-byte BC759x command.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Command {
    /// First byte: opcode, possibly OR'd with a target index.
    pub opcode: u8,
    /// Second byte: command data.
    pub data: u8,
}

impl Command {
    /// Creates a command from raw bytes.
    #[inline]
    pub const fn new(opcode: u8, data: u8) -> Self {
        Self { opcode, data }
    }

    /// Decoded digit write at `position` (0-31).
    ///
    /// `data` is the digit value, optionally OR'd with [`BLANK_DIGIT`].
    #[inline]
    pub const fn decode_write(position: u8, data: u8) -> Self {
        Self::new(opcode::DECODE_WRITE | (position & MAX_POSITION), data)
    }

    /// Raw segment write at `position` (0-31).
    #[inline]
    pub const fn direct_write(position: u8, segments: u8) -> Self {
        Self::new(opcode::DIRECT_WRITE | (position & MAX_POSITION), segments)
    }

    /// Sets the blink flags selected by `mask` in `group` (0-15).
    #[inline]
    pub const fn blink_set(group: u8, mask: u8) -> Self {
        Self::new(opcode::BLINK_WRITE_SET | (group & 0x0F), mask)
    }

    /// Clears the blink flags selected by `mask` in `group` (0-15).
    #[inline]
    pub const fn blink_clear(group: u8, mask: u8) -> Self {
        Self::new(opcode::BLINK_WRITE_CLEAR | (group & 0x0F), mask)
    }

    /// Writes a whole blink register for digits 16-31.
    #[inline]
    pub const fn blink_digit_control(register: BlinkRegister, mask: u8) -> Self {
        Self::new(register.opcode(), mask)
    }

    /// Writes `data` to every segment of every digit.
    #[inline]
    pub const fn write_all(data: u8) -> Self {
        Self::new(opcode::WRITE_ALL, data)
    }

    /// Turns a single segment on or off by coordinate.
    #[inline]
    pub const fn segment(coordinate: u8, on: bool) -> Self {
        let op = if on {
            opcode::SEGMENT_ON
        } else {
            opcode::SEGMENT_OFF
        };
        Self::new(op, coordinate)
    }

    /// Sets the blink speed register.
    #[inline]
    pub const fn blink_speed(speed: u8) -> Self {
        Self::new(opcode::BLINK_SPEED, speed)
    }

    /// Sets the brightness register.
    #[inline]
    pub const fn dim(level: u8) -> Self {
        Self::new(opcode::DIM_CONTROL, level)
    }

    /// Writes the global control register.
    #[inline]
    pub const fn global_control(flags: u8) -> Self {
        Self::new(opcode::GLOBAL_CONTROL, flags)
    }

    /// Chip reset.
    #[inline]
    pub const fn reset() -> Self {
        Self::new(opcode::RESET_HIGH, opcode::RESET_LOW)
    }

    /// Returns the wire encoding, opcode first.
    #[inline]
    pub const fn to_bytes(self) -> [u8; 2] {
        [self.opcode, self.data]
    }

    /// Builds a command from its wire encoding.
    #[inline]
    pub const fn from_bytes(bytes: [u8; 2]) -> Self {
        Self::new(bytes[0], bytes[1])
    }
}

impl From<Command> for [u8; 2] {
    fn from(cmd: Command) -> Self {
        cmd.to_bytes()
    }
}
