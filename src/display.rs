//! The BC759x display encoder.
//!
//! This module provides [`SegmentDisplay`], which turns numbers and blink
//! requests into two-byte commands on a [`ByteSink`].
//!
//! # Overview
//!
//! The encoder:
//! - Splits decimal, hexadecimal and fixed-point values into digits
//! - Addresses digits left-to-right or right-to-left ([`DisplayDirection`])
//! - Suppresses or keeps leading zeros
//! - Tracks the two combined blink registers for digits 16-31
//!
//! Out-of-range arguments turn an operation into a silent no-op. Nothing is
//! read back from the chip.
//!
//! # Example
//!
//! ```rust
//! use bc759x_display::{SegmentDisplay, KEEP_LEADING_ZEROS, hal::MockSink};
//!
//! let mut display = SegmentDisplay::new(MockSink::new());
//! display.clear();
//!
//! // "  42" across digits 0-3, low digit on the right
//! display.display_decimal(42, 0, 4);
//!
//! // "0042" on digits 4-7
//! display.display_decimal(42, 4, 4 | KEEP_LEADING_ZEROS);
//!
//! // 12.50 on digits 8-13
//! display.display_float(12.5, 8, 6, 2);
//!
//! display.digit_blink(20, true);
//! assert_eq!(display.blink_mask_low(), 0x10);
//! ```
//!
//! # Blink Cache
//!
//! Blink flags for digits 16-31 live in two 8-bit registers that can only
//! be written whole, so the encoder keeps a copy. Commands sent around the
//! encoder (e.g. through [`SegmentDisplay::send_command`]) are not reflected
//! in that copy; call [`SegmentDisplay::clear`] to resynchronize.

use crate::commands::{
    BlinkRegister, Command, ALL_BITS, BLANK_DIGIT, BLINK_GROUPS, KEEP_LEADING_ZEROS, MAX_POSITION,
    WIDTH_MASK,
};
use crate::config::DisplayConfig;
use crate::traits::ByteSink;

/// Powers of ten for up to seven fraction digits.
const POWERS_OF_TEN: [u32; 8] = [1, 10, 100, 1_000, 10_000, 100_000, 1_000_000, 10_000_000];

/// Which end of the board carries digit 0.
///
/// Controls whether successive digits of a number are written to
/// increasing or decreasing positions.
///
/// # Default
///
/// Defaults to [`LowDigitOnRight`](Self::LowDigitOnRight), the layout of
/// the reference boards.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum DisplayDirection {
    /// Digit 0 is rightmost; more significant digits go to higher positions.
    #[default]
    LowDigitOnRight,
    /// Digit 0 is leftmost; more significant digits go to lower positions.
    LowDigitOnLeft,
}

impl DisplayDirection {
    /// Returns the direction for a "low digit on right" flag.
    #[inline]
    pub const fn from_low_on_right(low_on_right: bool) -> Self {
        if low_on_right {
            DisplayDirection::LowDigitOnRight
        } else {
            DisplayDirection::LowDigitOnLeft
        }
    }

    /// Returns `true` for [`LowDigitOnRight`](Self::LowDigitOnRight).
    #[inline]
    pub const fn is_low_on_right(self) -> bool {
        matches!(self, DisplayDirection::LowDigitOnRight)
    }

    /// Returns the direction as a lowercase string.
    ///
    /// # Examples
    ///
    /// ```
    /// use bc759x_display::DisplayDirection;
    ///
    /// assert_eq!(DisplayDirection::LowDigitOnRight.as_str(), "right");
    /// assert_eq!(DisplayDirection::LowDigitOnLeft.as_str(), "left");
    /// ```
    #[inline]
    pub const fn as_str(&self) -> &'static str {
        match self {
            DisplayDirection::LowDigitOnRight => "right",
            DisplayDirection::LowDigitOnLeft => "left",
        }
    }

    /// Parse direction from text input.
    ///
    /// Accepts `"right"`/`"r"` and `"left"`/`"l"`, trimmed and
    /// case-insensitive.
    ///
    /// # Examples
    ///
    /// ```
    /// use bc759x_display::DisplayDirection;
    ///
    /// assert_eq!(DisplayDirection::from_text("Right"), Some(DisplayDirection::LowDigitOnRight));
    /// assert_eq!(DisplayDirection::from_text(" l "), Some(DisplayDirection::LowDigitOnLeft));
    /// assert_eq!(DisplayDirection::from_text("up"), None);
    /// ```
    pub fn from_text(s: &str) -> Option<Self> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("right") || s.eq_ignore_ascii_case("r") {
            Some(DisplayDirection::LowDigitOnRight)
        } else if s.eq_ignore_ascii_case("left") || s.eq_ignore_ascii_case("l") {
            Some(DisplayDirection::LowDigitOnLeft)
        } else {
            None
        }
    }

    /// Moves `position` one digit towards the more significant end.
    ///
    /// Returns `None` when the step would leave 0..=31.
    #[inline]
    fn step(self, position: u8) -> Option<u8> {
        match self {
            DisplayDirection::LowDigitOnRight if position < MAX_POSITION => Some(position + 1),
            DisplayDirection::LowDigitOnLeft => position.checked_sub(1),
            _ => None,
        }
    }

    /// Moves `position` by `count` digits towards the more significant end.
    #[inline]
    fn offset(self, position: u8, count: u8) -> Option<u8> {
        match self {
            DisplayDirection::LowDigitOnRight => position.checked_add(count),
            DisplayDirection::LowDigitOnLeft => position.checked_sub(count),
        }
    }

    /// Number of positions available from `position` towards the more
    /// significant end, `position` included.
    #[inline]
    fn room(self, position: u8) -> u8 {
        match self {
            DisplayDirection::LowDigitOnRight => MAX_POSITION + 1 - position,
            DisplayDirection::LowDigitOnLeft => position + 1,
        }
    }
}

/// Display encoder for one BC759x chip.
///
/// Owns (or borrows, via `&mut S`) the transport and the blink-register
/// cache for digits 16-31.
///
/// # Type Parameter
///
/// - `S`: The transport ([`ByteSink`] trait)
///
/// # Thread Safety
///
/// Not synchronized. Use one encoder per transport from one thread of
/// control, or guard it externally.
pub struct SegmentDisplay<S: ByteSink> {
    sink: S,
    direction: DisplayDirection,
    blink_mask_low: u8,
    blink_mask_high: u8,
}

impl<S: ByteSink> SegmentDisplay<S> {
    /// Creates an encoder with low digit on right and empty blink masks.
    ///
    /// Nothing is sent. Call [`clear`](Self::clear) before relying on the
    /// blink cache matching the chip.
    pub fn new(sink: S) -> Self {
        Self {
            sink,
            direction: DisplayDirection::LowDigitOnRight,
            blink_mask_low: 0,
            blink_mask_high: 0,
        }
    }

    /// Creates an encoder from a [`DisplayConfig`].
    ///
    /// Applies the configured direction and clears the display when
    /// `clear_on_init` is set.
    pub fn with_config(sink: S, config: &DisplayConfig) -> Self {
        let mut display = Self::new(sink);
        display.set_direction(config.direction);
        if config.clear_on_init {
            display.clear();
        }
        display
    }

    // =========================================================================
    // Transport
    // =========================================================================

    /// Sends one raw command: `opcode`, then `data`.
    ///
    /// The blink cache is not updated by commands sent here.
    pub fn send_command(&mut self, opcode: u8, data: u8) {
        log::trace!("bc759x cmd {:#04x} {:#04x}", opcode, data);
        self.sink.write_byte(opcode);
        self.sink.write_byte(data);
    }

    /// Sends a prepared [`Command`].
    #[inline]
    pub fn send(&mut self, cmd: Command) {
        self.send_command(cmd.opcode, cmd.data);
    }

    /// Returns the transport.
    #[inline]
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Returns the transport mutably.
    ///
    /// Bytes written here bypass the blink cache.
    #[inline]
    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    /// Consumes the encoder and returns the transport.
    pub fn release(self) -> S {
        self.sink
    }

    // =========================================================================
    // Direction
    // =========================================================================

    /// Sets the addressing direction for subsequent number displays.
    #[inline]
    pub fn set_display_direction(&mut self, low_on_right: bool) {
        self.direction = DisplayDirection::from_low_on_right(low_on_right);
    }

    /// Sets the addressing direction for subsequent number displays.
    #[inline]
    pub fn set_direction(&mut self, direction: DisplayDirection) {
        self.direction = direction;
    }

    /// Lowest digit number on the right (default).
    #[inline]
    pub fn set_low_digit_on_right(&mut self) {
        self.direction = DisplayDirection::LowDigitOnRight;
    }

    /// Lowest digit number on the left.
    #[inline]
    pub fn set_low_digit_on_left(&mut self) {
        self.direction = DisplayDirection::LowDigitOnLeft;
    }

    /// Returns the current addressing direction.
    #[inline]
    pub fn direction(&self) -> DisplayDirection {
        self.direction
    }

    /// Returns `true` if digit 0 is on the right.
    #[inline]
    pub fn low_digit_on_right(&self) -> bool {
        self.direction.is_low_on_right()
    }

    // =========================================================================
    // Whole-display Operations
    // =========================================================================

    /// Blanks every segment and stops every digit blinking.
    ///
    /// Sends `WRITE_ALL 0x00`, clears all 16 blink groups, zeroes both blink
    /// registers and resets the blink cache.
    pub fn clear(&mut self) {
        self.send(Command::write_all(0x00));
        for group in 0..BLINK_GROUPS {
            self.send(Command::blink_clear(group, ALL_BITS));
        }
        self.send(Command::blink_digit_control(BlinkRegister::Low, 0x00));
        self.send(Command::blink_digit_control(BlinkRegister::High, 0x00));
        self.blink_mask_low = 0;
        self.blink_mask_high = 0;
    }

    /// Resets the chip to its power-on state.
    ///
    /// The blink cache is reset along with it.
    pub fn reset(&mut self) {
        self.send(Command::reset());
        self.blink_mask_low = 0;
        self.blink_mask_high = 0;
    }

    /// Writes `data` to every segment of every digit.
    pub fn write_all(&mut self, data: u8) {
        self.send(Command::write_all(data));
    }

    /// Sets the blink speed register.
    pub fn set_blink_speed(&mut self, speed: u8) {
        self.send(Command::blink_speed(speed));
    }

    /// Sets the display brightness register.
    pub fn set_brightness(&mut self, level: u8) {
        self.send(Command::dim(level));
    }

    /// Writes the global control register.
    pub fn set_global_control(&mut self, flags: u8) {
        self.send(Command::global_control(flags));
    }

    // =========================================================================
    // Segment Operations
    // =========================================================================

    /// Writes a raw segment bitmap to one digit.
    ///
    /// No-op if `position > 31`.
    pub fn write_segments(&mut self, position: u8, segments: u8) {
        if position > MAX_POSITION {
            return;
        }
        self.send(Command::direct_write(position, segments));
    }

    /// Turns one segment on or off by chip coordinate.
    pub fn segment(&mut self, coordinate: u8, on: bool) {
        self.send(Command::segment(coordinate, on));
    }

    // =========================================================================
    // Number Display
    // =========================================================================

    /// Displays an unsigned decimal number.
    ///
    /// # Arguments
    ///
    /// * `value` - Number to show
    /// * `position` - Digit for the least significant figure (0-31)
    /// * `width` - Digit count in bits 0-6; bit 7
    ///   ([`KEEP_LEADING_ZEROS`]) renders leading zeros instead of blanks
    ///
    /// The least significant figure is always sent. Figures beyond `width`
    /// are dropped. Digits that would fall outside 0-31 are not sent.
    ///
    /// No-op if `position > 31` or the digit count is zero.
    pub fn display_decimal(&mut self, value: u32, position: u8, width: u8) {
        let count = width & WIDTH_MASK;
        if position > MAX_POSITION || count == 0 {
            return;
        }
        let keep_zeros = width & KEEP_LEADING_ZEROS != 0;

        self.send(Command::decode_write(position, (value % 10) as u8));
        let mut value = value / 10;
        let mut position = position;

        for _ in 1..count {
            position = match self.direction.step(position) {
                Some(next) => next,
                None => return,
            };
            let digit = (value % 10) as u8;
            let data = if value >= 10 || keep_zeros {
                digit
            } else {
                digit | BLANK_DIGIT
            };
            self.send(Command::decode_write(position, data));
            value /= 10;
        }
    }

    /// Displays a 16-bit value as hexadecimal, zero-padded to `width`.
    ///
    /// `width` is clamped so no digit leaves 0-31. No-op if
    /// `position > 31`.
    pub fn display_hex(&mut self, value: u16, position: u8, width: u8) {
        if position > MAX_POSITION {
            return;
        }
        let count = width.min(self.direction.room(position));
        let mut value = value;

        for i in 0..count {
            let target = match self.direction {
                DisplayDirection::LowDigitOnRight => position + i,
                DisplayDirection::LowDigitOnLeft => position - i,
            };
            self.send(Command::decode_write(target, (value & 0x0F) as u8));
            value >>= 4;
        }
    }

    /// Displays the magnitude of `value` in fixed point.
    ///
    /// The sign and the decimal point are not rendered.
    ///
    /// # Arguments
    ///
    /// * `value` - Number to show; its absolute value is used
    /// * `position` - Digit for the last fraction figure (0-31)
    /// * `width` - Total digit count, fraction included; bit 7 as in
    ///   [`display_decimal`](Self::display_decimal) for the integer part
    /// * `fraction_digits` - Figures after the implied point (0-7); always
    ///   rendered with leading zeros
    ///
    /// No-op if `fraction_digits > 7`, the digit count in `width` is
    /// smaller than `fraction_digits`, or `position > 31`.
    pub fn display_float(&mut self, value: f32, position: u8, width: u8, fraction_digits: u8) {
        if fraction_digits as usize >= POWERS_OF_TEN.len()
            || (width & WIDTH_MASK) < fraction_digits
            || position > MAX_POSITION
        {
            return;
        }
        let scale = POWERS_OF_TEN[fraction_digits as usize];
        let magnitude = if value < 0.0 { -value } else { value };
        // Scaled in single precision, rounded in double.
        let fixed = (f64::from(magnitude * scale as f32) + 0.5) as u32;

        self.display_decimal(fixed, position, fraction_digits | KEEP_LEADING_ZEROS);
        if let Some(integer_position) = self.direction.offset(position, fraction_digits) {
            self.display_decimal(fixed / scale, integer_position, width - fraction_digits);
        }
    }

    // =========================================================================
    // Blink Control
    // =========================================================================

    /// Starts or stops one digit blinking.
    ///
    /// Digits 0-15 get a dedicated set/clear command. Digits 16-31 update
    /// the cached register byte and write it whole. No-op if `digit > 31`.
    pub fn digit_blink(&mut self, digit: u8, on: bool) {
        if digit > MAX_POSITION {
            return;
        }
        if digit < BLINK_GROUPS {
            let cmd = if on {
                Command::blink_set(digit, ALL_BITS)
            } else {
                Command::blink_clear(digit, ALL_BITS)
            };
            self.send(cmd);
            return;
        }

        let register = BlinkRegister::for_digit(digit);
        let bit = 1u8 << (digit & 0x07);
        let mask = match register {
            BlinkRegister::Low => &mut self.blink_mask_low,
            BlinkRegister::High => &mut self.blink_mask_high,
        };
        if on {
            *mask |= bit;
        } else {
            *mask &= !bit;
        }
        let mask = *mask;
        self.send(Command::blink_digit_control(register, mask));
    }

    /// Cached blink register for digits 16-23.
    #[inline]
    pub fn blink_mask_low(&self) -> u8 {
        self.blink_mask_low
    }

    /// Cached blink register for digits 24-31.
    #[inline]
    pub fn blink_mask_high(&self) -> u8 {
        self.blink_mask_high
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hal::MockSink;

    fn display() -> SegmentDisplay<MockSink> {
        SegmentDisplay::new(MockSink::new())
    }

    fn sent(display: &SegmentDisplay<MockSink>) -> alloc::vec::Vec<(u8, u8)> {
        display.sink().pairs()
    }

    // =========================================================================
    // DisplayDirection Tests
    // =========================================================================

    #[test]
    fn direction_default() {
        assert_eq!(DisplayDirection::default(), DisplayDirection::LowDigitOnRight);
    }

    #[test]
    fn direction_step_right() {
        let dir = DisplayDirection::LowDigitOnRight;
        assert_eq!(dir.step(0), Some(1));
        assert_eq!(dir.step(30), Some(31));
        assert_eq!(dir.step(31), None);
    }

    #[test]
    fn direction_step_left() {
        let dir = DisplayDirection::LowDigitOnLeft;
        assert_eq!(dir.step(31), Some(30));
        assert_eq!(dir.step(1), Some(0));
        assert_eq!(dir.step(0), None);
    }

    #[test]
    fn direction_room() {
        assert_eq!(DisplayDirection::LowDigitOnRight.room(0), 32);
        assert_eq!(DisplayDirection::LowDigitOnRight.room(31), 1);
        assert_eq!(DisplayDirection::LowDigitOnLeft.room(0), 1);
        assert_eq!(DisplayDirection::LowDigitOnLeft.room(31), 32);
    }

    #[test]
    fn direction_from_text() {
        assert_eq!(
            DisplayDirection::from_text("RIGHT"),
            Some(DisplayDirection::LowDigitOnRight)
        );
        assert_eq!(
            DisplayDirection::from_text("left"),
            Some(DisplayDirection::LowDigitOnLeft)
        );
        assert_eq!(DisplayDirection::from_text(""), None);
        assert_eq!(DisplayDirection::from_text("lefty"), None);
    }

    // =========================================================================
    // State Tests
    // =========================================================================

    #[test]
    fn new_sends_nothing() {
        let display = display();
        assert!(display.sink().bytes.is_empty());
        assert!(display.low_digit_on_right());
        assert_eq!(display.blink_mask_low(), 0);
        assert_eq!(display.blink_mask_high(), 0);
    }

    #[test]
    fn set_display_direction_is_pure() {
        let mut display = display();
        display.set_display_direction(false);
        assert!(!display.low_digit_on_right());
        display.set_low_digit_on_right();
        assert_eq!(display.direction(), DisplayDirection::LowDigitOnRight);
        display.set_low_digit_on_left();
        assert_eq!(display.direction(), DisplayDirection::LowDigitOnLeft);
        assert!(display.sink().bytes.is_empty());
    }

    #[test]
    fn send_command_writes_opcode_then_data() {
        let mut display = display();
        display.send_command(0x12, 0x34);
        assert_eq!(display.sink().bytes, [0x12, 0x34]);
    }

    // =========================================================================
    // Clear / Reset Tests
    // =========================================================================

    #[test]
    fn clear_sequence() {
        let mut display = display();
        display.clear();
        let cmds = sent(&display);
        assert_eq!(cmds.len(), 19);
        assert_eq!(cmds[0], (0xF1, 0x00));
        for group in 0..16u8 {
            assert_eq!(cmds[1 + group as usize], (0x20 | group, 0xFF));
        }
        assert_eq!(cmds[17], (0xD0, 0x00));
        assert_eq!(cmds[18], (0xD1, 0x00));
    }

    #[test]
    fn reset_clears_blink_cache() {
        let mut display = display();
        display.digit_blink(16, true);
        display.digit_blink(31, true);
        display.reset();
        assert_eq!(display.blink_mask_low(), 0);
        assert_eq!(display.blink_mask_high(), 0);
        assert_eq!(sent(&display).last(), Some(&(0xFF, 0x5A)));
    }

    // =========================================================================
    // Decimal Tests
    // =========================================================================

    #[test]
    fn decimal_single_digit() {
        let mut display = display();
        display.display_decimal(7, 2, 1);
        assert_eq!(sent(&display), [(0x82, 7)]);
    }

    #[test]
    fn decimal_suppresses_leading_zeros() {
        let mut display = display();
        display.display_decimal(5, 0, 3);
        assert_eq!(sent(&display), [(0x80, 5), (0x81, 0x80), (0x82, 0x80)]);
    }

    #[test]
    fn decimal_keeps_leading_zeros() {
        let mut display = display();
        display.display_decimal(5, 0, 3 | KEEP_LEADING_ZEROS);
        assert_eq!(sent(&display), [(0x80, 5), (0x81, 0), (0x82, 0)]);
    }

    #[test]
    fn decimal_left_direction_decrements() {
        let mut display = display();
        display.set_low_digit_on_left();
        display.display_decimal(123, 5, 3);
        assert_eq!(sent(&display), [(0x85, 3), (0x84, 2), (0x83, 0x81)]);
    }

    // =========================================================================
    // Hex Tests
    // =========================================================================

    #[test]
    fn hex_pads_with_zero_nibbles() {
        let mut display = display();
        display.display_hex(0x1A, 0, 4);
        assert_eq!(sent(&display), [(0x80, 0xA), (0x81, 0x1), (0x82, 0), (0x83, 0)]);
    }

    #[test]
    fn hex_left_direction() {
        let mut display = display();
        display.set_low_digit_on_left();
        display.display_hex(0xBEEF, 3, 4);
        assert_eq!(
            sent(&display),
            [(0x83, 0xF), (0x82, 0xE), (0x81, 0xE), (0x80, 0xB)]
        );
    }

    // =========================================================================
    // Blink Tests
    // =========================================================================

    #[test]
    fn blink_low_digits_use_group_commands() {
        let mut display = display();
        display.digit_blink(3, true);
        display.digit_blink(3, false);
        assert_eq!(sent(&display), [(0x33, 0xFF), (0x23, 0xFF)]);
        assert_eq!(display.blink_mask_low(), 0);
    }

    #[test]
    fn blink_high_digits_write_whole_register() {
        let mut display = display();
        display.digit_blink(24, true);
        display.digit_blink(27, true);
        display.digit_blink(24, false);
        assert_eq!(sent(&display), [(0xD1, 0x01), (0xD1, 0x09), (0xD1, 0x08)]);
        assert_eq!(display.blink_mask_high(), 0x08);
        assert_eq!(display.blink_mask_low(), 0);
    }
}
