//! Edge case and boundary condition tests for the display encoder

use bc759x_display::{hal::MockSink, SegmentDisplay, BLANK_DIGIT, KEEP_LEADING_ZEROS};

fn display() -> SegmentDisplay<MockSink> {
    SegmentDisplay::new(MockSink::new())
}

fn left_display() -> SegmentDisplay<MockSink> {
    let mut display = display();
    display.set_low_digit_on_left();
    display
}

fn positions(display: &SegmentDisplay<MockSink>) -> Vec<u8> {
    display
        .sink()
        .pairs()
        .iter()
        .map(|&(op, _)| op & 0x1F)
        .collect()
}

// ============================================================================
// Precondition No-ops
// ============================================================================

#[test]
fn position_32_is_ignored_everywhere() {
    let mut display = display();
    display.display_decimal(1, 32, 1);
    display.display_hex(1, 32, 1);
    display.display_float(1.0, 32, 2, 1);
    display.digit_blink(32, true);
    display.write_segments(32, 0xFF);
    assert!(display.sink().bytes.is_empty());
}

#[test]
fn position_255_is_ignored_everywhere() {
    let mut display = left_display();
    display.display_decimal(1, 255, 3);
    display.display_hex(1, 255, 3);
    display.display_float(1.0, 255, 3, 1);
    display.digit_blink(255, false);
    assert!(display.sink().bytes.is_empty());
}

#[test]
fn zero_width_decimal_is_ignored() {
    let mut display = display();
    display.display_decimal(123, 0, 0);
    // The keep-zeros bit alone is still zero width.
    display.display_decimal(123, 0, KEEP_LEADING_ZEROS);
    assert!(display.sink().bytes.is_empty());
}

#[test]
fn float_with_eight_fraction_digits_is_ignored() {
    let mut display = display();
    display.display_float(1.0, 0, 10, 8);
    assert!(display.sink().bytes.is_empty());
}

#[test]
fn float_with_width_below_fraction_is_ignored() {
    let mut display = display();
    display.display_float(1.25, 0, 1, 2);
    // The keep-zeros bit does not count towards the width.
    display.display_float(1.25, 0, 1 | KEEP_LEADING_ZEROS, 2);
    assert!(display.sink().bytes.is_empty());
}

#[test]
fn float_width_equal_to_fraction_shows_fraction_only() {
    let mut display = display();
    display.display_float(9.75, 0, 2, 2);
    assert_eq!(display.sink().pairs(), [(0x80, 5), (0x81, 7)]);
}

// ============================================================================
// Right-hand Boundary (low digit on right)
// ============================================================================

#[test]
fn decimal_stops_after_position_31() {
    let mut display = display();
    display.display_decimal(12_345, 30, 5);
    assert_eq!(positions(&display), [30, 31]);
}

#[test]
fn decimal_at_31_sends_only_first_digit() {
    let mut display = display();
    display.display_decimal(99, 31, 2);
    assert_eq!(display.sink().pairs(), [(0x9F, 9)]);
}

#[test]
fn hex_width_clamped_to_end_of_display() {
    let mut display = display();
    display.display_hex(0xABCD, 29, 4);
    assert_eq!(positions(&display), [29, 30, 31]);
}

#[test]
fn hex_full_width_from_zero() {
    let mut display = display();
    display.display_hex(0, 0, 40);
    assert_eq!(display.sink().command_count(), 32);
    assert_eq!(positions(&display), (0..32).collect::<Vec<u8>>());
}

#[test]
fn float_integer_part_beyond_31_is_dropped() {
    let mut display = display();
    display.display_float(12.34, 30, 4, 2);
    // Fraction on 30/31; integer part would start at 32.
    assert_eq!(positions(&display), [30, 31]);
}

// ============================================================================
// Left-hand Boundary (low digit on left)
// ============================================================================

#[test]
fn decimal_reaches_position_zero() {
    let mut display = left_display();
    display.display_decimal(321, 2, 3);
    assert_eq!(
        display.sink().pairs(),
        [(0x82, 1), (0x81, 2), (0x80, 3 | BLANK_DIGIT)]
    );
}

#[test]
fn decimal_stops_below_position_zero() {
    let mut display = left_display();
    display.display_decimal(12_345, 1, 5);
    assert_eq!(positions(&display), [1, 0]);
}

#[test]
fn decimal_at_zero_sends_only_first_digit() {
    let mut display = left_display();
    display.display_decimal(42, 0, 2);
    assert_eq!(display.sink().pairs(), [(0x80, 2)]);
}

#[test]
fn hex_width_clamped_to_start_of_display() {
    let mut display = left_display();
    display.display_hex(0x1234, 1, 4);
    assert_eq!(display.sink().pairs(), [(0x81, 0x4), (0x80, 0x3)]);
}

#[test]
fn float_integer_part_below_zero_is_dropped() {
    let mut display = left_display();
    display.display_float(5.5, 0, 3, 1);
    assert_eq!(display.sink().pairs(), [(0x80, 5)]);
}

// ============================================================================
// Float Rounding
// ============================================================================

#[test]
fn float_rounds_half_up() {
    let mut display = display();
    display.display_float(0.125, 0, 3 | KEEP_LEADING_ZEROS, 2);
    // 12.5 -> 13
    let data: Vec<u8> = display.sink().pairs().iter().map(|&(_, d)| d).collect();
    assert_eq!(data, [3, 1, 0]);
}

#[test]
fn float_rounding_carries_into_integer_part() {
    let mut display = display();
    display.display_float(1.999, 0, 3, 2);
    let data: Vec<u8> = display.sink().pairs().iter().map(|&(_, d)| d).collect();
    assert_eq!(data, [0, 0, 2]);
}

#[test]
fn float_nan_renders_as_zero() {
    let mut display = display();
    display.display_float(f32::NAN, 0, 2, 1);
    assert_eq!(display.sink().pairs(), [(0x80, 0), (0x81, 0)]);
}

#[test]
fn float_too_large_saturates() {
    let mut display = display();
    display.display_float(1.0e12, 0, 1, 0);
    // Saturates to u32::MAX, whose last digit is 5.
    assert_eq!(display.sink().pairs(), [(0x80, 5)]);
}

// ============================================================================
// Blink Register Boundaries
// ============================================================================

#[test]
fn blink_digit_15_uses_group_command() {
    let mut display = display();
    display.digit_blink(15, true);
    assert_eq!(display.sink().pairs(), [(0x3F, 0xFF)]);
}

#[test]
fn blink_digit_16_uses_low_register_bit_0() {
    let mut display = display();
    display.digit_blink(16, true);
    assert_eq!(display.sink().pairs(), [(0xD0, 0x01)]);
}

#[test]
fn blink_digit_23_and_24_split_registers() {
    let mut display = display();
    display.digit_blink(23, true);
    display.digit_blink(24, true);
    assert_eq!(display.sink().pairs(), [(0xD0, 0x80), (0xD1, 0x01)]);
    assert_eq!(display.blink_mask_low(), 0x80);
    assert_eq!(display.blink_mask_high(), 0x01);
}

#[test]
fn blink_digit_31_uses_high_register_bit_7() {
    let mut display = display();
    display.digit_blink(31, true);
    display.digit_blink(31, false);
    assert_eq!(display.sink().pairs(), [(0xD1, 0x80), (0xD1, 0x00)]);
}

#[test]
fn blink_off_for_unset_digit_rewrites_register() {
    let mut display = display();
    display.digit_blink(18, false);
    assert_eq!(display.sink().pairs(), [(0xD0, 0x00)]);
}
