//! Display configuration shared by desktop tools and firmware.
//!
//! # Example
//!
//! ```rust
//! use bc759x_display::config::{ChipModel, DisplayConfig, UartSettings};
//! use bc759x_display::DisplayDirection;
//!
//! // Use defaults (BC7591, low digit on right, 9600 baud)
//! let config = DisplayConfig::default();
//! assert_eq!(config.max_position(), 31);
//!
//! // Or customize
//! let config = DisplayConfig::default()
//!     .with_chip(ChipModel::Bc7595)
//!     .with_direction(DisplayDirection::LowDigitOnLeft)
//!     .with_uart(UartSettings::default().with_baud_rate(19_200));
//! assert_eq!(config.max_position(), 5);
//! assert_eq!(config.digit_position(0), Some(5));
//! ```

use crate::DisplayDirection;

/// Default baud rate of the BC759x UART interface.
pub const DEFAULT_BAUD_RATE: u32 = 9600;

// ============================================================================
// Chip Model
// ============================================================================

/// Supported members of the BC759x family.
///
/// The model is informational: addressing is always 0-31, and the chip
/// simply ignores digits it does not have.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ChipModel {
    /// 32 digits (256 segments), 96-key keyboard interface.
    #[default]
    Bc7591,
    /// 6 digits (48 segments), 48-key keyboard interface.
    Bc7595,
}

impl ChipModel {
    /// Number of digits the chip drives.
    #[inline]
    pub const fn digit_count(&self) -> u8 {
        match self {
            ChipModel::Bc7591 => 32,
            ChipModel::Bc7595 => 6,
        }
    }

    /// Number of keys the chip scans.
    #[inline]
    pub const fn key_count(&self) -> u8 {
        match self {
            ChipModel::Bc7591 => 96,
            ChipModel::Bc7595 => 48,
        }
    }

    /// Returns the model name in lowercase.
    #[inline]
    pub const fn as_str(&self) -> &'static str {
        match self {
            ChipModel::Bc7591 => "bc7591",
            ChipModel::Bc7595 => "bc7595",
        }
    }

    /// Parse a model name.
    ///
    /// Accepts `"bc7591"`/`"7591"` and `"bc7595"`/`"7595"`, trimmed and
    /// case-insensitive.
    ///
    /// # Examples
    ///
    /// ```
    /// use bc759x_display::config::ChipModel;
    ///
    /// assert_eq!(ChipModel::from_text("BC7591"), Some(ChipModel::Bc7591));
    /// assert_eq!(ChipModel::from_text(" 7595 "), Some(ChipModel::Bc7595));
    /// assert_eq!(ChipModel::from_text("bc7590"), None);
    /// ```
    pub fn from_text(s: &str) -> Option<Self> {
        let s = s.trim();
        let number = match s.get(..2) {
            Some(prefix) if prefix.eq_ignore_ascii_case("bc") => &s[2..],
            _ => s,
        };
        match number {
            "7591" => Some(ChipModel::Bc7591),
            "7595" => Some(ChipModel::Bc7595),
            _ => None,
        }
    }
}

// ============================================================================
// UART Settings
// ============================================================================

/// Serial link settings.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UartSettings {
    /// Baud rate in bits per second
    pub baud_rate: u32,
}

impl Default for UartSettings {
    fn default() -> Self {
        Self {
            baud_rate: DEFAULT_BAUD_RATE,
        }
    }
}

impl UartSettings {
    /// Set the baud rate
    pub fn with_baud_rate(mut self, baud_rate: u32) -> Self {
        self.baud_rate = baud_rate;
        self
    }
}

// ============================================================================
// Display Config
// ============================================================================

/// Complete display configuration
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DisplayConfig {
    /// Chip model on the board
    pub chip: ChipModel,
    /// Which end of the board carries digit 0
    pub direction: DisplayDirection,
    /// Serial link settings
    pub uart: UartSettings,
    /// Send a clear sequence when the encoder is created
    pub clear_on_init: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            chip: ChipModel::default(),
            direction: DisplayDirection::default(),
            uart: UartSettings::default(),
            clear_on_init: true,
        }
    }
}

impl DisplayConfig {
    /// Set the chip model
    pub fn with_chip(mut self, chip: ChipModel) -> Self {
        self.chip = chip;
        self
    }

    /// Set the addressing direction
    pub fn with_direction(mut self, direction: DisplayDirection) -> Self {
        self.direction = direction;
        self
    }

    /// Set the serial link settings
    pub fn with_uart(mut self, uart: UartSettings) -> Self {
        self.uart = uart;
        self
    }

    /// Set whether the display is cleared on init
    pub fn with_clear_on_init(mut self, clear: bool) -> Self {
        self.clear_on_init = clear;
        self
    }

    /// Highest digit position present on the configured chip.
    #[inline]
    pub fn max_position(&self) -> u8 {
        self.chip.digit_count() - 1
    }

    /// Position of the `index`-th digit counted from the low end of the
    /// board.
    ///
    /// With the low digit on the left, index 0 is the highest position the
    /// chip has. Returns `None` past the chip's last digit.
    pub fn digit_position(&self, index: u8) -> Option<u8> {
        let max = self.max_position();
        match self.direction {
            DisplayDirection::LowDigitOnRight => (index <= max).then_some(index),
            DisplayDirection::LowDigitOnLeft => max.checked_sub(index),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = DisplayConfig::default();
        assert_eq!(config.chip, ChipModel::Bc7591);
        assert_eq!(config.direction, DisplayDirection::LowDigitOnRight);
        assert_eq!(config.uart.baud_rate, 9600);
        assert!(config.clear_on_init);
    }

    #[test]
    fn builder_chain() {
        let config = DisplayConfig::default()
            .with_chip(ChipModel::Bc7595)
            .with_direction(DisplayDirection::LowDigitOnLeft)
            .with_uart(UartSettings::default().with_baud_rate(19_200))
            .with_clear_on_init(false);
        assert_eq!(config.chip, ChipModel::Bc7595);
        assert_eq!(config.direction, DisplayDirection::LowDigitOnLeft);
        assert_eq!(config.uart.baud_rate, 19_200);
        assert!(!config.clear_on_init);
    }

    #[test]
    fn chip_geometry() {
        assert_eq!(ChipModel::Bc7591.digit_count(), 32);
        assert_eq!(ChipModel::Bc7595.digit_count(), 6);
        assert_eq!(ChipModel::Bc7591.key_count(), 96);
        assert_eq!(ChipModel::Bc7595.key_count(), 48);
    }

    #[test]
    fn digit_position_follows_direction() {
        let right = DisplayConfig::default().with_chip(ChipModel::Bc7595);
        assert_eq!(right.digit_position(0), Some(0));
        assert_eq!(right.digit_position(5), Some(5));
        assert_eq!(right.digit_position(6), None);

        let left = right.with_direction(DisplayDirection::LowDigitOnLeft);
        assert_eq!(left.digit_position(0), Some(5));
        assert_eq!(left.digit_position(5), Some(0));
        assert_eq!(left.digit_position(6), None);

        let wide = DisplayConfig::default().with_direction(DisplayDirection::LowDigitOnLeft);
        assert_eq!(wide.digit_position(8), Some(23));
        assert_eq!(wide.digit_position(12), Some(19));
    }

    #[test]
    fn chip_from_text() {
        assert_eq!(ChipModel::from_text("bc7595"), Some(ChipModel::Bc7595));
        assert_eq!(ChipModel::from_text("Bc7591"), Some(ChipModel::Bc7591));
        assert_eq!(ChipModel::from_text("7591"), Some(ChipModel::Bc7591));
        assert_eq!(ChipModel::from_text("bc"), None);
        assert_eq!(ChipModel::from_text(""), None);
        assert_eq!(ChipModel::from_text("bc75910"), None);
    }

    #[test]
    fn chip_as_str_roundtrips_through_from_text() {
        for chip in [ChipModel::Bc7591, ChipModel::Bc7595] {
            assert_eq!(ChipModel::from_text(chip.as_str()), Some(chip));
        }
    }
}
