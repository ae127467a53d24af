//! ANSI color codes for terminal output.
//!
//! One color per comparison side plus a dim modifier:
//! - Blue: left elements
//! - Green: right elements
//! - Yellow: origin elements, warnings
//! - Dim: structure and empty slots
//! - Reset: Return to default

use crate::Side;

/// ANSI color palette for CLI output.
///
/// Uses only standard 16-color ANSI codes (no RGB).
#[derive(Clone, Copy, Debug)]
pub struct Colors {
    pub blue: &'static str,
    pub green: &'static str,
    pub yellow: &'static str,
    pub red: &'static str,
    pub dim: &'static str,
    pub reset: &'static str,
}

impl Default for Colors {
    fn default() -> Self {
        Self::OFF
    }
}

impl Colors {
    /// Colors enabled (ANSI escape codes).
    pub const ON: Self = Self {
        blue: "\x1b[34m",
        green: "\x1b[32m",
        yellow: "\x1b[33m",
        red: "\x1b[31m",
        dim: "\x1b[2m",
        reset: "\x1b[0m",
    };

    /// Colors disabled (empty strings).
    pub const OFF: Self = Self {
        blue: "",
        green: "",
        yellow: "",
        red: "",
        dim: "",
        reset: "",
    };

    pub fn new(enabled: bool) -> Self {
        if enabled { Self::ON } else { Self::OFF }
    }

    pub fn is_enabled(&self) -> bool {
        !self.blue.is_empty()
    }

    /// Color used for elements of `side`.
    pub fn side(&self, side: Side) -> &'static str {
        match side {
            Side::Left => self.blue,
            Side::Right => self.green,
            Side::Origin => self.yellow,
        }
    }
}
