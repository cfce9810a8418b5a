//! Human-readable byte counts
//!
//! Sizes are `u64` bytes everywhere; floating point only appears here, at the
//! display boundary.

use std::fmt;

/// Unit names, each 1024 times the previous one.
pub const UNITS: [&str; 9] = ["B", "KB", "MB", "GB", "TB", "PB", "EB", "ZB", "YB"];

const STEP: u64 = 1024;

/// A byte count scaled to its largest whole unit and rounded to 2 decimals.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FormattedSize {
    pub magnitude: f64,
    pub unit: &'static str,
}

impl FormattedSize {
    pub fn new(bytes: u64) -> Self {
        let index = unit_index(bytes);
        let scaled = bytes as f64 / (STEP as f64).powi(index as i32);
        Self {
            magnitude: round2(scaled),
            unit: UNITS[index],
        }
    }
}

impl fmt::Display for FormattedSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Whole magnitudes keep one fractional digit ("1.0 KB"); others use
        // the shortest exact representation ("1.46 KB").
        if self.magnitude.fract() == 0.0 {
            write!(f, "{:.1} {}", self.magnitude, self.unit)
        } else {
            write!(f, "{} {}", self.magnitude, self.unit)
        }
    }
}

/// Format a size in bytes to human-readable form.
///
/// Zero is the one case rendered without a space: `"0B"`.
pub fn format_size(bytes: u64) -> String {
    if bytes == 0 {
        return "0B".to_string();
    }
    FormattedSize::new(bytes).to_string()
}

/// `floor(log_1024(bytes))`, saturated to the last entry of [`UNITS`].
///
/// Integer division avoids the float log landing one unit low on exact
/// powers of 1024.
fn unit_index(bytes: u64) -> usize {
    let mut index = 0;
    let mut rest = bytes;
    while rest >= STEP && index < UNITS.len() - 1 {
        rest /= STEP;
        index += 1;
    }
    index
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
