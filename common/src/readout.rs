//! Axis readouts as a percentage of standard gravity.
//!
//! A device lying flat reads `X: 0%` / `Y: 0%`; standing on its left edge it
//! reads `X: 100%`. Formatting uses `heapless::String` and `core::fmt::Write`,
//! no allocation.

use core::fmt::Write;

use heapless::String;

use crate::config::STANDARD_GRAVITY;

/// Capacity of one readout string. Fits `"X: -2147483648%"`.
pub const READOUT_LEN: usize = 16;

/// Formatted readouts for both axes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AxisReadout {
    pub x_percent: i32,
    pub y_percent: i32,
    pub x_text: String<READOUT_LEN>,
    pub y_text: String<READOUT_LEN>,
}

/// Acceleration as a whole percentage of standard gravity.
///
/// Halves round towards positive infinity (`-2.5` becomes `-2`).
/// NaN reads as 0; infinities saturate.
#[inline]
pub fn gravity_percent(value: f32) -> i32 { libm::floorf(value / STANDARD_GRAVITY * 100.0 + 0.5) as i32 }

/// Format raw x/y acceleration for the two axis labels.
pub fn format_axis_reading(
    x: f32,
    y: f32,
) -> AxisReadout {
    let x_percent = gravity_percent(x);
    let y_percent = gravity_percent(y);

    let mut x_text = String::new();
    let _ = write!(x_text, "X: {x_percent}%");
    let mut y_text = String::new();
    let _ = write!(y_text, "Y: {y_percent}%");

    AxisReadout {
        x_percent,
        y_percent,
        x_text,
        y_text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_gravity_on_x() {
        let readout = format_axis_reading(9.81, 0.0);
        assert_eq!(readout.x_text.as_str(), "X: 100%");
        assert_eq!(readout.y_text.as_str(), "Y: 0%");
    }

    #[test]
    fn test_negative_readout() {
        let readout = format_axis_reading(0.0, -4.905);
        assert_eq!(readout.y_percent, -50);
        assert_eq!(readout.y_text.as_str(), "Y: -50%");
    }

    #[test]
    fn test_rounding_to_nearest() {
        // 0.1 / 9.81 = 1.02%
        assert_eq!(gravity_percent(0.1), 1);
        // 0.05 / 9.81 = 0.51%
        assert_eq!(gravity_percent(0.05), 1);
        // 0.04 / 9.81 = 0.41%
        assert_eq!(gravity_percent(0.04), 0);
        // -0.05 / 9.81 = -0.51%
        assert_eq!(gravity_percent(-0.05), -1);
    }

    #[test]
    fn test_over_one_g() {
        let readout = format_axis_reading(19.62, -19.62);
        assert_eq!(readout.x_text.as_str(), "X: 200%");
        assert_eq!(readout.y_text.as_str(), "Y: -200%");
    }

    #[test]
    fn test_non_finite_reads_zero() {
        assert_eq!(gravity_percent(f32::NAN), 0);
    }

    #[test]
    fn test_longest_readout_fits() {
        let readout = format_axis_reading(f32::MIN, f32::MIN);
        assert_eq!(readout.x_percent, i32::MIN);
        assert_eq!(readout.x_text.as_str(), "X: -2147483648%");
    }
}
