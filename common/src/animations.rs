//! Animation effects for the level display.
//!
//! - **Line tint**: the tilt line fades between the level and tilted colors
//!   over a few frames instead of flickering when the angle hovers around the
//!   tolerance.
//! - **Edge shake**: when the bubble is pinned against the limit of its
//!   movement range it wiggles, telling the user the tilt is larger than the
//!   ring can show.
//!
//! Interpolation works on the raw Rgb565 channels with 8-bit fixed point math,
//! the shake uses `micromath` so it stays cheap on targets without an FPU.

use embedded_graphics::{pixelcolor::Rgb565, prelude::IntoStorage};

use crate::colors::{LEVEL_COLOR, TILTED_COLOR};
use crate::geometry::LineState;

// =============================================================================
// Constants
// =============================================================================

/// Maximum shake offset in pixels.
const SHAKE_AMPLITUDE: f32 = 2.0;

/// Shake oscillation speed. At 50 FPS, 0.9 gives about 7 wiggles per second.
const SHAKE_FREQUENCY: f32 = 0.9;

/// Fraction of the remaining distance covered per frame (0.0-1.0).
/// At 0.25 a full green/red swap settles in about 10 frames.
const TINT_LERP_SPEED: f32 = 0.25;

/// Manhattan distance in RGB565 channels below which the tint snaps to target.
const TINT_SNAP_THRESHOLD: i32 = 2;

// =============================================================================
// Edge Shake
// =============================================================================

/// Horizontal shake offset for a bubble pinned at the edge of its range.
///
/// Returns 0 when the bubble moves freely.
#[inline]
pub fn edge_shake_offset(
    frame: u32,
    at_edge: bool,
) -> i32 {
    if !at_edge {
        return 0;
    }
    let phase = frame as f32 * SHAKE_FREQUENCY;
    (micromath::F32(phase).sin().0 * SHAKE_AMPLITUDE) as i32
}

// =============================================================================
// Line Tint
// =============================================================================

/// Fading color of the tilt line.
pub struct LineTint {
    current: Rgb565,
    target: Rgb565,
}

impl LineTint {
    /// Start fully level-colored.
    pub const fn new() -> Self {
        Self {
            current: LEVEL_COLOR,
            target: LEVEL_COLOR,
        }
    }

    /// Color the line should end up with for a state.
    #[inline]
    pub const fn color_for(state: LineState) -> Rgb565 {
        match state {
            LineState::Level => LEVEL_COLOR,
            LineState::Tilted => TILTED_COLOR,
        }
    }

    /// Set the target from the current line state.
    ///
    /// Returns `true` if the target changed.
    pub fn set_state(
        &mut self,
        state: LineState,
    ) -> bool {
        let target = Self::color_for(state);
        if self.target == target {
            false
        } else {
            self.target = target;
            true
        }
    }

    /// Advance the fade by one frame. Returns `true` if the color changed.
    pub fn update(&mut self) -> bool {
        if self.current == self.target {
            return false;
        }

        let next = lerp_rgb565(self.current, self.target, TINT_LERP_SPEED);
        self.current = if colors_close_enough(next, self.target) {
            self.target
        } else {
            next
        };
        true
    }

    /// Color to draw this frame.
    #[inline]
    pub const fn current(&self) -> Rgb565 { self.current }

    /// Whether a fade is in progress.
    #[inline]
    pub fn is_fading(&self) -> bool { self.current != self.target }
}

impl Default for LineTint {
    fn default() -> Self { Self::new() }
}

// =============================================================================
// Color Interpolation Helpers
// =============================================================================

#[inline]
fn channels(color: Rgb565) -> [i32; 3] {
    let raw = color.into_storage();
    [
        i32::from((raw >> 11) & 0x1F),
        i32::from((raw >> 5) & 0x3F),
        i32::from(raw & 0x1F),
    ]
}

/// Linear interpolation between two Rgb565 colors.
///
/// Every non-zero channel delta moves by at least one step, so a fade can
/// never stall short of its target.
fn lerp_rgb565(from: Rgb565, to: Rgb565, t: f32) -> Rgb565 {
    let t_fixed = (t * 256.0) as i32;
    let [fr, fg, fb] = channels(from);
    let [tr, tg, tb] = channels(to);

    let step = |delta: i32| -> i32 {
        if delta == 0 || t_fixed == 0 {
            return 0;
        }
        match (delta * t_fixed) >> 8 {
            0 => delta.signum(),
            s => s,
        }
    };

    let r = (fr + step(tr - fr)).clamp(0, 31);
    let g = (fg + step(tg - fg)).clamp(0, 63);
    let b = (fb + step(tb - fb)).clamp(0, 31);
    Rgb565::new(r as u8, g as u8, b as u8)
}

fn colors_close_enough(a: Rgb565, b: Rgb565) -> bool {
    let [ar, ag, ab] = channels(a);
    let [br, bg, bb] = channels(b);
    (ar - br).abs() + (ag - bg).abs() + (ab - bb).abs() <= TINT_SNAP_THRESHOLD
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    // -------------------------------------------------------------------------
    // Edge Shake Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_no_shake_when_free() {
        assert_eq!(edge_shake_offset(0, false), 0);
        assert_eq!(edge_shake_offset(7, false), 0);
        assert_eq!(edge_shake_offset(1000, false), 0);
    }

    #[test]
    fn test_shake_stays_within_amplitude() {
        let mut moved = false;
        for frame in 0..200 {
            let offset = edge_shake_offset(frame, true);
            assert!(offset.abs() <= SHAKE_AMPLITUDE as i32, "offset {offset} at frame {frame}");
            moved |= offset != 0;
        }
        assert!(moved, "pinned bubble should shake");
    }

    // -------------------------------------------------------------------------
    // Line Tint Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_tint_starts_level() {
        let tint = LineTint::new();
        assert_eq!(tint.current(), LEVEL_COLOR);
        assert!(!tint.is_fading());
    }

    #[test]
    fn test_set_state_reports_changes() {
        let mut tint = LineTint::new();
        assert!(!tint.set_state(LineState::Level));
        assert!(tint.set_state(LineState::Tilted));
        assert!(!tint.set_state(LineState::Tilted));
    }

    #[test]
    fn test_tint_fades_to_tilted() {
        let mut tint = LineTint::new();
        tint.set_state(LineState::Tilted);

        assert!(tint.update());
        assert_ne!(tint.current(), LEVEL_COLOR, "first frame should move");
        assert_ne!(tint.current(), TILTED_COLOR, "fade should take more than one frame");

        let mut frames = 1;
        while tint.update() {
            frames += 1;
            assert!(frames < 64, "fade did not converge");
        }
        assert_eq!(tint.current(), TILTED_COLOR);
        assert!(!tint.is_fading());
    }

    #[test]
    fn test_lerp_minimum_step() {
        // A 1-step difference would round to 0 without the minimum step.
        let from = Rgb565::new(10, 10, 10);
        let to = Rgb565::new(11, 10, 10);
        assert_eq!(lerp_rgb565(from, to, 0.1), to);
    }

    #[test]
    fn test_lerp_zero_t_is_identity() {
        let from = Rgb565::new(3, 4, 5);
        assert_eq!(lerp_rgb565(from, LEVEL_COLOR, 0.0), from);
    }

    #[test]
    fn test_colors_close_enough() {
        assert!(colors_close_enough(Rgb565::new(10, 10, 10), Rgb565::new(11, 11, 10)));
        assert!(!colors_close_enough(Rgb565::new(10, 10, 10), Rgb565::new(12, 11, 10)));
    }
}
