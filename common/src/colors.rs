//! Color constants for the level display.
//!
//! Standard colors come from the `RgbColor` trait constants so they use the
//! exact Rgb565 extremes. Rgb565 packs 5 bits red, 6 bits green and 5 bits
//! blue, the native format of small SPI displays and of the simulator.

use embedded_graphics::pixelcolor::{Rgb565, RgbColor};

// =============================================================================
// Standard Colors
// =============================================================================

/// Pure black. Screen background.
pub const BLACK: Rgb565 = Rgb565::BLACK;

/// Pure white. Readout text.
pub const WHITE: Rgb565 = Rgb565::WHITE;

/// Pure red. Tilted line and popup background.
pub const RED: Rgb565 = Rgb565::RED;

/// Pure green. Level line.
pub const GREEN: Rgb565 = Rgb565::GREEN;

/// Pure yellow. Highlighted stats on the debug page.
pub const YELLOW: Rgb565 = Rgb565::YELLOW;

// =============================================================================
// Level Colors
// =============================================================================

/// Tilt line color while level.
pub const LEVEL_COLOR: Rgb565 = GREEN;

/// Tilt line color while tilted.
pub const TILTED_COLOR: Rgb565 = RED;

/// Spirit-level bubble fill, a pale lime.
/// RGB565: (22, 63, 8).
pub const BUBBLE_COLOR: Rgb565 = Rgb565::new(22, 63, 8);

/// Darker outline around the bubble.
/// RGB565: (10, 40, 2).
pub const BUBBLE_OUTLINE: Rgb565 = Rgb565::new(10, 40, 2);

/// Ring and crosshair color, roughly 40% gray.
/// RGB565: (12, 25, 12).
pub const RING_COLOR: Rgb565 = Rgb565::new(12, 25, 12);

/// Dark gray for dividers and section headers.
/// RGB565: (8, 16, 8).
pub const GRAY: Rgb565 = Rgb565::new(8, 16, 8);

/// Orange for log text on the debug page.
/// RGB565: (31, 32, 0).
pub const ORANGE: Rgb565 = Rgb565::new(31, 32, 0);
