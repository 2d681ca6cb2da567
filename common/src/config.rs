//! Level configuration constants.
//!
//! Filter tuning and screen layout are compile-time constants. The only
//! runtime configuration is the measured [`Layout`](crate::filter::Layout),
//! which the host builds once the screen has been laid out.
//!
//! # Compile-Time Validation
//!
//! Layout constants carry `const` assertions, so an impossible layout (labels
//! wider than the screen, a bubble that cannot move) fails the build.

use embedded_graphics::mono_font::ascii::FONT_6X10;

// =============================================================================
// Display Configuration
// =============================================================================

/// Display width in pixels. The level runs in portrait orientation.
pub const SCREEN_WIDTH: u32 = 240;

/// Display height in pixels.
pub const SCREEN_HEIGHT: u32 = 320;

/// Screen center X coordinate.
pub const CENTER_X: i32 = (SCREEN_WIDTH / 2) as i32;

/// Screen center Y coordinate.
pub const CENTER_Y: i32 = (SCREEN_HEIGHT / 2) as i32;

// =============================================================================
// Filter Configuration
// =============================================================================

/// Number of samples kept per axis for the moving average.
pub const HISTORY_SIZE: usize = 10;

/// Bias of a centered widget along one axis.
pub const HALF_BIAS: f32 = 0.5;

/// Averaged acceleration is divided by this before being added to the bias.
/// 10 m/s² of tilt moves the bubble across the full container.
pub const BIAS_SCALE: f32 = 10.0;

/// Standard gravity in m/s². Axis readouts are percentages of this value.
pub const STANDARD_GRAVITY: f32 = 9.81;

/// Lines within this many degrees of horizontal count as level.
pub const LEVEL_TOLERANCE_DEG: f32 = 1.0;

const _: () = assert!(HISTORY_SIZE > 0);

// =============================================================================
// Level Widget Layout
// =============================================================================

/// Longest readout the label slots must fit (`"Y: -100%"`).
pub const READOUT_TEMPLATE: &str = "Y: -100%";

/// Width of one axis label slot in pixels. The bubble never enters the label
/// slots on either side of the container.
pub const LABEL_WIDTH: u32 = FONT_6X10.character_size.width * READOUT_TEMPLATE.len() as u32;

/// Diameter of the bubble in pixels.
pub const BUBBLE_DIAMETER: u32 = 28;

/// Stroke width of the tilt line.
pub const LINE_STROKE: u32 = 3;

/// Stroke width of the ring.
pub const RING_STROKE: u32 = 2;

/// Baseline of the axis readouts, measured from the top of the container.
pub const READOUT_BASELINE_Y: i32 = 14;

const _: () = assert!(2 * LABEL_WIDTH < SCREEN_WIDTH);
const _: () = assert!(BUBBLE_DIAMETER < SCREEN_WIDTH - 2 * LABEL_WIDTH);
const _: () = assert!(BUBBLE_DIAMETER < SCREEN_HEIGHT);
