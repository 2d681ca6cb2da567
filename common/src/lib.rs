//! Platform-independent core of the bubble level.
//!
//! This crate turns raw accelerometer samples into everything the level
//! screen shows, and draws it on any `embedded-graphics` target:
//!
//! - [`filter`]: `LevelFilter`, the smoothing/clamping state machine
//! - [`history`]: fixed-capacity sample history (moving average window)
//! - [`geometry`]: tilt line angle, length and level/tilted state
//! - [`readout`]: axis readouts as a percentage of standard gravity
//! - [`error`]: `LevelError`
//! - [`colors`], [`styles`], [`config`]: display constants
//! - [`animations`]: line tint fade and edge shake
//! - [`widgets`]: ring, bubble, tilt line, readouts and popups
//! - [`profiling`]: on-screen debug log ring buffer
//!
//! # no_std Compatibility
//!
//! The crate is `no_std` and allocation free. Math goes through `libm`, so
//! results are identical on the desktop host and on embedded targets.
//! Tests run with `std` enabled (via `cfg_attr`) for the standard test harness.

// Use no_std only when NOT testing (tests need std for the test harness)
#![cfg_attr(not(test), no_std)]
// Crate-level lints
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]

pub mod animations;
pub mod colors;
pub mod config;
pub mod error;
pub mod filter;
pub mod geometry;
pub mod history;
pub mod profiling;
pub mod readout;
pub mod styles;
pub mod widgets;

// Re-export commonly used items
pub use error::LevelError;
pub use filter::{AccelSample, BubblePosition, Layout, LevelFilter, LevelReading, MoveRange};
pub use geometry::{LineGeometry, LineState, line_geometry};
pub use readout::{AxisReadout, format_axis_reading};
