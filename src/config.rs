//! Host timing and input configuration.
//!
//! These constants use `std::time::Duration`, which is not available in
//! `no_std`, so they live here rather than in `level-common`.

use std::time::Duration;

/// Target frame time (~50 FPS). The main loop sleeps if a frame completes early.
pub const FRAME_TIME: Duration = Duration::from_millis(20);

/// Accelerometer samples delivered per frame (~100 Hz sensor rate).
pub const SAMPLES_PER_FRAME: u32 = 2;

/// Duration that popups remain visible on screen.
pub const POPUP_DURATION: Duration = Duration::from_secs(2);

/// Pixel scale of the simulator window.
pub const WINDOW_SCALE: u32 = 2;

/// Window title.
pub const WINDOW_TITLE: &str = "Bubble Level";

/// Acceleration added per arrow key press in manual mode, in m/s².
pub const TILT_STEP: f32 = 0.25;

/// Log filter used when `RUST_LOG` is not set.
pub const DEFAULT_LOG_FILTER: &str = "info";

const _: () = assert!(SAMPLES_PER_FRAME > 0);
