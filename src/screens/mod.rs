//! Screens outside the level page.
//!
//! - **Boot** ([`boot`]): console-style startup messages with a spinner,
//!   shown once before the main loop
//! - **Debug** ([`debug`]): frame timing, filter counters and the debug log
//!   terminal, toggled with `D`
//!
//! The boot screen returns `false` if the window is closed, so the
//! application exits without entering the main loop.

mod boot;
mod debug;

pub use boot::run_boot_screen;
pub use debug::draw_debug_page;
