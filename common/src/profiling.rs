//! On-screen debug log.
//!
//! A small ring of text lines shown on the debug page. It complements
//! `tracing` output on the host: lines land here even on targets without a
//! console. Time-dependent frame metrics live in the host crate.
//!
//! # Usage
//!
//! ```ignore
//! let mut log = DebugLog::new();
//! log.push("Layout ready");
//! log.push_fmt(format_args!("Tilted {:.1} deg", angle));
//!
//! for line in log.iter() {
//!     // draw line
//! }
//! ```

use core::fmt::{self, Write};

use heapless::{Deque, String};

// =============================================================================
// Debug Log Configuration
// =============================================================================

/// Number of lines kept in the ring buffer.
pub const LOG_BUFFER_SIZE: usize = 10;

/// Maximum characters per line (one 6px glyph short of the 240px screen).
pub const LOG_LINE_LENGTH: usize = 38;

/// One stored log line.
pub type LogLine = String<LOG_LINE_LENGTH>;

// =============================================================================
// Debug Log Ring Buffer
// =============================================================================

/// Ring buffer of the last [`LOG_BUFFER_SIZE`] log lines, oldest first.
pub struct DebugLog {
    lines: Deque<LogLine, LOG_BUFFER_SIZE>,
}

impl DebugLog {
    pub const fn new() -> Self { Self { lines: Deque::new() } }

    /// Append a line, truncating it to [`LOG_LINE_LENGTH`] characters.
    pub fn push(
        &mut self,
        msg: &str,
    ) {
        self.push_fmt(format_args!("{msg}"));
    }

    /// Append a formatted line, truncating it to [`LOG_LINE_LENGTH`]
    /// characters.
    pub fn push_fmt(
        &mut self,
        args: fmt::Arguments<'_>,
    ) {
        let mut line = Truncating(LogLine::new());
        let _ = line.write_fmt(args);

        if self.lines.is_full() {
            self.lines.pop_front();
        }
        self.lines.push_back(line.0).ok();
    }

    /// Iterate over lines, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &str> { self.lines.iter().map(|line| line.as_str()) }

    #[inline]
    pub fn len(&self) -> usize { self.lines.len() }

    #[inline]
    pub fn is_empty(&self) -> bool { self.lines.is_empty() }
}

impl Default for DebugLog {
    fn default() -> Self { Self::new() }
}

/// Writer that keeps what fits and silently drops the rest.
struct Truncating(LogLine);

impl Write for Truncating {
    fn write_str(
        &mut self,
        s: &str,
    ) -> fmt::Result {
        for c in s.chars() {
            if self.0.push(c).is_err() {
                break;
            }
        }
        Ok(())
    }
}

// =============================================================================
// Tests
// =============================================================================
