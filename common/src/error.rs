//! Errors reported by the level filter.
//!
//! Every variant is a precondition violation on the caller's side. They are
//! returned instead of producing a bubble position from garbage state.

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LevelError {
    /// A sample was fed or a position requested before `configure`.
    #[error("level filter used before the layout was configured")]
    NotConfigured,

    /// A position was requested before the first sample arrived.
    #[error("no samples recorded yet")]
    EmptyHistory,

    /// The container has no area to move the bubble in.
    #[error("invalid container size {width}x{height}")]
    InvalidLayout { width: u32, height: u32 },
}
