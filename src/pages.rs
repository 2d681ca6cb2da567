//! Page navigation.
//!
//! Press `D` to toggle between the level and the debug view.

/// Available pages.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
pub enum Page {
    /// Ring, bubble, tilt line and axis readouts.
    #[default]
    Level,

    /// Frame timing, filter counters and the debug log terminal.
    Debug,
}

impl Page {
    /// Toggle to the other page.
    #[inline]
    pub const fn toggle(self) -> Self {
        match self {
            Self::Level => Self::Debug,
            Self::Debug => Self::Level,
        }
    }

    /// Name shown in the debug log.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Level => "Level",
            Self::Debug => "Debug",
        }
    }
}
