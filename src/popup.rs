//! Popup state with time-based expiration.

use std::time::Instant;

use crate::config::POPUP_DURATION;

/// Active popup with the moment it was triggered.
#[derive(Clone, Copy, Debug)]
pub enum Popup {
    /// "HISTORY RESET" after `R`.
    Reset(Instant),
    /// "SOURCE <name>" after `Space`.
    Source(Instant),
}

impl Popup {
    #[inline]
    pub const fn start_time(&self) -> Instant {
        match self {
            Self::Reset(t) | Self::Source(t) => *t,
        }
    }

    /// Check if this popup has expired.
    #[inline]
    pub fn is_expired(&self) -> bool { self.is_expired_at(Instant::now()) }

    /// Check expiry against an explicit clock reading.
    #[inline]
    pub fn is_expired_at(
        &self,
        now: Instant,
    ) -> bool {
        now.saturating_duration_since(self.start_time()) >= POPUP_DURATION
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    #[test]
    fn test_popup_expiry() {
        let start = Instant::now();
        let popup = Popup::Reset(start);

        assert!(!popup.is_expired_at(start));
        assert!(!popup.is_expired_at(start + POPUP_DURATION - Duration::from_millis(1)));
        assert!(popup.is_expired_at(start + POPUP_DURATION));
    }

    #[test]
    fn test_start_time() {
        let start = Instant::now();
        assert_eq!(Popup::Source(start).start_time(), start);
    }
}
