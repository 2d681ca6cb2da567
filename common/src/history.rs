//! Fixed-capacity sample history for the moving average.
//!
//! Backed by a `heapless::Deque`, so pushing and evicting are O(1) and no
//! allocation happens per sample.

use heapless::Deque;

use crate::config::HISTORY_SIZE;

/// The last [`HISTORY_SIZE`] readings of one axis, oldest first.
pub struct SampleHistory {
    samples: Deque<f32, HISTORY_SIZE>,
}

impl SampleHistory {
    /// Create an empty history.
    pub const fn new() -> Self { Self { samples: Deque::new() } }

    /// Record a reading. If the history is full, the oldest reading is dropped.
    pub fn push(
        &mut self,
        value: f32,
    ) {
        if self.samples.is_full() {
            self.samples.pop_front();
        }
        // Cannot fail: a slot was freed above.
        self.samples.push_back(value).ok();
    }

    /// Arithmetic mean of the recorded readings, `None` when empty.
    pub fn average(&self) -> Option<f32> {
        if self.samples.is_empty() {
            return None;
        }
        let sum: f32 = self.samples.iter().sum();
        Some(sum / self.samples.len() as f32)
    }

    /// Iterate over readings, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &f32> { self.samples.iter() }

    #[inline]
    pub fn len(&self) -> usize { self.samples.len() }

    #[inline]
    pub fn is_empty(&self) -> bool { self.samples.is_empty() }

    #[inline]
    pub fn is_full(&self) -> bool { self.samples.is_full() }

    /// Forget all readings.
    pub fn clear(&mut self) { self.samples.clear(); }
}

impl Default for SampleHistory {
    fn default() -> Self { Self::new() }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_history_starts_empty() {
        let history = SampleHistory::new();
        assert!(history.is_empty());
        assert_eq!(history.average(), None);
    }

    #[test]
    fn test_history_average() {
        let mut history = SampleHistory::new();
        history.push(1.0);
        history.push(2.0);
        history.push(6.0);
        assert_eq!(history.len(), 3);
        assert!((history.average().unwrap() - 3.0).abs() < 1e-6);
    }

    #[test]
    fn test_history_is_bounded() {
        let mut history = SampleHistory::new();
        for i in 0..(HISTORY_SIZE * 3) {
            history.push(i as f32);
            assert!(history.len() <= HISTORY_SIZE, "history grew past capacity");
        }
        assert!(history.is_full());
    }

    #[test]
    fn test_history_evicts_oldest_first() {
        let mut history = SampleHistory::new();
        history.push(100.0);
        for _ in 0..HISTORY_SIZE {
            history.push(0.0);
        }

        // The 100.0 reading was the oldest and must be gone.
        assert_eq!(history.iter().next(), Some(&0.0));
        assert_eq!(history.average(), Some(0.0));
    }

    #[test]
    fn test_history_clear() {
        let mut history = SampleHistory::new();
        history.push(4.0);
        history.clear();
        assert!(history.is_empty());
        assert_eq!(history.average(), None);
    }
}
