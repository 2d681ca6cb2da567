//! Accelerometer smoothing and bubble placement.
//!
//! [`LevelFilter`] owns two [`SampleHistory`] buffers (one per axis), averages
//! them and turns the result into a bias inside the level container:
//!
//! ```text
//! bias = clamp(0.5 + average / 10, 0.5 - range / 2, 0.5 + range / 2)
//! ```
//!
//! The filter is a two-state machine. It starts **unconfigured**; the host
//! calls [`LevelFilter::configure`] once the container and label sizes are
//! known, which moves it to **ready**. Sampling while unconfigured is an
//! error, not a silent no-op.
//!
//! # Usage
//!
//! ```ignore
//! let mut filter = LevelFilter::new();
//! filter.configure(Layout::new(240, 320, 48))?;
//!
//! // In the sensor callback
//! let reading = filter.update(AccelSample::new(x, y))?;
//! draw_bubble(&mut display, &area, reading.position);
//! ```

use crate::config::{BIAS_SCALE, HALF_BIAS};
use crate::error::LevelError;
use crate::geometry::{LineGeometry, line_geometry};
use crate::history::SampleHistory;
use crate::readout::{AxisReadout, format_axis_reading};

// =============================================================================
// Inputs
// =============================================================================

/// One raw accelerometer reading in m/s², device axes.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AccelSample {
    pub x: f32,
    pub y: f32,
}

impl AccelSample {
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self { Self { x, y } }
}

/// Measured container and label sizes in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    /// Width of the container the bubble moves in.
    pub container_width: u32,
    /// Height of the container the bubble moves in.
    pub container_height: u32,
    /// Width of one axis label slot. Slots sit on both sides of the container.
    pub label_width: u32,
}

impl Layout {
    #[inline]
    pub const fn new(container_width: u32, container_height: u32, label_width: u32) -> Self {
        Self {
            container_width,
            container_height,
            label_width,
        }
    }
}

// =============================================================================
// Movement Range
// =============================================================================

/// Fraction of the container width the bubble may travel, in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MoveRange(f32);

impl MoveRange {
    /// Derive the range from a layout: the container minus a label slot on
    /// each side, as a fraction of the container width.
    ///
    /// Labels wider than half the container leave no room and give 0.
    pub fn from_layout(layout: &Layout) -> Result<Self, LevelError> {
        if layout.container_width == 0 || layout.container_height == 0 {
            return Err(LevelError::InvalidLayout {
                width: layout.container_width,
                height: layout.container_height,
            });
        }

        let width = layout.container_width as f32;
        let span = width - 2.0 * layout.label_width as f32;
        Ok(Self((span / width).clamp(0.0, 1.0)))
    }

    #[inline]
    pub const fn get(self) -> f32 { self.0 }

    /// Lower and upper bias limits for either axis.
    #[inline]
    pub fn bounds(self) -> (f32, f32) {
        let half = self.0 / 2.0;
        (HALF_BIAS - half, HALF_BIAS + half)
    }

    /// Clamp one axis bias into the allowed interval.
    #[inline]
    pub fn clamp(
        self,
        bias: f32,
    ) -> f32 {
        let (low, high) = self.bounds();
        bias.clamp(low, high)
    }
}

// =============================================================================
// Outputs
// =============================================================================

/// Normalized bubble position. `(0.5, 0.5)` is the container center,
/// `(0, 0)` its top-left corner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BubblePosition {
    pub x: f32,
    pub y: f32,
}

impl BubblePosition {
    /// The centered position of a level device.
    pub const CENTER: Self = Self {
        x: HALF_BIAS,
        y: HALF_BIAS,
    };

    /// True when either axis sits on a limit of `range`, i.e. the tilt is
    /// larger than the container can show.
    pub fn is_at_edge(
        &self,
        range: MoveRange,
    ) -> bool {
        let (low, high) = range.bounds();
        self.x <= low || self.x >= high || self.y <= low || self.y >= high
    }
}

/// Everything one processed sample produces for the view layer.
#[derive(Debug, Clone, PartialEq)]
pub struct LevelReading {
    /// The raw sample, unfiltered.
    pub sample: AccelSample,
    pub position: BubblePosition,
    pub geometry: LineGeometry,
    /// Formatted from the raw sample, not the average.
    pub readout: AxisReadout,
}

// =============================================================================
// Level Filter
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq)]
enum FilterState {
    Unconfigured,
    Ready { layout: Layout, range: MoveRange },
}

/// Moving-average filter that places the bubble.
pub struct LevelFilter {
    state: FilterState,
    x_history: SampleHistory,
    y_history: SampleHistory,
}

impl LevelFilter {
    /// Create an unconfigured filter with empty histories.
    pub const fn new() -> Self {
        Self {
            state: FilterState::Unconfigured,
            x_history: SampleHistory::new(),
            y_history: SampleHistory::new(),
        }
    }

    /// Apply a measured layout and enter the ready state.
    ///
    /// Calling this again after a layout change replaces the range and keeps
    /// the recorded samples.
    pub fn configure(
        &mut self,
        layout: Layout,
    ) -> Result<MoveRange, LevelError> {
        let range = MoveRange::from_layout(&layout)?;
        tracing::debug!(
            width = layout.container_width,
            height = layout.container_height,
            label = layout.label_width,
            range = range.get(),
            "level filter configured"
        );
        self.state = FilterState::Ready { layout, range };
        Ok(range)
    }

    /// Whether [`configure`](Self::configure) has been called.
    #[inline]
    pub const fn is_ready(&self) -> bool { matches!(self.state, FilterState::Ready { .. }) }

    /// The configured layout.
    pub const fn layout(&self) -> Option<Layout> {
        match self.state {
            FilterState::Ready { layout, .. } => Some(layout),
            FilterState::Unconfigured => None,
        }
    }

    /// The configured movement range.
    pub const fn move_range(&self) -> Option<MoveRange> {
        match self.state {
            FilterState::Ready { range, .. } => Some(range),
            FilterState::Unconfigured => None,
        }
    }

    /// Number of samples currently averaged per axis.
    #[inline]
    pub fn sample_count(&self) -> usize { self.x_history.len() }

    /// Record a raw sample.
    ///
    /// The y reading is stored negated: the device y axis points up while the
    /// vertical bias grows downwards.
    pub fn add_sample(
        &mut self,
        sample: AccelSample,
    ) -> Result<(), LevelError> {
        if !self.is_ready() {
            return Err(LevelError::NotConfigured);
        }
        self.x_history.push(sample.x);
        self.y_history.push(-sample.y);
        tracing::trace!(x = sample.x, y = sample.y, "sample recorded");
        Ok(())
    }

    /// Smoothed and clamped bubble position.
    ///
    /// Pure with respect to the history: two calls without a sample in
    /// between return the same position.
    pub fn bubble_position(&self) -> Result<BubblePosition, LevelError> {
        let FilterState::Ready { range, .. } = self.state else {
            return Err(LevelError::NotConfigured);
        };
        let (Some(avg_x), Some(avg_y)) = (self.x_history.average(), self.y_history.average()) else {
            return Err(LevelError::EmptyHistory);
        };

        Ok(BubblePosition {
            x: range.clamp(HALF_BIAS + avg_x / BIAS_SCALE),
            y: range.clamp(HALF_BIAS + avg_y / BIAS_SCALE),
        })
    }

    /// Process one sensor event: record it, then derive position, line and
    /// readouts for the view.
    pub fn update(
        &mut self,
        sample: AccelSample,
    ) -> Result<LevelReading, LevelError> {
        self.add_sample(sample)?;
        let position = self.bubble_position()?;
        let layout = self.layout().ok_or(LevelError::NotConfigured)?;
        let geometry = line_geometry(
            position,
            layout.container_width as f32,
            layout.container_height as f32,
        );

        Ok(LevelReading {
            sample,
            position,
            geometry,
            readout: format_axis_reading(sample.x, sample.y),
        })
    }

    /// Drop all recorded samples. The configuration is kept.
    pub fn reset(&mut self) {
        self.x_history.clear();
        self.y_history.clear();
        tracing::debug!("level history cleared");
    }
}

impl Default for LevelFilter {
    fn default() -> Self { Self::new() }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{HISTORY_SIZE, LABEL_WIDTH, SCREEN_HEIGHT, SCREEN_WIDTH};
    use crate::geometry::LineState;

    const EPS: f32 = 1e-5;

    /// 240px container with 48px labels: range 0.6, bounds [0.2, 0.8].
    fn ready_filter() -> LevelFilter {
        let mut filter = LevelFilter::new();
        filter
            .configure(Layout::new(SCREEN_WIDTH, SCREEN_HEIGHT, LABEL_WIDTH))
            .unwrap();
        filter
    }

    // -------------------------------------------------------------------------
    // Configuration Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_move_range_from_layout() {
        let range = MoveRange::from_layout(&Layout::new(240, 320, 48)).unwrap();
        assert!((range.get() - 0.6).abs() < EPS);

        let (low, high) = range.bounds();
        assert!((low - 0.2).abs() < EPS);
        assert!((high - 0.8).abs() < EPS);
    }

    #[test]
    fn test_move_range_without_labels_spans_container() {
        let range = MoveRange::from_layout(&Layout::new(200, 200, 0)).unwrap();
        assert!((range.get() - 1.0).abs() < EPS);
    }

    #[test]
    fn test_move_range_oversized_labels_clamp_to_zero() {
        let range = MoveRange::from_layout(&Layout::new(100, 100, 80)).unwrap();
        assert_eq!(range.get(), 0.0);
        assert_eq!(range.clamp(0.9), HALF_BIAS);
    }

    #[test]
    fn test_configure_rejects_empty_container() {
        let mut filter = LevelFilter::new();
        assert_eq!(
            filter.configure(Layout::new(0, 320, 10)),
            Err(LevelError::InvalidLayout { width: 0, height: 320 })
        );
        assert!(!filter.is_ready(), "failed configure must not open the gate");

        assert_eq!(
            filter.configure(Layout::new(240, 0, 10)),
            Err(LevelError::InvalidLayout { width: 240, height: 0 })
        );
    }

    #[test]
    fn test_reconfigure_keeps_history() {
        let mut filter = ready_filter();
        filter.add_sample(AccelSample::new(1.0, 0.0)).unwrap();

        filter.configure(Layout::new(400, 400, 0)).unwrap();
        assert_eq!(filter.sample_count(), 1);
        assert!((filter.move_range().unwrap().get() - 1.0).abs() < EPS);
    }

    // -------------------------------------------------------------------------
    // State Machine Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_new_filter_is_unconfigured() {
        let filter = LevelFilter::new();
        assert!(!filter.is_ready());
        assert_eq!(filter.layout(), None);
        assert_eq!(filter.move_range(), None);
    }

    #[test]
    fn test_sample_before_configure_fails() {
        let mut filter = LevelFilter::new();
        assert_eq!(filter.add_sample(AccelSample::new(1.0, 1.0)), Err(LevelError::NotConfigured));
        assert_eq!(filter.sample_count(), 0, "rejected sample must not be recorded");
    }

    #[test]
    fn test_position_before_configure_fails() {
        let filter = LevelFilter::new();
        assert_eq!(filter.bubble_position(), Err(LevelError::NotConfigured));
    }

    #[test]
    fn test_update_before_configure_fails() {
        let mut filter = LevelFilter::new();
        assert_eq!(filter.update(AccelSample::default()), Err(LevelError::NotConfigured));
    }

    #[test]
    fn test_position_with_empty_history_fails() {
        let filter = ready_filter();
        assert_eq!(filter.bubble_position(), Err(LevelError::EmptyHistory));
    }

    // -------------------------------------------------------------------------
    // Bubble Position Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_flat_device_centers_bubble() {
        let mut filter = ready_filter();
        filter.add_sample(AccelSample::new(0.0, 0.0)).unwrap();
        assert_eq!(filter.bubble_position().unwrap(), BubblePosition::CENTER);
    }

    #[test]
    fn test_half_gravity_x_clamps_to_upper_bound() {
        let mut filter = ready_filter();
        for _ in 0..10 {
            filter.add_sample(AccelSample::new(4.905, 0.0)).unwrap();
        }

        // 0.5 + 0.4905 = 0.9905, clamped to 0.5 + 0.3
        let position = filter.bubble_position().unwrap();
        assert!((position.x - 0.8).abs() < EPS, "x = {}", position.x);
        assert!((position.y - 0.5).abs() < EPS, "y = {}", position.y);
    }

    #[test]
    fn test_y_axis_is_inverted() {
        let mut filter = ready_filter();
        filter.add_sample(AccelSample::new(0.0, -9.81)).unwrap();

        // Stored as +9.81: 0.5 + 0.981 = 1.481, clamped to the upper bound
        let position = filter.bubble_position().unwrap();
        assert!((position.y - 0.8).abs() < EPS, "y = {}", position.y);
    }

    #[test]
    fn test_small_tilt_is_not_clamped() {
        let mut filter = ready_filter();
        filter.add_sample(AccelSample::new(1.0, 2.0)).unwrap();

        let position = filter.bubble_position().unwrap();
        assert!((position.x - 0.6).abs() < EPS);
        assert!((position.y - 0.3).abs() < EPS);
    }

    #[test]
    fn test_position_stays_within_bounds() {
        let mut filter = ready_filter();
        let (low, high) = filter.move_range().unwrap().bounds();

        let extremes = [-50.0, -9.81, -3.0, 0.0, 0.7, 4.0, 9.81, 120.0];
        for &x in &extremes {
            for &y in &extremes {
                filter.add_sample(AccelSample::new(x, y)).unwrap();
                let position = filter.bubble_position().unwrap();
                assert!(position.x >= low && position.x <= high, "x {} out of bounds", position.x);
                assert!(position.y >= low && position.y <= high, "y {} out of bounds", position.y);
            }
        }
    }

    #[test]
    fn test_oldest_sample_leaves_average() {
        let mut filter = ready_filter();
        filter.add_sample(AccelSample::new(2.0, 0.0)).unwrap();
        for _ in 0..HISTORY_SIZE {
            filter.add_sample(AccelSample::new(0.0, 0.0)).unwrap();
        }

        assert_eq!(filter.sample_count(), HISTORY_SIZE);
        assert_eq!(filter.bubble_position().unwrap(), BubblePosition::CENTER);
    }

    #[test]
    fn test_average_smooths_a_spike() {
        let mut filter = ready_filter();
        for _ in 0..9 {
            filter.add_sample(AccelSample::new(0.0, 0.0)).unwrap();
        }
        filter.add_sample(AccelSample::new(2.0, 0.0)).unwrap();

        // Average 0.2 -> bias 0.52
        let position = filter.bubble_position().unwrap();
        assert!((position.x - 0.52).abs() < EPS, "x = {}", position.x);
    }

    #[test]
    fn test_position_is_idempotent() {
        let mut filter = ready_filter();
        filter.add_sample(AccelSample::new(1.3, -0.4)).unwrap();
        filter.add_sample(AccelSample::new(0.9, 0.2)).unwrap();

        let first = filter.bubble_position().unwrap();
        let second = filter.bubble_position().unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_is_at_edge() {
        let range = MoveRange::from_layout(&Layout::new(240, 320, 48)).unwrap();
        let (low, high) = range.bounds();
        assert!(!BubblePosition::CENTER.is_at_edge(range));
        assert!(!BubblePosition { x: 0.7, y: 0.3 }.is_at_edge(range));
        assert!(BubblePosition { x: high, y: 0.5 }.is_at_edge(range));
        assert!(BubblePosition { x: 0.5, y: low }.is_at_edge(range));
    }

    // -------------------------------------------------------------------------
    // Update / Reset Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_update_level_device() {
        let mut filter = ready_filter();
        let reading = filter.update(AccelSample::new(0.0, 0.0)).unwrap();

        assert_eq!(reading.position, BubblePosition::CENTER);
        assert_eq!(reading.geometry.state, LineState::Level);
        assert_eq!(reading.readout.x_text.as_str(), "X: 0%");
        assert_eq!(reading.readout.y_text.as_str(), "Y: 0%");
    }

    #[test]
    fn test_update_readout_uses_raw_sample() {
        let mut filter = ready_filter();
        for _ in 0..5 {
            filter.update(AccelSample::new(0.0, 0.0)).unwrap();
        }
        let reading = filter.update(AccelSample::new(9.81, 0.0)).unwrap();

        // Position is averaged, readout is not.
        assert!(reading.position.x < 0.8);
        assert_eq!(reading.readout.x_percent, 100);
    }

    #[test]
    fn test_update_tilted_device() {
        let mut filter = ready_filter();
        let reading = filter.update(AccelSample::new(0.0, -3.0)).unwrap();

        // y bias 0.8 -> dy = 0.3 * 320 = 96, dx = 0.5 * 240 = 120
        assert_eq!(reading.geometry.state, LineState::Tilted);
        assert!(reading.geometry.angle_deg > 30.0);
    }

    #[test]
    fn test_reset_clears_history_keeps_layout() {
        let mut filter = ready_filter();
        filter.add_sample(AccelSample::new(1.0, 1.0)).unwrap();
        filter.reset();

        assert!(filter.is_ready());
        assert_eq!(filter.sample_count(), 0);
        assert_eq!(filter.bubble_position(), Err(LevelError::EmptyHistory));
    }
}
