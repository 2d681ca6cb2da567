//! Accelerometer sample sources.
//!
//! The simulator has no sensor, so sources play its part: each call to
//! [`SampleSource::next_sample`] is one sensor event, delivered in order and
//! processed to completion by the caller before the next one.

use level_common::AccelSample;
use level_common::config::STANDARD_GRAVITY;

/// Something that produces accelerometer readings in m/s².
pub trait SampleSource {
    /// Short name for popups and logs.
    fn name(&self) -> &'static str;

    /// Produce the next reading, `dt` seconds after the previous one.
    fn next_sample(
        &mut self,
        dt: f32,
    ) -> AccelSample;
}

// =============================================================================
// Wobble Source
// =============================================================================

/// A hand-held device: slow sway on both axes plus sensor jitter.
///
/// The sway amplitude breathes with a long period, so the device regularly
/// settles close to level before tipping again.
pub struct WobbleSource {
    t: f32,
}

impl WobbleSource {
    pub const fn new() -> Self { Self { t: 0.0 } }
}

impl Default for WobbleSource {
    fn default() -> Self { Self::new() }
}

impl SampleSource for WobbleSource {
    fn name(&self) -> &'static str { "WOBBLE" }

    fn next_sample(
        &mut self,
        dt: f32,
    ) -> AccelSample {
        self.t += dt;
        let t = self.t;

        let envelope = (t * 0.15).sin().mul_add(0.5, 0.5);
        let x = envelope * 4.0 * (t * 0.7).sin() + 0.15 * (t * 9.1).sin();
        let y = envelope * 3.0 * (t * 0.45 + 1.0).sin() + 0.12 * (t * 11.3).sin();
        AccelSample::new(x, y)
    }
}

// =============================================================================
// Manual Tilt
// =============================================================================

/// A device tilted with the arrow keys. Readings hold still apart from a
/// small jitter.
pub struct ManualTilt {
    x: f32,
    y: f32,
    t: f32,
}

impl ManualTilt {
    pub const fn new() -> Self { Self { x: 0.0, y: 0.0, t: 0.0 } }

    /// Tilt by the given acceleration delta, limited to one g per axis.
    pub fn nudge(
        &mut self,
        dx: f32,
        dy: f32,
    ) {
        self.x = (self.x + dx).clamp(-STANDARD_GRAVITY, STANDARD_GRAVITY);
        self.y = (self.y + dy).clamp(-STANDARD_GRAVITY, STANDARD_GRAVITY);
    }

    /// Put the device back flat.
    pub fn level(&mut self) {
        self.x = 0.0;
        self.y = 0.0;
    }

    /// Current tilt without jitter.
    pub const fn tilt(&self) -> (f32, f32) { (self.x, self.y) }
}

impl Default for ManualTilt {
    fn default() -> Self { Self::new() }
}

impl SampleSource for ManualTilt {
    fn name(&self) -> &'static str { "MANUAL" }

    fn next_sample(
        &mut self,
        dt: f32,
    ) -> AccelSample {
        self.t += dt;
        let jitter = 0.02 * (self.t * 13.0).sin();
        AccelSample::new(self.x + jitter, self.y - jitter)
    }
}

// =============================================================================
// Source Selection
// =============================================================================

/// Which source feeds the filter.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
pub enum SourceKind {
    #[default]
    Wobble,
    Manual,
}

impl SourceKind {
    #[inline]
    pub const fn toggle(self) -> Self {
        match self {
            Self::Wobble => Self::Manual,
            Self::Manual => Self::Wobble,
        }
    }
}

/// Both sources, with one of them active.
#[derive(Default)]
pub struct Sources {
    pub wobble: WobbleSource,
    pub manual: ManualTilt,
    active: SourceKind,
}

impl Sources {
    pub const fn new() -> Self {
        Self {
            wobble: WobbleSource::new(),
            manual: ManualTilt::new(),
            active: SourceKind::Wobble,
        }
    }

    #[inline]
    pub const fn active(&self) -> SourceKind { self.active }

    /// Switch to the other source and return its name.
    pub fn toggle(&mut self) -> &'static str {
        self.active = self.active.toggle();
        self.current().name()
    }

    /// The active source.
    pub fn current(&mut self) -> &mut dyn SampleSource {
        match self.active {
            SourceKind::Wobble => &mut self.wobble,
            SourceKind::Manual => &mut self.manual,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wobble_stays_within_gravity() {
        let mut source = WobbleSource::new();
        for _ in 0..10_000 {
            let sample = source.next_sample(0.01);
            assert!(sample.x.abs() < STANDARD_GRAVITY, "x = {}", sample.x);
            assert!(sample.y.abs() < STANDARD_GRAVITY, "y = {}", sample.y);
        }
    }

    #[test]
    fn test_wobble_moves() {
        let mut source = WobbleSource::new();
        let first = source.next_sample(0.5);
        let second = source.next_sample(0.5);
        assert_ne!(first, second);
    }

    #[test]
    fn test_manual_tilt_nudge_and_clamp() {
        let mut tilt = ManualTilt::new();
        tilt.nudge(1.0, -0.5);
        assert_eq!(tilt.tilt(), (1.0, -0.5));

        for _ in 0..100 {
            tilt.nudge(1.0, -1.0);
        }
        assert_eq!(tilt.tilt(), (STANDARD_GRAVITY, -STANDARD_GRAVITY));

        tilt.level();
        assert_eq!(tilt.tilt(), (0.0, 0.0));
    }

    #[test]
    fn test_manual_tilt_jitter_is_small() {
        let mut tilt = ManualTilt::new();
        tilt.nudge(2.0, 0.0);
        for _ in 0..100 {
            let sample = tilt.next_sample(0.01);
            assert!((sample.x - 2.0).abs() <= 0.02 + f32::EPSILON);
            assert!(sample.y.abs() <= 0.02 + f32::EPSILON);
        }
    }

    #[test]
    fn test_sources_toggle() {
        let mut sources = Sources::new();
        assert_eq!(sources.active(), SourceKind::Wobble);
        assert_eq!(sources.current().name(), "WOBBLE");

        assert_eq!(sources.toggle(), "MANUAL");
        assert_eq!(sources.active(), SourceKind::Manual);

        assert_eq!(sources.toggle(), "WOBBLE");
    }
}
