//! Tilt line geometry.
//!
//! The tilt line starts at the pivot (left edge of the container, vertical
//! midpoint) and ends on the bubble. Its rotation is the angle of that
//! offset; within [`LEVEL_TOLERANCE_DEG`] of horizontal the line is drawn as
//! level.
//!
//! `atan2` keeps the angle defined when the horizontal offset is zero, which
//! happens when the bubble is allowed to touch the left edge.

use crate::config::{HALF_BIAS, LEVEL_TOLERANCE_DEG};
use crate::filter::BubblePosition;

/// Colour state of the tilt line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineState {
    /// Within the level tolerance (drawn green).
    Level,
    /// Outside the level tolerance (drawn red).
    Tilted,
}

impl LineState {
    #[inline]
    pub fn from_angle(angle_deg: f32) -> Self {
        if libm::fabsf(angle_deg) < LEVEL_TOLERANCE_DEG {
            Self::Level
        } else {
            Self::Tilted
        }
    }
}

/// Rotation, length and colour state of the tilt line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineGeometry {
    /// Rotation in degrees, clockwise on screen (y grows downwards).
    pub angle_deg: f32,
    /// Length in pixels.
    pub length: f32,
    pub state: LineState,
}

impl LineGeometry {
    /// Build the geometry for an offset from the pivot.
    pub fn from_offset(dx: f32, dy: f32) -> Self {
        let angle_deg = libm::atan2f(dy, dx).to_degrees();
        Self {
            angle_deg,
            length: libm::hypotf(dx, dy),
            state: LineState::from_angle(angle_deg),
        }
    }

    #[inline]
    pub fn is_level(&self) -> bool { self.state == LineState::Level }

    /// End point of the line relative to the pivot, rebuilt from rotation
    /// and length.
    pub fn end_offset(&self) -> (f32, f32) {
        let radians = self.angle_deg.to_radians();
        (self.length * libm::cosf(radians), self.length * libm::sinf(radians))
    }
}

/// Line geometry for a bubble position in a container of the given size.
pub fn line_geometry(
    position: BubblePosition,
    container_width: f32,
    container_height: f32,
) -> LineGeometry {
    let dx = position.x * container_width;
    let dy = (position.y - HALF_BIAS) * container_height;
    LineGeometry::from_offset(dx, dy)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_horizontal_line_is_level() {
        let geometry = LineGeometry::from_offset(100.0, 0.0);
        assert_eq!(geometry.angle_deg, 0.0);
        assert!((geometry.length - 100.0).abs() < 1e-4);
        assert!(geometry.is_level());
    }

    #[test]
    fn test_near_zero_boundary() {
        let just_level = LineGeometry::from_offset(100.0, 1.0);
        assert!((just_level.angle_deg - 0.573).abs() < 0.01, "angle = {}", just_level.angle_deg);
        assert_eq!(just_level.state, LineState::Level);

        let tilted = LineGeometry::from_offset(100.0, 2.0);
        assert!((tilted.angle_deg - 1.146).abs() < 0.01, "angle = {}", tilted.angle_deg);
        assert_eq!(tilted.state, LineState::Tilted);
    }

    #[test]
    fn test_negative_angle_is_symmetric() {
        let up = LineGeometry::from_offset(100.0, -2.0);
        assert!((up.angle_deg + 1.146).abs() < 0.01);
        assert_eq!(up.state, LineState::Tilted);
        assert_eq!(LineState::from_angle(-0.5), LineState::Level);
    }

    #[test]
    fn test_zero_horizontal_offset_is_defined() {
        let down = LineGeometry::from_offset(0.0, 50.0);
        assert!((down.angle_deg - 90.0).abs() < 1e-3);
        assert!((down.length - 50.0).abs() < 1e-4);

        let up = LineGeometry::from_offset(0.0, -50.0);
        assert!((up.angle_deg + 90.0).abs() < 1e-3);

        let origin = LineGeometry::from_offset(0.0, 0.0);
        assert!(!origin.angle_deg.is_nan());
        assert_eq!(origin.length, 0.0);
    }

    #[test]
    fn test_pythagorean_length() {
        let geometry = LineGeometry::from_offset(120.0, 96.0);
        let expected = (120.0f32 * 120.0 + 96.0 * 96.0).sqrt();
        assert!((geometry.length - expected).abs() < 1e-3);
    }

    #[test]
    fn test_line_geometry_from_position() {
        let geometry = line_geometry(BubblePosition { x: 0.5, y: 0.8 }, 240.0, 320.0);
        // dx = 120, dy = 96
        assert!((geometry.angle_deg - 38.66).abs() < 0.01, "angle = {}", geometry.angle_deg);
        assert_eq!(geometry.state, LineState::Tilted);

        let level = line_geometry(BubblePosition::CENTER, 240.0, 320.0);
        assert_eq!(level.angle_deg, 0.0);
        assert!((level.length - 120.0).abs() < 1e-4);
        assert!(level.is_level());
    }

    #[test]
    fn test_end_offset_rebuilds_input_offset() {
        let geometry = LineGeometry::from_offset(120.0, -40.0);
        let (x, y) = geometry.end_offset();
        assert!((x - 120.0).abs() < 0.01, "x = {x}");
        assert!((y + 40.0).abs() < 0.01, "y = {y}");
    }
}
