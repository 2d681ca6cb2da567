//! Level widgets: ring, bubble, tilt line and readouts.
//!
//! [`LevelArea`] maps the filter's normalized output to pixels. A bias places
//! the bubble the way a constraint layout places a child:
//!
//! ```text
//! center = origin + bias * (extent - bubble_diameter) + bubble_diameter / 2
//! ```
//!
//! The tilt line starts at the pivot, the left edge of the area at half its
//! height, which is also the origin of the offsets in
//! [`line_geometry`](crate::geometry::line_geometry).

use core::fmt::Write;

use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Circle, Ellipse, Line, PrimitiveStyle, PrimitiveStyleBuilder, Rectangle};
use embedded_graphics::text::Text;
use heapless::String;

use crate::colors::{BUBBLE_COLOR, BUBBLE_OUTLINE, RING_COLOR};
use crate::config::{LINE_STROKE, READOUT_BASELINE_Y, RING_STROKE};
use crate::filter::{BubblePosition, Layout, MoveRange};
use crate::geometry::LineGeometry;
use crate::readout::AxisReadout;
use crate::styles::{ANGLE_FONT, CENTERED, LEFT_ALIGNED, READOUT_STYLE, RIGHT_ALIGNED};

const RING_STYLE: PrimitiveStyle<Rgb565> = PrimitiveStyle::with_stroke(RING_COLOR, RING_STROKE);
const CROSSHAIR_STYLE: PrimitiveStyle<Rgb565> = PrimitiveStyle::with_stroke(RING_COLOR, 1);

/// Gap between the bottom of the ring and the angle value baseline.
const ANGLE_VALUE_GAP: i32 = 30;

// =============================================================================
// Level Area
// =============================================================================

/// Pixel rectangle the bubble moves in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LevelArea {
    bounds: Rectangle,
    bubble_diameter: u32,
}

impl LevelArea {
    pub const fn new(bounds: Rectangle, bubble_diameter: u32) -> Self {
        Self {
            bounds,
            bubble_diameter,
        }
    }

    #[inline]
    pub const fn bounds(&self) -> Rectangle { self.bounds }

    #[inline]
    pub const fn bubble_diameter(&self) -> u32 { self.bubble_diameter }

    /// Filter layout for this area with the given label slot width.
    pub const fn layout(
        &self,
        label_width: u32,
    ) -> Layout {
        Layout::new(self.bounds.size.width, self.bounds.size.height, label_width)
    }

    /// Origin of the tilt line.
    pub const fn pivot(&self) -> Point {
        Point::new(
            self.bounds.top_left.x,
            self.bounds.top_left.y + (self.bounds.size.height / 2) as i32,
        )
    }

    /// Center of the bubble for a normalized position.
    pub fn bubble_center(
        &self,
        position: BubblePosition,
    ) -> Point {
        Point::new(
            self.axis_pixel(self.bounds.top_left.x, self.bounds.size.width, position.x),
            self.axis_pixel(self.bounds.top_left.y, self.bounds.size.height, position.y),
        )
    }

    /// Box covering every pixel the bubble can reach within `range`.
    pub fn travel_box(
        &self,
        range: MoveRange,
    ) -> Rectangle {
        let (low, _) = range.bounds();
        let d = self.bubble_diameter as f32;
        let free_w = self.bounds.size.width.saturating_sub(self.bubble_diameter) as f32;
        let free_h = self.bounds.size.height.saturating_sub(self.bubble_diameter) as f32;

        let top_left = self.bounds.top_left
            + Point::new(
                libm::roundf(low * free_w) as i32,
                libm::roundf(low * free_h) as i32,
            );
        let size = Size::new(
            libm::roundf(range.get() * free_w + d) as u32,
            libm::roundf(range.get() * free_h + d) as u32,
        );
        Rectangle::new(top_left, size)
    }

    fn axis_pixel(
        &self,
        origin: i32,
        extent: u32,
        bias: f32,
    ) -> i32 {
        let free = extent.saturating_sub(self.bubble_diameter) as f32;
        origin + libm::roundf(bias * free + self.bubble_diameter as f32 / 2.0) as i32
    }
}

// =============================================================================
// Drawing
// =============================================================================

/// Draw the ring around the travel box plus a crosshair through its center.
pub fn draw_ring<D>(
    display: &mut D,
    area: &LevelArea,
    range: MoveRange,
) where
    D: DrawTarget<Color = Rgb565>,
{
    let travel = area.travel_box(range);
    Ellipse::new(travel.top_left, travel.size)
        .into_styled(RING_STYLE)
        .draw(display)
        .ok();

    let center = area.bubble_center(BubblePosition::CENTER);
    let half_w = (travel.size.width / 2) as i32;
    let half_h = (travel.size.height / 2) as i32;
    Line::new(center - Point::new(half_w, 0), center + Point::new(half_w, 0))
        .into_styled(CROSSHAIR_STYLE)
        .draw(display)
        .ok();
    Line::new(center - Point::new(0, half_h), center + Point::new(0, half_h))
        .into_styled(CROSSHAIR_STYLE)
        .draw(display)
        .ok();

    // Target circle the bubble sits in when level
    Circle::with_center(center, area.bubble_diameter() + 6)
        .into_styled(CROSSHAIR_STYLE)
        .draw(display)
        .ok();
}

/// Draw the bubble. `shake` shifts it horizontally (see
/// [`edge_shake_offset`](crate::animations::edge_shake_offset)).
pub fn draw_bubble<D>(
    display: &mut D,
    area: &LevelArea,
    position: BubblePosition,
    shake: i32,
) where
    D: DrawTarget<Color = Rgb565>,
{
    let center = area.bubble_center(position) + Point::new(shake, 0);
    let style = PrimitiveStyleBuilder::new()
        .fill_color(BUBBLE_COLOR)
        .stroke_color(BUBBLE_OUTLINE)
        .stroke_width(1)
        .build();
    Circle::with_center(center, area.bubble_diameter())
        .into_styled(style)
        .draw(display)
        .ok();
}

/// Draw the tilt line from the pivot with the computed rotation and length.
pub fn draw_tilt_line<D>(
    display: &mut D,
    area: &LevelArea,
    geometry: &LineGeometry,
    color: Rgb565,
) where
    D: DrawTarget<Color = Rgb565>,
{
    let pivot = area.pivot();
    let (dx, dy) = geometry.end_offset();
    let end = pivot + Point::new(libm::roundf(dx) as i32, libm::roundf(dy) as i32);
    Line::new(pivot, end)
        .into_styled(PrimitiveStyle::with_stroke(color, LINE_STROKE))
        .draw(display)
        .ok();
}

/// Draw the axis readouts: X in the left label slot, Y in the right one.
pub fn draw_axis_readout<D>(
    display: &mut D,
    area: &LevelArea,
    readout: &AxisReadout,
) where
    D: DrawTarget<Color = Rgb565>,
{
    let bounds = area.bounds();
    let y = bounds.top_left.y + READOUT_BASELINE_Y;
    let right = bounds.top_left.x + bounds.size.width as i32 - 1;

    Text::with_text_style(&readout.x_text, Point::new(bounds.top_left.x, y), READOUT_STYLE, LEFT_ALIGNED)
        .draw(display)
        .ok();
    Text::with_text_style(&readout.y_text, Point::new(right, y), READOUT_STYLE, RIGHT_ALIGNED)
        .draw(display)
        .ok();
}

/// Draw the line angle under the ring in the line's color.
pub fn draw_angle_value<D>(
    display: &mut D,
    area: &LevelArea,
    range: MoveRange,
    geometry: &LineGeometry,
    color: Rgb565,
) where
    D: DrawTarget<Color = Rgb565>,
{
    let travel = area.travel_box(range);
    let x = area.bubble_center(BubblePosition::CENTER).x;
    let y = travel.top_left.y + travel.size.height as i32 + ANGLE_VALUE_GAP;

    let mut text: String<16> = String::new();
    let _ = write!(text, "{:.1} DEG", geometry.angle_deg);
    Text::with_text_style(&text, Point::new(x, y), MonoTextStyle::new(ANGLE_FONT, color), CENTERED)
        .draw(display)
        .ok();
}
