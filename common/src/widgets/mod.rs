//! Widget components for the level display.
//!
//! All widgets are generic over `DrawTarget<Color = Rgb565>` for platform independence.

mod level;
mod popups;

pub use level::{LevelArea, draw_angle_value, draw_axis_readout, draw_bubble, draw_ring, draw_tilt_line};
pub use popups::{POPUP_BOUNDS, draw_reset_popup, draw_source_popup};
