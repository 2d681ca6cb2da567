//! Static text styles, built at compile time.
//!
//! `MonoTextStyle` and `TextStyle` are `const` constructible in
//! embedded-graphics 0.8, so every fixed-color style lives here instead of
//! being rebuilt in each draw call. Styles whose color changes at runtime use
//! [`LABEL_FONT`] with `MonoTextStyle::new(LABEL_FONT, color)`.

use embedded_graphics::{
    mono_font::{
        MonoFont, MonoTextStyle,
        ascii::{FONT_6X10, FONT_10X20},
    },
    pixelcolor::Rgb565,
    text::{Alignment, TextStyle, TextStyleBuilder},
};
use profont::PROFONT_24_POINT;

use crate::colors::{BLACK, WHITE};

// =============================================================================
// Text Alignment Styles
// =============================================================================

/// Centered text. Popups and the angle value.
pub const CENTERED: TextStyle = TextStyleBuilder::new().alignment(Alignment::Center).build();

/// Left-aligned text. X readout and console lines.
pub const LEFT_ALIGNED: TextStyle = TextStyleBuilder::new().alignment(Alignment::Left).build();

/// Right-aligned text. Y readout.
pub const RIGHT_ALIGNED: TextStyle = TextStyleBuilder::new().alignment(Alignment::Right).build();

// =============================================================================
// Fonts and Styles
// =============================================================================

/// Small label font (6x10). The label slot width is measured in this font.
pub const LABEL_FONT: &MonoFont = &FONT_6X10;

/// Axis readouts on the dark background.
pub const READOUT_STYLE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&FONT_6X10, WHITE);

/// Dark console text on the light boot screen.
pub const CONSOLE_STYLE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&FONT_6X10, BLACK);

/// Popup and page titles (10x20).
pub const TITLE_STYLE_WHITE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&FONT_10X20, WHITE);

/// Large angle value under the ring (`ProFont` 24pt).
pub const ANGLE_FONT: &MonoFont = &PROFONT_24_POINT;
