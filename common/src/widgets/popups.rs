//! Non-modal popup overlays for status messages.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyle, Rectangle};
use embedded_graphics::text::Text;

use crate::colors::{RED, WHITE};
use crate::config::{CENTER_X, CENTER_Y, SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::styles::{CENTERED, TITLE_STYLE_WHITE};

const POPUP_WIDTH: u32 = 200;
const POPUP_HEIGHT: u32 = 60;
const POPUP_X: i32 = (SCREEN_WIDTH - POPUP_WIDTH) as i32 / 2;
const POPUP_Y: i32 = (SCREEN_HEIGHT - POPUP_HEIGHT) as i32 / 2;
const BORDER: u32 = 3;

const TEXT1_POS: Point = Point::new(CENTER_X, CENTER_Y - 5);
const TEXT2_POS: Point = Point::new(CENTER_X, CENTER_Y + 15);

const WHITE_FILL: PrimitiveStyle<Rgb565> = PrimitiveStyle::with_fill(WHITE);
const RED_FILL: PrimitiveStyle<Rgb565> = PrimitiveStyle::with_fill(RED);

const BORDER_POS: Point = Point::new(POPUP_X - BORDER as i32, POPUP_Y - BORDER as i32);
const BORDER_SIZE: Size = Size::new(POPUP_WIDTH + 2 * BORDER, POPUP_HEIGHT + 2 * BORDER);
const BG_POS: Point = Point::new(POPUP_X, POPUP_Y);
const BG_SIZE: Size = Size::new(POPUP_WIDTH, POPUP_HEIGHT);

/// Screen area covered by any popup, border included.
pub const POPUP_BOUNDS: Rectangle = Rectangle::new(BORDER_POS, BORDER_SIZE);

fn draw_popup_frame<D>(display: &mut D)
where
    D: DrawTarget<Color = Rgb565>,
{
    Rectangle::new(BORDER_POS, BORDER_SIZE)
        .into_styled(WHITE_FILL)
        .draw(display)
        .ok();

    Rectangle::new(BG_POS, BG_SIZE)
        .into_styled(RED_FILL)
        .draw(display)
        .ok();
}

/// "HISTORY / RESET" after the sample history was cleared.
pub fn draw_reset_popup<D>(display: &mut D)
where
    D: DrawTarget<Color = Rgb565>,
{
    draw_popup_frame(display);
    Text::with_text_style("HISTORY", TEXT1_POS, TITLE_STYLE_WHITE, CENTERED)
        .draw(display)
        .ok();
    Text::with_text_style("RESET", TEXT2_POS, TITLE_STYLE_WHITE, CENTERED)
        .draw(display)
        .ok();
}

/// "SOURCE / <name>" after switching the sample source.
pub fn draw_source_popup<D>(
    display: &mut D,
    source_name: &str,
) where
    D: DrawTarget<Color = Rgb565>,
{
    draw_popup_frame(display);
    Text::with_text_style("SOURCE", TEXT1_POS, TITLE_STYLE_WHITE, CENTERED)
        .draw(display)
        .ok();
    Text::with_text_style(source_name, TEXT2_POS, TITLE_STYLE_WHITE, CENTERED)
        .draw(display)
        .ok();
}
