//! Boot screen with console-style startup messages.

use core::fmt::Write;
use std::thread;
use std::time::{Duration, Instant};

use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::mono_font::ascii::FONT_10X20;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Line, PrimitiveStyle};
use embedded_graphics::text::Text;
use embedded_graphics_simulator::{SimulatorDisplay, SimulatorEvent, Window};
use heapless::String;
use level_common::colors::{GREEN, WHITE};
use level_common::config::{HISTORY_SIZE, SCREEN_WIDTH};
use level_common::styles::{CENTERED, CONSOLE_STYLE, LEFT_ALIGNED};

const TITLE_POS: Point = Point::new(SCREEN_WIDTH as i32 / 2, 25);
const LINE_START: Point = Point::new(10, 35);
const LINE_END: Point = Point::new(SCREEN_WIDTH as i32 - 10, 35);
const CONSOLE_X: i32 = 10;
const CONSOLE_START_Y: i32 = 50;
const CONSOLE_LINE_HEIGHT: i32 = 14;
const MAX_CONSOLE_LINES: usize = 18;

const TITLE_STYLE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&FONT_10X20, GREEN);
const DIVIDER_STYLE: PrimitiveStyle<Rgb565> = PrimitiveStyle::with_stroke(GREEN, 1);

/// Show the boot console. Returns `false` if the window was closed.
pub fn run_boot_screen(
    display: &mut SimulatorDisplay<Rgb565>,
    window: &mut Window,
) -> bool {
    let mut history_msg: String<36> = String::new();
    let _ = write!(history_msg, "History window: {HISTORY_SIZE} samples");

    let boot_messages: [(&str, u64); 5] = [
        ("Starting accelerometer...", 600),
        ("Calibrating gravity 9.81...", 800),
        (history_msg.as_str(), 500),
        ("Waiting for layout...", 500),
        ("Ready.", 400),
    ];

    let spinner_chars = ['|', '/', '-', '\\'];
    let mut spinner_idx = 0;
    let mut spinner_frame = 0u32;

    let mut console_lines: Vec<&str> = Vec::new();

    for (msg, duration_ms) in boot_messages {
        console_lines.push(msg);
        if console_lines.len() > MAX_CONSOLE_LINES {
            console_lines.remove(0);
        }

        let msg_start = Instant::now();
        let msg_duration = Duration::from_millis(duration_ms);

        while msg_start.elapsed() < msg_duration {
            for ev in window.events() {
                if matches!(ev, SimulatorEvent::Quit) {
                    return false;
                }
            }

            display.clear(WHITE).ok();

            spinner_frame = spinner_frame.wrapping_add(1);
            if spinner_frame.is_multiple_of(8) {
                spinner_idx = (spinner_idx + 1) % spinner_chars.len();
            }
            let left_spinner = spinner_chars[spinner_idx];
            let right_spinner = spinner_chars[(spinner_idx + 2) % spinner_chars.len()];

            let mut title: String<24> = String::new();
            let _ = write!(title, "{left_spinner} LEVEL {right_spinner}");
            Text::with_text_style(&title, TITLE_POS, TITLE_STYLE, CENTERED)
                .draw(display)
                .ok();

            Line::new(LINE_START, LINE_END)
                .into_styled(DIVIDER_STYLE)
                .draw(display)
                .ok();

            for (i, line) in console_lines.iter().enumerate() {
                let y_pos = CONSOLE_START_Y + (i as i32 * CONSOLE_LINE_HEIGHT);
                let prefix = if i == console_lines.len() - 1 { "> " } else { "  " };
                let mut full_line: String<48> = String::new();
                let _ = write!(full_line, "{prefix}{line}");
                Text::with_text_style(&full_line, Point::new(CONSOLE_X, y_pos), CONSOLE_STYLE, LEFT_ALIGNED)
                    .draw(display)
                    .ok();
            }

            window.update(display);
            thread::sleep(Duration::from_millis(16));
        }
    }

    thread::sleep(Duration::from_millis(300));
    true
}
