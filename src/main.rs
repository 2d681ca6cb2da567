//! Bubble level simulator for desktop.
//!
//! Runs the `level-common` filter and widgets in an
//! `embedded-graphics-simulator` window, fed by synthetic accelerometer
//! samples.
//!
//! # Controls
//!
//! - `Space`: switch between the wobbling and the manual sample source
//! - Arrow keys: tilt the device (manual source)
//! - `L`: put the manual device flat
//! - `R`: clear the sample history
//! - `D`: toggle the debug page

// Crate-level lints
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::too_many_lines)]

mod config;
mod pages;
mod popup;
mod profiling;
mod screens;
mod source;

use std::thread;
use std::time::Instant;

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;
use embedded_graphics::text::Text;
use embedded_graphics_simulator::sdl2::Keycode;
use embedded_graphics_simulator::{OutputSettingsBuilder, SimulatorDisplay, SimulatorEvent, Window};
use level_common::animations::{LineTint, edge_shake_offset};
use level_common::colors::BLACK;
use level_common::config::{BUBBLE_DIAMETER, READOUT_TEMPLATE, SCREEN_HEIGHT, SCREEN_WIDTH};
use level_common::profiling::DebugLog;
use level_common::styles::READOUT_STYLE;
use level_common::widgets::{
    LevelArea,
    draw_angle_value,
    draw_axis_readout,
    draw_bubble,
    draw_reset_popup,
    draw_ring,
    draw_source_popup,
    draw_tilt_line,
};
use level_common::{LevelError, LevelFilter, LevelReading, LineState};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use crate::config::{DEFAULT_LOG_FILTER, FRAME_TIME, SAMPLES_PER_FRAME, TILT_STEP, WINDOW_SCALE, WINDOW_TITLE};
use crate::pages::Page;
use crate::popup::Popup;
use crate::profiling::ProfilingMetrics;
use crate::screens::{draw_debug_page, run_boot_screen};
use crate::source::{SourceKind, Sources};

fn main() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)))
        .init();

    if let Err(error) = run() {
        tracing::error!(%error, "bubble level stopped");
        std::process::exit(1);
    }
}

fn run() -> Result<(), LevelError> {
    let mut display: SimulatorDisplay<Rgb565> = SimulatorDisplay::new(Size::new(SCREEN_WIDTH, SCREEN_HEIGHT));
    let output_settings = OutputSettingsBuilder::new().scale(WINDOW_SCALE).build();
    let mut window = Window::new(WINDOW_TITLE, &output_settings);

    display.clear(BLACK).ok();
    window.update(&display);

    if !run_boot_screen(&mut display, &mut window) {
        return Ok(());
    }

    let area = LevelArea::new(
        Rectangle::new(Point::zero(), Size::new(SCREEN_WIDTH, SCREEN_HEIGHT)),
        BUBBLE_DIAMETER,
    );

    // Level state
    let mut filter = LevelFilter::new();
    let mut sources = Sources::new();
    let mut layout_ready = false;
    let mut last_reading: Option<LevelReading> = None;
    let mut last_state: Option<LineState> = None;
    let mut tint = LineTint::new();
    let sample_dt = FRAME_TIME.as_secs_f32() / SAMPLES_PER_FRAME as f32;

    // UI state
    let mut active_popup: Option<Popup> = None;
    let mut current_page = Page::default();
    let mut frame_count = 0u32;
    let mut last_fps_calc = Instant::now();
    let mut fps_frame_count = 0u32;
    let mut current_fps = 0.0f32;

    // Profiling
    let mut metrics = ProfilingMetrics::new();
    let mut debug_log = DebugLog::new();
    debug_log.push("System started");
    tracing::info!(width = SCREEN_WIDTH, height = SCREEN_HEIGHT, "bubble level started");

    loop {
        let frame_start = Instant::now();

        // Handle events
        for ev in window.events() {
            match ev {
                SimulatorEvent::Quit => return Ok(()),
                SimulatorEvent::KeyDown { keycode, repeat, .. } => match keycode {
                    Keycode::Space if !repeat => {
                        let name = sources.toggle();
                        active_popup = Some(Popup::Source(Instant::now()));
                        debug_log.push_fmt(format_args!("Source: {name}"));
                        tracing::info!(source = name, "sample source switched");
                    }
                    Keycode::R if !repeat => {
                        filter.reset();
                        last_reading = None;
                        active_popup = Some(Popup::Reset(Instant::now()));
                        debug_log.push("History reset");
                        tracing::info!("sample history reset");
                    }
                    Keycode::D if !repeat => {
                        current_page = current_page.toggle();
                        active_popup = None;
                        debug_log.push_fmt(format_args!("Page: {}", current_page.name()));
                    }
                    Keycode::L if sources.active() == SourceKind::Manual => sources.manual.level(),
                    Keycode::Left => sources.manual.nudge(-TILT_STEP, 0.0),
                    Keycode::Right => sources.manual.nudge(TILT_STEP, 0.0),
                    Keycode::Up => sources.manual.nudge(0.0, TILT_STEP),
                    Keycode::Down => sources.manual.nudge(0.0, -TILT_STEP),
                    _ => {}
                },
                _ => {}
            }
        }

        if let Some(ref popup) = active_popup
            && popup.is_expired()
        {
            active_popup = None;
        }

        // Sensor events, each processed to completion before the next
        for _ in 0..SAMPLES_PER_FRAME {
            let sample = sources.current().next_sample(sample_dt);
            if !layout_ready {
                metrics.inc_samples_dropped();
                continue;
            }
            match filter.update(sample) {
                Ok(reading) => {
                    metrics.inc_samples_processed();
                    last_reading = Some(reading);
                }
                Err(error) => tracing::warn!(%error, "sample rejected"),
            }
        }

        // Level reached / lost
        if let Some(reading) = &last_reading {
            let state = reading.geometry.state;
            if last_state != Some(state) {
                tint.set_state(state);
                if last_state.is_some() {
                    metrics.level_transitions += 1;
                }
                let label = match state {
                    LineState::Level => "Level reached",
                    LineState::Tilted => "Level lost",
                };
                debug_log.push_fmt(format_args!("{label} {:.1} deg", reading.geometry.angle_deg));
                tracing::info!(angle = reading.geometry.angle_deg, "{label}");
                last_state = Some(state);
            }
        }
        tint.update();

        // FPS calculation
        fps_frame_count += 1;
        if last_fps_calc.elapsed().as_secs() >= 1 {
            current_fps = fps_frame_count as f32 / last_fps_calc.elapsed().as_secs_f32();
            fps_frame_count = 0;
            last_fps_calc = Instant::now();
        }

        // Render based on current page
        match current_page {
            Page::Level => {
                display.clear(BLACK).ok();

                if let Some(range) = filter.move_range() {
                    draw_ring(&mut display, &area, range);

                    if let Some(reading) = &last_reading {
                        let at_edge = reading.position.is_at_edge(range);
                        if at_edge {
                            metrics.edge_frames += 1;
                        }
                        let shake = edge_shake_offset(frame_count, at_edge);

                        draw_tilt_line(&mut display, &area, &reading.geometry, tint.current());
                        draw_bubble(&mut display, &area, reading.position, shake);
                        draw_axis_readout(&mut display, &area, &reading.readout);
                        draw_angle_value(&mut display, &area, range, &reading.geometry, tint.current());
                    }
                }

                match active_popup {
                    Some(Popup::Reset(_)) => draw_reset_popup(&mut display),
                    Some(Popup::Source(_)) => draw_source_popup(&mut display, sources.current().name()),
                    None => {}
                }
            }

            Page::Debug => {
                draw_debug_page(&mut display, &metrics, &filter, &debug_log, current_fps);
            }
        }

        let render_time = frame_start.elapsed();
        window.update(&display);

        // The layout exists once the first frame is on screen
        if !layout_ready {
            let label_width = Text::new(READOUT_TEMPLATE, Point::zero(), READOUT_STYLE)
                .bounding_box()
                .size
                .width;
            let range = filter.configure(area.layout(label_width))?;
            layout_ready = true;
            debug_log.push_fmt(format_args!("Layout ready, range {:.2}", range.get()));
            tracing::info!(label_width, range = range.get(), "layout ready");
        }

        frame_count = frame_count.wrapping_add(1);

        let pre_sleep = frame_start.elapsed();
        if pre_sleep < FRAME_TIME {
            thread::sleep(FRAME_TIME.saturating_sub(pre_sleep));
        }
        let sleep_time = frame_start.elapsed().saturating_sub(pre_sleep);

        metrics.record_frame(frame_start.elapsed(), render_time, sleep_time);
    }
}
