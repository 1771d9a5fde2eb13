//! Uptime status ticker
//!
//! Runs as a second execution context drawing through its own copy of the
//! shared surface handle. Each primitive takes the display lock on its own,
//! so this task interleaves with page redraws at primitive granularity but
//! never corrupts one.

use core::fmt::Write;

use defmt::*;
use embassy_time::{Duration, Ticker};

use conductor_display::{Rgb565, Surface};

use crate::menus::CabSurface;

/// Top-right corner of the status readout
const STATUS_X: u16 = 196;
const STATUS_Y: u16 = 2;

/// Status task - repaints the uptime clock once per second
#[embassy_executor::task]
pub async fn status_task(mut surface: CabSurface) {
    info!("Status task started");

    let mut ticker = Ticker::every(Duration::from_secs(1));
    let mut seconds: u32 = 0;

    loop {
        ticker.next().await;
        seconds += 1;

        let mut text: heapless::String<8> = heapless::String::new();
        let _ = write!(text, "{:02}:{:02}", (seconds / 60) % 100, seconds % 60);

        surface.set_text_color(Rgb565::DARK_GREY, Rgb565::BLACK);
        surface.draw_text(&text, STATUS_X, STATUS_Y, 1);
    }
}
