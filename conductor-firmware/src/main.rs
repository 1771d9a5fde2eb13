//! Conductor - Model Railway Cab Controller Firmware
//!
//! Main firmware binary for RP2040-based cab units. Drives a 240x240 ST7789
//! TFT and five buttons through the page-navigation core: one cooperative
//! polling loop feeds input to the top of the page stack and repaints it,
//! while a status task shares the display through the per-primitive lock.

#![no_std]
#![no_main]

extern crate alloc;

use core::cell::RefCell;
use core::mem::MaybeUninit;

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::gpio::{Input, Level, Output, Pull};
use embassy_rp::spi::{self, Spi};
use embassy_sync::blocking_mutex::Mutex;
use embassy_time::{Delay, Timer};
use embedded_alloc::LlffHeap as Heap;
use static_cell::StaticCell;
use {defmt_rtt as _, panic_probe as _};

use conductor_display::{SharedSurface, SurfaceMutex};
use conductor_ui::PageManager;

mod buttons;
mod menus;
mod st7789;
mod status;

// Heap allocator: pages and callbacks are boxed
#[global_allocator]
static HEAP: Heap = Heap::empty();

// Heap size: 16KB
const HEAP_SIZE: usize = 16 * 1024;

// The single physical display, shared behind the surface mutex
static DISPLAY: StaticCell<SurfaceMutex<st7789::St7789>> = StaticCell::new();

/// UI loop idle interval between polls
const POLL_INTERVAL_MS: u64 = 20;

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Conductor cab firmware starting...");

    init_heap();

    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    // TFT on SPI0: CLK=18, MOSI=19, DC=16, RST=17 (write-only panel)
    let mut spi_config = spi::Config::default();
    spi_config.frequency = 32_000_000;
    let spi = Spi::new_blocking_txonly(p.SPI0, p.PIN_18, p.PIN_19, spi_config);
    let dc = Output::new(p.PIN_16, Level::Low);
    let rst = Output::new(p.PIN_17, Level::Low);

    let mut delay = Delay;
    let mut panel = st7789::St7789::new(spi, dc, rst);
    if panel.init(&mut delay).is_err() {
        error!("TFT init failed");
    }

    let display = DISPLAY.init(Mutex::new(RefCell::new(panel)));
    let surface = SharedSurface::new(display);

    // Cab buttons, active low with pull-ups
    let mut cab_buttons = buttons::CabButtons::new(
        Input::new(p.PIN_10, Pull::Up),
        Input::new(p.PIN_11, Pull::Up),
        Input::new(p.PIN_12, Pull::Up),
        Input::new(p.PIN_13, Pull::Up),
        Input::new(p.PIN_14, Pull::Up),
    );

    let root = menus::build_root(surface);
    let mut manager = PageManager::new(root);

    unwrap!(spawner.spawn(status::status_task(surface)));

    info!("Entering UI loop");
    loop {
        manager.tick(&mut cab_buttons, &mut delay);
        Timer::after_millis(POLL_INTERVAL_MS).await;
    }
}

/// Initialize the heap allocator
fn init_heap() {
    static mut HEAP_MEM: [MaybeUninit<u8>; HEAP_SIZE] = [MaybeUninit::uninit(); HEAP_SIZE];
    unsafe {
        HEAP.init(core::ptr::addr_of_mut!(HEAP_MEM) as usize, HEAP_SIZE)
    }
}
