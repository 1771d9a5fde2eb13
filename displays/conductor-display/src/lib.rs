//! Display and input abstraction for Conductor cab units
//!
//! This crate provides:
//! - `Surface` trait for pixel-level display primitives (TFT, emulator, test double)
//! - `SharedSurface` lock wrapper serializing access to a single display device
//! - `Button` / `ButtonSource` for the five physical cab buttons
//! - RGB565 color constants shared by all pages
//!
//! # Architecture
//!
//! Pages in `conductor-ui` are generic over `Surface`, so the same rendering
//! code runs against an exclusively-owned display driver or against a
//! `SharedSurface` handle that serializes every individual primitive behind a
//! mutex. Both produce identical output; only the locking differs.

#![no_std]
#![deny(unsafe_code)]

pub mod color;
pub mod input;
pub mod shared;
pub mod surface;

// Re-export key types
pub use color::Rgb565;
pub use input::{Button, ButtonSource, DEBOUNCE_MS};
pub use shared::{SharedSurface, SurfaceMutex};
pub use surface::{
    Surface, DIALOG_LIST_TOP_Y, ITEM_HEIGHT, LIST_TOP_Y, MAX_VISIBLE_ITEMS, SCROLLBAR_WIDTH,
};
