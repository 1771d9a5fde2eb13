//! Shared display lock
//!
//! The cab has exactly one display device, touched by the main polling loop
//! and potentially by a second execution context (e.g. a periodic status
//! task). `SharedSurface` serializes access by taking the mutex around each
//! individual drawing primitive and releasing it immediately after.
//!
//! Granularity: one primitive per acquisition. A page's multi-primitive
//! `draw()` is therefore not atomic as a whole; a concurrent writer may
//! interleave between primitives, but never mid-primitive. The target
//! hardware has no compositing layer, so this is the accepted trade-off.

use core::cell::RefCell;

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::blocking_mutex::Mutex;

use crate::color::Rgb565;
use crate::surface::Surface;

/// Mutex type guarding the single display device
pub type SurfaceMutex<D> = Mutex<CriticalSectionRawMutex, RefCell<D>>;

/// Cheap, copyable handle to the mutex-guarded display
///
/// Every execution context that draws holds its own copy of this handle.
/// Implements `Surface` by locking around each primitive, so pages written
/// against `Surface` work unchanged whether they own the device exclusively
/// or share it through this wrapper.
pub struct SharedSurface<D: 'static> {
    inner: &'static SurfaceMutex<D>,
}

impl<D> Clone for SharedSurface<D> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<D> Copy for SharedSurface<D> {}

impl<D> SharedSurface<D> {
    /// Create a handle over a statically-allocated display mutex
    pub fn new(inner: &'static SurfaceMutex<D>) -> Self {
        Self { inner }
    }

    /// Run a closure with exclusive access to the device
    ///
    /// For callers that need several primitives without interleaving
    /// (e.g. a save/restore partial redraw).
    pub fn with_lock<R>(&self, f: impl FnOnce(&mut D) -> R) -> R {
        self.inner.lock(|cell| f(&mut cell.borrow_mut()))
    }
}

impl<D: Surface> Surface for SharedSurface<D> {
    fn clear(&mut self, color: Rgb565) {
        self.with_lock(|d| d.clear(color));
    }

    fn set_text_color(&mut self, fg: Rgb565, bg: Rgb565) {
        self.with_lock(|d| d.set_text_color(fg, bg));
    }

    fn draw_text(&mut self, text: &str, x: u16, y: u16, font: u8) {
        self.with_lock(|d| d.draw_text(text, x, y, font));
    }

    fn fill_rect(&mut self, x: u16, y: u16, width: u16, height: u16, color: Rgb565) {
        self.with_lock(|d| d.fill_rect(x, y, width, height, color));
    }

    fn draw_rect(&mut self, x: u16, y: u16, width: u16, height: u16, color: Rgb565) {
        self.with_lock(|d| d.draw_rect(x, y, width, height, color));
    }

    fn read_pixel(&mut self, x: u16, y: u16) -> Rgb565 {
        self.with_lock(|d| d.read_pixel(x, y))
    }

    fn width(&self) -> u16 {
        self.with_lock(|d| d.width())
    }

    fn height(&self) -> u16 {
        self.with_lock(|d| d.height())
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    /// Counts primitive calls; no real hardware involved
    struct CountingSurface {
        ops: u32,
    }

    impl Surface for CountingSurface {
        fn clear(&mut self, _color: Rgb565) {
            self.ops += 1;
        }
        fn set_text_color(&mut self, _fg: Rgb565, _bg: Rgb565) {
            self.ops += 1;
        }
        fn draw_text(&mut self, _text: &str, _x: u16, _y: u16, _font: u8) {
            self.ops += 1;
        }
        fn fill_rect(&mut self, _x: u16, _y: u16, _w: u16, _h: u16, _color: Rgb565) {
            self.ops += 1;
        }
        fn draw_rect(&mut self, _x: u16, _y: u16, _w: u16, _h: u16, _color: Rgb565) {
            self.ops += 1;
        }
        fn read_pixel(&mut self, _x: u16, _y: u16) -> Rgb565 {
            Rgb565::BLACK
        }
        fn width(&self) -> u16 {
            240
        }
        fn height(&self) -> u16 {
            240
        }
    }

    fn leak_mutex() -> &'static SurfaceMutex<CountingSurface> {
        // Tests need a 'static mutex; leaking one per test is fine
        std::boxed::Box::leak(std::boxed::Box::new(Mutex::new(RefCell::new(
            CountingSurface { ops: 0 },
        ))))
    }

    #[test]
    fn test_primitives_forward_through_lock() {
        let mutex = leak_mutex();
        let mut handle = SharedSurface::new(mutex);

        handle.clear(Rgb565::BLACK);
        handle.set_text_color(Rgb565::WHITE, Rgb565::BLACK);
        handle.draw_text("cab", 0, 0, 2);
        handle.fill_rect(0, 0, 10, 10, Rgb565::WHITE);
        handle.draw_rect(0, 0, 10, 10, Rgb565::WHITE);

        assert_eq!(handle.with_lock(|d| d.ops), 5);
    }

    #[test]
    fn test_copies_share_one_device() {
        let mutex = leak_mutex();
        let mut a = SharedSurface::new(mutex);
        let mut b = a;

        a.clear(Rgb565::BLACK);
        b.clear(Rgb565::BLACK);

        assert_eq!(a.with_lock(|d| d.ops), 2);
    }

    #[test]
    fn test_dimensions_pass_through() {
        let mutex = leak_mutex();
        let handle = SharedSurface::new(mutex);
        assert_eq!(handle.width(), 240);
        assert_eq!(handle.height(), 240);
    }
}
