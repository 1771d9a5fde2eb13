//! Drawing surface trait
//!
//! Defines the pixel-level primitives pages render with. Implementations
//! handle the specifics of the attached panel (or of a test double); faults
//! on the wire are the implementor's problem, so the primitives are
//! infallible at this boundary.

use crate::color::Rgb565;

/// Rows visible at once in a scrolling list
pub const MAX_VISIBLE_ITEMS: usize = 5;

/// Pixel height of one list row
pub const ITEM_HEIGHT: u16 = 24;

/// Top edge of the menu item list
pub const LIST_TOP_Y: u16 = 20;

/// Top edge of a dialog's item list (below the title)
pub const DIALOG_LIST_TOP_Y: u16 = 40;

/// Width of the scrollbar track at the right screen edge
pub const SCROLLBAR_WIDTH: u16 = 6;

/// Drawing surface trait
///
/// Provides a hardware-agnostic interface for rendering to the cab display.
/// Text color state is sticky: `set_text_color` applies to every following
/// `draw_text` until changed, matching how TFT controllers work.
pub trait Surface {
    /// Fill the entire screen with one color
    fn clear(&mut self, color: Rgb565);

    /// Set foreground/background colors for subsequent text
    fn set_text_color(&mut self, fg: Rgb565, bg: Rgb565);

    /// Draw a text string with its top-left corner at (x, y)
    ///
    /// - `font`: font selector (1 = small, 2 = medium), implementation-defined
    fn draw_text(&mut self, text: &str, x: u16, y: u16, font: u8);

    /// Fill a rectangle
    fn fill_rect(&mut self, x: u16, y: u16, width: u16, height: u16, color: Rgb565);

    /// Draw a rectangle outline
    fn draw_rect(&mut self, x: u16, y: u16, width: u16, height: u16, color: Rgb565);

    /// Read back the color of a single pixel
    ///
    /// Write-only panels may return a best-effort value (e.g. the last
    /// clear color).
    fn read_pixel(&mut self, x: u16, y: u16) -> Rgb565;

    /// Screen width in pixels
    fn width(&self) -> u16;

    /// Screen height in pixels
    fn height(&self) -> u16;
}
