//! Page capability and navigation actions
//!
//! A page is one full-screen UI state. The navigation stack holds pages
//! behind this trait only, never as concrete types.

use alloc::boxed::Box;

use conductor_display::{Button, Surface};

/// An exclusively-owned page on (or destined for) the stack
pub type BoxedPage<D> = Box<dyn Page<D>>;

/// What a page wants the manager to do after handling an input
///
/// Returned instead of calling into a global manager: the page stays a pure
/// state machine and the `PageManager` applies the stack mutation.
pub enum PageAction<D: Surface> {
    /// No navigation; the page mutated (or ignored) its own state
    None,
    /// Transfer ownership of a new page onto the stack
    Push(BoxedPage<D>),
    /// Destroy the current top page and return to the one below
    Pop,
}

/// Capability set of a full-screen UI state
pub trait Page<D: Surface> {
    /// Feed one accepted button press through the page's state machine
    fn handle_event(&mut self, button: Button) -> PageAction<D>;

    /// Repaint the full page content
    fn draw(&mut self);

    /// The page's display handle
    fn display(&self) -> &D;
}
