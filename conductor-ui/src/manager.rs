//! Navigation stack and tick loop
//!
//! The manager owns every pushed page exclusively. The root page lives in
//! its own slot, so "never pop the root" and "the stack is never empty"
//! are structural rather than checked.

use embedded_hal::delay::DelayNs;
use heapless::Vec;

use conductor_display::{ButtonSource, Surface, DEBOUNCE_MS};

use crate::error::UiError;
use crate::page::{BoxedPage, Page, PageAction};

/// Maximum pages stacked above the root
pub const MAX_PAGE_DEPTH: usize = 8;

/// Stack-based screen manager
///
/// Top of stack is the active page; it is the sole recipient of input and
/// draw dispatch. Popped pages are dropped immediately, never reused.
pub struct PageManager<D: Surface> {
    root: BoxedPage<D>,
    stack: Vec<BoxedPage<D>, MAX_PAGE_DEPTH>,
}

impl<D: Surface> PageManager<D> {
    /// Create a manager with its root page
    pub fn new(root: BoxedPage<D>) -> Self {
        Self {
            root,
            stack: Vec::new(),
        }
    }

    /// Take ownership of `page` and place it on top of the stack
    ///
    /// Errors with [`UiError::StackFull`] when the fixed-depth stack has no
    /// room; the rejected page is dropped.
    pub fn push_page(&mut self, page: BoxedPage<D>) -> Result<(), UiError> {
        self.stack.push(page).map_err(|_| UiError::StackFull)
    }

    /// Remove and destroy the current top page
    ///
    /// Silent no-op when only the root remains; the root is always
    /// available as the fallback UI.
    pub fn pop_page(&mut self) {
        drop(self.stack.pop());
    }

    /// Non-owning reference to the current top page
    pub fn top_page(&mut self) -> &mut dyn Page<D> {
        match self.stack.len() {
            0 => self.root.as_mut(),
            n => self.stack[n - 1].as_mut(),
        }
    }

    /// Current stack depth, root included
    pub fn depth(&self) -> usize {
        1 + self.stack.len()
    }

    /// One iteration of the host polling loop
    ///
    /// Scans the buttons, feeds an accepted press to the top page, applies
    /// the resulting navigation, blocks for the debounce interval, then
    /// repaints whichever page is now on top.
    pub fn tick<S, T>(&mut self, input: &mut S, delay: &mut T)
    where
        S: ButtonSource,
        T: DelayNs,
    {
        if let Some(button) = input.scan() {
            match self.top_page().handle_event(button) {
                PageAction::Push(page) => {
                    if self.push_page(page).is_err() {
                        #[cfg(feature = "defmt")]
                        defmt::warn!("page stack full, dropping pushed page");
                    }
                }
                PageAction::Pop => self.pop_page(),
                PageAction::None => {}
            }
            delay.delay_ms(DEBOUNCE_MS);
        }

        self.top_page().draw();
    }
}
