//! Modal list-selection dialog
//!
//! Presents a title, a list of items and an OK/Cancel pair. Directional
//! input goes to whichever region holds focus; resolving the dialog invokes
//! its callback exactly once with the accept flag and the chosen item.

use alloc::boxed::Box;

use heapless::Vec;

use conductor_display::{Button, Rgb565, Surface, DIALOG_LIST_TOP_Y, ITEM_HEIGHT, MAX_VISIBLE_ITEMS};

use crate::error::UiError;
use crate::item::{truncate_label, Label, ListItem};
use crate::page::{Page, PageAction};

/// Maximum items a dialog can present
pub const MAX_DIALOG_ITEMS: usize = 16;

/// Resolution callback: `(accepted, selected item)`
pub type DialogCallback = Box<dyn FnMut(bool, &ListItem)>;

const TITLE_X: u16 = 10;
const TITLE_Y: u16 = 10;
const DIALOG_FONT: u8 = 2;
const BUTTON_WIDTH: u16 = 80;
const BUTTON_HEIGHT: u16 = 28;
const BUTTON_MARGIN: u16 = 12;

/// Which region of the dialog receives directional input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Focus {
    List,
    Buttons,
}

/// The two resolution controls
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DialogButton {
    Ok,
    Cancel,
}

/// Modal list dialog page
pub struct DialogListPage<D: Surface> {
    display: D,
    title: Label,
    items: Vec<ListItem, MAX_DIALOG_ITEMS>,
    selected_index: usize,
    scroll_offset: usize,
    focus: Focus,
    selected_button: DialogButton,
    /// Taken at resolution; `None` afterwards, enforcing exactly-once
    callback: Option<DialogCallback>,
}

impl<D: Surface> DialogListPage<D> {
    /// Create a dialog over a non-empty item list
    ///
    /// Items beyond `MAX_DIALOG_ITEMS` are dropped. An empty list is
    /// rejected outright: the selection index would have nothing to point
    /// at.
    pub fn new(
        display: D,
        title: &str,
        items: &[ListItem],
        callback: DialogCallback,
    ) -> Result<Self, UiError> {
        if items.is_empty() {
            return Err(UiError::EmptyItemList);
        }

        let mut owned = Vec::new();
        for item in items {
            if owned.push(item.clone()).is_err() {
                #[cfg(feature = "defmt")]
                defmt::warn!("dialog list full, dropping items");
                break;
            }
        }

        Ok(Self {
            display,
            title: truncate_label(title),
            items: owned,
            selected_index: 0,
            scroll_offset: 0,
            focus: Focus::List,
            selected_button: DialogButton::Ok,
            callback: Some(callback),
        })
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    pub fn selected_index(&self) -> usize {
        self.selected_index
    }

    pub fn scroll_offset(&self) -> usize {
        self.scroll_offset
    }

    pub fn selected_button(&self) -> DialogButton {
        self.selected_button
    }

    /// Invoke the callback with the resolution and request the pop
    fn resolve(&mut self) -> PageAction<D> {
        if let Some(mut callback) = self.callback.take() {
            let accepted = self.selected_button == DialogButton::Ok;
            if let Some(item) = self.items.get(self.selected_index) {
                callback(accepted, item);
            }
        }
        PageAction::Pop
    }

    fn handle_list_event(&mut self, button: Button) {
        match button {
            Button::Up => {
                if self.selected_index > 0 {
                    self.selected_index -= 1;
                    if self.selected_index < self.scroll_offset {
                        self.scroll_offset -= 1;
                    }
                }
            }
            Button::Down => {
                if self.selected_index + 1 < self.items.len() {
                    self.selected_index += 1;
                    if self.selected_index >= self.scroll_offset + MAX_VISIBLE_ITEMS {
                        self.scroll_offset += 1;
                    }
                }
            }
            // The dedicated focus toggle; Right reads naturally as
            // "onwards to the buttons" as well
            Button::Ok | Button::Right => {
                self.focus = Focus::Buttons;
            }
            Button::Left => {}
        }
    }

    fn draw_items(&mut self) {
        let list_focused = self.focus == Focus::List;
        let visible = self.items.len().min(MAX_VISIBLE_ITEMS);
        for row in 0..visible {
            let index = self.scroll_offset + row;
            let Some(item) = self.items.get(index) else {
                break;
            };

            if list_focused && index == self.selected_index {
                self.display.set_text_color(Rgb565::BLACK, Rgb565::WHITE);
            } else {
                self.display.set_text_color(Rgb565::WHITE, Rgb565::BLACK);
            }
            self.display.draw_text(
                item.label(),
                TITLE_X,
                DIALOG_LIST_TOP_Y + row as u16 * ITEM_HEIGHT,
                DIALOG_FONT,
            );
        }
    }

    fn draw_buttons(&mut self) {
        let y = self.display.height() - BUTTON_HEIGHT - BUTTON_MARGIN;
        let ok_x = BUTTON_MARGIN;
        let cancel_x = self.display.width() - BUTTON_WIDTH - BUTTON_MARGIN;

        self.draw_button("OK", ok_x, y, DialogButton::Ok);
        self.draw_button("Cancel", cancel_x, y, DialogButton::Cancel);
    }

    fn draw_button(&mut self, label: &str, x: u16, y: u16, which: DialogButton) {
        let highlighted = self.focus == Focus::Buttons && self.selected_button == which;
        let d = &mut self.display;

        if highlighted {
            d.fill_rect(x, y, BUTTON_WIDTH, BUTTON_HEIGHT, Rgb565::WHITE);
            d.set_text_color(Rgb565::BLACK, Rgb565::WHITE);
        } else {
            d.draw_rect(x, y, BUTTON_WIDTH, BUTTON_HEIGHT, Rgb565::WHITE);
            d.set_text_color(Rgb565::WHITE, Rgb565::BLACK);
        }
        d.draw_text(label, x + 12, y + 6, DIALOG_FONT);
    }
}

impl<D: Surface> Page<D> for DialogListPage<D> {
    fn handle_event(&mut self, button: Button) -> PageAction<D> {
        match self.focus {
            Focus::List => {
                self.handle_list_event(button);
                PageAction::None
            }
            Focus::Buttons => match button {
                Button::Left => {
                    self.selected_button = DialogButton::Ok;
                    PageAction::None
                }
                Button::Right => {
                    self.selected_button = DialogButton::Cancel;
                    PageAction::None
                }
                Button::Up => {
                    self.focus = Focus::List;
                    PageAction::None
                }
                Button::Ok => self.resolve(),
                Button::Down => PageAction::None,
            },
        }
    }

    fn draw(&mut self) {
        self.display.clear(Rgb565::BLACK);
        self.display.set_text_color(Rgb565::WHITE, Rgb565::BLACK);
        self.display.draw_text(&self.title, TITLE_X, TITLE_Y, DIALOG_FONT);

        self.draw_items();
        self.draw_buttons();
    }

    fn display(&self) -> &D {
        &self.display
    }
}
