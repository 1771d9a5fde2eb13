//! Hierarchical, scrollable menus
//!
//! A menu node owns its child items; an item either owns a submenu page or
//! holds a selection callback. Activating a submenu item transfers the
//! page's ownership to the navigation stack (single-use: the item's slot is
//! empty afterwards, until the menu graph is rebuilt).

use alloc::boxed::Box;

use heapless::Vec;

use conductor_display::{
    Button, Rgb565, Surface, ITEM_HEIGHT, LIST_TOP_Y, MAX_VISIBLE_ITEMS, SCROLLBAR_WIDTH,
};

use crate::item::{truncate_label, Label};
use crate::page::{BoxedPage, Page, PageAction};

/// Maximum items per menu node
pub const MAX_MENU_ITEMS: usize = 16;

/// Font selector for menu rows
const MENU_FONT: u8 = 2;

/// Left margin of row labels
const LABEL_X: u16 = 10;

/// One row of a menu: a submenu launcher or an action
///
/// At most one of `submenu`/`on_select` is meaningful; with both absent the
/// row is inert and activation does nothing.
pub struct MenuItem<D: Surface> {
    label: Label,
    submenu: Option<BoxedPage<D>>,
    on_select: Option<Box<dyn FnMut()>>,
}

impl<D: Surface> MenuItem<D> {
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Whether the item still owns its submenu page
    pub fn has_submenu(&self) -> bool {
        self.submenu.is_some()
    }
}

/// A tree-structured menu page
///
/// Selection state: `scroll_offset <= selected_index < scroll_offset +
/// MAX_VISIBLE_ITEMS` whenever the menu is non-empty; both clamp, neither
/// wraps.
pub struct MenuPage<D: Surface> {
    display: D,
    items: Vec<MenuItem<D>, MAX_MENU_ITEMS>,
    selected_index: usize,
    scroll_offset: usize,
    /// Label of the menu this one hangs under; context only, never ownership
    parent_label: Option<Label>,
}

impl<D: Surface> MenuPage<D> {
    /// Create an empty root-level menu
    pub fn new(display: D) -> Self {
        Self {
            display,
            items: Vec::new(),
            selected_index: 0,
            scroll_offset: 0,
            parent_label: None,
        }
    }

    /// Create an empty menu recording the label of its parent
    pub fn with_parent(display: D, parent_label: &str) -> Self {
        Self {
            parent_label: Some(truncate_label(parent_label)),
            ..Self::new(display)
        }
    }

    /// Append a row; a full menu drops the item
    pub fn add_item(
        &mut self,
        label: &str,
        submenu: Option<BoxedPage<D>>,
        on_select: Option<Box<dyn FnMut()>>,
    ) {
        let item = MenuItem {
            label: truncate_label(label),
            submenu,
            on_select,
        };
        if self.items.push(item).is_err() {
            #[cfg(feature = "defmt")]
            defmt::warn!("menu full, dropping item");
        }
    }

    /// Append a submenu launcher
    pub fn add_submenu(&mut self, label: &str, submenu: BoxedPage<D>) {
        self.add_item(label, Some(submenu), None);
    }

    /// Append an action row
    pub fn add_action(&mut self, label: &str, on_select: impl FnMut() + 'static) {
        self.add_item(label, None, Some(Box::new(on_select)));
    }

    pub fn selected_index(&self) -> usize {
        self.selected_index
    }

    pub fn scroll_offset(&self) -> usize {
        self.scroll_offset
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn parent_label(&self) -> Option<&str> {
        self.parent_label.as_deref()
    }

    pub fn items(&self) -> &[MenuItem<D>] {
        &self.items
    }

    /// Move the selection up one row, dragging the scroll window along
    fn move_up(&mut self) {
        if self.selected_index > 0 {
            self.selected_index -= 1;
            if self.selected_index < self.scroll_offset {
                self.scroll_offset -= 1;
            }
        }
    }

    /// Move the selection down one row, dragging the scroll window along
    fn move_down(&mut self) {
        if self.selected_index + 1 < self.items.len() {
            self.selected_index += 1;
            if self.selected_index >= self.scroll_offset + MAX_VISIBLE_ITEMS {
                self.scroll_offset += 1;
            }
        }
    }

    /// Activate the selected row
    ///
    /// A submenu moves onto the stack (the item's slot is emptied); an
    /// action runs synchronously; an inert row does nothing.
    fn activate(&mut self) -> PageAction<D> {
        let Some(item) = self.items.get_mut(self.selected_index) else {
            return PageAction::None;
        };

        if let Some(page) = item.submenu.take() {
            PageAction::Push(page)
        } else if let Some(on_select) = item.on_select.as_mut() {
            on_select();
            PageAction::None
        } else {
            PageAction::None
        }
    }
}

impl<D: Surface> Page<D> for MenuPage<D> {
    fn handle_event(&mut self, button: Button) -> PageAction<D> {
        match button {
            Button::Up => {
                self.move_up();
                PageAction::None
            }
            Button::Down => {
                self.move_down();
                PageAction::None
            }
            Button::Right | Button::Ok => self.activate(),
            Button::Left => PageAction::Pop,
        }
    }

    fn draw(&mut self) {
        let d = &mut self.display;
        d.clear(Rgb565::BLACK);

        let visible = self.items.len().min(MAX_VISIBLE_ITEMS);
        for row in 0..visible {
            let index = self.scroll_offset + row;
            let Some(item) = self.items.get(index) else {
                break;
            };

            if index == self.selected_index {
                d.set_text_color(Rgb565::BLACK, Rgb565::WHITE);
            } else {
                d.set_text_color(Rgb565::WHITE, Rgb565::BLACK);
            }
            d.draw_text(
                &item.label,
                LABEL_X,
                LIST_TOP_Y + row as u16 * ITEM_HEIGHT,
                MENU_FONT,
            );
        }

        // Scrollbar only when the list overflows the window
        if self.items.len() > MAX_VISIBLE_ITEMS {
            let track_height = MAX_VISIBLE_ITEMS as u16 * ITEM_HEIGHT;
            let len = self.items.len() as u16;
            let thumb_height = (MAX_VISIBLE_ITEMS as u16 * track_height) / len;
            // Thumb tracks the scroll window, not the selection
            let thumb_y = LIST_TOP_Y + (self.scroll_offset as u16 * track_height) / len;
            let x = d.width() - SCROLLBAR_WIDTH;

            d.fill_rect(x, LIST_TOP_Y, SCROLLBAR_WIDTH, track_height, Rgb565::DARK_GREY);
            d.fill_rect(x, thumb_y, SCROLLBAR_WIDTH, thumb_height, Rgb565::WHITE);
        }
    }

    fn display(&self) -> &D {
        &self.display
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::boxed::Box;
    use alloc::rc::Rc;
    use core::cell::Cell;

    use proptest::prelude::*;

    use super::*;
    use crate::testing::{Op, RecordingSurface};

    fn menu_with(count: usize) -> MenuPage<RecordingSurface> {
        let mut menu = MenuPage::new(RecordingSurface::new());
        for i in 0..count {
            let mut label = Label::new();
            let _ = core::fmt::write(&mut label, format_args!("item {i}"));
            menu.add_item(&label, None, None);
        }
        menu
    }

    #[test]
    fn test_up_at_top_is_noop() {
        let mut menu = menu_with(3);
        menu.handle_event(Button::Up);
        assert_eq!(menu.selected_index(), 0);
        assert_eq!(menu.scroll_offset(), 0);
    }

    #[test]
    fn test_down_at_bottom_is_noop() {
        let mut menu = menu_with(3);
        for _ in 0..5 {
            menu.handle_event(Button::Down);
        }
        assert_eq!(menu.selected_index(), 2);
        assert_eq!(menu.scroll_offset(), 0);
    }

    #[test]
    fn test_seven_downs_scroll_window() {
        // 10 items, 5 visible: 7 downs land on index 7 with offset 3
        let mut menu = menu_with(10);
        for _ in 0..7 {
            menu.handle_event(Button::Down);
        }
        assert_eq!(menu.selected_index(), 7);
        assert_eq!(menu.scroll_offset(), 3);
    }

    #[test]
    fn test_up_drags_window_back() {
        let mut menu = menu_with(10);
        for _ in 0..7 {
            menu.handle_event(Button::Down);
        }
        for _ in 0..7 {
            menu.handle_event(Button::Up);
        }
        assert_eq!(menu.selected_index(), 0);
        assert_eq!(menu.scroll_offset(), 0);
    }

    #[test]
    fn test_activate_runs_callback_once() {
        let fired = Rc::new(Cell::new(0u32));
        let counter = fired.clone();

        let mut menu = MenuPage::new(RecordingSurface::new());
        menu.add_action("go", move || counter.set(counter.get() + 1));

        let action = menu.handle_event(Button::Ok);
        assert!(matches!(action, PageAction::None));
        assert_eq!(fired.get(), 1);
    }

    #[test]
    fn test_activate_transfers_submenu_once() {
        let sub = Box::new(menu_with(1));
        let mut menu = MenuPage::new(RecordingSurface::new());
        menu.add_submenu("settings", sub);
        assert!(menu.items()[0].has_submenu());

        let first = menu.handle_event(Button::Right);
        assert!(matches!(first, PageAction::Push(_)));
        assert!(!menu.items()[0].has_submenu());

        // The slot is empty now; re-activation is inert
        let second = menu.handle_event(Button::Right);
        assert!(matches!(second, PageAction::None));
    }

    #[test]
    fn test_parent_state_untouched_while_child_active() {
        let mut menu = menu_with(6);
        menu.add_submenu("more", Box::new(menu_with(2)));
        for _ in 0..6 {
            menu.handle_event(Button::Down);
        }
        let (index, offset) = (menu.selected_index(), menu.scroll_offset());

        // Entering the submenu and coming back never mutates the parent
        let action = menu.handle_event(Button::Ok);
        assert!(matches!(action, PageAction::Push(_)));
        assert_eq!(menu.selected_index(), index);
        assert_eq!(menu.scroll_offset(), offset);
    }

    #[test]
    fn test_inert_item_activation_is_noop() {
        let mut menu = menu_with(2);
        let action = menu.handle_event(Button::Ok);
        assert!(matches!(action, PageAction::None));
    }

    #[test]
    fn test_back_requests_pop() {
        let mut menu = menu_with(2);
        assert!(matches!(menu.handle_event(Button::Left), PageAction::Pop));
    }

    #[test]
    fn test_draw_inverts_selected_row() {
        let mut menu = menu_with(3);
        menu.handle_event(Button::Down);
        menu.draw();

        let surface = menu.display();
        assert_eq!(
            surface.color_of("item 1"),
            Some((Rgb565::BLACK, Rgb565::WHITE))
        );
        assert_eq!(
            surface.color_of("item 0"),
            Some((Rgb565::WHITE, Rgb565::BLACK))
        );
    }

    #[test]
    fn test_draw_clips_to_visible_window() {
        let mut menu = menu_with(10);
        menu.draw();
        assert_eq!(menu.display().texts().len(), MAX_VISIBLE_ITEMS);
    }

    #[test]
    fn test_no_scrollbar_when_list_fits() {
        let mut menu = menu_with(4);
        menu.draw();
        let rects = menu
            .display()
            .ops
            .iter()
            .filter(|op| matches!(op, Op::FillRect(..)))
            .count();
        assert_eq!(rects, 0);
    }

    #[test]
    fn test_scrollbar_thumb_tracks_window() {
        let mut menu = menu_with(10);
        for _ in 0..7 {
            menu.handle_event(Button::Down);
        }
        menu.draw();

        let track_height = MAX_VISIBLE_ITEMS as u16 * ITEM_HEIGHT;
        let expected_y = LIST_TOP_Y + (3 * track_height) / 10;
        let x = 240 - SCROLLBAR_WIDTH;

        let thumb = Op::FillRect(
            x,
            expected_y,
            SCROLLBAR_WIDTH,
            (MAX_VISIBLE_ITEMS as u16 * track_height) / 10,
            Rgb565::WHITE,
        );
        assert!(menu.display().ops.contains(&thumb));
    }

    proptest! {
        /// The clamp invariants hold after any Up/Down sequence
        #[test]
        fn prop_selection_stays_in_window(
            count in 1usize..=MAX_MENU_ITEMS,
            moves in proptest::collection::vec(prop::bool::ANY, 0..64),
        ) {
            let mut menu = menu_with(count);
            for down in moves {
                let button = if down { Button::Down } else { Button::Up };
                menu.handle_event(button);

                prop_assert!(menu.selected_index() < count);
                prop_assert!(menu.scroll_offset() <= menu.selected_index());
                prop_assert!(menu.selected_index() < menu.scroll_offset() + MAX_VISIBLE_ITEMS);
            }
        }
    }
}
