//! Board-agnostic page-navigation core for the cab controller
//!
//! This crate contains all UI logic that does not depend on specific
//! hardware implementations:
//!
//! - `Page` trait: the capability every full-screen UI state implements
//! - `PageManager`: the ownership-holding navigation stack and tick loop
//! - `MenuPage`: hierarchical, scrollable menus
//! - `DialogListPage`: modal list selection with OK/Cancel
//! - `ListItem`: one selectable row (label plus opaque value)
//!
//! Pages are generic over `conductor_display::Surface`, so the whole crate
//! runs on the host against a test double as well as on the cab itself.

#![no_std]
#![deny(unsafe_code)]

extern crate alloc;

pub mod dialog;
pub mod error;
pub mod item;
pub mod manager;
pub mod menu;
pub mod page;

#[cfg(test)]
pub(crate) mod testing;

pub use dialog::{DialogButton, DialogCallback, DialogListPage, Focus, MAX_DIALOG_ITEMS};
pub use error::UiError;
pub use item::{Label, ListItem, LABEL_LEN};
pub use manager::{PageManager, MAX_PAGE_DEPTH};
pub use menu::{MenuItem, MenuPage, MAX_MENU_ITEMS};
pub use page::{BoxedPage, Page, PageAction};
