//! Cab menu graph assembly
//!
//! Builds the static menu tree at boot. Submenus and the locomotive dialog
//! are owned by their parent items until activated, at which point their
//! ownership moves onto the navigation stack. Pushed-and-popped pages are
//! destroyed, so re-entering one requires rebuilding the graph; the cab
//! reboots into a fresh graph, which is all this unit needs.

use alloc::boxed::Box;

use core::fmt::Write;

use defmt::*;

use conductor_display::SharedSurface;
use conductor_ui::{BoxedPage, DialogListPage, ListItem, MenuPage};

use crate::st7789::St7789;

/// Surface handle every page draws through
pub type CabSurface = SharedSurface<St7789>;

/// Locomotives known to this cab unit (label, DCC address)
const LOCOMOTIVES: &[(&str, i32)] = &[
    ("BR 218 Regional", 218),
    ("BR 103 Express", 103),
    ("V 200 Diesel", 200),
    ("E 94 Freight", 94),
];

/// Build the root cab menu with its full submenu tree
pub fn build_root(surface: CabSurface) -> BoxedPage<CabSurface> {
    let mut root = MenuPage::new(surface);

    root.add_submenu("Drive", Box::new(drive_menu(surface)));
    add_locomotive_dialog(&mut root, surface);
    root.add_submenu("Turnouts", Box::new(turnout_menu(surface)));
    root.add_submenu("Settings", Box::new(settings_menu(surface)));

    Box::new(root)
}

fn drive_menu(surface: CabSurface) -> MenuPage<CabSurface> {
    let mut menu = MenuPage::with_parent(surface, "Cab");
    menu.add_action("Faster", || info!("throttle: step up"));
    menu.add_action("Slower", || info!("throttle: step down"));
    menu.add_action("Reverse", || info!("throttle: reverse"));
    menu.add_action("Emergency stop", || warn!("throttle: emergency stop"));
    menu
}

fn add_locomotive_dialog(root: &mut MenuPage<CabSurface>, surface: CabSurface) {
    let mut items: heapless::Vec<ListItem, 8> = heapless::Vec::new();
    for (label, address) in LOCOMOTIVES {
        let _ = items.push(ListItem::new(label, *address));
    }

    let dialog = DialogListPage::new(
        surface,
        "Select locomotive",
        &items,
        Box::new(|accepted, item| {
            if accepted {
                info!("locomotive selected: address {}", item.value());
            } else {
                info!("locomotive selection cancelled");
            }
        }),
    );

    match dialog {
        Ok(dialog) => root.add_submenu("Locomotive", Box::new(dialog)),
        Err(_) => warn!("locomotive list empty, dialog not added"),
    }
}

fn turnout_menu(surface: CabSurface) -> MenuPage<CabSurface> {
    // More rows than fit on screen, so this menu scrolls
    let mut menu = MenuPage::with_parent(surface, "Cab");
    for number in 1u8..=10 {
        let mut label: heapless::String<16> = heapless::String::new();
        let _ = write!(label, "Turnout {number}");
        menu.add_action(&label, move || info!("toggle turnout {}", number));
    }
    menu
}

fn settings_menu(surface: CabSurface) -> MenuPage<CabSurface> {
    let mut menu = MenuPage::with_parent(surface, "Cab");
    menu.add_action("Backlight", || info!("settings: cycle backlight"));
    menu.add_action("Key click", || info!("settings: toggle key click"));
    menu.add_action("About", || info!("conductor cab, fw 0.1.0"));
    menu
}
