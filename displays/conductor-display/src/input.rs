//! Physical button input
//!
//! The cab has five buttons wired active-low. Pages interpret raw buttons
//! themselves (e.g. a menu treats Right and OK both as "activate"), so the
//! event type here is just the button identity.

/// Milliseconds to block after an accepted press
///
/// Acts as a crude debounce and throttles the navigation repeat rate.
pub const DEBOUNCE_MS: u32 = 200;

/// One of the five cab buttons
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Button {
    Up,
    Down,
    Left,
    Right,
    Ok,
}

impl Button {
    /// Scan priority when several buttons are held at once
    ///
    /// Left (back) is checked last so it never wins over an activation.
    pub const SCAN_ORDER: [Button; 5] = [
        Button::Up,
        Button::Down,
        Button::Right,
        Button::Ok,
        Button::Left,
    ];
}

/// Level-read source for the five cab buttons
///
/// Implementors translate the active-low hardware reads, so `is_pressed`
/// returns `true` while the button is held.
pub trait ButtonSource {
    /// Check whether a button is currently held
    fn is_pressed(&mut self, button: Button) -> bool;

    /// Return the first held button in scan-priority order, if any
    fn scan(&mut self) -> Option<Button> {
        for button in Button::SCAN_ORDER {
            if self.is_pressed(button) {
                return Some(button);
            }
        }
        None
    }
}
