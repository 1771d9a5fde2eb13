//! Cab button inputs
//!
//! Five momentary buttons wired active-low with internal pull-ups.

use embassy_rp::gpio::Input;

use conductor_display::{Button, ButtonSource};

/// The five physical cab buttons
pub struct CabButtons {
    up: Input<'static>,
    down: Input<'static>,
    left: Input<'static>,
    right: Input<'static>,
    ok: Input<'static>,
}

impl CabButtons {
    pub fn new(
        up: Input<'static>,
        down: Input<'static>,
        left: Input<'static>,
        right: Input<'static>,
        ok: Input<'static>,
    ) -> Self {
        Self {
            up,
            down,
            left,
            right,
            ok,
        }
    }
}

impl ButtonSource for CabButtons {
    fn is_pressed(&mut self, button: Button) -> bool {
        let pin = match button {
            Button::Up => &self.up,
            Button::Down => &self.down,
            Button::Left => &self.left,
            Button::Right => &self.right,
            Button::Ok => &self.ok,
        };
        // Active low
        pin.is_low()
    }
}
