//! Test doubles shared by the in-crate unit tests

use alloc::string::String;
use alloc::vec::Vec;

use conductor_display::{Button, ButtonSource, Rgb565, Surface};

/// A recorded drawing primitive
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Op {
    Clear(Rgb565),
    TextColor(Rgb565, Rgb565),
    Text(String, u16, u16, u8),
    FillRect(u16, u16, u16, u16, Rgb565),
    DrawRect(u16, u16, u16, u16, Rgb565),
}

/// Surface double that records every primitive call
pub struct RecordingSurface {
    pub ops: Vec<Op>,
    width: u16,
    height: u16,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self {
            ops: Vec::new(),
            width: 240,
            height: 240,
        }
    }

    /// Texts drawn since the last clear, in draw order
    pub fn texts(&self) -> Vec<&str> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                Op::Text(text, _, _, _) => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Text color in effect when `text` was drawn
    pub fn color_of(&self, text: &str) -> Option<(Rgb565, Rgb565)> {
        let mut current = None;
        for op in &self.ops {
            match op {
                Op::TextColor(fg, bg) => current = Some((*fg, *bg)),
                Op::Text(t, _, _, _) if t == text => return current,
                _ => {}
            }
        }
        None
    }
}

impl Surface for RecordingSurface {
    fn clear(&mut self, color: Rgb565) {
        self.ops.push(Op::Clear(color));
    }

    fn set_text_color(&mut self, fg: Rgb565, bg: Rgb565) {
        self.ops.push(Op::TextColor(fg, bg));
    }

    fn draw_text(&mut self, text: &str, x: u16, y: u16, font: u8) {
        self.ops.push(Op::Text(String::from(text), x, y, font));
    }

    fn fill_rect(&mut self, x: u16, y: u16, width: u16, height: u16, color: Rgb565) {
        self.ops.push(Op::FillRect(x, y, width, height, color));
    }

    fn draw_rect(&mut self, x: u16, y: u16, width: u16, height: u16, color: Rgb565) {
        self.ops.push(Op::DrawRect(x, y, width, height, color));
    }

    fn read_pixel(&mut self, _x: u16, _y: u16) -> Rgb565 {
        Rgb565::BLACK
    }

    fn width(&self) -> u16 {
        self.width
    }

    fn height(&self) -> u16 {
        self.height
    }
}

/// Button source driven by a per-tick script
pub struct ScriptedButtons {
    script: Vec<Option<Button>>,
    next: usize,
}

impl ScriptedButtons {
    pub fn new(script: &[Option<Button>]) -> Self {
        Self {
            script: script.to_vec(),
            next: 0,
        }
    }
}

impl ButtonSource for ScriptedButtons {
    fn is_pressed(&mut self, _button: Button) -> bool {
        false
    }

    // One scripted press per scan; exhausted script reads as idle
    fn scan(&mut self) -> Option<Button> {
        let press = self.script.get(self.next).copied().flatten();
        self.next += 1;
        press
    }
}

/// Delay double that does nothing
pub struct NoopDelay;

impl embedded_hal::delay::DelayNs for NoopDelay {
    fn delay_ns(&mut self, _ns: u32) {}
}

/// Delay double counting `delay_ms` calls
pub struct CountingDelay(pub u32);

impl embedded_hal::delay::DelayNs for CountingDelay {
    fn delay_ns(&mut self, _ns: u32) {}

    fn delay_ms(&mut self, _ms: u32) {
        self.0 += 1;
    }
}
