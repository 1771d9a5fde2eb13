//! ST7789 TFT panel driver
//!
//! Minimal blocking driver for the 240x240 cab panel over SPI, plus the
//! `Surface` implementation the UI core draws through. Text rendering uses
//! embedded-graphics mono fonts; the panel is wired write-only (no MISO),
//! so pixel read-back reports the last clear color.

use embassy_rp::gpio::Output;
use embassy_rp::peripherals::SPI0;
use embassy_rp::spi::{Blocking, Spi};
use embedded_graphics::mono_font::ascii::{FONT_6X10, FONT_9X15};
use embedded_graphics::mono_font::MonoTextStyleBuilder;
use embedded_graphics::pixelcolor::raw::RawU16;
use embedded_graphics::pixelcolor::Rgb565 as EgRgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyle, Rectangle};
use embedded_graphics::text::{Baseline, Text};
use embedded_hal::delay::DelayNs;

use conductor_display::{Rgb565, Surface};

/// Panel dimensions
const WIDTH: u16 = 240;
const HEIGHT: u16 = 240;

/// ST7789 commands
#[allow(dead_code)]
mod cmd {
    pub const SWRESET: u8 = 0x01;
    pub const SLPOUT: u8 = 0x11;
    pub const NORON: u8 = 0x13;
    pub const INVON: u8 = 0x21;
    pub const DISPON: u8 = 0x29;
    pub const CASET: u8 = 0x2A;
    pub const RASET: u8 = 0x2B;
    pub const RAMWR: u8 = 0x2C;
    pub const MADCTL: u8 = 0x36;
    pub const COLMOD: u8 = 0x3A;
}

type SpiError = embassy_rp::spi::Error;

/// ST7789 TFT driver
pub struct St7789 {
    spi: Spi<'static, SPI0, Blocking>,
    dc: Output<'static>,
    rst: Output<'static>,
    text_fg: EgRgb565,
    text_bg: EgRgb565,
    /// Last full-screen clear color, reported by `read_pixel`
    clear_color: Rgb565,
}

impl St7789 {
    /// Create a new driver; call `init` before drawing
    pub fn new(
        spi: Spi<'static, SPI0, Blocking>,
        dc: Output<'static>,
        rst: Output<'static>,
    ) -> Self {
        Self {
            spi,
            dc,
            rst,
            text_fg: EgRgb565::WHITE,
            text_bg: EgRgb565::BLACK,
            clear_color: Rgb565::BLACK,
        }
    }

    /// Hardware reset and panel initialization
    pub fn init(&mut self, delay: &mut impl DelayNs) -> Result<(), SpiError> {
        self.rst.set_low();
        delay.delay_ms(50);
        self.rst.set_high();
        delay.delay_ms(50);

        self.command(cmd::SWRESET, &[])?;
        delay.delay_ms(150);
        self.command(cmd::SLPOUT, &[])?;
        delay.delay_ms(10);
        self.command(cmd::COLMOD, &[0x55])?; // 16-bit RGB565
        self.command(cmd::MADCTL, &[0x00])?;
        self.command(cmd::INVON, &[])?; // ST7789 panels ship inverted
        self.command(cmd::NORON, &[])?;
        self.command(cmd::DISPON, &[])?;
        delay.delay_ms(10);

        Ok(())
    }

    /// Send a command byte followed by its arguments
    fn command(&mut self, command: u8, args: &[u8]) -> Result<(), SpiError> {
        self.dc.set_low();
        self.spi.blocking_write(&[command])?;
        if !args.is_empty() {
            self.dc.set_high();
            self.spi.blocking_write(args)?;
        }
        Ok(())
    }

    /// Set the active drawing window (inclusive corners) and start RAM write
    fn set_window(&mut self, x0: u16, y0: u16, x1: u16, y1: u16) -> Result<(), SpiError> {
        self.command(
            cmd::CASET,
            &[(x0 >> 8) as u8, x0 as u8, (x1 >> 8) as u8, x1 as u8],
        )?;
        self.command(
            cmd::RASET,
            &[(y0 >> 8) as u8, y0 as u8, (y1 >> 8) as u8, y1 as u8],
        )?;
        self.command(cmd::RAMWR, &[])?;
        self.dc.set_high();
        Ok(())
    }

    /// Stream one color over `count` pixels of the active window
    fn write_solid(&mut self, raw: u16, count: u32) -> Result<(), SpiError> {
        let mut chunk = [0u8; 64];
        for pair in chunk.chunks_exact_mut(2) {
            pair[0] = (raw >> 8) as u8;
            pair[1] = raw as u8;
        }

        let mut remaining = count as usize * 2;
        while remaining > 0 {
            let n = remaining.min(chunk.len());
            self.spi.blocking_write(&chunk[..n])?;
            remaining -= n;
        }
        Ok(())
    }
}

impl OriginDimensions for St7789 {
    fn size(&self) -> Size {
        Size::new(WIDTH as u32, HEIGHT as u32)
    }
}

impl DrawTarget for St7789 {
    type Color = EgRgb565;
    type Error = SpiError;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            if point.x < 0 || point.y < 0 || point.x >= WIDTH as i32 || point.y >= HEIGHT as i32 {
                continue;
            }
            let (x, y) = (point.x as u16, point.y as u16);
            let raw = RawU16::from(color).into_inner();
            self.set_window(x, y, x, y)?;
            self.spi.blocking_write(&[(raw >> 8) as u8, raw as u8])?;
        }
        Ok(())
    }

    fn fill_solid(&mut self, area: &Rectangle, color: Self::Color) -> Result<(), Self::Error> {
        let clipped = area.intersection(&self.bounding_box());
        let Some(clipped_br) = clipped.bottom_right() else {
            return Ok(());
        };

        let x0 = clipped.top_left.x as u16;
        let y0 = clipped.top_left.y as u16;
        let x1 = clipped_br.x as u16;
        let y1 = clipped_br.y as u16;

        self.set_window(x0, y0, x1, y1)?;
        let count = clipped.size.width * clipped.size.height;
        self.write_solid(RawU16::from(color).into_inner(), count)
    }
}

impl Surface for St7789 {
    fn clear(&mut self, color: Rgb565) {
        self.clear_color = color;
        let _ = self.fill_solid(
            &Rectangle::new(Point::zero(), Size::new(WIDTH as u32, HEIGHT as u32)),
            eg_color(color),
        );
    }

    fn set_text_color(&mut self, fg: Rgb565, bg: Rgb565) {
        self.text_fg = eg_color(fg);
        self.text_bg = eg_color(bg);
    }

    fn draw_text(&mut self, text: &str, x: u16, y: u16, font: u8) {
        let font = match font {
            1 => &FONT_6X10,
            _ => &FONT_9X15,
        };
        let style = MonoTextStyleBuilder::new()
            .font(font)
            .text_color(self.text_fg)
            .background_color(self.text_bg)
            .build();
        let _ = Text::with_baseline(text, Point::new(x as i32, y as i32), style, Baseline::Top)
            .draw(self);
    }

    fn fill_rect(&mut self, x: u16, y: u16, width: u16, height: u16, color: Rgb565) {
        let _ = self.fill_solid(
            &Rectangle::new(
                Point::new(x as i32, y as i32),
                Size::new(width as u32, height as u32),
            ),
            eg_color(color),
        );
    }

    fn draw_rect(&mut self, x: u16, y: u16, width: u16, height: u16, color: Rgb565) {
        let _ = Rectangle::new(
            Point::new(x as i32, y as i32),
            Size::new(width as u32, height as u32),
        )
        .into_styled(PrimitiveStyle::with_stroke(eg_color(color), 1))
        .draw(self);
    }

    fn read_pixel(&mut self, _x: u16, _y: u16) -> Rgb565 {
        // Write-only wiring; best effort per the Surface contract
        self.clear_color
    }

    fn width(&self) -> u16 {
        WIDTH
    }

    fn height(&self) -> u16 {
        HEIGHT
    }
}

fn eg_color(color: Rgb565) -> EgRgb565 {
    EgRgb565::from(RawU16::new(color.0))
}
