//! RGB565 color type and the cab UI palette

/// A 16-bit RGB565 color value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Rgb565(pub u16);

impl Rgb565 {
    pub const BLACK: Rgb565 = Rgb565(0x0000);
    pub const WHITE: Rgb565 = Rgb565(0xFFFF);
    pub const DARK_GREY: Rgb565 = Rgb565(0x7BEF);
    pub const NAVY: Rgb565 = Rgb565(0x000F);
    pub const MAROON: Rgb565 = Rgb565(0x7800);
    pub const RED: Rgb565 = Rgb565(0xF800);

    /// Build a color from 8-bit channel values
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        let r = (r as u16 >> 3) << 11;
        let g = (g as u16 >> 2) << 5;
        let b = b as u16 >> 3;
        Rgb565(r | g | b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_rgb_extremes() {
        assert_eq!(Rgb565::from_rgb(0, 0, 0), Rgb565::BLACK);
        assert_eq!(Rgb565::from_rgb(255, 255, 255), Rgb565::WHITE);
        assert_eq!(Rgb565::from_rgb(255, 0, 0), Rgb565::RED);
    }
}
