//! The fixed eight-colour palette.

use palette::Srgb;

/// Colour of one LED.
pub type Colour = Srgb<u8>;

pub const BLACK: Colour = Srgb::new(0, 0, 0);
pub const RED: Colour = Srgb::new(0xFF, 0x00, 0x00);
pub const ORANGE: Colour = Srgb::new(0xFF, 0x44, 0x00);
pub const YELLOW: Colour = Srgb::new(0xFF, 0xFF, 0x00);
pub const GREEN: Colour = Srgb::new(0x00, 0xFF, 0x00);
pub const CYAN: Colour = Srgb::new(0x00, 0xFF, 0xFF);
pub const BLUE: Colour = Srgb::new(0x00, 0x00, 0xFF);
pub const PURPLE: Colour = Srgb::new(0x88, 0x00, 0xFF);
pub const PINK: Colour = Srgb::new(0xFF, 0x44, 0x44);

/// Rainbow order used for level colours and the intro trail.
pub const PALETTE: [Colour; 8] = [RED, ORANGE, YELLOW, GREEN, CYAN, BLUE, PURPLE, PINK];

/// Number of palette entries.
pub const PALETTE_LEN: u32 = PALETTE.len() as u32;

/// Palette entry for `index`, wrapping around.
pub const fn rainbow(index: u32) -> Colour {
    PALETTE[(index % PALETTE_LEN) as usize]
}
