//! Peripheral traits the game talks to.
//!
//! The board implements these with the WS2812 strip, the key matrix and the
//! ADXL345; tests implement them with recording mocks.

use crate::{
    colours::{
        BLACK,
        Colour,
    },
    grid::Cell,
    input::KeySet,
};

/// A buffered grid of RGB pixels, one per button.
pub trait PixelGrid {
    /// Writes one pixel into the buffer.
    fn set_pixel(&mut self, cell: Cell, colour: Colour);

    /// Writes every pixel into the buffer.
    fn fill(&mut self, colour: Colour);

    fn clear(&mut self) {
        self.fill(BLACK);
    }

    /// Pushes the buffer to the LEDs.
    fn show(&mut self) -> impl core::future::Future<Output = ()>;

    /// Global brightness, 0..=255, applied on [`PixelGrid::show`].
    fn set_brightness(&mut self, brightness: u8);
}

/// Reports the buttons held right now (level-triggered).
pub trait KeyScanner {
    fn pressed_keys(&mut self) -> impl core::future::Future<Output = KeySet>;
}

/// Acceleration in m/s².
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Acceleration {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

/// A three-axis accelerometer.
pub trait Accelerometer {
    type Error: core::fmt::Debug;

    fn acceleration(&mut self) -> Result<Acceleration, Self::Error>;
}
