//! WS2812 addressable LED driver using the RMT peripheral.
//!
//! One LED sits under each button, chained row by row from the top-left.

extern crate alloc;

use defmt::error;
use embassy_time::{
    Duration,
    Timer,
};
use esp_hal::{
    Blocking,
    gpio::Level,
    rmt::{
        PulseCode,
        Tx,
    },
};

use crate::{
    colours::{
        BLACK,
        Colour,
    },
    grid::{
        CELL_COUNT,
        Cell,
    },
    hal::PixelGrid,
};

/// Number of WS2812 LEDs in the chain.
pub const LED_COUNT: usize = CELL_COUNT;

/// WS2812 grid driver.
///
/// Maintains an in-memory framebuffer that is flushed to hardware
/// with [`update`](Leds::update), scaled by the global brightness.
pub struct Leds<'a> {
    channel: Option<esp_hal::rmt::Channel<'a, Blocking, Tx>>,
    framebuffer: [Colour; LED_COUNT],
    brightness: u8,
}

impl<'a> Leds<'a> {
    pub const fn new(channel: esp_hal::rmt::Channel<'a, Blocking, Tx>) -> Self {
        Self {
            channel: Some(channel),
            framebuffer: [BLACK; LED_COUNT],
            brightness: u8::MAX,
        }
    }

    /// Flush the framebuffer to the physical LEDs.
    pub async fn update(&mut self) {
        let Some(channel) = self.channel.take() else {
            error!("RMT channel lost during previous transmission");
            return;
        };

        let brightness = self.brightness;
        let pulses = self
            .framebuffer
            .iter()
            .flat_map(|colour| {
                // WS2812 expects GRB byte order
                [
                    Self::byte_to_pulses(scale(colour.green, brightness)),
                    Self::byte_to_pulses(scale(colour.red, brightness)),
                    Self::byte_to_pulses(scale(colour.blue, brightness)),
                ]
                .into_iter()
                .flatten()
            })
            .chain(core::iter::once(PulseCode::end_marker()))
            .collect::<alloc::vec::Vec<_>>();

        let transaction = match channel.transmit(&pulses) {
            Ok(t) => t,
            Err(e) => {
                error!("RMT transmit failed: {}", e);
                return;
            }
        };

        self.channel = Some(match transaction.wait() {
            Ok(ch) => ch,
            Err((err, ch)) => {
                error!("RMT transaction failed: {}", err);
                ch
            }
        });

        // WS2812 reset time
        Timer::after(Duration::from_micros(50)).await;
    }

    pub const fn set(&mut self, cell: Cell, colour: Colour) {
        self.framebuffer[cell.index()] = colour;
    }

    // ── Internal helpers ────────────────────────────────────────────────

    /// WS2812 bit timing at 40 MHz RMT clock.
    const fn bit_to_pulse(bit: bool) -> PulseCode {
        if bit {
            // '1': 0.8 µs high (32 ticks), 0.45 µs low (18 ticks)
            PulseCode::new(Level::High, 32, Level::Low, 18)
        } else {
            // '0': 0.4 µs high (16 ticks), 0.85 µs low (34 ticks)
            PulseCode::new(Level::High, 16, Level::Low, 34)
        }
    }

    fn byte_to_pulses(byte: u8) -> [PulseCode; 8] {
        let mut pulses = [PulseCode::default(); 8];
        for (i, pulse) in pulses.iter_mut().enumerate() {
            *pulse = Self::bit_to_pulse((byte >> (7 - i)) & 1 != 0);
        }
        pulses
    }
}

const fn scale(channel: u8, brightness: u8) -> u8 {
    ((channel as u16 * brightness as u16) / u8::MAX as u16) as u8
}

impl PixelGrid for Leds<'_> {
    fn set_pixel(&mut self, cell: Cell, colour: Colour) {
        self.set(cell, colour);
    }

    fn fill(&mut self, colour: Colour) {
        self.framebuffer.fill(colour);
    }

    async fn show(&mut self) {
        self.update().await;
    }

    fn set_brightness(&mut self, brightness: u8) {
        self.brightness = brightness;
    }
}
