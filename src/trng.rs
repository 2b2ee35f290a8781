//! Hardware random numbers as a [`RngCore`].

use esp_hal::rng::Rng;
use rand::{
    RngCore,
    rand_core::impls,
};

/// The ESP32-S3 RNG. Output is true random while the radio or the ADC
/// is running and pseudo-random otherwise.
pub struct Trng {
    rng: Rng,
}

impl Trng {
    pub fn new() -> Self {
        Self { rng: Rng::new() }
    }
}

impl Default for Trng {
    fn default() -> Self {
        Self::new()
    }
}

impl RngCore for Trng {
    fn next_u32(&mut self) -> u32 {
        self.rng.random()
    }

    fn next_u64(&mut self) -> u64 {
        impls::next_u64_via_u32(self)
    }

    fn fill_bytes(&mut self, dst: &mut [u8]) {
        impls::fill_bytes_via_next(self, dst);
    }
}
