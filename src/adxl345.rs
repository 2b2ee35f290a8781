//! ADXL345 three-axis accelerometer over I2C.

use embedded_hal::i2c::I2c;
use thiserror::Error;

use crate::hal::{
    Acceleration,
    Accelerometer,
};

/// Address with SDO/ALT pulled high.
pub const ADXL345_ADDRESS_HIGH: u8 = 0x1D;
/// Address with SDO/ALT tied to ground; breakout boards strap this by default.
pub const ADXL345_ADDRESS_LOW: u8 = 0x53;

const REG_DEVID: u8 = 0x00;
const REG_POWER_CTL: u8 = 0x2D;
const REG_DATA_FORMAT: u8 = 0x31;
const REG_DATAX0: u8 = 0x32;

const DEVID_EXPECTED: u8 = 0xE5;

// POWER_CTL: measure bit
const POWER_CTL_MEASURE: u8 = 0x08;
// DATA_FORMAT: FULL_RES with the ±16 g range, right-justified
const DATA_FORMAT_FULL_RES_16G: u8 = 0x0B;

// Full resolution keeps 4 mg/LSB on every range.
const G_PER_LSB: f32 = 0.004;
const STANDARD_GRAVITY: f32 = 9.806_65;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum Error<E> {
    #[error("I2C bus error: {0:?}")]
    I2c(E),
    #[error("unexpected device id {0:#04x}")]
    InvalidDeviceId(u8),
}

impl<E> From<E> for Error<E> {
    fn from(value: E) -> Self {
        Self::I2c(value)
    }
}

pub struct Adxl345<I> {
    i2c: I,
    addr: u8,
}

impl<I, E> Adxl345<I>
where
    I: I2c<Error = E>,
{
    pub const fn new(i2c: I) -> Self {
        Self::new_with_addr(i2c, ADXL345_ADDRESS_LOW)
    }

    pub const fn new_with_addr(i2c: I, addr: u8) -> Self {
        Self { i2c, addr }
    }

    pub fn release(self) -> I {
        self.i2c
    }

    /// Checks the device id, then switches to full resolution and starts measuring.
    pub fn init(&mut self) -> Result<(), Error<E>> {
        let id = self.read_device_id()?;
        if id != DEVID_EXPECTED {
            return Err(Error::InvalidDeviceId(id));
        }

        self.i2c
            .write(self.addr, &[REG_DATA_FORMAT, DATA_FORMAT_FULL_RES_16G])?;
        self.i2c
            .write(self.addr, &[REG_POWER_CTL, POWER_CTL_MEASURE])?;
        Ok(())
    }

    pub fn read_device_id(&mut self) -> Result<u8, Error<E>> {
        let mut data = [0u8; 1];
        self.i2c.write_read(self.addr, &[REG_DEVID], &mut data)?;
        Ok(data[0])
    }

    /// Raw X, Y, Z counts.
    pub fn read_raw(&mut self) -> Result<[i16; 3], Error<E>> {
        let mut data = [0u8; 6];
        // DATAX0..DATAZ1, little-endian pairs
        self.i2c.write_read(self.addr, &[REG_DATAX0], &mut data)?;

        Ok([
            i16::from_le_bytes([data[0], data[1]]),
            i16::from_le_bytes([data[2], data[3]]),
            i16::from_le_bytes([data[4], data[5]]),
        ])
    }
}

impl<I, E> Accelerometer for Adxl345<I>
where
    I: I2c<Error = E>,
    E: core::fmt::Debug,
{
    type Error = Error<E>;

    fn acceleration(&mut self) -> Result<Acceleration, Self::Error> {
        let [x, y, z] = self.read_raw()?;
        let scale = G_PER_LSB * STANDARD_GRAVITY;
        Ok(Acceleration {
            x: f32::from(x) * scale,
            y: f32::from(y) * scale,
            z: f32::from(z) * scale,
        })
    }
}
