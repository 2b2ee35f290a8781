//! Pin assignments and peripheral construction for the ESP32-S3 board.

use esp_hal::{
    Blocking,
    assign_resources,
    clock::CpuClock,
    gpio::{
        Level,
        Output,
        OutputConfig,
    },
    i2c::master::{
        Config as I2cConfig,
        I2c,
    },
    rmt::{
        Rmt,
        Tx,
        TxChannelConfig,
        TxChannelCreator as _,
    },
    time::Rate,
};

use crate::{
    adxl345::Adxl345,
    leds::Leds,
};

/// Accelerometer on the board's I2C bus.
pub type BoardAccelerometer<'a> = Adxl345<I2c<'a, Blocking>>;

// ── Pin / peripheral assignments ────────────────────────────────────────────

assign_resources! {
    pub Resources<'d> {
        leds: LedResources<'d> {
            power: GPIO17,
            io: GPIO18,
            rmt: RMT,
        },
        keypad: KeypadResources<'d> {
            row0: GPIO4,
            row1: GPIO5,
            row2: GPIO6,
            row3: GPIO7,
            col0: GPIO8,
            col1: GPIO9,
            col2: GPIO10,
            col3: GPIO11,
            col4: GPIO12,
            col5: GPIO13,
            col6: GPIO14,
            col7: GPIO15,
        },
        accel: AccelResources<'d> {
            sda: GPIO1,
            scl: GPIO2,
            i2c: I2C0,
        },
    }
}

// ── Board initialisation ────────────────────────────────────────────────────

/// Initialise the board and return the raw peripheral set.
///
/// Call this once at the top of `main`, then use [`split_resources!`] to
/// break the peripherals into typed resource groups.
#[must_use]
pub fn init() -> esp_hal::peripherals::Peripherals {
    let config = esp_hal::Config::default().with_cpu_clock(CpuClock::max());
    esp_hal::init(config)
}

// ── Resource → peripheral conversions ───────────────────────────────────────

impl From<esp_hal::peripherals::Peripherals> for Resources<'_> {
    fn from(peripherals: esp_hal::peripherals::Peripherals) -> Self {
        split_resources!(peripherals)
    }
}

impl<'a> From<LedResources<'a>> for esp_hal::rmt::Channel<'a, Blocking, Tx> {
    fn from(res: LedResources<'a>) -> Self {
        let _led_power = Output::new(res.power, Level::High, OutputConfig::default());
        let rmt = Rmt::new(res.rmt, Rate::from_mhz(40)).unwrap();
        let tx_config = TxChannelConfig::default().with_clk_divider(1);
        rmt.channel0.configure_tx(res.io, tx_config).unwrap()
    }
}

impl<'a> From<LedResources<'a>> for Leds<'a> {
    fn from(res: LedResources<'a>) -> Self {
        Leds::new(res.into())
    }
}

impl<'a> From<AccelResources<'a>> for I2c<'a, Blocking> {
    fn from(res: AccelResources<'a>) -> Self {
        I2c::new(res.i2c, I2cConfig::default().with_frequency(Rate::from_khz(400)))
            .unwrap()
            .with_sda(res.sda)
            .with_scl(res.scl)
    }
}

impl<'a> From<AccelResources<'a>> for BoardAccelerometer<'a> {
    fn from(res: AccelResources<'a>) -> Self {
        Adxl345::new(res.into())
    }
}
