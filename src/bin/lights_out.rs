//! Lights Out firmware.
//!
//! Pick a difficulty by pressing one of the lit buttons, then switch off
//! every light. Pressing a button toggles it and its four neighbours.
//! Flip the board over to see the level number and grid again.

#![no_std]
#![no_main]

use defmt::{
    error,
    info,
};
use embassy_executor::Spawner;
use embassy_time::{
    Delay,
    Duration,
    Timer,
};
use esp_backtrace as _;
use esp_hal::timer::timg::TimerGroup;
use esp_println as _;
use lightsout::{
    Board,
    BoardAccelerometer,
    Config,
    Game,
    Keypad,
    Leds,
    RandomCells,
    Registry,
    Trng,
    split_resources,
};

extern crate alloc;

esp_bootloader_esp_idf::esp_app_desc!();

#[embassy_executor::task]
async fn game_task(leds: Leds<'static>, keypad: Keypad, accel: BoardAccelerometer<'static>) {
    info!("Lights Out started");

    let board = Board {
        display: leds,
        keys: keypad,
        accel,
        cells: RandomCells::new(Trng::new()),
        delay: Delay,
    };

    match Game::bootstrap(board, &Registry::STANDARD, Config::DEFAULT).await {
        Ok(game) => game.run().await,
        Err(err) => error!("Cannot start: {}", err),
    }
}

#[esp_rtos::main]
async fn main(spawner: Spawner) -> ! {
    let peripherals = lightsout::init();
    let resources = split_resources!(peripherals);

    esp_alloc::heap_allocator!(size: 64 * 1024);

    let timg0 = TimerGroup::new(peripherals.TIMG0);
    esp_rtos::start(timg0.timer0);

    let leds: Leds<'static> = resources.leds.into();
    let keypad: Keypad = resources.keypad.into();
    let mut accel: BoardAccelerometer<'static> = resources.accel.into();
    if let Err(e) = accel.init() {
        panic!("Failed to initialize ADXL345: {:?}", e);
    }
    info!("ADXL345 initialized");

    spawner.must_spawn(game_task(leds, keypad, accel));

    loop {
        Timer::after(Duration::from_secs(600)).await;
    }
}
