//! # lightsout
//!
//! Lights Out on an 8×4 grid of illuminated buttons.
//!
//! Pressing a button toggles its light and the lights of its four orthogonal
//! neighbours; a level is won when every light is off. Levels are dealt by
//! pressing random cells on an empty grid, so every level is solvable and
//! grows harder as the level number climbs.
//!
//! The game logic is portable and talks to the hardware through the traits
//! in [`hal`]:
//! - **Grid**: the 8×4 cell model and the toggle rule
//! - **Difficulty**: the registry of selectable profiles
//! - **Engine**: level progression and win detection
//! - **Presentation**: intro animation, level indicator and grid rendering
//! - **Game**: difficulty selection and the polling loop with tilt redisplay
//!
//! With the `board` feature the crate also drives the ESP32-S3 board: a
//! WS2812 LED under every button, a key matrix and an ADXL345 accelerometer.
//!
//! ## Quick start
//!
//! ```rust,ignore
//! let peripherals = lightsout::init();
//! let resources = lightsout::split_resources!(peripherals);
//!
//! let board = lightsout::Board {
//!     display: lightsout::Leds::from(resources.leds),
//!     keys: lightsout::Keypad::from(resources.keypad),
//!     accel: lightsout::BoardAccelerometer::from(resources.accel),
//!     cells: lightsout::RandomCells::new(lightsout::Trng::new()),
//!     delay: embassy_time::Delay,
//! };
//! let game = lightsout::Game::bootstrap(board, &lightsout::Registry::STANDARD, lightsout::Config::DEFAULT).await?;
//! game.run().await;
//! ```

#![cfg_attr(not(test), no_std)]

pub mod adxl345;
pub mod colours;
mod config;
pub mod difficulty;
mod engine;
mod error;
mod game;
pub mod generator;
pub mod grid;
pub mod hal;
pub mod input;
pub mod presentation;

#[cfg(test)]
mod mocks;

#[cfg(feature = "board")]
mod board;
#[cfg(feature = "board")]
mod keypad;
#[cfg(feature = "board")]
mod leds;
#[cfg(feature = "board")]
mod trng;

#[cfg(feature = "board")]
pub use board::{
    AccelResources,
    BoardAccelerometer,
    KeypadResources,
    LedResources,
    Resources,
    init,
};
pub use colours::Colour;
pub use config::{
    Config,
    TiltAction,
};
pub use difficulty::{
    Difficulty,
    Registry,
};
pub use engine::{
    Engine,
    MoveOutcome,
};
pub use error::{
    Error,
    Result,
};
pub use game::{
    Board,
    Game,
    StepReport,
};
pub use generator::{
    CellSource,
    RandomCells,
    generate_design,
};
pub use grid::{
    Cell,
    Grid,
};
#[cfg(feature = "board")]
pub use keypad::Keypad;
#[cfg(feature = "board")]
pub use leds::{
    LED_COUNT,
    Leds,
};
#[cfg(feature = "board")]
pub use trng::Trng;
