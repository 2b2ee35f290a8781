//! 8×4 key matrix scanned row by row.
//!
//! Each row is driven high in turn; a held key pulls its column input up
//! through the pull-down.

use embassy_time::{
    Duration,
    Timer,
};
use esp_hal::gpio::{
    Input,
    InputConfig,
    Level,
    Output,
    OutputConfig,
    Pull,
};

use crate::{
    KeypadResources,
    grid::{
        Cell,
        HEIGHT,
        WIDTH,
    },
    hal::KeyScanner,
    input::KeySet,
};

const SETTLE_US: u64 = 5;

pub struct Keypad {
    rows: [Output<'static>; HEIGHT as usize],
    cols: [Input<'static>; WIDTH as usize],
}

impl From<KeypadResources<'static>> for Keypad {
    fn from(res: KeypadResources<'static>) -> Self {
        let low = OutputConfig::default();
        let pull_down = InputConfig::default().with_pull(Pull::Down);
        Self {
            rows: [
                Output::new(res.row0, Level::Low, low),
                Output::new(res.row1, Level::Low, low),
                Output::new(res.row2, Level::Low, low),
                Output::new(res.row3, Level::Low, low),
            ],
            cols: [
                Input::new(res.col0, pull_down),
                Input::new(res.col1, pull_down),
                Input::new(res.col2, pull_down),
                Input::new(res.col3, pull_down),
                Input::new(res.col4, pull_down),
                Input::new(res.col5, pull_down),
                Input::new(res.col6, pull_down),
                Input::new(res.col7, pull_down),
            ],
        }
    }
}

impl Keypad {
    /// Scan the whole matrix once.
    pub async fn scan(&mut self) -> KeySet {
        let mut held = KeySet::EMPTY;
        for (y, row) in (0u8..).zip(self.rows.iter_mut()) {
            row.set_high();
            Timer::after(Duration::from_micros(SETTLE_US)).await;
            for (x, col) in (0u8..).zip(self.cols.iter()) {
                if col.is_high() {
                    held.insert(Cell::new_unchecked(x, y));
                }
            }
            row.set_low();
        }
        held
    }
}

impl KeyScanner for Keypad {
    async fn pressed_keys(&mut self) -> KeySet {
        self.scan().await
    }
}
