//! Recording and scripted stand-ins for the peripheral traits.

use std::collections::VecDeque;

use embedded_hal_async::delay::DelayNs;

use crate::{
    colours::{
        BLACK,
        Colour,
    },
    generator::CellSource,
    grid::{
        CELL_COUNT,
        Cell,
    },
    hal::{
        Acceleration,
        Accelerometer,
        KeyScanner,
        PixelGrid,
    },
    input::KeySet,
};

pub type Frame = [Colour; CELL_COUNT];

/// Keeps every flushed frame.
#[derive(Debug)]
pub struct MockDisplay {
    buffer: Frame,
    brightness: u8,
    frames: Vec<Frame>,
}

impl MockDisplay {
    pub fn new() -> Self {
        Self {
            buffer: [BLACK; CELL_COUNT],
            brightness: u8::MAX,
            frames: Vec::new(),
        }
    }

    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    pub fn brightness(&self) -> u8 {
        self.brightness
    }

    pub fn take_frames(&mut self) -> Vec<Frame> {
        core::mem::take(&mut self.frames)
    }
}

impl PixelGrid for MockDisplay {
    fn set_pixel(&mut self, cell: Cell, colour: Colour) {
        self.buffer[cell.index()] = colour;
    }

    fn fill(&mut self, colour: Colour) {
        self.buffer.fill(colour);
    }

    async fn show(&mut self) {
        self.frames.push(self.buffer);
    }

    fn set_brightness(&mut self, brightness: u8) {
        self.brightness = brightness;
    }
}

/// Replays a list of key scans, then reports nothing held.
#[derive(Debug, Default)]
pub struct ScriptedKeys {
    scans: VecDeque<KeySet>,
}

impl ScriptedKeys {
    pub fn new(scans: impl IntoIterator<Item = KeySet>) -> Self {
        Self {
            scans: scans.into_iter().collect(),
        }
    }

    pub fn push(&mut self, scan: KeySet) {
        self.scans.push_back(scan);
    }
}

impl KeyScanner for ScriptedKeys {
    async fn pressed_keys(&mut self) -> KeySet {
        self.scans.pop_front().unwrap_or(KeySet::EMPTY)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct SensorFault;

/// Replays a list of `z` readings (or faults), then reads level at 0.
#[derive(Debug, Default)]
pub struct ScriptedAccel {
    readings: VecDeque<Result<f32, SensorFault>>,
}

impl ScriptedAccel {
    pub fn new(readings: impl IntoIterator<Item = Result<f32, SensorFault>>) -> Self {
        Self {
            readings: readings.into_iter().collect(),
        }
    }

    pub fn push(&mut self, z: f32) {
        self.readings.push_back(Ok(z));
    }
}

impl Accelerometer for ScriptedAccel {
    type Error = SensorFault;

    fn acceleration(&mut self) -> Result<Acceleration, Self::Error> {
        let z = self.readings.pop_front().unwrap_or(Ok(0.0))?;
        Ok(Acceleration { x: 0.0, y: 0.0, z })
    }
}

/// Adds up requested sleeps instead of sleeping.
#[derive(Debug, Default)]
pub struct MockDelay {
    total_ns: u64,
}

impl MockDelay {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn total_ms(&self) -> u64 {
        self.total_ns / 1_000_000
    }
}

impl DelayNs for MockDelay {
    async fn delay_ns(&mut self, ns: u32) {
        self.total_ns += u64::from(ns);
    }

    async fn delay_ms(&mut self, ms: u32) {
        self.total_ns += u64::from(ms) * 1_000_000;
    }
}

/// Hands out a fixed list of cells.
#[derive(Debug)]
pub struct ScriptedCells {
    cells: VecDeque<Cell>,
    drawn: usize,
}

impl ScriptedCells {
    pub fn new(cells: impl IntoIterator<Item = Cell>) -> Self {
        Self {
            cells: cells.into_iter().collect(),
            drawn: 0,
        }
    }

    pub fn push(&mut self, cell: Cell) {
        self.cells.push_back(cell);
    }

    pub fn drawn(&self) -> usize {
        self.drawn
    }
}

impl CellSource for ScriptedCells {
    fn next_cell(&mut self) -> Cell {
        self.drawn += 1;
        self.cells.pop_front().expect("cell script exhausted")
    }
}
