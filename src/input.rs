//! Key sets, press edge detection and the tilt latch.

use crate::grid::{
    CELL_COUNT,
    Cell,
};

/// A set of buttons, one bit per row-major cell index.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct KeySet(u32);

const _: () = assert!(CELL_COUNT <= u32::BITS as usize);

impl KeySet {
    pub const EMPTY: Self = Self(0);

    pub const fn from_bits(bits: u32) -> Self {
        Self(bits)
    }

    pub const fn bits(self) -> u32 {
        self.0
    }

    pub const fn contains(self, cell: Cell) -> bool {
        self.0 & (1 << cell.index()) != 0
    }

    pub const fn insert(&mut self, cell: Cell) {
        self.0 |= 1 << cell.index();
    }

    #[must_use]
    pub const fn with(mut self, cell: Cell) -> Self {
        self.insert(cell);
        self
    }

    /// Keys in `self` but not in `other`.
    #[must_use]
    pub const fn difference(self, other: Self) -> Self {
        Self(self.0 & !other.0)
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Members in row-major order.
    pub fn iter(self) -> impl Iterator<Item = Cell> {
        Cell::all().filter(move |&cell| self.contains(cell))
    }
}

impl FromIterator<Cell> for KeySet {
    fn from_iter<I: IntoIterator<Item = Cell>>(iter: I) -> Self {
        iter.into_iter().fold(Self::EMPTY, Self::with)
    }
}

/// Turns level-triggered key scans into newly pressed keys.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct EdgeDetector {
    held: KeySet,
}

impl EdgeDetector {
    pub const fn new() -> Self {
        Self {
            held: KeySet::EMPTY,
        }
    }

    /// Records `now` and returns the keys that were not held at the previous scan.
    pub fn update(&mut self, now: KeySet) -> KeySet {
        let rising = now.difference(self.held);
        self.held = now;
        rising
    }
}

/// Debounces board flips on the vertical axis.
///
/// Fires when the rounded `z` reading times the polarity drops below the
/// threshold, then flips the polarity so only the opposite crossing fires next.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct TiltLatch {
    polarity: i32,
    threshold: i32,
}

impl TiltLatch {
    pub const fn new(threshold: i32) -> Self {
        Self {
            polarity: -1,
            threshold,
        }
    }

    /// `-1` or `1`.
    pub const fn polarity(&self) -> i32 {
        self.polarity
    }

    /// Feeds one `z` reading; `true` on a crossing.
    pub fn update(&mut self, z: f32) -> bool {
        if round_half_even(z).saturating_mul(self.polarity) < self.threshold {
            self.polarity = -self.polarity;
            true
        } else {
            false
        }
    }
}

/// Rounds to the nearest integer, ties to even. NaN rounds to 0.
fn round_half_even(value: f32) -> i32 {
    libm::rintf(value) as i32
}
