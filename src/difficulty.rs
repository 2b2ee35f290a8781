//! Difficulty profiles and the sparse registry the player picks from at boot.

use core::num::NonZeroU32;

use crate::{
    colours::{
        self,
        Colour,
    },
    grid::{
        CELL_COUNT,
        Cell,
    },
};

/// How a run starts and how fast it gets harder.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Difficulty {
    pub name: &'static str,
    /// Random toggles on level 0.
    pub start_moves: u32,
    /// One extra toggle every `progress` levels.
    pub progress: NonZeroU32,
    /// Registry slot colour, and the grid colour when `rainbow` is off.
    pub colour: Colour,
    /// Cycle the grid colour through the palette by level.
    pub rainbow: bool,
}

impl Difficulty {
    /// A `progress` of zero is treated as one.
    pub const fn new(
        name: &'static str,
        start_moves: u32,
        progress: u32,
        colour: Colour,
        rainbow: bool,
    ) -> Self {
        let progress = match NonZeroU32::new(progress) {
            Some(progress) => progress,
            None => NonZeroU32::MIN,
        };
        Self {
            name,
            start_moves,
            progress,
            colour,
            rainbow,
        }
    }

    /// Random toggles used to generate `level`.
    pub const fn moves_for(&self, level: u32) -> u32 {
        self.start_moves.saturating_add(level / self.progress.get())
    }

    /// Colour of a lit cell while playing `level`.
    pub const fn cell_colour(&self, level: u32) -> Colour {
        if self.rainbow {
            colours::rainbow(level)
        } else {
            self.colour
        }
    }
}

pub const EASY: Difficulty = Difficulty::new("easy", 1, 4, colours::GREEN, true);
pub const MEDIUM: Difficulty = Difficulty::new("medium", 4, 4, colours::YELLOW, true);
pub const HARD: Difficulty = Difficulty::new("hard", 16, 1, colours::RED, true);
pub const SINGLE_COLOUR: Difficulty = Difficulty::new("single colour", 4, 4, colours::PURPLE, false);
pub const LITTLE_ONES: Difficulty =
    Difficulty::new("little ones", 1, colours::PALETTE_LEN, colours::PINK, true);

/// Maps button slots (row-major cell indices) to optional difficulty profiles.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Registry {
    slots: [Option<Difficulty>; CELL_COUNT],
}

impl Registry {
    /// The table shipped on the device: easy, medium and hard on the first
    /// three buttons, single colour on the end of the top row, little ones
    /// on the last button.
    pub const STANDARD: Self = Self::empty()
        .with(0, EASY)
        .with(1, MEDIUM)
        .with(2, HARD)
        .with(7, SINGLE_COLOUR)
        .with(31, LITTLE_ONES);

    pub const fn empty() -> Self {
        Self {
            slots: [None; CELL_COUNT],
        }
    }

    /// Puts `difficulty` in `slot`. Slots past the grid are ignored.
    pub const fn with(mut self, slot: usize, difficulty: Difficulty) -> Self {
        if slot < CELL_COUNT {
            self.slots[slot] = Some(difficulty);
        }
        self
    }

    pub fn get(&self, slot: usize) -> Option<&Difficulty> {
        self.slots.get(slot)?.as_ref()
    }

    /// Profile behind the button at `cell`.
    pub fn at(&self, cell: Cell) -> Option<&Difficulty> {
        self.get(cell.index())
    }

    /// Occupied slots with their button positions, in slot order.
    pub fn iter(&self) -> impl Iterator<Item = (Cell, &Difficulty)> {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(slot, difficulty)| Some((Cell::from_index(slot)?, difficulty.as_ref()?)))
    }

    pub fn len(&self) -> usize {
        self.iter().count()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(Option::is_none)
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::STANDARD
    }
}
