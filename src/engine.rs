//! Level state: the dealt design, the live grid and the level counter.

#[cfg(feature = "defmt")]
use defmt::{
    debug,
    info,
};

use crate::{
    difficulty::Difficulty,
    generator::{
        CellSource,
        generate_design,
    },
    grid::{
        Cell,
        Grid,
    },
};

/// Result of a player move.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MoveOutcome {
    /// Some lights are still on.
    Changed,
    /// The grid went dark; `level` is the level now being played.
    Cleared { level: u32 },
}

impl MoveOutcome {
    pub const fn is_cleared(self) -> bool {
        matches!(self, Self::Cleared { .. })
    }
}

/// Game state: the level's design, the live grid, and the level counter.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Engine {
    difficulty: Difficulty,
    design: Grid,
    grid: Grid,
    level: u32,
}

impl Engine {
    /// Level 0 with an empty design. Call [`Engine::new_level`] to deal the first puzzle.
    pub const fn new(difficulty: Difficulty) -> Self {
        Self {
            difficulty,
            design: Grid::new(),
            grid: Grid::new(),
            level: 0,
        }
    }

    /// Starts counting from `level` instead of 0.
    pub const fn starting_at(mut self, level: u32) -> Self {
        self.level = level;
        self
    }

    pub const fn difficulty(&self) -> &Difficulty {
        &self.difficulty
    }

    pub const fn design(&self) -> &Grid {
        &self.design
    }

    pub const fn grid(&self) -> &Grid {
        &self.grid
    }

    pub const fn level(&self) -> u32 {
        self.level
    }

    /// Random toggles used to generate the current level.
    pub const fn moves(&self) -> u32 {
        self.difficulty.moves_for(self.level)
    }

    /// Generates a design for the current level and deals it.
    pub fn new_level(&mut self, source: &mut impl CellSource) {
        let moves = self.moves();
        let design = generate_design(moves, source);

        #[cfg(feature = "defmt")]
        {
            info!("Level #{}, moves = {}", self.level, moves);
            debug!("design = {=u32:#x}", design.to_bits());
        }

        self.load_design(design);
    }

    /// Deals `design`: the grid becomes a move played at each lit design cell.
    pub fn load_design(&mut self, design: Grid) {
        self.design = design;
        self.restart_level();
    }

    /// Throws away the player's moves and deals the current design again.
    pub fn restart_level(&mut self) {
        self.grid = Grid::replay(&self.design);
    }

    /// Plays the move rule at `cell` without checking for a win.
    pub fn apply_move(&mut self, cell: Cell) {
        self.grid.apply_move(cell);
    }

    pub fn is_cleared(&self) -> bool {
        self.grid.is_cleared()
    }

    /// A player press. Clearing the grid advances the level.
    pub fn press(&mut self, cell: Cell) -> MoveOutcome {
        self.apply_move(cell);

        if !self.is_cleared() {
            return MoveOutcome::Changed;
        }

        self.level = self.level.saturating_add(1);

        #[cfg(feature = "defmt")]
        info!("Winner, advancing to level {}", self.level);

        MoveOutcome::Cleared { level: self.level }
    }
}
