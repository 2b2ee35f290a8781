//! Random level designs.
//!
//! A design is built by toggling uniformly drawn cells, with replacement, so a
//! cell drawn twice cancels out and a design can need fewer presses than the
//! number of draws.

use rand::{
    Rng as _,
    RngCore,
};

use crate::grid::{
    Cell,
    Grid,
    HEIGHT,
    WIDTH,
};

/// Supplies the cells a design toggles.
pub trait CellSource {
    fn next_cell(&mut self) -> Cell;
}

impl<S: CellSource + ?Sized> CellSource for &mut S {
    fn next_cell(&mut self) -> Cell {
        (**self).next_cell()
    }
}

/// Uniform cells drawn from any [`RngCore`], `x` first, then `y`.
#[derive(Clone, Debug)]
pub struct RandomCells<R> {
    rng: R,
}

impl<R: RngCore> RandomCells<R> {
    pub const fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: RngCore> CellSource for RandomCells<R> {
    fn next_cell(&mut self) -> Cell {
        let x = self.rng.random_range(0..WIDTH);
        let y = self.rng.random_range(0..HEIGHT);
        Cell::new_unchecked(x, y)
    }
}

/// Toggles `moves` cells drawn from `source`, starting from all-unlit.
pub fn generate_design(moves: u32, source: &mut impl CellSource) -> Grid {
    let mut design = Grid::new();
    for _ in 0..moves {
        design.toggle(source.next_cell());
    }
    design
}

#[cfg(test)]
mod tests {
    use rand::{
        SeedableRng,
        rngs::SmallRng,
    };

    use super::*;
    use crate::mocks::ScriptedCells;

    fn cell(x: u8, y: u8) -> Cell {
        Cell::new(x, y).unwrap()
    }

    #[test]
    fn scripted_draws_produce_the_exact_design() {
        let mut source = ScriptedCells::new([cell(0, 0), cell(3, 2), cell(7, 3)]);

        let design = generate_design(3, &mut source);

        let lit: Vec<_> = design.lit_cells().collect();
        assert_eq!(lit, [cell(0, 0), cell(3, 2), cell(7, 3)]);
    }

    #[test]
    fn repeated_draws_cancel() {
        let mut source = ScriptedCells::new([cell(5, 1), cell(5, 1)]);

        let design = generate_design(2, &mut source);

        assert!(design.is_cleared());
    }

    #[test]
    fn zero_moves_is_an_empty_design() {
        let mut source = RandomCells::new(SmallRng::seed_from_u64(7));
        assert!(generate_design(0, &mut source).is_cleared());
    }

    #[test]
    fn lit_count_never_exceeds_moves_and_keeps_parity() {
        let mut source = RandomCells::new(SmallRng::seed_from_u64(0x5eed));
        for moves in 0..40 {
            let design = generate_design(moves, &mut source);
            let lit = design.lit_count() as u32;
            assert!(lit <= moves);
            assert_eq!(lit % 2, moves % 2);
        }
    }

    #[test]
    fn random_cells_cover_the_whole_grid() {
        let mut source = RandomCells::new(SmallRng::seed_from_u64(42));
        let mut seen = Grid::new();
        for _ in 0..2_000 {
            seen.set(source.next_cell(), true);
        }
        assert_eq!(seen.lit_count(), crate::grid::CELL_COUNT);
    }
}
