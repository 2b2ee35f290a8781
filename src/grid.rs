//! Grid geometry and the boolean light grid.
//!
//! Cells are addressed as `(x, y)` with `x` in `0..WIDTH` running left to right
//! and `y` in `0..HEIGHT` running top to bottom. Two linear orders exist on the
//! board: the row-major index (`y * WIDTH + x`) used by the LED strip and the
//! difficulty registry, and the column-major index (`x * HEIGHT + y`) used by
//! the level indicator.

/// Number of button columns.
pub const WIDTH: u8 = 8;

/// Number of button rows.
pub const HEIGHT: u8 = 4;

/// Number of buttons (and LEDs) on the board.
pub const CELL_COUNT: usize = WIDTH as usize * HEIGHT as usize;

/// A button position on the grid. Always in bounds.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Cell {
    x: u8,
    y: u8,
}

impl Cell {
    /// Returns `None` when `(x, y)` is off the grid.
    pub const fn new(x: u8, y: u8) -> Option<Self> {
        if x < WIDTH && y < HEIGHT {
            Some(Self { x, y })
        } else {
            None
        }
    }

    /// Caller guarantees `x < WIDTH && y < HEIGHT`.
    pub(crate) const fn new_unchecked(x: u8, y: u8) -> Self {
        Self { x, y }
    }

    pub const fn x(self) -> u8 {
        self.x
    }

    pub const fn y(self) -> u8 {
        self.y
    }

    /// Row-major index, `y * WIDTH + x`.
    pub const fn index(self) -> usize {
        self.y as usize * WIDTH as usize + self.x as usize
    }

    /// Inverse of [`Cell::index`].
    pub const fn from_index(index: usize) -> Option<Self> {
        if index >= CELL_COUNT {
            return None;
        }
        let y = index / WIDTH as usize;
        let x = index % WIDTH as usize;
        Some(Self::new_unchecked(x as u8, y as u8))
    }

    /// Column-major index, `x * HEIGHT + y`.
    pub const fn column_major_index(self) -> usize {
        self.x as usize * HEIGHT as usize + self.y as usize
    }

    /// Inverse of [`Cell::column_major_index`].
    pub const fn from_column_major_index(index: usize) -> Option<Self> {
        if index >= CELL_COUNT {
            return None;
        }
        let x = index / HEIGHT as usize;
        let y = index % HEIGHT as usize;
        Some(Self::new_unchecked(x as u8, y as u8))
    }

    /// Every cell in row-major order.
    pub fn all() -> impl Iterator<Item = Cell> {
        (0..CELL_COUNT).filter_map(Self::from_index)
    }

    /// On-grid orthogonal neighbours: above, below, left, right. No wraparound.
    pub fn neighbours(self) -> impl Iterator<Item = Cell> {
        DISPLACEMENTS
            .iter()
            .filter_map(move |&delta| apply_delta(self, delta))
    }
}

const DISPLACEMENTS: [(i8, i8); 4] = [(0, -1), (0, 1), (-1, 0), (1, 0)];

fn apply_delta(cell: Cell, (dx, dy): (i8, i8)) -> Option<Cell> {
    let x = cell.x.checked_add_signed(dx)?;
    let y = cell.y.checked_add_signed(dy)?;
    Cell::new(x, y)
}

/// Lit/unlit state of every cell.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Grid {
    rows: [[bool; WIDTH as usize]; HEIGHT as usize],
}

impl Grid {
    /// All cells unlit.
    pub const fn new() -> Self {
        Self {
            rows: [[false; WIDTH as usize]; HEIGHT as usize],
        }
    }

    /// Builds a grid from a row-major bit mask (bit `i` is `Cell::from_index(i)`).
    pub fn from_bits(bits: u32) -> Self {
        let mut grid = Self::new();
        for cell in Cell::all() {
            grid.set(cell, bits & (1 << cell.index()) != 0);
        }
        grid
    }

    /// Row-major bit mask of the lit cells.
    pub fn to_bits(&self) -> u32 {
        self.lit_cells()
            .fold(0, |bits, cell| bits | (1 << cell.index()))
    }

    pub const fn is_lit(&self, cell: Cell) -> bool {
        self.rows[cell.y as usize][cell.x as usize]
    }

    pub const fn set(&mut self, cell: Cell, lit: bool) {
        self.rows[cell.y as usize][cell.x as usize] = lit;
    }

    pub const fn toggle(&mut self, cell: Cell) {
        self.set(cell, !self.is_lit(cell));
    }

    /// The Lights Out move: toggles `cell` and its orthogonal neighbours.
    ///
    /// Applying the same move twice restores the grid.
    pub fn apply_move(&mut self, cell: Cell) {
        self.toggle(cell);
        for neighbour in cell.neighbours() {
            self.toggle(neighbour);
        }
    }

    /// `true` when no cell is lit.
    pub fn is_cleared(&self) -> bool {
        self.rows.iter().flatten().all(|&lit| !lit)
    }

    pub fn lit_count(&self) -> usize {
        self.rows.iter().flatten().filter(|&&lit| lit).count()
    }

    /// Lit cells in row-major order.
    pub fn lit_cells(&self) -> impl Iterator<Item = Cell> + '_ {
        Cell::all().filter(|&cell| self.is_lit(cell))
    }

    /// The grid reached from all-unlit by playing a move at every lit cell of `design`.
    pub fn replay(design: &Grid) -> Self {
        let mut grid = Self::new();
        for cell in design.lit_cells() {
            grid.apply_move(cell);
        }
        grid
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cell(x: u8, y: u8) -> Cell {
        Cell::new(x, y).unwrap()
    }

    #[test]
    fn index_conversions_are_inverse() {
        for index in 0..CELL_COUNT {
            let c = Cell::from_index(index).unwrap();
            assert_eq!(c.index(), index);
            let c = Cell::from_column_major_index(index).unwrap();
            assert_eq!(c.column_major_index(), index);
        }
        assert_eq!(Cell::from_index(CELL_COUNT), None);
        assert_eq!(Cell::from_column_major_index(CELL_COUNT), None);
    }

    #[test]
    fn row_major_index_matches_registry_layout() {
        assert_eq!(Cell::from_index(7), Some(cell(7, 0)));
        assert_eq!(Cell::from_index(31), Some(cell(7, 3)));
        assert_eq!(cell(2, 1).index(), 10);
    }

    #[test]
    fn column_major_index_walks_down_columns() {
        assert_eq!(Cell::from_column_major_index(1), Some(cell(0, 1)));
        assert_eq!(Cell::from_column_major_index(4), Some(cell(1, 0)));
    }

    #[test]
    fn off_grid_coordinates_are_rejected() {
        assert_eq!(Cell::new(WIDTH, 0), None);
        assert_eq!(Cell::new(0, HEIGHT), None);
    }

    #[test]
    fn corner_and_edge_neighbours() {
        let corner: Vec<_> = cell(0, 0).neighbours().collect();
        assert_eq!(corner, [cell(0, 1), cell(1, 0)]);

        let edge: Vec<_> = cell(3, 3).neighbours().collect();
        assert_eq!(edge, [cell(3, 2), cell(2, 3), cell(4, 3)]);

        assert_eq!(cell(4, 2).neighbours().count(), 4);
    }

    #[test]
    fn corner_move_lights_three_cells() {
        let mut grid = Grid::new();
        grid.apply_move(cell(0, 0));

        let lit: Vec<_> = grid.lit_cells().collect();
        assert_eq!(lit, [cell(0, 0), cell(1, 0), cell(0, 1)]);
    }

    #[test]
    fn replay_is_not_a_copy_of_the_design() {
        let mut design = Grid::new();
        design.set(cell(0, 0), true);

        let grid = Grid::replay(&design);

        assert_ne!(grid, design);
        assert_eq!(grid.lit_count(), 3);
    }

    #[test]
    fn bits_round_trip_through_lit_cells() {
        let mut grid = Grid::new();
        grid.set(cell(1, 0), true);
        grid.set(cell(7, 3), true);

        assert_eq!(grid.to_bits(), (1 << 1) | (1 << 31));
        assert_eq!(Grid::from_bits(grid.to_bits()), grid);
    }
}
