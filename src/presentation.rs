//! Everything drawn on the LED grid.
//!
//! Rendering is a function of engine state; the only thing kept between calls
//! is the intro path and the timings.

use embedded_hal_async::delay::DelayNs;

use crate::{
    colours::{
        self,
        Colour,
        PALETTE_LEN,
    },
    config::Config,
    difficulty::Registry,
    engine::Engine,
    grid::{
        CELL_COUNT,
        Cell,
        HEIGHT,
        WIDTH,
    },
    hal::PixelGrid,
};

/// Intro trail: the border clockwise from the top-left corner, then a spiral
/// inwards through the two middle rows.
pub const INTRO_PATH: [Cell; CELL_COUNT] = intro_path();

const fn intro_path() -> [Cell; CELL_COUNT] {
    let mut path = [Cell::new_unchecked(0, 0); CELL_COUNT];
    let mut n = 0;

    // Top row, left to right.
    let mut x = 0;
    while x < WIDTH {
        path[n] = Cell::new_unchecked(x, 0);
        n += 1;
        x += 1;
    }
    // Down the right edge.
    let mut y = 1;
    while y < HEIGHT - 1 {
        path[n] = Cell::new_unchecked(WIDTH - 1, y);
        n += 1;
        y += 1;
    }
    // Bottom row, right to left.
    let mut x = WIDTH;
    while x > 0 {
        x -= 1;
        path[n] = Cell::new_unchecked(x, HEIGHT - 1);
        n += 1;
    }
    // Up the left edge as far as row 2.
    path[n] = Cell::new_unchecked(0, 2);
    n += 1;
    // Row 1, left to right, stopping short of the right edge.
    let mut x = 0;
    while x < WIDTH - 1 {
        path[n] = Cell::new_unchecked(x, 1);
        n += 1;
        x += 1;
    }
    // Row 2, right to left, back to x = 1.
    let mut x = WIDTH - 2;
    while x > 0 {
        path[n] = Cell::new_unchecked(x, 2);
        n += 1;
        x -= 1;
    }

    assert!(n == CELL_COUNT);
    path
}

/// Pixel and colour of the level indicator, or `None` once the level no
/// longer fits on the grid (`CELL_COUNT * PALETTE_LEN` levels and beyond).
///
/// Every eight levels the indicator moves one step down the columns; the
/// colour cycles through the palette in between.
pub fn level_indicator(level: u32) -> Option<(Cell, Colour)> {
    let lit = usize::try_from(level / PALETTE_LEN).ok()?;
    let cell = Cell::from_column_major_index(lit)?;
    Some((cell, colours::rainbow(level)))
}

/// Draws the game on a [`PixelGrid`], pacing animations with a [`DelayNs`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Presenter {
    path: [Cell; CELL_COUNT],
    frame_ms: u32,
    intro_hold_ms: u32,
    level_hold_ms: u32,
}

impl Presenter {
    pub const fn new(config: &Config) -> Self {
        Self {
            path: INTRO_PATH,
            frame_ms: config.frame_ms,
            intro_hold_ms: config.intro_hold_ms,
            level_hold_ms: config.level_hold_ms,
        }
    }

    /// Lights every occupied registry slot in its profile colour.
    pub async fn show_registry<D: PixelGrid>(&self, registry: &Registry, display: &mut D) {
        display.clear();
        for (cell, difficulty) in registry.iter() {
            display.set_pixel(cell, difficulty.colour);
        }
        display.show().await;
    }

    /// Rainbow trail growing along the intro path, one pixel per frame.
    pub async fn play_intro<D: PixelGrid, T: DelayNs>(&self, display: &mut D, delay: &mut T) {
        display.clear();
        display.show().await;

        for (n, _) in self.path.iter().enumerate() {
            for (i, &cell) in self.path[..=n].iter().enumerate() {
                display.set_pixel(cell, colours::rainbow((n - i) as u32));
            }
            display.show().await;
            delay.delay_ms(self.frame_ms).await;
        }

        delay.delay_ms(self.intro_hold_ms).await;
    }

    /// Flashes the level indicator, then blanks the grid.
    ///
    /// Returns `false` without touching the display when the level is past
    /// what the indicator can show.
    pub async fn show_level<D: PixelGrid, T: DelayNs>(
        &self,
        level: u32,
        display: &mut D,
        delay: &mut T,
    ) -> bool {
        let Some((cell, colour)) = level_indicator(level) else {
            return false;
        };

        display.clear();
        display.set_pixel(cell, colour);
        display.show().await;
        delay.delay_ms(self.level_hold_ms).await;
        display.clear();
        display.show().await;
        true
    }

    /// Lit cells in the level colour (rainbow) or the profile colour.
    pub async fn show_grid<D: PixelGrid>(&self, engine: &Engine, display: &mut D) {
        let colour = engine.difficulty().cell_colour(engine.level());

        display.clear();
        for cell in engine.grid().lit_cells() {
            display.set_pixel(cell, colour);
        }
        display.show().await;
    }
}

#[cfg(test)]
mod tests {
    use embassy_futures::block_on;

    use super::*;
    use crate::{
        colours::{
            BLACK,
            PURPLE,
        },
        difficulty::{
            EASY,
            SINGLE_COLOUR,
        },
        grid::Grid,
        mocks::{
            MockDelay,
            MockDisplay,
        },
    };

    fn cell(x: u8, y: u8) -> Cell {
        Cell::new(x, y).unwrap()
    }

    #[test]
    fn intro_path_visits_every_cell_once() {
        let mut seen = Grid::new();
        for &cell in INTRO_PATH.iter() {
            assert!(!seen.is_lit(cell), "{cell:?} visited twice");
            seen.set(cell, true);
        }
        assert_eq!(seen.lit_count(), CELL_COUNT);
    }

    #[test]
    fn intro_path_shape() {
        assert_eq!(INTRO_PATH[0], cell(0, 0));
        assert_eq!(INTRO_PATH[8], cell(7, 1));
        assert_eq!(INTRO_PATH[10], cell(7, 3));
        assert_eq!(INTRO_PATH[17], cell(0, 3));
        assert_eq!(INTRO_PATH[18], cell(0, 2));
        assert_eq!(INTRO_PATH[19], cell(0, 1));
        assert_eq!(INTRO_PATH[25], cell(6, 1));
        assert_eq!(INTRO_PATH[26], cell(6, 2));
        assert_eq!(INTRO_PATH[31], cell(1, 2));
    }

    #[test]
    fn level_indicator_position_and_colour() {
        assert_eq!(level_indicator(0), Some((cell(0, 0), colours::RED)));
        assert_eq!(level_indicator(10), Some((cell(0, 1), colours::YELLOW)));
        assert_eq!(level_indicator(39), Some((cell(1, 0), colours::PINK)));
        assert_eq!(level_indicator(255), Some((cell(7, 3), colours::PINK)));
    }

    #[test]
    fn level_indicator_runs_out_of_room() {
        assert_eq!(level_indicator(256), None);
        assert_eq!(level_indicator(u32::MAX), None);
    }

    #[test]
    fn intro_paints_a_growing_rainbow_trail() {
        let presenter = Presenter::new(&Config::DEFAULT);
        let mut display = MockDisplay::new();
        let mut delay = MockDelay::new();

        block_on(presenter.play_intro(&mut display, &mut delay));

        // One blank frame, then one frame per path step.
        assert_eq!(display.frames().len(), CELL_COUNT + 1);
        let first = &display.frames()[1];
        assert_eq!(first[0], colours::RED);
        assert_eq!(first.iter().filter(|&&c| c != BLACK).count(), 1);

        let last = display.frames().last().unwrap();
        assert_eq!(last[INTRO_PATH[31].index()], colours::RED);
        assert_eq!(last[INTRO_PATH[30].index()], colours::ORANGE);
        assert_eq!(last[INTRO_PATH[0].index()], colours::rainbow(31));
        assert!(last.iter().all(|&c| c != BLACK));

        assert_eq!(delay.total_ms(), 32 * 100 + 500);
    }

    #[test]
    fn level_flash_blanks_afterwards() {
        let presenter = Presenter::new(&Config::DEFAULT);
        let mut display = MockDisplay::new();
        let mut delay = MockDelay::new();

        assert!(block_on(presenter.show_level(10, &mut display, &mut delay)));

        let frames = display.frames();
        assert_eq!(frames.len(), 2);
        assert_eq!(frames[0][cell(0, 1).index()], colours::YELLOW);
        assert!(frames[1].iter().all(|&c| c == BLACK));
        assert_eq!(delay.total_ms(), 500);
    }

    #[test]
    fn level_flash_past_the_grid_is_a_no_op() {
        let presenter = Presenter::new(&Config::DEFAULT);
        let mut display = MockDisplay::new();
        let mut delay = MockDelay::new();

        assert!(!block_on(presenter.show_level(256, &mut display, &mut delay)));
        assert!(display.frames().is_empty());
        assert_eq!(delay.total_ms(), 0);
    }

    #[test]
    fn grid_uses_the_level_colour_in_rainbow_mode() {
        let presenter = Presenter::new(&Config::DEFAULT);
        let mut display = MockDisplay::new();
        let mut engine = Engine::new(EASY).starting_at(4);
        engine.load_design(Grid::from_bits(1));

        block_on(presenter.show_grid(&engine, &mut display));

        let frame = display.frames().last().unwrap();
        assert_eq!(frame[cell(0, 0).index()], colours::CYAN);
        assert_eq!(frame[cell(1, 0).index()], colours::CYAN);
        assert_eq!(frame[cell(0, 1).index()], colours::CYAN);
        assert_eq!(frame.iter().filter(|&&c| c != BLACK).count(), 3);
    }

    #[test]
    fn grid_uses_the_profile_colour_in_single_colour_mode() {
        let presenter = Presenter::new(&Config::DEFAULT);
        let mut display = MockDisplay::new();
        let mut engine = Engine::new(SINGLE_COLOUR).starting_at(3);
        engine.load_design(Grid::from_bits(1 << 12));

        block_on(presenter.show_grid(&engine, &mut display));

        let frame = display.frames().last().unwrap();
        assert_eq!(frame.iter().filter(|&&c| c == PURPLE).count(), 5);
    }

    #[test]
    fn registry_slots_light_up() {
        let presenter = Presenter::new(&Config::DEFAULT);
        let mut display = MockDisplay::new();

        block_on(presenter.show_registry(&Registry::STANDARD, &mut display));

        let frame = display.frames().last().unwrap();
        assert_eq!(frame[0], colours::GREEN);
        assert_eq!(frame[1], colours::YELLOW);
        assert_eq!(frame[2], colours::RED);
        assert_eq!(frame[7], PURPLE);
        assert_eq!(frame[31], colours::PINK);
        assert_eq!(frame.iter().filter(|&&c| c != BLACK).count(), 5);
    }
}
