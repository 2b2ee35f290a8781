//! Difficulty selection and the polling loop.

#[cfg(feature = "defmt")]
use defmt::{
    info,
    warn,
};
use embedded_hal_async::delay::DelayNs;

use crate::{
    config::{
        Config,
        TiltAction,
    },
    difficulty::Registry,
    engine::{
        Engine,
        MoveOutcome,
    },
    error::{
        Error,
        Result,
    },
    generator::CellSource,
    grid::Cell,
    hal::{
        Accelerometer,
        KeyScanner,
        PixelGrid,
    },
    input::{
        EdgeDetector,
        TiltLatch,
    },
    presentation::Presenter,
};

/// The peripherals a game runs on.
pub struct Board<D, K, A, S, T> {
    pub display: D,
    pub keys: K,
    pub accel: A,
    /// Where level designs come from.
    pub cells: S,
    pub delay: T,
}

/// What one pass of the polling loop did.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct StepReport {
    /// New presses played as moves.
    pub presses: u32,
    /// Levels cleared by those presses.
    pub cleared: u32,
    /// A tilt crossing triggered a redisplay.
    pub tilted: bool,
    /// The accelerometer could not be read.
    pub sensor_fault: bool,
}

/// One running game: the engine plus the board it is played on.
pub struct Game<D, K, A, S, T> {
    board: Board<D, K, A, S, T>,
    engine: Engine,
    presenter: Presenter,
    config: Config,
    edges: EdgeDetector,
    tilt: TiltLatch,
}

impl<D, K, A, S, T> Game<D, K, A, S, T>
where
    D: PixelGrid,
    K: KeyScanner,
    A: Accelerometer,
    S: CellSource,
    T: DelayNs,
{
    /// Lights the registry and waits, without timeout, for a press on one of
    /// its profiles. Presses on empty slots are ignored.
    ///
    /// The selecting key counts as held when the game starts, so keeping it
    /// down through the intro does not play it as a move; it has to be
    /// released and pressed again.
    pub async fn bootstrap(
        mut board: Board<D, K, A, S, T>,
        registry: &Registry,
        config: Config,
    ) -> Result<Self> {
        if registry.is_empty() {
            return Err(Error::EmptyRegistry);
        }

        let presenter = Presenter::new(&config);
        board.display.set_brightness(config.brightness);
        presenter.show_registry(registry, &mut board.display).await;

        let mut edges = EdgeDetector::new();
        loop {
            let pressed = edges.update(board.keys.pressed_keys().await);
            if let Some(&difficulty) = pressed.iter().find_map(|cell| registry.at(cell)) {
                #[cfg(feature = "defmt")]
                info!("Difficulty: {}", difficulty.name);

                // `edges` still holds the selecting press so it is not played as a move.
                return Ok(Self {
                    board,
                    engine: Engine::new(difficulty),
                    presenter,
                    config,
                    edges,
                    tilt: TiltLatch::new(config.tilt_threshold),
                });
            }
            board.delay.delay_ms(config.poll_interval_ms).await;
        }
    }

    pub const fn engine(&self) -> &Engine {
        &self.engine
    }

    pub const fn board(&self) -> &Board<D, K, A, S, T> {
        &self.board
    }

    pub const fn board_mut(&mut self) -> &mut Board<D, K, A, S, T> {
        &mut self.board
    }

    /// Intro animation, then the first level.
    pub async fn start(&mut self) {
        self.presenter
            .play_intro(&mut self.board.display, &mut self.board.delay)
            .await;
        self.setup_level().await;
    }

    /// Shows the level number, deals a fresh design and draws it.
    pub async fn setup_level(&mut self) {
        self.presenter
            .show_level(
                self.engine.level(),
                &mut self.board.display,
                &mut self.board.delay,
            )
            .await;
        self.engine.new_level(&mut self.board.cells);
        self.presenter
            .show_grid(&self.engine, &mut self.board.display)
            .await;
    }

    /// Plays a player move and redraws. Clearing the grid runs the intro
    /// animation and deals the next level before returning.
    pub async fn press(&mut self, cell: Cell) -> MoveOutcome {
        let outcome = self.engine.press(cell);
        self.presenter
            .show_grid(&self.engine, &mut self.board.display)
            .await;

        if outcome.is_cleared() {
            self.presenter
                .play_intro(&mut self.board.display, &mut self.board.delay)
                .await;
            self.setup_level().await;
        }

        outcome
    }

    /// Redraws the level indicator and the grid after the board was flipped.
    /// With [`TiltAction::RestartLevel`] the current design is dealt again first.
    pub async fn recenter_on_tilt(&mut self) {
        if self.config.tilt_action == TiltAction::RestartLevel {
            self.engine.restart_level();
        }

        self.presenter
            .show_level(
                self.engine.level(),
                &mut self.board.display,
                &mut self.board.delay,
            )
            .await;
        self.presenter
            .show_grid(&self.engine, &mut self.board.display)
            .await;
    }

    /// One pass of the loop: new presses, then the tilt check, then the poll sleep.
    pub async fn step(&mut self) -> StepReport {
        let mut report = StepReport::default();

        let pressed = self.edges.update(self.board.keys.pressed_keys().await);
        for cell in pressed.iter() {
            report.presses += 1;
            if self.press(cell).await.is_cleared() {
                report.cleared += 1;
            }
        }

        match self.board.accel.acceleration() {
            Ok(acceleration) => {
                if self.tilt.update(acceleration.z) {
                    #[cfg(feature = "defmt")]
                    info!("Tilt, polarity now {}", self.tilt.polarity());

                    report.tilted = true;
                    self.recenter_on_tilt().await;
                }
            }
            Err(_err) => {
                #[cfg(feature = "defmt")]
                warn!("Accelerometer read failed: {}", defmt::Debug2Format(&_err));

                report.sensor_fault = true;
            }
        }

        self.board
            .delay
            .delay_ms(self.config.poll_interval_ms)
            .await;
        report
    }

    /// Starts the game and polls forever.
    pub async fn run(mut self) {
        self.start().await;
        loop {
            self.step().await;
        }
    }
}
