//! Runtime tuning. Defaults match the shipped device.

/// What a tilt crossing does besides redrawing.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TiltAction {
    /// Show the level indicator and the unchanged grid again.
    #[default]
    Redisplay,
    /// Deal the current design again, then redisplay.
    RestartLevel,
}

/// Game loop and presentation settings.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Config {
    /// LED brightness, 0..=255.
    pub brightness: u8,
    /// Sleep between input polls.
    pub poll_interval_ms: u32,
    /// Intro animation frame time.
    pub frame_ms: u32,
    /// Hold after the last intro frame.
    pub intro_hold_ms: u32,
    /// How long the level indicator stays up.
    pub level_hold_ms: u32,
    /// A rounded vertical reading times the polarity below this counts as a tilt.
    pub tilt_threshold: i32,
    pub tilt_action: TiltAction,
}

impl Config {
    pub const DEFAULT: Self = Self {
        brightness: 51,
        poll_interval_ms: 100,
        frame_ms: 100,
        intro_hold_ms: 500,
        level_hold_ms: 500,
        tilt_threshold: -2,
        tilt_action: TiltAction::Redisplay,
    };

    #[must_use]
    pub const fn with_brightness(mut self, brightness: u8) -> Self {
        self.brightness = brightness;
        self
    }

    #[must_use]
    pub const fn with_poll_interval_ms(mut self, poll_interval_ms: u32) -> Self {
        self.poll_interval_ms = poll_interval_ms;
        self
    }

    #[must_use]
    pub const fn with_frame_ms(mut self, frame_ms: u32) -> Self {
        self.frame_ms = frame_ms;
        self
    }

    #[must_use]
    pub const fn with_intro_hold_ms(mut self, intro_hold_ms: u32) -> Self {
        self.intro_hold_ms = intro_hold_ms;
        self
    }

    #[must_use]
    pub const fn with_level_hold_ms(mut self, level_hold_ms: u32) -> Self {
        self.level_hold_ms = level_hold_ms;
        self
    }

    #[must_use]
    pub const fn with_tilt_threshold(mut self, tilt_threshold: i32) -> Self {
        self.tilt_threshold = tilt_threshold;
        self
    }

    #[must_use]
    pub const fn with_tilt_action(mut self, tilt_action: TiltAction) -> Self {
        self.tilt_action = tilt_action;
        self
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::DEFAULT
    }
}
