//! One pattern's lifecycle: reset, batched generation, idle, restart.
//!
//! ```text
//! reset ──> Generating ──budget reached──> IdlePaused            (custom)
//!                                      └─> IdleCountdown(15s) ──0──> reset
//! ```
//!
//! `pause` is orthogonal to the lifecycle: it freezes batches and the
//! countdown without touching any state.

use crate::attractor::{Coefficients, SimulationState};
use crate::bounds::Bounds;
use crate::color::{Palette, BACKGROUND, PIXEL_ALPHA};
use crate::config::{GenerationMode, PatternConfig, COUNTDOWN_SECONDS, FRAMES_PER_SECOND};
use crate::console_log;
use crate::error::PatternResult;
use crate::rng::{entropy_seed, PatternRng};
use crate::surface::{check_dimensions, AccumulationBuffer, Surface};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Lifecycle {
    Generating,
    /// Finished a custom pattern; stays until the next reset.
    IdlePaused,
    /// Finished a default pattern; restarts when `seconds` reaches zero.
    IdleCountdown { seconds: u32 },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Progress {
    Percent(u8),
    Complete,
}

impl Progress {
    pub fn percent(&self) -> u8 {
        match self {
            Progress::Percent(p) => *p,
            Progress::Complete => 100,
        }
    }

    /// Status line text; blank once the pattern is complete.
    pub fn label(&self) -> String {
        match self {
            Progress::Percent(p) => format!("Generating pattern... {}%", p),
            Progress::Complete => String::new(),
        }
    }
}

pub struct PatternSession<S: Surface = AccumulationBuffer> {
    surface: S,
    rng: PatternRng,
    config: PatternConfig,
    seed: u64,
    coefficients: Coefficients,
    palette: Palette,
    state: SimulationState,
    bounds: Bounds,
    lifecycle: Lifecycle,
    suspended: bool,
    idle_frames: u32,
}

impl<S: Surface> PatternSession<S> {
    /// Start a session on `surface` with a first pattern from `config`.
    pub fn new(surface: S, config: PatternConfig) -> PatternResult<Self> {
        let (width, height) = surface.dimensions();
        check_dimensions(width, height)?;
        config.validate()?;

        let seed = config.seed.unwrap_or_else(entropy_seed);
        let mut rng = PatternRng::seeded(seed);
        let coefficients = Coefficients::generate(config.family, &mut rng);
        let palette = Palette::pick(&mut rng, config.saturation, config.brightness);

        let mut session = Self {
            surface,
            rng,
            config,
            seed,
            coefficients,
            palette,
            state: SimulationState::default(),
            bounds: Bounds::default(),
            lifecycle: Lifecycle::Generating,
            suspended: false,
            idle_frames: 0,
        };
        session.surface.clear(BACKGROUND);
        session.log_start();
        Ok(session)
    }

    /// Throw away the current pattern and start generating a new one.
    ///
    /// The configuration is checked first; on error nothing changes.
    pub fn reset_pattern(&mut self, config: PatternConfig) -> PatternResult<()> {
        let (width, height) = self.surface.dimensions();
        if let Err(err) = check_dimensions(width, height).and_then(|_| config.validate()) {
            console_log!("Pattern rejected: {}", err);
            return Err(err);
        }

        self.seed = config.seed.unwrap_or_else(entropy_seed);
        self.rng.reseed(self.seed);
        self.coefficients = Coefficients::generate(config.family, &mut self.rng);
        self.palette = Palette::pick(&mut self.rng, config.saturation, config.brightness);
        self.config = config;

        self.surface.clear(BACKGROUND);
        self.state.reset();
        self.bounds.reset();
        self.lifecycle = Lifecycle::Generating;
        self.suspended = false;
        self.idle_frames = 0;
        self.log_start();
        Ok(())
    }

    /// Run up to `batch_size` attractor steps, never past the budget.
    pub fn run_batch(&mut self, batch_size: u64) -> Progress {
        if self.lifecycle != Lifecycle::Generating || self.suspended {
            return self.progress();
        }

        let (width, height) = self.surface.dimensions();
        let remaining = self.config.iteration_budget - self.state.iterations_done;
        for _ in 0..batch_size.min(remaining) {
            let (x, y) = self.coefficients.step(&mut self.state);
            let color = self
                .palette
                .blend(x - self.state.prev_x, y - self.state.prev_y);

            self.bounds.observe(x, y);
            let (px, py) = self.bounds.project(x, y, width, height);
            self.surface.accumulate(px, py, color, PIXEL_ALPHA);

            self.state.prev_x = x;
            self.state.prev_y = y;
            self.state.iterations_done += 1;
        }

        if self.state.iterations_done >= self.config.iteration_budget {
            self.finish();
        }
        self.progress()
    }

    /// One countdown second. Starts the next pattern when it runs out.
    pub fn tick(&mut self) -> PatternResult<()> {
        if self.suspended {
            return Ok(());
        }
        if let Lifecycle::IdleCountdown { seconds } = self.lifecycle {
            let seconds = seconds.saturating_sub(1);
            self.lifecycle = Lifecycle::IdleCountdown { seconds };
            if seconds == 0 {
                self.reset_pattern(self.config.clone())?;
            }
        }
        Ok(())
    }

    /// One host frame: a batch while generating, otherwise a share of a
    /// countdown second.
    pub fn advance_frame(&mut self, batch_size: u64) -> PatternResult<()> {
        if self.suspended {
            return Ok(());
        }
        match self.lifecycle {
            Lifecycle::Generating => {
                self.run_batch(batch_size);
            }
            Lifecycle::IdleCountdown { .. } => {
                self.idle_frames += 1;
                if self.idle_frames % FRAMES_PER_SECOND == 0 {
                    self.tick()?;
                }
            }
            Lifecycle::IdlePaused => {}
        }
        Ok(())
    }

    pub fn pause(&mut self) {
        self.suspended = true;
    }

    pub fn resume(&mut self) {
        self.suspended = false;
    }

    /// Returns whether the session is paused afterwards.
    pub fn toggle_pause(&mut self) -> bool {
        self.suspended = !self.suspended;
        self.suspended
    }

    fn finish(&mut self) {
        self.lifecycle = match self.config.mode {
            GenerationMode::Custom => Lifecycle::IdlePaused,
            GenerationMode::Default => Lifecycle::IdleCountdown {
                seconds: COUNTDOWN_SECONDS,
            },
        };
        self.idle_frames = 0;
        console_log!(
            "Pattern {} finished after {} iterations",
            self.seed,
            self.state.iterations_done
        );
    }

    fn log_start(&self) {
        console_log!(
            "New {} pattern: seed {}, {} iterations",
            self.config.family,
            self.seed,
            self.config.iteration_budget
        );
    }

    pub fn progress(&self) -> Progress {
        let percent = self.state.iterations_done * 100 / self.config.iteration_budget;
        if percent >= 100 {
            Progress::Complete
        } else {
            Progress::Percent(percent as u8)
        }
    }

    pub fn status_label(&self) -> String {
        if self.suspended {
            return "Generation paused".to_string();
        }
        match self.lifecycle {
            Lifecycle::Generating | Lifecycle::IdlePaused => self.progress().label(),
            Lifecycle::IdleCountdown { seconds } => format!("New pattern in {} s", seconds),
        }
    }

    pub fn pause_label(&self) -> &'static str {
        if self.suspended {
            "Resume generation"
        } else {
            "Pause generation"
        }
    }

    pub fn seed_label(&self) -> String {
        format!("Seed: {}", self.seed)
    }

    pub fn lifecycle(&self) -> Lifecycle {
        self.lifecycle
    }

    pub fn is_generating(&self) -> bool {
        self.lifecycle == Lifecycle::Generating
    }

    pub fn is_suspended(&self) -> bool {
        self.suspended
    }

    pub fn iterations_done(&self) -> u64 {
        self.state.iterations_done
    }

    pub fn state(&self) -> &SimulationState {
        &self.state
    }

    pub fn bounds(&self) -> &Bounds {
        &self.bounds
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    pub fn coefficients(&self) -> &Coefficients {
        &self.coefficients
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn config(&self) -> &PatternConfig {
        &self.config
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }
}
