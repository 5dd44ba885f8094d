//! Fixed-cadence tick driver.
//!
//! While a turn is active the engine wants exactly one [`step`] per
//! wall-clock interval — the pace at which seeds visibly hop around the
//! board. The `Scheduler` owns that cadence and nothing else: it holds no
//! game logic, never reorders or batches ticks, and goes quiet the moment
//! the turn completes.
//!
//! A UI event loop calls [`Scheduler::poll`] every frame; a headless
//! driver can block on [`Scheduler::run_turn`]. Tests that do not care
//! about time drive [`step`] directly.

use std::time::{Duration, Instant};

use crate::core::GameState;
use crate::rules::step;

/// Default tick interval in milliseconds: one sown seed per second.
pub const DEFAULT_TICK_MS: u64 = 1000;

/// Issues one engine step per elapsed interval while a turn is active.
#[derive(Debug)]
pub struct Scheduler {
    interval: Duration,
    last_step: Instant,
}

impl Scheduler {
    /// A scheduler stepping once per `interval`.
    #[must_use]
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            last_step: Instant::now(),
        }
    }

    /// The configured tick interval.
    #[must_use]
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Re-arm the interval, e.g. right after the UI commits a move, so the
    /// first sowing step lands a full tick later.
    pub fn reset(&mut self) {
        self.last_step = Instant::now();
    }

    /// Whether the next tick is due: a turn is active and the interval has
    /// elapsed since the last issued step.
    #[must_use]
    pub fn ready(&self, state: &GameState) -> bool {
        state.is_turn_active() && self.last_step.elapsed() >= self.interval
    }

    /// Issue at most one step. Returns the state unchanged when idle or
    /// when the interval has not yet elapsed.
    #[must_use]
    pub fn poll(&mut self, state: GameState) -> GameState {
        if self.ready(&state) {
            self.last_step = Instant::now();
            step(state)
        } else {
            state
        }
    }

    /// Drive the active turn to completion, sleeping one interval between
    /// steps. Returns immediately if no turn is active.
    #[must_use]
    pub fn run_turn(&mut self, mut state: GameState) -> GameState {
        while state.is_turn_active() {
            std::thread::sleep(self.interval);
            self.last_step = Instant::now();
            state = step(state);
        }
        state
    }
}

impl Default for Scheduler {
    fn default() -> Self {
        Self::new(Duration::from_millis(DEFAULT_TICK_MS))
    }
}
