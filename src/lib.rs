//! # oan-quan
//!
//! A two-player engine for the Vietnamese board game Ô Ăn Quan.
//!
//! ## Design Principles
//!
//! 1. **State as a value**: the whole game is one [`GameState`] threaded
//!    through pure transitions. Each transition either applies or is a
//!    defined no-op; nothing faults and nothing is partially applied.
//!
//! 2. **One input, then clockwork**: a player contributes exactly one
//!    [`Move`] per turn. Everything after `start_turn` — sowing, chained
//!    pickups, captures, the closing sweep, starvation feeding — is fully
//!    determined, one rule per tick.
//!
//! 3. **Combined-value cells**: every cell and score is a single `i64`
//!    mixing quan (hundreds) and dân (remainder), because captures and the
//!    end-of-game check move the combined value atomically.
//!
//! ## Driving the engine
//!
//! A UI renders the projections, commits moves, and lets a [`Scheduler`]
//! pace the ticks; a test or analysis harness calls [`step`] directly:
//!
//! ```
//! use oan_quan::{start_turn, step, Direction, GameState, Move};
//!
//! let mut state = start_turn(GameState::new(), Move::new(1, Direction::Clockwise));
//! while state.is_turn_active() {
//!     state = step(state);
//! }
//! assert_eq!(state.current_player().index(), 1);
//! ```
//!
//! ## Modules
//!
//! - `core`: players, cell encoding, the board ring, moves, game state
//! - `rules`: move validation and the tick decision list
//! - `scheduler`: fixed-cadence tick driver

pub mod core;
pub mod rules;
pub mod scheduler;

// Re-export commonly used types
pub use crate::core::{
    dan, encode, quan, Board, Direction, GameEvent, GameState, Move, PlayerId, PlayerPair,
    BOARD_SIZE, CELLS_PER_PLAYER, INITIAL_DAN, PLAYER_COUNT, QUAN_UNIT,
};

pub use crate::rules::{legal_moves, result, start_turn, step, GameResult, FEEDING_PENALTY};

pub use crate::scheduler::{Scheduler, DEFAULT_TICK_MS};
