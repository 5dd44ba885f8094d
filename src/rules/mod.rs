//! The rules layer: move validation and the tick-driven turn engine.

pub mod engine;

pub use engine::{legal_moves, result, start_turn, step, GameResult, FEEDING_PENALTY};
