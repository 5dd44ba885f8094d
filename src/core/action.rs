//! Player input and history records.
//!
//! The engine accepts exactly one kind of input: a `Move`, the choice of a
//! source cell and a sowing direction. Everything that happens after a move
//! is committed is fully determined by the turn engine.
//!
//! `GameEvent` entries accumulate in the state's history as turns play out,
//! for replay, debugging, and UI display.

use serde::{Deserialize, Serialize};

use super::board::Direction;
use super::player::PlayerId;

/// A player's choice of source cell and sowing direction.
///
/// ## Example
///
/// ```
/// use oan_quan::core::{Direction, Move};
///
/// let mv = Move::new(1, Direction::Clockwise);
/// assert_eq!(mv.source, 1);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The dân cell to lift.
    pub source: usize,

    /// Which way to sow around the ring.
    pub direction: Direction,
}

impl Move {
    /// Create a move.
    #[must_use]
    pub const fn new(source: usize, direction: Direction) -> Self {
        Self { source, direction }
    }
}

/// A recorded game event with the context needed to replay or display it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A move was committed and sowing began.
    TurnStarted {
        /// Turn number the move belongs to.
        turn: u32,
        /// The seat that moved.
        player: PlayerId,
        /// The lifted cell.
        source: usize,
        /// Sowing direction.
        direction: Direction,
        /// Seeds taken into hand.
        seeds: i64,
    },

    /// A cell's whole counter was claimed.
    Capture {
        /// The capturing seat.
        player: PlayerId,
        /// The emptied cell.
        cell: usize,
        /// The combined value claimed, quan component included.
        value: i64,
    },

    /// A starved player was docked five points and each of their dân cells
    /// refilled with one seed.
    Replenish {
        /// The fed seat.
        player: PlayerId,
    },

    /// Both quan are gone and the closing sweep ran; no further turns occur.
    GameOver,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_basics() {
        let mv = Move::new(3, Direction::Counterclockwise);
        assert_eq!(mv.source, 3);
        assert_eq!(mv.direction, Direction::Counterclockwise);
    }

    #[test]
    fn test_event_serialization() {
        let event = GameEvent::Capture {
            player: PlayerId::new(0),
            cell: 6,
            value: 103,
        };
        let json = serde_json::to_string(&event).unwrap();
        let deserialized: GameEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(event, deserialized);
    }
}
