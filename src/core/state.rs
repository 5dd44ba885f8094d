//! Game state: the board, scores, and turn machinery.
//!
//! A `GameState` is a single value threaded through the pure transitions in
//! [`crate::rules`]: `start_turn` commits a player's move, `step` performs
//! one simulation tick. Nothing in the state is hidden from the UI; every
//! field is exposed through a read-only projection.
//!
//! The event history uses an `im` persistent vector so cloning a state
//! stays O(board) no matter how long the game has run.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::action::GameEvent;
use super::board::{Board, Direction};
use super::player::{PlayerId, PlayerPair};

/// Complete game state.
///
/// Created once at game start by [`GameState::new`] and mutated exclusively
/// by the rules transitions; a reset is simply a fresh `new()`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    /// The ring of cells.
    pub(crate) board: Board,

    /// Running score per seat, in the combined quan/dân encoding.
    pub(crate) scores: PlayerPair<i64>,

    /// The seat whose turn it is (or whose turn just played out).
    pub(crate) current_player: PlayerId,

    /// Board index the next tick acts on.
    pub(crate) cursor: usize,

    /// Seeds currently being sown.
    pub(crate) in_hand: i64,

    /// Sowing direction of the turn in flight.
    pub(crate) direction: Direction,

    /// The turn reached a terminal rule (capture, sweep, or handover).
    pub(crate) turn_ended: bool,

    /// An automated sowing sequence is stepping.
    pub(crate) turn_active: bool,

    /// Turn number, starting at 1; advances at handover.
    pub(crate) turn_number: u32,

    /// Append-only record of notable transitions.
    pub(crate) history: Vector<GameEvent>,
}

impl GameState {
    /// The fixed starting configuration: a quan in each hoard, 5 dân in
    /// every other cell, scores 0, player 0 to move, idle.
    #[must_use]
    pub fn new() -> Self {
        Self::from_board(Board::new(), PlayerId::new(0))
    }

    /// An idle state over a custom position, for tests and analysis.
    ///
    /// Scores start at 0 and the history is empty.
    #[must_use]
    pub fn from_board(board: Board, current_player: PlayerId) -> Self {
        Self {
            board,
            scores: PlayerPair::with_value(0),
            current_player,
            cursor: 0,
            in_hand: 0,
            direction: Direction::Clockwise,
            turn_ended: false,
            turn_active: false,
            turn_number: 1,
            history: Vector::new(),
        }
    }

    // === Projections ===

    /// The board.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Both scores.
    #[must_use]
    pub fn scores(&self) -> &PlayerPair<i64> {
        &self.scores
    }

    /// One player's score.
    #[must_use]
    pub fn score_of(&self, player: PlayerId) -> i64 {
        self.scores[player]
    }

    /// The seat whose turn it is.
    #[must_use]
    pub fn current_player(&self) -> PlayerId {
        self.current_player
    }

    /// Board index the next tick acts on. Meaningful only mid-turn.
    #[must_use]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Seeds currently in hand. Positive only while a turn is active.
    #[must_use]
    pub fn in_hand(&self) -> i64 {
        self.in_hand
    }

    /// Sowing direction of the turn in flight.
    #[must_use]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Whether the turn in flight has reached a terminal rule.
    #[must_use]
    pub fn turn_ended(&self) -> bool {
        self.turn_ended
    }

    /// Whether an automated sowing sequence is stepping.
    #[must_use]
    pub fn is_turn_active(&self) -> bool {
        self.turn_active
    }

    /// Turn number, starting at 1.
    #[must_use]
    pub fn turn_number(&self) -> u32 {
        self.turn_number
    }

    /// The event history, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<GameEvent> {
        &self.history
    }

    /// Whether the closing sweep has run.
    ///
    /// Both quan may already be captured while a turn is still stepping;
    /// the game is over only once that turn's sweep has settled the board.
    #[must_use]
    pub fn is_game_over(&self) -> bool {
        !self.turn_active
            && !self.board.hoard_has_quan(PlayerId::new(0))
            && !self.board.hoard_has_quan(PlayerId::new(1))
    }

    /// Everything still in play: the board, the hand, and both scores.
    ///
    /// Constant across every transition (the feeding rule moves five
    /// points from the fed player's score onto the board as seeds).
    #[must_use]
    pub fn total_value(&self) -> i64 {
        self.board.total() + self.in_hand + self.scores[PlayerId::new(0)] + self.scores[PlayerId::new(1)]
    }

    // === History ===

    /// Append an event to the history.
    pub(crate) fn record(&mut self, event: GameEvent) {
        self.history.push_back(event);
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let state = GameState::new();

        assert_eq!(
            state.board().cells(),
            &[100, 5, 5, 5, 5, 5, 100, 5, 5, 5, 5, 5]
        );
        assert_eq!(state.score_of(PlayerId::new(0)), 0);
        assert_eq!(state.score_of(PlayerId::new(1)), 0);
        assert_eq!(state.current_player(), PlayerId::new(0));
        assert_eq!(state.in_hand(), 0);
        assert!(!state.is_turn_active());
        assert!(!state.turn_ended());
        assert_eq!(state.turn_number(), 1);
        assert!(state.history().is_empty());
        assert!(!state.is_game_over());
        assert_eq!(state.total_value(), 250);
    }

    #[test]
    fn test_from_board_custom_position() {
        let board = Board::from_cells([50, 0, 0, 0, 0, 0, 40, 0, 0, 0, 0, 0]);
        let state = GameState::from_board(board, PlayerId::new(1));

        assert_eq!(state.current_player(), PlayerId::new(1));
        assert_eq!(state.total_value(), 90);
        // Both quan gone and no turn in flight: already over.
        assert!(state.is_game_over());
    }

    #[test]
    fn test_clone_is_independent() {
        let mut state = GameState::new();
        let snapshot = state.clone();

        state.record(GameEvent::GameOver);
        state.scores[PlayerId::new(0)] = 7;

        assert!(snapshot.history().is_empty());
        assert_eq!(snapshot.score_of(PlayerId::new(0)), 0);
    }

    #[test]
    fn test_state_serialization() {
        let state = GameState::new();
        let json = serde_json::to_string(&state).unwrap();
        let deserialized: GameState = serde_json::from_str(&json).unwrap();
        assert_eq!(state, deserialized);
    }
}
