//! The move initiator and the turn engine.
//!
//! ## Transitions
//!
//! Two pure transitions drive the whole game. [`start_turn`] commits a
//! player's move and arms the sowing sequence; [`step`] performs one
//! simulation tick. Both consume a [`GameState`] and return the successor
//! state; invalid input returns the state unchanged — there is nothing to
//! recover from in a closed integer simulation, so no transition faults.
//!
//! ## The tick decision list
//!
//! `step` evaluates an ordered list; the first matching rule fires and the
//! rest are skipped for that tick:
//!
//! 1. **Sow** — seeds remain in hand: drop one on the cursor cell, move on.
//! 2. **Chain pickup** — the hand ran out on a cell holding fewer than a
//!    quan's worth: lift it and keep sowing.
//! 3. **Capture** — the hand ran out on an empty cell with a non-empty
//!    neighbor ahead: claim the neighbor's whole value. This is how a
//!    hoard's quan is taken.
//! 4. **Closing sweep** — both quan are gone: remaining dân go to their
//!    owners and the game ends.
//! 5. **Handover** — the turn is spent: the opponent is up, fed first if
//!    their row is bare.

use crate::core::board::{Board, Direction};
use crate::core::cell::QUAN_UNIT;
use crate::core::player::PlayerId;
use crate::core::state::GameState;
use crate::core::{GameEvent, Move};

/// Points docked from a starved player when their row is refilled.
pub const FEEDING_PENALTY: i64 = 5;

/// Result of a completed game.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameResult {
    /// Single winner by score.
    Winner(PlayerId),
    /// Equal scores.
    Draw,
}

impl GameResult {
    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        matches!(self, GameResult::Winner(p) if *p == player)
    }
}

/// Commit a player's move: lift the source cell into hand and arm the
/// sowing sequence.
///
/// Returns the state unchanged unless all preconditions hold:
/// no turn is already active, `mv.source` is a dân cell owned by the
/// current player, and that cell is non-empty.
#[must_use]
pub fn start_turn(mut state: GameState, mv: Move) -> GameState {
    if state.turn_active {
        return state;
    }
    if !Board::is_dan_cell(mv.source, state.current_player) {
        return state;
    }
    if state.board.get(mv.source) <= 0 {
        return state;
    }

    let seeds = state.board.lift(mv.source);
    state.in_hand = seeds;
    state.cursor = Board::advance(mv.source, 1, mv.direction);
    state.direction = mv.direction;
    state.turn_ended = false;
    state.turn_active = true;
    state.record(GameEvent::TurnStarted {
        turn: state.turn_number,
        player: state.current_player,
        source: mv.source,
        direction: mv.direction,
        seeds,
    });
    state
}

/// Perform one simulation tick.
///
/// A no-op while no turn is active. Each tick mutates only the fields its
/// rule names; everything else carries forward unchanged.
#[must_use]
pub fn step(mut state: GameState) -> GameState {
    if !state.turn_active {
        return state;
    }

    // Rule 1: sow one seed.
    if state.in_hand > 0 {
        state.board.sow_one(state.cursor);
        state.in_hand -= 1;
        state.cursor = Board::advance(state.cursor, 1, state.direction);
        return state;
    }

    // Rule 2: chain pickup. The test is on the value alone: any cell still
    // under a quan's worth can be lifted, including a captured hoard
    // holding leftover dân. A capture earlier in the turn closes the chain.
    let landed = state.board.get(state.cursor);
    if landed > 0 && landed < QUAN_UNIT && !state.turn_ended {
        state.in_hand = state.board.lift(state.cursor);
        state.cursor = Board::advance(state.cursor, 1, state.direction);
        return state;
    }

    // Rule 3: capture. Landing empty with a non-empty cell ahead claims
    // that cell whole, quan component included. The cursor skips past the
    // claimed cell, so an empty/non-empty pair there captures again next
    // tick.
    let target = Board::advance(state.cursor, 1, state.direction);
    if landed == 0 && state.board.get(target) > 0 {
        let player = state.current_player;
        let value = state.board.lift(target);
        state.scores[player] += value;
        state.cursor = Board::advance(state.cursor, 2, state.direction);
        state.turn_ended = true;
        state.record(GameEvent::Capture {
            player,
            cell: target,
            value,
        });
        return state;
    }

    // Rule 4: closing sweep. Once both quan are captured, every dân cell
    // pays out to its owner and the game is over. Seeds sitting in a hoard
    // cell stay where they are and score for no one.
    if !state.board.hoard_has_quan(PlayerId::new(0)) && !state.board.hoard_has_quan(PlayerId::new(1))
    {
        for player in PlayerId::all() {
            for i in Board::dan_cells(player) {
                let seeds = state.board.lift(i);
                state.scores[player] += seeds;
            }
        }
        state.cursor = 0;
        state.in_hand = 0;
        state.turn_active = false;
        state.turn_ended = true;
        state.record(GameEvent::GameOver);
        return state;
    }

    // Rule 5: handover. A starved opponent is fed first: five points out of
    // their score, one fresh seed into each of their dân cells.
    let next = state.current_player.opponent();
    if state.board.is_starved(next) {
        state.scores[next] -= FEEDING_PENALTY;
        for i in Board::dan_cells(next) {
            state.board.set(i, 1);
        }
        state.record(GameEvent::Replenish { player: next });
    }
    state.cursor = 0;
    state.in_hand = 0;
    state.turn_active = false;
    state.turn_ended = true;
    state.current_player = next;
    state.turn_number += 1;
    state
}

/// Every move `start_turn` would accept in this state.
///
/// Empty while a turn is active and after the closing sweep (every dân
/// cell is bare by then). The intended way for a UI to pre-validate input.
#[must_use]
pub fn legal_moves(state: &GameState) -> Vec<Move> {
    if state.turn_active {
        return Vec::new();
    }

    let player = state.current_player;
    let mut moves = Vec::new();
    for source in Board::dan_cells(player) {
        if state.board.get(source) > 0 {
            for direction in Direction::all() {
                moves.push(Move::new(source, direction));
            }
        }
    }
    moves
}

/// Check if the game is over.
///
/// Returns `Some(result)` once the closing sweep has run, `None` while the
/// game continues (including mid-turn states where both quan are already
/// captured but the sweep has not yet settled the board).
#[must_use]
pub fn result(state: &GameState) -> Option<GameResult> {
    if !state.is_game_over() {
        return None;
    }

    let p0 = PlayerId::new(0);
    let p1 = PlayerId::new(1);
    match state.score_of(p0).cmp(&state.score_of(p1)) {
        std::cmp::Ordering::Greater => Some(GameResult::Winner(p0)),
        std::cmp::Ordering::Less => Some(GameResult::Winner(p1)),
        std::cmp::Ordering::Equal => Some(GameResult::Draw),
    }
}
