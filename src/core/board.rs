//! The board: a fixed ring of 12 cells.
//!
//! Positions 0 and 6 are the hoard cells, one per player; each starts with
//! a single quan (encoded 100). Positions 1-5 belong to player 0 and 7-11
//! to player 1; each starts with 5 dân. The ring is circular: sowing past
//! either end wraps around.
//!
//! Uses a fixed-size array for O(1) lookup; the board is trivially
//! copyable and never changes length.

use serde::{Deserialize, Serialize};
use std::ops::Index;

use super::cell::{encode, QUAN_UNIT};
use super::player::PlayerId;

/// Number of cells on the ring.
pub const BOARD_SIZE: usize = 12;

/// Dân cells each player owns.
pub const CELLS_PER_PLAYER: usize = 5;

/// Seeds in each dân cell at game start.
pub const INITIAL_DAN: i64 = 5;

/// Sowing direction around the ring.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// Ascending indices.
    Clockwise,
    /// Descending indices.
    Counterclockwise,
}

impl Direction {
    /// Index offset of one step in this direction.
    #[must_use]
    pub const fn offset(self) -> i64 {
        match self {
            Direction::Clockwise => 1,
            Direction::Counterclockwise => -1,
        }
    }

    /// Both directions, for move enumeration.
    pub fn all() -> impl Iterator<Item = Direction> {
        [Direction::Clockwise, Direction::Counterclockwise].into_iter()
    }
}

/// The ring of cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    cells: [i64; BOARD_SIZE],
}

impl Board {
    /// The starting layout: a quan in each hoard, 5 dân in every other cell.
    #[must_use]
    pub fn new() -> Self {
        let mut cells = [INITIAL_DAN; BOARD_SIZE];
        cells[Self::hoard_cell(PlayerId::new(0))] = encode(1, 0);
        cells[Self::hoard_cell(PlayerId::new(1))] = encode(1, 0);
        Self { cells }
    }

    /// Build a board from explicit cell values, for custom positions.
    #[must_use]
    pub fn from_cells(cells: [i64; BOARD_SIZE]) -> Self {
        Self { cells }
    }

    /// The hoard cell index for a player: 0 or 6.
    #[must_use]
    pub const fn hoard_cell(player: PlayerId) -> usize {
        player.index() * (BOARD_SIZE / 2)
    }

    /// Whether `index` is one of the two hoard cells.
    #[must_use]
    pub const fn is_hoard_cell(index: usize) -> bool {
        index % (BOARD_SIZE / 2) == 0
    }

    /// Whether `index` is a dân cell owned by `player`.
    ///
    /// Each player owns the five cells on their side of the ring; the
    /// hoard cells belong to neither for ownership purposes.
    #[must_use]
    pub const fn is_dan_cell(index: usize, player: PlayerId) -> bool {
        index / (BOARD_SIZE / 2) == player.index() && index % (BOARD_SIZE / 2) > 0
    }

    /// Indices of `player`'s dân cells, in ring order.
    pub fn dan_cells(player: PlayerId) -> impl Iterator<Item = usize> {
        let base = Self::hoard_cell(player);
        (base + 1)..=(base + CELLS_PER_PLAYER)
    }

    /// The cell `steps` positions from `index` in `direction`, wrapping.
    #[must_use]
    pub fn advance(index: usize, steps: usize, direction: Direction) -> usize {
        let moved = index as i64 + direction.offset() * steps as i64;
        moved.rem_euclid(BOARD_SIZE as i64) as usize
    }

    /// The value at `index`.
    #[must_use]
    pub fn get(&self, index: usize) -> i64 {
        self.cells[index]
    }

    /// Set the value at `index`.
    pub fn set(&mut self, index: usize, value: i64) {
        self.cells[index] = value;
    }

    /// Take the whole counter at `index`, leaving the cell empty.
    pub fn lift(&mut self, index: usize) -> i64 {
        std::mem::take(&mut self.cells[index])
    }

    /// Drop one seed into the cell at `index`.
    pub fn sow_one(&mut self, index: usize) {
        self.cells[index] += 1;
    }

    /// Whether `player` has no seeds left in any of their dân cells.
    #[must_use]
    pub fn is_starved(&self, player: PlayerId) -> bool {
        Self::dan_cells(player).all(|i| self.cells[i] == 0)
    }

    /// Whether `player`'s hoard still holds its quan.
    #[must_use]
    pub fn hoard_has_quan(&self, player: PlayerId) -> bool {
        self.cells[Self::hoard_cell(player)] >= QUAN_UNIT
    }

    /// Sum of every cell on the board.
    #[must_use]
    pub fn total(&self) -> i64 {
        self.cells.iter().sum()
    }

    /// All cell values, in ring order.
    #[must_use]
    pub fn cells(&self) -> &[i64; BOARD_SIZE] {
        &self.cells
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Index<usize> for Board {
    type Output = i64;

    fn index(&self, index: usize) -> &Self::Output {
        &self.cells[index]
    }
}
