//! Core domain types for tic-tac-toe.

use crate::error::RulesError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Number of rows and columns on the board.
pub const SIZE: usize = 3;

/// Player in the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
pub enum Player {
    /// Player X (goes first, maximizes utility).
    X,
    /// Player O (goes second, minimizes utility).
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Character used for this player's mark in board text.
    pub fn symbol(self) -> char {
        match self {
            Player::X => 'X',
            Player::O => 'O',
        }
    }
}

/// A cell on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    /// Empty cell.
    #[default]
    Empty,
    /// Cell holding a player's mark.
    Occupied(Player),
}

impl Cell {
    /// Returns true if no mark has been placed here.
    pub fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// Returns the owner of the mark, if any.
    pub fn player(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(player) => Some(player),
        }
    }

    fn symbol(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Occupied(player) => player.symbol(),
        }
    }
}

/// 3x3 tic-tac-toe board.
///
/// Boards are plain values. Nothing mutates a board once it is built;
/// playing a move produces a new board (see [`crate::apply_move`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Board {
    /// Cells indexed `[row][col]`.
    cells: [[Cell; SIZE]; SIZE],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            cells: [[Cell::Empty; SIZE]; SIZE],
        }
    }

    /// Builds a board from explicit rows.
    ///
    /// No reachability check is made; use [`crate::invariants`] for that.
    pub fn from_rows(cells: [[Cell; SIZE]; SIZE]) -> Self {
        Self { cells }
    }

    /// Gets the cell at the given coordinate.
    ///
    /// # Errors
    ///
    /// Returns [`RulesError::OutOfRange`] if `row` or `col` is not in 0..=2.
    pub fn cell_at(&self, row: usize, col: usize) -> Result<Cell, RulesError> {
        self.cells
            .get(row)
            .and_then(|r| r.get(col))
            .copied()
            .ok_or(RulesError::OutOfRange { row, col })
    }

    /// Iterates over `(row, col, cell)` in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize, Cell)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .flat_map(|(row, r)| r.iter().enumerate().map(move |(col, &c)| (row, col, c)))
    }

    /// Counts the marks placed by `player`.
    pub fn count(&self, player: Player) -> usize {
        self.cells()
            .filter(|&(_, _, c)| c == Cell::Occupied(player))
            .count()
    }

    /// Counts the empty cells.
    pub fn empty_count(&self) -> usize {
        self.cells().filter(|&(_, _, c)| c.is_empty()).count()
    }

    /// Checks if every cell holds a mark.
    pub fn is_full(&self) -> bool {
        self.empty_count() == 0
    }

    /// Returns a copy of this board with `cell` written at an in-range coordinate.
    pub(crate) fn with_cell(mut self, row: usize, col: usize, cell: Cell) -> Self {
        self.cells[row][col] = cell;
        self
    }

    /// Direct indexing for coordinates already known to be in range.
    pub(crate) fn at(&self, row: usize, col: usize) -> Cell {
        self.cells[row][col]
    }
}

/// Returns the initial board with all nine cells empty.
pub fn empty_board() -> Board {
    Board::new()
}

/// Returns the cell at `(row, col)`.
///
/// # Errors
///
/// Returns [`RulesError::OutOfRange`] for coordinates outside 0..=2.
pub fn cell_at(board: &Board, row: usize, col: usize) -> Result<Cell, RulesError> {
    board.cell_at(row, col)
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, cells) in self.cells.iter().enumerate() {
            for (col, cell) in cells.iter().enumerate() {
                write!(f, "{}", cell.symbol())?;
                if col < SIZE - 1 {
                    write!(f, "|")?;
                }
            }
            if row < SIZE - 1 {
                write!(f, "\n-+-+-\n")?;
            }
        }
        Ok(())
    }
}

impl FromStr for Board {
    type Err = RulesError;

    /// Parses three rows of `X`, `O` and `.` (`_` or a space also means
    /// empty), separated by `/` or newlines, for example `"XO./.X./..O"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = |reason: String| RulesError::MalformedBoard {
            input: s.to_string(),
            reason,
        };

        let rows: Vec<&str> = s
            .split(['/', '\n'])
            .map(|r| r.trim_end_matches('\r'))
            .filter(|r| !r.is_empty())
            .collect();
        if rows.len() != SIZE {
            return Err(malformed(format!("expected 3 rows, found {}", rows.len())));
        }

        let mut cells = [[Cell::Empty; SIZE]; SIZE];
        for (row, text) in rows.iter().enumerate() {
            let symbols: Vec<char> = text.chars().collect();
            if symbols.len() != SIZE {
                return Err(malformed(format!(
                    "row {} has {} cells, expected 3",
                    row,
                    symbols.len()
                )));
            }
            for (col, symbol) in symbols.into_iter().enumerate() {
                cells[row][col] = match symbol.to_ascii_uppercase() {
                    'X' => Cell::Occupied(Player::X),
                    'O' => Cell::Occupied(Player::O),
                    '.' | '_' | ' ' => Cell::Empty,
                    other => {
                        return Err(malformed(format!(
                            "unexpected {:?} at ({}, {})",
                            other, row, col
                        )));
                    }
                };
            }
        }

        Ok(Board::from_rows(cells))
    }
}
